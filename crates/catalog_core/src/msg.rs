use crate::{Page, PageRequest, RecordId, TransportError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view became visible; load the current page.
    ViewOpened,
    /// Paginator reported a new offset and/or page size.
    PageChanged { first: u64, rows: u32 },
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// User picked a different page size.
    PageSizeChanged(u32),
    /// Engine finished a page fetch.
    PageLoaded {
        request: PageRequest,
        result: Result<Page, TransportError>,
    },
    CursorUp,
    CursorDown,
    /// Row checkbox clicked.
    RowToggled { id: RecordId },
    /// Header checkbox clicked.
    PageToggled,
    /// The table reported the full set of checked rows on the current page.
    SelectionChanged { checked: Vec<RecordId> },
    /// Header filter icon clicked; shows or hides the count overlay.
    CountOverlayToggled,
    /// User edited the count input.
    CountInputChanged(String),
    /// User pressed Submit in the count overlay.
    CountSubmitted,
    /// Escape: closes the overlay if open, otherwise quits.
    Cancel,
    QuitRequested,
    /// UI/render tick to coalesce rendering.
    Tick,
}
