use crate::view_model::{AppViewModel, CountOverlayView, RecordRowView};
use crate::{page_count, page_index_for_offset, BulkSelection, Page, SelectionSet};

/// Page sizes offered by the paginator.
pub const PAGE_SIZE_CHOICES: [u32; 3] = [12, 24, 48];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub page_size: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE_CHOICES[0],
        }
    }
}

impl ViewSettings {
    /// Next (or previous) entry of [`PAGE_SIZE_CHOICES`] relative to `current`.
    pub fn step_page_size(current: u32, larger: bool) -> u32 {
        if larger {
            PAGE_SIZE_CHOICES
                .iter()
                .copied()
                .find(|&size| size > current)
                .unwrap_or(current)
        } else {
            PAGE_SIZE_CHOICES
                .iter()
                .rev()
                .copied()
                .find(|&size| size < current)
                .unwrap_or(current)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    first: u64,
    rows: u32,
    page: Page,
    total: u64,
    loading: bool,
    cursor: usize,
    selection: SelectionSet,
    overlay_open: bool,
    count_input: String,
    bulk: Option<BulkSelection>,
    status: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(ViewSettings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ViewSettings) -> Self {
        Self {
            first: 0,
            rows: settings.page_size.max(1),
            page: Page::empty(),
            total: 0,
            loading: false,
            cursor: 0,
            selection: SelectionSet::new(),
            overlay_open: false,
            count_input: String::new(),
            bulk: None,
            status: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let rows = self
            .page
            .records
            .iter()
            .map(|record| RecordRowView {
                id: record.id,
                checked: self.selection.is_selected(record),
                title: record.title.clone(),
                place_of_origin: record.place_of_origin.clone().unwrap_or_default(),
                artist: record.artist_display.clone().unwrap_or_default(),
                inscriptions: record.inscriptions.clone().unwrap_or_default(),
                date_start: record.date_start,
                date_end: record.date_end,
            })
            .collect::<Vec<_>>();
        let page_all_checked = !rows.is_empty() && rows.iter().all(|row| row.checked);
        let overlay = self.overlay_open.then(|| CountOverlayView {
            input: self.count_input.clone(),
            max: self.total,
            progress: self
                .bulk
                .as_ref()
                .map(|bulk| (bulk.taken(), bulk.requested())),
        });

        AppViewModel {
            rows,
            cursor: self.cursor,
            first: self.first,
            page_size: self.rows,
            page_index: self.page_index(),
            page_count: page_count(self.total, self.rows),
            total_records: self.total,
            loading: self.loading,
            selected_count: self.selection.len(),
            page_all_checked,
            overlay,
            status: self.status.clone(),
            dirty: self.dirty,
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_index(&self) -> u32 {
        page_index_for_offset(self.first, self.rows)
    }

    pub fn page_size(&self) -> u32 {
        self.rows
    }

    pub fn first(&self) -> u64 {
        self.first
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn bulk(&self) -> Option<&BulkSelection> {
        self.bulk.as_ref()
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    /// Moves the view to the page containing `first` at `rows` per page.
    pub(crate) fn set_view(&mut self, first: u64, rows: u32) -> u32 {
        let rows = rows.max(1);
        let page = page_index_for_offset(first, rows);
        self.first = u64::from(page - 1) * u64::from(rows);
        self.rows = rows;
        self.loading = true;
        self.cursor = 0;
        self.mark_dirty();
        page
    }

    pub(crate) fn apply_view_page(&mut self, page: Page) {
        self.total = page.total;
        self.page = page;
        self.loading = false;
        self.cursor = self.cursor.min(self.page.records.len().saturating_sub(1));
        self.mark_dirty();
    }

    pub(crate) fn apply_view_failure(&mut self) {
        self.page = Page::empty();
        self.loading = false;
        self.cursor = 0;
        self.mark_dirty();
    }

    pub(crate) fn move_cursor(&mut self, down: bool) {
        let last = self.page.records.len().saturating_sub(1);
        let next = if down {
            (self.cursor + 1).min(last)
        } else {
            self.cursor.saturating_sub(1)
        };
        if next != self.cursor {
            self.cursor = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn selection_and_page_mut(&mut self) -> (&mut SelectionSet, &Page) {
        (&mut self.selection, &self.page)
    }

    pub(crate) fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    pub(crate) fn set_overlay_open(&mut self, open: bool) {
        if self.overlay_open != open {
            self.overlay_open = open;
            self.mark_dirty();
        }
    }

    pub(crate) fn count_input(&self) -> &str {
        &self.count_input
    }

    pub(crate) fn set_count_input(&mut self, input: String) {
        if self.count_input != input {
            self.count_input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_bulk(&mut self, bulk: Option<BulkSelection>) {
        self.bulk = bulk;
        self.mark_dirty();
    }

    pub(crate) fn take_bulk(&mut self) -> Option<BulkSelection> {
        self.bulk.take()
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
        self.mark_dirty();
    }
}
