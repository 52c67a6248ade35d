use crate::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub rows: Vec<RecordRowView>,
    pub cursor: usize,
    pub first: u64,
    pub page_size: u32,
    pub page_index: u32,
    pub page_count: u32,
    pub total_records: u64,
    pub loading: bool,
    pub selected_count: usize,
    pub page_all_checked: bool,
    pub overlay: Option<CountOverlayView>,
    pub status: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRowView {
    pub id: RecordId,
    pub checked: bool,
    pub title: String,
    pub place_of_origin: String,
    pub artist: String,
    pub inscriptions: String,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountOverlayView {
    pub input: String,
    /// Upper bound hint for the input, the source's total record count.
    pub max: u64,
    /// `(taken, requested)` while a bulk selection is running.
    pub progress: Option<(u64, u64)>,
}
