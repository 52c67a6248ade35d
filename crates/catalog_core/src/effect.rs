#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPurpose {
    /// Page shown in the table.
    View,
    /// Page consumed by an in-flight bulk selection.
    BulkSelect,
}

/// One page fetch, echoed back with its result in `Msg::PageLoaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub purpose: FetchPurpose,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage(PageRequest),
    Quit,
}
