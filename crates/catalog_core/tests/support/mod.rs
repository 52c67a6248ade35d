#![allow(dead_code)]

use std::sync::Once;

use catalog_core::{update, AppState, Effect, FetchPurpose, Msg, Page, PageRequest, Record, TransportError};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

/// Simulated source of `total` records with ids 1..=total.
pub fn source_page(page: u32, page_size: u32, total: u64) -> Page {
    let start = u64::from(page - 1) * u64::from(page_size) + 1;
    let end = (start + u64::from(page_size) - 1).min(total);
    let records = (start..=end)
        .map(|id| Record::new(id, format!("Artwork {id}")))
        .collect();
    Page::new(records, total)
}

pub fn fetch_requests(effects: &[Effect]) -> Vec<PageRequest> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::FetchPage(request) => Some(*request),
            Effect::Quit => None,
        })
        .collect()
}

/// Answers every fetch effect from a simulated source of `total` records
/// until no more fetches are requested.
pub fn serve(mut state: AppState, mut effects: Vec<Effect>, total: u64) -> AppState {
    while let Some(request) = fetch_requests(&effects).first().copied() {
        let page = source_page(request.page, request.page_size, total);
        let (next, next_effects) = update(
            state,
            Msg::PageLoaded {
                request,
                result: Ok(page),
            },
        );
        state = next;
        effects = next_effects;
    }
    state
}

pub fn fail(state: AppState, request: PageRequest) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::PageLoaded {
            request,
            result: Err(TransportError::new("connection refused")),
        },
    )
}

/// A state showing page 1 of a source with `total` records.
pub fn opened(total: u64) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::ViewOpened);
    serve(state, effects, total)
}

pub fn view_request(page: u32, page_size: u32) -> PageRequest {
    PageRequest {
        purpose: FetchPurpose::View,
        page,
        page_size,
    }
}

pub fn bulk_request(page: u32, page_size: u32) -> PageRequest {
    PageRequest {
        purpose: FetchPurpose::BulkSelect,
        page,
        page_size,
    }
}
