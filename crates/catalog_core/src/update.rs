use catalog_logging::{catalog_debug, catalog_error, catalog_info, catalog_warn};

use crate::{
    page_count, AppState, BulkOutcome, BulkSelection, BulkStep, Effect, FetchPurpose, Msg, Page,
    PageRequest, TransportError,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ViewOpened => {
            let (first, rows) = (state.first(), state.page_size());
            navigate(&mut state, first, rows)
        }
        Msg::PageChanged { first, rows } => {
            if first == state.first() && rows == state.page_size() {
                Vec::new()
            } else {
                navigate(&mut state, first, rows)
            }
        }
        Msg::NextPage => {
            let last = page_count(state.total(), state.page_size());
            if state.page_index() < last {
                let rows = state.page_size();
                let first = state.first() + u64::from(rows);
                navigate(&mut state, first, rows)
            } else {
                Vec::new()
            }
        }
        Msg::PreviousPage => {
            if state.first() > 0 {
                let rows = state.page_size();
                let first = state.first().saturating_sub(u64::from(rows));
                navigate(&mut state, first, rows)
            } else {
                Vec::new()
            }
        }
        Msg::FirstPage => {
            if state.first() > 0 {
                let rows = state.page_size();
                navigate(&mut state, 0, rows)
            } else {
                Vec::new()
            }
        }
        Msg::LastPage => {
            let rows = state.page_size();
            let last = page_count(state.total(), rows);
            let first = u64::from(last - 1) * u64::from(rows);
            if first != state.first() {
                navigate(&mut state, first, rows)
            } else {
                Vec::new()
            }
        }
        Msg::PageSizeChanged(rows) => {
            if rows == 0 || rows == state.page_size() {
                Vec::new()
            } else {
                let first = state.first();
                navigate(&mut state, first, rows)
            }
        }
        Msg::PageLoaded { request, result } => match request.purpose {
            FetchPurpose::View => {
                apply_view_result(&mut state, request, result);
                Vec::new()
            }
            FetchPurpose::BulkSelect => apply_bulk_result(&mut state, request, result),
        },
        Msg::CursorUp => {
            state.move_cursor(false);
            Vec::new()
        }
        Msg::CursorDown => {
            state.move_cursor(true);
            Vec::new()
        }
        Msg::RowToggled { id } => {
            let (selection, page) = state.selection_and_page_mut();
            selection.toggle(&page.records, id);
            state.mark_dirty();
            Vec::new()
        }
        Msg::PageToggled => {
            let (selection, page) = state.selection_and_page_mut();
            selection.toggle_page(&page.records);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SelectionChanged { checked } => {
            let (selection, page) = state.selection_and_page_mut();
            selection.reconcile_ids(page.ids(), checked);
            state.mark_dirty();
            Vec::new()
        }
        Msg::CountOverlayToggled => {
            let open = !state.is_overlay_open();
            state.set_overlay_open(open);
            Vec::new()
        }
        Msg::CountInputChanged(raw) => {
            if state.bulk().is_none() {
                let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
                state.set_count_input(digits);
            }
            Vec::new()
        }
        Msg::CountSubmitted => submit_count(&mut state),
        Msg::Cancel => {
            if state.is_overlay_open() {
                state.set_overlay_open(false);
                Vec::new()
            } else {
                vec![Effect::Quit]
            }
        }
        Msg::QuitRequested => vec![Effect::Quit],
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

fn navigate(state: &mut AppState, first: u64, rows: u32) -> Vec<Effect> {
    let page = state.set_view(first, rows);
    catalog_debug!("View moved to page={} page_size={}", page, state.page_size());
    vec![Effect::FetchPage(PageRequest {
        purpose: FetchPurpose::View,
        page,
        page_size: state.page_size(),
    })]
}

fn apply_view_result(
    state: &mut AppState,
    request: PageRequest,
    result: Result<Page, TransportError>,
) {
    if request.page != state.page_index() || request.page_size != state.page_size() {
        catalog_debug!(
            "Dropping stale view page={} page_size={}; showing page={} page_size={}",
            request.page,
            request.page_size,
            state.page_index(),
            state.page_size()
        );
        return;
    }
    match result {
        Ok(page) => {
            let status = format!(
                "Loaded page {} ({} rows, {} records)",
                request.page,
                page.records.len(),
                page.total
            );
            state.apply_view_page(page);
            state.set_status(status);
        }
        Err(err) => {
            catalog_error!(
                "Error fetching page={} page_size={}: {}",
                request.page,
                request.page_size,
                err
            );
            state.apply_view_failure();
            state.set_status(format!("Failed to load page {}: {}", request.page, err.message));
        }
    }
}

fn submit_count(state: &mut AppState) -> Vec<Effect> {
    if state.bulk().is_some() {
        return Vec::new();
    }
    let raw = state.count_input().trim();
    let count = if raw.is_empty() {
        0
    } else {
        match raw.parse::<u64>() {
            Ok(count) => count,
            Err(_) => {
                state.set_status("Enter a whole number of rows to select");
                return Vec::new();
            }
        }
    };

    let bulk = BulkSelection::new(count, state.page_index(), state.page_size());
    match bulk.start() {
        BulkStep::Done(outcome) => {
            finish_bulk(state, outcome);
            Vec::new()
        }
        BulkStep::Fetch { page } => {
            catalog_info!(
                "Bulk selection of {} rows starting at page={} page_size={}",
                count,
                page,
                bulk.page_size()
            );
            let page_size = bulk.page_size();
            state.set_bulk(Some(bulk));
            vec![Effect::FetchPage(PageRequest {
                purpose: FetchPurpose::BulkSelect,
                page,
                page_size,
            })]
        }
    }
}

fn apply_bulk_result(
    state: &mut AppState,
    request: PageRequest,
    result: Result<Page, TransportError>,
) -> Vec<Effect> {
    let Some(mut bulk) = state.take_bulk() else {
        catalog_debug!("Ignoring bulk page={} with no selection running", request.page);
        return Vec::new();
    };

    let page = match result {
        Ok(page) => page,
        Err(err) => {
            catalog_error!(
                "Bulk selection stopped at page={} after {} of {} rows: {}",
                request.page,
                bulk.taken(),
                bulk.requested(),
                err
            );
            state.set_overlay_open(false);
            state.set_status(format!(
                "Selection stopped after {} of {} rows: {}",
                bulk.taken(),
                bulk.requested(),
                err.message
            ));
            return Vec::new();
        }
    };

    let step = bulk.apply_page(&page, state.selection_mut());
    state.mark_dirty();
    match step {
        BulkStep::Fetch { page } => {
            let page_size = bulk.page_size();
            state.set_bulk(Some(bulk));
            vec![Effect::FetchPage(PageRequest {
                purpose: FetchPurpose::BulkSelect,
                page,
                page_size,
            })]
        }
        BulkStep::Done(outcome) => {
            finish_bulk(state, outcome);
            Vec::new()
        }
    }
}

fn finish_bulk(state: &mut AppState, outcome: BulkOutcome) {
    state.set_overlay_open(false);
    match outcome {
        BulkOutcome::Completed { taken } => {
            catalog_info!("Bulk selection completed with {} rows", taken);
            let total_selected = state.selection().len();
            state.set_status(format!(
                "Selected {} rows ({} selected in total)",
                taken, total_selected
            ));
        }
        BulkOutcome::Exhausted { taken, shortfall } => {
            catalog_warn!(
                "Bulk selection ran out of records: selected {}, {} short",
                taken,
                shortfall
            );
            state.set_status(format!(
                "Only {} rows were available; {} fewer than requested",
                taken, shortfall
            ));
        }
    }
}
