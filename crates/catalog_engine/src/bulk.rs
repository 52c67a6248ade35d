use catalog_core::{BulkOutcome, BulkSelection, BulkStep, SelectionSet};
use catalog_logging::{catalog_debug, catalog_warn};

use crate::{FetchError, PageFetcher};

/// Select the next `count` records starting at `start_page`, one page fetch at a time.
///
/// Ids are only ever added to `selection`. If a fetch fails the error is
/// returned and whatever was added before the failure stays selected.
pub async fn select_next(
    fetcher: &dyn PageFetcher,
    selection: &mut SelectionSet,
    count: u64,
    start_page: u32,
    page_size: u32,
) -> Result<BulkOutcome, FetchError> {
    let mut bulk = BulkSelection::new(count, start_page, page_size);
    let mut step = bulk.start();
    loop {
        match step {
            BulkStep::Fetch { page } => {
                catalog_debug!("select_next fetching page={} remaining={}", page, bulk.remaining());
                let fetched = fetcher.fetch_page(page, bulk.page_size()).await?;
                step = bulk.apply_page(&fetched, selection);
            }
            BulkStep::Done(outcome) => {
                catalog_debug!("select_next finished taken={}", outcome.taken());
                if let BulkOutcome::Exhausted { taken, shortfall } = outcome {
                    catalog_warn!(
                        "select_next ran out of records: selected {}, {} short",
                        taken,
                        shortfall
                    );
                }
                return Ok(outcome);
            }
        }
    }
}
