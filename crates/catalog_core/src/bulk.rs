//! "Select the next N rows" as an explicit state machine.
//!
//! The machine never performs IO. Whoever drives it asks for the next step,
//! fetches the requested page, and feeds the page back through
//! [`BulkSelection::apply_page`]. The view state machine drives it one
//! message round-trip at a time; `catalog_engine::select_next` drives it in
//! an async loop.

use crate::{Page, SelectionSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkStep {
    /// Fetch this 1-based page index next.
    Fetch { page: u32 },
    Done(BulkOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOutcome {
    /// The full requested count was taken.
    Completed { taken: u64 },
    /// The source ran out of records before the count was reached.
    Exhausted { taken: u64, shortfall: u64 },
}

impl BulkOutcome {
    pub fn taken(&self) -> u64 {
        match *self {
            BulkOutcome::Completed { taken } | BulkOutcome::Exhausted { taken, .. } => taken,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSelection {
    requested: u64,
    remaining: u64,
    next_page: u32,
    page_size: u32,
}

impl BulkSelection {
    pub fn new(count: u64, start_page: u32, page_size: u32) -> Self {
        Self {
            requested: count,
            remaining: count,
            next_page: start_page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// First step: either a page to fetch, or done when nothing was requested.
    pub fn start(&self) -> BulkStep {
        if self.remaining == 0 {
            BulkStep::Done(BulkOutcome::Completed { taken: 0 })
        } else {
            BulkStep::Fetch {
                page: self.next_page,
            }
        }
    }

    /// Take up to `remaining` records from `page` in returned order and add
    /// their ids to `selection`, then decide what happens next.
    ///
    /// Stops on a satisfied count, an empty page, or when `page` is the last
    /// one according to the total it reports.
    pub fn apply_page(&mut self, page: &Page, selection: &mut SelectionSet) -> BulkStep {
        let take = usize::try_from(self.remaining)
            .unwrap_or(usize::MAX)
            .min(page.records.len());
        selection.insert_all(page.records.iter().take(take).map(|record| record.id));
        self.remaining -= take as u64;

        let fetched = self.next_page;
        self.next_page = self.next_page.saturating_add(1);

        if self.remaining == 0 {
            return BulkStep::Done(BulkOutcome::Completed {
                taken: self.taken(),
            });
        }
        let reached_end = u64::from(fetched).saturating_mul(u64::from(self.page_size)) >= page.total;
        if page.is_empty() || reached_end {
            return BulkStep::Done(BulkOutcome::Exhausted {
                taken: self.taken(),
                shortfall: self.remaining,
            });
        }
        BulkStep::Fetch {
            page: self.next_page,
        }
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn taken(&self) -> u64 {
        self.requested - self.remaining
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}
