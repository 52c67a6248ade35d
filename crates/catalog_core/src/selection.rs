use std::collections::BTreeSet;

use crate::{Record, RecordId};

/// Selected record ids, independent of which page is on screen.
///
/// Navigation never mutates the set. Only [`SelectionSet::reconcile`] can
/// remove ids, and only ids that belong to the page being reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    selected: BTreeSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the checked state of the current page into the set.
    ///
    /// Every id on `current_page` that is not in `checked` is removed, then
    /// every id in `checked` is added. Ids from other pages are untouched.
    pub fn reconcile(&mut self, current_page: &[Record], checked: &[Record]) {
        self.reconcile_ids(
            current_page.iter().map(|record| record.id),
            checked.iter().map(|record| record.id),
        );
    }

    pub fn reconcile_ids(
        &mut self,
        current_page: impl IntoIterator<Item = RecordId>,
        checked: impl IntoIterator<Item = RecordId>,
    ) {
        let checked: BTreeSet<RecordId> = checked.into_iter().collect();
        for id in current_page {
            if !checked.contains(&id) {
                self.selected.remove(&id);
            }
        }
        self.selected.extend(checked);
    }

    pub fn is_selected(&self, record: &Record) -> bool {
        self.contains(record.id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    /// Rows of `page` that should render as checked, in page order.
    pub fn selected_records_of<'a>(&self, page: &'a [Record]) -> Vec<&'a Record> {
        page.iter().filter(|record| self.is_selected(record)).collect()
    }

    /// Flip one row of the current page.
    pub fn toggle(&mut self, current_page: &[Record], id: RecordId) {
        if !current_page.iter().any(|record| record.id == id) {
            return;
        }
        let checked = current_page
            .iter()
            .map(|record| record.id)
            .filter(|&row| (row == id) != self.contains(row));
        let checked: Vec<RecordId> = checked.collect();
        self.reconcile_ids(current_page.iter().map(|record| record.id), checked);
    }

    /// Header checkbox: uncheck the page when every row is checked, else check all.
    pub fn toggle_page(&mut self, current_page: &[Record]) {
        if current_page.is_empty() {
            return;
        }
        let all_checked = current_page.iter().all(|record| self.is_selected(record));
        let checked: &[Record] = if all_checked { &[] } else { current_page };
        self.reconcile(current_page, checked);
    }

    /// Add ids without touching anything already selected.
    pub fn insert_all(&mut self, ids: impl IntoIterator<Item = RecordId>) -> usize {
        let before = self.selected.len();
        self.selected.extend(ids);
        self.selected.len() - before
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.selected.iter().copied()
    }
}
