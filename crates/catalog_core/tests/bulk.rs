use catalog_core::{BulkOutcome, BulkSelection, BulkStep, Page, Record, RecordId, SelectionSet};

/// Simulated source of `total` records with ids 1..=total.
fn source_page(page: u32, page_size: u32, total: u64) -> Page {
    let start = u64::from(page - 1) * u64::from(page_size) + 1;
    let end = (start + u64::from(page_size) - 1).min(total);
    let records = (start..=end)
        .map(|id| Record::new(id, format!("Artwork {id}")))
        .collect();
    Page::new(records, total)
}

fn drive(
    bulk: &mut BulkSelection,
    selection: &mut SelectionSet,
    total: u64,
) -> (BulkOutcome, Vec<u32>) {
    let mut fetched = Vec::new();
    let mut step = bulk.start();
    loop {
        match step {
            BulkStep::Done(outcome) => return (outcome, fetched),
            BulkStep::Fetch { page } => {
                fetched.push(page);
                let page = source_page(page, bulk.page_size(), total);
                step = bulk.apply_page(&page, selection);
            }
        }
    }
}

#[test]
fn fifteen_rows_span_two_pages() {
    let mut selection = SelectionSet::new();
    let mut bulk = BulkSelection::new(15, 1, 12);

    let (outcome, fetched) = drive(&mut bulk, &mut selection, 100);

    assert_eq!(outcome, BulkOutcome::Completed { taken: 15 });
    assert_eq!(fetched, vec![1, 2]);
    assert_eq!(selection.len(), 15);
    let expected: Vec<RecordId> = (1..=15).collect();
    assert_eq!(selection.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn zero_count_fetches_nothing() {
    let mut selection = SelectionSet::new();
    selection.insert_all([7]);
    let bulk = BulkSelection::new(0, 3, 12);

    assert_eq!(bulk.start(), BulkStep::Done(BulkOutcome::Completed { taken: 0 }));
    assert_eq!(selection.iter().collect::<Vec<_>>(), vec![7]);
}

#[test]
fn starts_at_current_page() {
    let mut selection = SelectionSet::new();
    let mut bulk = BulkSelection::new(5, 3, 12);

    let (outcome, fetched) = drive(&mut bulk, &mut selection, 100);

    assert_eq!(outcome, BulkOutcome::Completed { taken: 5 });
    assert_eq!(fetched, vec![3]);
    assert_eq!(selection.iter().collect::<Vec<_>>(), vec![25, 26, 27, 28, 29]);
}

#[test]
fn never_removes_existing_selection() {
    let mut selection = SelectionSet::new();
    selection.insert_all([2, 500]);
    let before = selection.len();
    let mut bulk = BulkSelection::new(4, 1, 12);

    drive(&mut bulk, &mut selection, 100);

    assert!(selection.len() >= before);
    assert!(selection.contains(2));
    assert!(selection.contains(500));
    assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 500]);
}

#[test]
fn count_beyond_total_stops_at_last_page() {
    let mut selection = SelectionSet::new();
    let mut bulk = BulkSelection::new(50, 1, 12);

    let (outcome, fetched) = drive(&mut bulk, &mut selection, 30);

    assert_eq!(
        outcome,
        BulkOutcome::Exhausted {
            taken: 30,
            shortfall: 20
        }
    );
    assert_eq!(fetched, vec![1, 2, 3]);
    assert_eq!(selection.len(), 30);
}

#[test]
fn empty_page_terminates() {
    let mut selection = SelectionSet::new();
    let mut bulk = BulkSelection::new(10, 1, 12);
    assert_eq!(bulk.start(), BulkStep::Fetch { page: 1 });

    // Source claims more records than it actually serves.
    let step = bulk.apply_page(&Page::new(Vec::new(), 1000), &mut selection);

    assert_eq!(
        step,
        BulkStep::Done(BulkOutcome::Exhausted {
            taken: 0,
            shortfall: 10
        })
    );
    assert!(selection.is_empty());
}

#[test]
fn state_advances_one_page_per_step() {
    let mut selection = SelectionSet::new();
    let mut bulk = BulkSelection::new(30, 2, 12);

    let step = bulk.apply_page(&source_page(2, 12, 100), &mut selection);
    assert_eq!(step, BulkStep::Fetch { page: 3 });
    assert_eq!(bulk.remaining(), 18);
    assert_eq!(bulk.taken(), 12);
    assert_eq!(bulk.next_page(), 3);
}
