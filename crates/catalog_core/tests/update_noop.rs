use catalog_core::{update, AppState, Msg};

#[test]
fn tick_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn zero_page_size_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::PageSizeChanged(0));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
