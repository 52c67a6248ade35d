use catalog_core::{AppViewModel, Msg, ViewSettings};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translates a key press into a message for the current view.
pub fn map_key(key: KeyEvent, view: &AppViewModel) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Msg::QuitRequested);
    }
    match &view.overlay {
        Some(overlay) => map_overlay_key(key.code, &overlay.input),
        None => map_table_key(key.code, view),
    }
}

fn map_overlay_key(code: KeyCode, input: &str) -> Option<Msg> {
    match code {
        KeyCode::Esc => Some(Msg::Cancel),
        KeyCode::Enter => Some(Msg::CountSubmitted),
        KeyCode::Backspace => {
            let mut text = input.to_string();
            text.pop();
            Some(Msg::CountInputChanged(text))
        }
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Msg::CountInputChanged(format!("{input}{c}"))),
        _ => None,
    }
}

fn map_table_key(code: KeyCode, view: &AppViewModel) -> Option<Msg> {
    let msg = match code {
        KeyCode::Char('q') => Msg::QuitRequested,
        KeyCode::Esc => Msg::Cancel,
        KeyCode::Down | KeyCode::Char('j') => Msg::CursorDown,
        KeyCode::Up | KeyCode::Char('k') => Msg::CursorUp,
        KeyCode::Char(' ') => {
            let row = view.rows.get(view.cursor)?;
            Msg::RowToggled { id: row.id }
        }
        KeyCode::Char('a') => Msg::PageToggled,
        KeyCode::Right | KeyCode::Char('n') | KeyCode::PageDown => Msg::NextPage,
        KeyCode::Left | KeyCode::Char('p') | KeyCode::PageUp => Msg::PreviousPage,
        KeyCode::Home | KeyCode::Char('g') => Msg::FirstPage,
        KeyCode::End | KeyCode::Char('G') => Msg::LastPage,
        KeyCode::Char('+') => {
            Msg::PageSizeChanged(ViewSettings::step_page_size(view.page_size, true))
        }
        KeyCode::Char('-') => {
            Msg::PageSizeChanged(ViewSettings::step_page_size(view.page_size, false))
        }
        KeyCode::Char('s') => Msg::CountOverlayToggled,
        _ => return None,
    };
    Some(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{CountOverlayView, RecordRowView};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn row(id: u64) -> RecordRowView {
        RecordRowView {
            id,
            checked: false,
            title: format!("Artwork {id}"),
            place_of_origin: String::new(),
            artist: String::new(),
            inscriptions: String::new(),
            date_start: None,
            date_end: None,
        }
    }

    fn table_view() -> AppViewModel {
        AppViewModel {
            rows: vec![row(10), row(11)],
            cursor: 1,
            page_size: 12,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn space_toggles_row_under_cursor() {
        let msg = map_key(press(KeyCode::Char(' ')), &table_view());
        assert_eq!(msg, Some(Msg::RowToggled { id: 11 }));
    }

    #[test]
    fn space_on_empty_page_does_nothing() {
        let view = AppViewModel::default();
        assert_eq!(map_key(press(KeyCode::Char(' ')), &view), None);
    }

    #[test]
    fn page_size_keys_step_through_choices() {
        let view = table_view();
        assert_eq!(
            map_key(press(KeyCode::Char('+')), &view),
            Some(Msg::PageSizeChanged(24))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('-')), &view),
            Some(Msg::PageSizeChanged(12))
        );
    }

    #[test]
    fn overlay_captures_digits_and_submit() {
        let view = AppViewModel {
            overlay: Some(CountOverlayView {
                input: "1".to_string(),
                ..CountOverlayView::default()
            }),
            ..table_view()
        };

        assert_eq!(
            map_key(press(KeyCode::Char('5')), &view),
            Some(Msg::CountInputChanged("15".to_string()))
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace), &view),
            Some(Msg::CountInputChanged(String::new()))
        );
        assert_eq!(map_key(press(KeyCode::Enter), &view), Some(Msg::CountSubmitted));
        assert_eq!(map_key(press(KeyCode::Char('q')), &view), None);
        assert_eq!(map_key(press(KeyCode::Esc), &view), Some(Msg::Cancel));
    }

    #[test]
    fn ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, &table_view()), Some(Msg::QuitRequested));
    }
}
