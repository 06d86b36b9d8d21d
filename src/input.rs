//! Keyboard handling: routes key presses to the focused part of the UI.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::app::App;
use crate::models::Mode;

/// Apply one key press to the app
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // The winner dialog is modal
    if app.wheel.winner().is_some() {
        handle_dialog_key(app, key);
        return;
    }

    match app.mode {
        Mode::Wheel => handle_wheel_key(app, key, now),
        Mode::Names => handle_names_key(app, key),
        Mode::Exclusions => handle_exclusions_key(app, key),
        Mode::Header => handle_header_key(app, key),
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c') => app.close_winner(),
        KeyCode::Char('r') | KeyCode::Delete | KeyCode::Backspace => app.remove_winner(),
        _ => {}
    }
}

fn handle_wheel_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char(' ') | KeyCode::Enter => {
            // Disabled trigger: nothing happens when there is nothing to draw
            let _ = app.spin(now);
        }
        KeyCode::Char('s') => {
            app.shuffle();
        }
        KeyCode::Char('o') => {
            app.sort();
        }
        KeyCode::Char('c') => {
            app.clear();
        }
        KeyCode::Char('r') => app.random_header(),
        KeyCode::Char('e') | KeyCode::Tab => enter_mode(app, Mode::Names),
        KeyCode::Char('x') => enter_mode(app, Mode::Exclusions),
        KeyCode::Char('h') => enter_mode(app, Mode::Header),
        _ => {}
    }
}

fn handle_names_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        // Normalise the text view to what the model holds
        app.sync_names_editor();
        app.mode = Mode::Wheel;
        return;
    }
    if app.names_editor.input(key) {
        app.apply_names_editor();
    }
}

fn handle_exclusions_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.mode = Mode::Wheel,
        KeyCode::Up | KeyCode::Char('k') => app.move_exclusion_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_exclusion_cursor(1),
        KeyCode::Home => app.move_exclusion_cursor(isize::MIN / 2),
        KeyCode::End => app.move_exclusion_cursor(isize::MAX / 2),
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected_exclusion();
        }
        _ => {}
    }
}

fn handle_header_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.mode = Mode::Wheel,
        _ => {
            if app.header_editor.input(key) {
                let text = app.header_editor.lines().join(" ");
                app.set_header(&text);
            }
        }
    }
}

fn enter_mode(app: &mut App, mode: Mode) {
    // Editors that touch the list stay closed while the wheel turns
    if app.list_locked() && mode != Mode::Header {
        debug!("Ignoring {} while spinning", mode.label());
        return;
    }
    app.mode = mode;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use chrono::NaiveDate;
    use crossterm::event::KeyEventState;

    use crate::cli::CliConfig;
    use crate::store::{KeyValueStore, MemoryStore, Persistence, StoreKey};

    const SPIN: Duration = Duration::from_millis(500);

    fn app_with_names(names: &[&str]) -> App {
        let mut store = MemoryStore::new();
        store
            .set(StoreKey::CandidateList, &serde_json::to_string(names).unwrap())
            .unwrap();
        let config = CliConfig {
            data_dir: None,
            spin_duration: SPIN,
            seed: Some(5),
            effects: false,
        };
        let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        App::new(Persistence::new(Box::new(store)), &config, today)
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            let code = if c == '\n' { KeyCode::Enter } else { KeyCode::Char(c) };
            press(app, code, now);
        }
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();
        let mut app = app_with_names(&["A"]);
        press(&mut app, KeyCode::Char('q'), now);
        assert!(app.should_quit);

        let mut app = app_with_names(&["A"]);
        app.mode = Mode::Names;
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now,
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app_with_names(&["A"]);
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, release, Instant::now());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_space_spins_and_dialog_removes_winner() {
        let mut app = app_with_names(&["Alice", "Bob"]);
        let now = Instant::now();
        press(&mut app, KeyCode::Char(' '), now);
        assert!(app.wheel.is_spinning());

        app.tick(now + SPIN);
        let winner = app.wheel.winner().cloned().unwrap();

        // Wheel shortcuts are swallowed by the dialog
        press(&mut app, KeyCode::Char('s'), now + SPIN);
        assert!(app.wheel.winner().is_some());

        press(&mut app, KeyCode::Char('r'), now + SPIN);
        assert!(app.wheel.is_idle());
        assert_eq!(app.candidates.len(), 1);
        assert!(!app.candidates.names().contains(&winner.name));
    }

    #[test]
    fn test_escape_closes_dialog() {
        let mut app = app_with_names(&["Alice", "Bob"]);
        let now = Instant::now();
        press(&mut app, KeyCode::Enter, now);
        app.tick(now + SPIN);
        press(&mut app, KeyCode::Esc, now + SPIN);
        assert!(app.wheel.is_idle());
        assert_eq!(app.candidates.len(), 2);
    }

    #[test]
    fn test_spin_disabled_when_nothing_eligible() {
        let mut app = app_with_names(&["A"]);
        app.toggle_exclusion("A");
        press(&mut app, KeyCode::Char(' '), Instant::now());
        assert!(app.wheel.is_idle());
    }

    #[test]
    fn test_typing_names_writes_through() {
        let mut app = app_with_names(&["A"]);
        let now = Instant::now();
        press(&mut app, KeyCode::Char('c'), now);
        assert!(app.candidates.is_empty());

        press(&mut app, KeyCode::Char('e'), now);
        assert_eq!(app.mode, Mode::Names);
        type_text(&mut app, "Zoe\n\n  Max", now);
        assert_eq!(app.candidates.names(), ["Zoe", "Max"]);
        let raw = app.persistence().raw(StoreKey::CandidateList).unwrap();
        assert_eq!(raw, r#"["Zoe","Max"]"#);

        // Leaving the editor normalises its text
        press(&mut app, KeyCode::Esc, now);
        assert_eq!(app.mode, Mode::Wheel);
        assert_eq!(app.names_editor.lines(), ["Zoe", "Max"]);
    }

    #[test]
    fn test_exclusion_mode_toggles_selected_row() {
        let mut app = app_with_names(&["A", "B", "C"]);
        let now = Instant::now();
        press(&mut app, KeyCode::Char('x'), now);
        assert_eq!(app.mode, Mode::Exclusions);
        press(&mut app, KeyCode::Down, now);
        press(&mut app, KeyCode::Char(' '), now);
        assert!(app.exclusions.is_excluded("B"));
        press(&mut app, KeyCode::Enter, now);
        assert!(!app.exclusions.is_excluded("B"));
        press(&mut app, KeyCode::End, now);
        assert_eq!(app.exclusion_cursor, 2);
        press(&mut app, KeyCode::Home, now);
        assert_eq!(app.exclusion_cursor, 0);
        press(&mut app, KeyCode::Esc, now);
        assert_eq!(app.mode, Mode::Wheel);
    }

    #[test]
    fn test_header_editing() {
        let mut app = app_with_names(&["A"]);
        let now = Instant::now();
        press(&mut app, KeyCode::Char('h'), now);
        assert_eq!(app.mode, Mode::Header);
        type_text(&mut app, "!", now);
        assert!(app.header.ends_with('!'));
        assert_eq!(app.persistence().load_header(), app.header);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.mode, Mode::Wheel);
    }

    #[test]
    fn test_editors_locked_while_spinning() {
        let mut app = app_with_names(&["A", "B"]);
        let now = Instant::now();
        press(&mut app, KeyCode::Char(' '), now);
        press(&mut app, KeyCode::Char('e'), now);
        assert_eq!(app.mode, Mode::Wheel);
        press(&mut app, KeyCode::Char('x'), now);
        assert_eq!(app.mode, Mode::Wheel);
        press(&mut app, KeyCode::Char('h'), now);
        assert_eq!(app.mode, Mode::Header);
    }
}
