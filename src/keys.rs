use crate::app::App;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key_bindings(key_event: KeyEvent, app: &mut App) {
    // Windows reports releases too.
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match (key_event.code, key_event.modifiers) {
        // Quit
        (KeyCode::Esc, _) | (Char('c'), KeyModifiers::CONTROL) => app.quit(),

        // Paging
        (KeyCode::Right | Char('l') | KeyCode::PageDown, _) => app.state.table.next_page(),
        (KeyCode::Left | Char('h') | KeyCode::PageUp, _) => app.state.table.prev_page(),
        (KeyCode::Down | Char('j'), _) => app.state.table.select_next(),
        (KeyCode::Up | Char('k'), _) => app.state.table.select_prev(),
        (KeyCode::Home | Char('g'), _) => app.state.table.select_first(),
        (KeyCode::End | Char('G'), _) => app.state.table.select_last(),

        // Sorting
        (Char('s'), _) => app.next_sort_column(),
        (Char('S'), _) => app.prev_sort_column(),
        (Char('r'), _) => app.reverse_sort(),

        (Char('"'), _) => app.toggle_show_logs(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_settings::AppSettings;
    use crate::state::app_state::SortColumn;
    use crossterm::event::KeyEventState;
    use fangraphs_api::Stick;
    use fangraphs_api::teams::{Season, TeamKey};
    use log::LevelFilter;
    use std::path::PathBuf;

    fn app(players: usize) -> App {
        let settings = AppSettings {
            cache_dir: PathBuf::from("pts_cache"),
            log_level: LevelFilter::Warn,
        };
        let sticks = (0..players)
            .map(|i| Stick {
                name: format!("P{i:02}"),
                plate_appearances: 100,
                walks: i as u32,
                ..Default::default()
            })
            .collect();
        App::new(settings, TeamKey::Nyy, Season::new(1998, 2024).unwrap(), sticks)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_bindings(KeyEvent::new(code, KeyModifiers::NONE), app);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app(1);
        press(&mut app, KeyCode::Esc);
        assert!(app.state.should_quit);

        let mut app = self::app(1);
        handle_key_bindings(KeyEvent::new(Char('c'), KeyModifiers::CONTROL), &mut app);
        assert!(app.state.should_quit);
    }

    #[test]
    fn plain_c_and_q_do_not_quit() {
        let mut app = app(1);
        press(&mut app, Char('c'));
        press(&mut app, Char('q'));
        assert!(!app.state.should_quit);
    }

    #[test]
    fn arrows_and_vim_keys_page() {
        let mut app = app(30);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.footer_text(), "Viewing NYY 1998 - Pg. 2/3");
        press(&mut app, Char('l'));
        assert_eq!(app.footer_text(), "Viewing NYY 1998 - Pg. 3/3");
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.footer_text(), "Viewing NYY 1998 - Pg. 3/3");
        press(&mut app, Char('h'));
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.footer_text(), "Viewing NYY 1998 - Pg. 1/3");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.footer_text(), "Viewing NYY 1998 - Pg. 1/3");
    }

    #[test]
    fn selection_moves_and_jumps() {
        let mut app = app(30);
        press(&mut app, Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.table.selected, 2);
        press(&mut app, Char('k'));
        assert_eq!(app.state.table.selected, 1);
        press(&mut app, Char('G'));
        assert_eq!(app.state.table.selected, 29);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.state.table.selected, 0);
    }

    #[test]
    fn sort_keys() {
        let mut app = app(3);
        press(&mut app, Char('s'));
        assert_eq!(app.state.table.sort_column, SortColumn::Name);
        press(&mut app, Char('S'));
        assert_eq!(app.state.table.sort_column, SortColumn::PointsPerPa);
        press(&mut app, Char('r'));
        assert!(!app.state.table.descending);
        assert_eq!(app.state.table.rows()[0].stick.name, "P00");
    }

    #[test]
    fn quote_toggles_logs() {
        let mut app = app(0);
        press(&mut app, Char('"'));
        assert!(app.state.show_logs);
        press(&mut app, Char('"'));
        assert!(!app.state.show_logs);
    }

    #[test]
    fn releases_are_ignored() {
        let mut app = app(1);
        let release = KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_bindings(release, &mut app);
        assert!(!app.state.should_quit);
    }
}
