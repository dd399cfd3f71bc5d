use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, SortColumn};
use fangraphs_api::Stick;
use fangraphs_api::teams::{Season, TeamKey};

pub const QUIT_HINT: &str = "Press ctrl+c or esc to quit.";

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings, team: TeamKey, season: Season, sticks: Vec<Stick>) -> Self {
        Self {
            settings,
            state: AppState::new(team, season, sticks),
        }
    }

    pub fn hint_text(&self) -> String {
        format!("{QUIT_HINT} Cache: {}", self.settings.cache_dir.display())
    }

    pub fn footer_text(&self) -> String {
        let table = &self.state.table;
        format!(
            "Viewing {} {} - Pg. {}/{}",
            self.state.team,
            self.state.season,
            table.page() + 1,
            table.page_count()
        )
    }

    // -----------------------------------------------------------------------
    // Key actions
    // -----------------------------------------------------------------------

    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    pub fn next_sort_column(&mut self) {
        let column = self.state.table.sort_column.next();
        self.state.table.sort_by(column, default_direction(column));
    }

    pub fn prev_sort_column(&mut self) {
        let column = self.state.table.sort_column.prev();
        self.state.table.sort_by(column, default_direction(column));
    }

    pub fn reverse_sort(&mut self) {
        let table = &mut self.state.table;
        let (column, descending) = (table.sort_column, !table.descending);
        table.sort_by(column, descending);
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }
}

/// Names read best A to Z; every numeric column starts highest first.
fn default_direction(column: SortColumn) -> bool {
    column != SortColumn::Name
}
