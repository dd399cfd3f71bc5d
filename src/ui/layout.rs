use tui::layout::{Constraint, Layout, Rect};

pub const HINT_HEIGHT: u16 = 1;
/// Header, spacer, a full page of rows and two borders.
pub const TABLE_HEIGHT: u16 = 2 + crate::state::app_state::PAGE_SIZE as u16 + 2;

/// Pre-computed layout areas for the main draw loop.
pub struct LayoutAreas {
    pub hint: Rect,
    pub table: Rect,
    pub logs: Rect,
}

impl LayoutAreas {
    pub fn from_rect(area: Rect, show_logs: bool) -> Self {
        if !show_logs {
            let [hint, table] =
                Layout::vertical([Constraint::Length(HINT_HEIGHT), Constraint::Fill(1)]).areas(area);
            return LayoutAreas { hint, table, logs: Rect::ZERO };
        }

        let [hint, table, logs] = Layout::vertical([
            Constraint::Length(HINT_HEIGHT),
            Constraint::Length(TABLE_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);
        LayoutAreas { hint, table, logs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_fills_without_logs() {
        let layout = LayoutAreas::from_rect(Rect::new(0, 0, 80, 30), false);
        assert_eq!(layout.hint.height, 1);
        assert_eq!(layout.table.height, 29);
        assert_eq!(layout.logs, Rect::ZERO);
    }

    #[test]
    fn log_pane_takes_the_rest() {
        let layout = LayoutAreas::from_rect(Rect::new(0, 0, 80, 40), true);
        assert_eq!(layout.table.height, TABLE_HEIGHT);
        assert_eq!(layout.logs.height, 40 - 1 - TABLE_HEIGHT);
    }
}
