use tui::buffer::Buffer;
use tui::layout::{Constraint, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Line;
use tui::widgets::{Block, BorderType, Cell, Row, StatefulWidget, Table, TableState, Widget};

use crate::state::app_state::{SortColumn, StatTableState};

pub const BORDER_COLOR: Color = Color::Rgb(0x89, 0xb4, 0xfa);

const WIDTHS: [Constraint; 8] = [
    Constraint::Min(20),
    Constraint::Length(5),
    Constraint::Length(5),
    Constraint::Length(7),
    Constraint::Length(5),
    Constraint::Length(7),
    Constraint::Length(5),
    Constraint::Length(7),
];

/// One page of the points table with the footer in the bottom border.
pub struct StatTableView<'a> {
    pub table: &'a StatTableState,
    pub footer: String,
}

impl StatTableView<'_> {
    fn header(&self) -> Row<'static> {
        let cells = SortColumn::ALL.iter().map(|column| {
            let mut label = column.header().to_string();
            if *column == self.table.sort_column {
                label.push(if self.table.descending { '▼' } else { '▲' });
            }
            align(*column, label).style(Style::default().add_modifier(Modifier::BOLD))
        });
        Row::new(cells).style(Style::default().fg(Color::Gray))
    }

    fn rows(&self) -> Vec<Row<'static>> {
        self.table
            .page_rows()
            .iter()
            .map(|row| {
                let cells = SortColumn::ALL.iter().zip(row.cells()).map(|(column, text)| {
                    let cell = align(*column, text);
                    if *column == SortColumn::PointsPerPa {
                        cell.style(Style::default().add_modifier(Modifier::BOLD))
                    } else {
                        cell
                    }
                });
                Row::new(cells)
            })
            .collect()
    }
}

fn align(column: SortColumn, text: String) -> Cell<'static> {
    match column {
        SortColumn::Name => Cell::from(text),
        _ => Cell::from(Line::from(text).right_aligned()),
    }
}

impl Widget for StatTableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR))
            .title_bottom(Line::from(format!(" {} ", self.footer)).centered());

        let table = Table::new(self.rows(), WIDTHS)
            .header(self.header().bottom_margin(1))
            .block(block)
            .column_spacing(2)
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        let mut state = TableState::default().with_selected(self.table.selected_in_page());
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
