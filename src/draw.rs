use std::io::{self, Stdout};

use tui::backend::CrosstermBackend;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::widgets::{Block, BorderType, Paragraph};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, QUIT_HINT};
use crate::components::stat_table::StatTableView;
use crate::ui::layout::LayoutAreas;

pub fn draw(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &App) -> io::Result<()> {
    let current_size = terminal.size()?;
    if current_size.width <= 10 || current_size.height <= 5 {
        return Ok(());
    }

    terminal.draw(|f| render(f, app))?;
    Ok(())
}

fn render(f: &mut Frame, app: &App) {
    let layout = LayoutAreas::from_rect(f.area(), app.state.show_logs);

    f.render_widget(
        Paragraph::new(app.hint_text()).style(Style::default().fg(Color::DarkGray)),
        layout.hint,
    );
    f.render_widget(
        StatTableView {
            table: &app.state.table,
            footer: app.footer_text(),
        },
        layout.table,
    );

    if app.state.show_logs {
        draw_logs(f, layout.logs);
    }
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title(" Logs "),
        )
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Cyan))
        .style_debug(Style::default().fg(Color::Gray))
        .style_trace(Style::default().fg(Color::DarkGray));
    f.render_widget(logs, area);
}
