mod app;
mod cli;
mod components;
mod draw;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::cli::{Cli, Command, TeamArgs};
use crate::state::app_settings::AppSettings;
use crate::state::messages::UiEvent;
use anyhow::Context;
use clap::Parser;
use crossterm::event::{Event, EventStream};
use crossterm::{cursor, execute, terminal};
use fangraphs_api::cache::StatCache;
use fangraphs_api::client::FangraphsClient;
use fangraphs_api::fuse::{FuseOptions, fuse};
use fangraphs_api::source::StatSource;
use fangraphs_api::teams::{self, TeamKey};
use futures_util::StreamExt;
use log::{LevelFilter, error, info};
use std::io::Stdout;
use std::process::ExitCode;
use std::{io, panic};
use tokio::sync::mpsc;
use tui::{Terminal, backend::CrosstermBackend};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    tui_logger::init_logger(LevelFilter::Trace)?;

    match cli.command {
        Command::Team(args) => run_team(args, cli.verbose).await,
        Command::Teams => {
            print_teams();
            Ok(())
        }
    }
}

async fn run_team(args: TeamArgs, verbose: u8) -> anyhow::Result<()> {
    let settings = AppSettings::from_cli(&args, verbose);
    settings.apply_log_level();

    let current_year = teams::current_year();
    let raw_year = args.season.unwrap_or_else(|| current_year.to_string());
    let (team, season) = teams::validate(&args.team, &raw_year, current_year)?;

    let source = StatSource::new(FangraphsClient::new(), StatCache::new(settings.cache_dir.clone()))
        .with_current_year(current_year);
    let stats = source
        .get_team_stats(team, season)
        .await
        .with_context(|| format!("could not load {team} {season}"))?;
    let sticks = fuse(&stats.batting, &stats.fielding, FuseOptions::default())
        .with_context(|| format!("could not combine {team} {season} tables"))?;
    info!("{} batters for {team} {season}", sticks.len());

    let app = App::new(settings, team, season, sticks);
    run_tui(app).await.context("terminal failure")
}

fn print_teams() {
    for team in TeamKey::ALL {
        println!("{:<4} {:>2}", team.code(), team.id());
    }
}

async fn run_tui(app: App) -> io::Result<()> {
    better_panic::install();
    setup_panic_hook();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    setup_terminal()?;

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx));

    let result = main_ui_loop(terminal, app, ui_event_rx).await;

    input_handler.abort();
    cleanup_terminal()?;
    result
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    mut ui_events: mpsc::Receiver<UiEvent>,
) -> io::Result<()> {
    draw::draw(&mut terminal, &app)?;

    while let Some(ui_event) = ui_events.recv().await {
        match ui_event {
            UiEvent::KeyPressed(key_event) => keys::handle_key_bindings(key_event, &mut app),
            UiEvent::Resize => {}
        }
        if app.state.should_quit {
            break;
        }
        draw::draw(&mut terminal, &app)?;
    }
    Ok(())
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    let mut events = EventStream::new();
    while let Some(event) = events.next().await {
        let ui_event = match event {
            Ok(Event::Key(key_event)) => Some(UiEvent::KeyPressed(key_event)),
            Ok(Event::Resize(_, _)) => Some(UiEvent::Resize),
            Ok(_) => None,
            Err(e) => {
                error!("terminal input failed: {e}");
                break;
            }
        };

        if let Some(ui_event) = ui_event
            && ui_events.send(ui_event).await.is_err()
        {
            break;
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

fn cleanup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::MoveTo(0, 0))?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    execute!(stdout, terminal::LeaveAlternateScreen)?;
    execute!(stdout, cursor::Show)?;
    terminal::disable_raw_mode()
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let _ = cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
