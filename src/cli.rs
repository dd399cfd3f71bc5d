use clap::{ArgAction, Args, Parser, Subcommand};
use fangraphs_api::cache::DEFAULT_CACHE_DIR;
use std::path::PathBuf;

/// Points for every batter on an MLB team, straight from FanGraphs.
#[derive(Debug, Parser)]
#[command(name = "pts", version, about)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the points table for one team season
    Team(TeamArgs),
    /// List the accepted team keys
    Teams,
}

#[derive(Debug, Args)]
pub struct TeamArgs {
    /// Team key, e.g. BOS or nyy
    pub team: String,

    /// Season year, defaults to the current year
    #[arg(short, long)]
    pub season: Option<String>,

    /// Where leaderboard tables are cached
    #[arg(long, default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,
}
