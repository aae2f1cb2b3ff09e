use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "crichit",
    version,
    about = "Cricket match tracker with scorecards and Man of the Match selection"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding crichit.toml and the match store
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick the Man of the Match for a match file
    Motm(MotmCommand),
    /// Print the full scorecard of a match file
    Scorecard(ScorecardCommand),
    /// Print the result line of a match file
    Result(ResultCommand),
    /// Manage stored live and completed matches
    #[command(subcommand)]
    Matches(MatchesCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct MotmCommand {
    pub match_file: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Override the automatic pick with one of the listed candidates
    #[arg(long)]
    pub pick: Option<String>,
}

#[derive(Args)]
pub struct ScorecardCommand {
    pub match_file: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ResultCommand {
    pub match_file: PathBuf,
}

#[derive(Subcommand)]
pub enum MatchesCommand {
    /// List completed matches, or live ones with --live
    List(ListCommand),
    /// Store a match file as completed, or as live with --live
    Save(SaveCommand),
    /// Drop a live match
    Remove(RemoveCommand),
    /// Move a live match to completed with its Man of the Match
    Finish(FinishCommand),
}

#[derive(Args)]
pub struct ListCommand {
    #[arg(long)]
    pub live: bool,
}

#[derive(Args)]
pub struct SaveCommand {
    pub match_file: PathBuf,
    #[arg(long)]
    pub live: bool,
}

#[derive(Args)]
pub struct RemoveCommand {
    pub id: String,
}

#[derive(Args)]
pub struct FinishCommand {
    pub id: String,
    /// Record this candidate instead of the automatic pick
    #[arg(long)]
    pub motm: Option<String>,
}
