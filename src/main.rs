mod cli;
mod config;
mod error;
mod logging;
mod motm;
mod report;
mod scorecard;
mod store;
mod types;

use crate::error::{CricketError, Result};
use crate::types::config::{CrichitConfig, FormatSetting};
use crate::types::matches::Match;
use crate::types::performance::MotmResult;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NOT_FOUND: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn read_match(path: &Path) -> Result<Match> {
    if !path.exists() {
        return Err(CricketError::PathNotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn output_format(
    flag: Option<cli::ReportFormat>,
    config: Option<&CrichitConfig>,
) -> report::OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match config.and_then(CrichitConfig::output_format) {
            Some(FormatSetting::Json) => report::OutputFormat::Json,
            _ => report::OutputFormat::Md,
        },
    }
}

/// Swaps the automatic pick for a named candidate.
fn apply_pick(result: MotmResult, pick: Option<&str>) -> Result<MotmResult> {
    let Some(name) = pick else {
        return Ok(result);
    };
    let winner = motm::override_selection(&result, name)
        .cloned()
        .ok_or_else(|| CricketError::UnknownCandidate(name.to_string()))?;
    tracing::info!(pick = %winner.name, "manual Man of the Match override");
    Ok(MotmResult { winner, ..result })
}

fn match_line(m: &Match) -> String {
    let outcome = scorecard::match_result(m).unwrap_or_else(|| scorecard::live_status(m));
    let mut line = format!(
        "{}  {} {} vs {} {}  {}",
        m.id,
        m.team_a,
        scorecard::team_score(m, &m.team_a),
        m.team_b,
        scorecard::team_score(m, &m.team_b),
        outcome
    );
    if let Some(motm) = &m.man_of_the_match {
        line.push_str(&format!("  [MOTM: {}]", motm.name));
    }
    line
}

fn run_matches(
    command: cli::MatchesCommand,
    root: &Path,
    loaded: Option<&CrichitConfig>,
) -> Result<i32> {
    let mut db = store::connect(root, loaded)?;
    match command {
        cli::MatchesCommand::List(cmd) => {
            let (label, matches) = if cmd.live {
                ("live", store::matches::live_matches(&db)?)
            } else {
                ("completed", store::matches::completed_matches(&db)?)
            };
            if matches.is_empty() {
                println!("no {label} matches");
                return Ok(exit_code::SUCCESS);
            }
            println!("{label} matches:");
            for m in &matches {
                println!("- {}", match_line(m));
            }
            Ok(exit_code::SUCCESS)
        }
        cli::MatchesCommand::Save(cmd) => {
            let m = read_match(&cmd.match_file)?;
            let id = m.id.clone();
            if cmd.live {
                store::matches::save_live_match(&mut db, m)?;
                println!("saved live match {id} to {}", db.path().display());
            } else {
                store::matches::save_completed_match(&mut db, m)?;
                println!("saved completed match {id} to {}", db.path().display());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::MatchesCommand::Remove(cmd) => {
            if store::matches::remove_live_match(&mut db, &cmd.id)? {
                println!("removed live match {}", cmd.id);
                Ok(exit_code::SUCCESS)
            } else {
                println!("no live match with id {}", cmd.id);
                Ok(exit_code::NOT_FOUND)
            }
        }
        cli::MatchesCommand::Finish(cmd) => {
            let Some(mut m) = store::matches::find_live_match(&db, &cmd.id)? else {
                if store::matches::find_completed_match(&db, &cmd.id)?.is_some() {
                    println!("match {} is already finished", cmd.id);
                    return Ok(exit_code::NOT_FOUND);
                }
                return Err(CricketError::MatchNotFound(cmd.id));
            };
            let result = apply_pick(motm::auto_select(&m), cmd.motm.as_deref())?;
            m.man_of_the_match = Some((&result.winner).into());

            store::matches::save_completed_match(&mut db, m)?;
            store::matches::remove_live_match(&mut db, &cmd.id)?;
            println!(
                "finished {}: Man of the Match {} ({}, {})",
                cmd.id,
                result.winner.name,
                result.winner.team_name,
                result.winner.performance_summary
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    let loaded = config::load_config(&cli.root)?;
    let directive = logging::filter_directive(
        cli.verbose,
        cli.quiet,
        loaded.as_ref().and_then(CrichitConfig::log_level),
    );
    logging::init(directive.as_deref())?;

    match cli.command {
        cli::Commands::Motm(cmd) => {
            let m = read_match(&cmd.match_file)?;
            let result = apply_pick(motm::auto_select(&m), cmd.pick.as_deref())?;
            let format = output_format(cmd.format, loaded.as_ref());
            println!("{}", report::render_motm(&m, &result, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Scorecard(cmd) => {
            let m = read_match(&cmd.match_file)?;
            let format = output_format(cmd.format, loaded.as_ref());
            println!("{}", report::render_scorecard(&m, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Result(cmd) => {
            let m = read_match(&cmd.match_file)?;
            match scorecard::match_result(&m) {
                Some(line) => println!("{line}"),
                None => println!("{}", scorecard::live_status(&m)),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Matches(cmd) => run_matches(cmd, &cli.root, loaded.as_ref()),
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
