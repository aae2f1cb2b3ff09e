use crate::scorecard;
use crate::types::matches::{Inning, Match, PlayerRoles};
use crate::types::performance::{MotmResult, PlayerPerformance};

fn display_name(name: &str, roles: &PlayerRoles) -> String {
    let tags = roles.tags();
    if tags.is_empty() {
        name.to_string()
    } else {
        format!("{name} ({})", tags.join(", "))
    }
}

fn candidate_line(candidate: &PlayerPerformance) -> String {
    format!(
        "- {} [{}] {} pts: {}\n",
        display_name(&candidate.name, &candidate.roles),
        candidate.team_name,
        candidate.points,
        candidate.performance_summary
    )
}

pub fn motm_to_markdown(m: &Match, result: &MotmResult) -> String {
    let mut output = String::new();
    output.push_str("# Man of the Match\n\n");
    if let Some(line) = scorecard::match_result(m) {
        output.push_str(&format!("Result: {line}\n\n"));
    }
    output.push_str(&format!(
        "**{}** ({})\n\n{} - {} pts\n\n",
        display_name(&result.winner.name, &result.winner.roles),
        result.winner.team_name,
        result.winner.performance_summary,
        result.winner.points
    ));

    output.push_str("## Candidates\n\n");
    for candidate in &result.all_candidates {
        output.push_str(&candidate_line(candidate));
    }
    output
}

fn inning_section(output: &mut String, inning: &Inning) {
    output.push_str(&format!(
        "## {} {} ({} Ov)\n\n",
        inning.batting_team,
        scorecard::inning_score(inning),
        scorecard::inning_overs(inning)
    ));

    let top_batsman = scorecard::top_batsman(inning);
    output.push_str("| Batsman | Dismissal | R | B | 4s | 6s | SR |\n");
    output.push_str("|---|---|---|---|---|---|---|\n");
    for batsman in inning.batsmen.iter().filter(|batsman| batsman.batted()) {
        let star = match top_batsman {
            Some(top) if std::ptr::eq(top, batsman) && batsman.runs > 0 => " *",
            _ => "",
        };
        let dismissal = if batsman.is_out {
            batsman.out_by.as_deref().unwrap_or("out")
        } else {
            "not out"
        };
        output.push_str(&format!(
            "| {}{star} | {dismissal} | {} | {} | {} | {} | {} |\n",
            display_name(&batsman.name, &batsman.roles),
            batsman.runs,
            batsman.balls,
            batsman.fours,
            batsman.sixes,
            scorecard::strike_rate_display(batsman)
        ));
    }
    output.push('\n');

    let extras = &inning.extras;
    output.push_str(&format!(
        "Extras: {} (wd {}, nb {}, b {}, lb {})\n\n",
        extras.total(),
        extras.wides,
        extras.no_balls,
        extras.byes,
        extras.leg_byes
    ));

    let did_not_bat = scorecard::did_not_bat(inning);
    if !did_not_bat.is_empty() {
        let names = did_not_bat
            .iter()
            .map(|batsman| batsman.name.as_str())
            .collect::<Vec<_>>();
        output.push_str(&format!("Did Not Bat: {}\n\n", names.join(", ")));
    }

    if !inning.fall_of_wickets.is_empty() {
        let falls = inning
            .fall_of_wickets
            .iter()
            .map(|fow| {
                format!(
                    "{}-{} ({}, {} ov)",
                    fow.score, fow.wicket, fow.batsman_name, fow.over
                )
            })
            .collect::<Vec<_>>();
        output.push_str(&format!("Fall of Wickets: {}\n\n", falls.join(", ")));
    }

    let top_bowler = scorecard::top_bowler(inning);
    output.push_str("| Bowler | O | M | R | W | Econ |\n");
    output.push_str("|---|---|---|---|---|---|\n");
    for bowler in inning.bowlers.iter().filter(|bowler| bowler.bowled()) {
        let star = match top_bowler {
            Some(top) if std::ptr::eq(top, bowler) && bowler.wickets > 0 => " *",
            _ => "",
        };
        output.push_str(&format!(
            "| {}{star} | {}.{} | {} | {} | {} | {} |\n",
            display_name(&bowler.name, &bowler.roles),
            bowler.overs,
            bowler.balls,
            bowler.maidens,
            bowler.runs_conceded,
            bowler.wickets,
            scorecard::economy_display(bowler)
        ));
    }
    output.push('\n');
}

pub fn scorecard_to_markdown(m: &Match) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {} vs {}\n\n", m.team_a, m.team_b));
    match scorecard::match_result(m) {
        Some(line) => output.push_str(&format!("Result: {line}\n\n")),
        None => output.push_str(&format!("Status: {}\n\n", scorecard::live_status(m))),
    }

    for inning in m.innings.iter().take(2) {
        inning_section(&mut output, inning);
    }

    if let Some(motm) = &m.man_of_the_match {
        output.push_str(&format!(
            "Man of the Match: {} ({})\n",
            motm.name, motm.team_name
        ));
    }
    output
}
