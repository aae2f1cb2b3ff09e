use crate::types::matches::{Batsman, Bowler, Inning, Match};

fn plural(count: u32, singular: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {many}")
    }
}

/// Result line for a finished match, `None` until the chase has started.
pub fn match_result(m: &Match) -> Option<String> {
    let first = m.first_inning()?;
    let second = m.second_inning()?;

    if second.score >= m.target {
        let wickets_left = m
            .players_per_team
            .saturating_sub(1)
            .saturating_sub(second.wickets);
        return Some(format!(
            "{} won by {}",
            second.batting_team,
            plural(wickets_left, "wicket", "wickets")
        ));
    }
    if first.score > second.score {
        return Some(format!(
            "{} won by {}",
            first.batting_team,
            plural(first.score - second.score, "run", "runs")
        ));
    }
    Some("Match Tied".to_string())
}

/// One-line status as shown on a live match card.
pub fn live_status(m: &Match) -> String {
    let mut status = m
        .toss
        .as_ref()
        .map(|toss| format!("{} won the toss and elected to {}", toss.winner, toss.decision))
        .unwrap_or_else(|| "Yet to start".to_string());

    if let Some(first) = m.first_inning() {
        status = format!("{} are {}", first.batting_team, inning_score(first));
    }
    if let Some(second) = m.second_inning() {
        let remaining_runs = i64::from(m.target) - i64::from(second.score);
        let remaining_balls = i64::from(m.overs) * 6 - i64::from(second.balls_bowled());
        if remaining_runs > 0 && remaining_balls > 0 {
            status = format!(
                "{} need {remaining_runs} runs in {remaining_balls} balls.",
                second.batting_team
            );
        }
    }
    status
}

pub fn inning_score(inning: &Inning) -> String {
    format!("{}/{}", inning.score, inning.wickets)
}

pub fn inning_overs(inning: &Inning) -> String {
    format!("{}.{}", inning.overs, inning.balls)
}

/// `score/wickets` for the given team, or `-` if it has not batted.
pub fn team_score(m: &Match, team: &str) -> String {
    m.innings
        .iter()
        .take(2)
        .find(|inning| inning.batting_team == team)
        .map(inning_score)
        .unwrap_or_else(|| "-".to_string())
}

pub fn strike_rate_display(batsman: &Batsman) -> String {
    format!(
        "{:.2}",
        crate::motm::rules::strike_rate(batsman.runs, batsman.balls)
    )
}

pub fn economy_display(bowler: &Bowler) -> String {
    format!(
        "{:.2}",
        crate::motm::rules::economy(bowler.runs_conceded, bowler.total_balls())
    )
}

pub fn did_not_bat(inning: &Inning) -> Vec<&Batsman> {
    inning
        .batsmen
        .iter()
        .filter(|batsman| !batsman.batted())
        .collect()
}

/// Highest scorer among those who batted; the earlier entry wins ties.
pub fn top_batsman(inning: &Inning) -> Option<&Batsman> {
    inning
        .batsmen
        .iter()
        .filter(|batsman| batsman.batted())
        .fold(None, |best: Option<&Batsman>, current| match best {
            Some(best) if current.runs <= best.runs => Some(best),
            _ => Some(current),
        })
}

/// Most wickets, then fewest runs conceded; the earlier entry wins ties.
pub fn top_bowler(inning: &Inning) -> Option<&Bowler> {
    inning
        .bowlers
        .iter()
        .filter(|bowler| bowler.bowled())
        .fold(None, |best: Option<&Bowler>, current| match best {
            Some(best)
                if current.wickets < best.wickets
                    || (current.wickets == best.wickets
                        && current.runs_conceded >= best.runs_conceded) =>
            {
                Some(best)
            }
            _ => Some(current),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::matches::Toss;

    fn inning(batting: &str, bowling: &str, score: u32, wickets: u32) -> Inning {
        Inning {
            batting_team: batting.to_string(),
            bowling_team: bowling.to_string(),
            score,
            wickets,
            ..Inning::default()
        }
    }

    fn two_innings(first: Inning, second: Inning, target: u32) -> Match {
        Match {
            team_a: "A".to_string(),
            team_b: "B".to_string(),
            overs: 20,
            target,
            innings: vec![first, second],
            ..Match::default()
        }
    }

    #[test]
    fn chase_result_counts_wickets_in_hand() {
        let m = two_innings(inning("A", "B", 150, 10), inning("B", "A", 151, 4), 151);
        assert_eq!(match_result(&m).as_deref(), Some("B won by 6 wickets"));
    }

    #[test]
    fn chase_result_uses_singular_wicket() {
        let m = two_innings(inning("A", "B", 150, 10), inning("B", "A", 152, 9), 151);
        assert_eq!(match_result(&m).as_deref(), Some("B won by 1 wicket"));
    }

    #[test]
    fn defended_total_counts_runs() {
        let m = two_innings(inning("A", "B", 150, 10), inning("B", "A", 149, 10), 151);
        assert_eq!(match_result(&m).as_deref(), Some("A won by 1 run"));
    }

    #[test]
    fn equal_totals_are_a_tie() {
        let m = two_innings(inning("A", "B", 150, 10), inning("B", "A", 150, 10), 151);
        assert_eq!(match_result(&m).as_deref(), Some("Match Tied"));
    }

    #[test]
    fn no_result_before_the_chase() {
        let m = Match {
            innings: vec![inning("A", "B", 150, 10)],
            ..Match::default()
        };
        assert!(match_result(&m).is_none());
    }

    #[test]
    fn live_status_follows_match_progress() {
        let mut m = Match {
            overs: 20,
            target: 151,
            toss: Some(Toss {
                winner: "A".to_string(),
                decision: "bat".to_string(),
            }),
            ..Match::default()
        };
        assert_eq!(live_status(&m), "A won the toss and elected to bat");

        m.innings.push(inning("A", "B", 150, 7));
        assert_eq!(live_status(&m), "A are 150/7");

        let mut chase = inning("B", "A", 100, 3);
        chase.overs = 15;
        m.innings.push(chase);
        assert_eq!(live_status(&m), "B need 51 runs in 30 balls.");
    }

    #[test]
    fn team_score_reports_dash_for_teams_yet_to_bat() {
        let m = Match {
            innings: vec![inning("A", "B", 150, 7)],
            ..Match::default()
        };
        assert_eq!(team_score(&m, "A"), "150/7");
        assert_eq!(team_score(&m, "B"), "-");
    }

    #[test]
    fn top_performers_break_ties_on_first_entry() {
        let mut inn = inning("A", "B", 0, 0);
        inn.batsmen = vec![
            Batsman {
                name: "first".to_string(),
                runs: 30,
                balls: 20,
                ..Batsman::default()
            },
            Batsman {
                name: "second".to_string(),
                runs: 30,
                balls: 25,
                ..Batsman::default()
            },
        ];
        inn.bowlers = vec![
            Bowler {
                name: "expensive".to_string(),
                overs: 4,
                wickets: 2,
                runs_conceded: 40,
                ..Bowler::default()
            },
            Bowler {
                name: "tight".to_string(),
                overs: 4,
                wickets: 2,
                runs_conceded: 20,
                ..Bowler::default()
            },
        ];

        assert_eq!(top_batsman(&inn).map(|b| b.name.as_str()), Some("first"));
        assert_eq!(top_bowler(&inn).map(|b| b.name.as_str()), Some("tight"));
    }

    #[test]
    fn display_rates_use_two_decimals() {
        let batsman = Batsman {
            runs: 45,
            balls: 30,
            ..Batsman::default()
        };
        let bowler = Bowler {
            overs: 3,
            balls: 2,
            runs_conceded: 25,
            ..Bowler::default()
        };
        assert_eq!(strike_rate_display(&batsman), "150.00");
        assert_eq!(economy_display(&bowler), "7.50");
    }
}
