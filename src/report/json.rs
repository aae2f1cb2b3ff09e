use crate::scorecard;
use crate::types::matches::{Inning, Match};
use crate::types::performance::MotmResult;
use serde_json::{json, Value};

pub fn motm_to_json(result: &MotmResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

fn inning_summary(inning: &Inning) -> Value {
    json!({
        "battingTeam": inning.batting_team,
        "score": scorecard::inning_score(inning),
        "overs": scorecard::inning_overs(inning),
        "extras": inning.extras.total(),
        "topBatsman": scorecard::top_batsman(inning).map(|batsman| &batsman.name),
        "topBowler": scorecard::top_bowler(inning).map(|bowler| &bowler.name),
        "didNotBat": scorecard::did_not_bat(inning)
            .iter()
            .map(|batsman| batsman.name.as_str())
            .collect::<Vec<_>>(),
    })
}

pub fn scorecard_to_json(m: &Match) -> Result<String, serde_json::Error> {
    let summary = json!({
        "id": m.id,
        "teamA": { "name": m.team_a, "score": scorecard::team_score(m, &m.team_a) },
        "teamB": { "name": m.team_b, "score": scorecard::team_score(m, &m.team_b) },
        "result": scorecard::match_result(m),
        "status": scorecard::live_status(m),
        "innings": m.innings.iter().take(2).map(inning_summary).collect::<Vec<_>>(),
        "manOfTheMatch": m.man_of_the_match,
    });
    serde_json::to_string_pretty(&summary)
}
