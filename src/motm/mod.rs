//! Man of the Match selection.
//!
//! Every batting and bowling appearance is scored with fixed point rules,
//! merged per player, boosted for the winning side and ranked. The whole
//! pipeline is a pure function of the match and never fails: a match with
//! no usable performances still yields a placeholder pick.

pub mod consolidate;
pub mod extract;
pub mod rank;
pub mod rules;

use crate::types::matches::{Match, PlayerRoles};
use crate::types::performance::{MotmResult, PlayerPerformance};
use tracing::debug;

pub const FALLBACK_NAME: &str = "N/A";

pub fn auto_select(m: &Match) -> MotmResult {
    let winning_team = m.winning_team();
    let appearances = extract::appearances(m);
    debug!(
        match_id = %m.id,
        appearances = appearances.len(),
        winning_team = winning_team.unwrap_or("-"),
        "scoring match performances"
    );

    let scored = appearances
        .iter()
        .map(|appearance| rules::score(appearance, winning_team));
    let candidates = consolidate::consolidate(scored);
    let ranked = rank::rank(candidates, winning_team);

    let Some(winner) = ranked.first().cloned() else {
        debug!(match_id = %m.id, "no performances found, using placeholder");
        let placeholder = fallback(m);
        return MotmResult {
            all_candidates: vec![placeholder.clone()],
            winner: placeholder,
        };
    };

    let all_candidates = rank::override_candidates(&ranked);
    debug!(
        match_id = %m.id,
        winner = %winner.name,
        points = winner.points,
        candidates = all_candidates.len(),
        "selected man of the match"
    );
    MotmResult {
        winner,
        all_candidates,
    }
}

/// Placeholder pick named after the first listed batsman of the first
/// innings.
fn fallback(m: &Match) -> PlayerPerformance {
    let first = m.first_inning();
    let batsman = first.and_then(|inning| inning.batsmen.first());
    PlayerPerformance {
        name: batsman
            .map(|batsman| batsman.name.clone())
            .unwrap_or_else(|| FALLBACK_NAME.to_string()),
        photo_url: batsman.and_then(|batsman| batsman.photo_url.clone()),
        team_name: first
            .map(|inning| inning.batting_team.clone())
            .unwrap_or_else(|| FALLBACK_NAME.to_string()),
        points: 0,
        performance_summary: FALLBACK_NAME.to_string(),
        roles: PlayerRoles::default(),
    }
}

/// Looks up a manual pick among the override candidates.
pub fn override_selection<'a>(result: &'a MotmResult, name: &str) -> Option<&'a PlayerPerformance> {
    result
        .all_candidates
        .iter()
        .find(|candidate| candidate.name == name)
}
