use crate::motm::consolidate::Candidate;
use crate::types::performance::PlayerPerformance;

pub const WINNING_TEAM_MULTIPLIER: f64 = 1.2;

/// Applies the winning-side multiplier to the raw total, then rounds half up.
pub fn final_points(raw_points: u32, on_winning_side: bool) -> u32 {
    let mut points = f64::from(raw_points);
    if on_winning_side {
        points *= WINNING_TEAM_MULTIPLIER;
    }
    // points are never negative, so rounding half away from zero is half up
    points.round() as u32
}

/// Final points for every candidate, best first. Equal points keep the order
/// in which players first appeared.
pub fn rank(candidates: Vec<Candidate>, winning_team: Option<&str>) -> Vec<PlayerPerformance> {
    let mut ranked: Vec<(usize, PlayerPerformance)> = candidates
        .into_iter()
        .map(|candidate| {
            let on_winning_side = winning_team == Some(candidate.team_name.as_str());
            (
                candidate.order,
                PlayerPerformance {
                    points: final_points(candidate.raw_points, on_winning_side),
                    name: candidate.name,
                    photo_url: candidate.photo_url,
                    team_name: candidate.team_name,
                    performance_summary: candidate.summary,
                    roles: candidate.roles,
                },
            )
        })
        .collect();

    ranked.sort_by(|(left_order, left), (right_order, right)| {
        right
            .points
            .cmp(&left.points)
            .then_with(|| left_order.cmp(right_order))
    });
    ranked.into_iter().map(|(_, performance)| performance).collect()
}

/// Candidates offered for a manual override: everyone with points, or just
/// the top pick when nobody scored.
pub fn override_candidates(ranked: &[PlayerPerformance]) -> Vec<PlayerPerformance> {
    let scoring: Vec<_> = ranked
        .iter()
        .filter(|performance| performance.points > 0)
        .cloned()
        .collect();
    if scoring.is_empty() {
        ranked.iter().take(1).cloned().collect()
    } else {
        scoring
    }
}
