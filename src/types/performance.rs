use crate::types::matches::{MotmSelection, PlayerRoles};
use serde::Serialize;

/// One player's scored contribution to a match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPerformance {
    pub name: String,
    pub photo_url: Option<String>,
    pub team_name: String,
    pub points: u32,
    pub performance_summary: String,
    #[serde(flatten)]
    pub roles: PlayerRoles,
}

/// The automatic Man of the Match pick plus everyone eligible for a manual
/// override, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotmResult {
    #[serde(flatten)]
    pub winner: PlayerPerformance,
    pub all_candidates: Vec<PlayerPerformance>,
}

impl From<&PlayerPerformance> for MotmSelection {
    fn from(performance: &PlayerPerformance) -> Self {
        Self {
            name: performance.name.clone(),
            photo_url: performance.photo_url.clone(),
            team_name: performance.team_name.clone(),
        }
    }
}
