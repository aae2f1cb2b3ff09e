use crate::motm::rules::ScoredPerformance;
use crate::types::matches::PlayerRoles;
use std::collections::HashMap;

pub const SUMMARY_SEPARATOR: &str = " & ";

/// A player's merged contribution before the winning-side bonus.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub photo_url: Option<String>,
    pub team_name: String,
    pub raw_points: u32,
    pub summary: String,
    pub roles: PlayerRoles,
    /// Position of the player's first appearance; breaks ties when ranking.
    pub order: usize,
}

impl Candidate {
    fn new(performance: ScoredPerformance, order: usize) -> Self {
        Self {
            name: performance.name,
            photo_url: performance.photo_url,
            team_name: performance.team_name,
            raw_points: performance.points,
            summary: performance.summary,
            roles: performance.roles,
            order,
        }
    }

    fn absorb(&mut self, performance: ScoredPerformance) {
        self.raw_points = self.raw_points.saturating_add(performance.points);
        self.team_name = performance.team_name;
        self.append_summary(&performance.summary);
    }

    fn append_summary(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if self
            .summary
            .split(SUMMARY_SEPARATOR)
            .any(|part| part == fragment)
        {
            return;
        }
        if self.summary.is_empty() {
            self.summary = fragment.to_string();
        } else {
            self.summary = format!("{}{SUMMARY_SEPARATOR}{fragment}", self.summary);
        }
    }
}

/// Merges performances by player name, keeping first-appearance order.
/// Photo and role details come from the first appearance.
pub fn consolidate<I>(performances: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = ScoredPerformance>,
{
    let (candidates, _) = performances.into_iter().fold(
        (Vec::<Candidate>::new(), HashMap::<String, usize>::new()),
        |(mut candidates, mut index), performance| {
            match index.get(&performance.name) {
                Some(&slot) => candidates[slot].absorb(performance),
                None => {
                    let order = candidates.len();
                    index.insert(performance.name.clone(), order);
                    candidates.push(Candidate::new(performance, order));
                }
            }
            (candidates, index)
        },
    );
    candidates
}
