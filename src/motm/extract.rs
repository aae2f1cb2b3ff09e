use crate::types::matches::{Batsman, Bowler, Match};

/// Only the first two innings count towards the award.
pub const MAX_INNINGS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contribution<'a> {
    Batting(&'a Batsman),
    Bowling(&'a Bowler),
}

/// One batting or bowling record that took part in the match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance<'a> {
    pub contribution: Contribution<'a>,
    /// Batting team for batting records, bowling team for bowling records.
    pub team: &'a str,
    pub inning_index: usize,
}

impl Appearance<'_> {
    pub fn name(&self) -> &str {
        match self.contribution {
            Contribution::Batting(batsman) => &batsman.name,
            Contribution::Bowling(bowler) => &bowler.name,
        }
    }
}

/// Walks the innings in order, batsmen before bowlers, keeping source order.
/// Batsmen who never faced a ball and were not dismissed are skipped, as are
/// bowlers who did not deliver a ball.
pub fn appearances(m: &Match) -> Vec<Appearance<'_>> {
    let mut out = Vec::new();
    for (inning_index, inning) in m.innings.iter().take(MAX_INNINGS).enumerate() {
        out.extend(
            inning
                .batsmen
                .iter()
                .filter(|batsman| batsman.batted())
                .map(|batsman| Appearance {
                    contribution: Contribution::Batting(batsman),
                    team: inning.batting_team.as_str(),
                    inning_index,
                }),
        );
        out.extend(
            inning
                .bowlers
                .iter()
                .filter(|bowler| bowler.bowled())
                .map(|bowler| Appearance {
                    contribution: Contribution::Bowling(bowler),
                    team: inning.bowling_team.as_str(),
                    inning_index,
                }),
        );
    }
    out
}
