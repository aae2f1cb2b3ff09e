use crate::motm::extract::{Appearance, Contribution};
use crate::types::matches::{Batsman, Bowler, PlayerRoles};

pub const CENTURY_BONUS: u32 = 30;
pub const HALF_CENTURY_BONUS: u32 = 15;
pub const STRIKE_RATE_MIN_RUNS: u32 = 20;
pub const NOT_OUT_CHASE_BONUS: u32 = 15;

pub const POINTS_PER_WICKET: u32 = 20;
pub const FIVE_WICKET_BONUS: u32 = 25;
pub const THREE_WICKET_BONUS: u32 = 10;
pub const POINTS_PER_MAIDEN: u32 = 10;
pub const ECONOMY_MIN_BALLS: u32 = 12;

/// A single appearance after the point rules have been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPerformance {
    pub name: String,
    pub photo_url: Option<String>,
    pub team_name: String,
    pub points: u32,
    pub summary: String,
    pub roles: PlayerRoles,
}

pub fn strike_rate(runs: u32, balls: u32) -> f64 {
    if balls > 0 {
        (f64::from(runs) / f64::from(balls)) * 100.0
    } else {
        0.0
    }
}

pub fn economy(runs_conceded: u32, balls: u32) -> f64 {
    if balls > 0 {
        (f64::from(runs_conceded) / f64::from(balls)) * 6.0
    } else {
        0.0
    }
}

fn milestone_bonus(runs: u32) -> u32 {
    if runs >= 100 {
        CENTURY_BONUS
    } else if runs >= 50 {
        HALF_CENTURY_BONUS
    } else {
        0
    }
}

fn strike_rate_bonus(runs: u32, balls: u32) -> u32 {
    if runs < STRIKE_RATE_MIN_RUNS {
        return 0;
    }
    let rate = strike_rate(runs, balls);
    if rate >= 200.0 {
        20
    } else if rate >= 150.0 {
        10
    } else if rate >= 120.0 {
        5
    } else {
        0
    }
}

fn haul_bonus(wickets: u32) -> u32 {
    if wickets >= 5 {
        FIVE_WICKET_BONUS
    } else if wickets >= 3 {
        THREE_WICKET_BONUS
    } else {
        0
    }
}

fn economy_bonus(runs_conceded: u32, balls: u32) -> u32 {
    if balls < ECONOMY_MIN_BALLS {
        return 0;
    }
    let rate = economy(runs_conceded, balls);
    if rate <= 4.0 {
        15
    } else if rate <= 6.0 {
        5
    } else {
        0
    }
}

/// Batting points. `finished_chase` is true for an unbeaten innings in a
/// successful second-innings chase.
pub fn batting_points(batsman: &Batsman, finished_chase: bool) -> u32 {
    let mut points = batsman
        .runs
        .saturating_add(milestone_bonus(batsman.runs))
        .saturating_add(strike_rate_bonus(batsman.runs, batsman.balls));
    if finished_chase {
        points = points.saturating_add(NOT_OUT_CHASE_BONUS);
    }
    points
}

/// Totals saturate at `u32::MAX` instead of overflowing on absurd counts.
pub fn bowling_points(bowler: &Bowler) -> u32 {
    bowler
        .wickets
        .saturating_mul(POINTS_PER_WICKET)
        .saturating_add(haul_bonus(bowler.wickets))
        .saturating_add(bowler.maidens.saturating_mul(POINTS_PER_MAIDEN))
        .saturating_add(economy_bonus(bowler.runs_conceded, bowler.total_balls()))
}

pub fn batting_summary(batsman: &Batsman) -> String {
    format!("{} ({})", batsman.runs, batsman.balls)
}

/// Empty when the bowler neither took a wicket nor conceded a run.
pub fn bowling_summary(bowler: &Bowler) -> String {
    if bowler.wickets > 0 || bowler.runs_conceded > 0 {
        format!("{}/{}", bowler.wickets, bowler.runs_conceded)
    } else {
        String::new()
    }
}

pub fn score(appearance: &Appearance<'_>, winning_team: Option<&str>) -> ScoredPerformance {
    match appearance.contribution {
        Contribution::Batting(batsman) => {
            let finished_chase = !batsman.is_out
                && appearance.inning_index == 1
                && winning_team == Some(appearance.team);
            ScoredPerformance {
                name: appearance.name().to_string(),
                photo_url: batsman.photo_url.clone(),
                team_name: appearance.team.to_string(),
                points: batting_points(batsman, finished_chase),
                summary: batting_summary(batsman),
                roles: batsman.roles.clone(),
            }
        }
        Contribution::Bowling(bowler) => ScoredPerformance {
            name: appearance.name().to_string(),
            photo_url: bowler.photo_url.clone(),
            team_name: appearance.team.to_string(),
            points: bowling_points(bowler),
            summary: bowling_summary(bowler),
            roles: bowler.roles.clone(),
        },
    }
}
