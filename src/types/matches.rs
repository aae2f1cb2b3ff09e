use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single match as stored and exchanged in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    pub id: String,
    pub team_a: String,
    pub team_b: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_a_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_b_logo: Option<String>,
    pub overs: u32,
    pub players_per_team: u32,
    pub target: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toss: Option<Toss>,
    pub innings: Vec<Inning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub man_of_the_match: Option<MotmSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Default for Match {
    fn default() -> Self {
        Self {
            id: String::new(),
            team_a: String::new(),
            team_b: String::new(),
            team_a_logo: None,
            team_b_logo: None,
            overs: 0,
            players_per_team: 11,
            target: 0,
            toss: None,
            innings: Vec::new(),
            man_of_the_match: None,
            completed_at: None,
        }
    }
}

impl Match {
    pub fn first_inning(&self) -> Option<&Inning> {
        self.innings.first()
    }

    pub fn second_inning(&self) -> Option<&Inning> {
        self.innings.get(1)
    }

    /// Team credited with the win, if the match has a winner.
    ///
    /// The chasing side wins once it reaches the target; otherwise the side
    /// batting first wins only when both innings exist and it outscored the
    /// chase. Anything else is treated as a tie.
    pub fn winning_team(&self) -> Option<&str> {
        let first = self.first_inning();
        let second = self.second_inning();

        if let Some(second) = second {
            if second.score >= self.target {
                return Some(second.batting_team.as_str());
            }
        }
        match (first, second) {
            (Some(first), Some(second)) if first.score > second.score => {
                Some(first.batting_team.as_str())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Toss {
    pub winner: String,
    pub decision: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inning {
    pub batting_team: String,
    pub bowling_team: String,
    pub score: u32,
    pub wickets: u32,
    pub overs: u32,
    pub balls: u32,
    pub extras: Extras,
    pub fall_of_wickets: Vec<FallOfWicket>,
    pub batsmen: Vec<Batsman>,
    pub bowlers: Vec<Bowler>,
}

impl Inning {
    pub fn balls_bowled(&self) -> u32 {
        self.overs.saturating_mul(6).saturating_add(self.balls)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Extras {
    pub wides: u32,
    pub no_balls: u32,
    pub byes: u32,
    pub leg_byes: u32,
}

impl Extras {
    pub fn total(&self) -> u32 {
        self.wides
            .saturating_add(self.no_balls)
            .saturating_add(self.byes)
            .saturating_add(self.leg_byes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FallOfWicket {
    pub score: u32,
    pub wicket: u32,
    pub batsman_name: String,
    pub over: String,
}

/// Captaincy and keeping flags shared by batting and bowling records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRoles {
    pub is_captain: bool,
    pub is_vice_captain: bool,
    pub is_wicket_keeper: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl PlayerRoles {
    /// Short role tags as shown next to a name, e.g. `C, WK`.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags = Vec::new();
        if self.is_captain {
            tags.push("C");
        }
        if self.is_vice_captain {
            tags.push("VC");
        }
        if self.is_wicket_keeper {
            tags.push("WK");
        }
        if let Some(specialty) = self.specialty.as_deref() {
            tags.push(specialty);
        }
        tags
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Batsman {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub photo_url: Option<String>,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub is_out: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_by: Option<String>,
    #[serde(flatten)]
    pub roles: PlayerRoles,
}

impl Batsman {
    /// Faced a delivery or was dismissed without facing one.
    pub fn batted(&self) -> bool {
        self.balls > 0 || self.is_out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bowler {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub photo_url: Option<String>,
    pub overs: u32,
    pub balls: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub maidens: u32,
    #[serde(flatten)]
    pub roles: PlayerRoles,
}

impl Bowler {
    pub fn bowled(&self) -> bool {
        self.overs > 0 || self.balls > 0
    }

    pub fn total_balls(&self) -> u32 {
        self.overs.saturating_mul(6).saturating_add(self.balls)
    }
}

/// The Man of the Match as recorded on a finished match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotmSelection {
    pub name: String,
    pub photo_url: Option<String>,
    pub team_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inning(batting: &str, bowling: &str, score: u32) -> Inning {
        Inning {
            batting_team: batting.to_string(),
            bowling_team: bowling.to_string(),
            score,
            ..Inning::default()
        }
    }

    #[test]
    fn chasing_side_wins_on_reaching_target() {
        let m = Match {
            target: 151,
            innings: vec![inning("A", "B", 150), inning("B", "A", 151)],
            ..Match::default()
        };
        assert_eq!(m.winning_team(), Some("B"));
    }

    #[test]
    fn defending_side_wins_when_chase_falls_short() {
        let m = Match {
            target: 151,
            innings: vec![inning("A", "B", 150), inning("B", "A", 120)],
            ..Match::default()
        };
        assert_eq!(m.winning_team(), Some("A"));
    }

    #[test]
    fn level_scores_have_no_winner() {
        let m = Match {
            target: 151,
            innings: vec![inning("A", "B", 150), inning("B", "A", 150)],
            ..Match::default()
        };
        assert_eq!(m.winning_team(), None);
    }

    #[test]
    fn single_inning_has_no_winner() {
        let m = Match {
            target: 151,
            innings: vec![inning("A", "B", 150)],
            ..Match::default()
        };
        assert_eq!(m.winning_team(), None);
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let raw = r#"{
            "id": "match_1700000000000",
            "teamA": "Lions",
            "teamB": "Tigers",
            "target": 10,
            "innings": [{
                "battingTeam": "Lions",
                "bowlingTeam": "Tigers",
                "batsmen": [{"name": "Asha", "runs": 9, "balls": 6, "isCaptain": true, "specialty": "Batter"}],
                "bowlers": [{"name": "Ravi", "overs": 1, "runsConceded": 9, "isWicketKeeper": false}]
            }]
        }"#;
        let m: Match = serde_json::from_str(raw).expect("match should parse");
        assert_eq!(m.players_per_team, 11);
        let first = m.first_inning().expect("first inning should exist");
        assert!(first.batsmen[0].roles.is_captain);
        assert_eq!(first.batsmen[0].roles.specialty.as_deref(), Some("Batter"));
        assert_eq!(first.bowlers[0].runs_conceded, 9);
        assert!(m.second_inning().is_none());
    }

    #[test]
    fn role_tags_follow_display_order() {
        let roles = PlayerRoles {
            is_captain: true,
            is_vice_captain: false,
            is_wicket_keeper: true,
            specialty: Some("All-rounder".to_string()),
        };
        assert_eq!(roles.tags(), vec!["C", "WK", "All-rounder"]);
    }
}
