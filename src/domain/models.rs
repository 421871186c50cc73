use serde::{Deserialize, Serialize};

/// One player's stat line for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxScoreLine {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "FGM")]
    pub fgm: u32,
    #[serde(rename = "FGA")]
    pub fga: u32,
    #[serde(rename = "3PM")]
    pub tpm: u32,
    #[serde(rename = "3PA")]
    pub tpa: u32,
    #[serde(rename = "REB")]
    pub reb: u32,
    #[serde(rename = "AST")]
    pub ast: u32,
    #[serde(rename = "STL")]
    pub stl: u32,
    #[serde(rename = "BLK")]
    pub blk: u32,
    #[serde(rename = "TO")]
    pub tov: u32,
    #[serde(rename = "PTS")]
    pub pts: u32,
}

impl BoxScoreLine {
    /// Line with only a name and points, everything else zero
    pub fn scoring(player: &str, pts: u32) -> Self {
        Self {
            player: player.to_string(),
            fgm: 0,
            fga: 0,
            tpm: 0,
            tpa: 0,
            reb: 0,
            ast: 0,
            stl: 0,
            blk: 0,
            tov: 0,
            pts,
        }
    }
}

/// Box score of one game, as recorded by one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxScore {
    /// Team whose players are listed
    pub team: String,
    /// Game identifier (file stem in the directory layout)
    pub game: String,
    pub lines: Vec<BoxScoreLine>,
}

impl BoxScore {
    pub fn new(team: &str, game: &str, lines: Vec<BoxScoreLine>) -> Self {
        Self {
            team: team.to_string(),
            game: game.to_string(),
            lines,
        }
    }

    /// Whether this game was played against `opponent`
    pub fn is_against(&self, opponent: &str) -> bool {
        self.team != opponent && self.game.contains(opponent)
    }
}

/// Final score of one head-to-head game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub first_team: String,
    pub first_score: u32,
    pub second_team: String,
    pub second_score: u32,
}

impl GameResult {
    pub fn new(first_team: &str, first_score: u32, second_team: &str, second_score: u32) -> Self {
        Self {
            first_team: first_team.to_string(),
            first_score,
            second_team: second_team.to_string(),
            second_score,
        }
    }

    /// `(own score, opponent score)` from `team`'s side, if it played
    pub fn scores_for(&self, team: &str) -> Option<(u32, u32)> {
        if self.first_team == team {
            Some((self.first_score, self.second_score))
        } else if self.second_team == team {
            Some((self.second_score, self.first_score))
        } else {
            None
        }
    }
}

/// Team membership from the roster file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Group", default)]
    pub group: Option<String>,
}

impl RosterEntry {
    pub fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            group: None,
        }
    }

    pub fn in_group(team: &str, group: &str) -> Self {
        Self {
            team: team.to_string(),
            group: Some(group.to_string()),
        }
    }
}

/// Everything a source holds for one season
#[derive(Debug, Clone, Default)]
pub struct SeasonData {
    pub box_scores: Vec<BoxScore>,
    pub results: Vec<GameResult>,
    pub roster: Vec<RosterEntry>,
}

impl SeasonData {
    /// All player lines, optionally restricted to one team's box scores
    pub fn lines(&self, team: Option<&str>) -> Vec<BoxScoreLine> {
        self.box_scores
            .iter()
            .filter(|b| team.is_none_or(|t| b.team == t))
            .flat_map(|b| b.lines.iter().cloned())
            .collect()
    }

    pub fn team_names(&self) -> Vec<String> {
        self.roster.iter().map(|r| r.team.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_for_each_side() {
        let game = GameResult::new("Hawks", 100, "Bulls", 90);

        assert_eq!(game.scores_for("Hawks"), Some((100, 90)));
        assert_eq!(game.scores_for("Bulls"), Some((90, 100)));
        assert_eq!(game.scores_for("Nets"), None);
    }

    #[test]
    fn test_box_score_opponent_match() {
        let box_score = BoxScore::new("Mambas", "g3-CT6", vec![]);

        assert!(box_score.is_against("CT6"));
        assert!(!box_score.is_against("Mambas"));
        assert!(!box_score.is_against("Eagles"));
    }

    #[test]
    fn test_lines_scoped_to_team() {
        let data = SeasonData {
            box_scores: vec![
                BoxScore::new("A", "g1", vec![BoxScoreLine::scoring("x", 1)]),
                BoxScore::new("B", "g1", vec![BoxScoreLine::scoring("y", 2)]),
            ],
            ..Default::default()
        };

        assert_eq!(data.lines(None).len(), 2);
        assert_eq!(data.lines(Some("B"))[0].player, "y");
    }
}
