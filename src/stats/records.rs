use std::cmp::Ordering;

use crate::domain::{GameResult, RosterEntry};
use super::types::{GroupStandings, TeamRecord};

/// Win/loss record of `team` over every result it took part in.
///
/// Margins are signed from the team's side. Equal scores count as a draw:
/// a game played, neither a win nor a loss, margin 0.
pub fn compute_record(team: &str, results: &[GameResult]) -> TeamRecord {
    let mut record = TeamRecord {
        team: team.to_string(),
        games_played: 0,
        wins: 0,
        losses: 0,
        draws: 0,
        win_pct: 0.0,
        margin: 0.0,
    };
    let mut margin_sum: i64 = 0;

    for (own, opp) in results.iter().filter_map(|r| r.scores_for(team)) {
        record.games_played += 1;
        match own.cmp(&opp) {
            Ordering::Greater => record.wins += 1,
            Ordering::Less => record.losses += 1,
            Ordering::Equal => record.draws += 1,
        }
        margin_sum += own as i64 - opp as i64;
    }

    if record.games_played > 0 {
        record.win_pct = record.wins as f64 / record.games_played as f64;
        record.margin = margin_sum as f64 / record.games_played as f64;
    }

    record
}

/// Records for every team, best win percentage first, then most games played
pub fn compute_standings(teams: &[String], results: &[GameResult]) -> Vec<TeamRecord> {
    let mut standings: Vec<TeamRecord> = teams
        .iter()
        .map(|team| compute_record(team, results))
        .collect();

    standings.sort_by(|a, b| {
        b.win_pct
            .total_cmp(&a.win_pct)
            .then(b.games_played.cmp(&a.games_played))
    });
    standings
}

/// Splits standings by roster group, keeping standings order within a group.
///
/// Groups appear in roster order; teams without a group are left out.
pub fn group_standings(standings: &[TeamRecord], roster: &[RosterEntry]) -> Vec<GroupStandings> {
    let mut groups: Vec<GroupStandings> = Vec::new();

    for entry in roster {
        let Some(group) = &entry.group else { continue };
        if !groups.iter().any(|g| &g.group == group) {
            groups.push(GroupStandings {
                group: group.clone(),
                records: Vec::new(),
            });
        }
    }

    for group in &mut groups {
        group.records = standings
            .iter()
            .filter(|record| {
                roster
                    .iter()
                    .any(|e| e.team == record.team && e.group.as_ref() == Some(&group.group))
            })
            .cloned()
            .collect();
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_win_and_loss_margin() {
        let results = vec![
            GameResult::new("Hawks", 100, "Bulls", 90),
            GameResult::new("Nets", 95, "Hawks", 80),
        ];

        let record = compute_record("Hawks", &results);

        assert_eq!(record.games_played, 2);
        assert_eq!(record.wins, 1);
        assert_eq!(record.losses, 1);
        assert_eq!(record.win_pct, 0.5);
        assert_eq!(record.margin, 2.5);
    }

    #[test]
    fn test_no_games() {
        let record = compute_record("Ghosts", &[GameResult::new("A", 1, "B", 0)]);

        assert_eq!(record.games_played, 0);
        assert_eq!(record.win_pct, 0.0);
        assert_eq!(record.margin, 0.0);
    }

    #[test]
    fn test_tie_is_a_draw_for_both_sides() {
        let results = vec![GameResult::new("A", 70, "B", 70)];

        for team in ["A", "B"] {
            let record = compute_record(team, &results);
            assert_eq!(record.games_played, 1);
            assert_eq!(record.wins, 0);
            assert_eq!(record.losses, 0);
            assert_eq!(record.draws, 1);
            assert_eq!(record.margin, 0.0);
        }
    }

    #[test]
    fn test_standings_order() {
        let results = vec![
            GameResult::new("A", 10, "B", 5),
            GameResult::new("C", 10, "D", 5),
            GameResult::new("C", 10, "B", 5),
            GameResult::new("D", 10, "B", 5),
        ];

        let standings = compute_standings(&teams(&["B", "D", "A", "C"]), &results);

        let order: Vec<&str> = standings.iter().map(|r| r.team.as_str()).collect();
        // C and A both at 1.000; C has more games
        assert_eq!(order, vec!["C", "A", "D", "B"]);
        assert!(standings.iter().all(|r| (0.0..=1.0).contains(&r.win_pct)));
    }

    #[test]
    fn test_group_standings_keep_order() {
        let results = vec![
            GameResult::new("A", 10, "B", 5),
            GameResult::new("C", 10, "D", 5),
        ];
        let roster = vec![
            RosterEntry::in_group("B", "East"),
            RosterEntry::in_group("C", "West"),
            RosterEntry::in_group("A", "East"),
            RosterEntry::in_group("D", "West"),
            RosterEntry::new("E"),
        ];
        let standings = compute_standings(&teams(&["A", "B", "C", "D", "E"]), &results);

        let groups = group_standings(&standings, &roster);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group, "East");
        let east: Vec<&str> = groups[0].records.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(east, vec!["A", "B"]);
        assert_eq!(groups[1].records[0].team, "C");
    }
}
