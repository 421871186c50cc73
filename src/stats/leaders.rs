use super::types::{LeaderRow, Leaderboard, PlayerSeasonSummary, Stat};

pub const DEFAULT_TOP_N: usize = 10;

/// Top `top_n` players by `stat` among those with at least `minimum_games`.
///
/// Filtering happens before truncation, so a player below the games
/// threshold never takes a qualifying player's place. GP is always the
/// second column, so it is dropped from `columns`.
pub fn project_leaders(
    summaries: &[PlayerSeasonSummary],
    stat: Stat,
    minimum_games: u32,
    columns: &[Stat],
    top_n: usize,
) -> Leaderboard {
    let mut qualified: Vec<&PlayerSeasonSummary> = summaries
        .iter()
        .filter(|s| s.games_played >= minimum_games)
        .collect();

    qualified.sort_by(|a, b| stat.value(b).total_cmp(&stat.value(a)));
    qualified.truncate(top_n);

    let columns: Vec<Stat> = columns
        .iter()
        .copied()
        .filter(|c| *c != Stat::GamesPlayed)
        .collect();

    Leaderboard {
        stat,
        rows: qualified.into_iter().map(|s| project_row(s, &columns)).collect(),
        columns,
    }
}

fn project_row(summary: &PlayerSeasonSummary, columns: &[Stat]) -> LeaderRow {
    LeaderRow {
        player: summary.player.clone(),
        games_played: summary.games_played,
        values: columns.iter().map(|c| c.value(summary)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoxScoreLine;
    use crate::stats::aggregate;

    fn season(games: &[(&str, u32, u32)]) -> Vec<PlayerSeasonSummary> {
        let mut lines = Vec::new();
        for &(player, gp, pts) in games {
            for _ in 0..gp {
                lines.push(BoxScoreLine::scoring(player, pts));
            }
        }
        aggregate(&lines)
    }

    #[test]
    fn test_minimum_games_filter() {
        let summaries = season(&[("one", 1, 40), ("two", 2, 30), ("three", 3, 20), ("four", 4, 10)]);

        let board = project_leaders(&summaries, Stat::Points, 3, &[Stat::Points], DEFAULT_TOP_N);

        let names: Vec<&str> = board.rows.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(names, vec!["three", "four"]);
        assert!(board.rows.iter().all(|r| r.games_played >= 3));
    }

    #[test]
    fn test_truncates_to_top_n_sorted() {
        let players: Vec<(String, u32, u32)> =
            (0..15).map(|i| (format!("p{i}"), 1, i)).collect();
        let refs: Vec<(&str, u32, u32)> =
            players.iter().map(|(n, g, p)| (n.as_str(), *g, *p)).collect();
        let summaries = season(&refs);

        let board = project_leaders(&summaries, Stat::Points, 1, &[Stat::Points], 10);

        assert_eq!(board.rows.len(), 10);
        assert_eq!(board.rows[0].player, "p14");
        assert!(board.rows.windows(2).all(|w| w[0].values[0] >= w[1].values[0]));
    }

    #[test]
    fn test_fewer_qualifiers_than_top_n() {
        let summaries = season(&[("a", 2, 10), ("b", 2, 12)]);

        let board = project_leaders(&summaries, Stat::Points, 1, &[], 10);

        assert_eq!(board.rows.len(), 2);
    }

    #[test]
    fn test_nobody_qualifies() {
        let summaries = season(&[("a", 1, 10)]);

        let board = project_leaders(&summaries, Stat::Points, 5, &[Stat::Points], 10);

        assert!(board.rows.is_empty());
    }

    #[test]
    fn test_ties_preserve_order() {
        let summaries = vec![
            summary_with_assists("x", 4.0),
            summary_with_assists("y", 6.0),
            summary_with_assists("z", 4.0),
        ];

        let board = project_leaders(&summaries, Stat::Assists, 0, &[Stat::Assists], 10);

        let names: Vec<&str> = board.rows.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(names, vec!["y", "x", "z"]);
    }

    #[test]
    fn test_projects_requested_columns() {
        let summaries = season(&[("a", 2, 10)]);

        let board = project_leaders(
            &summaries,
            Stat::Points,
            1,
            &[Stat::Points, Stat::FieldGoalPct],
            10,
        );

        assert_eq!(board.columns, vec![Stat::Points, Stat::FieldGoalPct]);
        assert_eq!(board.rows[0].values, vec![10.0, 0.0]);
    }

    #[test]
    fn test_games_played_column_not_repeated() {
        let summaries = season(&[("a", 2, 10), ("b", 3, 4)]);

        let board = project_leaders(&summaries, Stat::GamesPlayed, 1, &[Stat::GamesPlayed, Stat::Points], 10);

        assert_eq!(board.columns, vec![Stat::Points]);
        assert_eq!(board.rows[0].player, "b");
        assert_eq!(board.rows[0].values, vec![4.0]);
    }

    fn summary_with_assists(player: &str, ast: f64) -> PlayerSeasonSummary {
        let mut summary = aggregate(&[BoxScoreLine::scoring(player, 0)]).remove(0);
        summary.ast = ast;
        summary
    }
}
