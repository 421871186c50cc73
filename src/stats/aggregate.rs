use std::collections::HashMap;

use crate::domain::BoxScoreLine;
use super::types::PlayerSeasonSummary;

/// Running sums for one player
#[derive(Debug, Default)]
struct Totals {
    games: u32,
    fgm: u32,
    fga: u32,
    tpm: u32,
    tpa: u32,
    reb: u32,
    ast: u32,
    stl: u32,
    blk: u32,
    tov: u32,
    pts: u32,
}

impl Totals {
    fn add(&mut self, line: &BoxScoreLine) {
        self.games += 1;
        self.fgm += line.fgm;
        self.fga += line.fga;
        self.tpm += line.tpm;
        self.tpa += line.tpa;
        self.reb += line.reb;
        self.ast += line.ast;
        self.stl += line.stl;
        self.blk += line.blk;
        self.tov += line.tov;
        self.pts += line.pts;
    }

    fn per_game(&self, total: u32) -> f64 {
        ratio(total, self.games)
    }
}

/// Folds per-game lines into one season summary per player.
///
/// Players are keyed by exact name. Output is sorted by points per game,
/// highest first; players with equal scoring keep first-appearance order.
pub fn aggregate(lines: &[BoxScoreLine]) -> Vec<PlayerSeasonSummary> {
    // 1. Group lines by player, remembering first appearance
    let grouped = group_by_player(lines);

    // 2. Derive rates and percentages
    let mut summaries: Vec<PlayerSeasonSummary> = grouped
        .into_iter()
        .map(|(player, totals)| build_summary(player, &totals))
        .collect();

    // 3. Stable sort keeps input order for ties
    summaries.sort_by(|a, b| b.pts.total_cmp(&a.pts));
    summaries
}

fn group_by_player(lines: &[BoxScoreLine]) -> Vec<(&str, Totals)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut grouped: Vec<(&str, Totals)> = Vec::new();

    for line in lines {
        let slot = *index.entry(line.player.as_str()).or_insert_with(|| {
            grouped.push((line.player.as_str(), Totals::default()));
            grouped.len() - 1
        });
        grouped[slot].1.add(line);
    }

    grouped
}

fn build_summary(player: &str, totals: &Totals) -> PlayerSeasonSummary {
    PlayerSeasonSummary {
        player: player.to_string(),
        games_played: totals.games,
        fgm: totals.fgm,
        fga: totals.fga,
        fg_pct: ratio(totals.fgm, totals.fga),
        tpm: totals.tpm,
        tpa: totals.tpa,
        tpg: totals.per_game(totals.tpm),
        tp_pct: ratio(totals.tpm, totals.tpa),
        trb: totals.per_game(totals.reb),
        ast: totals.per_game(totals.ast),
        stl: totals.per_game(totals.stl),
        blk: totals.per_game(totals.blk),
        tov: totals.per_game(totals.tov),
        pts: totals.per_game(totals.pts),
    }
}

/// `numerator / denominator`, or 0 when nothing was attempted
pub fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shooting(player: &str, fgm: u32, fga: u32, tpm: u32, tpa: u32) -> BoxScoreLine {
        BoxScoreLine {
            fgm,
            fga,
            tpm,
            tpa,
            ..BoxScoreLine::scoring(player, 2 * fgm + tpm)
        }
    }

    #[test]
    fn test_points_per_game_ordering() {
        let lines = vec![
            BoxScoreLine::scoring("A", 10),
            BoxScoreLine::scoring("B", 8),
            BoxScoreLine::scoring("A", 5),
            BoxScoreLine::scoring("B", 8),
            BoxScoreLine::scoring("B", 8),
        ];

        let summaries = aggregate(&lines);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].player, "B");
        assert_eq!(summaries[0].games_played, 3);
        assert_eq!(summaries[0].pts, 8.0);
        assert_eq!(summaries[1].player, "A");
        assert_eq!(summaries[1].games_played, 2);
        assert_eq!(summaries[1].pts, 7.5);
    }

    #[test]
    fn test_one_row_per_distinct_name() {
        let lines = vec![
            BoxScoreLine::scoring("Jo", 1),
            BoxScoreLine::scoring("jo", 1),
            BoxScoreLine::scoring("Jo ", 1),
            BoxScoreLine::scoring("Jo", 1),
        ];

        let summaries = aggregate(&lines);

        assert_eq!(summaries.len(), 3);
        let jo = summaries.iter().find(|s| s.player == "Jo").unwrap();
        assert_eq!(jo.games_played, 2);
    }

    #[test]
    fn test_percentages_and_sums() {
        let lines = vec![shooting("A", 4, 10, 1, 4), shooting("A", 6, 10, 2, 4)];

        let summary = &aggregate(&lines)[0];

        assert_eq!(summary.fgm, 10);
        assert_eq!(summary.fga, 20);
        assert_eq!(summary.fg_pct, 0.5);
        assert_eq!(summary.tpm, 3);
        assert_eq!(summary.tp_pct, 0.375);
        assert_eq!(summary.tpg, 1.5);
    }

    #[test]
    fn test_zero_attempts_give_zero_percent() {
        let lines = vec![shooting("A", 3, 0, 0, 0)];

        let summary = &aggregate(&lines)[0];

        assert_eq!(summary.fg_pct, 0.0);
        assert_eq!(summary.tp_pct, 0.0);
        assert!(!summary.fg_pct.is_nan());
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let lines = vec![
            BoxScoreLine::scoring("C", 5),
            BoxScoreLine::scoring("A", 5),
            BoxScoreLine::scoring("B", 5),
        ];

        let order: Vec<String> = aggregate(&lines).into_iter().map(|s| s.player).collect();

        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }
}
