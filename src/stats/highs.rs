use crate::domain::BoxScoreLine;
use super::types::{HighStat, RecordBook, RecordEntry};

/// Single-game highs for every tracked stat, with all co-holders.
///
/// One pass over the lines; a strictly higher value replaces the holders,
/// an equal value adds the player (once).
pub fn compute_highs(lines: &[BoxScoreLine]) -> RecordBook {
    let mut entries: Vec<RecordEntry> = HighStat::ALL
        .iter()
        .map(|&stat| RecordEntry {
            stat,
            value: 0,
            holders: Vec::new(),
        })
        .collect();

    for line in lines {
        for entry in entries.iter_mut() {
            observe(entry, line);
        }
    }

    RecordBook { entries }
}

fn observe(entry: &mut RecordEntry, line: &BoxScoreLine) {
    let value = entry.stat.value(line);

    if entry.holders.is_empty() || value > entry.value {
        entry.value = value;
        entry.holders = vec![line.player.clone()];
    } else if value == entry.value && !entry.holders.contains(&line.player) {
        entry.holders.push(line.player.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(player: &str, pts: u32, reb: u32) -> BoxScoreLine {
        BoxScoreLine {
            reb,
            ..BoxScoreLine::scoring(player, pts)
        }
    }

    #[test]
    fn test_new_high_resets_holders() {
        let lines = vec![line("A", 20, 5), line("B", 30, 5), line("C", 25, 5)];

        let book = compute_highs(&lines);

        let pts = book.get(HighStat::Points).unwrap();
        assert_eq!(pts.value, 30);
        assert_eq!(pts.holders, vec!["B"]);
    }

    #[test]
    fn test_co_holders_reported_together() {
        let lines = vec![line("A", 30, 12), line("B", 30, 3), line("C", 10, 12)];

        let book = compute_highs(&lines);

        assert_eq!(book.get(HighStat::Points).unwrap().holders_display(), "A, B");
        assert_eq!(book.get(HighStat::Rebounds).unwrap().holders, vec!["A", "C"]);
    }

    #[test]
    fn test_repeat_holder_listed_once() {
        let lines = vec![line("A", 30, 0), line("A", 30, 0)];

        let book = compute_highs(&lines);

        assert_eq!(book.get(HighStat::Points).unwrap().holders, vec!["A"]);
    }

    #[test]
    fn test_value_is_true_maximum() {
        let lines: Vec<BoxScoreLine> = (0..20).map(|i| line(&format!("p{i}"), (i * 7) % 23, 0)).collect();
        let expected = lines.iter().map(|l| l.pts).max().unwrap();

        let book = compute_highs(&lines);
        let entry = book.get(HighStat::Points).unwrap();

        assert_eq!(entry.value, expected);
        let holders: Vec<&String> = lines.iter().filter(|l| l.pts == expected).map(|l| &l.player).collect();
        assert_eq!(entry.holders.iter().collect::<Vec<_>>(), holders);
    }

    #[test]
    fn test_empty_input_has_no_holders() {
        let book = compute_highs(&[]);

        assert_eq!(book.entries.len(), HighStat::ALL.len());
        assert!(book.entries.iter().all(|e| e.value == 0 && e.holders.is_empty()));
    }
}
