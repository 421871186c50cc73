use crate::domain::{BoxScore, RosterEntry};
use super::aggregate::ratio;
use super::types::TeamSeasonSummary;

/// Per-game averages of each roster team's own box scores, most points first
pub fn team_totals(box_scores: &[BoxScore], roster: &[RosterEntry]) -> Vec<TeamSeasonSummary> {
    let mut totals: Vec<TeamSeasonSummary> = roster
        .iter()
        .map(|entry| {
            let games: Vec<&BoxScore> = box_scores.iter().filter(|b| b.team == entry.team).collect();
            summarize(&entry.team, &games)
        })
        .collect();

    totals.sort_by(|a, b| b.pts.total_cmp(&a.pts));
    totals
}

/// What opponents averaged against each roster team, fewest points first.
///
/// An opponent box score counts when it sits under another team and its game
/// identifier names the team.
pub fn opponent_totals(box_scores: &[BoxScore], roster: &[RosterEntry]) -> Vec<TeamSeasonSummary> {
    let mut totals: Vec<TeamSeasonSummary> = roster
        .iter()
        .map(|entry| {
            let games: Vec<&BoxScore> = box_scores.iter().filter(|b| b.is_against(&entry.team)).collect();
            summarize(&entry.team, &games)
        })
        .collect();

    totals.sort_by(|a, b| a.pts.total_cmp(&b.pts));
    totals
}

/// Team minus opponent for every stat, best point differential first
pub fn differential(
    totals: &[TeamSeasonSummary],
    opponents: &[TeamSeasonSummary],
) -> Vec<TeamSeasonSummary> {
    let mut rows: Vec<TeamSeasonSummary> = totals
        .iter()
        .filter_map(|own| {
            opponents
                .iter()
                .find(|opp| opp.team == own.team)
                .map(|opp| subtract(own, opp))
        })
        .collect();

    rows.sort_by(|a, b| b.pts.total_cmp(&a.pts));
    rows
}

fn summarize(team: &str, games: &[&BoxScore]) -> TeamSeasonSummary {
    let gp = games.len() as u32;
    let sum = |f: fn(&crate::domain::BoxScoreLine) -> u32| -> u32 {
        games.iter().flat_map(|g| g.lines.iter()).map(f).sum()
    };

    let fgm = sum(|l| l.fgm);
    let fga = sum(|l| l.fga);
    let tpm = sum(|l| l.tpm);
    let tpa = sum(|l| l.tpa);

    TeamSeasonSummary {
        team: team.to_string(),
        games_played: gp,
        fgm: ratio(fgm, gp),
        fga: ratio(fga, gp),
        fg_pct: ratio(fgm, fga),
        tpm: ratio(tpm, gp),
        tpa: ratio(tpa, gp),
        tp_pct: ratio(tpm, tpa),
        trb: ratio(sum(|l| l.reb), gp),
        ast: ratio(sum(|l| l.ast), gp),
        stl: ratio(sum(|l| l.stl), gp),
        blk: ratio(sum(|l| l.blk), gp),
        tov: ratio(sum(|l| l.tov), gp),
        pts: ratio(sum(|l| l.pts), gp),
    }
}

fn subtract(own: &TeamSeasonSummary, opp: &TeamSeasonSummary) -> TeamSeasonSummary {
    TeamSeasonSummary {
        team: own.team.clone(),
        games_played: own.games_played,
        fgm: own.fgm - opp.fgm,
        fga: own.fga - opp.fga,
        fg_pct: own.fg_pct - opp.fg_pct,
        tpm: own.tpm - opp.tpm,
        tpa: own.tpa - opp.tpa,
        tp_pct: own.tp_pct - opp.tp_pct,
        trb: own.trb - opp.trb,
        ast: own.ast - opp.ast,
        stl: own.stl - opp.stl,
        blk: own.blk - opp.blk,
        tov: own.tov - opp.tov,
        pts: own.pts - opp.pts,
    }
}
