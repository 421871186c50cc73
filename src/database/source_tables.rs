use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{BoxScore, BoxScoreLine, GameResult, RosterEntry};

/// Removes every source row of `season`
pub fn clear_season(conn: &Connection, season: u32) -> Result<()> {
    for table in ["source_box_scores", "source_game_results", "source_teams"] {
        let sql = format!("DELETE FROM {} WHERE season = ?1", table);
        conn.execute(&sql, params![season])
            .with_context(|| format!("Failed to clear season {} from {}", season, table))?;
    }
    Ok(())
}

pub fn insert_box_score(conn: &Connection, season: u32, box_score: &BoxScore) -> Result<()> {
    let sql = "INSERT INTO source_box_scores (season, team, game, player, fgm, fga, tpm, tpa, reb, ast, stl, blk, tov, pts) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)";

    let mut stmt = conn.prepare_cached(sql)?;
    for line in &box_score.lines {
        stmt.execute(params![
            season,
            box_score.team,
            box_score.game,
            line.player,
            line.fgm,
            line.fga,
            line.tpm,
            line.tpa,
            line.reb,
            line.ast,
            line.stl,
            line.blk,
            line.tov,
            line.pts
        ])
        .context("Failed to insert box score line")?;
    }
    Ok(())
}

pub fn insert_game_result(conn: &Connection, season: u32, result: &GameResult) -> Result<()> {
    let sql = "INSERT INTO source_game_results (season, first_team, first_score, second_team, second_score) VALUES (?1, ?2, ?3, ?4, ?5)";

    conn.execute(
        sql,
        params![
            season,
            result.first_team,
            result.first_score,
            result.second_team,
            result.second_score
        ],
    )
    .context("Failed to insert game result")
    .map(|_| ())
}

pub fn insert_roster_entry(conn: &Connection, season: u32, entry: &RosterEntry) -> Result<()> {
    let sql = "INSERT INTO source_teams (season, team, grp) VALUES (?1, ?2, ?3)";

    conn.execute(sql, params![season, entry.team, entry.group])
        .context("Failed to insert roster entry")
        .map(|_| ())
}

/// Box scores of a season, lines grouped by (team, game) in insertion order
pub fn list_box_scores(conn: &Connection, season: u32) -> Result<Vec<BoxScore>> {
    let sql = "SELECT team, game, player, fgm, fga, tpm, tpa, reb, ast, stl, blk, tov, pts FROM source_box_scores WHERE season = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![season], parse_box_score_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut box_scores: Vec<BoxScore> = Vec::new();
    for (team, game, line) in rows {
        match box_scores.iter_mut().find(|b| b.team == team && b.game == game) {
            Some(existing) => existing.lines.push(line),
            None => box_scores.push(BoxScore::new(&team, &game, vec![line])),
        }
    }

    Ok(box_scores)
}

fn parse_box_score_row(row: &rusqlite::Row) -> rusqlite::Result<(String, String, BoxScoreLine)> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        BoxScoreLine {
            player: row.get(2)?,
            fgm: row.get(3)?,
            fga: row.get(4)?,
            tpm: row.get(5)?,
            tpa: row.get(6)?,
            reb: row.get(7)?,
            ast: row.get(8)?,
            stl: row.get(9)?,
            blk: row.get(10)?,
            tov: row.get(11)?,
            pts: row.get(12)?,
        },
    ))
}

pub fn list_game_results(conn: &Connection, season: u32) -> Result<Vec<GameResult>> {
    let sql = "SELECT first_team, first_score, second_team, second_score FROM source_game_results WHERE season = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![season], |row| {
            Ok(GameResult {
                first_team: row.get(0)?,
                first_score: row.get(1)?,
                second_team: row.get(2)?,
                second_score: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_roster(conn: &Connection, season: u32) -> Result<Vec<RosterEntry>> {
    let sql = "SELECT team, grp FROM source_teams WHERE season = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![season], |row| {
            Ok(RosterEntry {
                team: row.get(0)?,
                group: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
