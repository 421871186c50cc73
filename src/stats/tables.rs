use crate::domain::{Cell, Table, ToTable};
use super::types::{
    Leaderboard, PlayerSeasonSummary, RecordBook, TeamRecord, TeamSeasonSummary,
};

impl ToTable for [PlayerSeasonSummary] {
    fn to_table(&self) -> Table {
        let mut table = Table::new([
            "Player", "GP", "FGM", "FGA", "FG%", "3PM", "3PA", "3PG", "3P%", "TRB", "AST", "STL",
            "BLK", "TOV", "PTS",
        ]);
        for s in self {
            table.push(vec![
                Cell::text(&s.player),
                s.games_played.into(),
                s.fgm.into(),
                s.fga.into(),
                s.fg_pct.into(),
                s.tpm.into(),
                s.tpa.into(),
                s.tpg.into(),
                s.tp_pct.into(),
                s.trb.into(),
                s.ast.into(),
                s.stl.into(),
                s.blk.into(),
                s.tov.into(),
                s.pts.into(),
            ]);
        }
        table
    }
}

impl ToTable for [TeamSeasonSummary] {
    fn to_table(&self) -> Table {
        let mut table = Table::new([
            "Team", "GP", "FGM", "FGA", "FG%", "3PM", "3PA", "3P%", "TRB", "AST", "STL", "BLK",
            "TOV", "PTS",
        ]);
        for s in self {
            table.push(vec![
                Cell::text(&s.team),
                s.games_played.into(),
                s.fgm.into(),
                s.fga.into(),
                s.fg_pct.into(),
                s.tpm.into(),
                s.tpa.into(),
                s.tp_pct.into(),
                s.trb.into(),
                s.ast.into(),
                s.stl.into(),
                s.blk.into(),
                s.tov.into(),
                s.pts.into(),
            ]);
        }
        table
    }
}

impl ToTable for [TeamRecord] {
    fn to_table(&self) -> Table {
        let mut table = Table::new(["Team", "GP", "Wins", "Losses", "Draws", "PCT", "Margin"]);
        for r in self {
            table.push(vec![
                Cell::text(&r.team),
                r.games_played.into(),
                r.wins.into(),
                r.losses.into(),
                r.draws.into(),
                r.win_pct.into(),
                r.margin.into(),
            ]);
        }
        table
    }
}

impl ToTable for Leaderboard {
    fn to_table(&self) -> Table {
        let headers = ["Player", "GP"]
            .into_iter()
            .chain(self.columns.iter().map(|c| c.label()));
        let mut table = Table::new(headers);

        for row in &self.rows {
            let mut cells = vec![Cell::text(&row.player), row.games_played.into()];
            for (column, value) in self.columns.iter().zip(&row.values) {
                // counts stay whole numbers
                if column.is_count() {
                    cells.push(Cell::Int(*value as i64));
                } else {
                    cells.push(Cell::Real(*value));
                }
            }
            table.push(cells);
        }
        table
    }
}

impl ToTable for RecordBook {
    fn to_table(&self) -> Table {
        let mut table = Table::new(["Stat", "Player(s)", "Record"]);
        for entry in &self.entries {
            table.push(vec![
                entry.stat.label().into(),
                Cell::Text(entry.holders_display()),
                entry.value.into(),
            ]);
        }
        table
    }
}
