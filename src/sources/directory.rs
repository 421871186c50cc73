use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::{BoxScore, BoxScoreLine, GameResult, RosterEntry};
use crate::errors::{read_context, with_parse_context};
use super::SeasonSource;

/// Season data laid out as CSV files:
///
/// ```text
/// <root>/s<season>/teams.csv
/// <root>/s<season>/boxscores/<Team>/<game>.csv
/// <root>/s<season>/games/<TeamA>-<TeamB>.csv
/// ```
pub struct DirectorySource {
    root: PathBuf,
}

/// One side's row in a head-to-head score file
#[derive(Debug, Deserialize)]
struct ScoreRow {
    #[serde(rename = "Total")]
    total: u32,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn season_dir(&self, season: u32) -> PathBuf {
        self.root.join(format!("s{}", season))
    }

    fn box_score_dir(&self, season: u32) -> PathBuf {
        self.season_dir(season).join("boxscores")
    }

    fn games_dir(&self, season: u32) -> PathBuf {
        self.season_dir(season).join("games")
    }

    fn team_dirs(&self, season: u32) -> Result<Vec<PathBuf>> {
        let dir = self.box_score_dir(season);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        Ok(sorted_entries(&dir)?.into_iter().filter(|p| p.is_dir()).collect())
    }

    fn read_box_score(&self, team: &str, path: &Path) -> Result<BoxScore> {
        let game = file_stem(path)?;
        let mut reader = open_csv(path)?;

        let lines = reader
            .deserialize::<BoxScoreLine>()
            .collect::<Result<Vec<_>, _>>();
        let lines = with_parse_context(lines, "box score", path)?;

        debug!("Read {} lines from {}", lines.len(), path.display());
        Ok(BoxScore::new(team, &game, lines))
    }

    fn read_game_result(&self, path: &Path) -> Result<GameResult> {
        let stem = file_stem(path)?;
        let teams: Vec<&str> = stem.split('-').collect();
        if teams.len() != 2 {
            bail!("Game file {} must be named <TeamA>-<TeamB>.csv", path.display());
        }

        let mut reader = open_csv(path)?;
        let rows = reader.deserialize::<ScoreRow>().collect::<Result<Vec<_>, _>>();
        let rows = with_parse_context(rows, "game score", path)?;
        if rows.len() != 2 {
            bail!("Game file {} has {} score rows, expected 2", path.display(), rows.len());
        }

        Ok(GameResult::new(teams[0], rows[0].total, teams[1], rows[1].total))
    }
}

impl SeasonSource for DirectorySource {
    fn describe(&self) -> String {
        format!("dir:{}", self.root.display())
    }

    fn box_scores(&self, season: u32) -> Result<Vec<BoxScore>> {
        let mut box_scores = Vec::new();

        for team_dir in self.team_dirs(season)? {
            let team = file_name(&team_dir)?;
            for path in csv_files(&team_dir)? {
                box_scores.push(self.read_box_score(&team, &path)?);
            }
        }

        info!("Loaded {} box scores for season {}", box_scores.len(), season);
        Ok(box_scores)
    }

    fn game_results(&self, season: u32) -> Result<Vec<GameResult>> {
        let dir = self.games_dir(season);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let results = csv_files(&dir)?
            .iter()
            .map(|path| self.read_game_result(path))
            .collect::<Result<Vec<_>>>()?;

        info!("Loaded {} game results for season {}", results.len(), season);
        Ok(results)
    }

    fn roster(&self, season: u32) -> Result<Vec<RosterEntry>> {
        let path = self.season_dir(season).join("teams.csv");
        if !path.exists() {
            // Fall back to the team directories
            return self
                .team_dirs(season)?
                .iter()
                .map(|dir| file_name(dir).map(|team| RosterEntry::new(&team)))
                .collect();
        }

        let mut reader = open_csv(&path)?;
        let roster = reader.deserialize::<RosterEntry>().collect::<Result<Vec<_>, _>>();
        with_parse_context(roster, "roster", &path)
    }

    fn last_modified(&self, season: u32) -> Result<Option<DateTime<Utc>>> {
        let dir = self.season_dir(season);
        if !dir.exists() {
            return Ok(None);
        }
        Ok(newest_mtime(&dir)?.map(DateTime::<Utc>::from))
    }
}

fn open_csv(path: &Path) -> Result<csv::Reader<fs::File>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| read_context(path))
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)
        .with_context(|| read_context(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| read_context(dir))?;
    paths.sort();
    Ok(paths)
}

fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "csv"))
        .collect())
}

fn newest_mtime(path: &Path) -> Result<Option<SystemTime>> {
    let mut newest = fs::metadata(path)
        .and_then(|m| m.modified())
        .ok();

    if path.is_dir() {
        for child in sorted_entries(path)? {
            if let Some(time) = newest_mtime(&child)? {
                newest = Some(newest.map_or(time, |n| n.max(time)));
            }
        }
    }

    Ok(newest)
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .with_context(|| format!("No file name in {}", path.display()))
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .with_context(|| format!("No file name in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Player,FGM,FGA,3PM,3PA,REB,AST,STL,BLK,TO,PTS\n";

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn fixture(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("hoops_ledger_dir_{}", name));
        let _ = fs::remove_dir_all(&root);
        let season = root.join("s1");

        write(&season.join("teams.csv"), "Team,Group\nTigers,A\nMambas,A\n");
        write(
            &season.join("boxscores/Tigers/g1-Mambas.csv"),
            &format!("{HEADER}Ann,5,10,1,3,4,2,1,0,2,11\nBo,3,9,0,1,7,1,0,2,1,6\n"),
        );
        write(
            &season.join("boxscores/Mambas/g1-Tigers.csv"),
            &format!("{HEADER}Cy,8,12,2,4,3,3,2,1,3,18\n"),
        );
        write(&season.join("games/Tigers-Mambas.csv"), "Team,Q1,Q2,Q3,Q4,Total\nTigers,4,4,5,4,17\nMambas,5,5,5,3,18\n");
        root
    }

    #[test]
    fn test_reads_season_tree() {
        let root = fixture("tree");
        let source = DirectorySource::new(&root);

        let data = source.load(1).unwrap();

        assert_eq!(data.box_scores.len(), 2);
        // sorted path order: Mambas before Tigers
        assert_eq!(data.box_scores[0].team, "Mambas");
        assert_eq!(data.box_scores[1].game, "g1-Mambas");
        assert_eq!(data.box_scores[1].lines[1].reb, 7);
        assert_eq!(data.results, vec![GameResult::new("Tigers", 17, "Mambas", 18)]);
        assert_eq!(data.roster[0], RosterEntry::in_group("Tigers", "A"));
        assert!(source.last_modified(1).unwrap().is_some());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_missing_season_is_empty() {
        let root = fixture("missing");
        let source = DirectorySource::new(&root);

        let data = source.load(7).unwrap();

        assert!(data.box_scores.is_empty());
        assert!(data.results.is_empty());
        assert!(data.roster.is_empty());
        assert!(source.last_modified(7).unwrap().is_none());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_roster_falls_back_to_team_dirs() {
        let root = fixture("fallback");
        fs::remove_file(root.join("s1/teams.csv")).unwrap();
        let source = DirectorySource::new(&root);

        let roster = source.roster(1).unwrap();

        assert_eq!(roster, vec![RosterEntry::new("Mambas"), RosterEntry::new("Tigers")]);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let root = fixture("malformed");
        write(
            &root.join("s1/boxscores/Tigers/g2.csv"),
            "Player,FGM,FGA,3PM,3PA,REB,AST,STL,BLK,TO,PTS\nDee,x,1,0,0,0,0,0,0,0,2\n",
        );
        let source = DirectorySource::new(&root);

        let err = source.box_scores(1).unwrap_err();

        assert!(format!("{err:#}").contains("g2.csv"));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_padded_fields_are_trimmed() {
        let root = fixture("padded");
        write(
            &root.join("s1/boxscores/Tigers/g2-Mambas.csv"),
            "Player, FGM, FGA, 3PM, 3PA, REB, AST, STL, BLK, TO, PTS\n Dee , 5, 9, 0, 1, 2, 3, 0, 0, 1, 12\n",
        );
        let source = DirectorySource::new(&root);

        let box_scores = source.box_scores(1).unwrap();

        let line = &box_scores.iter().find(|b| b.game == "g2-Mambas").unwrap().lines[0];
        assert_eq!(line.player, "Dee");
        assert_eq!(line.fgm, 5);
        assert_eq!(line.pts, 12);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let root = fixture("column");
        write(&root.join("s1/boxscores/Tigers/g3.csv"), "Player,FGM,PTS\nDee,1,2\n");
        let source = DirectorySource::new(&root);

        assert!(source.box_scores(1).is_err());

        fs::remove_dir_all(&root).unwrap();
    }
}
