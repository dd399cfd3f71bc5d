//! On-disk CSV cache of raw leaderboard tables.
//!
//! Each team season is two files, `<TEAM>-<YEAR>-bat.csv` and
//! `<TEAM>-<YEAR>-fld.csv`: header line first, one player per following line.
//! Entries are never refreshed in place; current-season bypass lives in
//! [`crate::source::StatSource`].

use crate::client::{ApiError, ApiResult};
use crate::teams::{Season, TeamKey};
use crate::{DataTable, StatKind, TeamStats};
use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CACHE_DIR: &str = "pts_cache";

#[derive(Debug, Clone)]
pub struct StatCache {
    dir: PathBuf,
}

impl Default for StatCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_DIR)
    }
}

impl StatCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, team: TeamKey, season: Season, kind: StatKind) -> PathBuf {
        self.dir.join(format!("{team}-{season}-{}.csv", kind.code()))
    }

    /// Both tables, or the first failure. Any error here means "cache miss".
    pub fn read(&self, team: TeamKey, season: Season) -> ApiResult<TeamStats> {
        let batting = self.read_table(&self.path_for(team, season, StatKind::Batting))?;
        let fielding = self.read_table(&self.path_for(team, season, StatKind::Fielding))?;
        Ok(TeamStats { batting, fielding })
    }

    pub fn write(&self, team: TeamKey, season: Season, stats: &TeamStats) -> ApiResult<()> {
        create_dir(&self.dir).map_err(|e| ApiError::CacheWrite(self.dir.clone(), e.into()))?;
        for kind in [StatKind::Batting, StatKind::Fielding] {
            let path = self.path_for(team, season, kind);
            write_table(&path, stats.table(kind)).map_err(|e| ApiError::CacheWrite(path, e))?;
        }
        Ok(())
    }

    fn read_table(&self, path: &Path) -> ApiResult<DataTable> {
        let records = read_records(path).map_err(|e| ApiError::CacheRead(path.to_path_buf(), e))?;
        let mut records = records.into_iter();
        let Some(headers) = records.next() else {
            return Err(ApiError::CacheRead(
                path.to_path_buf(),
                io::Error::new(io::ErrorKind::UnexpectedEof, "cache file is empty").into(),
            ));
        };
        debug!("cache hit: {}", path.display());
        Ok(DataTable { headers, rows: records.collect() })
    }
}

fn read_records(path: &Path) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect()
}

/// Write to a sibling temp file and rename over the target, so a crash
/// mid-write never leaves a truncated cache entry behind.
fn write_table(path: &Path, table: &DataTable) -> Result<(), csv::Error> {
    let tmp = path.with_extension("csv.tmp");
    {
        let mut writer = WriterBuilder::new().flexible(true).from_path(&tmp)?;
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(unix)]
fn create_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o755).create(dir)
}

#[cfg(not(unix))]
fn create_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}
