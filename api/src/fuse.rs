//! Batting + fielding rows → [`Stick`]s.
//!
//! Columns are looked up by header name once per table, so an upstream column
//! reshuffle either keeps working or fails loudly with the missing header.

use crate::client::{ApiError, ApiResult};
use crate::{DataTable, Stick};
use std::collections::HashMap;

const NAME: &str = "Name";
const ERRORS: &str = "E";

/// What to do with a cell that is neither empty, a dash, nor a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellPolicy {
    #[default]
    Strict,
    /// Treat unexpected text as zero.
    Lenient,
}

/// How fielding names are matched to batting names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameMatch {
    /// Byte-for-byte.
    #[default]
    Exact,
    /// Trimmed and case-folded.
    Normalized,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FuseOptions {
    pub cells: CellPolicy,
    pub names: NameMatch,
}

/// Resolved positions of every batting column the scorer needs.
#[derive(Debug, Clone, Copy)]
struct BattingColumns {
    name: usize,
    games_played: Option<usize>,
    plate_appearances: usize,
    singles: usize,
    doubles: usize,
    triples: usize,
    home_runs: usize,
    runs_scored: usize,
    runs_batted_in: usize,
    walks: usize,
    strike_outs: usize,
    hit_by_pitches: usize,
    sac_bunts: usize,
    ground_into_double_plays: usize,
    stolen_bases: usize,
}

impl BattingColumns {
    fn resolve(table: &DataTable) -> ApiResult<Self> {
        let col = |header: &str| require(table, header, "batting");
        Ok(Self {
            name: col(NAME)?,
            games_played: table.column("G"),
            plate_appearances: col("PA")?,
            singles: col("1B")?,
            doubles: col("2B")?,
            triples: col("3B")?,
            home_runs: col("HR")?,
            runs_scored: col("R")?,
            runs_batted_in: col("RBI")?,
            walks: col("BB")?,
            strike_outs: col("SO")?,
            hit_by_pitches: col("HBP")?,
            sac_bunts: col("SH")?,
            ground_into_double_plays: col("GDP")?,
            stolen_bases: col("SB")?,
        })
    }
}

fn require(table: &DataTable, header: &str, kind: &str) -> ApiResult<usize> {
    table
        .column(header)
        .ok_or_else(|| ApiError::Parse(format!("{kind} table has no `{header}` column")))
}

/// One [`Stick`] per batting row, in batting order, with fielding errors
/// summed across every fielding line for the same player.
pub fn fuse(batting: &DataTable, fielding: &DataTable, options: FuseOptions) -> ApiResult<Vec<Stick>> {
    if batting.is_empty() {
        return Ok(Vec::new());
    }

    let errors_by_name = fielding_errors(fielding, options)?;
    let cols = BattingColumns::resolve(batting)?;
    let count = |row: &[String], idx: usize| parse_count(cell(row, idx), options.cells);

    batting
        .rows
        .iter()
        .map(|row| -> ApiResult<Stick> {
            let row = row.as_slice();
            let name = cell(row, cols.name).to_string();
            let errors = errors_by_name
                .get(&name_key(&name, options.names))
                .copied()
                .unwrap_or(0);
            Ok(Stick {
                games_played: match cols.games_played {
                    Some(idx) => count(row, idx)?,
                    None => 0,
                },
                plate_appearances: count(row, cols.plate_appearances)?,
                singles: count(row, cols.singles)?,
                doubles: count(row, cols.doubles)?,
                triples: count(row, cols.triples)?,
                home_runs: count(row, cols.home_runs)?,
                runs_scored: count(row, cols.runs_scored)?,
                runs_batted_in: count(row, cols.runs_batted_in)?,
                stolen_bases: count(row, cols.stolen_bases)?,
                walks: count(row, cols.walks)?,
                hit_by_pitches: count(row, cols.hit_by_pitches)?,
                sac_bunts: count(row, cols.sac_bunts)?,
                strike_outs: count(row, cols.strike_outs)?,
                ground_into_double_plays: count(row, cols.ground_into_double_plays)?,
                errors,
                name,
            })
        })
        .collect()
}

fn fielding_errors(fielding: &DataTable, options: FuseOptions) -> ApiResult<HashMap<String, u32>> {
    let mut totals = HashMap::new();
    if fielding.is_empty() {
        return Ok(totals);
    }

    let name_col = require(fielding, NAME, "fielding")?;
    let errors_col = require(fielding, ERRORS, "fielding")?;
    for row in &fielding.rows {
        let errors = parse_count(cell(row, errors_col), options.cells)?;
        let name = cell(row, name_col);
        let total = totals.entry(name_key(name, options.names)).or_insert(0u32);
        *total = total
            .checked_add(errors)
            .ok_or_else(|| ApiError::Parse(format!("fielding errors for {name:?} exceed {}", u32::MAX)))?;
    }
    Ok(totals)
}

fn name_key(name: &str, names: NameMatch) -> String {
    match names {
        NameMatch::Exact => name.to_string(),
        NameMatch::Normalized => name.trim().to_lowercase(),
    }
}

/// Cache rows may be ragged; a missing cell reads as empty.
fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Upstream leaves some zero-valued cells blank or renders them as a dash.
pub fn parse_count(cell: &str, policy: CellPolicy) -> ApiResult<u32> {
    let cell = cell.trim();
    if cell.is_empty() || matches!(cell, "-" | "—" | "–") {
        return Ok(0);
    }
    match (cell.parse::<u32>(), policy) {
        (Ok(n), _) => Ok(n),
        (Err(_), CellPolicy::Lenient) => Ok(0),
        (Err(_), CellPolicy::Strict) => Err(ApiError::Parse(format!("expected a count, found {cell:?}"))),
    }
}
