pub mod cache;
pub mod client;
pub mod fuse;
pub mod leaderboard;
pub mod score;
pub mod source;
pub mod teams;

// ---------------------------------------------------------------------------
// Domain types, independent of the FanGraphs page layout
// ---------------------------------------------------------------------------

/// The two leaderboards pulled for every team season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Batting,
    Fielding,
}

impl StatKind {
    /// Value of the upstream `stats=` query parameter, also used in cache file names.
    pub fn code(&self) -> &'static str {
        match self {
            StatKind::Batting => "bat",
            StatKind::Fielding => "fld",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Batting => "batting",
            StatKind::Fielding => "fielding",
        }
    }
}

/// Untyped leaderboard: header cells plus string rows.
///
/// Rows parsed from HTML always have the header's arity. Rows read back from
/// the cache are taken as written and may be ragged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of the first header equal to `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Both leaderboards for one team season.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamStats {
    pub batting: DataTable,
    pub fielding: DataTable,
}

impl TeamStats {
    pub fn table(&self, kind: StatKind) -> &DataTable {
        match kind {
            StatKind::Batting => &self.batting,
            StatKind::Fielding => &self.fielding,
        }
    }
}

/// One player's season, as consumed by the scorer.
///
/// Derived quantities (points, per-PA rates) live in [`score`] and are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stick {
    pub name: String,
    pub games_played: u32,
    pub plate_appearances: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub runs_scored: u32,
    pub runs_batted_in: u32,
    pub stolen_bases: u32,
    pub walks: u32,
    pub hit_by_pitches: u32,
    pub sac_bunts: u32,
    pub strike_outs: u32,
    pub ground_into_double_plays: u32,
    pub errors: u32,
}
