use chrono::{Datelike, Local};
use std::fmt;
use std::str::FromStr;

/// First season the upstream leaderboard has data for.
pub const FIRST_SEASON: i32 = 1901;

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    UnknownTeam(String),
    YearOutOfRange { year: i32, current_year: i32 },
    YearNotNumeric(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownTeam(raw) => {
                write!(f, "invalid team key: {raw} (run `pts teams` for the list)")
            }
            ValidationError::YearOutOfRange { year, current_year } => write!(
                f,
                "year {year} is out of range: must be between {FIRST_SEASON} and {current_year}"
            ),
            ValidationError::YearNotNumeric(raw) => write!(f, "year is not a number: {raw:?}"),
        }
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// Team keys
// ---------------------------------------------------------------------------

/// The 30 MLB franchises, keyed by their FanGraphs abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TeamKey {
    Ari,
    Atl,
    Bal,
    Bos,
    Chc,
    Chw,
    Cin,
    Cle,
    Col,
    Det,
    Hou,
    Kcr,
    Laa,
    Lad,
    Mia,
    Mil,
    Min,
    Nym,
    Nyy,
    Oak,
    Phi,
    Pit,
    Sdp,
    Sea,
    Sfg,
    Stl,
    Tbr,
    Tex,
    Tor,
    Wsn,
}

impl TeamKey {
    pub const ALL: [TeamKey; 30] = [
        TeamKey::Ari,
        TeamKey::Atl,
        TeamKey::Bal,
        TeamKey::Bos,
        TeamKey::Chc,
        TeamKey::Chw,
        TeamKey::Cin,
        TeamKey::Cle,
        TeamKey::Col,
        TeamKey::Det,
        TeamKey::Hou,
        TeamKey::Kcr,
        TeamKey::Laa,
        TeamKey::Lad,
        TeamKey::Mia,
        TeamKey::Mil,
        TeamKey::Min,
        TeamKey::Nym,
        TeamKey::Nyy,
        TeamKey::Oak,
        TeamKey::Phi,
        TeamKey::Pit,
        TeamKey::Sdp,
        TeamKey::Sea,
        TeamKey::Sfg,
        TeamKey::Stl,
        TeamKey::Tbr,
        TeamKey::Tex,
        TeamKey::Tor,
        TeamKey::Wsn,
    ];

    /// Numeric team id used in the leaderboard `team=` parameter.
    pub fn id(self) -> u8 {
        match self {
            TeamKey::Laa => 1,
            TeamKey::Bal => 2,
            TeamKey::Bos => 3,
            TeamKey::Chw => 4,
            TeamKey::Cle => 5,
            TeamKey::Det => 6,
            TeamKey::Kcr => 7,
            TeamKey::Min => 8,
            TeamKey::Nyy => 9,
            TeamKey::Oak => 10,
            TeamKey::Sea => 11,
            TeamKey::Tbr => 12,
            TeamKey::Tex => 13,
            TeamKey::Tor => 14,
            TeamKey::Ari => 15,
            TeamKey::Atl => 16,
            TeamKey::Chc => 17,
            TeamKey::Cin => 18,
            TeamKey::Col => 19,
            TeamKey::Mia => 20,
            TeamKey::Hou => 21,
            TeamKey::Lad => 22,
            TeamKey::Mil => 23,
            TeamKey::Wsn => 24,
            TeamKey::Nym => 25,
            TeamKey::Phi => 26,
            TeamKey::Pit => 27,
            TeamKey::Stl => 28,
            TeamKey::Sdp => 29,
            TeamKey::Sfg => 30,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            TeamKey::Ari => "ARI",
            TeamKey::Atl => "ATL",
            TeamKey::Bal => "BAL",
            TeamKey::Bos => "BOS",
            TeamKey::Chc => "CHC",
            TeamKey::Chw => "CHW",
            TeamKey::Cin => "CIN",
            TeamKey::Cle => "CLE",
            TeamKey::Col => "COL",
            TeamKey::Det => "DET",
            TeamKey::Hou => "HOU",
            TeamKey::Kcr => "KCR",
            TeamKey::Laa => "LAA",
            TeamKey::Lad => "LAD",
            TeamKey::Mia => "MIA",
            TeamKey::Mil => "MIL",
            TeamKey::Min => "MIN",
            TeamKey::Nym => "NYM",
            TeamKey::Nyy => "NYY",
            TeamKey::Oak => "OAK",
            TeamKey::Phi => "PHI",
            TeamKey::Pit => "PIT",
            TeamKey::Sdp => "SDP",
            TeamKey::Sea => "SEA",
            TeamKey::Sfg => "SFG",
            TeamKey::Stl => "STL",
            TeamKey::Tbr => "TBR",
            TeamKey::Tex => "TEX",
            TeamKey::Tor => "TOR",
            TeamKey::Wsn => "WSN",
        }
    }
}

impl FromStr for TeamKey {
    type Err = ValidationError;

    /// Case-insensitive: `det`, `Det` and `DET` all parse.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let upper = raw.trim().to_uppercase();
        TeamKey::ALL
            .into_iter()
            .find(|team| team.code() == upper)
            .ok_or_else(|| ValidationError::UnknownTeam(raw.to_owned()))
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Seasons
// ---------------------------------------------------------------------------

/// A year already checked against `[FIRST_SEASON, current_year]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season(i32);

impl Season {
    pub fn parse(raw: &str, current_year: i32) -> Result<Self, ValidationError> {
        let year: i32 = raw
            .trim()
            .parse()
            .map_err(|_| ValidationError::YearNotNumeric(raw.to_owned()))?;
        Self::new(year, current_year)
    }

    pub fn new(year: i32, current_year: i32) -> Result<Self, ValidationError> {
        if year < FIRST_SEASON || year > current_year {
            return Err(ValidationError::YearOutOfRange { year, current_year });
        }
        Ok(Self(year))
    }

    pub fn year(self) -> i32 {
        self.0
    }

    pub fn is_current(self, current_year: i32) -> bool {
        self.0 == current_year
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar year from the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Entry-point validation for raw CLI input. Nothing downstream re-checks.
pub fn validate(
    raw_team: &str,
    raw_year: &str,
    current_year: i32,
) -> Result<(TeamKey, Season), ValidationError> {
    let team = raw_team.parse::<TeamKey>()?;
    let season = Season::parse(raw_year, current_year)?;
    Ok((team, season))
}
