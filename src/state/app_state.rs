use fangraphs_api::Stick;
use fangraphs_api::score::{Score, format_negative_points, format_negative_rate, format_rate};
use fangraphs_api::teams::{Season, TeamKey};
use std::cmp::Ordering;

pub const PAGE_SIZE: usize = 12;

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    PlateAppearances,
    PositivePoints,
    PositivePerPa,
    NegativePoints,
    NegativePerPa,
    Points,
    #[default]
    PointsPerPa,
}

impl SortColumn {
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Name,
        SortColumn::PlateAppearances,
        SortColumn::PositivePoints,
        SortColumn::PositivePerPa,
        SortColumn::NegativePoints,
        SortColumn::NegativePerPa,
        SortColumn::Points,
        SortColumn::PointsPerPa,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::PlateAppearances => "PA",
            SortColumn::PositivePoints => "+P",
            SortColumn::PositivePerPa => "+P/PA",
            SortColumn::NegativePoints => "-P",
            SortColumn::NegativePerPa => "-P/PA",
            SortColumn::Points => "P",
            SortColumn::PointsPerPa => "P/PA",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Ascending order on this column. Undefined rates sort as zero.
    fn compare(self, a: &PlayerRow, b: &PlayerRow) -> Ordering {
        let rate = |r: Option<f64>| r.unwrap_or(0.0);
        match self {
            SortColumn::Name => a.stick.name.cmp(&b.stick.name),
            SortColumn::PlateAppearances => a.stick.plate_appearances.cmp(&b.stick.plate_appearances),
            SortColumn::PositivePoints => a.score.positive.cmp(&b.score.positive),
            SortColumn::PositivePerPa => rate(a.score.positive_per_pa).total_cmp(&rate(b.score.positive_per_pa)),
            SortColumn::NegativePoints => a.score.negative.cmp(&b.score.negative),
            SortColumn::NegativePerPa => rate(a.score.negative_per_pa).total_cmp(&rate(b.score.negative_per_pa)),
            SortColumn::Points => a.score.net.cmp(&b.score.net),
            SortColumn::PointsPerPa => rate(a.score.net_per_pa).total_cmp(&rate(b.score.net_per_pa)),
        }
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// A scored player plus its position in the batting leaderboard.
#[derive(Debug, Clone)]
pub struct PlayerRow {
    pub stick: Stick,
    pub score: Score,
    order: usize,
}

impl PlayerRow {
    fn new(order: usize, stick: Stick) -> Self {
        let score = stick.score();
        Self { stick, score, order }
    }

    /// Display cells in [`SortColumn::ALL`] order.
    pub fn cells(&self) -> [String; 8] {
        [
            self.stick.name.clone(),
            self.stick.plate_appearances.to_string(),
            self.score.positive.to_string(),
            format_rate(self.score.positive_per_pa),
            format_negative_points(self.score.negative),
            format_negative_rate(self.score.negative_per_pa),
            self.score.net.to_string(),
            format_rate(self.score.net_per_pa),
        ]
    }
}

// ---------------------------------------------------------------------------
// Table state: sorting, paging, highlighted row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct StatTableState {
    rows: Vec<PlayerRow>,
    pub sort_column: SortColumn,
    pub descending: bool,
    /// Index into the sorted rows.
    pub selected: usize,
}

impl StatTableState {
    pub fn new(sticks: Vec<Stick>) -> Self {
        let mut table = Self {
            rows: sticks.into_iter().enumerate().map(|(i, s)| PlayerRow::new(i, s)).collect(),
            sort_column: SortColumn::default(),
            descending: true,
            selected: 0,
        };
        table.sort();
        table
    }

    pub fn rows(&self) -> &[PlayerRow] {
        &self.rows
    }

    pub fn sort_by(&mut self, column: SortColumn, descending: bool) {
        self.sort_column = column;
        self.descending = descending;
        self.sort();
    }

    /// Ties keep leaderboard order regardless of direction.
    fn sort(&mut self) {
        let (column, descending) = (self.sort_column, self.descending);
        self.rows.sort_by(|a, b| {
            let primary = column.compare(a, b);
            let primary = if descending { primary.reverse() } else { primary };
            primary.then(a.order.cmp(&b.order))
        });
        self.selected = 0;
    }

    pub fn page(&self) -> usize {
        self.selected / PAGE_SIZE
    }

    pub fn page_count(&self) -> usize {
        self.rows().len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn page_rows(&self) -> &[PlayerRow] {
        let rows = self.rows();
        let start = (self.page() * PAGE_SIZE).min(rows.len());
        let end = (start + PAGE_SIZE).min(rows.len());
        &rows[start..end]
    }

    /// Highlighted row relative to the current page.
    pub fn selected_in_page(&self) -> Option<usize> {
        (!self.rows.is_empty()).then(|| self.selected % PAGE_SIZE)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        if self.page() + 1 < self.page_count() {
            self.selected = (self.page() + 1) * PAGE_SIZE;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page() > 0 {
            self.selected = (self.page() - 1) * PAGE_SIZE;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Top-level state
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppState {
    pub team: TeamKey,
    pub season: Season,
    pub table: StatTableState,
    pub show_logs: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(team: TeamKey, season: Season, sticks: Vec<Stick>) -> Self {
        Self {
            team,
            season,
            table: StatTableState::new(sticks),
            show_logs: false,
            should_quit: false,
        }
    }
}
