//! Pick the Stick scoring.
//!
//! Positive points reward getting on base and driving runs in; negative points
//! charge strikeouts, double plays and fielding errors. Totals are exact
//! integers; the per-PA rates are only defined once a player has batted.

use crate::Stick;

/// Points and rates for one [`Stick`], computed in one pass for the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub positive: u64,
    pub negative: u64,
    pub net: i64,
    pub positive_per_pa: Option<f64>,
    pub negative_per_pa: Option<f64>,
    pub net_per_pa: Option<f64>,
}

impl Stick {
    /// Summed in `u64`: every term is a `u32` count, so no upstream value can overflow.
    pub fn positive_points(&self) -> u64 {
        u64::from(self.singles)
            + 2 * u64::from(self.doubles)
            + 3 * u64::from(self.triples)
            + 4 * u64::from(self.home_runs)
            + u64::from(self.runs_scored)
            + u64::from(self.runs_batted_in)
            + u64::from(self.stolen_bases)
            + u64::from(self.walks)
            + u64::from(self.hit_by_pitches)
            + u64::from(self.sac_bunts)
    }

    pub fn negative_points(&self) -> u64 {
        u64::from(self.strike_outs) + 2 * u64::from(self.ground_into_double_plays) + u64::from(self.errors)
    }

    pub fn net_points(&self) -> i64 {
        // Both sides stay below 16 * u32::MAX, well inside i64.
        self.positive_points() as i64 - self.negative_points() as i64
    }

    pub fn score(&self) -> Score {
        let positive = self.positive_points();
        let negative = self.negative_points();
        let net = self.net_points();
        Score {
            positive,
            negative,
            net,
            positive_per_pa: self.per_pa(positive as f64),
            negative_per_pa: self.per_pa(negative as f64),
            net_per_pa: self.per_pa(net as f64),
        }
    }

    fn per_pa(&self, value: f64) -> Option<f64> {
        (self.plate_appearances > 0).then(|| value / f64::from(self.plate_appearances))
    }
}

/// `0` when the rate is undefined, otherwise three decimals.
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{r:.3}"),
        None => "0".to_string(),
    }
}

/// Negative rates always carry a leading minus, even `-0.000`.
pub fn format_negative_rate(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("-{r:.3}"),
        None => "0".to_string(),
    }
}

pub fn format_negative_points(points: u64) -> String {
    if points > 0 {
        format!("-{points}")
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Stick {
        Stick {
            name: "Sample Player".into(),
            plate_appearances: 100,
            singles: 10,
            doubles: 5,
            triples: 1,
            home_runs: 2,
            runs_scored: 7,
            runs_batted_in: 8,
            stolen_bases: 3,
            walks: 6,
            hit_by_pitches: 1,
            sac_bunts: 0,
            strike_outs: 20,
            ground_into_double_plays: 3,
            errors: 2,
            ..Default::default()
        }
    }

    #[test]
    fn worked_example() {
        let stick = sample();
        assert_eq!(stick.positive_points(), 56);
        assert_eq!(stick.negative_points(), 28);
        assert_eq!(stick.net_points(), 28);

        let score = stick.score();
        assert_eq!(format_rate(score.net_per_pa), "0.280");
        assert_eq!(format_rate(score.positive_per_pa), "0.560");
        assert_eq!(format_negative_rate(score.negative_per_pa), "-0.280");
        assert_eq!(format_negative_points(score.negative), "-28");
    }

    #[test]
    fn zero_plate_appearances_leaves_rates_undefined() {
        let stick = Stick { plate_appearances: 0, ..sample() };
        let score = stick.score();
        assert_eq!(score.positive_per_pa, None);
        assert_eq!(score.negative_per_pa, None);
        assert_eq!(score.net_per_pa, None);
        assert_eq!(format_rate(score.positive_per_pa), "0");
        assert_eq!(format_negative_rate(score.negative_per_pa), "0");
        assert_eq!(format_rate(score.net_per_pa), "0");
        assert_eq!(score.net, 56 - 28);
    }

    #[test]
    fn empty_record_scores_zero() {
        let stick = Stick { name: "Nobody".into(), ..Default::default() };
        let score = stick.score();
        assert_eq!((score.positive, score.negative, score.net), (0, 0, 0));
        assert_eq!(format_negative_points(score.negative), "0");
    }

    #[test]
    fn net_can_go_negative() {
        let stick = Stick {
            name: "Whiffer".into(),
            plate_appearances: 50,
            singles: 4,
            strike_outs: 25,
            ground_into_double_plays: 2,
            ..Default::default()
        };
        let score = stick.score();
        assert_eq!(score.net, 4 - 29);
        assert_eq!(score.net, score.positive as i64 - score.negative as i64);
        assert_eq!(format_rate(score.net_per_pa), "-0.500");
    }

    #[test]
    fn negative_rate_keeps_minus_when_zero() {
        let stick = Stick { name: "Clean".into(), plate_appearances: 10, walks: 3, ..Default::default() };
        assert_eq!(format_negative_rate(stick.score().negative_per_pa), "-0.000");
    }

    #[test]
    fn extra_base_hits_are_weighted() {
        let stick = Stick {
            name: "Slugger".into(),
            doubles: 1,
            triples: 1,
            home_runs: 1,
            ..Default::default()
        };
        assert_eq!(stick.positive_points(), 2 + 3 + 4);
    }

    #[test]
    fn maximal_counts_do_not_overflow() {
        let stick = Stick {
            name: "Overflow".into(),
            plate_appearances: u32::MAX,
            singles: u32::MAX,
            doubles: u32::MAX,
            triples: u32::MAX,
            home_runs: 1_500_000_000,
            runs_scored: u32::MAX,
            runs_batted_in: u32::MAX,
            stolen_bases: u32::MAX,
            walks: u32::MAX,
            hit_by_pitches: u32::MAX,
            sac_bunts: u32::MAX,
            strike_outs: u32::MAX,
            ground_into_double_plays: u32::MAX,
            errors: u32::MAX,
            ..Default::default()
        };
        let max = u64::from(u32::MAX);
        assert_eq!(stick.positive_points(), 12 * max + 4 * 1_500_000_000);
        assert_eq!(stick.negative_points(), 4 * max);

        let score = stick.score();
        assert_eq!(score.net, (8 * max + 6_000_000_000) as i64);
        assert_eq!(score.net, score.positive as i64 - score.negative as i64);
        assert!(score.net_per_pa.is_some_and(|r| r > 0.0));
    }
}
