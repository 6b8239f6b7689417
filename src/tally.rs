//! Draw counts and rates per rarity tier.

use crate::rarity::Rarity;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u64; 4],
}

/// One line of a tally table. The total row has no rate.
#[derive(Clone, Debug, PartialEq)]
pub struct TallyRow {
    pub label: &'static str,
    pub count: u64,
    pub rate: Option<f64>,
}

impl Tally {
    pub fn from_draws(draws: &[Rarity]) -> Self {
        draws.iter().copied().collect()
    }

    pub fn record(&mut self, rarity: Rarity) {
        self.counts[rarity.index()] += 1;
    }

    pub fn count(&self, rarity: Rarity) -> u64 {
        self.counts[rarity.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Percentage rounded to one decimal place. An empty tally reports 0.0.
    pub fn rate(&self, rarity: Rarity) -> f64 {
        percent(self.count(rarity), self.total())
    }

    pub fn sr_or_above_rate(&self) -> f64 {
        percent(self.count(Rarity::Ur) + self.count(Rarity::Sr), self.total())
    }

    pub fn rows(&self) -> Vec<TallyRow> {
        let mut rows: Vec<TallyRow> = Rarity::ALL
            .iter()
            .map(|rarity| TallyRow {
                label: rarity.label(),
                count: self.count(*rarity),
                rate: Some(self.rate(*rarity)),
            })
            .collect();
        rows.push(TallyRow {
            label: "Total",
            count: self.total(),
            rate: None,
        });
        rows
    }
}

fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

impl Extend<Rarity> for Tally {
    fn extend<I: IntoIterator<Item = Rarity>>(&mut self, iter: I) {
        for rarity in iter {
            self.record(rarity);
        }
    }
}

impl FromIterator<Rarity> for Tally {
    fn from_iter<I: IntoIterator<Item = Rarity>>(iter: I) -> Self {
        let mut tally = Self::default();
        tally.extend(iter);
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_sequence() {
        let tally = Tally::from_draws(&[Rarity::Ur, Rarity::Sr, Rarity::Sr, Rarity::N]);

        assert_eq!(tally.count(Rarity::Ur), 1);
        assert_eq!(tally.count(Rarity::Sr), 2);
        assert_eq!(tally.count(Rarity::R), 0);
        assert_eq!(tally.count(Rarity::N), 1);
        assert_eq!(tally.total(), 4);

        assert_eq!(tally.rate(Rarity::Ur), 25.0);
        assert_eq!(tally.rate(Rarity::Sr), 50.0);
        assert_eq!(tally.rate(Rarity::R), 0.0);
        assert_eq!(tally.rate(Rarity::N), 25.0);
        assert_eq!(tally.sr_or_above_rate(), 75.0);
    }

    #[test]
    fn test_rows_end_with_total() {
        let tally = Tally::from_draws(&[Rarity::Ur, Rarity::Sr, Rarity::Sr, Rarity::N]);
        let rows = tally.rows();

        let labels: Vec<&str> = rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["UR", "SR", "R", "N", "Total"]);
        assert_eq!(rows[4].count, 4);
        assert_eq!(rows[4].rate, None);
        assert_eq!(rows[1].rate, Some(50.0));
    }

    #[test]
    fn test_empty_tally_reports_zero() {
        let tally = Tally::default();

        assert_eq!(tally.total(), 0);
        for rarity in Rarity::ALL {
            assert_eq!(tally.rate(rarity), 0.0);
        }
        assert_eq!(tally.sr_or_above_rate(), 0.0);
    }

    #[test]
    fn test_rate_rounds_to_one_decimal() {
        // 1/3 = 33.333..% and 2/3 = 66.666..%
        let tally = Tally::from_draws(&[Rarity::R, Rarity::N, Rarity::N]);
        assert_eq!(tally.rate(Rarity::R), 33.3);
        assert_eq!(tally.rate(Rarity::N), 66.7);
    }

    #[test]
    fn test_extend_accumulates() {
        let mut tally = Tally::from_draws(&[Rarity::Ur]);
        tally.extend([Rarity::Ur, Rarity::R]);
        assert_eq!(tally.count(Rarity::Ur), 2);
        assert_eq!(tally.total(), 3);
    }
}
