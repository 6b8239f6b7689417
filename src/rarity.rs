//! Rarity Tiers
//!
//! Maps a uniform roll in `[1, roll_max]` onto four tiers using fixed
//! cumulative thresholds.
//!
//! | Roll      | Tier | Rate  |
//! |-----------|------|-------|
//! | 1-70      | UR   | 7.0%  |
//! | 71-438    | SR   | 36.8% |
//! | 439-688   | R    | 25.0% |
//! | 689-1000  | N    | 31.2% |

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::error::ConfigError;

pub const UR_MAX: u32 = 70;
pub const SR_MAX: u32 = 438;
pub const R_MAX: u32 = 688;
pub const ROLL_MAX: u32 = 1000;

/// Declaration order gives `Ur > Sr > R > N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    N,
    R,
    Sr,
    Ur,
}

impl Rarity {
    /// Highest tier first, the order reports list them in.
    pub const ALL: [Self; 4] = [Self::Ur, Self::Sr, Self::R, Self::N];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ur => "UR",
            Self::Sr => "SR",
            Self::R => "R",
            Self::N => "N",
        }
    }

    pub fn is_sr_or_above(&self) -> bool {
        *self >= Self::Sr
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Ur => 0,
            Self::Sr => 1,
            Self::R => 2,
            Self::N => 3,
        }
    }
}

/// Upper bound (inclusive) of each tier's roll band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RarityTable {
    pub ur_max: u32,
    pub sr_max: u32,
    pub r_max: u32,
    pub roll_max: u32,
}

impl Default for RarityTable {
    fn default() -> Self {
        Self {
            ur_max: UR_MAX,
            sr_max: SR_MAX,
            r_max: R_MAX,
            roll_max: ROLL_MAX,
        }
    }
}

impl RarityTable {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = 1 <= self.ur_max
            && self.ur_max < self.sr_max
            && self.sr_max < self.r_max
            && self.r_max < self.roll_max;
        if !ordered {
            return Err(ConfigError::ThresholdOrder {
                ur_max: self.ur_max,
                sr_max: self.sr_max,
                r_max: self.r_max,
                roll_max: self.roll_max,
            });
        }
        Ok(())
    }

    pub fn classify(&self, roll: u32) -> Rarity {
        if roll <= self.ur_max {
            Rarity::Ur
        } else if roll <= self.sr_max {
            Rarity::Sr
        } else if roll <= self.r_max {
            Rarity::R
        } else {
            Rarity::N
        }
    }

    /// Nominal probability of a tier, from its band width.
    pub fn probability(&self, rarity: Rarity) -> f64 {
        let width = match rarity {
            Rarity::Ur => self.ur_max,
            Rarity::Sr => self.sr_max - self.ur_max,
            Rarity::R => self.r_max - self.sr_max,
            Rarity::N => self.roll_max - self.r_max,
        };
        width as f64 / self.roll_max as f64
    }

    pub fn sampler(&self) -> Result<RaritySampler, ConfigError> {
        self.validate()?;
        Ok(RaritySampler {
            table: *self,
            roll: Uniform::new_inclusive(1, self.roll_max),
        })
    }
}

/// Draws one rarity per sample, consuming one uniform roll.
#[derive(Clone, Debug)]
pub struct RaritySampler {
    table: RarityTable,
    roll: Uniform<u32>,
}

impl Distribution<Rarity> for RaritySampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rarity {
        self.table.classify(self.roll.sample(rng))
    }
}
