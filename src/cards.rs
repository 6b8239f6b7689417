//! Card Sets and the Pity Guarantee
//!
//! A shuffle deals four cards, at least one of which is SR or above:
//! 1. Three cards are drawn at the normal rates
//! 2. If none of them is SR or above, the fourth is redrawn until it is
//! 3. The four cards are put in uniformly random order
//!
//! Dealing returns a fresh `CardSet`; callers keep the latest one.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::Distribution;

use crate::error::SimError;
use crate::rarity::{Rarity, RaritySampler};

pub const HAND_SIZE: usize = 4;

/// Redraw limit for the guaranteed card. Each redraw succeeds with
/// probability >= 36.8% under the default table.
pub const PITY_RETRY_CAP: u32 = 10_000;

pub fn includes_sr_or_above(cards: &[Rarity]) -> bool {
    cards.iter().any(Rarity::is_sr_or_above)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSet([Rarity; HAND_SIZE]);

impl CardSet {
    pub fn deal<R: Rng + ?Sized>(
        sampler: &RaritySampler,
        retry_cap: u32,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        let cards = fill_with_guarantee(|| sampler.sample(&mut *rng), retry_cap)?;
        Ok(arrange(cards, rng))
    }

    pub fn cards(&self) -> &[Rarity; HAND_SIZE] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Rarity {
        self.0[position]
    }
}

fn fill_with_guarantee(
    mut draw: impl FnMut() -> Rarity,
    retry_cap: u32,
) -> Result<[Rarity; HAND_SIZE], SimError> {
    let mut cards = [Rarity::N; HAND_SIZE];
    for card in cards.iter_mut().take(HAND_SIZE - 1) {
        *card = draw();
    }

    let last = if includes_sr_or_above(&cards[..HAND_SIZE - 1]) {
        draw()
    } else {
        let mut attempts = 0;
        loop {
            let card = draw();
            if card.is_sr_or_above() {
                log::trace!("pity slot filled with {} after {} redraws", card.label(), attempts);
                break card;
            }
            attempts += 1;
            if attempts >= retry_cap {
                return Err(SimError::PityExhausted { attempts });
            }
        }
    };
    cards[HAND_SIZE - 1] = last;
    Ok(cards)
}

// Fisher-Yates: i from len-1 down to 1, swap with uniform j in [0, i].
fn arrange<R: Rng + ?Sized>(mut cards: [Rarity; HAND_SIZE], rng: &mut R) -> CardSet {
    cards.shuffle(rng);
    CardSet(cards)
}
