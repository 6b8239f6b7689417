//! Draw Strategy Simulation
//!
//! Spends a resource budget drawing from pity-guaranteed card sets under
//! five re-shuffle strategies and compares the resulting rarity rates.
//!
//! ## Cycle Mechanics
//! 1. Position 0 of the current set is always drawn (the loop only runs
//!    while the budget covers its cost)
//! 2. Each further position the strategy allows is drawn only if the budget
//!    still covers that position's cost
//! 3. The set is reshuffled for free and the cost schedule resets
//! 4. The run ends once the budget cannot pay for position 0
//!
//! ## Strategies
//! - Shuffle after every 1, 2, 3 or 4 cards
//! - Shuffle as soon as an SR-or-above card is drawn within the current set

use rand::Rng;
use smallvec::SmallVec;

use crate::cards::{CardSet, HAND_SIZE};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::rarity::{Rarity, RaritySampler};
use crate::tally::Tally;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShuffleStrategy {
    EachCard,
    EveryTwo,
    EveryThree,
    EveryFour,
    OnSrOrAbove,
}

impl ShuffleStrategy {
    pub fn all() -> Vec<Self> {
        vec![
            Self::EachCard,
            Self::EveryTwo,
            Self::EveryThree,
            Self::EveryFour,
            Self::OnSrOrAbove,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::EachCard => "Shuffle after every card",
            Self::EveryTwo => "Shuffle after 2 cards",
            Self::EveryThree => "Shuffle after 3 cards",
            Self::EveryFour => "Shuffle after all 4 cards",
            Self::OnSrOrAbove => "Shuffle once SR or above appears",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::EachCard => "Every 1",
            Self::EveryTwo => "Every 2",
            Self::EveryThree => "Every 3",
            Self::EveryFour => "Every 4",
            Self::OnSrOrAbove => "On SR+",
        }
    }

    /// Highest number of positions drawn before reshuffling.
    pub fn positions(&self) -> usize {
        match self {
            Self::EachCard => 1,
            Self::EveryTwo => 2,
            Self::EveryThree => 3,
            Self::EveryFour | Self::OnSrOrAbove => HAND_SIZE,
        }
    }

    /// Only looks at draws from the current set, never earlier cycles.
    fn stops_cycle(&self, drawn: &[Draw]) -> bool {
        match self {
            Self::OnSrOrAbove => drawn.iter().any(|d| d.rarity.is_sr_or_above()),
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub position: usize,
    pub rarity: Rarity,
    pub cost: u64,
}

/// Everything drawn from one card set before it was reshuffled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    pub cards: CardSet,
    pub draws: SmallVec<[Draw; HAND_SIZE]>,
    pub budget_left: u64,
}

impl Cycle {
    pub fn spent(&self) -> u64 {
        self.draws.iter().map(|d| d.cost).sum()
    }
}

/// Steps through a strategy one cycle at a time.
pub struct Simulator<'a, R: Rng + ?Sized> {
    strategy: ShuffleStrategy,
    config: &'a SimConfig,
    sampler: RaritySampler,
    rng: &'a mut R,
    budget: u64,
    cards: CardSet,
    failed: bool,
}

impl<'a, R: Rng + ?Sized> Simulator<'a, R> {
    pub fn new(
        strategy: ShuffleStrategy,
        config: &'a SimConfig,
        rng: &'a mut R,
    ) -> Result<Self, SimError> {
        config.validate()?;
        let sampler = config.table.sampler()?;
        let cards = CardSet::deal(&sampler, config.pity_retry_cap, &mut *rng)?;
        log::debug!(
            "starting '{}' with budget {}",
            strategy.name(),
            config.initial_budget
        );

        Ok(Self {
            strategy,
            config,
            sampler,
            rng,
            budget: config.initial_budget,
            cards,
            failed: false,
        })
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn cards(&self) -> CardSet {
        self.cards
    }

    fn draw_cycle(&mut self) -> Result<Option<Cycle>, SimError> {
        let costs = self.config.costs;
        if self.budget < costs.first() {
            return Ok(None);
        }

        let cards = self.cards;
        let mut draws: SmallVec<[Draw; HAND_SIZE]> = SmallVec::new();
        for position in 0..self.strategy.positions() {
            let cost = costs[position];
            if self.budget < cost {
                continue;
            }
            self.budget -= cost;
            draws.push(Draw {
                position,
                rarity: cards.get(position),
                cost,
            });
            if self.strategy.stops_cycle(&draws) {
                break;
            }
        }

        self.cards = CardSet::deal(&self.sampler, self.config.pity_retry_cap, &mut *self.rng)?;

        Ok(Some(Cycle {
            cards,
            draws,
            budget_left: self.budget,
        }))
    }
}

impl<R: Rng + ?Sized> Iterator for Simulator<'_, R> {
    type Item = Result<Cycle, SimError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.draw_cycle() {
            Ok(cycle) => cycle.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub strategy: ShuffleStrategy,
    pub tally: Tally,
    pub cycles: u64,
    pub spent: u64,
    pub budget_left: u64,
}

impl SimulationResult {
    pub fn print(&self) {
        print!("{}", crate::report::render_tally(&self.tally));
    }
}

pub fn run_strategy<R: Rng + ?Sized>(
    strategy: ShuffleStrategy,
    config: &SimConfig,
    rng: &mut R,
) -> Result<SimulationResult, SimError> {
    let mut simulator = Simulator::new(strategy, config, rng)?;
    let mut tally = Tally::default();
    let mut cycles = 0;
    let mut spent = 0;

    for cycle in &mut simulator {
        let cycle = cycle?;
        cycles += 1;
        spent += cycle.spent();
        tally.extend(cycle.draws.iter().map(|d| d.rarity));
    }

    log::info!(
        "'{}' finished: {} draws over {} cycles, {} units left",
        strategy.name(),
        tally.total(),
        cycles,
        simulator.budget()
    );

    Ok(SimulationResult {
        strategy,
        tally,
        cycles,
        spent,
        budget_left: simulator.budget(),
    })
}

pub fn run_strategy_simulation(
    strategy: ShuffleStrategy,
    config: &SimConfig,
) -> Result<SimulationResult, SimError> {
    let mut rng = rand::thread_rng();
    run_strategy(strategy, config, &mut rng)
}

/// Runs every strategy in turn, each from a freshly dealt set.
pub fn compare_strategies(config: &SimConfig) -> Result<Vec<SimulationResult>, SimError> {
    ShuffleStrategy::all()
        .into_iter()
        .map(|strategy| run_strategy_simulation(strategy, config))
        .collect()
}
