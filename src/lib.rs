//! Card Flip Simulation Library
//!
//! Simulates a gacha card flip: each shuffle deals four cards with at least
//! one SR or above, and every draw costs items on an escalating schedule that
//! resets on shuffle. Five shuffle strategies are compared on how their draws
//! spread across the UR/SR/R/N tiers.
//!
//! ## Modules
//!
//! - `rarity`: rarity tiers and the roll-to-tier thresholds
//! - `cards`: card sets and the pity-guaranteed deal
//! - `config`: budget, cost schedule and validation
//! - `strategy`: the five draw strategies and their simulator
//! - `tally`: per-tier counts and rates
//! - `report`: text tables for the binary
//! - `error`: configuration and simulation errors
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin card_flip --release
//! ```

pub mod cards;
pub mod config;
pub mod error;
pub mod rarity;
pub mod report;
pub mod strategy;
pub mod tally;
