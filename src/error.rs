use thiserror::Error;

/// Errors raised when a simulation configuration is unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("draw cost at position {position} must be greater than zero")]
    ZeroCost { position: usize },
    #[error(
        "rarity thresholds must increase strictly from 1 (UR {ur_max}, SR {sr_max}, R {r_max}, roll {roll_max})"
    )]
    ThresholdOrder {
        ur_max: u32,
        sr_max: u32,
        r_max: u32,
        roll_max: u32,
    },
    #[error("pity retry cap must be at least 1")]
    ZeroRetryCap,
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("pity guarantee not met after {attempts} redraws")]
    PityExhausted { attempts: u32 },
}
