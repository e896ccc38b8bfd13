#![doc = include_str!("../README.md")]

pub mod attack;
pub mod config;
pub mod constants;
mod error;
pub mod payload;
pub mod scenario;
pub mod stats;
pub mod transaction;

pub use attack::BigfooAttack;
pub use config::AttackConfig;
pub use error::BigfooError;
pub use stats::RunStatistics;

pub mod prelude {
    pub use crate::attack::BigfooAttack;
    pub use crate::config::AttackConfig;
    pub use crate::error::BigfooError;
    pub use crate::payload::Payload;
    pub use crate::stats::RunStatistics;
}
