pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};

pub use crate::adapters::clock::{Clock, FixedMonth, SystemClock};
pub use crate::adapters::input_store::{JsonFileInputStore, MemoryInputStore};
pub use crate::adapters::storage::LocalStorage;
pub use crate::core::{batch::BatchRunner, composer::compose_fortune, engine::FortuneEngine};
pub use crate::domain::model::{FortuneLevel, FortuneResult, Period, ZodiacSign};
pub use crate::utils::error::{FortuneError, Result};
