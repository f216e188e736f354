pub mod batch;
pub mod composer;
pub mod engine;
pub mod numerology;
pub mod seed;
pub mod tables;
pub mod zodiac;

pub use crate::domain::model::{FortuneResult, Period, Reading, ReadingRequest};
pub use crate::domain::ports::{ConfigProvider, InputStore, MonthSource, Pipeline, Storage};
pub use crate::utils::error::Result;
