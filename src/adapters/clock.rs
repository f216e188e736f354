use crate::domain::ports::MonthSource;
use chrono::{Datelike, Local};

/// 実行環境のローカル時刻から現在の月を読む
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl MonthSource for SystemClock {
    fn current_month(&self) -> u32 {
        Local::now().month()
    }
}

/// 常に同じ月を返す。テストや設定での固定用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMonth(pub u32);

impl MonthSource for FixedMonth {
    fn current_month(&self) -> u32 {
        self.0
    }
}

/// 設定で選ぶ月の取り方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(u32),
}

impl Clock {
    pub fn from_override(month: Option<u32>) -> Self {
        month.map(Clock::Fixed).unwrap_or(Clock::System)
    }
}

impl MonthSource for Clock {
    fn current_month(&self) -> u32 {
        match self {
            Clock::System => SystemClock.current_month(),
            Clock::Fixed(month) => *month,
        }
    }
}
