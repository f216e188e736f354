use crate::core::composer::compose_fortune;
use crate::domain::model::{FortuneResult, Period};
use crate::domain::ports::MonthSource;

/// 現在の月を注入して占いを計算する入口
pub struct FortuneEngine<M: MonthSource> {
    months: M,
}

impl<M: MonthSource> FortuneEngine<M> {
    pub fn new(months: M) -> Self {
        Self { months }
    }

    pub fn compute(&self, name: &str, birth_date: &str, period: Period) -> Option<FortuneResult> {
        let current_month = self.months.current_month();
        tracing::debug!(
            period = %period,
            birth_date,
            current_month,
            "Computing fortune"
        );

        let result = compose_fortune(name, birth_date, period, current_month);
        match &result {
            Some(fortune) => tracing::debug!(
                level = %fortune.level,
                zodiac = %fortune.zodiac,
                "Fortune composed"
            ),
            None => tracing::debug!("Not enough input for a reading yet"),
        }
        result
    }
}
