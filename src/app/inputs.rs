use crate::core::InputStore;
use crate::domain::model::Period;
use crate::utils::error::Result;

pub const KEY_NAME: &str = "fortune-name";
pub const KEY_BIRTH_YEAR: &str = "fortune-birthYear";
pub const KEY_BIRTH_MONTH: &str = "fortune-birthMonth";
pub const KEY_BIRTH_DAY: &str = "fortune-birthDay";
pub const KEY_PERIOD: &str = "fortune-period";
pub const KEY_TOUCHED: &str = "fortune-touched";

/// 年・月・日から `YYYY-MM-DD` を作る。どれかが空なら空文字列。
pub fn compose_birth_date(year: &str, month: &str, day: &str) -> String {
    let (year, month, day) = (year.trim(), month.trim(), day.trim());
    if year.is_empty() || month.is_empty() || day.is_empty() {
        return String::new();
    }
    format!("{}-{:0>2}-{:0>2}", year, month, day)
}

/// 前回の入力内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedInputs {
    pub name: String,
    pub birth_year: String,
    pub birth_month: String,
    pub birth_day: String,
    pub period: Period,
    pub touched: bool,
}

impl SavedInputs {
    pub async fn restore<S: InputStore>(store: &S) -> Result<Self> {
        let period = match store.get(KEY_PERIOD).await? {
            Some(saved) => saved.parse().unwrap_or_else(|_| {
                tracing::debug!(saved = %saved, "Ignoring unknown saved period");
                Period::Today
            }),
            None => Period::Today,
        };

        Ok(Self {
            name: store.get(KEY_NAME).await?.unwrap_or_default(),
            birth_year: store.get(KEY_BIRTH_YEAR).await?.unwrap_or_default(),
            birth_month: store.get(KEY_BIRTH_MONTH).await?.unwrap_or_default(),
            birth_day: store.get(KEY_BIRTH_DAY).await?.unwrap_or_default(),
            period,
            touched: store.get(KEY_TOUCHED).await?.as_deref() == Some("true"),
        })
    }

    /// 空の項目は保存せずに削除する。期間と touched は常に保存する。
    pub async fn persist<S: InputStore>(&self, store: &S) -> Result<()> {
        for (key, value) in [
            (KEY_NAME, &self.name),
            (KEY_BIRTH_YEAR, &self.birth_year),
            (KEY_BIRTH_MONTH, &self.birth_month),
            (KEY_BIRTH_DAY, &self.birth_day),
        ] {
            if value.is_empty() {
                store.remove(key).await?;
            } else {
                store.set(key, value).await?;
            }
        }
        store.set(KEY_PERIOD, self.period.as_str()).await?;
        store
            .set(KEY_TOUCHED, if self.touched { "true" } else { "false" })
            .await?;
        Ok(())
    }

    pub fn birth_date(&self) -> String {
        compose_birth_date(&self.birth_year, &self.birth_month, &self.birth_day)
    }

    /// 占える状態か（名前と生年月日がそろっている）
    pub fn is_ready(&self) -> bool {
        !self.name.trim().is_empty() && !self.birth_date().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::input_store::MemoryInputStore;

    #[test]
    fn test_compose_birth_date_pads() {
        assert_eq!(compose_birth_date("1990", "5", "1"), "1990-05-01");
        assert_eq!(compose_birth_date("1990", "12", "31"), "1990-12-31");
        assert_eq!(compose_birth_date("1990", "05", "01"), "1990-05-01");
        assert_eq!(compose_birth_date("", "5", "1"), "");
        assert_eq!(compose_birth_date("1990", "", "1"), "");
        assert_eq!(compose_birth_date("1990", "5", ""), "");
    }

    #[tokio::test]
    async fn test_restore_defaults_from_empty_store() {
        let store = MemoryInputStore::new();
        let inputs = SavedInputs::restore(&store).await.unwrap();
        assert_eq!(inputs, SavedInputs::default());
        assert!(!inputs.is_ready());
    }

    #[tokio::test]
    async fn test_persist_and_restore() {
        let store = MemoryInputStore::new();
        let inputs = SavedInputs {
            name: "山田 花子".to_string(),
            birth_year: "1990".to_string(),
            birth_month: "5".to_string(),
            birth_day: "1".to_string(),
            period: Period::NextYear,
            touched: true,
        };
        inputs.persist(&store).await.unwrap();

        let restored = SavedInputs::restore(&store).await.unwrap();
        assert_eq!(restored, inputs);
        assert_eq!(restored.birth_date(), "1990-05-01");
        assert!(restored.is_ready());
    }

    #[tokio::test]
    async fn test_persist_removes_empty_fields() {
        let store = MemoryInputStore::new();
        store.set(KEY_NAME, "old").await.unwrap();

        let inputs = SavedInputs::default();
        inputs.persist(&store).await.unwrap();

        assert_eq!(store.get(KEY_NAME).await.unwrap(), None);
        assert_eq!(store.get(KEY_PERIOD).await.unwrap().as_deref(), Some("today"));
        assert_eq!(store.get(KEY_TOUCHED).await.unwrap().as_deref(), Some("false"));
    }

    #[tokio::test]
    async fn test_restore_ignores_unknown_period_and_touched_values() {
        let store = MemoryInputStore::new();
        store.set(KEY_PERIOD, "someday").await.unwrap();
        store.set(KEY_TOUCHED, "yes").await.unwrap();

        let restored = SavedInputs::restore(&store).await.unwrap();
        assert_eq!(restored.period, Period::Today);
        assert!(!restored.touched);
    }
}
