use crate::domain::model::{Reading, ReadingRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 前回入力した内容を保存しておくキー・バリューストア。
/// 占いのコアはこれを一切参照しない。
pub trait InputStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str)
        -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 「今年」補正に使う現在の月（1〜12）
pub trait MonthSource: Send + Sync {
    fn current_month(&self) -> u32;
}

impl<M: MonthSource + ?Sized> MonthSource for &M {
    fn current_month(&self) -> u32 {
        (**self).current_month()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn fixed_month(&self) -> Option<u32>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ReadingRequest>>;
    async fn transform(&self, requests: Vec<ReadingRequest>) -> Result<Vec<Reading>>;
    async fn load(&self, readings: Vec<Reading>) -> Result<String>;
}
