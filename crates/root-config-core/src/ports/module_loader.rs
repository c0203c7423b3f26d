//! ModuleLoader port - 動的モジュールロードの抽象化
//!
//! ブラウザでは SystemJS の `System.import` に相当します。

use crate::domain::{LoadError, LoadedModule};
use async_trait::async_trait;

/// ModuleLoader は specifier から実行可能なモジュールを非同期に取得する
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    async fn import(&self, specifier: &str) -> Result<LoadedModule, LoadError>;
}
