//! PublishManifest - ホストページが読むマニフェスト
//!
//! `{"url":"/js/root-config/<token>.single-spa.config.js"}` の形で保存します。

use super::errors::ManifestError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// PublishManifest はキャッシュバスト済みコピーの公開 URL を記録する
///
/// # 不変条件
/// - `url` は同じビルドで実際に書き込まれたプレフィックス付きコピーを指す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishManifest {
    pub url: String,
}

impl PublishManifest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// コンパクトな JSON にシリアライズ（空白なし）
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// 保存済みのマニフェストを読み込む
    pub async fn read(path: &Path) -> Result<Self, ManifestError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ManifestError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
