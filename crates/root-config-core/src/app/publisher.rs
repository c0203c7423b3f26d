//! ConfigPublisher - ビルド済み root config の公開
//!
//! # 状態遷移（直線）
//! Idle → Copying → Published
//!
//! 1. Idle → Copying: Clock からトークン（エポックミリ秒）を作り、パスを決める
//! 2. Copying: `source → target` と `source → prefixed_target` を並行コピー。両方成功が必要
//! 3. Copying → Published: `{"url": ...}` をマニフェストに書く
//!
//! どちらかのコピーが失敗したらマニフェストには触れません。
//! マニフェストの書き込みに失敗しても、コピー済みファイルは戻しません。
//!
//! # 既知の制限
//! 同じミリ秒に始まった 2 つのビルドはプレフィックス付きファイル名が衝突します。

use super::config::PublisherConfig;
use crate::domain::{PublishError, PublishManifest};
use crate::ports::Clock;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info};

/// PublishPlan は 1 回の公開で使うトークンとパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishPlan {
    pub token: String,
    pub source: PathBuf,
    pub target: PathBuf,
    pub prefixed_target: PathBuf,
    pub url: String,
}

impl PublishPlan {
    pub fn new(config: &PublisherConfig, token: &str) -> Result<Self, PublishError> {
        let filename = config
            .source
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PublishError::InvalidSource(config.source.clone()))?;
        let prefixed_filename = format!("{token}.{filename}");
        let url = format!(
            "{}/{}",
            config.public_url_prefix.trim_end_matches('/'),
            prefixed_filename
        );

        Ok(Self {
            token: token.to_string(),
            source: config.source.clone(),
            target: config.public_dir.join(filename),
            prefixed_target: config.public_dir.join(prefixed_filename),
            url,
        })
    }
}

/// ConfigPublisher はビルドごとに一度実行する
///
/// # 使用例
/// ```ignore
/// let publisher = ConfigPublisher::new(PublisherConfig::default(), SystemClock);
/// let plan = publisher.publish().await?;
/// println!("{}", plan.url);
/// ```
pub struct ConfigPublisher<C> {
    config: PublisherConfig,
    clock: C,
}

impl<C: Clock> ConfigPublisher<C> {
    pub fn new(config: PublisherConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// 現在時刻からトークンとパスを決める
    pub fn plan(&self) -> Result<PublishPlan, PublishError> {
        let token = self.clock.now().timestamp_millis().to_string();
        PublishPlan::new(&self.config, &token)
    }

    /// コピーしてマニフェストを書く
    ///
    /// 失敗はここでログに出してから返します。
    pub async fn publish(&self) -> Result<PublishPlan, PublishError> {
        let plan = self.plan().inspect_err(|err| error!(error = %err, "invalid publisher config"))?;

        let copied = tokio::try_join!(
            copy_file(&plan.source, &plan.target),
            copy_file(&plan.source, &plan.prefixed_target),
        );
        if let Err(err) = copied {
            error!(error = %err, "failed to copy SPA config files");
            return Err(err);
        }
        info!(
            stable = %plan.target.display(),
            prefixed_target = %plan.prefixed_target.display(),
            "SPA config files copied!"
        );

        let manifest = PublishManifest::new(plan.url.clone());
        if let Err(err) = write_manifest(&self.config.manifest, &manifest).await {
            error!(error = %err, "failed to update Single SPA manifest");
            return Err(err);
        }
        info!(manifest = %self.config.manifest.display(), url = %plan.url, "Single SPA manifest updated!");

        Ok(plan)
    }
}

async fn copy_file(from: &Path, to: &Path) -> Result<u64, PublishError> {
    fs::copy(from, to).await.map_err(|source| PublishError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// `<name>.tmp`（拡張子は置き換えずに追加する）
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// 一時ファイルに書いてから rename する
///
/// 途中で失敗しても既存のマニフェストは壊れません。
async fn write_manifest(path: &Path, manifest: &PublishManifest) -> Result<(), PublishError> {
    let json = manifest.to_json()?;
    let temp_path = temp_path_for(path);
    let write_err = |source: std::io::Error| PublishError::WriteManifest {
        path: path.to_path_buf(),
        source,
    };

    fs::write(&temp_path, json).await.map_err(write_err)?;
    if let Err(source) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(write_err(source));
    }
    Ok(())
}
