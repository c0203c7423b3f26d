//! Errors - エラー型
//!
//! 関心ごとに enum を分けています。
//! - RegistrationError: アプリ登録
//! - LoadError: モジュールの動的ロード
//! - PublishError: Config Publisher のコピーとマニフェスト書き込み
//! - ManifestError: マニフェストの読み込み
//! - ConfigError: Publisher 設定ファイルの読み込み

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("application '{0}' is already registered")]
    DuplicateApplication(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("unable to resolve module specifier '{0}'")]
    Unresolved(String),

    #[error("failed to load module '{specifier}': {reason}")]
    Failed { specifier: String, reason: String },
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("source path {} has no file name", .0.display())]
    InvalidSource(PathBuf),

    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write manifest {}: {source}", path.display())]
    WriteManifest { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("unable to read manifest {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("unable to parse manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("unable to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
