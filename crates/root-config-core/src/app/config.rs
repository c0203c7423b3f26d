//! PublisherConfig - Config Publisher の設定
//!
//! 省略したキーはデフォルト（ビルド出力の標準レイアウト）になります。
//!
//! ```toml
//! source = "dist/root-config/single-spa.config.js"
//! public_dir = "public/js/root-config"
//! public_url_prefix = "/js/root-config"
//! manifest = "spa-config.json"
//! ```

use crate::domain::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE: &str = "dist/root-config/single-spa.config.js";
pub const DEFAULT_PUBLIC_DIR: &str = "public/js/root-config";
pub const DEFAULT_PUBLIC_URL_PREFIX: &str = "/js/root-config";
pub const DEFAULT_MANIFEST: &str = "spa-config.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublisherConfig {
    /// コンパイル済みバンドル
    pub source: PathBuf,
    /// コピー先の公開ディレクトリ
    pub public_dir: PathBuf,
    /// public_dir に対応する公開 URL
    pub public_url_prefix: String,
    /// マニフェストの出力先
    pub manifest: PathBuf,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            public_url_prefix: DEFAULT_PUBLIC_URL_PREFIX.to_string(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
        }
    }
}

impl PublisherConfig {
    pub fn from_toml_str(toml_string: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_string)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let toml_string = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&toml_string).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 相対パスを `root` 基準に解決する。絶対パスはそのまま
    pub fn resolve(&self, root: &Path) -> Self {
        Self {
            source: root.join(&self.source),
            public_dir: root.join(&self.public_dir),
            public_url_prefix: self.public_url_prefix.clone(),
            manifest: root.join(&self.manifest),
        }
    }
}
