//! Registration - ランタイムに渡すアプリケーション登録
//!
//! # 学習ポイント
//! - 遅延ロードを「非同期ファクトリ」として注入する（LazyModule）
//! - trait object (`Arc<dyn ModuleLoader>`) を Clone 可能な値に包む

use super::activity::ActivityPredicate;
use super::errors::LoadError;
use crate::ports::ModuleLoader;
use std::fmt;
use std::sync::Arc;

/// LoadedModule はロード済みモジュールのハンドル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModule {
    pub specifier: String,
    pub url: String,
}

/// LazyModule は specifier を ModuleLoader で解決する遅延ローダー
///
/// `load()` が呼ばれるまで何も取得しません。
#[derive(Clone)]
pub struct LazyModule {
    loader: Arc<dyn ModuleLoader>,
    specifier: String,
}

impl LazyModule {
    pub fn new(loader: Arc<dyn ModuleLoader>, specifier: impl Into<String>) -> Self {
        Self {
            loader,
            specifier: specifier.into(),
        }
    }

    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    pub async fn load(&self) -> Result<LoadedModule, LoadError> {
        self.loader.import(&self.specifier).await
    }
}

impl fmt::Debug for LazyModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyModule")
            .field("specifier", &self.specifier)
            .finish_non_exhaustive()
    }
}

/// Registration は (name, loader, activity) の三つ組
///
/// 一度だけランタイムに渡し、その後のライフサイクルはランタイムが持ちます。
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub loader: LazyModule,
    pub activity: ActivityPredicate,
}

impl Registration {
    pub fn new(name: impl Into<String>, loader: LazyModule, activity: ActivityPredicate) -> Self {
        Self {
            name: name.into(),
            loader,
            activity,
        }
    }
}
