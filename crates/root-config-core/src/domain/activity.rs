//! Activity - アクティビティ述語
//!
//! 子アプリケーションをマウントすべきかを、現在の Location から判定する純粋関数群です。
//!
//! # 学習ポイント
//! - `Arc<dyn Fn>` による述語の型消去
//! - 可変長引数の代わりにスライスを受け取る

use super::location::Location;
use std::fmt;
use std::sync::Arc;

/// `location.href` が `origin + "/" + prefix` のいずれかを含むなら true
///
/// prefix は OR 結合されます。完全一致ではなく部分文字列で比較するため、
/// `apm` は `/apm/jobs/42` にもマッチします。
pub fn prefix<S: AsRef<str>>(location: &Location, prefixes: &[S]) -> bool {
    prefixes.iter().any(|prefix| {
        let needle = format!("{}/{}", location.origin, prefix.as_ref());
        location.href.contains(&needle)
    })
}

/// 常に true
///
/// 単一アプリ構成で、まだパスに依存しない場合のプレースホルダです。
pub fn always_active(_location: &Location) -> bool {
    true
}

/// ActivityPredicate は `(&Location) -> bool` の共有可能な述語
///
/// 一度作ったら変更しません。Registration と一緒にランタイムへ渡します。
#[derive(Clone)]
pub struct ActivityPredicate {
    predicate: Arc<dyn Fn(&Location) -> bool + Send + Sync>,
}

impl ActivityPredicate {
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&Location) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// [`always_active`] をラップした述語
    pub fn always() -> Self {
        Self::from_fn(always_active)
    }

    /// [`prefix`] をラップした述語
    pub fn prefixed<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
        Self::from_fn(move |location| prefix(location, &prefixes))
    }

    pub fn is_active(&self, location: &Location) -> bool {
        (self.predicate)(location)
    }
}

impl fmt::Debug for ActivityPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityPredicate").finish_non_exhaustive()
    }
}
