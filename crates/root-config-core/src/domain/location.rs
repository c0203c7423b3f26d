//! Location - ナビゲーション位置
//!
//! ブラウザ（またはホスト環境）が提供する現在の URL を表す値です。
//! このクレートは Location を所有せず、読み取るだけです。

use serde::{Deserialize, Serialize};

/// Location は現在のナビゲーション URL
///
/// # フィールド
/// - `origin`: `https://example.com` のようなスキーム + authority
/// - `href`: URL 全体
/// - `hash`: `#` から始まるフラグメント（なければ空文字列）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub origin: String,
    pub href: String,
    pub hash: String,
}

impl Location {
    pub fn new(
        origin: impl Into<String>,
        href: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            href: href.into(),
            hash: hash.into(),
        }
    }

    /// 絶対 URL から Location を組み立てる
    ///
    /// `://` を含まない文字列は origin を空として扱います。
    ///
    /// # Example
    /// ```
    /// use root_config_core::domain::Location;
    ///
    /// let loc = Location::parse("https://portal.example.com/apm/jobs#top");
    /// assert_eq!(loc.origin, "https://portal.example.com");
    /// assert_eq!(loc.hash, "#top");
    /// ```
    pub fn parse(href: impl Into<String>) -> Self {
        let href = href.into();
        let origin = match href.find("://") {
            Some(idx) => {
                let authority_start = idx + 3;
                let end = href[authority_start..]
                    .find(['/', '?', '#'])
                    .map_or(href.len(), |offset| authority_start + offset);
                href[..end].to_string()
            }
            None => String::new(),
        };
        let hash = href
            .find('#')
            .map(|idx| href[idx..].to_string())
            .unwrap_or_default();

        Self { origin, href, hash }
    }
}
