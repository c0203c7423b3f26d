//! ReloadOnLoadFailure - ロード失敗時のページリロード
//!
//! 子アプリのソース取得中に落ちた場合だけ、遅延してフルページ遷移でやり直します。
//! それ以外のエラーは再送出します（握りつぶさない）。

use crate::domain::AppError;
use crate::ports::{ErrorHandler, Navigator, Timer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// ランタイムがソース取得中の失敗に付けるメッセージ
pub const LOADING_SOURCE_CODE_FAILURE: &str = "died in status LOADING_SOURCE_CODE";

/// リロードまでの待ち時間
pub const RELOAD_DELAY: Duration = Duration::from_millis(3000);

/// 最初の `#` より前を返す。`#` がなければそのまま
///
/// ```
/// use root_config_core::app::strip_hash;
///
/// assert_eq!(strip_hash("a#b#c"), "a");
/// ```
pub fn strip_hash(href: &str) -> &str {
    href.split_once('#').map_or(href, |(head, _)| head)
}

/// ReloadOnLoadFailure は 1 つのアプリに対するリロードハンドラ
///
/// # 判定
/// - `app_or_parcel_name` が一致し、かつ
/// - `message` が [`LOADING_SOURCE_CODE_FAILURE`] を含む
///
/// 両方満たすときだけ、[`RELOAD_DELAY`] 後に hash を落とした href へ遷移します。
/// href は発火時に読み直します。
pub struct ReloadOnLoadFailure {
    app_name: String,
    navigator: Arc<dyn Navigator>,
    timer: Arc<dyn Timer>,
    delay: Duration,
}

impl ReloadOnLoadFailure {
    pub fn new(
        app_name: impl Into<String>,
        navigator: Arc<dyn Navigator>,
        timer: Arc<dyn Timer>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            navigator,
            timer,
            delay: RELOAD_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn is_recoverable(&self, error: &AppError) -> bool {
        error.app_or_parcel_name == self.app_name
            && error.message.contains(LOADING_SOURCE_CODE_FAILURE)
    }
}

impl ErrorHandler for ReloadOnLoadFailure {
    fn handle(&self, error: AppError) -> Result<(), AppError> {
        if !self.is_recoverable(&error) {
            return Err(error);
        }

        warn!(app = %error.app_or_parcel_name, "Single-SPA Error: {}", error.message);
        info!(delay_ms = self.delay.as_millis() as u64, "Reloading page...");

        let navigator = Arc::clone(&self.navigator);
        self.timer.set_timeout(
            self.delay,
            Box::new(move || {
                let href = navigator.href();
                navigator.assign(strip_hash(&href).to_string());
            }),
        );
        Ok(())
    }
}
