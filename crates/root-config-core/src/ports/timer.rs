//! Timer port - 遅延コールバック

use std::time::Duration;

/// Timer は `delay` 後にコールバックを一度だけ実行する
///
/// キャンセルはありません。一度スケジュールしたら必ず発火します。
pub trait Timer: Send + Sync {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce() + Send + 'static>);
}
