//! TokioTimer - tokio タスクによる遅延コールバック

use crate::ports::Timer;
use std::time::Duration;
use tokio::runtime::{Handle, TryCurrentError};

/// TokioTimer は `set_timeout` ごとに sleep するタスクを spawn する
///
/// 作成時の runtime handle を保持するので、runtime の外から呼んでも動きます。
#[derive(Debug, Clone)]
pub struct TokioTimer {
    handle: Handle,
}

impl TokioTimer {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// 現在の tokio runtime から作成
    pub fn current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

impl Timer for TokioTimer {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce() + Send + 'static>) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let timer = TokioTimer::current().unwrap();
        let fired = Arc::new(AtomicU32::new(0));

        let counter = fired.clone();
        timer.set_timeout(
            Duration::from_millis(100),
            Box::new(move || {
                counter.fetch_add(1, Ordering::Relaxed);
            }),
        );

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert_eq!(fired.load(Ordering::Relaxed), 0);

        tokio::time::sleep(Duration::from_millis(50)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn current_fails_outside_runtime() {
        assert!(TokioTimer::current().is_err());
    }
}
