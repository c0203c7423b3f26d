//! RecordingNavigator - 遷移を記録する Navigator（開発用・テスト用）

use crate::ports::Navigator;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct NavigatorState {
    href: String,
    assignments: Vec<String>,
}

/// RecordingNavigator は href を保持し、`assign` の履歴を残す
///
/// # 使用例
/// ```
/// use root_config_core::impls::RecordingNavigator;
/// use root_config_core::ports::Navigator;
///
/// let nav = RecordingNavigator::new("https://portal.example.com/#/a");
/// nav.assign("https://portal.example.com/".to_string());
/// assert_eq!(nav.href(), "https://portal.example.com/");
/// assert_eq!(nav.assignments().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    state: Mutex<NavigatorState>,
}

impl RecordingNavigator {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(NavigatorState {
                href: href.into(),
                assignments: Vec::new(),
            }),
        }
    }

    /// 遷移を記録せずに href を差し替える（ユーザー操作のシミュレーション）
    pub fn set_href(&self, href: impl Into<String>) {
        self.lock().href = href.into();
    }

    pub fn assignments(&self) -> Vec<String> {
        self.lock().assignments.clone()
    }

    fn lock(&self) -> MutexGuard<'_, NavigatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for RecordingNavigator {
    fn href(&self) -> String {
        self.lock().href.clone()
    }

    fn assign(&self, href: String) {
        let mut state = self.lock();
        state.href = href.clone();
        state.assignments.push(href);
    }
}
