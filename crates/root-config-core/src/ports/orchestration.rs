//! OrchestrationRuntime port - single-spa 型ランタイムの抽象化
//!
//! ランタイム本体（マウント/アンマウントの状態機械）はこのクレートの外にあります。
//! ここでは root config が必要とする 3 つの操作だけを定義します。

use crate::domain::{AppError, Registration, RegistrationError};
use std::sync::Arc;

/// ErrorHandler はランタイムのグローバルエラーハンドラ
///
/// 処理しないエラーは `Err(error)` でそのまま返します（再送出）。
pub trait ErrorHandler: Send + Sync {
    fn handle(&self, error: AppError) -> Result<(), AppError>;
}

impl<F> ErrorHandler for F
where
    F: Fn(AppError) -> Result<(), AppError> + Send + Sync,
{
    fn handle(&self, error: AppError) -> Result<(), AppError> {
        self(error)
    }
}

/// OrchestrationRuntime はアプリ登録表を持つ外部ランタイム
///
/// # 設計原則
/// - 登録表はランタイムが所有する（こちらはグローバル状態を持たない）
/// - すべて `&self`（ランタイム側が内部可変性を持つ）
pub trait OrchestrationRuntime: Send + Sync {
    fn add_error_handler(&self, handler: Arc<dyn ErrorHandler>);

    fn register_application(&self, registration: Registration) -> Result<(), RegistrationError>;

    /// ルーティングとマウントを開始する。完了は待たない
    fn start(&self);
}
