//! AppError - ランタイムから届くエラーイベント

use thiserror::Error;

/// AppError はオーケストレーションランタイムがエラーハンドラへ渡すイベント
///
/// 読み取り専用で、1 回の配送ごとに消費されます。
/// ハンドラが処理できなければ、そのまま `Err` で送り返します（再送出）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    pub app_or_parcel_name: String,
    pub message: String,
}

impl AppError {
    pub fn new(app_or_parcel_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            app_or_parcel_name: app_or_parcel_name.into(),
            message: message.into(),
        }
    }
}
