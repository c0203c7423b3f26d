//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせてアプリケーションロジックを実装します。
//!
//! # 主要コンポーネント
//! - **RootConfig**: 子アプリの登録とランタイム起動（ページロード時）
//! - **ReloadOnLoadFailure**: ロード失敗時の遅延リロード
//! - **ConfigPublisher**: ビルド済み root config の公開とマニフェスト書き込み（ビルド時）
//! - **PublisherConfig**: ConfigPublisher のパス設定

pub mod config;
pub mod error_handler;
pub mod publisher;
pub mod registration;

// 主要な型を再エクスポート
pub use self::config::PublisherConfig;
pub use self::error_handler::{LOADING_SOURCE_CODE_FAILURE, RELOAD_DELAY, ReloadOnLoadFailure, strip_hash};
pub use self::publisher::{ConfigPublisher, PublishPlan};
pub use self::registration::{APP_NAME, APP_SPECIFIER, RootConfig};
