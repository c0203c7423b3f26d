//! Impls - 実装（開発用・テスト用）
//!
//! このモジュールには ports の実装を含めます。
//!
//! # 含まれる実装
//! - **InMemoryRuntime**: 開発用のオーケストレーションランタイム
//! - **ImportMapLoader**: import map で specifier を解決する ModuleLoader
//! - **RecordingNavigator**: 遷移を記録する Navigator
//! - **TokioTimer**: tokio タスクによる Timer（本番でも使用）

pub mod import_map;
pub mod inmem_runtime;
pub mod navigator;
pub mod timer;

// 主要な型を再エクスポート
pub use self::import_map::ImportMapLoader;
pub use self::inmem_runtime::InMemoryRuntime;
pub use self::navigator::RecordingNavigator;
pub use self::timer::TokioTimer;
