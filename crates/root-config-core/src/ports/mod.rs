//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部システム（オーケストレーションランタイム、モジュールローダー、
//! ブラウザの location、タイマー）へのインターフェースを提供し、実装の詳細を隠蔽します。

pub mod clock;
pub mod module_loader;
pub mod navigator;
pub mod orchestration;
pub mod timer;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::module_loader::ModuleLoader;
pub use self::navigator::Navigator;
pub use self::orchestration::{ErrorHandler, OrchestrationRuntime};
pub use self::timer::Timer;
