//! root-config-core
//!
//! Core building blocks for the micro-frontend root config.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（Location, ActivityPredicate, AppError, Registration, PublishManifest, errors）
//! - **ports**: 抽象化レイヤー（OrchestrationRuntime, ModuleLoader, Navigator, Timer, Clock）
//! - **app**: アプリケーションロジック（RootConfig, ReloadOnLoadFailure, ConfigPublisher）
//! - **impls**: 実装（InMemoryRuntime, ImportMapLoader, RecordingNavigator, TokioTimer）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
