//! RootConfig - 子アプリの登録とランタイム起動
//!
//! # 学習ポイント
//! - グローバル状態ではなく、注入されたランタイムへの一回きりの呼び出しとして登録する
//! - Fire-and-forget: start() の完了もロードの完了も待たない

use super::error_handler::ReloadOnLoadFailure;
use crate::domain::{ActivityPredicate, LazyModule, Registration, RegistrationError};
use crate::ports::{ModuleLoader, Navigator, OrchestrationRuntime, Timer};
use std::sync::Arc;
use tracing::info;

/// 登録するアプリ名
pub const APP_NAME: &str = "apm";

/// アプリのモジュール specifier
pub const APP_SPECIFIER: &str = "@portal/apm";

/// RootConfig はページロード時に一度だけ実行される root 設定
///
/// # 使用例
/// ```ignore
/// let runtime = InMemoryRuntime::new();
/// RootConfig::new(loader, navigator, timer).bootstrap(&runtime)?;
/// ```
pub struct RootConfig {
    loader: Arc<dyn ModuleLoader>,
    navigator: Arc<dyn Navigator>,
    timer: Arc<dyn Timer>,
}

impl RootConfig {
    pub fn new(
        loader: Arc<dyn ModuleLoader>,
        navigator: Arc<dyn Navigator>,
        timer: Arc<dyn Timer>,
    ) -> Self {
        Self {
            loader,
            navigator,
            timer,
        }
    }

    /// `apm` を登録し、エラーハンドラを入れ、ランタイムを開始する
    ///
    /// # 順序
    /// 1. register_application（失敗したら何も変更しない）
    /// 2. ReloadOnLoadFailure を add_error_handler
    /// 3. start
    ///
    /// ロードは start 後にしか起きないので、ハンドラは最初のエラーより先に入ります。
    pub fn bootstrap<R>(self, runtime: &R) -> Result<(), RegistrationError>
    where
        R: OrchestrationRuntime + ?Sized,
    {
        let registration = Registration::new(
            APP_NAME,
            LazyModule::new(self.loader, APP_SPECIFIER),
            ActivityPredicate::always(),
        );
        runtime.register_application(registration)?;

        let handler = ReloadOnLoadFailure::new(APP_NAME, self.navigator, self.timer);
        runtime.add_error_handler(Arc::new(handler));
        runtime.start();

        info!(app = APP_NAME, specifier = APP_SPECIFIER, "root config registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;
    use crate::impls::{ImportMapLoader, InMemoryRuntime, RecordingNavigator, TokioTimer};
    use std::time::Duration;

    fn root_config(loader: ImportMapLoader, navigator: Arc<RecordingNavigator>) -> RootConfig {
        let timer = TokioTimer::current().unwrap();
        RootConfig::new(Arc::new(loader), navigator, Arc::new(timer))
    }

    #[tokio::test]
    async fn bootstrap_registers_apm_and_starts() {
        let runtime = InMemoryRuntime::new();
        let loader = ImportMapLoader::new().with_import(APP_SPECIFIER, "/apm/main.js");
        let navigator = Arc::new(RecordingNavigator::new("https://portal.example.com/"));

        root_config(loader, navigator).bootstrap(&runtime).unwrap();

        assert!(runtime.is_started());
        assert_eq!(runtime.application_names(), vec![APP_NAME.to_string()]);
        assert_eq!(runtime.error_handler_count(), 1);
        assert_eq!(runtime.is_active(APP_NAME, &Location::default()), Some(true));

        let modules = runtime
            .reroute(&Location::parse("https://portal.example.com/anything"))
            .await
            .unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].specifier, APP_SPECIFIER);
    }

    #[tokio::test]
    async fn bootstrap_twice_fails_without_restarting() {
        let runtime = InMemoryRuntime::new();
        let navigator = Arc::new(RecordingNavigator::new("https://portal.example.com/"));

        root_config(ImportMapLoader::new(), navigator.clone())
            .bootstrap(&runtime)
            .unwrap();
        let result = root_config(ImportMapLoader::new(), navigator).bootstrap(&runtime);

        assert!(matches!(result, Err(RegistrationError::DuplicateApplication(_))));
        assert_eq!(runtime.application_names().len(), 1);
        assert_eq!(runtime.error_handler_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_bootstrap_does_not_add_a_second_reload() {
        let runtime = InMemoryRuntime::new();
        let navigator = Arc::new(RecordingNavigator::new("https://portal.example.com/apm#/x"));

        root_config(ImportMapLoader::new(), navigator.clone())
            .bootstrap(&runtime)
            .unwrap();
        assert!(
            root_config(ImportMapLoader::new(), navigator.clone())
                .bootstrap(&runtime)
                .is_err()
        );

        runtime
            .reroute(&Location::parse("https://portal.example.com/apm#/x"))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(3100)).await;
        tokio::task::yield_now().await;

        assert_eq!(
            navigator.assignments(),
            vec!["https://portal.example.com/apm".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn load_failure_reloads_page_without_hash() {
        let runtime = InMemoryRuntime::new();
        // import map に @portal/apm がない → LOADING_SOURCE_CODE で失敗する
        let navigator = Arc::new(RecordingNavigator::new(
            "https://portal.example.com/apm#/jobs/7",
        ));
        root_config(ImportMapLoader::new(), navigator.clone())
            .bootstrap(&runtime)
            .unwrap();

        let result = runtime
            .reroute(&Location::parse("https://portal.example.com/apm#/jobs/7"))
            .await;
        assert!(result.is_ok());
        assert!(navigator.assignments().is_empty());

        tokio::time::sleep(Duration::from_millis(3001)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            navigator.assignments(),
            vec!["https://portal.example.com/apm".to_string()]
        );
    }
}
