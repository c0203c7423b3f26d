//! InMemoryRuntime - 開発用のオーケストレーションランタイム
//!
//! 本物のランタイム（マウント/アンマウントの状態機械）の代わりに、
//! root config の配線を検証するための最小限の実装です。
//!
//! # 学習ポイント
//! - `&self` の trait を Mutex で実装する（内部可変性）
//! - await をまたいでロックを保持しない

use crate::domain::{AppError, LoadedModule, Location, Registration, RegistrationError};
use crate::ports::{ErrorHandler, OrchestrationRuntime};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

#[derive(Default)]
struct RuntimeState {
    handlers: Vec<Arc<dyn ErrorHandler>>,
    applications: Vec<Registration>,
    loaded: HashSet<String>,
    started: bool,
}

/// InMemoryRuntime は登録内容を保持し、reroute でロードを試みる
///
/// # 動作
/// - `reroute(location)`: 開始済みなら、アクティブで未ロードのアプリをロード
/// - ロード失敗は `LOADING_SOURCE_CODE` のエラーとしてハンドラへ配送
/// - ハンドラがなければエラーはそのまま返る
#[derive(Default)]
pub struct InMemoryRuntime {
    state: Mutex<RuntimeState>,
}

impl InMemoryRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.lock().started
    }

    pub fn application_names(&self) -> Vec<String> {
        self.lock()
            .applications
            .iter()
            .map(|app| app.name.clone())
            .collect()
    }

    pub fn error_handler_count(&self) -> usize {
        self.lock().handlers.len()
    }

    /// 登録済みアプリが location でアクティブか。未登録なら None
    pub fn is_active(&self, name: &str, location: &Location) -> Option<bool> {
        self.lock()
            .applications
            .iter()
            .find(|app| app.name == name)
            .map(|app| app.activity.is_active(location))
    }

    /// エラーを登録順にハンドラへ配送する
    ///
    /// いずれかのハンドラが再送出したら、そのエラーを返します。
    pub fn dispatch_error(&self, error: AppError) -> Result<(), AppError> {
        let handlers = self.lock().handlers.clone();
        if handlers.is_empty() {
            return Err(error);
        }
        for handler in handlers {
            handler.handle(error.clone())?;
        }
        Ok(())
    }

    /// location に対してアクティブなアプリをロードする
    pub async fn reroute(&self, location: &Location) -> Result<Vec<LoadedModule>, AppError> {
        let pending: Vec<Registration> = {
            let state = self.lock();
            if !state.started {
                return Ok(Vec::new());
            }
            state
                .applications
                .iter()
                .filter(|app| !state.loaded.contains(&app.name))
                .filter(|app| app.activity.is_active(location))
                .cloned()
                .collect()
        };

        let mut modules = Vec::with_capacity(pending.len());
        for app in pending {
            match app.loader.load().await {
                Ok(module) => {
                    debug!(app = %app.name, url = %module.url, "application loaded");
                    self.lock().loaded.insert(app.name.clone());
                    modules.push(module);
                }
                Err(err) => {
                    let message = format!(
                        "application '{}' died in status LOADING_SOURCE_CODE: {}",
                        app.name, err
                    );
                    self.dispatch_error(AppError::new(app.name, message))?;
                }
            }
        }
        Ok(modules)
    }

    fn lock(&self) -> MutexGuard<'_, RuntimeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OrchestrationRuntime for InMemoryRuntime {
    fn add_error_handler(&self, handler: Arc<dyn ErrorHandler>) {
        self.lock().handlers.push(handler);
    }

    fn register_application(&self, registration: Registration) -> Result<(), RegistrationError> {
        let mut state = self.lock();
        if state
            .applications
            .iter()
            .any(|app| app.name == registration.name)
        {
            return Err(RegistrationError::DuplicateApplication(registration.name));
        }
        debug!(app = %registration.name, specifier = registration.loader.specifier(), "application registered");
        state.applications.push(registration);
        Ok(())
    }

    fn start(&self) {
        self.lock().started = true;
        info!("runtime started");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActivityPredicate, LazyModule};
    use crate::impls::ImportMapLoader;

    fn registration(name: &str, loader: ImportMapLoader, activity: ActivityPredicate) -> Registration {
        Registration::new(
            name,
            LazyModule::new(Arc::new(loader), format!("@portal/{name}")),
            activity,
        )
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let runtime = InMemoryRuntime::new();
        runtime
            .register_application(registration("apm", ImportMapLoader::new(), ActivityPredicate::always()))
            .unwrap();
        let result = runtime.register_application(registration(
            "apm",
            ImportMapLoader::new(),
            ActivityPredicate::always(),
        ));
        assert!(matches!(result, Err(RegistrationError::DuplicateApplication(name)) if name == "apm"));
        assert_eq!(runtime.application_names(), vec!["apm".to_string()]);
    }

    #[test]
    fn dispatch_without_handlers_reraises() {
        let runtime = InMemoryRuntime::new();
        let event = AppError::new("apm", "boom");
        assert_eq!(runtime.dispatch_error(event.clone()), Err(event));
    }

    #[test]
    fn dispatch_stops_at_first_reraise() {
        let runtime = InMemoryRuntime::new();
        runtime.add_error_handler(Arc::new(|_: AppError| -> Result<(), AppError> { Ok(()) }));
        runtime.add_error_handler(Arc::new(|error: AppError| -> Result<(), AppError> { Err(error) }));

        let event = AppError::new("apm", "boom");
        assert_eq!(runtime.dispatch_error(event.clone()), Err(event));
    }

    #[tokio::test]
    async fn reroute_before_start_loads_nothing() {
        let runtime = InMemoryRuntime::new();
        let loader = ImportMapLoader::new().with_import("@portal/apm", "/apm/main.js");
        runtime
            .register_application(registration("apm", loader, ActivityPredicate::always()))
            .unwrap();

        let modules = runtime.reroute(&Location::parse("https://portal.example.com/")).await.unwrap();
        assert!(modules.is_empty());
    }

    #[tokio::test]
    async fn reroute_loads_active_applications_once() {
        let runtime = InMemoryRuntime::new();
        let loader = ImportMapLoader::new()
            .with_import("@portal/apm", "/apm/main.js")
            .with_import("@portal/admin", "/admin/main.js");
        runtime
            .register_application(registration("apm", loader.clone(), ActivityPredicate::prefixed(["apm"])))
            .unwrap();
        runtime
            .register_application(registration("admin", loader, ActivityPredicate::prefixed(["admin"])))
            .unwrap();
        runtime.start();

        let location = Location::parse("https://portal.example.com/apm/jobs");
        assert_eq!(runtime.is_active("apm", &location), Some(true));
        assert_eq!(runtime.is_active("admin", &location), Some(false));
        assert_eq!(runtime.is_active("comments", &location), None);

        let modules = runtime.reroute(&location).await.unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].url, "/apm/main.js");

        let again = runtime.reroute(&location).await.unwrap();
        assert!(again.is_empty());
    }

    #[tokio::test]
    async fn load_failure_is_reported_as_loading_source_code() {
        let runtime = InMemoryRuntime::new();
        runtime
            .register_application(registration("apm", ImportMapLoader::new(), ActivityPredicate::always()))
            .unwrap();
        runtime.start();

        let error = runtime
            .reroute(&Location::parse("https://portal.example.com/"))
            .await
            .unwrap_err();
        assert_eq!(error.app_or_parcel_name, "apm");
        assert!(error.message.contains("died in status LOADING_SOURCE_CODE"));
    }
}
