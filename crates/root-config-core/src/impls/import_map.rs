//! ImportMapLoader - import map による ModuleLoader
//!
//! ホストページの import map（`@portal/apm` → バンドル URL）と同じ解決規則です。
//! 実際のコード実行はしません。解決できたら LoadedModule を返すだけです。

use crate::domain::{LoadError, LoadedModule};
use crate::ports::ModuleLoader;
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ImportMapLoader {
    imports: HashMap<String, String>,
}

impl ImportMapLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_import(mut self, specifier: impl Into<String>, url: impl Into<String>) -> Self {
        self.imports.insert(specifier.into(), url.into());
        self
    }

    pub fn resolve(&self, specifier: &str) -> Option<&str> {
        self.imports.get(specifier).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for ImportMapLoader
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            imports: iter
                .into_iter()
                .map(|(specifier, url)| (specifier.into(), url.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl ModuleLoader for ImportMapLoader {
    async fn import(&self, specifier: &str) -> Result<LoadedModule, LoadError> {
        match self.resolve(specifier) {
            Some(url) => Ok(LoadedModule {
                specifier: specifier.to_string(),
                url: url.to_string(),
            }),
            None => Err(LoadError::Unresolved(specifier.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_known_specifier() {
        let loader = ImportMapLoader::new().with_import("@portal/apm", "/apm/main.js");
        let module = loader.import("@portal/apm").await.unwrap();
        assert_eq!(module.specifier, "@portal/apm");
        assert_eq!(module.url, "/apm/main.js");
    }

    #[tokio::test]
    async fn unknown_specifier_is_unresolved() {
        let loader: ImportMapLoader = [("@portal/admin", "/admin/main.js")].into_iter().collect();
        let result = loader.import("@portal/apm").await;
        assert_eq!(result, Err(LoadError::Unresolved("@portal/apm".to_string())));
    }
}
