use async_trait::async_trait;

use crate::error::{ModuleListError, ProviderError};
use crate::platform::ModuleRegistry;
use crate::report::models::ModuleInfo;

/// Module registry backed by a static list.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredModules {
    modules: Vec<ModuleInfo>,
}

impl ConfiguredModules {
    pub fn new(modules: Vec<ModuleInfo>) -> Self {
        Self { modules }
    }

    /// Parses `name=v1|v2;other=v1`. An empty string yields a single
    /// `fallback_module` running `fallback_version`.
    pub fn parse(raw: &str, fallback_module: &str, fallback_version: &str) -> Result<Self, ModuleListError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::new(vec![ModuleInfo {
                name: fallback_module.to_string(),
                versions: vec![fallback_version.to_string()],
            }]));
        }

        let mut modules: Vec<ModuleInfo> = Vec::new();
        for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, versions) = entry
                .split_once('=')
                .ok_or_else(|| ModuleListError::Malformed(entry.to_string()))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(ModuleListError::MissingName(entry.to_string()));
            }
            if modules.iter().any(|m| m.name == name) {
                return Err(ModuleListError::Duplicate(name.to_string()));
            }
            let versions: Vec<String> = versions
                .split('|')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
                .collect();
            if versions.is_empty() {
                return Err(ModuleListError::NoVersions(name.to_string()));
            }
            modules.push(ModuleInfo { name: name.to_string(), versions });
        }
        Ok(Self::new(modules))
    }
}

#[async_trait]
impl ModuleRegistry for ConfiguredModules {
    async fn list(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.modules.iter().map(|m| m.name.clone()).collect())
    }

    async fn versions(&self, module: &str) -> Result<Vec<String>, ProviderError> {
        self.modules
            .iter()
            .find(|m| m.name == module)
            .map(|m| m.versions.clone())
            .ok_or_else(|| ProviderError::NotFound(format!("module '{}' not found", module)))
    }
}
