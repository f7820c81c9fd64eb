use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::ProjectSpec;

/// Variables handed to the render engine.
///
/// Values are JSON-shaped (strings, numbers, booleans, lists, nested maps) and
/// passed through untouched; the core never interprets template syntax.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    variables: BTreeMap<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The variable set every bundled template may rely on.
    ///
    /// | Variable | Example |
    /// |----------|---------|
    /// | `project_name` | `my-app` |
    /// | `package_name` | `my_app` |
    /// | `description` | `A classic Python project` |
    /// | `author` | `Jane Doe` |
    /// | `license` | `MIT` |
    /// | `license_spdx` | `MIT` |
    /// | `python_version` | `3.11` |
    /// | `project_type` | `classic` / `ml` / `dl` |
    /// | `framework` | `pytorch`, or `""` |
    /// | `use_env`, `use_config`, `use_tests` | booleans |
    /// | `dependencies` | list of requirement strings |
    /// | `year` | `2026` |
    /// | `viperx_version` | crate version |
    pub fn for_project(spec: &ProjectSpec, year: i32) -> Self {
        Self::new()
            .with_variable("project_name", spec.name())
            .with_variable("package_name", spec.package_name())
            .with_variable("description", spec.description())
            .with_variable("author", spec.author())
            .with_variable("license", spec.license().as_str())
            .with_variable("license_spdx", spec.license().spdx())
            .with_variable("python_version", spec.python_version())
            .with_variable("project_type", spec.kind().as_str())
            .with_variable(
                "framework",
                spec.framework().map(|f| f.as_str()).unwrap_or_default(),
            )
            .with_variable("use_env", spec.use_env())
            .with_variable("use_config", spec.use_config())
            .with_variable("use_tests", spec.use_tests())
            .with_variable("dependencies", spec.dependencies())
            .with_variable("year", year)
            .with_variable("viperx_version", crate::VERSION)
    }

    /// Add or replace a variable, consuming self.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.variables.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The whole context as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.variables
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}
