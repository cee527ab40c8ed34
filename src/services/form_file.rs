//! Form document backed by a TOML file and command-line overrides.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::FormDocument;

/// Control name → value table standing in for the timetable form.
///
/// Keys that do not name a timetable control are kept but never read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFile {
    controls: BTreeMap<String, String>,
}

impl FormFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a form from a TOML file of `name = value` pairs.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("Failed to read form file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse a form from TOML. Scalar values are kept as text.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let table: toml::Table = toml::from_str(content)?;
        let mut form = Self::new();
        for (name, value) in table {
            let text = match value {
                toml::Value::String(text) => text,
                toml::Value::Integer(number) => number.to_string(),
                toml::Value::Float(number) => number.to_string(),
                toml::Value::Boolean(flag) => flag.to_string(),
                other => {
                    return Err(AppError::ParseError {
                        what: format!("form control '{}'", name),
                        details: format!("expected a scalar value, found {}", other.type_str()),
                    });
                }
            };
            form.controls.insert(name, text);
        }
        Ok(form)
    }

    /// Set a control value, creating the control when absent.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.controls.insert(name.into(), value.into());
    }

    /// Remove a control from the document.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.controls.remove(name)
    }

    /// Apply a `name=value` override. The value may be empty; the name may not.
    pub fn apply_override(&mut self, assignment: &str) -> Result<(), AppError> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| AppError::InvalidFormValue(assignment.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidFormValue(assignment.to_string()));
        }
        self.set(name, value);
        Ok(())
    }
}

impl FormDocument for FormFile {
    fn has_control(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }

    fn control_value(&self, name: &str) -> Option<String> {
        self.controls.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scalars_are_read_as_text() {
        let form = FormFile::from_toml_str(
            r#"
"timetable-name" = "T1"
morningPeriods = 4
special = true
"#,
        )
        .unwrap();

        assert_eq!(form.control_value("timetable-name").as_deref(), Some("T1"));
        assert_eq!(form.control_value("morningPeriods").as_deref(), Some("4"));
        assert_eq!(form.control_value("special").as_deref(), Some("true"));
        assert!(!form.has_control("subject"));
    }

    #[test]
    fn nested_values_are_rejected() {
        let result = FormFile::from_toml_str("subject = [\"Math\"]\n");
        assert!(matches!(result, Err(AppError::ParseError { .. })));
    }

    #[test]
    fn overrides_replace_and_add_controls() {
        let mut form = FormFile::from_toml_str("teacher = \"Alice\"\n").unwrap();
        form.apply_override("teacher=Bob").unwrap();
        form.apply_override("classroom=").unwrap();
        form.apply_override("time=08:00=09:00").unwrap();

        assert_eq!(form.control_value("teacher").as_deref(), Some("Bob"));
        assert_eq!(form.control_value("classroom").as_deref(), Some(""));
        assert_eq!(form.control_value("time").as_deref(), Some("08:00=09:00"));
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        let mut form = FormFile::new();
        assert!(matches!(form.apply_override("teacher"), Err(AppError::InvalidFormValue(_))));
        assert!(matches!(form.apply_override("=Bob"), Err(AppError::InvalidFormValue(_))));
    }

    #[test]
    fn load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("form.toml");
        std::fs::write(&path, "subject = \"Math\"\n").unwrap();

        let form = FormFile::load(&path).unwrap();
        assert_eq!(form.control_value("subject").as_deref(), Some("Math"));
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(FormFile::load(&dir.path().join("absent.toml")).is_err());
    }
}
