//! Roster configuration document.
//!
//! The native document names the week, the roster, the task catalog and
//! the run settings. The older flat document (`users`, `tasks`,
//! `training_required`, `days_of_week`) is still accepted and converted.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Orientation;
use crate::error::{Result, RosterError};
use crate::models::{Person, Task, Week};
use crate::rules::{BandSelector, RotationGuard};
use crate::scheduler::{RosterRequest, RosterScheduler};
use crate::validation::{validate_request, ValidationError, ValidationErrorKind};

/// Parsed configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Ordered day labels. Defaults to Monday to Friday.
    #[serde(default)]
    pub week: Week,
    /// Roster of people.
    #[serde(default)]
    pub people: Vec<Person>,
    /// Task catalog in precedence order.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Candidate selection settings.
    #[serde(default)]
    pub selection: BandSelector,
    /// Rotation checks.
    #[serde(default)]
    pub rotation: RotationGuard,
    /// Prior-period handling.
    #[serde(default)]
    pub history: HistorySettings,
    /// Output layout.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Prior-period handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Start loads from the prior period's per-person counts.
    pub seed_load: bool,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { seed_load: true }
    }
}

/// Output layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Row orientation of the written table.
    pub orientation: Orientation,
}

#[derive(Debug, Deserialize)]
struct LegacyDocument {
    users: Vec<LegacyUser>,
    #[serde(default)]
    tasks: Vec<String>,
    #[serde(default)]
    training_required: HashMap<String, String>,
    #[serde(default)]
    days_of_week: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LegacyUser {
    name: String,
    #[serde(default)]
    training: HashMap<String, bool>,
    #[serde(default)]
    days_unavailable: Vec<String>,
}

impl From<LegacyDocument> for RosterConfig {
    fn from(doc: LegacyDocument) -> Self {
        let people = doc
            .users
            .into_iter()
            .map(|u| Person {
                name: u.name,
                skills: u
                    .training
                    .into_iter()
                    .filter_map(|(skill, held)| held.then_some(skill))
                    .collect(),
                unavailable: u.days_unavailable.into_iter().collect(),
                max_load: None,
            })
            .collect();

        let tasks = doc
            .tasks
            .into_iter()
            .map(|name| {
                let task = Task::new(name.clone());
                match doc.training_required.get(&name) {
                    Some(skill) if !skill.is_empty() => task.requiring(skill.clone()),
                    _ => task,
                }
            })
            .collect();

        let week = if doc.days_of_week.is_empty() {
            Week::default()
        } else {
            Week::new(doc.days_of_week)
        };

        Self {
            week,
            people,
            tasks,
            selection: BandSelector::default(),
            rotation: RotationGuard::default(),
            history: HistorySettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl RosterConfig {
    /// Parses a configuration document, native or legacy.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if value.get("users").is_some() {
            debug!("reading legacy configuration layout");
            let legacy: LegacyDocument = serde_json::from_value(value)?;
            Ok(legacy.into())
        } else {
            serde_json::from_value(value)
        }
    }

    /// Rostering request described by this document.
    pub fn request(&self) -> RosterRequest {
        RosterRequest::new(self.week.clone(), self.people.clone(), self.tasks.clone())
    }

    /// Scheduler configured by this document.
    pub fn scheduler(&self) -> RosterScheduler {
        RosterScheduler::new()
            .with_selector(self.selection)
            .with_rotation(self.rotation)
            .with_history_seeding(self.history.seed_load)
    }

    /// Checks the run settings and the request together.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let ratio = self.selection.band_ratio;
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSetting,
                format!("selection.band_ratio must be within 0.0..=1.0, got {ratio}"),
            ));
        }

        if let Err(mut request_errors) = validate_request(&self.request()) {
            errors.append(&mut request_errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Reads, parses and validates a configuration file.
///
/// Every failure here is fatal: nothing is scheduled from a configuration
/// that cannot be read or does not describe a consistent roster.
pub fn load_config(path: &Path) -> Result<RosterConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| RosterError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = RosterConfig::from_json_str(&text).map_err(|source| RosterError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate().map_err(RosterError::Invalid)?;

    debug!(
        path = %path.display(),
        days = config.week.len(),
        people = config.people.len(),
        tasks = config.tasks.len(),
        "configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskRule;
    use serde_json::json;

    #[test]
    fn test_native_document() {
        let doc = json!({
            "week": ["Mon", "Tue"],
            "people": [
                {"name": "Alice", "skills": ["X"], "unavailable": ["Tue"], "max_load": 3},
                {"name": "Bob"}
            ],
            "tasks": [
                {"name": "Clean", "requires": ["X"], "days": ["Mon"]},
                {"name": "Open", "rule": "paired-with:Close"},
                {"name": "Close"}
            ],
            "selection": {"band_ratio": 0.5},
            "rotation": {"consecutive_days": false},
            "output": {"orientation": "task-rows"}
        });
        let config = RosterConfig::from_json_str(&doc.to_string()).unwrap();

        assert_eq!(config.week.days(), ["Mon", "Tue"]);
        assert_eq!(config.people[0].max_load, Some(3));
        assert!(config.people[1].skills.is_empty());
        assert_eq!(config.tasks[1].rule, TaskRule::PairedWith("Close".into()));
        assert!((config.selection.band_ratio - 0.5).abs() < 1e-10);
        assert!(config.rotation.across_periods);
        assert!(!config.rotation.consecutive_days);
        assert!(config.history.seed_load);
        assert_eq!(config.output.orientation, Orientation::TaskRows);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = RosterConfig::from_json_str("{}").unwrap();
        assert_eq!(config.week, Week::work_week());
        assert!((config.selection.band_ratio - 0.3).abs() < 1e-10);
        assert_eq!(config.rotation, RotationGuard::new());
        assert_eq!(config.output.orientation, Orientation::DayRows);
    }

    #[test]
    fn test_legacy_document() {
        let doc = json!({
            "users": [
                {"name": "Alice", "training": {"forklift": true, "ladder": false},
                 "days_unavailable": ["Friday"]},
                {"name": "Bob", "training": {}, "days_unavailable": []}
            ],
            "tasks": ["Forklift", "Sweep"],
            "training_required": {"Forklift": "forklift", "Sweep": ""},
            "days_of_week": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        });
        let config = RosterConfig::from_json_str(&doc.to_string()).unwrap();

        let alice = &config.people[0];
        assert!(alice.has_skill("forklift"));
        assert!(!alice.has_skill("ladder"));
        assert!(!alice.is_available_on("Friday"));
        assert!(config.tasks[0].requires.contains("forklift"));
        assert!(config.tasks[1].requires.is_empty());
        assert!(config.tasks.iter().all(|t| t.days.is_empty()));
        assert_eq!(config.week.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_settings_and_request() {
        let doc = json!({
            "week": ["Mon"],
            "tasks": [{"name": "T", "days": ["Sun"]}],
            "selection": {"band_ratio": 1.5}
        });
        let config = RosterConfig::from_json_str(&doc.to_string()).unwrap();
        let errors = config.validate().unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::InvalidSetting,
                ValidationErrorKind::UnknownDay
            ]
        );
    }

    #[test]
    fn test_malformed_document() {
        assert!(RosterConfig::from_json_str("{ not json").is_err());
        assert!(RosterConfig::from_json_str(r#"{"tasks": [{"rule": "none"}]}"#).is_err());
    }

    #[test]
    fn test_load_config_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        let err = load_config(&missing).unwrap_err();
        assert!(matches!(err, RosterError::ConfigRead { .. }));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "[1, 2").unwrap();
        let err = load_config(&broken).unwrap_err();
        assert!(matches!(err, RosterError::ConfigParse { .. }));

        let invalid = dir.path().join("invalid.json");
        std::fs::write(&invalid, r#"{"week": []}"#).unwrap();
        let err = load_config(&invalid).unwrap_err();
        assert!(matches!(err, RosterError::Invalid(_)));
    }
}
