//! Desk configuration, loaded from TOML.
//!
//! ```toml
//! [store]
//! buffer_size = 64
//!
//! [reports]
//! past_due_days = 10
//!
//! [[categories]]
//! name = "SIP Trunk"
//! tasks = ["CSA Signed", "Customer Created"]
//!
//! [[departments]]
//! name = "Support"
//! agents = [{ name = "Dana", email = "dana@example.com" }]
//! ```
//!
//! Every section is optional. Leaving out `categories` keeps the four standard ones;
//! an explicit empty list starts with none.
//!
//! Seeded departments and categories get the same checks as ones created at run time:
//! names are trimmed and must be non-blank and unique, agent names must be unique
//! within their department, and blank checklist entries are dropped.

use crate::model::{Category, Department};
use crate::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(#[from] ValidationError),
    #[error("Invalid config: store.buffer_size must be at least 1")]
    ZeroBufferSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub reports: ReportConfig,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub departments: Vec<Department>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            reports: ReportConfig::default(),
            categories: default_categories(),
            departments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Request queue length of every actor, also the change backlog per subscriber.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Days after creation an open order counts as past due.
    #[serde(default = "default_past_due_days")]
    pub past_due_days: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            past_due_days: default_past_due_days(),
        }
    }
}

fn default_buffer_size() -> usize {
    32
}

fn default_past_due_days() -> u32 {
    7
}

const COMMON_TAIL: [&str; 4] = [
    "Subscriptions Added",
    "Discounts Added",
    "Welcome Email Sent",
    "One time charges Invoiced",
];

fn with_tail(head: &[&str]) -> Vec<String> {
    head.iter()
        .chain(COMMON_TAIL.iter())
        .chain(std::iter::once(&"Project Completed"))
        .map(|s| s.to_string())
        .collect()
}

/// The standard categories and their checklists.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category {
            name: "SIP Trunk".into(),
            tasks: with_tail(&[
                "CSA Signed",
                "Customer Created",
                "Account Created",
                "DID Provisioned",
            ]),
        },
        Category {
            name: "RO Cloud CPS".into(),
            tasks: with_tail(&[
                "CSA Signed",
                "Customer Created",
                "Accounts Created",
                "Inbound Routing Set",
                "Auto Attendant Set",
                "Phones Provisioned",
                "DID Provisioned",
            ]),
        },
        Category {
            name: "3CX Cloud/On Prem".into(),
            tasks: with_tail(&[
                "CSA Signed",
                "Customer Created",
                "Account Created",
                "DID Provisioned",
                "3CX Health & Performance Monitoring",
                "3CX License + Hosting",
                "Remote Phone System Configuration",
            ]),
        },
        Category::new(
            "One Time Order",
            [
                "Ticket Created",
                "Customer Added in QB",
                "Invoice sent",
                "Payment Received",
                "Project Completed",
            ],
        ),
    ]
}

impl DeskConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Parses and validates.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: DeskConfig = toml::from_str(raw)?;
        config.validated()
    }

    /// A normalised copy: names trimmed, blank tasks dropped. Fails on blank or
    /// duplicate names and on a zero buffer size.
    pub fn validated(&self) -> Result<Self, ConfigError> {
        if self.store.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }

        let mut departments = Vec::with_capacity(self.departments.len());
        let mut names = BTreeSet::new();
        for department in &self.departments {
            let name = unique_name("Department", &department.name, &mut names)?;
            departments.push(Department {
                name,
                agents: validation::roster(department.agents.clone())?,
            });
        }

        let mut categories = Vec::with_capacity(self.categories.len());
        let mut names = BTreeSet::new();
        for category in &self.categories {
            categories.push(Category {
                name: unique_name("Category", &category.name, &mut names)?,
                tasks: validation::checklist(category.tasks.clone()),
            });
        }

        Ok(Self {
            store: self.store.clone(),
            reports: self.reports.clone(),
            categories,
            departments,
        })
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

fn unique_name(
    what: &'static str,
    raw: &str,
    seen: &mut BTreeSet<String>,
) -> Result<String, ValidationError> {
    let name = raw.trim().to_string();
    validation::name(what, &name)?;
    if !seen.insert(name.clone()) {
        return Err(ValidationError::Duplicate { what, name });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = DeskConfig::from_toml("").unwrap();
        assert_eq!(config, DeskConfig::default());
        assert_eq!(config.store.buffer_size, 32);
        assert_eq!(config.reports.past_due_days, 7);
        let names: Vec<&str> = config.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["SIP Trunk", "RO Cloud CPS", "3CX Cloud/On Prem", "One Time Order"]);
    }

    #[test]
    fn standard_checklists_end_with_project_completed() {
        for category in default_categories() {
            assert_eq!(category.tasks.last().map(String::as_str), Some("Project Completed"));
        }
        assert_eq!(default_categories()[0].tasks.len(), 9);
        assert_eq!(default_categories()[1].tasks.len(), 12);
        assert_eq!(default_categories()[2].tasks.len(), 12);
    }

    #[test]
    fn sections_override_independently() {
        let config = DeskConfig::from_toml(
            r#"
            [reports]
            past_due_days = 10

            [[categories]]
            name = "Fax Line"
            tasks = ["Port Number"]

            [[departments]]
            name = "Support"
            agents = [{ name = "Dana", extension = "204" }]
            "#,
        )
        .unwrap();

        assert_eq!(config.store.buffer_size, 32);
        assert_eq!(config.reports.past_due_days, 10);
        assert_eq!(config.categories, [Category::new("Fax Line", ["Port Number"])]);
        assert_eq!(config.departments[0].agents[0].extension.as_deref(), Some("204"));
    }

    #[test]
    fn explicit_empty_category_list_is_kept() {
        let config = DeskConfig::from_toml("categories = []").unwrap();
        assert!(config.categories.is_empty());
    }

    #[test]
    fn seeded_rosters_are_validated() {
        let duplicate_agent = DeskConfig::from_toml(
            r#"
            [[departments]]
            name = "Support"
            agents = [{ name = "Dana" }, { name = "Dana " }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            duplicate_agent,
            ConfigError::Invalid(ValidationError::Duplicate { what: "Agent", .. })
        ));

        let blank_agent = DeskConfig::from_toml(
            r#"
            [[departments]]
            name = "Support"
            agents = [{ name = " " }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            blank_agent,
            ConfigError::Invalid(ValidationError::BlankName { what: "Agent" })
        ));

        let duplicate_department = DeskConfig::from_toml(
            r#"
            [[departments]]
            name = "Support"
            agents = [{ name = "Dana" }]

            [[departments]]
            name = " Support"
            agents = [{ name = "Fox" }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            duplicate_department,
            ConfigError::Invalid(ValidationError::Duplicate { what: "Department", .. })
        ));
    }

    #[test]
    fn seeded_categories_are_validated() {
        let blank = DeskConfig::from_toml("[[categories]]\nname = \"  \"\n").unwrap_err();
        assert!(matches!(
            blank,
            ConfigError::Invalid(ValidationError::BlankName { what: "Category" })
        ));

        let cleaned = DeskConfig::from_toml(
            r#"
            [[categories]]
            name = " Fax Line "
            tasks = ["Port Number", "  "]
            "#,
        )
        .unwrap();
        assert_eq!(cleaned.categories, [Category::new("Fax Line", ["Port Number"])]);
    }

    #[test]
    fn seeded_names_are_trimmed() {
        let config = DeskConfig::from_toml(
            r#"
            [[departments]]
            name = "Support "
            agents = [{ name = " Dana" }]
            "#,
        )
        .unwrap();
        assert_eq!(config.departments[0].name, "Support");
        assert_eq!(config.departments[0].agents[0].name, "Dana");
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let err = DeskConfig::from_toml("[store]\nbuffer_size = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBufferSize));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = DeskConfig::load(Path::new("/nonexistent/desk.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
