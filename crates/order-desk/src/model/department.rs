//! Departments and the agents working in them.

use serde::{Deserialize, Serialize};

/// Contact card for an agent.
///
/// Order counters are not stored here; they are replayed from the assignment
/// ledger, see [`crate::stats::agent_stats`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl Agent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            extension: None,
        }
    }
}

/// A named group of agents. Department names are globally unique and serve as the
/// key; agent names are unique within one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    #[serde(default)]
    pub agents: Vec<Agent>,
}

impl Department {
    pub fn agent(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.name == name)
    }

    pub fn has_agent(&self, name: &str) -> bool {
        self.agent(name).is_some()
    }
}

/// Payload for creating a department, optionally with its initial roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentCreate {
    pub name: String,
    #[serde(default)]
    pub agents: Vec<Agent>,
}

/// Replaces the whole roster of a department.
#[derive(Debug, Clone, Default)]
pub struct DepartmentUpdate {
    pub agents: Vec<Agent>,
}

/// Contact fields to change on an agent; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct AgentUpdate {
    pub email: Option<String>,
    pub extension: Option<String>,
}
