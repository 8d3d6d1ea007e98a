//! Roster actions for the Department actor.

use crate::model::{Agent, AgentUpdate};

#[derive(Debug, Clone)]
pub enum DepartmentAction {
    /// Adds an agent; the name must be unique within the department.
    AddAgent(Agent),
    /// Changes an agent's contact fields.
    UpdateAgent { name: String, update: AgentUpdate },
    /// Removes an agent. Orders already assigned to them keep the assignee name.
    RemoveAgent(String),
}

/// Results from DepartmentActions - variants match 1:1 with DepartmentAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentActionResult {
    AddAgent(()),
    /// The agent after the update.
    UpdateAgent(Agent),
    /// The agent that was removed.
    RemoveAgent(Agent),
}
