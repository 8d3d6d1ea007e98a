//! [`ActorEntity`] implementation for [`Department`].

use super::{DepartmentAction, DepartmentActionResult, DepartmentError};
use crate::model::{Agent, Department, DepartmentCreate, DepartmentUpdate};
use crate::validation::{self, ValidationError};
use async_trait::async_trait;
use resource_actor::ActorEntity;

impl Department {
    fn agent_mut(&mut self, name: &str) -> Result<&mut Agent, DepartmentError> {
        let department = self.name.clone();
        self.agents
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| DepartmentError::AgentNotFound {
                department,
                agent: name.to_string(),
            })
    }
}

#[async_trait]
impl ActorEntity for Department {
    type Id = String;
    type Create = DepartmentCreate;
    type Update = DepartmentUpdate;
    type Action = DepartmentAction;
    type ActionResult = DepartmentActionResult;
    type Context = ();
    type Error = DepartmentError;

    /// Keyed by name; the actor rejects a second department with the same name.
    fn assign_id(_seq: u32, params: &DepartmentCreate) -> String {
        params.name.trim().to_string()
    }

    fn from_create_params(
        name: String,
        params: DepartmentCreate,
        _ctx: &(),
    ) -> Result<Self, DepartmentError> {
        validation::name("Department", &name)?;
        Ok(Self {
            name,
            agents: validation::roster(params.agents)?,
        })
    }

    async fn on_update(
        &mut self,
        update: DepartmentUpdate,
        _ctx: &(),
    ) -> Result<(), DepartmentError> {
        self.agents = validation::roster(update.agents)?;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DepartmentAction,
        _ctx: &(),
    ) -> Result<DepartmentActionResult, DepartmentError> {
        match action {
            DepartmentAction::AddAgent(mut agent) => {
                agent.name = agent.name.trim().to_string();
                validation::name("Agent", &agent.name)?;
                if self.has_agent(&agent.name) {
                    return Err(ValidationError::Duplicate {
                        what: "Agent",
                        name: agent.name,
                    }
                    .into());
                }
                self.agents.push(agent);
                Ok(DepartmentActionResult::AddAgent(()))
            }
            DepartmentAction::UpdateAgent { name, update } => {
                let agent = self.agent_mut(name.trim())?;
                if let Some(email) = update.email {
                    agent.email = Some(email).filter(|e| !e.is_empty());
                }
                if let Some(extension) = update.extension {
                    agent.extension = Some(extension).filter(|e| !e.is_empty());
                }
                Ok(DepartmentActionResult::UpdateAgent(agent.clone()))
            }
            DepartmentAction::RemoveAgent(name) => {
                let name = name.trim();
                let index = self
                    .agents
                    .iter()
                    .position(|a| a.name == name)
                    .ok_or_else(|| DepartmentError::AgentNotFound {
                        department: self.name.clone(),
                        agent: name.to_string(),
                    })?;
                Ok(DepartmentActionResult::RemoveAgent(self.agents.remove(index)))
            }
        }
    }
}
