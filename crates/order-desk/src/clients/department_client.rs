//! # Department Client
//!
//! Department CRUD and roster edits, plus the agent lookup the order actor relies on.
use crate::department_actor::{DepartmentAction, DepartmentActionResult, DepartmentError};
use crate::model::{Agent, AgentUpdate, Department, DepartmentCreate, DepartmentUpdate};
use crate::validation::ValidationError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct DepartmentClient {
    inner: ResourceClient<Department>,
}

impl DepartmentClient {
    pub fn new(inner: ResourceClient<Department>) -> Self {
        Self { inner }
    }

    /// Creates a department; a taken name is a validation error.
    #[instrument(skip(self))]
    pub async fn create_department(
        &self,
        params: DepartmentCreate,
    ) -> Result<String, DepartmentError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Finds the first department (in name order) whose roster has `name`, and the
    /// agent's card. Surrounding whitespace in `name` is ignored.
    #[instrument(skip(self))]
    pub async fn find_agent(
        &self,
        name: &str,
    ) -> Result<Option<(String, Agent)>, DepartmentError> {
        let name = name.trim();
        let departments = self.list().await?;
        Ok(departments.into_iter().find_map(|d| {
            let agent = d.agent(name).cloned()?;
            Some((d.name, agent))
        }))
    }

    /// Makes sure `agent` is on some roster. An agent already listed anywhere is left
    /// alone; otherwise it joins `department`, which is created when missing.
    #[instrument(skip(self))]
    pub async fn enlist(&self, department: &str, agent: Agent) -> Result<(), DepartmentError> {
        let department = department.trim();
        if self.find_agent(&agent.name).await?.is_some() {
            return Ok(());
        }
        if self.get(department.to_string()).await?.is_some() {
            return self.add_agent(department, agent).await;
        }
        self.create_department(DepartmentCreate {
            name: department.to_string(),
            agents: vec![agent],
        })
        .await?;
        info!(department, "Department created");
        Ok(())
    }

    /// Replaces a department's roster.
    #[instrument(skip(self))]
    pub async fn set_roster(
        &self,
        department: &str,
        agents: Vec<Agent>,
    ) -> Result<Department, DepartmentError> {
        self.inner
            .update(department.to_string(), DepartmentUpdate { agents })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add_agent(&self, department: &str, agent: Agent) -> Result<(), DepartmentError> {
        match self
            .inner
            .perform_action(department.to_string(), DepartmentAction::AddAgent(agent))
            .await
        {
            Ok(DepartmentActionResult::AddAgent(())) => Ok(()),
            Ok(other) => Err(DepartmentError::Store(format!("unexpected result {other:?}"))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_agent(
        &self,
        department: &str,
        name: &str,
        update: AgentUpdate,
    ) -> Result<Agent, DepartmentError> {
        let action = DepartmentAction::UpdateAgent {
            name: name.to_string(),
            update,
        };
        match self.inner.perform_action(department.to_string(), action).await {
            Ok(DepartmentActionResult::UpdateAgent(agent)) => Ok(agent),
            Ok(other) => Err(DepartmentError::Store(format!("unexpected result {other:?}"))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_agent(
        &self,
        department: &str,
        name: &str,
    ) -> Result<Agent, DepartmentError> {
        match self
            .inner
            .perform_action(department.to_string(), DepartmentAction::RemoveAgent(name.to_string()))
            .await
        {
            Ok(DepartmentActionResult::RemoveAgent(agent)) => Ok(agent),
            Ok(other) => Err(DepartmentError::Store(format!("unexpected result {other:?}"))),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Department> for DepartmentClient {
    type Error = DepartmentError;

    fn inner(&self) -> &ResourceClient<Department> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(name) => DepartmentError::NotFound(name),
            FrameworkError::AlreadyExists(name) => ValidationError::Duplicate {
                what: "Department",
                name,
            }
            .into(),
            other => other
                .into_entity_error()
                .unwrap_or_else(|e| DepartmentError::Store(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_action, MockClient};

    fn support() -> Department {
        Department {
            name: "Support".into(),
            agents: vec![Agent::new("Dana"), Agent::new("Fox")],
        }
    }

    #[tokio::test]
    async fn find_agent_searches_every_roster() {
        let mut mock = MockClient::<Department>::new();
        let billing = Department {
            name: "Billing".into(),
            agents: vec![Agent::new("Walter")],
        };
        mock.expect_list().return_ok(vec![billing, support()]);
        mock.expect_list().return_ok(vec![support()]);

        let client = DepartmentClient::new(mock.client());
        let (department, agent) = client.find_agent("Fox").await.unwrap().unwrap();
        assert_eq!(department, "Support");
        assert_eq!(agent.name, "Fox");

        assert!(client.find_agent("Walter").await.unwrap().is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn add_agent_sends_the_card() {
        let (client, mut receiver) = create_mock_client::<Department>(10);
        let departments = DepartmentClient::new(client);

        let task =
            tokio::spawn(async move { departments.add_agent("Support", Agent::new("Dana")).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "Support");
        match action {
            DepartmentAction::AddAgent(agent) => assert_eq!(agent.name, "Dana"),
            other => panic!("Expected AddAgent, got {other:?}"),
        }
        responder.send(Ok(DepartmentActionResult::AddAgent(()))).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn enlist_joins_an_existing_department() {
        let mut mock = MockClient::<Department>::new();
        mock.expect_list().return_ok(vec![support()]);
        mock.expect_get("Support".into()).return_ok(Some(support()));
        mock.expect_action("Support".into())
            .return_ok(DepartmentActionResult::AddAgent(()));

        let client = DepartmentClient::new(mock.client());
        client.enlist("Support", Agent::new("Bob")).await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn enlist_creates_a_missing_department_and_skips_listed_agents() {
        let mut mock = MockClient::<Department>::new();
        mock.expect_list().return_ok(vec![support()]);
        mock.expect_get("Provisioning".into()).return_ok(None);
        mock.expect_create().return_ok("Provisioning".into());
        mock.expect_list().return_ok(vec![support()]);

        let client = DepartmentClient::new(mock.client());
        client.enlist("Provisioning", Agent::new("Bob")).await.unwrap();
        // Already on the Support roster: no request beyond the lookup.
        client.enlist("Provisioning", Agent::new("Dana")).await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn set_roster_sends_an_update() {
        let mut mock = MockClient::<Department>::new();
        let mut renamed = support();
        renamed.agents.pop();
        mock.expect_update("Support".into()).return_ok(renamed.clone());
        mock.expect_update("Billing".into())
            .return_err(FrameworkError::NotFound("Billing".into()));

        let client = DepartmentClient::new(mock.client());
        let updated = client
            .set_roster("Support", vec![Agent::new("Dana")])
            .await
            .unwrap();
        assert_eq!(updated, renamed);
        assert_eq!(
            client.set_roster("Billing", vec![]).await,
            Err(DepartmentError::NotFound("Billing".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn duplicate_department_is_a_validation_error() {
        let mut mock = MockClient::<Department>::new();
        mock.expect_create()
            .return_err(FrameworkError::AlreadyExists("Support".into()));

        let client = DepartmentClient::new(mock.client());
        let err = client
            .create_department(DepartmentCreate {
                name: "Support".into(),
                agents: vec![],
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DepartmentError::Validation(ValidationError::Duplicate {
                what: "Department",
                name: "Support".into()
            })
        );
        mock.verify();
    }
}
