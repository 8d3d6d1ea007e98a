//! # Category Client
//!
//! Catalog lookups and checklist edits on the `Category` actor.
use crate::category_actor::{CategoryAction, CategoryActionResult, CategoryError};
use crate::model::{Category, CategoryCreate, CategoryUpdate};
use crate::validation::ValidationError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    /// Creates a category; a taken name is a validation error.
    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<String, CategoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn find(&self, name: &str) -> Result<Option<Category>, CategoryError> {
        self.get(name.to_string()).await
    }

    /// Replaces the default checklist.
    #[instrument(skip(self))]
    pub async fn set_tasks(
        &self,
        name: &str,
        tasks: Vec<String>,
    ) -> Result<Category, CategoryError> {
        self.inner
            .update(name.to_string(), CategoryUpdate { tasks })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add_task(&self, name: &str, text: &str) -> Result<(), CategoryError> {
        match self
            .inner
            .perform_action(name.to_string(), CategoryAction::AddTask(text.to_string()))
            .await
        {
            Ok(CategoryActionResult::AddTask(())) => Ok(()),
            Ok(other) => Err(CategoryError::Store(format!("unexpected result {other:?}"))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes the task at `index` and returns its text.
    #[instrument(skip(self))]
    pub async fn remove_task(&self, name: &str, index: usize) -> Result<String, CategoryError> {
        match self
            .inner
            .perform_action(name.to_string(), CategoryAction::RemoveTask(index))
            .await
        {
            Ok(CategoryActionResult::RemoveTask(text)) => Ok(text),
            Ok(other) => Err(CategoryError::Store(format!("unexpected result {other:?}"))),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(name) => CategoryError::NotFound(name),
            FrameworkError::AlreadyExists(name) => ValidationError::Duplicate {
                what: "Category",
                name,
            }
            .into(),
            other => other
                .into_entity_error()
                .unwrap_or_else(|e| CategoryError::Store(e.to_string())),
        }
    }
}
