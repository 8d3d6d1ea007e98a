//! [`ActorEntity`] implementation for [`Category`].

use super::{CategoryAction, CategoryActionResult, CategoryError};
use crate::model::{Category, CategoryCreate, CategoryUpdate};
use crate::validation;
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Category {
    type Id = String;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = CategoryAction;
    type ActionResult = CategoryActionResult;
    type Context = ();
    type Error = CategoryError;

    /// Categories are keyed by name, so a second category with the same name is
    /// rejected by the actor.
    fn assign_id(_seq: u32, params: &CategoryCreate) -> String {
        params.name.trim().to_string()
    }

    fn from_create_params(
        name: String,
        params: CategoryCreate,
        _ctx: &(),
    ) -> Result<Self, CategoryError> {
        validation::name("Category", &name)?;
        Ok(Self {
            name,
            tasks: validation::checklist(params.tasks),
        })
    }

    /// Replaces the checklist; blank entries are dropped.
    async fn on_update(&mut self, update: CategoryUpdate, _ctx: &()) -> Result<(), CategoryError> {
        self.tasks = validation::checklist(update.tasks);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CategoryAction,
        _ctx: &(),
    ) -> Result<CategoryActionResult, CategoryError> {
        match action {
            CategoryAction::AddTask(text) => {
                let text = text.trim();
                validation::name("Task", text)?;
                self.tasks.push(text.to_string());
                Ok(CategoryActionResult::AddTask(()))
            }
            CategoryAction::RemoveTask(index) => {
                if index >= self.tasks.len() {
                    return Err(CategoryError::TaskNotFound {
                        index,
                        len: self.tasks.len(),
                    });
                }
                Ok(CategoryActionResult::RemoveTask(self.tasks.remove(index)))
            }
        }
    }
}
