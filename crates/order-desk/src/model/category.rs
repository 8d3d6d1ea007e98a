//! Order categories: a type name and the checklist new orders of that type start with.

use serde::{Deserialize, Serialize};

/// A category keyed by its name.
///
/// Orders copy the task list when they are created, so editing a category never
/// changes existing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl Category {
    pub fn new<I, S>(name: impl Into<String>, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tasks: tasks.into_iter().map(Into::into).collect(),
        }
    }
}

/// Payload for creating a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryCreate {
    pub name: String,
    pub tasks: Vec<String>,
}

/// Replaces the default task list of a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub tasks: Vec<String>,
}
