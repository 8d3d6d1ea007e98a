//! Custom actions for the Category actor.

/// Edits to a category's default checklist. Existing orders are not affected.
#[derive(Debug, Clone)]
pub enum CategoryAction {
    /// Appends a task to the end of the checklist.
    AddTask(String),
    /// Removes the task at the given position.
    RemoveTask(usize),
}

/// Results from CategoryActions - variants match 1:1 with CategoryAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryActionResult {
    AddTask(()),
    /// The text of the removed task.
    RemoveTask(String),
}
