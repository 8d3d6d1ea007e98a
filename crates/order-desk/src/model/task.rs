use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One checklist entry on an order.
///
/// `completed_at` is set exactly when `completed` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl TaskItem {
    /// An incomplete task whose id is derived from its position in the list.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            id: format!("task-{index}"),
            text: text.into(),
            completed: false,
            completed_at: None,
        }
    }
}

/// Builds a fresh checklist, numbering tasks from zero in the given order.
pub fn numbered<I, S>(texts: I) -> Vec<TaskItem>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| TaskItem::new(index, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_list_position() {
        let tasks = numbered(["CSA Signed", "Customer Created"]);
        assert_eq!(tasks[0].id, "task-0");
        assert_eq!(tasks[1].id, "task-1");
        assert!(tasks.iter().all(|t| !t.completed && t.completed_at.is_none()));
    }
}
