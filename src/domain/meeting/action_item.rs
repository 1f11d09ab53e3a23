//! Action item entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

use super::MeetingId;

/// Unique identifier for an action item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionItemId(String);

impl ActionItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActionItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ActionItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An action item belonging to a Meeting aggregate. Entities are compared by
/// identity, not by attribute values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    id: ActionItemId,
    meeting_id: MeetingId,
    owner: String,
    text: String,
    due_date: Option<DateTime<Utc>>,
    completed: bool,
}

impl ActionItem {
    pub fn new(
        id: ActionItemId,
        meeting_id: MeetingId,
        owner: impl Into<String>,
        text: impl Into<String>,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        let text = text.into();

        if id.as_str().is_empty() {
            return Err(DomainError::validation("action item id must not be empty"));
        }
        if text.is_empty() {
            return Err(DomainError::validation(
                "action item text must not be empty",
            ));
        }

        Ok(Self {
            id,
            meeting_id,
            owner: owner.into(),
            text,
            due_date,
            completed: false,
        })
    }

    pub fn id(&self) -> &ActionItemId {
        &self.id
    }

    pub fn meeting_id(&self) -> &MeetingId {
        &self.meeting_id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the action item as done.
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_item_creation() {
        let item = ActionItem::new(
            ActionItemId::new("item-1"),
            MeetingId::new("mtg-1"),
            "Alice",
            "Follow up on the API migration",
            None,
        )
        .unwrap();

        assert_eq!(item.id().as_str(), "item-1");
        assert_eq!(item.owner(), "Alice");
        assert!(!item.is_completed());
    }

    #[test]
    fn test_empty_text_rejected() {
        let result = ActionItem::new(
            ActionItemId::new("item-1"),
            MeetingId::new("mtg-1"),
            "Alice",
            "",
            None,
        );
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = ActionItem::new(
            ActionItemId::new(""),
            MeetingId::new("mtg-1"),
            "Alice",
            "Do the thing",
            None,
        );
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_complete() {
        let mut item = ActionItem::new(
            ActionItemId::new("item-1"),
            MeetingId::new("mtg-1"),
            "Bob",
            "Ship the release notes",
            None,
        )
        .unwrap();

        item.complete();
        assert!(item.is_completed());
    }
}
