use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description cannot be empty")]
    EmptyDescription,
    #[error("Invalid created_at timestamp: {0}")]
    InvalidTimestamp(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    Completed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single todo item. Fields are private: the registry is the only
/// mutator, and `id`/`created_at` never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: u64,
    description: String,
    status: Status,
    created_at: DateTime<Utc>,
}

/// Flat export form of a task. `created_at` is RFC 3339 text so the
/// record round-trips through any key/value encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: u64,
    pub description: String,
    pub status: Status,
    pub created_at: String,
}

pub(crate) fn normalized_description(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

impl Task {
    pub fn new(id: u64, description: &str) -> Result<Self, ValidationError> {
        let description = normalized_description(description)?;
        Ok(Task {
            id,
            description,
            status: Status::Pending,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Mark the task as completed. Completing an already-completed task
    /// is a no-op, not an error.
    pub fn complete(&mut self) {
        self.status = Status::Completed;
    }

    pub(crate) fn replace_description(&mut self, normalized: String) {
        self.description = normalized;
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id,
            description: self.description.clone(),
            status: self.status,
            created_at: self.created_at.to_rfc3339(),
        }
    }

    pub fn from_record(record: &TaskRecord) -> Result<Self, ValidationError> {
        let description = normalized_description(&record.description)?;
        let created_at = DateTime::parse_from_rfc3339(&record.created_at)
            .map_err(|err| ValidationError::InvalidTimestamp(err.to_string()))?
            .with_timezone(&Utc);
        Ok(Task {
            id: record.id,
            description,
            status: record.status,
            created_at,
        })
    }
}
