//! User directory.
//!
//! Two lookup views over one record set: by user id and by sensor id. The
//! directory is never edited in place; an `ownership` command builds a new
//! one and swaps it in.

use std::collections::{BTreeMap, HashMap};

use smartlight_proto::UserRecord;

use crate::error::DirectoryError;

/// Immutable snapshot of the known users.
///
/// Records iterate in ascending `user_id` order, which is what makes
/// same-tier resolution deterministic.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: BTreeMap<String, UserRecord>,
    /// sensor id -> user id
    sensors: HashMap<String, String>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from an ownership payload.
    ///
    /// # Errors
    ///
    /// Returns an error if a user id or sensor id appears twice. Nothing is
    /// built in that case, so the caller's current directory stays intact.
    pub fn from_records(records: Vec<UserRecord>) -> Result<Self, DirectoryError> {
        let mut directory = Self::new();

        for record in records {
            if directory.users.contains_key(&record.user_id) {
                return Err(DirectoryError::DuplicateUser(record.user_id));
            }
            if directory.sensors.contains_key(&record.sensor_id) {
                return Err(DirectoryError::DuplicateSensor(record.sensor_id));
            }

            directory.sensors.insert(record.sensor_id.clone(), record.user_id.clone());
            directory.users.insert(record.user_id.clone(), record);
        }

        Ok(directory)
    }

    /// Look up a record by user id.
    pub fn user(&self, user_id: &str) -> Option<&UserRecord> {
        self.users.get(user_id)
    }

    /// Look up a record by the id of its sensor.
    pub fn by_sensor(&self, sensor_id: &str) -> Option<&UserRecord> {
        self.sensors.get(sensor_id).and_then(|user_id| self.users.get(user_id))
    }

    /// All records, ordered by user id.
    pub fn records(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.values()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory has no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
