//! Document store backed by `sled`
//!
//! Records are stored as JSON values in a single `messages` tree. Each key
//! is prefixed with a timestamp to allow chronological scans, with a UUID
//! suffix to keep keys unique within one millisecond.

use chrono::Utc;
use sled::Db;
use uuid::Uuid;

use crate::relay::message::Record;
use crate::store::DocumentStore;
use crate::utils::error::StoreError;

const MESSAGES_TREE: &str = "messages";

#[derive(Clone)]
pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Open or create a sled database at `path`.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let db = sled::open(path).map_err(|e| StoreError::Open {
            path: path.to_string(),
            source: e,
        })?;
        Ok(Self { db })
    }

    /// Load every stored record in chronological order.
    pub fn load_all(&self) -> Result<Vec<Record>, StoreError> {
        let tree = self.db.open_tree(MESSAGES_TREE)?;

        Ok(tree
            .iter()
            .filter_map(|res| res.ok())
            .filter_map(|(_, val)| serde_json::from_slice(&val).ok())
            .collect())
    }
}

impl DocumentStore for SledStore {
    fn insert(&self, record: &Record) -> Result<(), StoreError> {
        let serialized = serde_json::to_vec(record)?;
        let tree = self.db.open_tree(MESSAGES_TREE)?;

        let key = format!("{:020}_{}", Utc::now().timestamp_millis(), Uuid::new_v4());
        tree.insert(key.as_bytes(), serialized)?;

        Ok(())
    }
}

impl std::fmt::Debug for SledStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SledStore").field("db", &"sled::Db").finish()
    }
}
