//! Store port - database abstraction

use crate::domain::result::Result;
use crate::domain::{Database, UserRecord};

/// Persistence abstraction for the user database.
///
/// Implementations read and rewrite the entire database document; there is no
/// incremental update path. The provided methods cover the access patterns
/// the services need on top of `load`/`save`.
pub trait UserStore: Send + Sync {
    /// Create an empty database if none exists yet.
    fn ensure_db_exists(&self) -> Result<()>;

    /// Read the full database.
    fn load(&self) -> Result<Database>;

    /// Rewrite the full database.
    fn save(&self, db: &Database) -> Result<()>;

    /// Look up a single user record.
    fn get_user(&self, email: &str) -> Result<Option<UserRecord>> {
        Ok(self.load()?.get(email).cloned())
    }

    /// Insert or overwrite a user record.
    fn upsert_user(&self, email: &str, record: UserRecord) -> Result<()> {
        let mut db = self.load()?;
        db.insert(email.to_string(), record);
        self.save(&db)
    }

    /// Number of user records.
    fn user_count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }
}
