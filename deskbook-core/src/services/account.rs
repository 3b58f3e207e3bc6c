//! Account service - signup and authentication

use std::sync::Arc;

use crate::adapters::json_file::JsonFileStore;
use crate::domain::result::{Error, Result};
use crate::domain::{validate_signup, Session, UserRecord};
use crate::ports::store::UserStore;

/// Account service for signup and authentication
pub struct AccountService {
    store: Arc<JsonFileStore>,
}

impl AccountService {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }

    /// Authenticate a user and return a fresh session.
    ///
    /// An unknown email reports `NotFound`; a known email with the wrong
    /// password reports `InvalidCredentials`. On success the session carries
    /// a copy of the user's reservation mapping.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Session> {
        let db = self.store.load()?;
        let record = db
            .get(email)
            .ok_or_else(|| Error::not_found(format!("no account for {}", email)))?;

        if record.password != password {
            return Err(Error::InvalidCredentials);
        }

        Ok(Session::new(email, password, record.reservations.clone()))
    }

    /// Create an account, overwriting any existing record for the email.
    ///
    /// Validation failures leave the database untouched. The new account
    /// starts with an empty reservation set and is NOT logged in; call
    /// [`AccountService::authenticate`] afterwards.
    pub fn create_account(
        &self,
        name: &str,
        abn: i64,
        email: &str,
        password: &str,
    ) -> Result<()> {
        validate_signup(name, abn, email, password).map_err(Error::validation)?;
        self.store
            .upsert_user(email, UserRecord::new(name, abn, password))
    }
}
