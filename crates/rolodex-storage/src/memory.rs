//! In-process [`ContactRepository`], used by tests and demos.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Local;
use rolodex_core::{Contact, ContactId, NewContact};

use crate::traits::prepare;
use crate::{ContactRepository, Error, Result};

#[derive(Debug, Default)]
struct State {
    rows: Vec<Contact>,
    last_id: i64,
}

impl State {
    fn uname_taken(&self, uname: &str, except: Option<ContactId>) -> bool {
        self.rows
            .iter()
            .any(|c| c.uname == uname && Some(c.id) != except)
    }
}

/// Contact repository held in memory.
///
/// Ids are never reused, matching SQLite `AUTOINCREMENT`.
#[derive(Debug, Default)]
pub struct MemoryContactRepository {
    state: RwLock<State>,
}

impl MemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn list(&self) -> Result<Vec<Contact>> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.rows.clone())
    }

    async fn get(&self, id: ContactId) -> Result<Contact> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .rows
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(Error::NotFound { id })
    }

    async fn create(&self, contact: NewContact) -> Result<Contact> {
        let contact = prepare(&contact)?;
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.uname_taken(&contact.uname, None) {
            return Err(Error::DuplicateUname {
                uname: contact.uname,
            });
        }

        state.last_id += 1;
        let created = Contact {
            id: ContactId(state.last_id),
            uname: contact.uname,
            fname: contact.fname,
            lname: contact.lname,
            email: contact.email,
            phone: contact.phone,
            notes: contact.notes,
            timestamp: Local::now().naive_local(),
        };
        state.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: ContactId, contact: NewContact) -> Result<Contact> {
        let contact = prepare(&contact)?;
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        let Some(index) = state.rows.iter().position(|c| c.id == id) else {
            return Err(Error::NotFound { id });
        };
        if state.uname_taken(&contact.uname, Some(id)) {
            return Err(Error::DuplicateUname {
                uname: contact.uname,
            });
        }

        let row = &mut state.rows[index];
        row.uname = contact.uname;
        row.fname = contact.fname;
        row.lname = contact.lname;
        row.email = contact.email;
        row.phone = contact.phone;
        row.notes = contact.notes;
        Ok(row.clone())
    }

    async fn delete(&self, id: ContactId) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let before = state.rows.len();
        state.rows.retain(|c| c.id != id);
        if state.rows.len() == before {
            return Err(Error::NotFound { id });
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.rows.len() as u64)
    }
}
