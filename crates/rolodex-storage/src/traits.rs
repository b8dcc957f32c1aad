//! The repository interface the HTTP layer is written against.

use async_trait::async_trait;
use rolodex_core::{Contact, ContactId, NewContact};

use crate::Result;

/// CRUD operations over stored contacts.
///
/// Implementations must uphold the `uname` uniqueness invariant: a `create`
/// or `update` that would duplicate an existing `uname` fails with
/// [`Error::DuplicateUname`](crate::Error::DuplicateUname) and leaves every
/// row untouched. Submitted contacts are trimmed and validated before any
/// write.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All contacts in storage order (ascending id).
    async fn list(&self) -> Result<Vec<Contact>>;

    /// A single contact.
    async fn get(&self, id: ContactId) -> Result<Contact>;

    /// Insert a contact stamped with the current local time.
    async fn create(&self, contact: NewContact) -> Result<Contact>;

    /// Replace a contact's editable fields. The timestamp is preserved.
    async fn update(&self, id: ContactId, contact: NewContact) -> Result<Contact>;

    /// Remove a contact.
    async fn delete(&self, id: ContactId) -> Result<()>;

    /// Number of stored contacts.
    async fn count(&self) -> Result<u64>;
}

/// Trim and validate a submitted contact.
pub(crate) fn prepare(contact: &NewContact) -> Result<NewContact> {
    let contact = contact.trimmed();
    contact.validate()?;
    Ok(contact)
}
