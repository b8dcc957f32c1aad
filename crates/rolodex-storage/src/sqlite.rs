//! SQLite-backed [`ContactRepository`].

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use rolodex_core::{Contact, ContactId, NewContact};

use crate::traits::prepare;
use crate::{ContactRepository, Database, Error, Result};

const SELECT_COLUMNS: &str = "id, uname, fname, lname, email, phone, notes, timestamp";

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: i64,
    uname: String,
    fname: String,
    lname: String,
    email: String,
    phone: String,
    notes: String,
    timestamp: NaiveDateTime,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Contact {
            id: ContactId(row.id),
            uname: row.uname,
            fname: row.fname,
            lname: row.lname,
            email: row.email,
            phone: row.phone,
            notes: row.notes,
            timestamp: row.timestamp,
        }
    }
}

/// Contact repository over the shared [`Database`] pool.
#[derive(Clone, Debug)]
pub struct SqliteContactRepository {
    db: Database,
}

impl SqliteContactRepository {
    /// Wrap a database handle. The schema must already exist.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn list(&self) -> Result<Vec<Contact>> {
        let rows: Vec<ContactRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM contact ORDER BY id"))
                .fetch_all(self.db.pool())
                .await?;
        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn get(&self, id: ContactId) -> Result<Contact> {
        let row: Option<ContactRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM contact WHERE id = ?"))
                .bind(id.get())
                .fetch_optional(self.db.pool())
                .await?;
        row.map(Contact::from).ok_or(Error::NotFound { id })
    }

    async fn create(&self, contact: NewContact) -> Result<Contact> {
        let contact = prepare(&contact)?;
        let timestamp = Local::now().naive_local();

        let row: ContactRow = sqlx::query_as(&format!(
            "INSERT INTO contact (uname, fname, lname, email, phone, notes, timestamp) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&contact.uname)
        .bind(&contact.fname)
        .bind(&contact.lname)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.notes)
        .bind(timestamp)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| Error::from_write(e, &contact.uname))?;

        tracing::debug!(id = row.id, uname = %row.uname, "Created contact");
        Ok(row.into())
    }

    async fn update(&self, id: ContactId, contact: NewContact) -> Result<Contact> {
        let contact = prepare(&contact)?;

        let row: Option<ContactRow> = sqlx::query_as(&format!(
            "UPDATE contact SET uname = ?, fname = ?, lname = ?, email = ?, phone = ?, notes = ? \
             WHERE id = ? RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&contact.uname)
        .bind(&contact.fname)
        .bind(&contact.lname)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.notes)
        .bind(id.get())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| Error::from_write(e, &contact.uname))?;

        let row = row.ok_or(Error::NotFound { id })?;
        tracing::debug!(%id, "Updated contact");
        Ok(row.into())
    }

    async fn delete(&self, id: ContactId) -> Result<()> {
        let result = sqlx::query("DELETE FROM contact WHERE id = ?")
            .bind(id.get())
            .execute(self.db.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound { id });
        }
        tracing::debug!(%id, "Deleted contact");
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact")
            .fetch_one(self.db.pool())
            .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
