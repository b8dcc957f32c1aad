//! Sample data loaded at startup.
//!
//! Each sample contact is inserted on its own. A failure (typically the
//! unique `uname` constraint on a re-run) is logged and skipped; it never
//! aborts the remaining inserts or the caller. No rollback, no retry.

use rolodex_core::NewContact;

use crate::ContactRepository;

/// Outcome of a seed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Contacts written by this run.
    pub inserted: usize,
    /// Contacts whose insert failed and was skipped.
    pub skipped: usize,
}

/// The three fixed sample contacts.
pub fn sample_contacts() -> Vec<NewContact> {
    vec![
        NewContact::new("alpha", "Aaron", "Alpha", "aa@alpha.net", "none"),
        NewContact::new("beta", "Brett", "Beta", "bb@beta.net", "none"),
        NewContact::new("charlie", "Cindy", "Charlie", "cc@charley.net", "555-1212")
            .with_notes("Nothing of note"),
    ]
}

/// Insert the sample contacts, isolating each failure.
pub async fn seed_sample_contacts(repo: &dyn ContactRepository) -> SeedReport {
    let mut report = SeedReport::default();

    for contact in sample_contacts() {
        let uname = contact.uname.clone();
        match repo.create(contact).await {
            Ok(_) => {
                tracing::debug!(%uname, "Seeded sample contact");
                report.inserted += 1;
            }
            Err(e) => {
                tracing::warn!(%uname, "Skipping sample contact: {e}");
                report.skipped += 1;
            }
        }
    }

    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "Sample data loaded"
    );
    report
}
