//! Database and server commands.

use rolodex_api::Server;
use rolodex_core::RolodexConfig;
use rolodex_storage::{
    ContactRepository, Database, SeedReport, SqliteContactRepository, seed_sample_contacts,
};

use crate::Result;

/// Open the configured database and make sure the schema exists.
async fn open(config: &RolodexConfig) -> Result<Database> {
    let db = Database::connect(&config.database).await?;
    db.init_schema().await?;
    Ok(db)
}

/// `rolodex serve`: bootstrap storage and serve until Ctrl-C.
pub async fn serve(config: RolodexConfig) -> Result<()> {
    let server = Server::new(config).await?;
    server.run().await?;
    Ok(())
}

/// `rolodex init-db`: create the schema only.
pub async fn init_db(config: &RolodexConfig) -> Result<()> {
    let db = open(config).await?;
    db.close().await;
    println!("Database ready at {}", config.database.path.display());
    Ok(())
}

/// `rolodex seed`: create the schema and insert the sample contacts.
pub async fn seed(config: &RolodexConfig) -> Result<SeedReport> {
    let db = open(config).await?;
    let repo = SqliteContactRepository::new(db.clone());
    let report = seed_sample_contacts(&repo).await;
    db.close().await;

    println!(
        "Inserted {} sample contacts, skipped {}",
        report.inserted, report.skipped
    );
    Ok(report)
}

/// `rolodex list`: the display form of every contact, in storage order.
pub async fn list(config: &RolodexConfig) -> Result<Vec<String>> {
    let db = open(config).await?;
    let repo = SqliteContactRepository::new(db.clone());
    let contacts = repo.list().await?;
    db.close().await;

    let lines: Vec<String> = contacts.iter().map(ToString::to_string).collect();
    for line in &lines {
        println!("{line}");
    }
    Ok(lines)
}
