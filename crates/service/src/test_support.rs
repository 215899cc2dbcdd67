#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

/// Fresh, fully migrated SQLite database in a throwaway file.
///
/// Each test gets its own file so tests can run in parallel without sharing rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let path = std::env::temp_dir().join(format!("cmms-test-{}.db", uuid::Uuid::new_v4()));
    let db = Database::connect(format!("sqlite://{}?mode=rwc", path.display())).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Insert an organization with a unique name and return its id.
pub async fn seed_organization(db: &DatabaseConnection) -> Result<uuid::Uuid, anyhow::Error> {
    use sea_orm::ActiveModelTrait;
    let org = models::organization::CreateOrganization {
        name: format!("org_{}", uuid::Uuid::new_v4()),
        contact: None,
        address: None,
    }
    .into_active(uuid::Uuid::new_v4(), chrono::Utc::now().into())?
    .insert(db)
    .await?;
    Ok(org.id)
}
