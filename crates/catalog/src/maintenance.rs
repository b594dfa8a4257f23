//! Out-of-band schema commands: `create`, `seed`, `drop`.

use migration::{Migrator, MigratorTrait};
use models::service::{self, NewService};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::CatalogError;
use crate::repository::{SeaOrmServiceRepository, ServiceRepository};

/// Rows inserted by `seed`, in insertion order.
pub fn sample_services() -> Vec<NewService> {
    vec![
        NewService::new("Landscaping").price(99.99).duration(1),
        NewService::new("Renovation").price(5999.99).duration(7),
    ]
}

pub async fn create_schema(db: &DatabaseConnection) -> Result<(), CatalogError> {
    Migrator::up(db, None).await.map_err(CatalogError::db)?;
    info!(event = "schema_created", "services schema created");
    Ok(())
}

/// Insert the sample rows in a single unit of work.
pub async fn seed(db: &DatabaseConnection) -> Result<Vec<service::Model>, CatalogError> {
    let repo = SeaOrmServiceRepository::new(db.clone());
    let uow = repo.begin().await?;
    let mut created = Vec::new();
    for new in sample_services() {
        created.push(uow.insert(new).await?);
    }
    uow.commit().await?;
    info!(event = "schema_seeded", count = created.len(), "services seeded");
    Ok(created)
}

pub async fn drop_schema(db: &DatabaseConnection) -> Result<(), CatalogError> {
    Migrator::down(db, None).await.map_err(CatalogError::db)?;
    info!(event = "schema_dropped", "services schema dropped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use configs::DatabaseConfig;
    use models::db::connect_with_config;

    #[tokio::test]
    async fn seed_inserts_the_two_sample_rows() -> anyhow::Result<()> {
        let db = get_db().await?;
        let created = seed(&db).await?;
        assert_eq!(created.len(), 2);

        let all = SeaOrmServiceRepository::new(db).get_all().await?;
        assert_eq!(all, created);
        assert_eq!((all[0].id, all[0].name.as_str(), all[0].price, all[0].duration), (1, "Landscaping", Some(99.99), Some(1)));
        assert_eq!((all[1].id, all[1].name.as_str(), all[1].price, all[1].duration), (2, "Renovation", Some(5999.99), Some(7)));
        assert!(all.iter().all(|m| m.description.is_none()));
        Ok(())
    }

    #[tokio::test]
    async fn create_then_drop_schema() -> anyhow::Result<()> {
        let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
        create_schema(&db).await?;
        let repo = SeaOrmServiceRepository::new(db.clone());
        assert!(repo.get_all().await?.is_empty());

        drop_schema(&db).await?;
        assert!(matches!(repo.get_all().await, Err(CatalogError::Db(_))));
        Ok(())
    }

    #[tokio::test]
    async fn seed_without_schema_fails() -> anyhow::Result<()> {
        let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
        assert!(seed(&db).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn create_schema_is_idempotent() -> anyhow::Result<()> {
        let db = get_db().await?;
        seed(&db).await?;
        create_schema(&db).await?;
        assert_eq!(SeaOrmServiceRepository::new(db).get_all().await?.len(), 2);
        Ok(())
    }
}
