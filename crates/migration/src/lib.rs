//! Migrator for the `services` schema.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_services;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_services::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, Database, DatabaseConnection};

    async fn memory_db() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        Database::connect(opts).await.expect("connect")
    }

    #[tokio::test]
    async fn up_then_down_leaves_no_services_table() {
        let db = memory_db().await;
        Migrator::up(&db, None).await.expect("migrate up");
        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("services").await.expect("has_table"));

        Migrator::down(&db, None).await.expect("migrate down");
        assert!(!manager.has_table("services").await.expect("has_table"));
    }

    #[tokio::test]
    async fn up_is_idempotent() {
        let db = memory_db().await;
        Migrator::up(&db, None).await.expect("first up");
        Migrator::up(&db, None).await.expect("second up");
        let applied = Migrator::get_applied_migrations(&db).await.expect("applied");
        assert_eq!(applied.len(), 1);
    }
}
