use async_trait::async_trait;
use models::service::{self, NewService, ServicePatch};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, IntoActiveModel,
    QueryOrder, TransactionTrait,
};
use tracing::{debug, instrument};

use crate::errors::CatalogError;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn insert(&self, new: NewService) -> Result<service::Model, CatalogError>;
    async fn get_all(&self) -> Result<Vec<service::Model>, CatalogError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<service::Model>, CatalogError>;
    async fn update(&self, current: service::Model, patch: ServicePatch) -> Result<service::Model, CatalogError>;
    async fn delete(&self, current: service::Model) -> Result<(), CatalogError>;
}

/// SeaORM-backed repository implementation.
///
/// Over a plain pool every statement autocommits. `begin` returns a unit of
/// work bound to a transaction: its mutations are durable only after
/// `commit`, and are discarded if it is dropped first.
pub struct SeaOrmServiceRepository<C = DatabaseConnection> {
    conn: C,
}

impl SeaOrmServiceRepository<DatabaseConnection> {
    pub fn new(db: DatabaseConnection) -> Self { Self { conn: db } }

    pub async fn begin(&self) -> Result<SeaOrmServiceRepository<DatabaseTransaction>, CatalogError> {
        let txn = self.conn.begin().await.map_err(CatalogError::db)?;
        Ok(SeaOrmServiceRepository { conn: txn })
    }
}

impl SeaOrmServiceRepository<DatabaseTransaction> {
    pub async fn commit(self) -> Result<(), CatalogError> {
        self.conn.commit().await.map_err(CatalogError::db)
    }
}

#[async_trait]
impl<C> ServiceRepository for SeaOrmServiceRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    #[instrument(skip(self, new), fields(name = %new.name))]
    async fn insert(&self, new: NewService) -> Result<service::Model, CatalogError> {
        new.validate()?;
        let created = new.into_active_model().insert(&self.conn).await.map_err(CatalogError::db)?;
        debug!(id = created.id, "service inserted");
        Ok(created)
    }

    async fn get_all(&self) -> Result<Vec<service::Model>, CatalogError> {
        service::Entity::find()
            .order_by_asc(service::Column::Id)
            .all(&self.conn)
            .await
            .map_err(CatalogError::db)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<service::Model>, CatalogError> {
        service::Entity::find_by_id(id).one(&self.conn).await.map_err(CatalogError::db)
    }

    #[instrument(skip(self, current, patch), fields(id = current.id))]
    async fn update(&self, current: service::Model, patch: ServicePatch) -> Result<service::Model, CatalogError> {
        patch.validate()?;
        if patch.is_empty() {
            return Ok(current);
        }
        let mut am = current.into_active_model();
        patch.apply(&mut am);
        let updated = am.update(&self.conn).await.map_err(CatalogError::db)?;
        debug!("service updated");
        Ok(updated)
    }

    #[instrument(skip(self, current), fields(id = current.id))]
    async fn delete(&self, current: service::Model) -> Result<(), CatalogError> {
        let res = service::Entity::delete_by_id(current.id)
            .exec(&self.conn)
            .await
            .map_err(CatalogError::db)?;
        if res.rows_affected == 0 {
            return Err(CatalogError::NotFound(current.id));
        }
        debug!("service deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    async fn repo() -> anyhow::Result<SeaOrmServiceRepository> {
        Ok(SeaOrmServiceRepository::new(get_db().await?))
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids_and_round_trips() -> anyhow::Result<()> {
        let repo = repo().await?;
        let uow = repo.begin().await?;
        let a = uow
            .insert(NewService::new("Landscaping").description("Lawn care").price(99.99).duration(1))
            .await?;
        let b = uow.insert(NewService::new("Renovation")).await?;
        uow.commit().await?;

        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Landscaping");
        assert_eq!(a.description.as_deref(), Some("Lawn care"));
        assert_eq!(a.price, Some(99.99));
        assert_eq!(a.duration, Some(1));
        assert_eq!(b.description, None);

        let found = repo.get_by_id(a.id).await?;
        assert_eq!(found, Some(a));
        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_missing_is_none() -> anyhow::Result<()> {
        let repo = repo().await?;
        assert_eq!(repo.get_by_id(999).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn get_all_is_empty_then_in_insertion_order() -> anyhow::Result<()> {
        let repo = repo().await?;
        assert!(repo.get_all().await?.is_empty());

        let uow = repo.begin().await?;
        for name in ["first", "second", "third"] {
            uow.insert(NewService::new(name)).await?;
        }
        uow.commit().await?;

        let names: Vec<String> = repo.get_all().await?.into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        Ok(())
    }

    #[tokio::test]
    async fn insert_rejects_blank_name() -> anyhow::Result<()> {
        let repo = repo().await?;
        let err = repo.insert(NewService::new("  ")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Model(_)));
        assert!(repo.get_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_only_touches_supplied_fields() -> anyhow::Result<()> {
        let repo = repo().await?;
        let created = repo
            .insert(NewService::new("Landscaping").description("Lawn care").price(99.99).duration(1))
            .await?;

        let uow = repo.begin().await?;
        let updated = uow
            .update(created.clone(), ServicePatch { price: Some(10.0), ..Default::default() })
            .await?;
        uow.commit().await?;

        assert_eq!(updated.price, Some(10.0));
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.duration, created.duration);
        assert_eq!(repo.get_by_id(created.id).await?, Some(updated));
        Ok(())
    }

    #[tokio::test]
    async fn zero_price_overwrites_stored_price() -> anyhow::Result<()> {
        let repo = repo().await?;
        let created = repo.insert(NewService::new("Consulting").price(120.0)).await?;
        let updated = repo.update(created, ServicePatch { price: Some(0.0), ..Default::default() }).await?;
        assert_eq!(updated.price, Some(0.0));
        Ok(())
    }

    #[tokio::test]
    async fn empty_patch_returns_entity_unchanged() -> anyhow::Result<()> {
        let repo = repo().await?;
        let created = repo.insert(NewService::new("Painting").duration(3)).await?;
        let same = repo.update(created.clone(), ServicePatch::default()).await?;
        assert_eq!(same, created);
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_lookup_is_absent() -> anyhow::Result<()> {
        let repo = repo().await?;
        let created = repo.insert(NewService::new("Roofing")).await?;

        let uow = repo.begin().await?;
        uow.delete(created.clone()).await?;
        uow.commit().await?;

        assert_eq!(repo.get_by_id(created.id).await?, None);
        let err = repo.delete(created.clone()).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(id) if id == created.id));
        Ok(())
    }

    #[tokio::test]
    async fn uncommitted_unit_of_work_is_discarded() -> anyhow::Result<()> {
        let repo = repo().await?;
        {
            let uow = repo.begin().await?;
            uow.insert(NewService::new("Temporary")).await?;
        }
        assert!(repo.get_all().await?.is_empty());
        Ok(())
    }
}
