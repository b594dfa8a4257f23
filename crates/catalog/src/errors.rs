use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Service with id {0} does not exist")]
    NotFound(i32),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl CatalogError {
    pub fn db(e: DbErr) -> Self { Self::Db(e.to_string()) }
}
