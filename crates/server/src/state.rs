use catalog::SeaOrmServiceRepository;
use sea_orm::DatabaseConnection;

/// Application context built once at startup and handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub fn repo(&self) -> SeaOrmServiceRepository {
        SeaOrmServiceRepository::new(self.db.clone())
    }
}
