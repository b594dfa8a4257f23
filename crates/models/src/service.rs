use sea_orm::{entity::prelude::*, NotSet, Set};

use crate::errors;

/// Upper bound on `name`, mirrored by the `varchar(100)` column.
pub const NAME_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price: Option<f64>,
    pub duration: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name is required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("name must be at most {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

/// A service that has not been persisted yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
}

impl NewService {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None, price: None, duration: None }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_name(&self.name)
    }

    /// Active model with `id` left for the database to assign.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            description: Set(self.description),
            price: Set(self.price),
            duration: Set(self.duration),
        }
    }
}

/// Partial update: `None` leaves the stored value untouched, `Some` overwrites
/// it, whatever the value (`0`, `0.0` and `""` included).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
}

impl ServicePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none() && self.duration.is_none()
    }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }

    /// Mark the supplied fields as changed on an active model loaded from the store.
    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(name) = self.name {
            am.name = Set(name);
        }
        if let Some(description) = self.description {
            am.description = Set(Some(description));
        }
        if let Some(price) = self.price {
            am.price = Set(Some(price));
        }
        if let Some(duration) = self.duration {
            am.duration = Set(Some(duration));
        }
    }
}
