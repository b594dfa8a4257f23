//! JSON shape of a service.
//!
//! The only fields ever written to a response are the ones below, in this
//! order. Absent optionals are rendered as `null`.

use serde::Serialize;

use crate::service;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceSchema {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
}

impl From<&service::Model> for ServiceSchema {
    fn from(m: &service::Model) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            description: m.description.clone(),
            price: m.price,
            duration: m.duration,
        }
    }
}

pub fn dump(model: &service::Model) -> ServiceSchema {
    ServiceSchema::from(model)
}

pub fn dump_many(models: &[service::Model]) -> Vec<ServiceSchema> {
    models.iter().map(ServiceSchema::from).collect()
}
