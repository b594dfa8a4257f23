use axum::{extract::State, http::StatusCode, Json};
use catalog::ServiceRepository;
use common::types::Message;
use models::schema::{self, ServiceSchema};
use models::service::{NewService, ServicePatch};
use serde::Deserialize;
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{JsonBody, ServiceId};
use crate::state::ServerState;

/// POST body. Every key is optional at the JSON level so a missing `name`
/// is reported as a 400 instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateServiceInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
}

impl CreateServiceInput {
    pub fn into_new(self) -> Result<NewService, ApiError> {
        let name = self.name.ok_or_else(|| ApiError::BadRequest("name is required".into()))?;
        let new = NewService { name, description: self.description, price: self.price, duration: self.duration };
        new.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(new)
    }
}

/// PUT/PATCH body. Absent or `null` keys leave the stored value unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateServiceInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
}

impl UpdateServiceInput {
    pub fn into_patch(self) -> Result<ServicePatch, ApiError> {
        let patch = ServicePatch {
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
        };
        patch.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(patch)
    }
}

#[utoipa::path(
    get, path = "/services", tag = "services",
    responses(
        (status = 200, description = "All services", body = [crate::openapi::ServiceDoc]),
        (status = 500, description = "Database failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ServiceSchema>>, ApiError> {
    let services = state.repo().get_all().await?;
    info!(count = services.len(), "list services");
    Ok(Json(schema::dump_many(&services)))
}

#[utoipa::path(
    get, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, ServiceId(id): ServiceId) -> Result<Json<ServiceSchema>, ApiError> {
    let found = state.repo().get_by_id(id).await?.ok_or(ApiError::NotFound(id))?;
    Ok(Json(schema::dump(&found)))
}

#[utoipa::path(
    post, path = "/services", tag = "services",
    request_body = crate::openapi::CreateServiceDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<CreateServiceInput>,
) -> Result<(StatusCode, Json<ServiceSchema>), ApiError> {
    let new = input.into_new()?;
    let uow = state.repo().begin().await?;
    let created = uow.insert(new).await?;
    uow.commit().await?;
    info!(id = created.id, name = %created.name, "created service");
    Ok((StatusCode::CREATED, Json(schema::dump(&created))))
}

#[utoipa::path(
    put, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = crate::openapi::UpdateServiceDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    ServiceId(id): ServiceId,
    JsonBody(input): JsonBody<UpdateServiceInput>,
) -> Result<Json<ServiceSchema>, ApiError> {
    apply_update(&state, id, input).await
}

#[utoipa::path(
    patch, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = crate::openapi::UpdateServiceDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    ServiceId(id): ServiceId,
    JsonBody(input): JsonBody<UpdateServiceInput>,
) -> Result<Json<ServiceSchema>, ApiError> {
    apply_update(&state, id, input).await
}

// PUT and PATCH share partial-update semantics.
async fn apply_update(state: &ServerState, id: i32, input: UpdateServiceInput) -> Result<Json<ServiceSchema>, ApiError> {
    let patch = input.into_patch()?;
    let uow = state.repo().begin().await?;
    let current = uow.get_by_id(id).await?.ok_or(ApiError::NotFound(id))?;
    let updated = uow.update(current, patch).await?;
    uow.commit().await?;
    info!(id, "updated service");
    Ok(Json(schema::dump(&updated)))
}

#[utoipa::path(
    delete, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, ServiceId(id): ServiceId) -> Result<Json<Message>, ApiError> {
    let uow = state.repo().begin().await?;
    let current = uow.get_by_id(id).await?.ok_or(ApiError::NotFound(id))?;
    uow.delete(current).await?;
    uow.commit().await?;
    info!(id, "deleted service");
    Ok(Json(Message::new(format!("Service with id {id} has been deleted."))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name() {
        let err = CreateServiceInput { price: Some(5.0), ..Default::default() }.into_new().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "name is required"));
    }

    #[test]
    fn create_rejects_blank_name() {
        let input = CreateServiceInput { name: Some(" ".into()), ..Default::default() };
        assert!(matches!(input.into_new(), Err(ApiError::BadRequest(ref m)) if m == "name is required"));
    }

    #[test]
    fn create_keeps_submitted_fields() {
        let input: CreateServiceInput =
            serde_json::from_str(r#"{"name":"Landscaping","price":99.99,"duration":1}"#).expect("parse");
        let new = input.into_new().expect("valid");
        assert_eq!(new, NewService::new("Landscaping").price(99.99).duration(1));
    }

    #[test]
    fn null_and_absent_keys_leave_fields_unchanged() {
        let input: UpdateServiceInput = serde_json::from_str(r#"{"price":10,"description":null}"#).expect("parse");
        let patch = input.into_patch().expect("valid");
        assert_eq!(patch, ServicePatch { price: Some(10.0), ..Default::default() });
    }

    #[test]
    fn update_rejects_empty_name() {
        let input = UpdateServiceInput { name: Some(String::new()), ..Default::default() };
        assert!(matches!(input.into_patch(), Err(ApiError::BadRequest(ref m)) if m == "name is required"));
    }
}
