use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    Json,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use crate::{Error, AddressService};
use crate::address::{Address, AddressList, Coordinates, RangeQuery};
use crate::storage::AddressStore;
use std::sync::Arc;

/// Error body, `{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);
pub type ApiResult<T> = Result<Json<T>, ApiError>;

type SharedService<S> = State<Arc<AddressService<S>>>;

fn internal_error() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal Server Error")),
    )
}

/// Map a service error onto a status code and body.
///
/// Storage faults are logged here and reach the client only as an opaque 500.
pub fn error_response(err: Error) -> ApiError {
    match err {
        Error::NotFound(_) => (StatusCode::NOT_FOUND, Json(ErrorResponse::new("address not found"))),
        Error::Conflict(_) => (StatusCode::CONFLICT, Json(ErrorResponse::new("address already exists"))),
        Error::InvalidInput(message) => (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse::new(message))),
        err => {
            tracing::error!("Request failed: {}", err);
            internal_error()
        }
    }
}

/// Run a service call on the blocking pool; rusqlite is synchronous.
async fn run_blocking<S, T, F>(service: Arc<AddressService<S>>, op: F) -> ApiResult<T>
where
    S: AddressStore + 'static,
    T: Send + 'static,
    F: FnOnce(&AddressService<S>) -> crate::Result<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(move || op(&service)).await {
        Ok(Ok(value)) => Ok(Json(value)),
        Ok(Err(err)) => Err(error_response(err)),
        Err(join_err) => {
            tracing::error!("Storage task failed: {}", join_err);
            Err(internal_error())
        }
    }
}

pub async fn list_addresses<S: AddressStore + 'static>(
    State(service): SharedService<S>,
) -> ApiResult<AddressList> {
    run_blocking(service, |svc| svc.list()).await
}

pub async fn get_address<S: AddressStore + 'static>(
    State(service): SharedService<S>,
    Path(name): Path<String>,
) -> ApiResult<Address> {
    run_blocking(service, move |svc| svc.get(&name)).await
}

pub async fn update_address<S: AddressStore + 'static>(
    State(service): SharedService<S>,
    Path(name): Path<String>,
    Json(coords): Json<Coordinates>,
) -> ApiResult<Address> {
    run_blocking(service, move |svc| svc.update(&name, coords)).await
}

pub async fn create_address<S: AddressStore + 'static>(
    State(service): SharedService<S>,
    Json(address): Json<Address>,
) -> ApiResult<Address> {
    run_blocking(service, move |svc| svc.create(&address)).await
}

pub async fn delete_address<S: AddressStore + 'static>(
    State(service): SharedService<S>,
    Path(name): Path<String>,
) -> ApiResult<Address> {
    run_blocking(service, move |svc| svc.delete(&name)).await
}

pub async fn delete_all_addresses<S: AddressStore + 'static>(
    State(service): SharedService<S>,
) -> ApiResult<AddressList> {
    run_blocking(service, |svc| svc.delete_all()).await
}

pub async fn addresses_in_range<S: AddressStore + 'static>(
    State(service): SharedService<S>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> ApiResult<AddressList> {
    let Query(query) = query.map_err(|rejection| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(rejection.body_text())),
        )
    })?;
    run_blocking(service, move |svc| svc.in_range(&query)).await
}
