use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Extension, Json, Router};
use axum_macros::debug_handler;
use serde::Deserialize;
use shared::HousingLocationInfo;
use tracing::debug;

use crate::error::{Error, Result};
use crate::AppContext;

#[derive(Debug, Deserialize)]
struct LocationsQuery {
    id: Option<i64>,
}

pub fn router() -> Router {
    Router::new()
        .route("/locations", get(list))
        .route("/locations/{id}", get(get_by_id))
}

/// json-server semantics: no filter returns the whole collection, an `id`
/// filter returns a (possibly empty) array.
#[debug_handler]
async fn list(
    Query(query): Query<LocationsQuery>,
    Extension(context): Extension<AppContext>,
) -> Json<Vec<HousingLocationInfo>> {
    match query.id {
        Some(id) => {
            debug!(id, "Listing housing locations filtered by id");
            Json(context.store.get_by_id(id).into_iter().collect())
        }
        None => {
            debug!(total = context.store.len(), "Listing housing locations");
            Json(context.store.list())
        }
    }
}

#[debug_handler]
async fn get_by_id(
    Path(id): Path<i64>,
    Extension(context): Extension<AppContext>,
) -> Result<Json<HousingLocationInfo>> {
    debug!(id, "Getting housing location by id");
    context.store.get_by_id(id).map(Json).ok_or(Error::NotFound)
}
