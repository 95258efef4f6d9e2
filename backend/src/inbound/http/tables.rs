//! Table HTTP handlers.
//!
//! ```text
//! GET    /tables/
//! POST   /tables/
//! DELETE /tables/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::CreateTableRequest;
use crate::domain::{Table, TableId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload for creating a table.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TableCreateBody {
    #[schema(example = "Window booth")]
    pub name: String,
    /// Seat count; must be positive.
    #[schema(example = 4)]
    pub seats: i32,
    #[schema(example = "Main hall")]
    pub location: String,
}

/// Table representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct TableResponse {
    pub id: i32,
    pub name: String,
    pub seats: i32,
    pub location: String,
}

impl From<Table> for TableResponse {
    fn from(table: Table) -> Self {
        Self {
            id: table.id().get(),
            name: table.name().to_owned(),
            seats: table.seats(),
            location: table.location().to_owned(),
        }
    }
}

impl From<TableCreateBody> for CreateTableRequest {
    fn from(body: TableCreateBody) -> Self {
        Self {
            name: body.name,
            seats: body.seats,
            location: body.location,
        }
    }
}

/// List every table.
#[utoipa::path(
    get,
    path = "/tables/",
    tags = ["tables"],
    responses(
        (status = 200, description = "Tables ordered by id", body = [TableResponse]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    )
)]
#[get("/tables/")]
pub async fn list_tables(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TableResponse>>> {
    let tables = state.tables_query.list_tables().await?;
    Ok(web::Json(tables.into_iter().map(Into::into).collect()))
}

/// Create a table.
#[utoipa::path(
    post,
    path = "/tables/",
    tags = ["tables"],
    request_body = TableCreateBody,
    responses(
        (status = 201, description = "Table created", body = TableResponse),
        (status = 422, description = "Invalid payload or non-positive seats", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    )
)]
#[post("/tables/")]
pub async fn create_table(
    state: web::Data<HttpState>,
    payload: web::Json<TableCreateBody>,
) -> ApiResult<HttpResponse> {
    let table = state
        .tables
        .create_table(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(TableResponse::from(table)))
}

/// Delete a table and every reservation on it.
///
/// Succeeds whether or not the table existed.
#[utoipa::path(
    delete,
    path = "/tables/{id}",
    tags = ["tables"],
    params(("id" = i32, Path, description = "Table identifier")),
    responses(
        (status = 204, description = "Table deleted or already absent"),
        (status = 422, description = "Malformed identifier", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    )
)]
#[delete("/tables/{id}")]
pub async fn delete_table(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .tables
        .delete_table(TableId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tests;
