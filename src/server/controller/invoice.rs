use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, invoice::InvoiceDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::invoice::InvoiceService,
        state::AppState,
    },
};

/// Tag for grouping invoice endpoints in OpenAPI documentation
pub static INVOICE_TAG: &str = "invoice";

#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = INVOICE_TAG,
    responses(
        (status = 200, description = "Own invoices, all invoices for admins", body = Vec<InvoiceDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invoices(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invoices = InvoiceService::new(&state.db).find_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(invoices.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    tag = INVOICE_TAG,
    params(("id" = i32, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "The invoice", body = InvoiceDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Invoice of another user", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invoice = InvoiceService::new(&state.db).find_one(id, user.id).await?;

    Ok((StatusCode::OK, Json(invoice.into_dto())))
}
