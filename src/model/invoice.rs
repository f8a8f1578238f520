use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InvoiceDto {
    pub id: i32,
    pub booking_detail_id: i32,
    pub user_id: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}
