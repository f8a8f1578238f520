use sea_orm::ConnectionTrait;

use crate::server::{
    data::{invoice::InvoiceRepository, user::UserRepository},
    error::AppError,
    model::{invoice::Invoice, user::UserAccount},
};

/// Invoice reads and price aggregation.
///
/// Generic over the connection so that booking flows can sum prices inside their
/// transaction.
pub struct InvoiceService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvoiceService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sums the live invoice prices of the given booking details, `0.0` for none.
    pub async fn calculate_price_of_invoices_by_booking_detail_ids(
        &self,
        booking_detail_ids: Vec<i32>,
    ) -> Result<f64, AppError> {
        Ok(InvoiceRepository::new(self.db)
            .sum_by_booking_detail_ids(booking_detail_ids)
            .await?)
    }

    /// Lists the caller's invoices, or every invoice for an administrator.
    pub async fn find_all(&self, user_id: i32) -> Result<Vec<Invoice>, AppError> {
        let user = self.require_user(user_id).await?;

        let owner = if user.is_admin() { None } else { Some(user.id) };

        Ok(InvoiceRepository::new(self.db).find_all(owner).await?)
    }

    /// # Returns
    /// - `Ok(Invoice)` - The invoice
    /// - `Err(AppError::NotFound)` - Caller or invoice missing
    /// - `Err(AppError::Forbidden)` - Invoice belongs to another user and the caller is not admin
    pub async fn find_one(&self, id: i32, user_id: i32) -> Result<Invoice, AppError> {
        let user = self.require_user(user_id).await?;

        let invoice = InvoiceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Invoice with id '{}' not found.", id)))?;

        if !user.can_access(invoice.user_id) {
            return Err(AppError::Forbidden(
                "This invoice does not belong to you, so you cannot view it.".to_string(),
            ));
        }

        Ok(invoice)
    }

    async fn require_user(&self, user_id: i32) -> Result<UserAccount, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found.", user_id)))
    }
}
