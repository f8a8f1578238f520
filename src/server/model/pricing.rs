//! Stay pricing rules.
//!
//! ```text
//! nights    = end_date - start_date in days
//! base      = room_price * nights
//! surcharge = base * surcharge_rate when guests >= surcharge_guest_threshold, else 0
//! total     = (base + surcharge) * surcharge_factor of the user type
//! ```

use chrono::NaiveDate;

use crate::server::error::AppError;

pub const MAX_GUESTS_PER_ROOM: &str = "max_guests_per_room";
pub const SURCHARGE_GUEST_THRESHOLD: &str = "surcharge_guest_threshold";
pub const SURCHARGE_RATE: &str = "surcharge_rate";

/// Configuration values used to validate and price a stay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRules {
    pub max_guests_per_room: f64,
    pub surcharge_guest_threshold: f64,
    pub surcharge_rate: f64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            max_guests_per_room: 3.0,
            surcharge_guest_threshold: 3.0,
            surcharge_rate: 0.25,
        }
    }
}

impl PricingRules {
    /// Overrides the rule named `config_name`. Other names are ignored.
    pub fn set(&mut self, config_name: &str, config_value: f64) {
        match config_name {
            MAX_GUESTS_PER_ROOM => self.max_guests_per_room = config_value,
            SURCHARGE_GUEST_THRESHOLD => self.surcharge_guest_threshold = config_value,
            SURCHARGE_RATE => self.surcharge_rate = config_value,
            _ => {}
        }
    }

    /// Checks the dates and guest count of a stay.
    ///
    /// # Returns
    /// - `Ok(nights)` - Number of nights, at least 1
    /// - `Err(AppError::BadRequest)` - End date not after start date, or guest count outside
    ///   `1..=max_guests_per_room`
    pub fn validate_stay(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        number_of_guests: i32,
    ) -> Result<i64, AppError> {
        if end_date <= start_date {
            return Err(AppError::BadRequest(
                "End date must be after start date.".to_string(),
            ));
        }

        if number_of_guests < 1 || f64::from(number_of_guests) > self.max_guests_per_room {
            return Err(AppError::BadRequest(format!(
                "Number of guests must be between 1 and {}.",
                self.max_guests_per_room
            )));
        }

        Ok((end_date - start_date).num_days())
    }

    /// Computes the price of a stay that already passed [`validate_stay`](Self::validate_stay).
    pub fn price(
        &self,
        room_price: f64,
        nights: i64,
        number_of_guests: i32,
        surcharge_factor: f64,
    ) -> f64 {
        let base = room_price * nights as f64;

        let surcharge = if f64::from(number_of_guests) >= self.surcharge_guest_threshold {
            base * self.surcharge_rate
        } else {
            0.0
        };

        (base + surcharge) * surcharge_factor
    }
}
