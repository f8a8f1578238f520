//! User type domain model.
//!
//! A user type decides the surcharge factor applied to every stay a user books.

use crate::model::user::UserTypeDto;

/// Name of the domestic guest type.
pub const LOCAL: &str = "local";

/// Name of the foreign guest type.
pub const FOREIGN: &str = "foreign";

#[derive(Debug, Clone, PartialEq)]
pub struct UserType {
    pub id: i32,
    pub type_name: String,
    pub description: Option<String>,
    /// Multiplier applied to the price of every stay.
    pub surcharge_factor: f64,
}

impl UserType {
    pub fn from_entity(entity: entity::user_type::Model) -> Self {
        Self {
            id: entity.id,
            type_name: entity.type_name,
            description: entity.description,
            surcharge_factor: entity.surcharge_factor,
        }
    }

    pub fn into_dto(self) -> UserTypeDto {
        UserTypeDto {
            id: self.id,
            type_name: self.type_name,
            description: self.description,
            surcharge_factor: self.surcharge_factor,
        }
    }
}
