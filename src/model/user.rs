use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub full_name: String,
    pub nationality: String,
    pub status: String,
    pub dob: NaiveDate,
    pub phone_number: String,
    pub address: String,
    pub identity_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User as shown to clients. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub role_name: String,
    pub type_name: String,
    pub profile: ProfileDto,
}

/// Partial update of a user. Email lives on the account, everything else on the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateUserDto {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub full_name: Option<String>,
    #[validate(length(min = 1))]
    pub nationality: Option<String>,
    pub dob: Option<NaiveDate>,
    #[validate(length(min = 1))]
    pub phone_number: Option<String>,
    #[validate(length(min = 1))]
    pub address: Option<String>,
    #[validate(length(min = 1))]
    pub identity_number: Option<String>,
}

/// Query string filters for listing users.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsersDto {
    pub address: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub identity_number: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserTypeDto {
    pub id: i32,
    pub type_name: String,
    pub description: Option<String>,
    pub surcharge_factor: f64,
}
