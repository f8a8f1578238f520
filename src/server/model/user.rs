//! User and profile domain models and parameters.
//!
//! An account (`user` row) holds credentials and points at a profile with the personal
//! data, a role and a user type. Read paths join the three so that services and DTOs
//! work with role and type names instead of ids.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        auth::SignUpDto,
        user::{ProfileDto, SearchUsersDto, UpdateUserDto, UserDto},
    },
    server::{error::AppError, model::role::RoleName},
};

/// Whether a profile may sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStatus {
    Active,
    Inactive,
}

impl ProfileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Personal data of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i32,
    pub full_name: String,
    pub nationality: String,
    pub status: ProfileStatus,
    pub dob: NaiveDate,
    pub phone_number: String,
    pub address: String,
    pub identity_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Converts an entity model to a profile domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The converted profile
    /// - `Err(DbErr::Custom)` - The stored status is neither `active` nor `inactive`
    pub fn from_entity(entity: entity::profile::Model) -> Result<Self, DbErr> {
        let status = ProfileStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!("Unknown profile status '{}'", entity.status))
        })?;

        Ok(Self {
            id: entity.id,
            full_name: entity.full_name,
            nationality: entity.nationality,
            status,
            dob: entity.dob,
            phone_number: entity.phone_number,
            address: entity.address,
            identity_number: entity.identity_number,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            full_name: self.full_name,
            nationality: self.nationality,
            status: self.status.as_str().to_string(),
            dob: self.dob,
            phone_number: self.phone_number,
            address: self.address,
            identity_number: self.identity_number,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Account identity used for authorization decisions.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub id: i32,
    pub email: String,
    pub role: RoleName,
    pub profile_id: i32,
    pub user_type_id: i32,
}

impl UserAccount {
    pub fn is_admin(&self) -> bool {
        self.role == RoleName::Admin
    }

    /// Whether this account may act on a resource owned by `owner_id`.
    pub fn can_access(&self, owner_id: i32) -> bool {
        self.is_admin() || self.id == owner_id
    }
}

/// User joined with its profile, role name and type name.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: i32,
    pub email: String,
    pub role_name: String,
    pub type_name: String,
    pub profile: Profile,
}

impl UserProfile {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role_name: self.role_name,
            type_name: self.type_name,
            profile: self.profile.into_dto(),
        }
    }
}

/// Data needed to check a sign-in attempt.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: i32,
    pub email: String,
    pub role: RoleName,
    pub password_hash: String,
    /// False when the profile is inactive or soft-deleted.
    pub active: bool,
}

/// Field used by `get_user_by_field`.
#[derive(Debug, Clone)]
pub enum UserField {
    Id(i32),
    Email(String),
}

/// Sign-up request converted for the user service.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password: String,
    pub user_type_name: String,
    pub profile: NewProfile,
}

impl CreateUserParams {
    pub fn from_dto(dto: SignUpDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            user_type_name: dto.user_type_name,
            profile: NewProfile {
                full_name: dto.full_name,
                nationality: dto.nationality,
                dob: dto.dob,
                phone_number: dto.phone_number,
                address: dto.address,
                identity_number: dto.identity_number,
            },
        }
    }
}

/// Personal data of a profile about to be inserted.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub full_name: String,
    pub nationality: String,
    pub dob: NaiveDate,
    pub phone_number: String,
    pub address: String,
    pub identity_number: String,
}

/// Row data for inserting an account together with its profile.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub email: String,
    pub password_hash: String,
    pub role_id: i32,
    pub user_type_id: i32,
    pub profile: NewProfile,
}

/// Partial update of a user; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub nationality: Option<String>,
    pub dob: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub identity_number: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            email: dto.email,
            full_name: dto.full_name,
            nationality: dto.nationality,
            dob: dto.dob,
            phone_number: dto.phone_number,
            address: dto.address,
            identity_number: dto.identity_number,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether any profile column changes.
    pub fn touches_profile(&self) -> bool {
        Self {
            email: None,
            ..self.clone()
        } != Self::default()
    }
}

/// Filters for listing users. Text filters are case-insensitive substrings.
#[derive(Debug, Clone, Default)]
pub struct UserSearchParams {
    pub address: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub identity_number: Option<String>,
    pub status: Option<ProfileStatus>,
}

impl UserSearchParams {
    /// # Returns
    /// - `Ok(UserSearchParams)` - Converted filters
    /// - `Err(AppError::BadRequest)` - Unknown profile status
    pub fn from_dto(dto: SearchUsersDto) -> Result<Self, AppError> {
        let status = dto
            .status
            .map(|status| {
                ProfileStatus::parse(&status)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown status '{}'", status)))
            })
            .transpose()?;

        Ok(Self {
            address: dto.address,
            email: dto.email,
            full_name: dto.full_name,
            identity_number: dto.identity_number,
            status,
        })
    }
}
