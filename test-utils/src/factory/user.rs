//! User factory for creating accounts together with their profile.

use crate::factory::{helpers::next_id, role, user_type};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Plain-text password every factory user is created with.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("guest@hotel.test")
///     .user_type("foreign")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password: String,
    full_name: String,
    address: String,
    identity_number: String,
    status: String,
    role_name: String,
    type_name: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@hotel.test"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - full_name: `"Guest {id}"`
    /// - role: `user`, type: `local`, profile status: `active`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@hotel.test", id),
            password: DEFAULT_PASSWORD.to_string(),
            full_name: format!("Guest {}", id),
            address: format!("{} Harbour Street", id),
            identity_number: format!("ID{:08}", id),
            status: "active".to_string(),
            role_name: role::USER.to_string(),
            type_name: user_type::LOCAL.to_string(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn identity_number(mut self, identity_number: impl Into<String>) -> Self {
        self.identity_number = identity_number.into();
        self
    }

    /// Sets the profile status (`active` or `inactive`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Gives the user the `admin` role.
    pub fn admin(mut self) -> Self {
        self.role_name = role::ADMIN.to_string();
        self
    }

    /// Sets the user type by name (`local` or `foreign`).
    pub fn user_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Builds and inserts the profile and user rows.
    ///
    /// Looks up or creates the role and user type first. The password is hashed with the
    /// minimum bcrypt cost to keep tests fast.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert, or hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let role = role::find_or_create_role(self.db, &self.role_name).await?;
        let user_type = user_type::find_or_create_user_type(self.db, &self.type_name).await?;

        let now = Utc::now();
        let profile = entity::profile::ActiveModel {
            full_name: ActiveValue::Set(self.full_name),
            nationality: ActiveValue::Set("Vietnam".to_string()),
            status: ActiveValue::Set(self.status),
            dob: ActiveValue::Set(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default()),
            phone_number: ActiveValue::Set("0900000000".to_string()),
            address: ActiveValue::Set(self.address),
            identity_number: ActiveValue::Set(self.identity_number),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let password = bcrypt::hash(&self.password, 4).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(password),
            profile_id: ActiveValue::Set(profile.id),
            role_id: ActiveValue::Set(role.id),
            user_type_id: ActiveValue::Set(user_type.id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular local guest with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an administrator with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin().build().await
}
