use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, UserProfile},
    service::user::UserService,
};

/// Password based authentication.
///
/// The service only checks credentials; storing the signed in user in the session is left
/// to the controller.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn sign_up(&self, params: CreateUserParams) -> Result<UserProfile, AppError> {
        UserService::new(self.db).create_user(params).await
    }

    /// Verifies an email and password pair.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the authenticated user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountInactive)` - Profile inactive or deleted
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<i32, AppError> {
        let credentials = match UserService::new(self.db)
            .get_profile_with_password(email)
            .await
        {
            Ok(credentials) => credentials,
            Err(AppError::NotFound(_)) => return Err(AuthError::InvalidCredentials.into()),
            Err(e) => return Err(e),
        };

        if !bcrypt::verify(password, &credentials.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !credentials.active {
            return Err(AuthError::AccountInactive(credentials.id).into());
        }

        tracing::info!("User {} signed in", credentials.id);

        Ok(credentials.id)
    }
}
