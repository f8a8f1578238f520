use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{UserAccount, UserField},
    service::user::UserService,
};

pub enum Permission {
    /// Caller must have the `admin` role.
    Admin,
    /// Caller must be the given user or an administrator.
    SelfOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the signed-in user and checks every permission.
    ///
    /// # Returns
    /// - `Ok(UserAccount)` - The signed-in user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is signed in
    /// - `Err(AuthError::UserNotInDatabase)` - The session points at a missing or deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<UserAccount, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let users = UserService::new(self.db);

        let Some(user) = users.get_user_by_field(UserField::Id(user_id)).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        // Deleted accounts keep their row but lose their live profile.
        if users.find_one(&user.email).await?.is_none() {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin only action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(owner_id) => {
                    if !user.can_access(*owner_id) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User attempted to access account {}", owner_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
