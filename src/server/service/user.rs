use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{role::RoleRepository, user::UserRepository, user_type::UserTypeRepository},
    error::{internal::InternalError, AppError},
    model::{
        role::RoleName,
        user::{
            CreateUserParams, NewUserRecord, UpdateUserParams, UserAccount, UserCredentials,
            UserField, UserProfile, UserSearchParams,
        },
        user_type::UserType,
    },
};

/// bcrypt cost used for new password hashes.
#[cfg(not(test))]
pub const PASSWORD_HASH_COST: u32 = bcrypt::DEFAULT_COST;
#[cfg(test)]
pub const PASSWORD_HASH_COST: u32 = 4;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a regular user with an active profile.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The created user, without password
    /// - `Err(AppError::BadRequest)` - Email already used
    /// - `Err(AppError::NotFound)` - Role `user` or the requested user type is missing
    pub async fn create_user(&self, params: CreateUserParams) -> Result<UserProfile, AppError> {
        if self
            .get_user_by_field(UserField::Email(params.email.clone()))
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "This email has already been used by another user.".to_string(),
            ));
        }

        let role = RoleRepository::new(self.db)
            .find_by_name(RoleName::User)
            .await?
            .ok_or_else(|| AppError::NotFound("Role user not found in database.".to_string()))?;

        let user_type = self.get_user_type_by_name(&params.user_type_name).await?;

        let password_hash = bcrypt::hash(&params.password, PASSWORD_HASH_COST)?;

        let txn = self.db.begin().await?;
        let user_id = UserRepository::new(&txn)
            .create(NewUserRecord {
                email: params.email,
                password_hash,
                role_id: role.id,
                user_type_id: user_type.id,
                profile: params.profile,
            })
            .await?;
        txn.commit().await?;

        tracing::info!("Created user {}", user_id);

        UserRepository::new(self.db)
            .find_profile_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "User",
                    id: user_id,
                }
                .into()
            })
    }

    /// Lists non-admin users matching the filters.
    pub async fn find_all(&self, params: UserSearchParams) -> Result<Vec<UserProfile>, AppError> {
        Ok(UserRepository::new(self.db).search(&params).await?)
    }

    /// Finds a user with a live profile by email.
    pub async fn find_one(&self, email: &str) -> Result<Option<UserProfile>, AppError> {
        Ok(UserRepository::new(self.db)
            .find_profile_by_email(email)
            .await?)
    }

    /// Deactivates a user and returns the remaining users.
    ///
    /// # Returns
    /// - `Ok(Vec<UserProfile>)` - Users still visible after the removal
    /// - `Err(AppError::NotFound)` - No live user with this id
    pub async fn delete_user(&self, user_id: i32) -> Result<Vec<UserProfile>, AppError> {
        self.get_profile_by_user_id(user_id).await?;

        UserRepository::new(self.db).deactivate(user_id).await?;

        tracing::info!("Deactivated user {}", user_id);

        self.find_all(UserSearchParams::default()).await
    }

    pub async fn get_profile_by_user_id(&self, user_id: i32) -> Result<UserProfile, AppError> {
        UserRepository::new(self.db)
            .find_profile_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found.", user_id)))
    }

    /// Applies a partial update and returns the refreshed user.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Updated user
    /// - `Err(AppError::NotFound)` - No live user with this id
    /// - `Err(AppError::BadRequest)` - Nothing to update, or the new email belongs to someone else
    pub async fn update_user(
        &self,
        user_id: i32,
        params: UpdateUserParams,
    ) -> Result<UserProfile, AppError> {
        self.get_profile_by_user_id(user_id).await?;

        if params.is_empty() {
            return Err(AppError::BadRequest(
                "Provide at least one field to update.".to_string(),
            ));
        }

        if let Some(email) = &params.email {
            if UserRepository::new(self.db)
                .email_taken(email, Some(user_id))
                .await?
            {
                return Err(AppError::BadRequest(
                    "This email has already been used by another user.".to_string(),
                ));
            }
        }

        let txn = self.db.begin().await?;
        UserRepository::new(&txn).update(user_id, &params).await?;
        txn.commit().await?;

        self.get_profile_by_user_id(user_id).await
    }

    /// Loads the password hash for sign-in.
    ///
    /// # Returns
    /// - `Ok(UserCredentials)` - Credentials of the account
    /// - `Err(AppError::NotFound)` - No account with this email
    pub async fn get_profile_with_password(&self, email: &str) -> Result<UserCredentials, AppError> {
        UserRepository::new(self.db)
            .find_credentials(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email '{}' not found.", email)))
    }

    pub async fn get_user_type_by_name(&self, type_name: &str) -> Result<UserType, AppError> {
        UserTypeRepository::new(self.db)
            .find_by_name(type_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Type '{}' not found in database.", type_name)))
    }

    /// Looks an account up by id or email.
    pub async fn get_user_by_field(&self, field: UserField) -> Result<Option<UserAccount>, AppError> {
        let repo = UserRepository::new(self.db);

        let account = match field {
            UserField::Id(id) => repo.find_by_id(id).await?,
            UserField::Email(email) => repo.find_by_email(&email).await?,
        };

        Ok(account)
    }
}
