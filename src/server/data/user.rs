//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing accounts and their profiles.
//! Accounts are never deleted; removing a user deactivates and soft-deletes the profile,
//! which hides the user from every profile read.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        booking::BookingOwner,
        role::RoleName,
        user::{
            NewUserRecord, Profile, ProfileStatus, UpdateUserParams, UserAccount, UserCredentials,
            UserProfile, UserSearchParams,
        },
    },
    util::search::contains_ignore_case,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection pool or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active profile followed by the account pointing at it.
    ///
    /// # Arguments
    /// - `record` - Account data with an already hashed password
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the created user
    /// - `Err(DbErr)` - Database error during insert, e.g. duplicate email
    pub async fn create(&self, record: NewUserRecord) -> Result<i32, DbErr> {
        let now = Utc::now();

        let profile = entity::profile::ActiveModel {
            full_name: ActiveValue::Set(record.profile.full_name),
            nationality: ActiveValue::Set(record.profile.nationality),
            status: ActiveValue::Set(ProfileStatus::Active.as_str().to_string()),
            dob: ActiveValue::Set(record.profile.dob),
            phone_number: ActiveValue::Set(record.profile.phone_number),
            address: ActiveValue::Set(record.profile.address),
            identity_number: ActiveValue::Set(record.profile.identity_number),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(record.email),
            password: ActiveValue::Set(record.password_hash),
            profile_id: ActiveValue::Set(profile.id),
            role_id: ActiveValue::Set(record.role_id),
            user_type_id: ActiveValue::Set(record.user_type_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(user.id)
    }

    /// Finds an account by id together with its role.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<UserAccount>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        self.into_account(user).await.map(Some)
    }

    /// Finds an account by email together with its role.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, DbErr> {
        let Some(user) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.into_account(user).await.map(Some)
    }

    /// Checks whether an email is used by any account other than `excluding`.
    pub async fn email_taken(&self, email: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = excluding {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether any account has the given role.
    pub async fn exists_with_role(&self, role_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::RoleId.eq(role_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a user with a live profile by user id.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - User with profile, role name and type name
    /// - `Ok(None)` - No such user, or the profile was deleted
    /// - `Err(DbErr)` - Database error
    pub async fn find_profile_by_user_id(&self, id: i32) -> Result<Option<UserProfile>, DbErr> {
        let rows = entity::prelude::User::find_by_id(id)
            .find_also_related(entity::prelude::Profile)
            .filter(entity::profile::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(self.into_user_profiles(rows).await?.into_iter().next())
    }

    /// Finds a user with a live profile by email.
    pub async fn find_profile_by_email(&self, email: &str) -> Result<Option<UserProfile>, DbErr> {
        let rows = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .find_also_related(entity::prelude::Profile)
            .filter(entity::profile::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(self.into_user_profiles(rows).await?.into_iter().next())
    }

    /// Lists non-admin users matching the filters, ordered by id.
    ///
    /// Only live profiles are listed, except when filtering on `inactive`: deactivated
    /// accounts are soft-deleted, so that filter looks at deleted profiles too.
    pub async fn search(&self, params: &UserSearchParams) -> Result<Vec<UserProfile>, DbErr> {
        let mut query = entity::prelude::User::find()
            .find_also_related(entity::prelude::Profile)
            .order_by_asc(entity::user::Column::Id);

        if params.status != Some(ProfileStatus::Inactive) {
            query = query.filter(entity::profile::Column::DeletedAt.is_null());
        }

        if let Some(address) = &params.address {
            query = contains_ignore_case(query, r#""profile"."address""#, address);
        }
        if let Some(email) = &params.email {
            query = contains_ignore_case(query, r#""user"."email""#, email);
        }
        if let Some(full_name) = &params.full_name {
            query = contains_ignore_case(query, r#""profile"."full_name""#, full_name);
        }
        if let Some(identity_number) = &params.identity_number {
            query = contains_ignore_case(query, r#""profile"."identity_number""#, identity_number);
        }
        if let Some(status) = params.status {
            query = query.filter(entity::profile::Column::Status.eq(status.as_str()));
        }

        let users = self.into_user_profiles(query.all(self.db).await?).await?;

        Ok(users
            .into_iter()
            .filter(|user| user.role_name != RoleName::Admin.as_str())
            .collect())
    }

    /// Loads what sign-in needs to check a password, including inactive accounts.
    pub async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, DbErr> {
        let Some((user, profile)) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .find_also_related(entity::prelude::Profile)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let active = profile.is_some_and(|profile| {
            profile.deleted_at.is_none() && profile.status == ProfileStatus::Active.as_str()
        });

        let account = self.into_account(user.clone()).await?;

        Ok(Some(UserCredentials {
            id: user.id,
            email: user.email,
            role: account.role,
            password_hash: user.password,
            active,
        }))
    }

    /// Applies a partial update. Email goes to the account, everything else to the profile.
    ///
    /// # Returns
    /// - `Ok(())` - Update applied
    /// - `Err(DbErr::RecordNotFound)` - User or profile does not exist
    pub async fn update(&self, id: i32, params: &UpdateUserParams) -> Result<(), DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User {} not found", id)))?;
        let now = Utc::now();
        let profile_id = user.profile_id;

        if let Some(email) = &params.email {
            let mut active = user.into_active_model();
            active.email = ActiveValue::Set(email.clone());
            active.updated_at = ActiveValue::Set(now);
            active.update(self.db).await?;
        }

        if !params.touches_profile() {
            return Ok(());
        }

        let profile = entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Profile {} not found", profile_id)))?;

        let mut active = profile.into_active_model();
        if let Some(full_name) = &params.full_name {
            active.full_name = ActiveValue::Set(full_name.clone());
        }
        if let Some(nationality) = &params.nationality {
            active.nationality = ActiveValue::Set(nationality.clone());
        }
        if let Some(dob) = params.dob {
            active.dob = ActiveValue::Set(dob);
        }
        if let Some(phone_number) = &params.phone_number {
            active.phone_number = ActiveValue::Set(phone_number.clone());
        }
        if let Some(address) = &params.address {
            active.address = ActiveValue::Set(address.clone());
        }
        if let Some(identity_number) = &params.identity_number {
            active.identity_number = ActiveValue::Set(identity_number.clone());
        }
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(())
    }

    /// Marks the user's profile `inactive` and soft-deletes it.
    pub async fn deactivate(&self, id: i32) -> Result<(), DbErr> {
        let Some((_, Some(profile))) = entity::prelude::User::find_by_id(id)
            .find_also_related(entity::prelude::Profile)
            .one(self.db)
            .await?
        else {
            return Err(DbErr::RecordNotFound(format!("Profile of user {} not found", id)));
        };

        let now = Utc::now();
        let mut active = profile.into_active_model();
        active.status = ActiveValue::Set(ProfileStatus::Inactive.as_str().to_string());
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(())
    }

    /// Builds owner summaries keyed by user id, used to decorate bookings for admins.
    pub async fn find_owners(&self, ids: Vec<i32>) -> Result<HashMap<i32, BookingOwner>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::Profile)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(user, profile)| {
                let owner = BookingOwner {
                    id: user.id,
                    email: user.email,
                    full_name: profile.map(|p| p.full_name).unwrap_or_default(),
                };
                (owner.id, owner)
            })
            .collect())
    }

    async fn into_account(&self, user: entity::user::Model) -> Result<UserAccount, DbErr> {
        let role = entity::prelude::Role::find_by_id(user.role_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Role {} not found", user.role_id)))?;

        let role = RoleName::parse(&role.role_name)
            .ok_or_else(|| DbErr::Custom(format!("Unknown role '{}'", role.role_name)))?;

        Ok(UserAccount {
            id: user.id,
            email: user.email,
            role,
            profile_id: user.profile_id,
            user_type_id: user.user_type_id,
        })
    }

    /// Joins role and type names onto user rows, loading each table in one query.
    async fn into_user_profiles(
        &self,
        rows: Vec<(entity::user::Model, Option<entity::profile::Model>)>,
    ) -> Result<Vec<UserProfile>, DbErr> {
        let role_ids: HashSet<i32> = rows.iter().map(|(user, _)| user.role_id).collect();
        let type_ids: HashSet<i32> = rows.iter().map(|(user, _)| user.user_type_id).collect();

        let roles: HashMap<i32, String> = entity::prelude::Role::find()
            .filter(entity::role::Column::Id.is_in(role_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|role| (role.id, role.role_name))
            .collect();

        let types: HashMap<i32, String> = entity::prelude::UserType::find()
            .filter(entity::user_type::Column::Id.is_in(type_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user_type| (user_type.id, user_type.type_name))
            .collect();

        rows.into_iter()
            .filter_map(|(user, profile)| profile.map(|profile| (user, profile)))
            .map(|(user, profile)| {
                Ok(UserProfile {
                    id: user.id,
                    email: user.email,
                    role_name: roles.get(&user.role_id).cloned().unwrap_or_default(),
                    type_name: types.get(&user.user_type_id).cloned().unwrap_or_default(),
                    profile: Profile::from_entity(profile)?,
                })
            })
            .collect()
    }
}
