//! Reference data seeder.
//!
//! Inserts roles, user types, the administrator account, pricing configuration and room
//! types. Each record is only inserted when missing, so running the seeder again leaves the
//! database unchanged. Everything happens in one transaction that is rolled back on error.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    config::Config,
    data::{
        configuration::ConfigurationRepository, role::RoleRepository,
        room_type::RoomTypeRepository, user::UserRepository, user_type::UserTypeRepository,
    },
    error::{config::ConfigError, AppError},
    model::{
        pricing::{PricingRules, MAX_GUESTS_PER_ROOM, SURCHARGE_GUEST_THRESHOLD, SURCHARGE_RATE},
        role::RoleName,
        room_type::CreateRoomTypeParams,
        user::{NewProfile, NewUserRecord},
        user_type,
    },
    service::user::PASSWORD_HASH_COST,
};

const USER_TYPES: &[(&str, f64, &str)] = &[
    (user_type::LOCAL, 1.0, "Guest holding a local identity document"),
    (user_type::FOREIGN, 1.5, "Guest holding a foreign identity document"),
];

const ROOM_TYPES: &[(&str, f64, &str)] = &[
    ("A", 150_000.0, "Standard room"),
    ("B", 170_000.0, "Superior room"),
    ("C", 200_000.0, "Deluxe room"),
];

/// Administrator account settings used when no administrator exists yet.
#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub admin_email: String,
    pub admin_password: Option<String>,
}

impl SeedOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            admin_email: config.admin_email.clone(),
            admin_password: config.admin_password.clone(),
        }
    }
}

pub struct SeederService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeederService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds all reference data.
    ///
    /// # Returns
    /// - `Ok(())` - Seeding committed
    /// - `Err(AppError::ConfigErr)` - Administrator must be created but no password is set
    /// - `Err(AppError::BadRequest)` - Administrator email is used by a non-admin account
    /// - `Err(AppError)` - Any other failure, nothing was written
    pub async fn run(&self, options: &SeedOptions) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        match seed(&txn, options).await {
            Ok(()) => {
                txn.commit().await?;
                tracing::info!("Seeding finished successfully.");
                Ok(())
            }
            Err(err) => {
                tracing::error!("Seeding failed, rolling back: {}", err);
                txn.rollback().await?;
                Err(err)
            }
        }
    }
}

async fn seed(txn: &DatabaseTransaction, options: &SeedOptions) -> Result<(), AppError> {
    tracing::info!("Seeding roles...");
    seed_roles(txn).await?;

    tracing::info!("Seeding user types...");
    seed_user_types(txn).await?;

    tracing::info!("Seeding administrator...");
    seed_admin(txn, options).await?;

    tracing::info!("Seeding configurations...");
    seed_configurations(txn).await?;

    tracing::info!("Seeding room types...");
    seed_room_types(txn).await?;

    Ok(())
}

async fn seed_roles(txn: &DatabaseTransaction) -> Result<(), AppError> {
    let repo = RoleRepository::new(txn);

    for role in RoleName::ALL {
        if repo.find_by_name(role).await?.is_none() {
            let description = match role {
                RoleName::Admin => "Hotel staff with full access",
                RoleName::User => "Hotel guest",
            };
            repo.create(role, Some(description.to_string())).await?;
        }
    }

    Ok(())
}

async fn seed_user_types(txn: &DatabaseTransaction) -> Result<(), AppError> {
    let repo = UserTypeRepository::new(txn);

    for (type_name, surcharge_factor, description) in USER_TYPES {
        if repo.find_by_name(type_name).await?.is_none() {
            repo.create(type_name, *surcharge_factor, Some(description.to_string()))
                .await?;
        }
    }

    Ok(())
}

async fn seed_admin(txn: &DatabaseTransaction, options: &SeedOptions) -> Result<(), AppError> {
    let admin_role = RoleRepository::new(txn)
        .find_by_name(RoleName::Admin)
        .await?
        .ok_or_else(|| AppError::NotFound("Admin role not found in database.".to_string()))?;

    let user_repo = UserRepository::new(txn);
    if user_repo.exists_with_role(admin_role.id).await? {
        return Ok(());
    }

    if user_repo.email_taken(&options.admin_email, None).await? {
        return Err(AppError::BadRequest(format!(
            "Email '{}' is already used by a non-admin account.",
            options.admin_email
        )));
    }

    let password = options
        .admin_password
        .as_deref()
        .ok_or_else(|| ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()))?;

    let local = UserTypeRepository::new(txn)
        .find_by_name(user_type::LOCAL)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("User type local not found in database.".to_string())
        })?;

    let password_hash = bcrypt::hash(password, PASSWORD_HASH_COST)?;

    let user_id = user_repo
        .create(NewUserRecord {
            email: options.admin_email.clone(),
            password_hash,
            role_id: admin_role.id,
            user_type_id: local.id,
            profile: NewProfile {
                full_name: "Administrator".to_string(),
                nationality: "local".to_string(),
                dob: NaiveDate::default(),
                phone_number: String::new(),
                address: String::new(),
                identity_number: String::new(),
            },
        })
        .await?;

    tracing::info!("Created administrator {} ({})", options.admin_email, user_id);

    Ok(())
}

async fn seed_configurations(txn: &DatabaseTransaction) -> Result<(), AppError> {
    let repo = ConfigurationRepository::new(txn);
    let defaults = PricingRules::default();

    for (config_name, config_value) in [
        (MAX_GUESTS_PER_ROOM, defaults.max_guests_per_room),
        (SURCHARGE_GUEST_THRESHOLD, defaults.surcharge_guest_threshold),
        (SURCHARGE_RATE, defaults.surcharge_rate),
    ] {
        if repo.find_by_name(config_name).await?.is_none() {
            repo.create(config_name, config_value).await?;
        }
    }

    Ok(())
}

async fn seed_room_types(txn: &DatabaseTransaction) -> Result<(), AppError> {
    let repo = RoomTypeRepository::new(txn);

    for (name, room_price, description) in ROOM_TYPES {
        if !repo.name_taken(name, None).await? {
            repo.create(CreateRoomTypeParams {
                name: name.to_string(),
                room_price: *room_price,
                description: Some(description.to_string()),
            })
            .await?;
        }
    }

    Ok(())
}
