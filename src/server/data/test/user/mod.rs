use crate::server::{data::user::UserRepository, model::user::UserSearchParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_credentials;
mod find_owners;
mod search;
