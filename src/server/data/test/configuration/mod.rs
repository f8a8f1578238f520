use crate::server::data::configuration::ConfigurationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_name;
