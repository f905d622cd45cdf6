use crate::server::data::link::{load_links, replace_links};
use sea_orm::{ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};
