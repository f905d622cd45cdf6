use crate::server::{
    data::account::{AccountIdentity, AccountRepository},
    model::auth::RegisterParams,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_token;
mod identity_taken;
mod token_for;
mod update_identity;

fn register_params(username: &str, email: &str) -> RegisterParams {
    RegisterParams {
        email: email.to_string(),
        first_name: "Allister".to_string(),
        last_name: "Lantern".to_string(),
        username: username.to_string(),
        password: "unused".to_string(),
        is_game_master: true,
        company_name: "White Lion Co".to_string(),
        phone_number: "555-0100".to_string(),
    }
}
