use crate::server::{
    data::account::AccountRepository,
    error::AppError,
    model::auth::{LoginParams, RegisterParams, DUPLICATE_IDENTITY},
    service::auth::{duplicate_identity, AuthService},
    util::password::hash_password,
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod register;

fn register_params(username: &str, email: &str) -> RegisterParams {
    RegisterParams {
        email: email.to_string(),
        first_name: "Erza".to_string(),
        last_name: "Smith".to_string(),
        username: username.to_string(),
        password: "lantern-oil".to_string(),
        is_game_master: false,
        company_name: "Hooded Knight LLC".to_string(),
        phone_number: "555-0199".to_string(),
    }
}
