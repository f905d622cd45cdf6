use crate::server::{
    data::reference::{require, require_all, unique, Reference},
    error::AppError,
};
use test_utils::{builder::TestBuilder, factory};

mod load;
mod require;
