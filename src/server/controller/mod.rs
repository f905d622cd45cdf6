//! HTTP handlers.

pub mod auth;
pub mod resource;

use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections render as `AppError::BadRequest`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Payload<T>(pub T);

#[cfg(test)]
mod test;
