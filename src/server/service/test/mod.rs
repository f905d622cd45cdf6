mod auth;
mod resource;
