//! Server-side API backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and status codes
//! - **Service Layer** (`service/`) - Transaction boundaries and orchestration
//! - **Data Layer** (`data/`) - Query filters, reference loading and account queries
//! - **Kind Layer** (`kind/`) - Per-resource metadata plugged into the generic CRUD engine
//! - **Model Layer** (`model/`) - Service parameters and the authenticated caller
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database connection, migrations and CORS
//! - **Router** (`router`) - Route table for every resource kind
//!
//! # Request Flow
//!
//! 1. **Router** dispatches to the generic resource controller for the kind
//! 2. **Middleware** resolves the bearer token to a caller
//! 3. **Controller** hands the payload or query to the service
//! 4. **Service** opens a transaction and calls the kind's hooks
//! 5. **Kind** resolves references, writes rows and renders nested DTOs
//! 6. **Controller** returns the DTO with the operation's status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod kind;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
