//! In-memory drivers and videos API
//!
//! Library exports used by the server binary and the integration tests.

pub mod config;
pub mod database;
pub mod error;
pub mod handler;
pub mod mapper;
pub mod model;
pub mod route;
pub mod validation;
