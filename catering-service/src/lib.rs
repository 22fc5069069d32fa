//! Catering Service - content API for the catering marketing website.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, ApiDoc, AppState, Application};
