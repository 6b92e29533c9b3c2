//! Course service: AI-generated lessons and hand-assembled learning modules.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
