pub mod application;
pub mod auth;
pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
