//! # WhatsApp Templates Library
//!
//! Persistence and HTTP surface for reusable WhatsApp message templates,
//! each tied to the user who created it.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod server;
pub mod telemetry;
pub use migration;
