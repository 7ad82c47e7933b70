//! # Repository Layer
//!
//! Repository implementations that encapsulate SeaORM operations for the
//! template store.

pub mod user;
pub mod whatsapp_template;

pub use user::{CreateUserRequest, UserRepository};
pub use whatsapp_template::{CreateWhatsappTemplateRequest, WhatsappTemplateRepository};
