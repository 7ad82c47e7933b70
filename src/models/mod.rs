//! # Data Models
//!
//! SeaORM entities for the template store plus the small response types shared
//! by the HTTP layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod user;
pub mod whatsapp_template;

pub use user::Entity as User;
pub use whatsapp_template::{Entity as WhatsappTemplate, TemplateType, WhatsappTemplateResponse};

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "whatsapp-templates".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
