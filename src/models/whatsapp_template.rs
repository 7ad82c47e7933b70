//! # WhatsApp Template Model
//!
//! SeaORM entity for the `whatsapp_templates` table: a reusable message body
//! tagged with a category and tied to the user who created it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "whatsapp_templates")]
pub struct Model {
    /// Auto-incremented identifier (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display label
    pub name: String,

    /// Template category
    #[sea_orm(column_name = "type")]
    pub template_type: TemplateType,

    /// Message body
    #[sea_orm(column_type = "Text")]
    pub content: String,

    /// Creator, must reference an existing `users.id`
    pub created_by_id: i32,

    /// Defaults to true on creation
    pub is_active: bool,

    pub created_at: DateTimeWithTimeZone,

    /// Null until the template is first updated
    pub updated_at: Option<DateTimeWithTimeZone>,
}

/// Category of a WhatsApp template.
///
/// Stored and serialized as its SCREAMING_SNAKE_CASE name, e.g. `THANK_YOU`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateType {
    #[sea_orm(string_value = "THANK_YOU")]
    ThankYou,

    #[sea_orm(string_value = "REMINDER")]
    Reminder,

    #[sea_orm(string_value = "WELCOME")]
    Welcome,

    #[sea_orm(string_value = "FOLLOW_UP")]
    FollowUp,

    #[sea_orm(string_value = "PROMOTION")]
    Promotion,

    #[sea_orm(string_value = "CUSTOM")]
    Custom,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Public representation for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WhatsappTemplateResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Thank You Template")]
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    #[schema(example = "Thank you for your purchase!")]
    pub content: String,
    #[schema(example = 42)]
    pub created_by_id: i32,
    pub is_active: bool,
    #[schema(value_type = String, example = "2025-01-01T12:00:00Z")]
    pub created_at: DateTimeWithTimeZone,
    #[schema(value_type = Option<String>)]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

impl From<Model> for WhatsappTemplateResponse {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            template_type: model.template_type,
            content: model.content,
            created_by_id: model.created_by_id,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
