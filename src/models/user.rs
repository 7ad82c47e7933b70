//! User entity model
//!
//! Users are the creators referenced by `whatsapp_templates.created_by_id`.

use sea_orm::entity::prelude::*;

/// User entity owning WhatsApp templates
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Auto-incremented identifier (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name
    pub name: String,

    /// Unique email address
    #[sea_orm(unique)]
    pub email: String,

    /// Timestamp when the user was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::whatsapp_template::Entity")]
    WhatsappTemplates,
}

impl Related<super::whatsapp_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WhatsappTemplates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
