//! Database migrations for the WhatsApp template store.
//!
//! Applied in order by [`Migrator`]; `users` precedes `whatsapp_templates`
//! because of the `created_by_id` foreign key.

pub use sea_orm_migration::prelude::*;

mod m2025_10_17_000001_create_users;
mod m2025_10_17_000002_create_whatsapp_templates;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_10_17_000001_create_users::Migration),
            Box::new(m2025_10_17_000002_create_whatsapp_templates::Migration),
        ]
    }
}
