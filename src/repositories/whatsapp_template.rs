//! # WhatsApp Template Repository
//!
//! Persists new templates and reads them back by id or by creator.

use crate::error::RepositoryError;
use crate::models::whatsapp_template::{
    ActiveModel as WhatsappTemplateActiveModel, Column, Entity as WhatsappTemplate,
    Model as WhatsappTemplateModel, TemplateType,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

const MAX_NAME_LEN: usize = 255;

/// Fields a caller supplies when creating a template.
///
/// `is_active`, `created_at` and `updated_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct CreateWhatsappTemplateRequest {
    pub name: String,
    pub template_type: TemplateType,
    pub content: String,
    pub created_by_id: i32,
}

/// Repository for WhatsApp template database operations
pub struct WhatsappTemplateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WhatsappTemplateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new template and return the persisted row.
    ///
    /// The insert is a single statement: either the full row is stored and
    /// returned, or nothing is written. A `created_by_id` that does not match
    /// a user fails with [`RepositoryError::ConstraintViolation`].
    pub async fn create(
        &self,
        request: CreateWhatsappTemplateRequest,
    ) -> Result<WhatsappTemplateModel, RepositoryError> {
        validate_name(&request.name)?;

        let created_by_id = request.created_by_id;
        let template = WhatsappTemplateActiveModel {
            id: NotSet,
            name: Set(request.name),
            template_type: Set(request.template_type),
            content: Set(request.content),
            created_by_id: Set(created_by_id),
            is_active: Set(true),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
        };

        let created = template.insert(self.db).await.map_err(|err| {
            let error = RepositoryError::database_error(err);
            tracing::error!(
                created_by_id,
                error = %error,
                "Failed to create WhatsApp template"
            );
            error
        })?;

        tracing::info!(
            template_id = created.id,
            created_by_id,
            template_type = ?created.template_type,
            "Created WhatsApp template"
        );

        Ok(created)
    }

    /// Get a template by id
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<WhatsappTemplateModel>, RepositoryError> {
        WhatsappTemplate::find_by_id(id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// All templates created by the given user, oldest first.
    pub async fn list_by_creator(
        &self,
        created_by_id: i32,
    ) -> Result<Vec<WhatsappTemplateModel>, RepositoryError> {
        WhatsappTemplate::find()
            .filter(Column::CreatedById.eq(created_by_id))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }
}

fn validate_name(name: &str) -> Result<(), RepositoryError> {
    if name.trim().is_empty() {
        return Err(RepositoryError::validation_error(
            "Template name cannot be empty",
        ));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(RepositoryError::validation_error(format!(
            "Template name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }

    Ok(())
}
