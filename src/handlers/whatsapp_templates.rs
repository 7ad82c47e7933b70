//! # WhatsApp Templates API Handlers
//!
//! Create a template, fetch one by id, and list a user's templates.

use crate::error::{ApiError, RepositoryError, validation_error};
use crate::models::{TemplateType, WhatsappTemplateResponse};
use crate::repositories::{CreateWhatsappTemplateRequest, WhatsappTemplateRepository};
use crate::server::AppState;
use crate::telemetry;
use axum::{
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const TEMPLATES_PATH: &str = "/api/v1/whatsapp-templates";

/// Request payload for creating a WhatsApp template
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateWhatsappTemplateDto {
    /// Display label (required, max 255 characters)
    #[schema(example = "Thank You Template")]
    pub name: String,
    /// Template category
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    /// Message body
    #[schema(example = "Thank you for your purchase!")]
    pub content: String,
    /// Id of the user creating the template
    #[schema(example = 42)]
    pub created_by_id: i32,
}

impl From<CreateWhatsappTemplateDto> for CreateWhatsappTemplateRequest {
    fn from(dto: CreateWhatsappTemplateDto) -> Self {
        Self {
            name: dto.name,
            template_type: dto.template_type,
            content: dto.content,
            created_by_id: dto.created_by_id,
        }
    }
}

/// Query parameters for listing templates
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListWhatsappTemplatesQuery {
    /// Only templates created by this user
    pub created_by_id: i32,
}

/// List response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WhatsappTemplateListResponse {
    pub data: Vec<WhatsappTemplateResponse>,
}

/// Create a new WhatsApp template
#[utoipa::path(
    post,
    path = "/api/v1/whatsapp-templates",
    request_body = CreateWhatsappTemplateDto,
    responses(
        (status = 201, description = "Template created", body = WhatsappTemplateResponse, headers(
            ("Location", description = "URL of the created template"),
            ("X-Trace-Id", description = "Trace identifier for request correlation")
        )),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 422, description = "Creator does not reference an existing user", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "whatsapp-templates"
)]
pub async fn create_whatsapp_template(
    State(state): State<AppState>,
    payload: Result<Json<CreateWhatsappTemplateDto>, JsonRejection>,
) -> Result<
    (
        StatusCode,
        [(&'static str, String); 2],
        Json<WhatsappTemplateResponse>,
    ),
    ApiError,
> {
    let Json(request) = payload?;

    let repo = WhatsappTemplateRepository::new(&state.db);
    let template = repo.create(request.into()).await.map_err(|err| {
        let api_err = ApiError::from(err);
        if api_err.status.is_server_error() {
            tracing::error!(code = %api_err.code, "Template creation failed");
        }
        api_err
    })?;

    let location = format!("{TEMPLATES_PATH}/{}", template.id);
    let trace_id = telemetry::current_trace_id().unwrap_or_default();

    Ok((
        StatusCode::CREATED,
        [("Location", location), ("X-Trace-Id", trace_id)],
        Json(template.into()),
    ))
}

/// Get a WhatsApp template by id
#[utoipa::path(
    get,
    path = "/api/v1/whatsapp-templates/{id}",
    params(
        ("id" = i32, Path, description = "Template id")
    ),
    responses(
        (status = 200, description = "Template found", body = WhatsappTemplateResponse),
        (status = 400, description = "Invalid id", body = ApiError),
        (status = 404, description = "Template not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "whatsapp-templates"
)]
pub async fn get_whatsapp_template(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<WhatsappTemplateResponse>, ApiError> {
    let Path(id) = id?;

    let repo = WhatsappTemplateRepository::new(&state.db);
    let template = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(format!("WhatsApp template {id} not found")))?;

    Ok(Json(template.into()))
}

/// List the templates created by one user
#[utoipa::path(
    get,
    path = "/api/v1/whatsapp-templates",
    params(ListWhatsappTemplatesQuery),
    responses(
        (status = 200, description = "Templates created by the user", body = WhatsappTemplateListResponse),
        (status = 400, description = "Missing or invalid created_by_id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "whatsapp-templates"
)]
pub async fn list_whatsapp_templates(
    State(state): State<AppState>,
    query: Result<Query<ListWhatsappTemplatesQuery>, QueryRejection>,
) -> Result<Json<WhatsappTemplateListResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        validation_error(
            "created_by_id query parameter is required",
            serde_json::json!({
                "field": "created_by_id",
                "message": rejection.body_text(),
            }),
        )
    })?;

    let repo = WhatsappTemplateRepository::new(&state.db);
    let templates = repo.list_by_creator(query.created_by_id).await?;

    Ok(Json(WhatsappTemplateListResponse {
        data: templates.into_iter().map(Into::into).collect(),
    }))
}
