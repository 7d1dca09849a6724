use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::dispatch::{aliases, catalogue, AliasInfo, TemplateInfo};
use crate::render::{dispatch, generate_resume_pdf};
use crate::state::AppState;

const DEFAULT_TEMPLATE: &str = "classic";
const DEFAULT_LAYOUT: &str = "single-column";

/// Body of `POST /api/v1/resumes/pdf`.
///
/// Every field is optional and may hold any JSON. A `template` or `layout`
/// that is missing, null or not a string falls back to the default.
#[derive(Debug, Deserialize)]
pub struct RenderPdfRequest {
    #[serde(default, alias = "resumeData")]
    pub resume_data: Value,
    #[serde(default, alias = "studentInfo")]
    pub student_info: Value,
    #[serde(default)]
    pub template: Value,
    #[serde(default)]
    pub layout: Value,
}

impl RenderPdfRequest {
    pub fn template_key(&self) -> &str {
        self.template.as_str().unwrap_or(DEFAULT_TEMPLATE)
    }

    pub fn layout_key(&self) -> &str {
        self.layout.as_str().unwrap_or(DEFAULT_LAYOUT)
    }
}

#[derive(Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateInfo>,
    pub aliases: Vec<AliasInfo>,
    pub default: &'static str,
}

/// POST /api/v1/resumes/pdf
pub async fn handle_render_pdf(
    State(state): State<AppState>,
    payload: Result<Json<RenderPdfRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let render_id = Uuid::new_v4();
    let spec = dispatch(req.template_key());
    let span = tracing::info_span!("render_pdf", %render_id, template = spec.name);
    let filename = attachment_name(&req.student_info, spec.name);

    let _permit = state
        .render_slots
        .acquire()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render queue closed: {e}")))?;

    let bytes = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        let mut out = Vec::new();
        // The canonical name resolves without a second unknown-template warning.
        generate_resume_pdf(&req.resume_data, &req.student_info, &mut out, spec.name, req.layout_key())
            .map(|()| out)
    })
    .instrument(tracing::info_span!("render_wait", %render_id))
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))?
    .map_err(|e| AppError::Internal(anyhow::anyhow!("writing PDF buffer: {e}")))?;

    info!(%render_id, bytes = bytes.len(), "PDF ready");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(bytes),
    )
        .into_response())
}

/// GET /api/v1/resumes/templates
pub async fn handle_list_templates() -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: catalogue(),
        aliases: aliases(),
        default: DEFAULT_TEMPLATE,
    })
}

/// `<name>-<template>-resume.pdf` with the name reduced to a safe slug.
fn attachment_name(student_info: &Value, template: &str) -> String {
    let name = student_info.get("name").and_then(Value::as_str).unwrap_or_default();
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "student" } else { slug };
    format!("{slug}-{template}-resume.pdf")
}
