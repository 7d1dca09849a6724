pub mod canvas;
pub mod color;
pub mod dispatch;
pub mod engine;
pub mod fallback;
pub mod flow;
pub mod handlers;
pub mod normalize;
pub mod primitives;
pub mod templates;
pub mod text;

use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::models::{LayoutMode, ResumeContent, StudentIdentity};
use crate::render::templates::TemplateSpec;

pub use dispatch::dispatch;

/// Failures inside a template. Never reach the caller of
/// [`generate_resume_pdf`]; they become the error document instead.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document exceeds the {limit}-page limit")]
    PageLimit { limit: usize },

    #[error("PDF encoding failed: {0}")]
    Pdf(String),

    #[error("invalid page geometry: {0}")]
    Geometry(String),
}

/// One way of laying out a resume.
pub trait LayoutStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn render(
        &self,
        content: &ResumeContent,
        identity: &StudentIdentity,
        layout: LayoutMode,
    ) -> Result<Vec<u8>, RenderError>;
}

impl LayoutStrategy for TemplateSpec {
    fn name(&self) -> &str {
        self.name
    }

    fn render(
        &self,
        content: &ResumeContent,
        identity: &StudentIdentity,
        layout: LayoutMode,
    ) -> Result<Vec<u8>, RenderError> {
        engine::render_layout(self, content, identity, layout)
    }
}

/// Renders a resume and writes the PDF to `out`, which is flushed and dropped.
///
/// `resume_data` and `student_info` may be any JSON; see
/// [`normalize::normalize`]. Template and layout names are resolved leniently.
/// Rendering failures produce a one-page error document, so the only error
/// returned is `out` itself refusing the bytes.
pub fn generate_resume_pdf<W: Write>(
    resume_data: &Value,
    student_info: &Value,
    out: W,
    template: &str,
    layout: &str,
) -> io::Result<()> {
    render_with(dispatch(template), resume_data, student_info, out, layout)
}

/// [`generate_resume_pdf`] with an explicit strategy.
pub fn render_with<W: Write>(
    strategy: &dyn LayoutStrategy,
    resume_data: &Value,
    student_info: &Value,
    mut out: W,
    layout: &str,
) -> io::Result<()> {
    let (content, identity) = normalize::normalize(resume_data, student_info);
    let layout = LayoutMode::parse(layout);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| strategy.render(&content, &identity, layout)));
    let bytes = match outcome {
        Ok(Ok(bytes)) => {
            info!(template = strategy.name(), ?layout, bytes = bytes.len(), "resume rendered");
            bytes
        }
        Ok(Err(e)) => {
            error!(template = strategy.name(), error = %e, "resume render failed");
            fallback::error_document(&e.to_string())
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(template = strategy.name(), error = %message, "resume render panicked");
            fallback::error_document(&message)
        }
    };

    out.write_all(&bytes)?;
    out.flush()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "template panicked".to_string()
    }
}
