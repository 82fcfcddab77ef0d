//! Simple variable substitution renderer.
//!
//! Understands the one EJS construct the generator templates use,
//! `<%= name %>`, where `name` is looked up in the [`RenderContext`].
//! Everything outside a tag is copied through untouched.

use geddy_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::GeddyResult,
};
use tracing::instrument;

const OPEN: &str = "<%=";
const CLOSE: &str = "%>";

/// Simple renderer using basic variable substitution.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(len = text.len()))]
    fn render(&self, text: &str, context: &RenderContext) -> GeddyResult<String> {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let end = after_open.find(CLOSE).ok_or_else(|| {
                ApplicationError::RenderingFailed {
                    reason: format!("unterminated '{}' tag", OPEN),
                }
            })?;

            let name = after_open[..end].trim();
            let value = context.get(name).ok_or_else(|| ApplicationError::RenderingFailed {
                reason: format!("unknown template variable '{}'", name),
            })?;
            out.push_str(value);

            rest = &after_open[end + CLOSE.len()..];
        }

        out.push_str(rest);
        Ok(out)
    }
}
