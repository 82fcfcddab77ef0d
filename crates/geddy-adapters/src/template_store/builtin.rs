//! Templates compiled into the binary.

use geddy_core::{application::ports::TemplateStore, domain::TemplateKind, error::GeddyResult};

const RESOURCE_MODEL: &str = include_str!("../../templates/resource_model.ejs");
const RESOURCE_CONTROLLER: &str = include_str!("../../templates/resource_controller.ejs");

/// The stock model and controller templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Template text without going through the port.
    pub fn text(kind: TemplateKind) -> &'static str {
        match kind {
            TemplateKind::ResourceModel => RESOURCE_MODEL,
            TemplateKind::ResourceController => RESOURCE_CONTROLLER,
        }
    }
}

impl TemplateStore for BuiltinTemplates {
    fn load(&self, kind: TemplateKind) -> GeddyResult<String> {
        Ok(Self::text(kind).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_uses_singular_name() {
        let text = BuiltinTemplates::new()
            .load(TemplateKind::ResourceModel)
            .unwrap();
        assert!(text.contains("<%= nameSingular %>"));
        assert!(!text.contains("namePlural"));
    }

    #[test]
    fn controller_uses_plural_name() {
        let text = BuiltinTemplates::new()
            .load(TemplateKind::ResourceController)
            .unwrap();
        assert!(text.contains("<%= namePlural %>"));
        assert!(!text.contains("nameSingular"));
    }
}
