use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// Names end up spliced into shell command text and file paths, so the
/// accepted alphabet is deliberately small.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_app_name(name: &str) -> Result<(), DomainError> {
        check_segment(name).map_err(|reason| DomainError::InvalidAppName {
            name: name.into(),
            reason,
        })
    }

    /// Validate one half of a `singular,plural` resource argument.
    ///
    /// `input` is the full argument, used only for the error message.
    pub fn validate_resource_segment(input: &str, segment: &str) -> Result<(), DomainError> {
        check_segment(segment).map_err(|reason| DomainError::InvalidResourceName {
            input: input.into(),
            reason,
        })
    }
}

fn check_segment(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".into());
    }
    if name.starts_with('.') {
        return Err("name cannot start with '.'".into());
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(format!("character '{bad}' is not allowed"));
    }
    Ok(())
}
