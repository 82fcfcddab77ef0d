//! Value objects: validated names, install locations, render variables.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{error::DomainError, validation::DomainValidator as validator};

// ============================================================================
// AppName
// ============================================================================

/// Name of an application directory to scaffold.
///
/// Invariant: passes [`DomainValidator::validate_app_name`](crate::domain::DomainValidator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppName(String);

impl AppName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validator::validate_app_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// ResourceName
// ============================================================================

/// Singular and plural names of a resource, as typed by the user.
///
/// Parsed from `"singular"` or `"singular,plural"`. Without an explicit
/// plural an `s` is appended to the singular; no other pluralization is
/// attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName {
    singular: String,
    plural: String,
}

impl ResourceName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let mut parts = input.split(',').map(str::trim);
        let singular = parts.next().unwrap_or_default();
        let plural = parts.next().filter(|p| !p.is_empty());

        if parts.next().is_some() {
            return Err(DomainError::InvalidResourceName {
                input: input.into(),
                reason: "expected at most two comma-separated names".into(),
            });
        }

        validator::validate_resource_segment(input, singular)?;
        let plural = match plural {
            Some(p) => {
                validator::validate_resource_segment(input, p)?;
                p.to_string()
            }
            None => format!("{singular}s"),
        };

        Ok(Self {
            singular: singular.to_string(),
            plural,
        })
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.singular, self.plural)
    }
}

// ============================================================================
// FrameworkPaths
// ============================================================================

/// Where the framework is installed from and to.
///
/// Values are shell text: they are spliced unquoted into command lines so
/// that `~` and globs are expanded by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkPaths {
    /// Built framework files copied into the library directory.
    pub dist_dir: String,
    /// Global library directory the framework is installed into.
    pub library_dir: String,
    /// Directory receiving the `geddy` and `geddy-gen` launchers.
    pub bin_dir: String,
    /// Source directory of the launcher scripts.
    pub scripts_dir: String,
}

impl FrameworkPaths {
    /// Directory holding the files copied into new apps and views.
    pub fn gen_dir(&self) -> String {
        format!(
            "{}/geddy-core/scripts/gen",
            self.library_dir.trim_end_matches('/')
        )
    }
}

impl Default for FrameworkPaths {
    fn default() -> Self {
        Self {
            dist_dir: "./dist".into(),
            library_dir: "~/.node_libraries".into(),
            bin_dir: "/usr/local/bin".into(),
            scripts_dir: "geddy-core/scripts".into(),
        }
    }
}

// ============================================================================
// RenderContext
// ============================================================================

/// Named values substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ============================================================================
// TemplateKind
// ============================================================================

/// Templates the resource generator renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    ResourceModel,
    ResourceController,
}

impl TemplateKind {
    /// File name of the template on disk.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::ResourceModel => "resource_model.ejs",
            Self::ResourceController => "resource_controller.ejs",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// ============================================================================
// RoutePolicy
// ============================================================================

/// What to do when the router already registers the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutePolicy {
    /// Always insert; running twice registers the resource twice.
    #[default]
    Always,
    /// Leave the router untouched if the exact line is already present.
    SkipExisting,
}
