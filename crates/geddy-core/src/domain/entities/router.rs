use crate::domain::{error::DomainError, value_objects::RoutePolicy};

/// Text that marks the insertion point in `config/router.js`.
pub const ROUTER_MARKER: &str = "exports.router";

/// Result of registering a resource route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteChange {
    Inserted,
    AlreadyPresent,
}

/// In-memory copy of a router configuration file.
///
/// New registrations are spliced in immediately before the single
/// [`ROUTER_MARKER`] occurrence. Everything else in the file is preserved
/// byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterFile {
    text: String,
}

impl RouterFile {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Line registering `plural` as a resource, including its newline.
    pub fn registration_line(plural: &str) -> String {
        format!("router.resource('{plural}');\n")
    }

    /// Insert the registration line for `plural` before the export marker.
    ///
    /// Fails without touching the text unless the marker occurs exactly once.
    pub fn register_resource(
        &mut self,
        plural: &str,
        policy: RoutePolicy,
    ) -> Result<RouteChange, DomainError> {
        let found = self.text.matches(ROUTER_MARKER).count();
        let at = match (found, self.text.find(ROUTER_MARKER)) {
            (1, Some(at)) => at,
            _ => {
                return Err(DomainError::RouterMarker {
                    marker: ROUTER_MARKER,
                    found,
                });
            }
        };

        let line = Self::registration_line(plural);
        if policy == RoutePolicy::SkipExisting && self.contains_registration(plural) {
            return Ok(RouteChange::AlreadyPresent);
        }

        self.text.insert_str(at, &line);
        Ok(RouteChange::Inserted)
    }

    /// Number of lines registering `plural`.
    pub fn registration_count(&self, plural: &str) -> usize {
        let line = Self::registration_line(plural);
        let line = line.trim_end();
        self.text.lines().filter(|l| l.trim() == line).count()
    }

    fn contains_registration(&self, plural: &str) -> bool {
        self.registration_count(plural) > 0
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTER: &str = "var Router = require('geddy-core/lib/router').Router;\n\
                          router = new Router();\n\
                          router.match('/').to({controller: 'Main', action: 'index'});\n\
                          \n\
                          exports.router = router;\n";

    #[test]
    fn inserts_line_right_before_marker() {
        let mut router = RouterFile::new(ROUTER);
        let change = router.register_resource("posts", RoutePolicy::Always).unwrap();

        assert_eq!(change, RouteChange::Inserted);
        assert!(
            router
                .as_str()
                .contains("router.resource('posts');\nexports.router = router;")
        );
        assert!(router.as_str().starts_with("var Router"));
    }

    #[test]
    fn always_policy_duplicates_on_second_run() {
        let mut router = RouterFile::new(ROUTER);
        router.register_resource("posts", RoutePolicy::Always).unwrap();
        router.register_resource("posts", RoutePolicy::Always).unwrap();

        assert_eq!(router.registration_count("posts"), 2);
    }

    #[test]
    fn skip_existing_policy_is_idempotent() {
        let mut router = RouterFile::new(ROUTER);
        router
            .register_resource("posts", RoutePolicy::SkipExisting)
            .unwrap();
        let second = router
            .register_resource("posts", RoutePolicy::SkipExisting)
            .unwrap();

        assert_eq!(second, RouteChange::AlreadyPresent);
        assert_eq!(router.registration_count("posts"), 1);
    }

    #[test]
    fn missing_marker_is_an_error_and_text_is_untouched() {
        let mut router = RouterFile::new("router = new Router();\n");
        let err = router
            .register_resource("posts", RoutePolicy::Always)
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::RouterMarker {
                marker: ROUTER_MARKER,
                found: 0
            }
        );
        assert_eq!(router.as_str(), "router = new Router();\n");
    }

    #[test]
    fn repeated_marker_is_an_error() {
        let text = format!("{ROUTER}{ROUTER_MARKER} = other;\n");
        let mut router = RouterFile::new(text.clone());

        assert!(matches!(
            router.register_resource("posts", RoutePolicy::Always),
            Err(DomainError::RouterMarker { found: 2, .. })
        ));
        assert_eq!(router.into_text(), text);
    }

    #[test]
    fn other_resources_do_not_count_as_existing() {
        let mut router = RouterFile::new(ROUTER);
        router.register_resource("post", RoutePolicy::Always).unwrap();

        assert_eq!(router.registration_count("posts"), 0);
        assert_eq!(
            router
                .register_resource("posts", RoutePolicy::SkipExisting)
                .unwrap(),
            RouteChange::Inserted
        );
    }
}
