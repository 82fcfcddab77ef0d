//! Identifier casing.

use geddy_core::application::ports::Casing;

/// Converts `snake_case` and `kebab-case` words to camel case.
///
/// `neil_peart` becomes `NeilPeart` when the first letter is capitalized
/// and `neilPeart` when it is not. Text with no separators only has its
/// first letter adjusted.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCase;

impl CamelCase {
    pub fn new() -> Self {
        Self
    }
}

impl Casing for CamelCase {
    fn camelize(&self, text: &str, capitalize_first: bool) -> String {
        let mut out = String::with_capacity(text.len());
        let mut upper_next = capitalize_first;
        let mut at_start = true;

        for c in text.chars() {
            if c == '_' || c == '-' {
                // a separator at the very start is dropped and does not
                // force a capital
                upper_next = !at_start || capitalize_first;
                continue;
            }
            if upper_next {
                out.extend(c.to_uppercase());
            } else if at_start {
                out.extend(c.to_lowercase());
            } else {
                out.push(c);
            }
            upper_next = false;
            at_start = false;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalized_camel_case() {
        let c = CamelCase::new();
        assert_eq!(c.camelize("post", true), "Post");
        assert_eq!(c.camelize("neil_peart", true), "NeilPeart");
        assert_eq!(c.camelize("blog-posts", true), "BlogPosts");
    }

    #[test]
    fn lower_camel_case() {
        let c = CamelCase::new();
        assert_eq!(c.camelize("neil_peart", false), "neilPeart");
        assert_eq!(c.camelize("Post", false), "post");
    }

    #[test]
    fn inner_capitals_are_kept() {
        assert_eq!(CamelCase::new().camelize("blogPost", true), "BlogPost");
    }

    #[test]
    fn leading_separator_is_dropped() {
        assert_eq!(CamelCase::new().camelize("_post", false), "post");
        assert_eq!(CamelCase::new().camelize("_post", true), "Post");
    }

    #[test]
    fn deterministic() {
        let c = CamelCase::new();
        assert_eq!(c.camelize("a_b_c", true), c.camelize("a_b_c", true));
    }
}
