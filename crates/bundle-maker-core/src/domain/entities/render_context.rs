use std::collections::HashMap;

use crate::domain::entities::request::ScaffoldRequest;

/// Context for template rendering.
///
/// A **Value Object** holding every variable a built-in template may refer to.
/// Immutable after creation; `with_variable` returns a new context.
///
/// ## Built-in Variables
///
/// | Variable       | Example       | Source     |
/// |----------------|---------------|------------|
/// | `BUNDLE_NAME`  | "Blog"        | User input |
/// | `VENDOR_NAME`  | "Acme"        | User input |
/// | `VERSION`      | "1"           | User input |
/// | `NAMESPACE`    | "Acme\Blog"   | Computed   |
/// | `PACKAGE_NAME` | "acme/blog"   | Computed   |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(request: &ScaffoldRequest) -> Self {
        let mut vars = HashMap::new();

        vars.insert("BUNDLE_NAME".to_string(), request.bundle_name().to_string());
        vars.insert("VENDOR_NAME".to_string(), request.vendor_name().to_string());
        vars.insert("VERSION".to_string(), request.version().to_string());
        vars.insert("NAMESPACE".to_string(), request.namespace().to_string());
        vars.insert(
            "PACKAGE_NAME".to_string(),
            request.package_name().to_string(),
        );

        Self { variables: vars }
    }

    /// Add or override a variable, consuming self.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// One left-to-right scan: substituted values are copied to the output and
    /// never scanned again, so a bundle named `{{VERSION}}` stays literal.
    ///
    /// - `{{UNKNOWN}}` is left as-is
    /// - an unterminated `{{` is copied through unchanged
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after_open[..end];
            match self.variables.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        let req = ScaffoldRequest::builder()
            .bundle_name("Blog")
            .vendor_name("Acme")
            .build()
            .unwrap();
        RenderContext::new(&req)
    }

    #[test]
    fn builtin_variables_are_derived_from_request() {
        let ctx = ctx();
        assert_eq!(ctx.get("BUNDLE_NAME"), Some("Blog"));
        assert_eq!(ctx.get("NAMESPACE"), Some("Acme\\Blog"));
        assert_eq!(ctx.get("PACKAGE_NAME"), Some("acme/blog"));
        assert_eq!(ctx.get("VERSION"), Some("1"));
    }

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(
            ctx().render("class {{BUNDLE_NAME}}Bundle uses {{BUNDLE_NAME}}Extension"),
            "class BlogBundle uses BlogExtension"
        );
    }

    #[test]
    fn unknown_placeholder_is_kept() {
        assert_eq!(ctx().render("{{NOPE}} {{VENDOR_NAME}}"), "{{NOPE}} Acme");
    }

    #[test]
    fn unterminated_placeholder_is_copied() {
        assert_eq!(ctx().render("a {{BUNDLE_NAME"), "a {{BUNDLE_NAME");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let ctx = ctx().with_variable("BUNDLE_NAME", "{{VERSION}}");
        assert_eq!(ctx.render("{{BUNDLE_NAME}}"), "{{VERSION}}");
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let text = "# Add your routes here\n";
        assert_eq!(ctx().render(text), text);
    }
}
