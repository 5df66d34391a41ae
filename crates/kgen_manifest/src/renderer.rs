//! Template rendering by placeholder substitution.

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::{ManifestError, ManifestResult};

/// Substitutes `{{field}}` placeholders in a template with field values.
pub struct TemplateRenderer {
    placeholder: Regex,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a new template renderer.
    pub fn new() -> Self {
        Self {
            // Match {{field_name}} pattern
            placeholder: Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").unwrap(),
        }
    }

    /// Render a template against a field map.
    ///
    /// Every placeholder must correspond to a field, and the template must not
    /// contain stray placeholder delimiters after substitution. Substitution
    /// is deterministic: the same template and fields always produce the same
    /// output bytes.
    pub fn render(
        &self,
        template: &str,
        fields: &BTreeMap<String, String>,
    ) -> ManifestResult<String> {
        let mut missing: Option<String> = None;
        let rendered = self
            .placeholder
            .replace_all(template, |caps: &regex::Captures| {
                let key = &caps[1];
                match fields.get(key) {
                    Some(value) => value.clone(),
                    None => {
                        if missing.is_none() {
                            missing = Some(key.to_string());
                        }
                        String::new()
                    }
                }
            })
            .to_string();

        if let Some(placeholder) = missing {
            return Err(ManifestError::UnknownPlaceholder(placeholder));
        }
        if rendered.contains("{{") || rendered.contains("}}") {
            return Err(ManifestError::MalformedTemplate(
                "unmatched placeholder delimiter".to_string(),
            ));
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitutes_fields() {
        let renderer = TemplateRenderer::new();
        let vars = fields(&[("name", "nginx"), ("image", "nginx:latest")]);
        let rendered = renderer
            .render("name: {{name}}\nimage: {{image}}\n", &vars)
            .unwrap();
        assert_eq!(rendered, "name: nginx\nimage: nginx:latest\n");
    }

    #[test]
    fn test_repeated_placeholder() {
        let renderer = TemplateRenderer::new();
        let vars = fields(&[("name", "app")]);
        let rendered = renderer.render("{{name}}-{{name}}", &vars).unwrap();
        assert_eq!(rendered, "app-app");
    }

    #[test]
    fn test_unknown_placeholder_fails() {
        let renderer = TemplateRenderer::new();
        let vars = fields(&[("name", "app")]);
        let err = renderer.render("host: {{host}}", &vars).unwrap_err();
        assert!(matches!(err, ManifestError::UnknownPlaceholder(ref p) if p == "host"));
    }

    #[test]
    fn test_unmatched_delimiter_fails() {
        let renderer = TemplateRenderer::new();
        let vars = fields(&[("name", "app")]);
        let err = renderer.render("name: {{name", &vars).unwrap_err();
        assert!(matches!(err, ManifestError::MalformedTemplate(_)));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let renderer = TemplateRenderer::new();
        let vars = fields(&[("name", "web"), ("namespace", "prod")]);
        let template = "metadata:\n  name: {{name}}\n  namespace: {{namespace}}\n";
        let first = renderer.render(template, &vars).unwrap();
        let second = renderer.render(template, &vars).unwrap();
        assert_eq!(first, second);
    }
}
