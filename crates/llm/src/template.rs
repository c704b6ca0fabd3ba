//! Prompt templates with `{name}` placeholders.

use crate::generator::GenerationError;

/// A prompt template. Placeholders are written `{name}`; literal braces are
/// escaped by doubling (`{{`, `}}`).
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    text: &'static str,
}

impl PromptTemplate {
    /// Wrap a template string. Placeholder names are resolved at render
    /// time, so an unknown name in `text` only surfaces when rendering.
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }

    /// Raw template text.
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Substitute every placeholder from `vars`. A placeholder with no
    /// matching variable is a [`GenerationError::MissingVariable`].
    pub fn render(&self, vars: &[(&str, &str)]) -> Result<String, GenerationError> {
        let mut out = String::with_capacity(self.text.len());
        let mut chars = self.text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => {
                                return Err(GenerationError::MissingVariable(name));
                            }
                        }
                    }
                    let value = vars
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .ok_or(GenerationError::MissingVariable(name))?;
                    out.push_str(value);
                }
                c => out.push(c),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_placeholders() {
        let template = PromptTemplate::new("Trip to {destination} on {dates}.");
        let rendered = template
            .render(&[("destination", "Barcelona"), ("dates", "March 15-20")])
            .unwrap();
        assert_eq!(rendered, "Trip to Barcelona on March 15-20.");
    }

    #[test]
    fn repeated_placeholder_renders_each_time() {
        let template = PromptTemplate::new("{city}, oh {city}!");
        let rendered = template.render(&[("city", "Lisbon")]).unwrap();
        assert_eq!(rendered, "Lisbon, oh Lisbon!");
    }

    #[test]
    fn doubled_braces_are_literal() {
        let template = PromptTemplate::new(r#"Return JSON: {{"city": "{city}"}}"#);
        let rendered = template.render(&[("city", "Porto")]).unwrap();
        assert_eq!(rendered, r#"Return JSON: {"city": "Porto"}"#);
    }

    #[test]
    fn missing_variable_is_an_error() {
        let template = PromptTemplate::new("Hello {name}");
        let err = template.render(&[]).unwrap_err();
        assert!(matches!(err, GenerationError::MissingVariable(name) if name == "name"));
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        let template = PromptTemplate::new("Hello {name");
        assert!(template.render(&[("name", "x")]).is_err());
    }

    #[test]
    fn extra_variables_are_ignored() {
        let template = PromptTemplate::new("{a}");
        let rendered = template.render(&[("a", "1"), ("b", "2")]).unwrap();
        assert_eq!(rendered, "1");
    }
}
