use std::collections::HashMap;

use blogsmith_core::{BlogsmithError, Value};
use regex::Regex;

/// A prompt with `{{name}}` placeholders.
///
/// Substitution is single-pass: text inserted for one placeholder is never
/// scanned for further placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Placeholder names in order of first appearance.
    pub fn variables(&self) -> Result<Vec<String>, BlogsmithError> {
        let mut names: Vec<String> = Vec::new();
        for caps in placeholder()?.captures_iter(&self.template) {
            let name = caps[1].to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    pub fn render(&self, vars: &HashMap<String, Value>) -> Result<String, BlogsmithError> {
        let rendered = placeholder()?.replace_all(&self.template, |caps: &regex::Captures| {
            let key = &caps[1];
            match vars.get(key) {
                Some(value) => value
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| value.to_string()),
                None => "".to_string(),
            }
        });
        Ok(rendered.to_string())
    }

    /// Renders with string values, failing if any placeholder is left unbound.
    pub fn render_strict<'a, I>(&self, vars: I) -> Result<String, BlogsmithError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let vars: HashMap<String, Value> = vars
            .into_iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
            .collect();
        if let Some(missing) = self.variables()?.into_iter().find(|name| !vars.contains_key(name)) {
            return Err(BlogsmithError::InvalidConfig(format!(
                "prompt variable '{missing}' is not bound"
            )));
        }
        self.render(&vars)
    }
}

fn placeholder() -> Result<Regex, BlogsmithError> {
    Regex::new(r"\{\{\s*(\w+)\s*\}\}").map_err(|e| BlogsmithError::InvalidConfig(e.to_string()))
}
