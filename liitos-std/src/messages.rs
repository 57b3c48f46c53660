//! # Message Catalog
//!
//! User-visible strings are looked up by name so plugins can ship
//! defaults and the embedding host can override any of them. A template
//! is either a static string or a function of a JSON context value
//! (the record being rendered, a count, …).

use serde_json::Value;
use std::collections::HashMap;

/// One named message template.
pub enum Template {
    /// A fixed string; the render context is ignored.
    Text(String),
    /// A function of the render context.
    Render(Box<dyn Fn(&Value) -> String + Send + Sync>),
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl Template {
    /// A template computed from the render context.
    pub fn render_with(render: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        Self::Render(Box::new(render))
    }
}

/// The catalog: named templates with plugin defaults and host overrides.
#[derive(Default)]
pub struct Messages {
    templates: HashMap<String, Template>,
}

impl Messages {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a template.
    pub fn define(&mut self, name: impl Into<String>, template: impl Into<Template>) {
        self.templates.insert(name.into(), template.into());
    }

    /// Insert a template only if the name is still unbound, so a host
    /// definition made earlier wins over a plugin's shipped default.
    pub fn defaults(&mut self, name: impl Into<String>, template: impl Into<Template>) {
        self.templates.entry(name.into()).or_insert(template.into());
    }

    /// Render a template by name. Unknown names render as the empty
    /// string.
    pub fn render(&self, name: &str, context: &Value) -> String {
        match self.templates.get(name) {
            Some(Template::Text(text)) => text.clone(),
            Some(Template::Render(render)) => render(context),
            None => String::new(),
        }
    }

    /// Whether a template is bound to `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}
