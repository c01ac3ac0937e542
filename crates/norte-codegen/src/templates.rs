//! Handlebars-backed templating for project shell files.
//!
//! Dynamic component code is assembled line by line in the emitters; the
//! static shells (manifests, entry points, READMEs) go through this engine so
//! titles and slugs are substituted in one place. Escaping helpers for the
//! generated languages live here too.

use crate::error::{EmitError, Result};
use convert_case::{Case, Casing};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine with case helpers registered.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        register_case_helper(&mut handlebars, "pascal_case", |s| s.to_case(Case::Pascal));
        register_case_helper(&mut handlebars, "kebab_case", |s| s.to_case(Case::Kebab));
        register_case_helper(&mut handlebars, "upper", |s| s.to_uppercase());
        Self { handlebars }
    }

    /// Register a named template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(EmitError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a previously registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars.render(name, data).map_err(EmitError::Template)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(EmitError::Template)
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn register_case_helper(handlebars: &mut Handlebars, name: &str, convert: fn(&str) -> String) {
    handlebars.register_helper(
        name,
        Box::new(
            move |h: &handlebars::Helper,
                  _r: &Handlebars,
                  _ctx: &handlebars::Context,
                  _rc: &mut handlebars::RenderContext,
                  out: &mut dyn handlebars::Output| {
                let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
                out.write(&convert(param))?;
                Ok(())
            },
        ),
    );
}

/// Quote a value as a single-quoted JavaScript string literal.
pub fn js_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped.push('\'');
    escaped
}

/// Escape text for HTML content and attribute values.
pub fn html_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Kebab-case slug for package names and file paths, e.g. "Tarefas Diarias"
/// → "tarefas-diarias".
pub fn slug(value: &str) -> String {
    let kebab = value.to_case(Case::Kebab);
    if kebab.is_empty() {
        "tela".to_string()
    } else {
        kebab
    }
}

/// PascalCase identifier, e.g. "tarefas diarias" → "TarefasDiarias".
pub fn pascal(value: &str) -> String {
    let pascal = value.to_case(Case::Pascal);
    if pascal.is_empty() {
        "Tela".to_string()
    } else {
        pascal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_with_case_helper() {
        let engine = TemplateEngine::new();
        let out = engine
            .render_string("{{kebab_case name}}", &json!({ "name": "Tarefas Diarias" }))
            .unwrap();
        assert_eq!(out, "tarefas-diarias");
    }

    #[test]
    fn registered_template() {
        let mut engine = TemplateEngine::new();
        engine.register_template("hello", "Olá, {{name}}!").unwrap();
        let out = engine.render("hello", &json!({ "name": "Norte" })).unwrap();
        assert_eq!(out, "Olá, Norte!");
    }

    #[test]
    fn js_string_escapes_quotes_and_backslashes() {
        assert_eq!(js_string("it's"), r"'it\'s'");
        assert_eq!(js_string(r"^\d{14}$"), r"'^\\d{14}$'");
        assert_eq!(js_string("a\nb"), r"'a\nb'");
    }

    #[test]
    fn html_escape_covers_markup_chars() {
        assert_eq!(html_escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn slug_and_pascal_fall_back_when_empty() {
        assert_eq!(slug("Produtos"), "produtos");
        assert_eq!(slug("!!"), "tela");
        assert_eq!(pascal("tarefas diarias"), "TarefasDiarias");
    }
}
