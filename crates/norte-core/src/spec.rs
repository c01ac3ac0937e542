//! Screen specification types.
//!
//! A [`ScreenSpec`] is the interchange format between the prompt interpreter,
//! the editing UI and the stack emitters. It serializes to camelCase JSON and
//! must keep round-tripping through serde so that saved specs can be reloaded
//! and re-emitted.

use serde::{Deserialize, Serialize};

/// Declared type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Email,
    Password,
    Date,
    Select,
    Radio,
    Checkbox,
    Switch,
}

impl FieldType {
    /// Native HTML input type backing this field.
    ///
    /// `number`, `email`, `password` and `date` pass through unchanged; every
    /// other declared type falls back to `"text"`. This is distinct from the
    /// widget chosen for rendering: `select`/`radio`/`checkbox`/`switch`
    /// bypass a plain `<input>` entirely when their data allows it.
    pub fn native_input_type(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            _ => "text",
        }
    }

    /// Whether values follow the `"on"`/`""` boolean convention.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Switch)
    }
}

/// One form input / table column descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Stable identifier, used as the data key and form-control `name`.
    pub id: String,
    /// Human-readable text shown next to the control; also the default
    /// list-column header.
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Hint text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_message: Option<String>,
    /// Selectable values for `select`/`radio`. Renderers treat an empty list
    /// on those types as "fall back to plain text input".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Field {
    /// Create a field with the given id, label and type.
    pub fn new(id: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type,
            placeholder: None,
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            pattern_message: None,
            options: Vec::new(),
        }
    }

    /// Shorthand for a plain text field.
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldType::Text)
    }

    /// Shorthand for a select field with its options.
    pub fn select<I, S>(id: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(id, label, FieldType::Select).with_options(options)
    }

    /// Shorthand for a radio group with its options.
    pub fn radio<I, S>(id: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(id, label, FieldType::Radio).with_options(options)
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the placeholder hint.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the minimum accepted length.
    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set the maximum accepted length.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set a validation pattern and the message shown when it fails.
    pub fn with_pattern(mut self, pattern: impl Into<String>, message: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self.pattern_message = Some(message.into());
        self
    }

    /// Replace the option list.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Whether any validation constraint is set.
    pub fn has_constraints(&self) -> bool {
        self.required
            || self.min_length.is_some()
            || self.max_length.is_some()
            || self.pattern.is_some()
    }
}

/// Kind of screen produced by the interpreter.
///
/// Chosen once at interpretation time; manual edits to the fields never
/// re-derive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenType {
    Login,
    Crud,
    Generic,
}

/// Target front-end ecosystem for emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    React,
    Vue,
    Bootstrap,
    Angular,
}

impl Stack {
    /// Lowercase token used in JSON and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Bootstrap => "bootstrap",
            Self::Angular => "angular",
        }
    }
}

impl std::str::FromStr for Stack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "react" => Ok(Self::React),
            "vue" => Ok(Self::Vue),
            "bootstrap" => Ok(Self::Bootstrap),
            "angular" => Ok(Self::Angular),
            other => Err(format!("unknown stack: {other}")),
        }
    }
}

impl std::fmt::Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named visual theme threaded through all emitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Norte,
    Minimal,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Norte => "norte",
            Self::Minimal => "minimal",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "norte" => Ok(Self::Norte),
            "minimal" => Ok(Self::Minimal),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Full specification of one generated screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSpec {
    #[serde(rename = "type")]
    pub screen_type: ScreenType,
    pub title: String,
    pub subtitle: String,
    /// Human-readable subject of the screen, e.g. "Produtos".
    pub entity: String,
    /// Ordered fields; order drives both form order and default column order.
    pub fields: Vec<Field>,
    /// Column headers; may drift from the field labels after edits. Cells are
    /// resolved by matching column text back to a field label at render time.
    pub list_columns: Vec<String>,
    /// Informational capability tags; not consumed by the emitters.
    pub features: Vec<String>,
    pub stack: Stack,
    /// Original input text, retained for display. Never re-parsed.
    pub prompt: String,
    #[serde(default)]
    pub theme: Theme,
}

impl ScreenSpec {
    /// Labels of all fields, in field order.
    pub fn field_labels(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.label.clone()).collect()
    }

    /// Find a field by its stable id.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Find the field whose label equals the given column text.
    pub fn field_for_column(&self, column: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.label == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_input_type_fallback() {
        assert_eq!(FieldType::Number.native_input_type(), "number");
        assert_eq!(FieldType::Date.native_input_type(), "date");
        assert_eq!(FieldType::Select.native_input_type(), "text");
        assert_eq!(FieldType::Switch.native_input_type(), "text");
        assert!(FieldType::Switch.is_boolean());
        assert!(!FieldType::Select.is_boolean());
    }

    #[test]
    fn field_builder() {
        let field = Field::text("nome", "Nome").required().with_min_length(3);
        assert_eq!(field.id, "nome");
        assert!(field.required);
        assert_eq!(field.min_length, Some(3));
        assert!(field.has_constraints());
    }

    #[test]
    fn spec_serde_round_trip() {
        let spec = ScreenSpec {
            screen_type: ScreenType::Crud,
            title: "CRUD de Produtos".to_string(),
            subtitle: "Gerencie seus registros".to_string(),
            entity: "Produtos".to_string(),
            fields: vec![
                Field::text("nome", "Nome").required(),
                Field::select("status", "Status", ["Ativo", "Inativo"]),
            ],
            list_columns: vec!["Nome".to_string(), "Status".to_string()],
            features: vec!["Listagem com busca".to_string()],
            stack: Stack::React,
            prompt: "CRUD de produtos".to_string(),
            theme: Theme::Norte,
        };

        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"listColumns\""));
        assert!(json.contains("\"type\":\"crud\""));

        let back: ScreenSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn theme_defaults_to_norte_when_missing() {
        let json = r#"{
            "type": "generic",
            "title": "Tela Gerada",
            "subtitle": "",
            "entity": "Itens",
            "fields": [],
            "listColumns": [],
            "features": [],
            "stack": "vue",
            "prompt": "qualquer texto"
        }"#;

        let spec: ScreenSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.theme, Theme::Norte);
    }

    #[test]
    fn stack_parsing() {
        assert_eq!("React".parse::<Stack>().unwrap(), Stack::React);
        assert!("flutter".parse::<Stack>().is_err());
    }
}
