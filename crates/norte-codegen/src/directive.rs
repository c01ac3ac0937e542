//! Shared render derivations.
//!
//! Everything the four stack emitters must agree on lives here: widget
//! selection, validation-rule compilation, seed rows and column-to-field
//! bindings. Emitters consume these derivations instead of re-deriving them,
//! so the four outputs stay behaviorally equivalent.

use indexmap::IndexMap;
use norte_core::{Field, FieldType, ScreenSpec};
use serde::Serialize;

/// How a field is rendered, independent of target stack syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetDirective {
    /// Plain `<input>` with the given native type.
    Text { input_type: &'static str },
    /// Dropdown with an explicit leading placeholder option.
    Select { options: Vec<String> },
    /// One radio input per option, grouped under the field name.
    Radio { options: Vec<String> },
    /// Boolean toggle, `"on"`/`""` value convention.
    Checkbox,
    /// Same semantics as checkbox, different visual affordance.
    Switch,
}

/// Select the widget for a field.
///
/// `select`/`radio` with an empty option list degrade to a plain text input;
/// that keeps a hand-edited spec renderable without any error path.
pub fn widget_for(field: &Field) -> WidgetDirective {
    match field.field_type {
        FieldType::Select if !field.options.is_empty() => WidgetDirective::Select {
            options: field.options.clone(),
        },
        FieldType::Radio if !field.options.is_empty() => WidgetDirective::Radio {
            options: field.options.clone(),
        },
        FieldType::Checkbox => WidgetDirective::Checkbox,
        FieldType::Switch => WidgetDirective::Switch,
        _ => WidgetDirective::Text {
            input_type: field.field_type.native_input_type(),
        },
    }
}

/// One compiled validation rule, serialized into the generated code.
///
/// Generated screens evaluate rules in field order and stop at the first
/// violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_message: Option<String>,
}

/// Compile one rule record per constrained field, in field order.
pub fn compile_rules(fields: &[Field]) -> Vec<ValidationRule> {
    fields
        .iter()
        .filter(|f| f.has_constraints())
        .map(|f| ValidationRule {
            id: f.id.clone(),
            label: f.label.clone(),
            required: f.required,
            min_length: f.min_length,
            max_length: f.max_length,
            pattern: f.pattern.clone(),
            pattern_message: f.pattern_message.clone(),
        })
        .collect()
}

/// A deterministic sample row seeded into every CRUD screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRow {
    pub id: u32,
    /// Field id → sample value, in field order.
    pub values: IndexMap<String, String>,
}

/// Seed exactly two rows with positional labels: `"<label> 1"`, `"<label> 2"`.
pub fn seed_rows(fields: &[Field]) -> Vec<SampleRow> {
    (1..=2u32)
        .map(|index| SampleRow {
            id: index,
            values: fields
                .iter()
                .map(|f| (f.id.clone(), format!("{} {}", f.label, index)))
                .collect(),
        })
        .collect()
}

/// Per-column binding: the field id whose label matches the column text, or
/// `None` when the column drifted away from every field.
pub fn column_bindings(spec: &ScreenSpec) -> Vec<(String, Option<String>)> {
    spec.list_columns
        .iter()
        .map(|column| {
            let field_id = spec.field_for_column(column).map(|f| f.id.clone());
            (column.clone(), field_id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use norte_core::{ScreenType, Stack, Theme};

    #[test]
    fn select_without_options_degrades_to_text() {
        let field = Field::new("status", "Status", FieldType::Select);
        assert_eq!(widget_for(&field), WidgetDirective::Text { input_type: "text" });

        let field = Field::select("status", "Status", ["Ativo"]);
        assert_eq!(
            widget_for(&field),
            WidgetDirective::Select {
                options: vec!["Ativo".to_string()]
            }
        );
    }

    #[test]
    fn number_field_keeps_native_type() {
        let field = Field::new("preco", "Preço", FieldType::Number);
        assert_eq!(
            widget_for(&field),
            WidgetDirective::Text {
                input_type: "number"
            }
        );
    }

    #[test]
    fn rules_only_for_constrained_fields() {
        let fields = vec![
            Field::text("nome", "Nome").required().with_min_length(3),
            Field::text("obs", "Observações"),
        ];
        let rules = compile_rules(&fields);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].id, "nome");
        assert_eq!(rules[0].min_length, Some(3));
    }

    #[test]
    fn seed_rows_use_positional_labels() {
        let fields = vec![Field::text("nome", "Nome"), Field::text("sku", "SKU")];
        let rows = seed_rows(&fields);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].values["nome"], "Nome 1");
        assert_eq!(rows[1].values["sku"], "SKU 2");
    }

    #[test]
    fn drifted_column_binds_to_none() {
        let spec = ScreenSpec {
            screen_type: ScreenType::Crud,
            title: String::new(),
            subtitle: String::new(),
            entity: "Itens".to_string(),
            fields: vec![Field::text("nome", "Nome")],
            list_columns: vec!["Nome".to_string(), "Coluna Livre".to_string()],
            features: vec![],
            stack: Stack::React,
            prompt: String::new(),
            theme: Theme::Norte,
        };

        let bindings = column_bindings(&spec);
        assert_eq!(bindings[0], ("Nome".to_string(), Some("nome".to_string())));
        assert_eq!(bindings[1], ("Coluna Livre".to_string(), None));
    }
}
