//! Spec editing and column/field synchronization.
//!
//! Fields and list columns form a loosely coupled two-list relationship:
//! columns are matched to fields by label text, which can drift after manual
//! edits. These operations never assume the two lists are index-aligned, and
//! read-time resolution degrades to a placeholder instead of failing.

use crate::spec::{Field, ScreenSpec};
use indexmap::IndexMap;

/// Placeholder rendered when a column matches no field.
pub const EMPTY_CELL: &str = "—";

/// Rename a field's label, keeping the first matching column in sync.
///
/// Returns `false` when no field has the given id.
pub fn rename_field_label(spec: &mut ScreenSpec, field_id: &str, new_label: &str) -> bool {
    let Some(field) = spec.fields.iter_mut().find(|f| f.id == field_id) else {
        return false;
    };
    let old_label = std::mem::replace(&mut field.label, new_label.to_string());

    if let Some(column) = spec.list_columns.iter_mut().find(|c| **c == old_label) {
        *column = new_label.to_string();
    }
    true
}

/// Rename a column independently of its source field.
pub fn rename_column(spec: &mut ScreenSpec, index: usize, text: &str) -> bool {
    match spec.list_columns.get_mut(index) {
        Some(column) => {
            *column = text.to_string();
            true
        }
        None => false,
    }
}

/// Move a field from one position to another. Out-of-range indices are a
/// silent no-op.
pub fn reorder_field(spec: &mut ScreenSpec, from: usize, to: usize) {
    if from < spec.fields.len() && to < spec.fields.len() {
        let field = spec.fields.remove(from);
        spec.fields.insert(to, field);
    }
}

/// Move a column from one position to another, independently of field order.
pub fn reorder_column(spec: &mut ScreenSpec, from: usize, to: usize) {
    if from < spec.list_columns.len() && to < spec.list_columns.len() {
        let column = spec.list_columns.remove(from);
        spec.list_columns.insert(to, column);
    }
}

/// Append a field and a column for its label.
pub fn add_field(spec: &mut ScreenSpec, field: Field) {
    spec.list_columns.push(field.label.clone());
    spec.fields.push(field);
}

/// Remove a field by id along with the first column matching its label.
///
/// Returns `false` when no field has the given id.
pub fn remove_field(spec: &mut ScreenSpec, field_id: &str) -> bool {
    let Some(position) = spec.fields.iter().position(|f| f.id == field_id) else {
        return false;
    };
    let field = spec.fields.remove(position);

    if let Some(column) = spec.list_columns.iter().position(|c| *c == field.label) {
        spec.list_columns.remove(column);
    }
    true
}

/// Resolve the value a row shows under a column.
///
/// Finds the field whose label equals the column text and looks its id up in
/// the row's values; any miss yields [`EMPTY_CELL`].
pub fn resolve_column_value<'a>(
    column: &str,
    fields: &[Field],
    row: &'a IndexMap<String, String>,
) -> &'a str {
    fields
        .iter()
        .find(|f| f.label == column)
        .and_then(|f| row.get(&f.id))
        .map(String::as_str)
        .unwrap_or(EMPTY_CELL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{ScreenType, Stack, Theme};

    fn sample_spec() -> ScreenSpec {
        ScreenSpec {
            screen_type: ScreenType::Crud,
            title: "CRUD de Produtos".to_string(),
            subtitle: "Gerencie seus registros".to_string(),
            entity: "Produtos".to_string(),
            fields: vec![
                Field::text("nome", "Nome"),
                Field::text("sku", "SKU"),
                Field::select("status", "Status", ["Ativo", "Inativo"]),
            ],
            list_columns: vec!["Nome".into(), "SKU".into(), "Status".into()],
            features: vec![],
            stack: Stack::React,
            prompt: "CRUD de produtos".to_string(),
            theme: Theme::Norte,
        }
    }

    #[test]
    fn rename_keeps_column_in_sync() {
        let mut spec = sample_spec();
        assert!(rename_field_label(&mut spec, "nome", "Descrição"));
        assert_eq!(spec.fields[0].label, "Descrição");
        assert_eq!(spec.list_columns[0], "Descrição");
    }

    #[test]
    fn rename_unknown_field_is_noop() {
        let mut spec = sample_spec();
        assert!(!rename_field_label(&mut spec, "inexistente", "X"));
        assert_eq!(spec.list_columns, vec!["Nome", "SKU", "Status"]);
    }

    #[test]
    fn renamed_column_no_longer_tracks_field() {
        let mut spec = sample_spec();
        assert!(rename_column(&mut spec, 1, "Código"));
        // The column drifted; renaming the field must not touch it.
        assert!(rename_field_label(&mut spec, "sku", "Referência"));
        assert_eq!(spec.list_columns[1], "Código");
    }

    #[test]
    fn reorder_is_bounds_safe() {
        let mut spec = sample_spec();
        reorder_field(&mut spec, 0, 2);
        assert_eq!(spec.fields[2].id, "nome");
        reorder_field(&mut spec, 10, 0);
        reorder_column(&mut spec, 0, 99);
        assert_eq!(spec.list_columns[0], "Nome");
    }

    #[test]
    fn add_and_remove_keep_columns_in_sync() {
        let mut spec = sample_spec();
        add_field(&mut spec, Field::text("preco", "Preço"));
        assert_eq!(spec.list_columns.last().map(String::as_str), Some("Preço"));

        assert!(remove_field(&mut spec, "sku"));
        assert!(!spec.list_columns.iter().any(|c| c == "SKU"));
        assert!(spec.field("sku").is_none());
    }

    #[test]
    fn resolve_matches_by_label_with_fallback() {
        let spec = sample_spec();
        let mut row = IndexMap::new();
        row.insert("nome".to_string(), "Nome 1".to_string());
        row.insert("sku".to_string(), "SKU 1".to_string());

        assert_eq!(resolve_column_value("SKU", &spec.fields, &row), "SKU 1");
        assert_eq!(
            resolve_column_value("Coluna Fantasma", &spec.fields, &row),
            EMPTY_CELL
        );
        // Field exists but the row has no value for it.
        assert_eq!(resolve_column_value("Status", &spec.fields, &row), EMPTY_CELL);
    }
}
