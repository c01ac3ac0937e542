//! Core data model for the Norte scaffold generator.
//!
//! This crate defines the [`ScreenSpec`] and [`Field`] types shared by the
//! prompt interpreter and the stack emitters, plus the editing operations
//! that keep a spec's field list and column list loosely synchronized.

pub mod edit;
pub mod spec;

pub use spec::{Field, FieldType, ScreenSpec, ScreenType, Stack, Theme};

pub use edit::{
    add_field, remove_field, rename_column, rename_field_label, reorder_column, reorder_field,
    resolve_column_value, EMPTY_CELL,
};
