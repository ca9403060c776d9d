//! Content-side containers for extensible enumeration types.

use super::enum_value::EnumValue;
use crate::value::Value;

/// An externally supplied container of rows for an extensible enumeration
/// type, referencing the type by qualified name.
///
/// Content rows carry no literal name cell. Their positional shape is the
/// type's attribute list without the literal name attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumContent {
    /// Qualified name (unique within the project). Must match the type's
    /// declared content name.
    pub qualified_name: String,
    /// Qualified name of the enumeration type this content extends.
    pub enum_type: String,
    enum_values: Vec<EnumValue>,
}

impl EnumContent {
    /// Create an empty content for a type.
    pub fn new(qualified_name: impl Into<String>, enum_type: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            enum_type: enum_type.into(),
            enum_values: Vec::new(),
        }
    }

    /// All rows.
    pub fn enum_values(&self) -> &[EnumValue] {
        &self.enum_values
    }

    /// The row at `index`, mutably.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn enum_value_mut(&mut self, index: usize) -> &mut EnumValue {
        &mut self.enum_values[index]
    }

    /// Delete the row at `index`. Returns `false` when out of range.
    pub fn delete_enum_value(&mut self, index: usize) -> bool {
        if index < self.enum_values.len() {
            self.enum_values.remove(index);
            true
        } else {
            false
        }
    }

    pub(crate) fn push_enum_value(&mut self, row: EnumValue) -> usize {
        self.enum_values.push(row);
        self.enum_values.len() - 1
    }

    pub(crate) fn remove_cell_in_all_rows(&mut self, index: usize) {
        for row in &mut self.enum_values {
            row.remove_cell(index);
        }
    }

    /// Set a cell of a row by position.
    ///
    /// # Panics
    ///
    /// Panics when `row` or `index` is out of range.
    pub fn set_enum_attribute_value_at(&mut self, row: usize, index: usize, value: Value) {
        self.enum_values[row].set_enum_attribute_value_at(index, value);
    }
}
