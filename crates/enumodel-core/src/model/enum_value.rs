//! Enumeration value rows and their attribute value cells.

use super::attribute::EnumAttribute;
use crate::value::{InternationalString, Value};

/// Distinguishes the literal name cell from ordinary cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumAttributeValueKind {
    /// An ordinary attribute value.
    Plain,
    /// The value of the literal name attribute.
    LiteralName,
}

/// One cell of an enumeration value row.
///
/// A cell never stores a pointer to its defining attribute. The attribute is
/// re-resolved positionally against the owning container's attribute list at
/// lookup time, so attribute moves and renames need no synchronization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumAttributeValue {
    kind: EnumAttributeValueKind,
    value: Value,
}

impl EnumAttributeValue {
    /// Create an empty ordinary cell.
    pub fn new_plain() -> Self {
        Self {
            kind: EnumAttributeValueKind::Plain,
            value: Value::unset(),
        }
    }

    /// Create an empty literal name cell.
    pub fn new_literal_name() -> Self {
        Self {
            kind: EnumAttributeValueKind::LiteralName,
            value: Value::unset(),
        }
    }

    /// Create the empty cell matching an attribute. Multilingual attributes
    /// get an international payload, the literal name attribute gets a
    /// literal name cell.
    pub fn for_attribute(attribute: &EnumAttribute) -> Self {
        match attribute {
            EnumAttribute::LiteralName(_) => Self::new_literal_name(),
            EnumAttribute::Plain(attr) if attr.multilingual => Self {
                kind: EnumAttributeValueKind::Plain,
                value: Value::international(InternationalString::new()),
            },
            EnumAttribute::Plain(_) => Self::new_plain(),
        }
    }

    /// The cell kind.
    pub fn kind(&self) -> EnumAttributeValueKind {
        self.kind
    }

    /// True for the literal name cell.
    pub fn is_literal_name_value(&self) -> bool {
        self.kind == EnumAttributeValueKind::LiteralName
    }

    /// The stored value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replace the stored value.
    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    /// True when the stored value has no content.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// One row of an enumeration, positionally aligned with the owning
/// container's applicable attribute list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumValue {
    enum_attribute_values: Vec<EnumAttributeValue>,
}

impl EnumValue {
    /// Create a row with no cells.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row with one empty cell per attribute.
    pub fn with_shape(attributes: &[EnumAttribute]) -> Self {
        Self {
            enum_attribute_values: attributes
                .iter()
                .map(EnumAttributeValue::for_attribute)
                .collect(),
        }
    }

    /// All cells in positional order.
    pub fn enum_attribute_values(&self) -> &[EnumAttributeValue] {
        &self.enum_attribute_values
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.enum_attribute_values.len()
    }

    /// True when the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.enum_attribute_values.is_empty()
    }

    /// Append a cell for the attribute occupying the new last position.
    pub fn new_enum_attribute_value(&mut self, attributes: &[EnumAttribute]) {
        let cell = attributes
            .get(self.enum_attribute_values.len())
            .map(EnumAttributeValue::for_attribute)
            .unwrap_or_else(EnumAttributeValue::new_plain);
        self.enum_attribute_values.push(cell);
    }

    /// The cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range. Positional access past the end of
    /// the row is a programming error, not a recoverable state.
    pub fn get_enum_attribute_value(&self, index: usize) -> &EnumAttributeValue {
        &self.enum_attribute_values[index]
    }

    /// Replace the value of the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn set_enum_attribute_value_at(&mut self, index: usize, value: Value) {
        self.enum_attribute_values[index].set_value(value);
    }

    /// Look up the cell for a named attribute by resolving the attribute's
    /// current position in the container's attribute list. Returns `None`
    /// when the attribute is not part of the container.
    pub fn find_enum_attribute_value(
        &self,
        attributes: &[EnumAttribute],
        name: &str,
    ) -> Option<&EnumAttributeValue> {
        let position = attributes.iter().position(|a| a.name() == name)?;
        self.enum_attribute_values.get(position)
    }

    /// Set the value of the cell for a named attribute. Returns `false` when
    /// the attribute is not part of the container or the row is shorter than
    /// the attribute's position.
    pub fn set_enum_attribute_value(
        &mut self,
        attributes: &[EnumAttribute],
        name: &str,
        value: Value,
    ) -> bool {
        let Some(position) = attributes.iter().position(|a| a.name() == name) else {
            return false;
        };
        match self.enum_attribute_values.get_mut(position) {
            Some(cell) => {
                cell.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Project the row down to the cells whose defining attribute requires
    /// unique values.
    pub fn find_unique_enum_attribute_values(
        &self,
        attributes: &[EnumAttribute],
    ) -> Vec<&EnumAttributeValue> {
        attributes
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_unique())
            .filter_map(|(i, _)| self.enum_attribute_values.get(i))
            .collect()
    }

    /// The literal name cell, or `None` when the container has no literal
    /// name attribute (content-side rows).
    pub fn get_enum_literal_name_attribute_value(
        &self,
        attributes: &[EnumAttribute],
    ) -> Option<&EnumAttributeValue> {
        let position = attributes.iter().position(|a| a.is_literal_name())?;
        self.enum_attribute_values.get(position)
    }

    pub(crate) fn from_cells(cells: Vec<EnumAttributeValue>) -> Self {
        Self {
            enum_attribute_values: cells,
        }
    }

    pub(crate) fn insert_cell(&mut self, index: usize, cell: EnumAttributeValue) {
        self.enum_attribute_values.insert(index, cell);
    }

    pub(crate) fn remove_cell(&mut self, index: usize) {
        if index < self.enum_attribute_values.len() {
            self.enum_attribute_values.remove(index);
        }
    }

    pub(crate) fn swap_cells(&mut self, a: usize, b: usize) {
        let len = self.enum_attribute_values.len();
        if a < len && b < len {
            self.enum_attribute_values.swap(a, b);
        }
    }
}
