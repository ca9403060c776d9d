//! Enumeration type definitions.

use std::collections::HashSet;

use tracing::debug;

use super::attribute::{EnumAttribute, EnumLiteralNameAttribute, PlainEnumAttribute};
use super::enum_value::{EnumAttributeValue, EnumValue};
use super::project::EnumModelProject;
use crate::error::Error;
use crate::value::Value;

/// An enumeration type definition.
///
/// The attribute list and every owned row's cell list are kept positionally
/// aligned at all times. Structural operations (add, move, delete) apply the
/// same change to both in the same call. The literal name attribute, when
/// present, occupies index 0 and is excluded from reordering.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    /// Qualified name (unique within the project).
    pub qualified_name: String,
    /// An abstract type cannot hold values and exists to be subtyped.
    pub is_abstract: bool,
    /// An extensible type splits its instance set between model-defined rows
    /// and externally supplied content rows.
    pub extensible: bool,
    /// Partition point in the identifier attribute's value space. Values
    /// strictly below the boundary belong to the model, values at or above
    /// it belong to the content.
    pub identifier_boundary: Option<String>,
    /// Qualified name of the content holding the external rows when the
    /// type is extensible.
    pub enum_content_name: String,
    /// Qualified name of the supertype, single inheritance.
    pub super_enum_type: Option<String>,
    enum_attributes: Vec<EnumAttribute>,
    enum_values: Vec<EnumValue>,
}

impl EnumType {
    /// Create a new concrete, non-extensible enumeration type.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            is_abstract: false,
            extensible: false,
            identifier_boundary: None,
            enum_content_name: String::new(),
            super_enum_type: None,
            enum_attributes: Vec::new(),
            enum_values: Vec::new(),
        }
    }

    /// Mark as abstract.
    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark as extensible.
    pub fn with_extensible(mut self) -> Self {
        self.extensible = true;
        self
    }

    /// Set the identifier boundary.
    pub fn with_identifier_boundary(mut self, boundary: impl Into<String>) -> Self {
        self.identifier_boundary = Some(boundary.into());
        self
    }

    /// Set the content name.
    pub fn with_enum_content_name(mut self, name: impl Into<String>) -> Self {
        self.enum_content_name = name.into();
        self
    }

    /// Set the supertype.
    pub fn with_super_enum_type(mut self, name: impl Into<String>) -> Self {
        self.super_enum_type = Some(name.into());
        self
    }

    // ---- attributes ----------------------------------------------------

    /// Locally declared attributes in positional order.
    pub fn get_enum_attributes(&self, include_literal_name: bool) -> Vec<&EnumAttribute> {
        self.enum_attributes
            .iter()
            .filter(|a| include_literal_name || !a.is_literal_name())
            .collect()
    }

    /// Number of locally declared attributes.
    pub fn enum_attributes_count(&self, include_literal_name: bool) -> usize {
        self.get_enum_attributes(include_literal_name).len()
    }

    /// Find a locally declared attribute by name.
    pub fn find_enum_attribute(&self, name: &str) -> Option<&EnumAttribute> {
        self.enum_attributes.iter().find(|a| a.name() == name)
    }

    /// Find a locally declared attribute by name, mutably.
    pub fn find_enum_attribute_mut(&mut self, name: &str) -> Option<&mut EnumAttribute> {
        self.enum_attributes.iter_mut().find(|a| a.name() == name)
    }

    /// Find an attribute by name, searching the supertype hierarchy when it
    /// is not declared locally.
    pub fn find_enum_attribute_including_supertypes<'a>(
        &'a self,
        project: &'a EnumModelProject,
        name: &str,
    ) -> Option<&'a EnumAttribute> {
        if let Some(attribute) = self.find_enum_attribute(name) {
            return Some(attribute);
        }
        self.find_all_super_enum_types(project)
            .into_iter()
            .find_map(|t| t.find_enum_attribute(name))
    }

    /// The locally declared literal name attribute, if any.
    pub fn get_enum_literal_name_attribute(&self) -> Option<&EnumAttribute> {
        self.enum_attributes.iter().find(|a| a.is_literal_name())
    }

    /// True when a literal name attribute is declared locally.
    pub fn contains_enum_literal_name_attribute(&self) -> bool {
        self.get_enum_literal_name_attribute().is_some()
    }

    /// Position of a locally declared attribute in the full local list.
    pub fn attribute_position(&self, name: &str) -> Option<usize> {
        self.enum_attributes.iter().position(|a| a.name() == name)
    }

    /// Locally declared attributes plus synthesized `inherited` placeholder
    /// copies for supertype-chain attributes that are not mirrored locally.
    ///
    /// This list defines the total positional shape rows of this type must
    /// have. Placeholders are appended after the local attributes so local
    /// positions stay stable.
    pub fn get_enum_attributes_include_supertype_copies(
        &self,
        project: &EnumModelProject,
        include_literal_name: bool,
    ) -> Vec<EnumAttribute> {
        let mut result: Vec<EnumAttribute> = self
            .get_enum_attributes(include_literal_name)
            .into_iter()
            .cloned()
            .collect();
        let local_names: HashSet<&str> =
            self.enum_attributes.iter().map(|a| a.name()).collect();

        let mut seen: HashSet<String> = HashSet::new();
        for super_type in self.find_all_super_enum_types(project) {
            if super_type.qualified_name == self.qualified_name {
                continue;
            }
            for attribute in super_type.get_enum_attributes(false) {
                if attribute.is_inherited() || local_names.contains(attribute.name()) {
                    continue;
                }
                if !seen.insert(attribute.name().to_string()) {
                    continue;
                }
                if let Some(plain) = attribute.as_plain() {
                    let mut copy = plain.clone();
                    copy.inherited = true;
                    result.push(EnumAttribute::Plain(copy));
                }
            }
        }
        result
    }

    /// Resolve the full attribute list across the hierarchy.
    ///
    /// Attributes of the topmost ancestor come first in their declaration
    /// order, local `inherited` mirrors are substituted by the originals in
    /// place, and purely local attributes are appended after. The literal
    /// name attribute keeps its own positional rule and is prepended.
    pub fn find_all_enum_attributes(
        &self,
        project: &EnumModelProject,
        include_literal_name: bool,
    ) -> Vec<EnumAttribute> {
        let supers = self.find_all_super_enum_types(project);
        let mut levels: Vec<&EnumType> = Vec::new();
        let mut level_names: HashSet<&str> = HashSet::new();
        for super_type in supers.iter().rev() {
            if level_names.insert(&super_type.qualified_name) {
                levels.push(super_type);
            }
        }
        if level_names.insert(&self.qualified_name) {
            levels.push(self);
        }

        let mut result: Vec<EnumAttribute> = Vec::new();
        let mut names: HashSet<String> = HashSet::new();
        for level in levels {
            for attribute in level.get_enum_attributes(false) {
                if attribute.is_inherited() {
                    continue;
                }
                if names.insert(attribute.name().to_string()) {
                    result.push(attribute.clone());
                }
            }
        }
        if include_literal_name {
            if let Some(literal) = self.get_enum_literal_name_attribute() {
                result.insert(0, literal.clone());
            }
        }
        result
    }

    /// The attribute marked as identifier, resolved across the hierarchy.
    pub fn find_identifier_attribute(&self, project: &EnumModelProject) -> Option<EnumAttribute> {
        self.find_all_enum_attributes(project, false)
            .into_iter()
            .find(|a| a.is_identifier())
    }

    /// The attribute marked as display name, resolved across the hierarchy.
    pub fn find_used_as_name_attribute(&self, project: &EnumModelProject) -> Option<EnumAttribute> {
        self.find_all_enum_attributes(project, false)
            .into_iter()
            .find(|a| a.is_used_as_name_in_ui())
    }

    // ---- structural mutation -------------------------------------------

    /// Append a new attribute. Every owned row synchronously grows an empty
    /// cell at the same position. Returns the new attribute's position.
    pub fn new_enum_attribute(&mut self, attribute: PlainEnumAttribute) -> usize {
        let attribute = EnumAttribute::Plain(attribute);
        let cell = EnumAttributeValue::for_attribute(&attribute);
        self.enum_attributes.push(attribute);
        let index = self.enum_attributes.len() - 1;
        for row in &mut self.enum_values {
            row.insert_cell(index.min(row.len()), cell.clone());
        }
        index
    }

    /// Insert the literal name attribute at index 0. Every owned row
    /// synchronously grows a literal name cell at index 0.
    pub fn new_enum_literal_name_attribute(
        &mut self,
        attribute: EnumLiteralNameAttribute,
    ) -> usize {
        let attribute = EnumAttribute::LiteralName(attribute);
        let cell = EnumAttributeValue::for_attribute(&attribute);
        self.enum_attributes.insert(0, attribute);
        for row in &mut self.enum_values {
            row.insert_cell(0, cell.clone());
        }
        0
    }

    /// Move an attribute one position up or down within the movable range.
    ///
    /// The literal name attribute is pinned at index 0 and never reorders.
    /// A move past either end of the movable range is a no-op returning the
    /// current position. Every owned row's cell list is reordered in the
    /// same call, so the two orderings cannot diverge.
    pub fn move_enum_attribute(&mut self, name: &str, up: bool) -> Result<usize, Error> {
        let index = self
            .attribute_position(name)
            .ok_or_else(|| Error::UnknownAttribute(name.to_string()))?;
        if self.enum_attributes[index].is_literal_name() {
            return Ok(index);
        }
        let movable_start = usize::from(self.contains_enum_literal_name_attribute());
        let target = if up {
            if index <= movable_start {
                return Ok(index);
            }
            index - 1
        } else {
            if index + 1 >= self.enum_attributes.len() {
                return Ok(index);
            }
            index + 1
        };
        self.enum_attributes.swap(index, target);
        for row in &mut self.enum_values {
            row.swap_cells(index, target);
        }
        Ok(target)
    }

    /// Delete a locally declared attribute and the positionally matching
    /// cell in every owned row. Returns `false` when no such attribute is
    /// declared.
    pub fn delete_enum_attribute(&mut self, name: &str) -> bool {
        let Some(index) = self.attribute_position(name) else {
            return false;
        };
        self.enum_attributes.remove(index);
        for row in &mut self.enum_values {
            row.remove_cell(index);
        }
        debug!(
            enum_type = %self.qualified_name,
            attribute = name,
            "deleted attribute and cascaded to {} rows",
            self.enum_values.len()
        );
        true
    }

    // ---- values --------------------------------------------------------

    /// All owned rows.
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

    /// Append a new row shaped after the locally declared attribute list.
    /// Returns the new row's index.
    ///
    /// For types inheriting attributes from a supertype, row creation via
    /// [`EnumModelProject::new_enum_value`] also covers the supertype
    /// placeholder columns.
    pub fn new_enum_value(&mut self) -> usize {
        self.enum_values.push(EnumValue::with_shape(&self.enum_attributes));
        self.enum_values.len() - 1
    }

    pub(crate) fn push_enum_value(&mut self, row: EnumValue) -> usize {
        self.enum_values.push(row);
        self.enum_values.len() - 1
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

    /// Remove all rows.
    pub fn clear_enum_values(&mut self) {
        self.enum_values.clear();
    }

    /// Set a cell of an owned row by attribute name. Returns `false` when
    /// the attribute is not declared locally.
    ///
    /// # Panics
    ///
    /// Panics when `row` is out of range.
    pub fn set_enum_attribute_value(&mut self, row: usize, name: &str, value: Value) -> bool {
        let attributes = &self.enum_attributes;
        self.enum_values[row].set_enum_attribute_value(attributes, name, value)
    }

    /// Get a cell of an owned row by attribute name.
    ///
    /// # Panics
    ///
    /// Panics when `row` is out of range.
    pub fn get_enum_attribute_value(
        &self,
        row: usize,
        name: &str,
    ) -> Option<&EnumAttributeValue> {
        self.enum_values[row].find_enum_attribute_value(&self.enum_attributes, name)
    }

    // ---- hierarchy -----------------------------------------------------

    /// Resolve the direct supertype.
    pub fn find_super_enum_type<'a>(
        &self,
        project: &'a EnumModelProject,
    ) -> Option<&'a EnumType> {
        project.find_enum_type(self.super_enum_type.as_deref()?)
    }

    /// Resolve the supertype chain in order, nearest ancestor first.
    ///
    /// Traversal stops upon revisiting a type, so a cyclic hierarchy
    /// terminates. The starting type is not excluded from the result when a
    /// cycle makes it its own ancestor.
    pub fn find_all_super_enum_types<'a>(
        &self,
        project: &'a EnumModelProject,
    ) -> Vec<&'a EnumType> {
        let mut result = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = self.super_enum_type.as_deref();
        while let Some(name) = current {
            if !visited.insert(name) {
                break;
            }
            match project.find_enum_type(name) {
                Some(super_type) => {
                    result.push(super_type);
                    current = super_type.super_enum_type.as_deref();
                }
                None => break,
            }
        }
        result
    }

    /// Strict subtype test by qualified name.
    ///
    /// A type is not a subtype of itself, unless a hierarchy cycle makes it
    /// reachable from itself. That quirk is intentional and covered by
    /// tests; callers relying on cycle detection use it.
    pub fn is_sub_enum_type_of(&self, candidate: &str, project: &EnumModelProject) -> bool {
        self.find_all_super_enum_types(project)
            .iter()
            .any(|t| t.qualified_name == candidate)
    }

    /// All project types whose supertype chain reaches this type.
    pub fn search_subclassing_enum_types<'a>(
        &self,
        project: &'a EnumModelProject,
    ) -> Vec<&'a EnumType> {
        project
            .enum_types()
            .filter(|t| t.is_sub_enum_type_of(&self.qualified_name, project))
            .collect()
    }

    /// Attributes of the supertype chain not yet mirrored locally as
    /// `inherited`.
    pub fn find_inherit_enum_attribute_candidates(
        &self,
        project: &EnumModelProject,
    ) -> Vec<EnumAttribute> {
        let local_names: HashSet<&str> =
            self.enum_attributes.iter().map(|a| a.name()).collect();
        let mut seen: HashSet<String> = HashSet::new();
        let mut result = Vec::new();
        for super_type in self.find_all_super_enum_types(project) {
            if super_type.qualified_name == self.qualified_name {
                continue;
            }
            for attribute in super_type.get_enum_attributes(false) {
                if attribute.is_inherited() || local_names.contains(attribute.name()) {
                    continue;
                }
                if seen.insert(attribute.name().to_string()) {
                    result.push(attribute.clone());
                }
            }
        }
        result
    }

    // ---- state queries -------------------------------------------------

    /// True when this type can hold rows directly. Abstract types cannot;
    /// extensible types can only once rows are actually stored.
    pub fn is_capable_of_containing_values(&self) -> bool {
        !self.is_abstract && (!self.extensible || !self.enum_values.is_empty())
    }

    /// True when the identifier boundary check applies: the type is
    /// extensible and a boundary is configured.
    pub fn is_identifier_boundary_check_necessary(&self) -> bool {
        self.extensible
            && self
                .identifier_boundary
                .as_deref()
                .is_some_and(|b| !b.is_empty())
    }
}
