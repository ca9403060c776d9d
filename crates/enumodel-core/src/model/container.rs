//! Uniform view over the two kinds of row containers.

use super::attribute::EnumAttribute;
use super::content::EnumContent;
use super::enum_type::EnumType;
use super::enum_value::EnumValue;
use super::project::EnumModelProject;

/// A borrowed view of a row container, either the model side (rows owned by
/// the type itself) or the content side (rows supplied externally).
///
/// Validation and boundary checks resolve the container at lookup time; rows
/// never store which side they live on.
#[derive(Debug, Clone, Copy)]
pub enum ValueContainer<'a> {
    /// Rows stored on the enumeration type.
    Type(&'a EnumType),
    /// Rows stored in an extension content.
    Content(&'a EnumContent),
}

impl<'a> ValueContainer<'a> {
    /// The container's qualified name.
    pub fn qualified_name(&self) -> &'a str {
        match self {
            ValueContainer::Type(t) => &t.qualified_name,
            ValueContainer::Content(c) => &c.qualified_name,
        }
    }

    /// True for the content side.
    pub fn is_content(&self) -> bool {
        matches!(self, ValueContainer::Content(_))
    }

    /// All rows of the container.
    pub fn enum_values(&self) -> &'a [EnumValue] {
        match self {
            ValueContainer::Type(t) => t.enum_values(),
            ValueContainer::Content(c) => c.enum_values(),
        }
    }

    /// Resolve the enumeration type governing this container's shape.
    pub fn find_enum_type(&self, project: &'a EnumModelProject) -> Option<&'a EnumType> {
        match self {
            ValueContainer::Type(t) => Some(t),
            ValueContainer::Content(c) => project.find_enum_type(&c.enum_type),
        }
    }

    /// The attribute list rows of this container must align with. Type
    /// containers include the literal name slot, content containers do not.
    /// Empty when a content's type does not resolve.
    pub fn applicable_attributes(&self, project: &EnumModelProject) -> Vec<EnumAttribute> {
        match self {
            ValueContainer::Type(t) => {
                t.get_enum_attributes_include_supertype_copies(project, true)
            }
            ValueContainer::Content(c) => match project.find_enum_type(&c.enum_type) {
                Some(t) => t.get_enum_attributes_include_supertype_copies(project, false),
                None => Vec::new(),
            },
        }
    }
}
