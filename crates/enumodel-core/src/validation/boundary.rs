//! Identifier boundary checking.

use std::cmp::Ordering;

use super::codes;
use super::message::{Message, MessageList};
use crate::datatype::ValueDatatype;
use crate::model::{EnumModelProject, EnumType, ValueContainer};

/// Decides whether an identifier value lies in the half of the identifier
/// space matching the container it is stored in.
///
/// Model-side rows own the half strictly below the boundary, content-side
/// rows own the half at or above it. The boundary value itself belongs to
/// the content.
///
/// The check is a guarded command: [`can_validate`](Self::can_validate)
/// verifies every precondition, and
/// [`validate_if_possible`](Self::validate_if_possible) appends a message
/// only when the preconditions hold. A malformed or irrelevant configuration
/// (no boundary, unparsable boundary, no identifier attribute) skips
/// silently; the type-level validation reports the broken configuration
/// itself.
pub struct IdentifierBoundaryValidator<'a> {
    project: &'a EnumModelProject,
    enum_type: Option<&'a EnumType>,
    is_content: bool,
    identifier_value: Option<&'a str>,
}

impl<'a> IdentifierBoundaryValidator<'a> {
    /// Create a validator for one identifier value.
    pub fn new(
        project: &'a EnumModelProject,
        container: &ValueContainer<'a>,
        identifier_value: Option<&'a str>,
    ) -> Self {
        Self {
            project,
            enum_type: container.find_enum_type(project),
            is_content: container.is_content(),
            identifier_value,
        }
    }

    fn boundary(&self) -> Option<&'a str> {
        self.enum_type?
            .identifier_boundary
            .as_deref()
            .filter(|b| !b.is_empty())
    }

    fn datatype(&self) -> Option<ValueDatatype> {
        let enum_type = self.enum_type?;
        let attribute = enum_type.find_identifier_attribute(self.project)?;
        self.project.find_datatype(attribute.datatype_name())
    }

    /// True when every precondition for the boundary check holds.
    pub fn can_validate(&self) -> bool {
        let Some(value) = self.identifier_value else {
            return false;
        };
        if value.is_empty() {
            return false;
        }
        let Some(enum_type) = self.enum_type else {
            return false;
        };
        if !enum_type.is_identifier_boundary_check_necessary() {
            return false;
        }
        let Some(datatype) = self.datatype() else {
            return false;
        };
        if !datatype.supports_compare() {
            return false;
        }
        match self.boundary() {
            Some(boundary) => datatype.is_parsable(boundary),
            None => false,
        }
    }

    /// Compare the value against the boundary for the resolved container.
    ///
    /// Only meaningful when [`can_validate`](Self::can_validate) holds. An
    /// unparsable value is treated as valid here; the datatype check reports
    /// it separately.
    pub fn is_identifier_valid(&self) -> bool {
        let (Some(value), Some(boundary), Some(datatype)) =
            (self.identifier_value, self.boundary(), self.datatype())
        else {
            return true;
        };
        match datatype.compare(value, boundary) {
            None => true,
            Some(ordering) => {
                if self.is_content {
                    ordering != Ordering::Less
                } else {
                    ordering == Ordering::Less
                }
            }
        }
    }

    /// Append the disallowed-value error when the preconditions hold and the
    /// value lies on the wrong side.
    pub fn validate_if_possible(
        &self,
        messages: &mut MessageList,
        object: &str,
        property: &str,
    ) {
        if !self.can_validate() {
            return;
        }
        if !self.is_identifier_valid() {
            let side = if self.is_content { "at or above" } else { "below" };
            let boundary = self.boundary().unwrap_or_default();
            messages.push(
                Message::error(
                    codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_IDENTIFIER_BOUNDARY_DISALLOWED,
                    format!(
                        "identifier value '{}' must be {} the boundary '{}'",
                        self.identifier_value.unwrap_or_default(),
                        side,
                        boundary
                    ),
                )
                .for_property(object, property),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnumContent, EnumType, PlainEnumAttribute};

    fn boundary_project() -> EnumModelProject {
        let mut project = EnumModelProject::new("test");
        let mut payment = EnumType::new("model.Payment")
            .with_extensible()
            .with_enum_content_name("content.Payment")
            .with_identifier_boundary("10");
        payment.new_enum_attribute(
            PlainEnumAttribute::new("id", "Integer")
                .with_identifier()
                .with_unique()
                .with_mandatory(),
        );
        project.add_enum_type(payment);
        project.add_enum_content(EnumContent::new("content.Payment", "model.Payment"));
        project
    }

    #[test]
    fn test_boundary_value_belongs_to_content() {
        let project = boundary_project();
        let payment = project.find_enum_type("model.Payment").unwrap();
        let content = project.find_enum_content("content.Payment").unwrap();

        let model_side = ValueContainer::Type(payment);
        let content_side = ValueContainer::Content(content);

        // "10" is valid for content, invalid for the model.
        let validator = IdentifierBoundaryValidator::new(&project, &content_side, Some("10"));
        assert!(validator.can_validate());
        assert!(validator.is_identifier_valid());

        let validator = IdentifierBoundaryValidator::new(&project, &model_side, Some("10"));
        assert!(validator.can_validate());
        assert!(!validator.is_identifier_valid());

        // "5" is the other way round.
        let validator = IdentifierBoundaryValidator::new(&project, &model_side, Some("5"));
        assert!(validator.is_identifier_valid());

        let validator = IdentifierBoundaryValidator::new(&project, &content_side, Some("5"));
        assert!(!validator.is_identifier_valid());
    }

    #[test]
    fn test_unparsable_boundary_skips_silently() {
        let mut project = boundary_project();
        project
            .enum_type_mut("model.Payment")
            .unwrap()
            .identifier_boundary = Some("ten".to_string());

        let payment = project.find_enum_type("model.Payment").unwrap();
        let container = ValueContainer::Type(payment);
        let validator = IdentifierBoundaryValidator::new(&project, &container, Some("5"));

        assert!(!validator.can_validate());
        let mut messages = MessageList::new();
        validator.validate_if_possible(&mut messages, "model.Payment", "id");
        assert!(messages.is_empty());
    }

    #[test]
    fn test_non_extensible_type_needs_no_check() {
        let mut project = boundary_project();
        project.enum_type_mut("model.Payment").unwrap().extensible = false;

        let payment = project.find_enum_type("model.Payment").unwrap();
        let container = ValueContainer::Type(payment);
        let validator = IdentifierBoundaryValidator::new(&project, &container, Some("99"));

        assert!(!validator.can_validate());
    }

    #[test]
    fn test_disallowed_value_appends_message() {
        let project = boundary_project();
        let payment = project.find_enum_type("model.Payment").unwrap();
        let container = ValueContainer::Type(payment);
        let validator = IdentifierBoundaryValidator::new(&project, &container, Some("12"));

        let mut messages = MessageList::new();
        validator.validate_if_possible(&mut messages, "model.Payment", "id");

        assert_eq!(messages.len(), 1);
        assert!(messages.contains_code(
            codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_IDENTIFIER_BOUNDARY_DISALLOWED
        ));
    }
}
