//! The cross-entity validation rule engine.
//!
//! Every rule produces a distinct stable message code and the rules compose
//! independently: an entity can carry any subset of findings at once. Broken
//! invariants never raise errors here, they accumulate into the returned
//! [`MessageList`].

use std::collections::{HashMap, HashSet};

use super::boundary::IdentifierBoundaryValidator;
use super::codes;
use super::message::{Message, MessageList};
use crate::model::{
    EnumAttribute, EnumAttributeValue, EnumContent, EnumModelProject, EnumType, ValueContainer,
};

/// Check for letters, digits and underscores with a non-digit start.
pub(crate) fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validator for enumeration types, contents and their rows.
pub struct EnumValidator<'a> {
    project: &'a EnumModelProject,
}

impl<'a> EnumValidator<'a> {
    /// Create a validator reading from the given project.
    pub fn new(project: &'a EnumModelProject) -> Self {
        Self { project }
    }

    /// Validate a type definition, its attributes and its owned rows.
    pub fn validate_enum_type(&self, enum_type: &EnumType) -> MessageList {
        let mut messages = MessageList::new();
        self.validate_type_structure(enum_type, &mut messages);
        for attribute in enum_type.get_enum_attributes(true) {
            self.validate_enum_attribute(enum_type, attribute, &mut messages);
        }
        self.validate_container(&ValueContainer::Type(enum_type), &mut messages);
        messages
    }

    /// Validate a content and its rows.
    pub fn validate_enum_content(&self, content: &EnumContent) -> MessageList {
        let mut messages = MessageList::new();
        let object = &content.qualified_name;
        let Some(enum_type) = self.project.find_enum_type(&content.enum_type) else {
            messages.push(
                Message::error(
                    codes::MSGCODE_ENUM_CONTENT_ENUM_TYPE_DOES_NOT_EXIST,
                    format!("enumeration type '{}' does not exist", content.enum_type),
                )
                .for_property(object, "enumType"),
            );
            return messages;
        };
        if enum_type.is_abstract {
            messages.push(
                Message::error(
                    codes::MSGCODE_ENUM_CONTENT_ENUM_TYPE_IS_ABSTRACT,
                    format!("enumeration type '{}' is abstract", content.enum_type),
                )
                .for_property(object, "enumType"),
            );
        }
        if !enum_type.extensible {
            messages.push(
                Message::error(
                    codes::MSGCODE_ENUM_CONTENT_VALUES_ARE_PART_OF_TYPE,
                    format!(
                        "values of '{}' are defined in the model, not in a content",
                        content.enum_type
                    ),
                )
                .for_property(object, "enumType"),
            );
        } else if enum_type.enum_content_name != content.qualified_name {
            messages.push(
                Message::error(
                    codes::MSGCODE_ENUM_CONTENT_NAME_NOT_CORRECT,
                    format!(
                        "content name '{}' differs from the declared name '{}'",
                        content.qualified_name, enum_type.enum_content_name
                    ),
                )
                .for_property(object, "qualifiedName"),
            );
        }
        self.validate_container(&ValueContainer::Content(content), &mut messages);
        messages
    }

    /// Validate one row of a container.
    pub fn validate_enum_value(
        &self,
        container: &ValueContainer<'a>,
        row_index: usize,
    ) -> MessageList {
        let mut messages = MessageList::new();
        let attributes = container.applicable_attributes(self.project);
        let unique_counts = self.count_unique_values(container, &attributes);
        self.validate_row(container, &attributes, &unique_counts, row_index, &mut messages);
        messages
    }

    // ---- type structure ------------------------------------------------

    fn validate_type_structure(&self, enum_type: &EnumType, messages: &mut MessageList) {
        let object = &enum_type.qualified_name;

        if let Some(super_name) = enum_type.super_enum_type.as_deref() {
            match self.project.find_enum_type(super_name) {
                None => messages.push(
                    Message::error(
                        codes::MSGCODE_ENUM_TYPE_SUPERTYPE_DOES_NOT_EXIST,
                        format!("supertype '{}' does not exist", super_name),
                    )
                    .for_property(object, "supertype"),
                ),
                Some(super_type) if !super_type.is_abstract => messages.push(
                    Message::error(
                        codes::MSGCODE_ENUM_TYPE_SUPERTYPE_IS_NOT_ABSTRACT,
                        format!("supertype '{}' is not abstract", super_name),
                    )
                    .for_property(object, "supertype"),
                ),
                _ => {}
            }
        }

        if !enum_type.is_abstract {
            let local_names: HashSet<&str> = enum_type
                .get_enum_attributes(true)
                .iter()
                .map(|a| a.name())
                .collect();
            let mut missing: Vec<&str> = Vec::new();
            let mut seen: HashSet<&str> = HashSet::new();
            for super_type in enum_type.find_all_super_enum_types(self.project) {
                if super_type.qualified_name == enum_type.qualified_name {
                    continue;
                }
                for attribute in super_type.get_enum_attributes(false) {
                    if attribute.is_inherited() {
                        continue;
                    }
                    if !local_names.contains(attribute.name()) && seen.insert(attribute.name()) {
                        missing.push(attribute.name());
                    }
                }
            }
            if !missing.is_empty() {
                messages.push(
                    Message::error(
                        codes::MSGCODE_ENUM_TYPE_NOT_INHERITED_ATTRIBUTES_IN_SUPERTYPE_HIERARCHY,
                        format!(
                            "supertype attributes not inherited: {}",
                            missing.join(", ")
                        ),
                    )
                    .for_property(object, "enumAttributes"),
                );
            }
        }

        let literal_count = enum_type
            .get_enum_attributes(true)
            .iter()
            .filter(|a| a.is_literal_name())
            .count();
        let literal_needed = enum_type.is_capable_of_containing_values();
        if literal_count > 1 {
            messages.push(
                Message::error(
                    codes::MSGCODE_ENUM_TYPE_MULTIPLE_LITERAL_NAME_ATTRIBUTES,
                    "more than one literal name attribute",
                )
                .for_property(object, "enumAttributes"),
            );
        }
        if literal_needed && literal_count == 0 {
            messages.push(
                Message::error(
                    codes::MSGCODE_ENUM_TYPE_NO_LITERAL_NAME_ATTRIBUTE,
                    "a type holding values needs a literal name attribute",
                )
                .for_property(object, "enumAttributes"),
            );
        }
        if !literal_needed && literal_count > 0 {
            messages.push(
                Message::warning(
                    codes::MSGCODE_ENUM_TYPE_LITERAL_NAME_ATTRIBUTE_NOT_NEEDED,
                    "the literal name attribute is not needed",
                )
                .for_property(object, "enumAttributes"),
            );
        }

        if !enum_type.is_abstract {
            if enum_type.find_identifier_attribute(self.project).is_none() {
                messages.push(
                    Message::error(
                        codes::MSGCODE_ENUM_TYPE_NO_IDENTIFIER_ATTRIBUTE,
                        "no attribute is marked as identifier",
                    )
                    .for_property(object, "enumAttributes"),
                );
            }
            if enum_type.find_used_as_name_attribute(self.project).is_none() {
                messages.push(
                    Message::error(
                        codes::MSGCODE_ENUM_TYPE_NO_USED_AS_NAME_IN_UI_ATTRIBUTE,
                        "no attribute is marked as display name",
                    )
                    .for_property(object, "enumAttributes"),
                );
            }
        }

        if enum_type.extensible && enum_type.enum_content_name.is_empty() {
            messages.push(
                Message::error(
                    codes::MSGCODE_ENUM_TYPE_ENUM_CONTENT_NAME_EMPTY,
                    "an extensible type must declare a content name",
                )
                .for_property(object, "enumContentName"),
            );
        }

        if enum_type.is_abstract && !enum_type.enum_values().is_empty() {
            messages.push(
                Message::warning(
                    codes::MSGCODE_ENUM_TYPE_ENUM_VALUES_OBSOLETE,
                    "rows stored on an abstract type will never be used",
                )
                .for_property(object, "enumValues"),
            );
        }

        if enum_type.extensible && !enum_type.enum_content_name.is_empty() {
            if let Some(content) = self.project.find_enum_content(&enum_type.enum_content_name) {
                if content.enum_type != enum_type.qualified_name {
                    messages.push(
                        Message::error(
                            codes::MSGCODE_ENUM_TYPE_ENUM_CONTENT_ALREADY_USED,
                            format!(
                                "content '{}' is already used by '{}'",
                                enum_type.enum_content_name, content.enum_type
                            ),
                        )
                        .for_property(object, "enumContentName"),
                    );
                }
            }
        }

        if let Some(boundary) = enum_type
            .identifier_boundary
            .as_deref()
            .filter(|b| !b.is_empty())
        {
            if let Some(attribute) = enum_type.find_identifier_attribute(self.project) {
                if let Some(datatype) = self.project.find_datatype(attribute.datatype_name()) {
                    if !datatype.is_parsable(boundary) {
                        messages.push(
                            Message::error(
                                codes::MSGCODE_ENUM_TYPE_IDENTIFIER_BOUNDARY_NOT_PARSABLE,
                                format!(
                                    "identifier boundary '{}' is no instance of datatype {}",
                                    boundary,
                                    datatype.name()
                                ),
                            )
                            .for_property(object, "identifierBoundary"),
                        );
                    }
                }
            }
        }
    }

    // ---- attributes ----------------------------------------------------

    fn validate_enum_attribute(
        &self,
        enum_type: &EnumType,
        attribute: &EnumAttribute,
        messages: &mut MessageList,
    ) {
        let object = &enum_type.qualified_name;
        match attribute {
            EnumAttribute::LiteralName(literal) => {
                let provider = &literal.default_value_provider_attribute;
                if provider.is_empty() {
                    return;
                }
                match enum_type.find_enum_attribute_including_supertypes(self.project, provider) {
                    None => messages.push(
                        Message::error(
                            codes::MSGCODE_ENUM_LITERAL_NAME_ATTRIBUTE_DEFAULT_VALUE_PROVIDER_DOES_NOT_EXIST,
                            format!("default value provider '{}' does not exist", provider),
                        )
                        .for_property(object, attribute.name()),
                    ),
                    Some(provider_attribute)
                        if provider_attribute.datatype_name() != "String" =>
                    {
                        messages.push(
                            Message::error(
                                codes::MSGCODE_ENUM_LITERAL_NAME_ATTRIBUTE_DEFAULT_VALUE_PROVIDER_NOT_OF_DATATYPE_STRING,
                                format!(
                                    "default value provider '{}' is not of datatype String",
                                    provider
                                ),
                            )
                            .for_property(object, attribute.name()),
                        )
                    }
                    _ => {}
                }
            }
            EnumAttribute::Plain(plain) => {
                if !is_valid_identifier(&plain.name) {
                    messages.push(
                        Message::error(
                            codes::MSGCODE_ENUM_ATTRIBUTE_NAME_NOT_A_VALID_IDENTIFIER,
                            format!("'{}' is not a valid attribute name", plain.name),
                        )
                        .for_property(object, &plain.name),
                    );
                }

                let local_count = enum_type
                    .get_enum_attributes(true)
                    .iter()
                    .filter(|a| a.name() == plain.name)
                    .count();
                if local_count > 1 {
                    messages.push(
                        Message::error(
                            codes::MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_NAME,
                            format!("duplicate attribute name '{}'", plain.name),
                        )
                        .for_property(object, &plain.name),
                    );
                } else if !plain.inherited && self.hierarchy_declares(enum_type, &plain.name) {
                    messages.push(
                        Message::error(
                            codes::MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_NAME_IN_SUPERTYPE_HIERARCHY,
                            format!(
                                "attribute '{}' collides with a supertype attribute",
                                plain.name
                            ),
                        )
                        .for_property(object, &plain.name),
                    );
                }

                if self.project.find_datatype(&plain.datatype).is_none() {
                    messages.push(
                        Message::error(
                            codes::MSGCODE_ENUM_ATTRIBUTE_DATATYPE_DOES_NOT_EXIST,
                            format!("datatype '{}' does not exist", plain.datatype),
                        )
                        .for_property(object, &plain.name),
                    );
                }

                if plain.inherited && !self.hierarchy_declares(enum_type, &plain.name) {
                    messages.push(
                        Message::error(
                            codes::MSGCODE_ENUM_ATTRIBUTE_NO_SUCH_ATTRIBUTE_IN_SUPERTYPE_HIERARCHY,
                            format!(
                                "no attribute '{}' in the supertype hierarchy",
                                plain.name
                            ),
                        )
                        .for_property(object, &plain.name),
                    );
                }

                if plain.identifier {
                    let count = enum_type
                        .find_all_enum_attributes(self.project, false)
                        .iter()
                        .filter(|a| a.is_identifier())
                        .count();
                    if count > 1 {
                        messages.push(
                            Message::error(
                                codes::MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_INDICATION_AS_IDENTIFIER,
                                format!("'{}' is not the only identifier attribute", plain.name),
                            )
                            .for_property(object, &plain.name),
                        );
                    }
                }
                if plain.used_as_name_in_ui {
                    let count = enum_type
                        .find_all_enum_attributes(self.project, false)
                        .iter()
                        .filter(|a| a.is_used_as_name_in_ui())
                        .count();
                    if count > 1 {
                        messages.push(
                            Message::error(
                                codes::MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_INDICATION_AS_NAME_IN_UI,
                                format!(
                                    "'{}' is not the only display name attribute",
                                    plain.name
                                ),
                            )
                            .for_property(object, &plain.name),
                        );
                    }
                }
            }
        }
    }

    /// True when a supertype of the given type declares an attribute of the
    /// name itself (not as an inherited mirror).
    fn hierarchy_declares(&self, enum_type: &EnumType, name: &str) -> bool {
        enum_type
            .find_all_super_enum_types(self.project)
            .iter()
            .filter(|t| t.qualified_name != enum_type.qualified_name)
            .any(|t| {
                t.get_enum_attributes(false)
                    .iter()
                    .any(|a| !a.is_inherited() && a.name() == name)
            })
    }

    // ---- rows ----------------------------------------------------------

    fn validate_container(&self, container: &ValueContainer<'_>, messages: &mut MessageList) {
        let attributes = container.applicable_attributes(self.project);
        let unique_counts = self.count_unique_values(container, &attributes);
        for row_index in 0..container.enum_values().len() {
            self.validate_row(container, &attributes, &unique_counts, row_index, messages);
        }
    }

    fn identifier_position(attributes: &[EnumAttribute]) -> Option<usize> {
        attributes
            .iter()
            .position(|a| a.is_identifier() && a.is_unique())
    }

    /// Occurrence counts per unique attribute position across the container
    /// scope. Duplicate detection stays near-linear in the number of rows.
    fn count_unique_values(
        &self,
        container: &ValueContainer<'_>,
        attributes: &[EnumAttribute],
    ) -> HashMap<usize, HashMap<String, usize>> {
        let mut counts: HashMap<usize, HashMap<String, usize>> = attributes
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_unique())
            .map(|(position, _)| (position, HashMap::new()))
            .collect();
        for row in container.enum_values() {
            for (position, per_value) in counts.iter_mut() {
                let Some(cell) = row.enum_attribute_values().get(*position) else {
                    continue;
                };
                if let Some(raw) = cell.value().raw() {
                    if !raw.is_empty() {
                        *per_value.entry(raw).or_insert(0) += 1;
                    }
                }
            }
        }
        counts
    }

    fn validate_row(
        &self,
        container: &ValueContainer<'_>,
        attributes: &[EnumAttribute],
        unique_counts: &HashMap<usize, HashMap<String, usize>>,
        row_index: usize,
        messages: &mut MessageList,
    ) {
        let object = container.qualified_name();
        let row = &container.enum_values()[row_index];
        if row.len() != attributes.len() {
            // Structural desync, positions are unreliable. Report and stop,
            // a reload is required to converge, the model never resyncs rows
            // on its own.
            messages.push(
                Message::error(
                    codes::MSGCODE_ENUM_VALUE_NUMBER_OF_VALUES_DOES_NOT_MATCH,
                    format!(
                        "row {} has {} values but the container defines {} attributes",
                        row_index,
                        row.len(),
                        attributes.len()
                    ),
                )
                .for_property(object, "enumAttributeValues"),
            );
            return;
        }

        let identifier_position = Self::identifier_position(attributes);
        for (position, attribute) in attributes.iter().enumerate() {
            let cell = row.get_enum_attribute_value(position);
            let is_identifier_cell = identifier_position == Some(position);
            self.validate_cell(
                container,
                attribute,
                cell,
                position,
                is_identifier_cell,
                unique_counts,
                messages,
            );
        }
    }

    fn validate_cell(
        &self,
        container: &ValueContainer<'_>,
        attribute: &EnumAttribute,
        cell: &EnumAttributeValue,
        position: usize,
        is_identifier_cell: bool,
        unique_counts: &HashMap<usize, HashMap<String, usize>>,
        messages: &mut MessageList,
    ) {
        let object = container.qualified_name();
        let property = attribute.name();

        // Parsability of plain content. International content is checked per
        // locale by the mandatory rule instead.
        if let Some(raw) = cell.value().as_plain() {
            if !raw.is_empty() {
                if let Some(datatype) = self.project.find_datatype(attribute.datatype_name()) {
                    if !datatype.is_parsable(raw) {
                        messages.push(
                            Message::error(
                                codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_NOT_PARSABLE,
                                format!(
                                    "'{}' is no instance of datatype {}",
                                    raw,
                                    datatype.name()
                                ),
                            )
                            .for_property(object, property),
                        );
                    }
                }
            }
        }

        if attribute.is_mandatory() {
            if cell.is_empty() {
                messages.push(
                    Message::error(
                        codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_MANDATORY_VALUE_EMPTY,
                        format!("the mandatory attribute '{}' has no value", property),
                    )
                    .for_property(object, property),
                );
            }
            if let Some(international) = cell.value().as_international() {
                for locale in self.project.supported_locales() {
                    let missing = international
                        .get(locale)
                        .map_or(true, |text| text.is_empty());
                    if missing {
                        messages.push(
                            Message::error(
                                codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_MULTILINGUAL_VALUE_NOT_SET,
                                format!(
                                    "attribute '{}' has no text for locale '{}'",
                                    property, locale
                                ),
                            )
                            .for_property(object, property),
                        );
                    }
                }
            }
        }

        if cell.is_literal_name_value() {
            if let Some(raw) = cell.value().as_plain() {
                if !raw.is_empty() && !is_valid_identifier(raw) {
                    messages.push(
                        Message::error(
                            codes::MSGCODE_ENUM_LITERAL_NAME_ATTRIBUTE_VALUE_IS_NO_VALID_JAVA_IDENTIFIER,
                            format!("'{}' is not a valid Java identifier", raw),
                        )
                        .for_property(object, property),
                    );
                }
            }
        }

        if attribute.is_unique() {
            if let Some(raw) = cell.value().raw().filter(|raw| !raw.is_empty()) {
                let occurrences = unique_counts
                    .get(&position)
                    .and_then(|per_value| per_value.get(&raw))
                    .copied()
                    .unwrap_or(0);
                if occurrences > 1 {
                    messages.push(
                        Message::error(
                            codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_UNIQUE_IDENTIFIER_NOT_UNIQUE,
                            format!("value '{}' of '{}' is not unique", raw, property),
                        )
                        .for_property(object, property),
                    );
                }
            }
        }

        if is_identifier_cell {
            if cell.value().raw().filter(|raw| !raw.is_empty()).is_none() {
                messages.push(
                    Message::error(
                        codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_UNIQUE_IDENTIFIER_VALUE_EMPTY,
                        format!("the identifier attribute '{}' has no value", property),
                    )
                    .for_property(object, property),
                );
            }
            let boundary_validator = IdentifierBoundaryValidator::new(
                self.project,
                container,
                cell.value().as_plain(),
            );
            boundary_validator.validate_if_possible(messages, object, property);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnumLiteralNameAttribute, PlainEnumAttribute};
    use crate::value::{InternationalString, Value};

    fn color_type() -> EnumType {
        let mut color = EnumType::new("model.Color");
        color.new_enum_literal_name_attribute(EnumLiteralNameAttribute::new());
        color.new_enum_attribute(
            PlainEnumAttribute::new("id", "Integer")
                .with_identifier()
                .with_unique()
                .with_mandatory(),
        );
        color.new_enum_attribute(
            PlainEnumAttribute::new("name", "String").with_used_as_name_in_ui(),
        );
        color
    }

    fn add_row(color: &mut EnumType, literal: &str, id: &str, name: &str) -> usize {
        let row = color.new_enum_value();
        color.set_enum_attribute_value(row, crate::model::LITERAL_NAME, Value::plain(literal));
        color.set_enum_attribute_value(row, "id", Value::plain(id));
        color.set_enum_attribute_value(row, "name", Value::plain(name));
        row
    }

    fn validate_type(project: &EnumModelProject, name: &str) -> MessageList {
        let enum_type = project.find_enum_type(name).unwrap();
        EnumValidator::new(project).validate_enum_type(enum_type)
    }

    #[test]
    fn test_well_formed_type_has_no_findings() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        add_row(&mut color, "RED", "1", "red");
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(messages.is_empty(), "unexpected findings: {:?}", messages);
    }

    #[test]
    fn test_supertype_must_exist_and_be_abstract() {
        let mut project = EnumModelProject::new("test");
        let mut orphan = color_type();
        orphan.qualified_name = "model.Orphan".to_string();
        orphan.super_enum_type = Some("model.Missing".to_string());
        project.add_enum_type(orphan);

        let messages = validate_type(&project, "model.Orphan");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_TYPE_SUPERTYPE_DOES_NOT_EXIST));

        let mut project = EnumModelProject::new("test");
        project.add_enum_type(color_type());
        let mut sub = color_type();
        sub.qualified_name = "model.Sub".to_string();
        sub.super_enum_type = Some("model.Color".to_string());
        project.add_enum_type(sub);

        let messages = validate_type(&project, "model.Sub");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_TYPE_SUPERTYPE_IS_NOT_ABSTRACT));
    }

    #[test]
    fn test_concrete_type_must_mirror_supertype_attributes() {
        let mut project = EnumModelProject::new("test");
        let mut base = EnumType::new("model.Base").with_abstract();
        base.new_enum_attribute(PlainEnumAttribute::new("code", "String"));
        project.add_enum_type(base);

        let mut sub = color_type();
        sub.qualified_name = "model.Sub".to_string();
        sub.super_enum_type = Some("model.Base".to_string());
        project.add_enum_type(sub);

        let messages = validate_type(&project, "model.Sub");
        assert!(messages
            .contains_code(codes::MSGCODE_ENUM_TYPE_NOT_INHERITED_ATTRIBUTES_IN_SUPERTYPE_HIERARCHY));

        project.inherit_enum_attributes("model.Sub", &["code"]).unwrap();
        let messages = validate_type(&project, "model.Sub");
        assert!(!messages
            .contains_code(codes::MSGCODE_ENUM_TYPE_NOT_INHERITED_ATTRIBUTES_IN_SUPERTYPE_HIERARCHY));
    }

    #[test]
    fn test_literal_name_attribute_required_and_not_needed() {
        let mut project = EnumModelProject::new("test");
        let mut color = EnumType::new("model.Color");
        color.new_enum_attribute(
            PlainEnumAttribute::new("id", "Integer")
                .with_identifier()
                .with_unique(),
        );
        color.new_enum_attribute(
            PlainEnumAttribute::new("name", "String").with_used_as_name_in_ui(),
        );
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_TYPE_NO_LITERAL_NAME_ATTRIBUTE));
        assert!(!messages.contains_code(codes::MSGCODE_ENUM_TYPE_LITERAL_NAME_ATTRIBUTE_NOT_NEEDED));

        // An abstract type does not hold values, the attribute is noise there.
        let mut abstract_color = color_type().with_abstract();
        abstract_color.qualified_name = "model.AbstractColor".to_string();
        project.add_enum_type(abstract_color);

        let messages = validate_type(&project, "model.AbstractColor");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_TYPE_LITERAL_NAME_ATTRIBUTE_NOT_NEEDED));
        assert!(!messages.contains_code(codes::MSGCODE_ENUM_TYPE_NO_LITERAL_NAME_ATTRIBUTE));
    }

    #[test]
    fn test_multiple_literal_name_attributes() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        color.new_enum_literal_name_attribute(EnumLiteralNameAttribute::new());
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_TYPE_MULTIPLE_LITERAL_NAME_ATTRIBUTES));
    }

    #[test]
    fn test_identifier_and_name_designation_presence() {
        let mut project = EnumModelProject::new("test");
        let mut bare = EnumType::new("model.Bare");
        bare.new_enum_literal_name_attribute(EnumLiteralNameAttribute::new());
        bare.new_enum_attribute(PlainEnumAttribute::new("id", "Integer"));
        project.add_enum_type(bare);

        let messages = validate_type(&project, "model.Bare");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_TYPE_NO_IDENTIFIER_ATTRIBUTE));
        assert!(messages.contains_code(codes::MSGCODE_ENUM_TYPE_NO_USED_AS_NAME_IN_UI_ATTRIBUTE));
    }

    #[test]
    fn test_extensible_type_needs_content_name() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        color.extensible = true;
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_TYPE_ENUM_CONTENT_NAME_EMPTY));
    }

    #[test]
    fn test_obsolete_values_warning_follows_abstract_flag() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        add_row(&mut color, "RED", "1", "red");
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(!messages.contains_code(codes::MSGCODE_ENUM_TYPE_ENUM_VALUES_OBSOLETE));

        project.enum_type_mut("model.Color").unwrap().is_abstract = true;
        project.clear_validation_cache();
        let messages = validate_type(&project, "model.Color");
        let obsolete = messages
            .get_message_by_code(codes::MSGCODE_ENUM_TYPE_ENUM_VALUES_OBSOLETE)
            .unwrap();
        assert_eq!(obsolete.severity, crate::validation::Severity::Warning);

        // Toggling extensible while abstract does not change the finding.
        project.enum_type_mut("model.Color").unwrap().extensible = true;
        project
            .enum_type_mut("model.Color")
            .unwrap()
            .enum_content_name = "content.Color".to_string();
        project.clear_validation_cache();
        let messages = validate_type(&project, "model.Color");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_TYPE_ENUM_VALUES_OBSOLETE));

        // Back to concrete clears it.
        project.enum_type_mut("model.Color").unwrap().is_abstract = false;
        project.enum_type_mut("model.Color").unwrap().extensible = false;
        project.clear_validation_cache();
        let messages = validate_type(&project, "model.Color");
        assert!(!messages.contains_code(codes::MSGCODE_ENUM_TYPE_ENUM_VALUES_OBSOLETE));
    }

    #[test]
    fn test_content_already_used_by_other_type() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        color.extensible = true;
        color.enum_content_name = "content.Shared".to_string();
        color.clear_enum_values();
        project.add_enum_type(color);
        project.add_enum_content(crate::model::EnumContent::new(
            "content.Shared",
            "model.Other",
        ));

        let messages = validate_type(&project, "model.Color");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_TYPE_ENUM_CONTENT_ALREADY_USED));
    }

    #[test]
    fn test_identifier_boundary_must_parse() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        color.extensible = true;
        color.enum_content_name = "content.Color".to_string();
        color.identifier_boundary = Some("ten".to_string());
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_TYPE_IDENTIFIER_BOUNDARY_NOT_PARSABLE));

        project.enum_type_mut("model.Color").unwrap().identifier_boundary = Some("10".into());
        project.clear_validation_cache();
        let messages = validate_type(&project, "model.Color");
        assert!(!messages.contains_code(codes::MSGCODE_ENUM_TYPE_IDENTIFIER_BOUNDARY_NOT_PARSABLE));
    }

    #[test]
    fn test_attribute_name_and_datatype_findings() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        color.new_enum_attribute(PlainEnumAttribute::new("42bad", "Nope"));
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_ATTRIBUTE_NAME_NOT_A_VALID_IDENTIFIER));
        assert!(messages.contains_code(codes::MSGCODE_ENUM_ATTRIBUTE_DATATYPE_DOES_NOT_EXIST));
    }

    #[test]
    fn test_duplicate_attribute_names() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        color.new_enum_attribute(PlainEnumAttribute::new("name", "String"));
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert_eq!(
            messages
                .get_messages_by_code(codes::MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_NAME)
                .len(),
            2
        );
    }

    #[test]
    fn test_name_collision_with_supertype() {
        let mut project = EnumModelProject::new("test");
        let mut base = EnumType::new("model.Base").with_abstract();
        base.new_enum_attribute(PlainEnumAttribute::new("code", "String"));
        project.add_enum_type(base);

        let mut sub = color_type();
        sub.qualified_name = "model.Sub".to_string();
        sub.super_enum_type = Some("model.Base".to_string());
        // Declared again without the inherited flag: a true collision.
        sub.new_enum_attribute(PlainEnumAttribute::new("code", "String"));
        project.add_enum_type(sub);

        let messages = validate_type(&project, "model.Sub");
        assert!(messages
            .contains_code(codes::MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_NAME_IN_SUPERTYPE_HIERARCHY));

        // The inherited flag marks the sanctioned override.
        project
            .enum_type_mut("model.Sub")
            .unwrap()
            .find_enum_attribute_mut("code")
            .unwrap()
            .as_plain_mut()
            .unwrap()
            .inherited = true;
        project.clear_validation_cache();
        let messages = validate_type(&project, "model.Sub");
        assert!(!messages
            .contains_code(codes::MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_NAME_IN_SUPERTYPE_HIERARCHY));
    }

    #[test]
    fn test_inherited_attribute_needs_hierarchy_counterpart() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        color.new_enum_attribute(PlainEnumAttribute::new("ghost", "String").with_inherited());
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(messages
            .contains_code(codes::MSGCODE_ENUM_ATTRIBUTE_NO_SUCH_ATTRIBUTE_IN_SUPERTYPE_HIERARCHY));
    }

    #[test]
    fn test_duplicate_identifier_indication() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        color.new_enum_attribute(
            PlainEnumAttribute::new("code", "String").with_identifier().with_unique(),
        );
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert_eq!(
            messages
                .get_messages_by_code(codes::MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_INDICATION_AS_IDENTIFIER)
                .len(),
            2
        );
    }

    #[test]
    fn test_default_value_provider_findings() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        if let Some(literal) = color
            .find_enum_attribute_mut(crate::model::LITERAL_NAME)
            .and_then(|a| a.as_literal_name_mut())
        {
            literal.set_default_value_provider_attribute("missing");
        }
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(messages.contains_code(
            codes::MSGCODE_ENUM_LITERAL_NAME_ATTRIBUTE_DEFAULT_VALUE_PROVIDER_DOES_NOT_EXIST
        ));

        if let Some(literal) = project
            .enum_type_mut("model.Color")
            .unwrap()
            .find_enum_attribute_mut(crate::model::LITERAL_NAME)
            .and_then(|a| a.as_literal_name_mut())
        {
            literal.set_default_value_provider_attribute("id");
        }
        project.clear_validation_cache();
        let messages = validate_type(&project, "model.Color");
        assert!(messages.contains_code(
            codes::MSGCODE_ENUM_LITERAL_NAME_ATTRIBUTE_DEFAULT_VALUE_PROVIDER_NOT_OF_DATATYPE_STRING
        ));
    }

    #[test]
    fn test_row_count_mismatch() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        add_row(&mut color, "RED", "1", "red");
        color.new_enum_attribute(PlainEnumAttribute::new("rate", "Decimal"));
        // Desync the row behind the model's back.
        color.enum_value_mut(0).remove_cell(3);
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_VALUE_NUMBER_OF_VALUES_DOES_NOT_MATCH));
    }

    #[test]
    fn test_value_not_parsable() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        add_row(&mut color, "RED", "not-a-number", "red");
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_NOT_PARSABLE));
    }

    #[test]
    fn test_mandatory_and_multilingual_findings_stack() {
        let mut project = EnumModelProject::new("test").with_supported_locale("en");
        let mut product = EnumType::new("model.Product");
        product.new_enum_literal_name_attribute(EnumLiteralNameAttribute::new());
        product.new_enum_attribute(
            PlainEnumAttribute::new("id", "Integer")
                .with_identifier()
                .with_unique()
                .with_mandatory(),
        );
        product.new_enum_attribute(
            PlainEnumAttribute::new("label", "String")
                .with_used_as_name_in_ui()
                .with_mandatory()
                .with_multilingual(),
        );
        let row = product.new_enum_value();
        product.set_enum_attribute_value(row, crate::model::LITERAL_NAME, Value::plain("P1"));
        product.set_enum_attribute_value(row, "id", Value::plain("1"));
        project.add_enum_type(product);

        // Entirely empty international value: the mandatory finding and one
        // per-locale finding for each supported locale.
        let messages = validate_type(&project, "model.Product");
        assert!(messages.contains_code(codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_MANDATORY_VALUE_EMPTY));
        assert_eq!(
            messages
                .get_messages_by_code(codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_MULTILINGUAL_VALUE_NOT_SET)
                .len(),
            2
        );

        // One locale filled: the mandatory finding clears, the other locale
        // still reports.
        project.enum_type_mut("model.Product").unwrap().set_enum_attribute_value(
            0,
            "label",
            Value::international(InternationalString::new().with("de", "Produkt")),
        );
        project.clear_validation_cache();
        let messages = validate_type(&project, "model.Product");
        assert!(!messages.contains_code(codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_MANDATORY_VALUE_EMPTY));
        assert_eq!(
            messages
                .get_messages_by_code(codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_MULTILINGUAL_VALUE_NOT_SET)
                .len(),
            1
        );
    }

    #[test]
    fn test_unique_identifier_duplicate_yields_exactly_one_finding() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        add_row(&mut color, "RED", "1", "red");
        add_row(&mut color, "BLUE", "1", "blue");
        project.add_enum_type(color);

        let color = project.find_enum_type("model.Color").unwrap();
        let container = ValueContainer::Type(color);
        let validator = EnumValidator::new(&project);

        for row in 0..2 {
            let messages = validator.validate_enum_value(&container, row);
            assert_eq!(messages.len(), 1);
            assert_eq!(
                messages.iter().next().unwrap().code,
                codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_UNIQUE_IDENTIFIER_NOT_UNIQUE
            );
        }
    }

    #[test]
    fn test_duplicate_values_of_any_unique_attribute_are_flagged() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        // Distinct identifiers, colliding literal names.
        add_row(&mut color, "RED", "1", "red");
        add_row(&mut color, "RED", "2", "dark red");
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        let findings =
            messages.get_messages_by_code(codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_UNIQUE_IDENTIFIER_NOT_UNIQUE);
        assert_eq!(findings.len(), 2);
        for finding in findings {
            assert_eq!(
                finding.invalid_property.as_ref().unwrap().property,
                crate::model::LITERAL_NAME
            );
        }
    }

    #[test]
    fn test_unique_identifier_empty() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        add_row(&mut color, "RED", "", "red");
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert!(messages
            .contains_code(codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_UNIQUE_IDENTIFIER_VALUE_EMPTY));
    }

    #[test]
    fn test_literal_name_value_identifier_syntax() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        add_row(&mut color, "RED_1", "1", "red");
        add_row(&mut color, "42ab", "2", "a");
        add_row(&mut color, "foo%% bar &//", "3", "b");
        add_row(&mut color, "42", "4", "c");
        project.add_enum_type(color);

        let messages = validate_type(&project, "model.Color");
        assert_eq!(
            messages
                .get_messages_by_code(
                    codes::MSGCODE_ENUM_LITERAL_NAME_ATTRIBUTE_VALUE_IS_NO_VALID_JAVA_IDENTIFIER
                )
                .len(),
            3
        );
    }

    #[test]
    fn test_empty_literal_name_is_a_mandatory_finding_only() {
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        add_row(&mut color, "", "1", "red");
        project.add_enum_type(color);

        let color = project.find_enum_type("model.Color").unwrap();
        let container = ValueContainer::Type(color);
        let messages = EnumValidator::new(&project).validate_enum_value(&container, 0);

        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages.iter().next().unwrap().code,
            codes::MSGCODE_ENUM_ATTRIBUTE_VALUE_MANDATORY_VALUE_EMPTY
        );
    }

    #[test]
    fn test_content_validation() {
        let mut project = EnumModelProject::new("test");
        project.add_enum_content(crate::model::EnumContent::new(
            "content.Color",
            "model.Missing",
        ));
        let content = project.find_enum_content("content.Color").unwrap();
        let messages = EnumValidator::new(&project).validate_enum_content(content);
        assert!(messages.contains_code(codes::MSGCODE_ENUM_CONTENT_ENUM_TYPE_DOES_NOT_EXIST));

        // Non-extensible target type.
        let mut project = EnumModelProject::new("test");
        project.add_enum_type(color_type());
        project.add_enum_content(crate::model::EnumContent::new(
            "content.Color",
            "model.Color",
        ));
        let messages = project.validate("content.Color").unwrap();
        assert!(messages.contains_code(codes::MSGCODE_ENUM_CONTENT_VALUES_ARE_PART_OF_TYPE));

        // Wrong content name.
        let mut project = EnumModelProject::new("test");
        let mut color = color_type();
        color.extensible = true;
        color.enum_content_name = "content.Color".to_string();
        color.clear_enum_values();
        project.add_enum_type(color);
        project.add_enum_content(crate::model::EnumContent::new(
            "content.Misplaced",
            "model.Color",
        ));
        let messages = project.validate("content.Misplaced").unwrap();
        assert!(messages.contains_code(codes::MSGCODE_ENUM_CONTENT_NAME_NOT_CORRECT));
    }

    #[test]
    fn test_abstract_content_type_finding() {
        let mut project = EnumModelProject::new("test");
        let mut base = EnumType::new("model.Base").with_abstract().with_extensible();
        base.enum_content_name = "content.Base".to_string();
        project.add_enum_type(base);
        project.add_enum_content(crate::model::EnumContent::new("content.Base", "model.Base"));

        let messages = project.validate("content.Base").unwrap();
        assert!(messages.contains_code(codes::MSGCODE_ENUM_CONTENT_ENUM_TYPE_IS_ABSTRACT));
    }

    #[test]
    fn test_identifier_syntax_helper() {
        assert!(is_valid_identifier("RED"));
        assert!(is_valid_identifier("_red1"));
        assert!(!is_valid_identifier("42ab"));
        assert!(!is_valid_identifier("foo bar"));
        assert!(!is_valid_identifier(""));
    }
}
