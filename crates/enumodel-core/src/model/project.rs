//! Project-wide registry and validation cache.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use parking_lot::RwLock;
use tracing::debug;

use super::attribute::PlainEnumAttribute;
use super::content::EnumContent;
use super::enum_type::EnumType;
use super::enum_value::EnumValue;
use crate::datatype::ValueDatatype;
use crate::error::Error;
use crate::validation::{EnumValidator, MessageList};

/// The in-memory index the model queries: enumeration types and contents
/// keyed by qualified name, datatype resolution, and the locales multilingual
/// validation checks against.
///
/// Repeated [`validate`](Self::validate) calls are served from a cache keyed
/// by qualified name. The project's own mutating operations invalidate the
/// cache themselves. Mutation through [`enum_type_mut`](Self::enum_type_mut)
/// or [`enum_content_mut`](Self::enum_content_mut) bypasses that path, and
/// callers must invalidate explicitly with
/// [`clear_validation_cache`](Self::clear_validation_cache) or validation
/// results stay stale.
#[derive(Debug)]
pub struct EnumModelProject {
    /// Project name.
    pub name: String,
    enum_types: BTreeMap<String, EnumType>,
    enum_contents: BTreeMap<String, EnumContent>,
    supported_locales: BTreeSet<String>,
    validation_cache: RwLock<HashMap<String, MessageList>>,
}

impl EnumModelProject {
    /// Create an empty project. The default language is `de`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enum_types: BTreeMap::new(),
            enum_contents: BTreeMap::new(),
            supported_locales: BTreeSet::from(["de".to_string()]),
            validation_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Add a supported locale.
    pub fn with_supported_locale(mut self, locale: impl Into<String>) -> Self {
        self.supported_locales.insert(locale.into());
        self
    }

    /// The locales multilingual values must provide text for.
    pub fn supported_locales(&self) -> &BTreeSet<String> {
        &self.supported_locales
    }

    /// Resolve a datatype by qualified name.
    pub fn find_datatype(&self, name: &str) -> Option<ValueDatatype> {
        ValueDatatype::from_name(name)
    }

    // ---- registration and lookup ---------------------------------------

    /// Register an enumeration type under its qualified name.
    pub fn add_enum_type(&mut self, enum_type: EnumType) {
        self.enum_types
            .insert(enum_type.qualified_name.clone(), enum_type);
        self.clear_validation_cache();
    }

    /// Register an enumeration content under its qualified name.
    pub fn add_enum_content(&mut self, content: EnumContent) {
        self.enum_contents
            .insert(content.qualified_name.clone(), content);
        self.clear_validation_cache();
    }

    /// Find an enumeration type by qualified name.
    pub fn find_enum_type(&self, qualified_name: &str) -> Option<&EnumType> {
        self.enum_types.get(qualified_name)
    }

    /// Find an enumeration type by qualified name, mutably.
    ///
    /// Mutation through this accessor bypasses cache invalidation.
    pub fn enum_type_mut(&mut self, qualified_name: &str) -> Option<&mut EnumType> {
        self.enum_types.get_mut(qualified_name)
    }

    /// Find an enumeration content by qualified name.
    pub fn find_enum_content(&self, qualified_name: &str) -> Option<&EnumContent> {
        self.enum_contents.get(qualified_name)
    }

    /// Find an enumeration content by qualified name, mutably.
    ///
    /// Mutation through this accessor bypasses cache invalidation.
    pub fn enum_content_mut(&mut self, qualified_name: &str) -> Option<&mut EnumContent> {
        self.enum_contents.get_mut(qualified_name)
    }

    /// Find the content extending a type, by the type's qualified name.
    pub fn find_enum_content_for_type(&self, type_name: &str) -> Option<&EnumContent> {
        self.enum_contents.values().find(|c| c.enum_type == type_name)
    }

    /// All registered types in qualified-name order.
    pub fn enum_types(&self) -> impl Iterator<Item = &EnumType> {
        self.enum_types.values()
    }

    /// All registered contents in qualified-name order.
    pub fn enum_contents(&self) -> impl Iterator<Item = &EnumContent> {
        self.enum_contents.values()
    }

    // ---- structural operations -----------------------------------------

    /// Append a row to a type or content, shaped after the container's full
    /// applicable attribute list including supertype placeholder columns.
    /// Returns the new row's index.
    pub fn new_enum_value(&mut self, container_name: &str) -> Result<usize, Error> {
        if self.enum_types.contains_key(container_name) {
            let shape = self.enum_types[container_name]
                .get_enum_attributes_include_supertype_copies(self, true);
            let index = self
                .enum_types
                .get_mut(container_name)
                .expect("presence checked above")
                .push_enum_value(EnumValue::with_shape(&shape));
            self.clear_validation_cache();
            return Ok(index);
        }
        if self.enum_contents.contains_key(container_name) {
            let type_name = self.enum_contents[container_name].enum_type.clone();
            let enum_type = self
                .find_enum_type(&type_name)
                .ok_or(Error::UnknownObject(type_name))?;
            let shape = enum_type.get_enum_attributes_include_supertype_copies(self, false);
            let index = self
                .enum_contents
                .get_mut(container_name)
                .expect("presence checked above")
                .push_enum_value(EnumValue::with_shape(&shape));
            self.clear_validation_cache();
            return Ok(index);
        }
        Err(Error::UnknownObject(container_name.to_string()))
    }

    /// Create local `inherited` mirrors of supertype attributes on a type.
    ///
    /// Names not present in the reachable supertype hierarchy fail the whole
    /// call. Names already declared locally are skipped.
    pub fn inherit_enum_attributes(
        &mut self,
        type_name: &str,
        attribute_names: &[&str],
    ) -> Result<(), Error> {
        let copies: Vec<PlainEnumAttribute> = {
            let enum_type = self
                .find_enum_type(type_name)
                .ok_or_else(|| Error::UnknownObject(type_name.to_string()))?;
            let local_names: HashSet<String> = enum_type
                .get_enum_attributes(true)
                .iter()
                .map(|a| a.name().to_string())
                .collect();
            let chain: Vec<&EnumType> = enum_type
                .find_all_super_enum_types(self)
                .into_iter()
                .filter(|t| t.qualified_name != enum_type.qualified_name)
                .collect();

            let mut copies = Vec::new();
            for &name in attribute_names {
                let original = chain
                    .iter()
                    .find_map(|t| t.find_enum_attribute(name))
                    .filter(|a| !a.is_inherited() && !a.is_literal_name())
                    .ok_or_else(|| Error::AttributeNotInHierarchy(name.to_string()))?;
                if local_names.contains(name) {
                    continue;
                }
                if let Some(plain) = original.as_plain() {
                    let mut copy = plain.clone();
                    copy.inherited = true;
                    copies.push(copy);
                }
            }
            copies
        };

        let enum_type = self
            .enum_types
            .get_mut(type_name)
            .expect("presence checked above");
        for copy in copies {
            enum_type.new_enum_attribute(copy);
        }
        self.clear_validation_cache();
        Ok(())
    }

    /// Delete an attribute of a type, cascading the positional cell removal
    /// to the type's own rows and to every content extending the type.
    pub fn delete_enum_attribute(
        &mut self,
        type_name: &str,
        attribute_name: &str,
    ) -> Result<bool, Error> {
        let (content_position, is_literal) = {
            let enum_type = self
                .find_enum_type(type_name)
                .ok_or_else(|| Error::UnknownObject(type_name.to_string()))?;
            let position = enum_type.attribute_position(attribute_name);
            let is_literal = enum_type
                .find_enum_attribute(attribute_name)
                .is_some_and(|a| a.is_literal_name());
            let has_literal = enum_type.contains_enum_literal_name_attribute();
            let content_position =
                position.map(|i| i - usize::from(has_literal && i > 0));
            (content_position, is_literal)
        };

        let removed = self
            .enum_types
            .get_mut(type_name)
            .expect("presence checked above")
            .delete_enum_attribute(attribute_name);

        if removed && !is_literal {
            if let Some(position) = content_position {
                let affected: Vec<String> = self
                    .enum_contents
                    .values()
                    .filter(|c| c.enum_type == type_name)
                    .map(|c| c.qualified_name.clone())
                    .collect();
                for content_name in affected {
                    debug!(
                        content = %content_name,
                        attribute = attribute_name,
                        "cascading attribute deletion into extension content"
                    );
                    self.enum_contents
                        .get_mut(&content_name)
                        .expect("name taken from the map")
                        .remove_cell_in_all_rows(position);
                }
            }
        }
        if removed {
            self.clear_validation_cache();
        }
        Ok(removed)
    }

    // ---- validation ----------------------------------------------------

    /// Validate the type or content registered under a qualified name,
    /// serving repeated calls from the cache.
    pub fn validate(&self, qualified_name: &str) -> Result<MessageList, Error> {
        if let Some(cached) = self.validation_cache.read().get(qualified_name) {
            return Ok(cached.clone());
        }
        let validator = EnumValidator::new(self);
        let messages = if let Some(enum_type) = self.find_enum_type(qualified_name) {
            validator.validate_enum_type(enum_type)
        } else if let Some(content) = self.find_enum_content(qualified_name) {
            validator.validate_enum_content(content)
        } else {
            return Err(Error::UnknownObject(qualified_name.to_string()));
        };
        self.validation_cache
            .write()
            .insert(qualified_name.to_string(), messages.clone());
        Ok(messages)
    }

    /// True when validation of the object yields no error messages.
    pub fn is_valid(&self, qualified_name: &str) -> Result<bool, Error> {
        Ok(!self.validate(qualified_name)?.contains_error())
    }

    /// Validate every registered type and content.
    pub fn validate_all(&self) -> Result<MessageList, Error> {
        let mut all = MessageList::new();
        let names: Vec<&String> = self
            .enum_types
            .keys()
            .chain(self.enum_contents.keys())
            .collect();
        for name in names {
            all.extend(self.validate(name)?);
        }
        Ok(all)
    }

    /// Drop all cached validation results.
    pub fn clear_validation_cache(&self) {
        let mut cache = self.validation_cache.write();
        if !cache.is_empty() {
            debug!(project = %self.name, entries = cache.len(), "validation cache cleared");
        }
        cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attribute::{EnumLiteralNameAttribute, PlainEnumAttribute};
    use crate::value::Value;

    fn project_with_extensible_type() -> EnumModelProject {
        let mut project = EnumModelProject::new("test");
        let mut payment = EnumType::new("model.Payment")
            .with_extensible()
            .with_enum_content_name("content.Payment");
        payment.new_enum_attribute(
            PlainEnumAttribute::new("id", "Integer")
                .with_identifier()
                .with_unique()
                .with_mandatory(),
        );
        payment.new_enum_attribute(PlainEnumAttribute::new("name", "String").with_used_as_name_in_ui());
        project.add_enum_type(payment);
        project.add_enum_content(EnumContent::new("content.Payment", "model.Payment"));
        project
    }

    #[test]
    fn test_registration_and_lookup() {
        let project = project_with_extensible_type();

        assert!(project.find_enum_type("model.Payment").is_some());
        assert!(project.find_enum_type("model.Missing").is_none());
        assert!(project.find_enum_content("content.Payment").is_some());
        assert_eq!(
            project
                .find_enum_content_for_type("model.Payment")
                .unwrap()
                .qualified_name,
            "content.Payment"
        );
    }

    #[test]
    fn test_new_enum_value_uses_content_shape() {
        let mut project = project_with_extensible_type();

        let row = project.new_enum_value("content.Payment").unwrap();
        let content = project.find_enum_content("content.Payment").unwrap();
        // Two attributes, no literal name slot on the content side.
        assert_eq!(content.enum_values()[row].len(), 2);

        let row = project.new_enum_value("model.Payment").unwrap();
        let payment = project.find_enum_type("model.Payment").unwrap();
        assert_eq!(payment.enum_values()[row].len(), 2);
    }

    #[test]
    fn test_delete_attribute_cascades_to_content() {
        let mut project = project_with_extensible_type();
        project.new_enum_value("content.Payment").unwrap();
        project
            .enum_content_mut("content.Payment")
            .unwrap()
            .set_enum_attribute_value_at(0, 1, Value::plain("cash"));

        let removed = project.delete_enum_attribute("model.Payment", "id").unwrap();

        assert!(removed);
        let content = project.find_enum_content("content.Payment").unwrap();
        assert_eq!(content.enum_values()[0].len(), 1);
        assert_eq!(
            content.enum_values()[0].get_enum_attribute_value(0).value().as_plain(),
            Some("cash")
        );
    }

    #[test]
    fn test_inherit_enum_attributes() {
        let mut project = EnumModelProject::new("test");
        let mut base = EnumType::new("Base").with_abstract();
        base.new_enum_attribute(PlainEnumAttribute::new("id", "Integer"));
        base.new_enum_attribute(PlainEnumAttribute::new("name", "String"));
        project.add_enum_type(base);
        project.add_enum_type(EnumType::new("Sub").with_super_enum_type("Base"));

        project.inherit_enum_attributes("Sub", &["id"]).unwrap();
        let sub = project.find_enum_type("Sub").unwrap();
        assert!(sub.find_enum_attribute("id").unwrap().is_inherited());

        // Already inherited names are skipped silently.
        project.inherit_enum_attributes("Sub", &["id"]).unwrap();
        assert_eq!(project.find_enum_type("Sub").unwrap().enum_attributes_count(true), 1);

        // Names outside the hierarchy fail fast.
        let result = project.inherit_enum_attributes("Sub", &["missing"]);
        assert!(matches!(result, Err(Error::AttributeNotInHierarchy(_))));
    }

    #[test]
    fn test_validation_cache_staleness_and_clear() {
        let mut project = EnumModelProject::new("test");
        let mut color = EnumType::new("model.Color");
        color.new_enum_literal_name_attribute(EnumLiteralNameAttribute::new());
        color.new_enum_attribute(
            PlainEnumAttribute::new("id", "Integer")
                .with_identifier()
                .with_unique()
                .with_mandatory(),
        );
        color.new_enum_attribute(PlainEnumAttribute::new("name", "String").with_used_as_name_in_ui());
        project.add_enum_type(color);

        let before = project.validate("model.Color").unwrap();

        // Mutation through enum_type_mut bypasses invalidation: the cached
        // result is served until the cache is cleared explicitly.
        project
            .enum_type_mut("model.Color")
            .unwrap()
            .new_enum_attribute(PlainEnumAttribute::new("broken name", "Nope"));
        let stale = project.validate("model.Color").unwrap();
        assert_eq!(before.len(), stale.len());

        project.clear_validation_cache();
        let fresh = project.validate("model.Color").unwrap();
        assert!(fresh.len() > before.len());
    }

    #[test]
    fn test_validate_unknown_object() {
        let project = EnumModelProject::new("test");
        assert!(matches!(
            project.validate("model.Missing"),
            Err(Error::UnknownObject(_))
        ));
    }
}
