//! Attribute definitions for enumeration types.

use crate::datatype::ValueDatatype;

/// The fixed name of the literal name attribute.
pub const LITERAL_NAME: &str = "LITERAL_NAME";

/// An ordinary attribute of an enumeration type, one column of the value
/// table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainEnumAttribute {
    /// Attribute name (unique within the owning type and its hierarchy).
    pub name: String,
    /// Qualified datatype name, resolved at lookup time.
    pub datatype: String,
    /// Marks the attribute whose values identify a row.
    pub identifier: bool,
    /// Values of this attribute must be unique within the container.
    pub unique: bool,
    /// Values of this attribute must not be empty.
    pub mandatory: bool,
    /// This attribute is a local mirror of a supertype attribute.
    pub inherited: bool,
    /// Marks the attribute rendered as the display name.
    pub used_as_name_in_ui: bool,
    /// Values are stored per locale instead of as one plain string.
    pub multilingual: bool,
}

impl PlainEnumAttribute {
    /// Create a new attribute with all flags cleared.
    pub fn new(name: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            datatype: datatype.into(),
            identifier: false,
            unique: false,
            mandatory: false,
            inherited: false,
            used_as_name_in_ui: false,
            multilingual: false,
        }
    }

    /// Mark as the identifier attribute.
    pub fn with_identifier(mut self) -> Self {
        self.identifier = true;
        self
    }

    /// Require unique values.
    pub fn with_unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Require non-empty values.
    pub fn with_mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Mark as a local mirror of a supertype attribute.
    pub fn with_inherited(mut self) -> Self {
        self.inherited = true;
        self
    }

    /// Mark as the display name attribute.
    pub fn with_used_as_name_in_ui(mut self) -> Self {
        self.used_as_name_in_ui = true;
        self
    }

    /// Store values per locale.
    pub fn with_multilingual(mut self) -> Self {
        self.multilingual = true;
        self
    }
}

/// The literal name attribute, supplying the generated-code constant name of
/// a model-defined enumeration value.
///
/// Its name and semantic flags are fixed by construction. The only
/// configurable property is the default value provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumLiteralNameAttribute {
    /// Name of another attribute of `String` datatype whose value provides
    /// the default literal text. Empty means no provider. Persistence omits
    /// the XML attribute entirely when empty.
    pub default_value_provider_attribute: String,
}

impl EnumLiteralNameAttribute {
    /// Create a literal name attribute without a default value provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default value provider attribute.
    pub fn with_default_value_provider(mut self, attribute: impl Into<String>) -> Self {
        self.default_value_provider_attribute = attribute.into();
        self
    }

    /// Set the default value provider attribute. The empty string clears it.
    pub fn set_default_value_provider_attribute(&mut self, attribute: impl Into<String>) {
        self.default_value_provider_attribute = attribute.into();
    }
}

/// One column of an enumeration type.
///
/// The literal name attribute is a distinct variant rather than a flag, so
/// its fixed properties cannot be mutated at all. Setters exist only on
/// [`PlainEnumAttribute`].
#[derive(Debug, Clone, PartialEq)]
pub enum EnumAttribute {
    /// An ordinary attribute.
    Plain(PlainEnumAttribute),
    /// The literal name attribute.
    LiteralName(EnumLiteralNameAttribute),
}

impl EnumAttribute {
    /// The attribute name, `LITERAL_NAME` for the literal name variant.
    pub fn name(&self) -> &str {
        match self {
            EnumAttribute::Plain(attr) => &attr.name,
            EnumAttribute::LiteralName(_) => LITERAL_NAME,
        }
    }

    /// The qualified datatype name.
    pub fn datatype_name(&self) -> &str {
        match self {
            EnumAttribute::Plain(attr) => &attr.datatype,
            EnumAttribute::LiteralName(_) => ValueDatatype::String.name(),
        }
    }

    /// True for the attribute identifying a row.
    pub fn is_identifier(&self) -> bool {
        match self {
            EnumAttribute::Plain(attr) => attr.identifier,
            EnumAttribute::LiteralName(_) => false,
        }
    }

    /// True when values must be unique within the container.
    pub fn is_unique(&self) -> bool {
        match self {
            EnumAttribute::Plain(attr) => attr.unique,
            EnumAttribute::LiteralName(_) => true,
        }
    }

    /// True when values must not be empty.
    pub fn is_mandatory(&self) -> bool {
        match self {
            EnumAttribute::Plain(attr) => attr.mandatory,
            EnumAttribute::LiteralName(_) => true,
        }
    }

    /// True for a local mirror of a supertype attribute.
    pub fn is_inherited(&self) -> bool {
        match self {
            EnumAttribute::Plain(attr) => attr.inherited,
            EnumAttribute::LiteralName(_) => false,
        }
    }

    /// True for the display name attribute.
    pub fn is_used_as_name_in_ui(&self) -> bool {
        match self {
            EnumAttribute::Plain(attr) => attr.used_as_name_in_ui,
            EnumAttribute::LiteralName(_) => false,
        }
    }

    /// True when values are stored per locale.
    pub fn is_multilingual(&self) -> bool {
        match self {
            EnumAttribute::Plain(attr) => attr.multilingual,
            EnumAttribute::LiteralName(_) => false,
        }
    }

    /// True for the literal name variant.
    pub fn is_literal_name(&self) -> bool {
        matches!(self, EnumAttribute::LiteralName(_))
    }

    /// Downcast to the plain variant.
    pub fn as_plain(&self) -> Option<&PlainEnumAttribute> {
        match self {
            EnumAttribute::Plain(attr) => Some(attr),
            EnumAttribute::LiteralName(_) => None,
        }
    }

    /// Mutable downcast to the plain variant.
    pub fn as_plain_mut(&mut self) -> Option<&mut PlainEnumAttribute> {
        match self {
            EnumAttribute::Plain(attr) => Some(attr),
            EnumAttribute::LiteralName(_) => None,
        }
    }

    /// Downcast to the literal name variant.
    pub fn as_literal_name(&self) -> Option<&EnumLiteralNameAttribute> {
        match self {
            EnumAttribute::LiteralName(attr) => Some(attr),
            EnumAttribute::Plain(_) => None,
        }
    }

    /// Mutable downcast to the literal name variant.
    pub fn as_literal_name_mut(&mut self) -> Option<&mut EnumLiteralNameAttribute> {
        match self {
            EnumAttribute::LiteralName(attr) => Some(attr),
            EnumAttribute::Plain(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_attribute_builder() {
        let attr = PlainEnumAttribute::new("id", "Integer")
            .with_identifier()
            .with_unique()
            .with_mandatory();

        assert_eq!(attr.name, "id");
        assert!(attr.identifier);
        assert!(attr.unique);
        assert!(attr.mandatory);
        assert!(!attr.inherited);
        assert!(!attr.multilingual);
    }

    #[test]
    fn test_literal_name_fixed_semantics() {
        let attr = EnumAttribute::LiteralName(EnumLiteralNameAttribute::new());

        assert_eq!(attr.name(), LITERAL_NAME);
        assert_eq!(attr.datatype_name(), "String");
        assert!(!attr.is_identifier());
        assert!(!attr.is_inherited());
        assert!(attr.is_mandatory());
        assert!(attr.is_unique());
        assert!(!attr.is_used_as_name_in_ui());
        assert!(!attr.is_multilingual());
        assert!(attr.as_plain().is_none());
    }

    #[test]
    fn test_default_value_provider() {
        let mut attr = EnumLiteralNameAttribute::new().with_default_value_provider("name");
        assert_eq!(attr.default_value_provider_attribute, "name");

        attr.set_default_value_provider_attribute("");
        assert_eq!(attr.default_value_provider_attribute, "");
    }
}
