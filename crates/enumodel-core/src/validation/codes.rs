//! The stable vocabulary of validation message codes.
//!
//! Each validation rule maps to exactly one code. Codes are part of the
//! public contract; external callers match on them, so they are never
//! renamed or merged.

// ---- enumeration types --------------------------------------------------

/// The referenced supertype does not exist in the project.
pub const MSGCODE_ENUM_TYPE_SUPERTYPE_DOES_NOT_EXIST: &str =
    "ENUMTYPE-SupertypeDoesNotExist";

/// The referenced supertype is not abstract.
pub const MSGCODE_ENUM_TYPE_SUPERTYPE_IS_NOT_ABSTRACT: &str =
    "ENUMTYPE-SupertypeIsNotAbstract";

/// A concrete type does not mirror every attribute of its supertype chain.
pub const MSGCODE_ENUM_TYPE_NOT_INHERITED_ATTRIBUTES_IN_SUPERTYPE_HIERARCHY: &str =
    "ENUMTYPE-NotInheritedAttributesInSupertypeHierarchy";

/// A type that must hold values has no literal name attribute.
pub const MSGCODE_ENUM_TYPE_NO_LITERAL_NAME_ATTRIBUTE: &str =
    "ENUMTYPE-NoLiteralNameAttribute";

/// A type that cannot hold values declares a literal name attribute.
pub const MSGCODE_ENUM_TYPE_LITERAL_NAME_ATTRIBUTE_NOT_NEEDED: &str =
    "ENUMTYPE-LiteralNameAttributeNotNeeded";

/// More than one literal name attribute is declared.
pub const MSGCODE_ENUM_TYPE_MULTIPLE_LITERAL_NAME_ATTRIBUTES: &str =
    "ENUMTYPE-MultipleLiteralNameAttributes";

/// No attribute of the hierarchy is marked as identifier.
pub const MSGCODE_ENUM_TYPE_NO_IDENTIFIER_ATTRIBUTE: &str =
    "ENUMTYPE-NoIdentifierAttribute";

/// No attribute of the hierarchy is marked as display name.
pub const MSGCODE_ENUM_TYPE_NO_USED_AS_NAME_IN_UI_ATTRIBUTE: &str =
    "ENUMTYPE-NoUsedAsNameInUiAttribute";

/// An extensible type declares no content name.
pub const MSGCODE_ENUM_TYPE_ENUM_CONTENT_NAME_EMPTY: &str =
    "ENUMTYPE-EnumContentNameEmpty";

/// An abstract type still stores rows that will never be used.
pub const MSGCODE_ENUM_TYPE_ENUM_VALUES_OBSOLETE: &str =
    "ENUMTYPE-EnumValuesObsolete";

/// The declared content name is claimed by a content of another type.
pub const MSGCODE_ENUM_TYPE_ENUM_CONTENT_ALREADY_USED: &str =
    "ENUMTYPE-EnumContentAlreadyUsed";

/// The identifier boundary does not parse as the identifier attribute's
/// datatype.
pub const MSGCODE_ENUM_TYPE_IDENTIFIER_BOUNDARY_NOT_PARSABLE: &str =
    "ENUMTYPE-IdentifierBoundaryNotParsable";

// ---- attributes ----------------------------------------------------------

/// The attribute name is not a valid identifier.
pub const MSGCODE_ENUM_ATTRIBUTE_NAME_NOT_A_VALID_IDENTIFIER: &str =
    "ENUMATTRIBUTE-NameNotAValidIdentifier";

/// Two local attributes share a name.
pub const MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_NAME: &str =
    "ENUMATTRIBUTE-DuplicateName";

/// A non-inherited attribute collides with a supertype attribute name.
pub const MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_NAME_IN_SUPERTYPE_HIERARCHY: &str =
    "ENUMATTRIBUTE-DuplicateNameInSupertypeHierarchy";

/// The attribute's datatype does not resolve.
pub const MSGCODE_ENUM_ATTRIBUTE_DATATYPE_DOES_NOT_EXIST: &str =
    "ENUMATTRIBUTE-DatatypeDoesNotExist";

/// An inherited attribute has no counterpart in the supertype hierarchy.
pub const MSGCODE_ENUM_ATTRIBUTE_NO_SUCH_ATTRIBUTE_IN_SUPERTYPE_HIERARCHY: &str =
    "ENUMATTRIBUTE-NoSuchAttributeInSupertypeHierarchy";

/// More than one attribute of the hierarchy is marked as identifier.
pub const MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_INDICATION_AS_IDENTIFIER: &str =
    "ENUMATTRIBUTE-DuplicateIndicationAsIdentifier";

/// More than one attribute of the hierarchy is marked as display name.
pub const MSGCODE_ENUM_ATTRIBUTE_DUPLICATE_INDICATION_AS_NAME_IN_UI: &str =
    "ENUMATTRIBUTE-DuplicateIndicationAsNameInUi";

/// The literal name default value provider does not exist.
pub const MSGCODE_ENUM_LITERAL_NAME_ATTRIBUTE_DEFAULT_VALUE_PROVIDER_DOES_NOT_EXIST: &str =
    "ENUMLITERALNAMEATTRIBUTE-DefaultValueProviderDoesNotExist";

/// The literal name default value provider is not of String datatype.
pub const MSGCODE_ENUM_LITERAL_NAME_ATTRIBUTE_DEFAULT_VALUE_PROVIDER_NOT_OF_DATATYPE_STRING:
    &str = "ENUMLITERALNAMEATTRIBUTE-DefaultValueProviderNotOfDatatypeString";

// ---- rows and cells ------------------------------------------------------

/// A row's cell count does not match the container's attribute count.
pub const MSGCODE_ENUM_VALUE_NUMBER_OF_VALUES_DOES_NOT_MATCH: &str =
    "ENUMVALUE-NumberOfValuesDoesNotMatch";

/// A cell's content does not parse as the attribute's datatype.
pub const MSGCODE_ENUM_ATTRIBUTE_VALUE_NOT_PARSABLE: &str =
    "ENUMATTRIBUTEVALUE-NotParsable";

/// A mandatory attribute's cell is empty.
pub const MSGCODE_ENUM_ATTRIBUTE_VALUE_MANDATORY_VALUE_EMPTY: &str =
    "ENUMATTRIBUTEVALUE-MandatoryValueEmpty";

/// A multilingual mandatory cell lacks text for a supported locale.
pub const MSGCODE_ENUM_ATTRIBUTE_VALUE_MULTILINGUAL_VALUE_NOT_SET: &str =
    "ENUMATTRIBUTEVALUE-MultilingualValueNotSet";

/// The unique identifier cell is empty.
pub const MSGCODE_ENUM_ATTRIBUTE_VALUE_UNIQUE_IDENTIFIER_VALUE_EMPTY: &str =
    "ENUMATTRIBUTEVALUE-UniqueIdentifierValueEmpty";

/// Two rows of one container share the same unique identifier value.
pub const MSGCODE_ENUM_ATTRIBUTE_VALUE_UNIQUE_IDENTIFIER_NOT_UNIQUE: &str =
    "ENUMATTRIBUTEVALUE-UniqueIdentifierNotUnique";

/// The identifier value lies on the wrong side of the identifier boundary
/// for the container it is stored in.
pub const MSGCODE_ENUM_ATTRIBUTE_VALUE_IDENTIFIER_BOUNDARY_DISALLOWED: &str =
    "ENUMATTRIBUTEVALUE-IdentifierBoundaryDisallowed";

/// The literal name cell's content is not a valid Java identifier.
pub const MSGCODE_ENUM_LITERAL_NAME_ATTRIBUTE_VALUE_IS_NO_VALID_JAVA_IDENTIFIER: &str =
    "ENUMLITERALNAMEATTRIBUTEVALUE-IsNoValidJavaIdentifier";

// ---- contents ------------------------------------------------------------

/// The referenced enumeration type does not exist.
pub const MSGCODE_ENUM_CONTENT_ENUM_TYPE_DOES_NOT_EXIST: &str =
    "ENUMCONTENT-EnumTypeDoesNotExist";

/// The referenced enumeration type is abstract.
pub const MSGCODE_ENUM_CONTENT_ENUM_TYPE_IS_ABSTRACT: &str =
    "ENUMCONTENT-EnumTypeIsAbstract";

/// The referenced enumeration type keeps its values in the model.
pub const MSGCODE_ENUM_CONTENT_VALUES_ARE_PART_OF_TYPE: &str =
    "ENUMCONTENT-ValuesArePartOfType";

/// The content's qualified name differs from the type's declared content
/// name.
pub const MSGCODE_ENUM_CONTENT_NAME_NOT_CORRECT: &str =
    "ENUMCONTENT-NameNotCorrect";
