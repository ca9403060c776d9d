//! Enumeration model core.
//!
//! This crate implements the schema and instance side of enumerations for
//! insurance and financial domain models: type definitions with single
//! inheritance, positional value rows, extensible types split between
//! model-defined and externally supplied rows at an identifier boundary, a
//! cross-entity validation engine with a stable message code vocabulary, and
//! XML persistence.

pub mod datatype;
pub mod error;
pub mod model;
pub mod validation;
pub mod value;
pub mod xml;

pub use datatype::ValueDatatype;
pub use error::Error;
pub use model::{
    EnumAttribute, EnumAttributeValue, EnumAttributeValueKind, EnumContent,
    EnumLiteralNameAttribute, EnumModelProject, EnumType, EnumValue, PlainEnumAttribute,
    ValueContainer, LITERAL_NAME,
};
pub use validation::{
    codes, EnumValidator, IdentifierBoundaryValidator, Message, MessageList, ObjectProperty,
    Severity,
};
pub use value::{InternationalString, Value};
