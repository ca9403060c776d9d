//! The enumeration model: type definitions, instance rows and containers.

mod attribute;
mod container;
mod content;
mod enum_type;
mod enum_value;
mod project;

pub use attribute::{EnumAttribute, EnumLiteralNameAttribute, PlainEnumAttribute, LITERAL_NAME};
pub use container::ValueContainer;
pub use content::EnumContent;
pub use enum_type::EnumType;
pub use enum_value::{EnumAttributeValue, EnumAttributeValueKind, EnumValue};
pub use project::EnumModelProject;
