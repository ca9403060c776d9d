//! Core error types.

use thiserror::Error;

/// Errors raised by model operations.
///
/// Broken domain invariants are never reported here. They accumulate into a
/// [`crate::validation::MessageList`] during validation instead.
#[derive(Debug, Error)]
pub enum Error {
    /// An object was referenced by qualified name but is not registered.
    #[error("unknown object: {0}")]
    UnknownObject(String),

    /// An attribute was referenced by name but does not exist on the type.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// An attribute was requested for inheritance but is not part of the
    /// reachable supertype hierarchy.
    #[error("attribute '{0}' is not part of the supertype hierarchy")]
    AttributeNotInHierarchy(String),

    /// XML reading failed.
    #[error("xml error: {0}")]
    Xml(String),

    /// The XML document does not have the expected element structure.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// XML writing failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Error::Xml(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(e.to_string())
    }
}
