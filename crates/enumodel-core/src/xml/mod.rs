//! XML persistence for enumeration types and contents.
//!
//! The element tree is a given external format. Optional scalar properties
//! are omitted entirely when absent, they are never written as empty
//! attributes: a missing `identifierBoundary` reloads as `None`, a missing
//! `defaultValueProviderAttribute` reloads as the empty string.

use std::collections::HashMap;
use std::io;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::Error;
use crate::model::{
    EnumAttribute, EnumAttributeValue, EnumContent, EnumLiteralNameAttribute, EnumType,
    EnumValue, PlainEnumAttribute,
};
use crate::value::{InternationalString, Value};

const ENUM_TYPE_TAG: &str = "EnumType";
const ENUM_CONTENT_TAG: &str = "EnumContent";
const ATTRIBUTE_TAG: &str = "EnumAttribute";
const LITERAL_NAME_ATTRIBUTE_TAG: &str = "EnumLiteralNameAttribute";
const VALUE_TAG: &str = "EnumValue";
const CELL_TAG: &str = "EnumAttributeValue";

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn parse_bool(value: &str) -> bool {
    value == "true"
}

fn attributes_of(element: &BytesStart<'_>) -> Result<HashMap<String, String>, Error> {
    let mut map = HashMap::new();
    for attribute in element.attributes() {
        let attribute = attribute?;
        map.insert(
            String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
            attribute.unescape_value()?.into_owned(),
        );
    }
    Ok(map)
}

impl EnumType {
    /// Serialize to the XML element tree.
    pub fn to_xml(&self) -> Result<String, Error> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        let mut root = BytesStart::new(ENUM_TYPE_TAG);
        root.push_attribute(("abstract", bool_str(self.is_abstract)));
        root.push_attribute(("extensible", bool_str(self.extensible)));
        if let Some(boundary) = self.identifier_boundary.as_deref().filter(|b| !b.is_empty()) {
            root.push_attribute(("identifierBoundary", boundary));
        }
        if let Some(super_type) = self.super_enum_type.as_deref().filter(|s| !s.is_empty()) {
            root.push_attribute(("supertype", super_type));
        }
        if !self.enum_content_name.is_empty() {
            root.push_attribute(("enumContentName", self.enum_content_name.as_str()));
        }
        writer.write_event(Event::Start(root))?;

        for attribute in self.get_enum_attributes(true) {
            write_attribute(&mut writer, attribute)?;
        }
        for row in self.enum_values() {
            write_row(&mut writer, row)?;
        }

        writer.write_event(Event::End(BytesEnd::new(ENUM_TYPE_TAG)))?;
        Ok(String::from_utf8(writer.into_inner()).expect("xml writer emits utf-8"))
    }

    /// Deserialize from the XML element tree. The qualified name is carried
    /// by the enclosing resource, not by the document.
    pub fn from_xml(xml: &str, qualified_name: &str) -> Result<Self, Error> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut enum_type: Option<EnumType> = None;
        let mut row_cells: Option<Vec<EnumAttributeValue>> = None;
        let mut pending_cell: Option<PendingCell> = None;

        loop {
            match reader.read_event()? {
                Event::Start(element) => match element.name().as_ref() {
                    b"EnumType" => {
                        let attributes = attributes_of(&element)?;
                        let mut parsed = EnumType::new(qualified_name);
                        parsed.is_abstract = attributes
                            .get("abstract")
                            .map_or(false, |v| parse_bool(v));
                        parsed.extensible = attributes
                            .get("extensible")
                            .map_or(false, |v| parse_bool(v));
                        parsed.identifier_boundary =
                            attributes.get("identifierBoundary").cloned();
                        parsed.super_enum_type = attributes.get("supertype").cloned();
                        parsed.enum_content_name = attributes
                            .get("enumContentName")
                            .cloned()
                            .unwrap_or_default();
                        enum_type = Some(parsed);
                    }
                    b"EnumAttribute" => {
                        read_plain_attribute(&element, enum_type.as_mut())?;
                    }
                    b"EnumLiteralNameAttribute" => {
                        read_literal_attribute(&element, enum_type.as_mut())?;
                    }
                    b"EnumValue" => row_cells = Some(Vec::new()),
                    b"EnumAttributeValue" => {
                        pending_cell = Some(PendingCell::from_element(&element)?);
                    }
                    _ => {}
                },
                Event::Empty(element) => match element.name().as_ref() {
                    b"EnumAttribute" => {
                        read_plain_attribute(&element, enum_type.as_mut())?;
                    }
                    b"EnumLiteralNameAttribute" => {
                        read_literal_attribute(&element, enum_type.as_mut())?;
                    }
                    b"EnumAttributeValue" => {
                        if let Some(cells) = row_cells.as_mut() {
                            let literal_slot = enum_type
                                .as_ref()
                                .is_some_and(|t| t.contains_enum_literal_name_attribute())
                                && cells.is_empty();
                            cells.push(PendingCell::from_element(&element)?.into_cell(literal_slot));
                        }
                    }
                    _ => {}
                },
                Event::Text(text) => {
                    if let Some(pending) = pending_cell.as_mut() {
                        pending.text = text.unescape()?.into_owned();
                    }
                }
                Event::End(element) => match element.name().as_ref() {
                    b"EnumAttributeValue" => {
                        if let (Some(pending), Some(cells)) =
                            (pending_cell.take(), row_cells.as_mut())
                        {
                            let literal_slot = enum_type
                                .as_ref()
                                .is_some_and(|t| t.contains_enum_literal_name_attribute())
                                && cells.is_empty();
                            cells.push(pending.into_cell(literal_slot));
                        }
                    }
                    b"EnumValue" => {
                        if let (Some(cells), Some(parsed)) =
                            (row_cells.take(), enum_type.as_mut())
                        {
                            parsed.push_enum_value(EnumValue::from_cells(cells));
                        }
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        enum_type.ok_or_else(|| {
            Error::MalformedDocument(format!("missing root element <{}>", ENUM_TYPE_TAG))
        })
    }
}

impl EnumContent {
    /// Serialize to the XML element tree.
    pub fn to_xml(&self) -> Result<String, Error> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        let mut root = BytesStart::new(ENUM_CONTENT_TAG);
        root.push_attribute(("enumType", self.enum_type.as_str()));
        writer.write_event(Event::Start(root))?;
        for row in self.enum_values() {
            write_row(&mut writer, row)?;
        }
        writer.write_event(Event::End(BytesEnd::new(ENUM_CONTENT_TAG)))?;
        Ok(String::from_utf8(writer.into_inner()).expect("xml writer emits utf-8"))
    }

    /// Deserialize from the XML element tree. The qualified name is carried
    /// by the enclosing resource, not by the document.
    pub fn from_xml(xml: &str, qualified_name: &str) -> Result<Self, Error> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut content: Option<EnumContent> = None;
        let mut row_cells: Option<Vec<EnumAttributeValue>> = None;
        let mut pending_cell: Option<PendingCell> = None;

        loop {
            match reader.read_event()? {
                Event::Start(element) => match element.name().as_ref() {
                    b"EnumContent" => {
                        let attributes = attributes_of(&element)?;
                        let enum_type = attributes
                            .get("enumType")
                            .cloned()
                            .ok_or_else(|| {
                                Error::MalformedDocument(
                                    "missing enumType attribute".to_string(),
                                )
                            })?;
                        content = Some(EnumContent::new(qualified_name, enum_type));
                    }
                    b"EnumValue" => row_cells = Some(Vec::new()),
                    b"EnumAttributeValue" => {
                        pending_cell = Some(PendingCell::from_element(&element)?);
                    }
                    _ => {}
                },
                Event::Empty(element) => {
                    if element.name().as_ref() == b"EnumAttributeValue" {
                        if let Some(cells) = row_cells.as_mut() {
                            cells.push(PendingCell::from_element(&element)?.into_cell(false));
                        }
                    }
                }
                Event::Text(text) => {
                    if let Some(pending) = pending_cell.as_mut() {
                        pending.text = text.unescape()?.into_owned();
                    }
                }
                Event::End(element) => match element.name().as_ref() {
                    b"EnumAttributeValue" => {
                        if let (Some(pending), Some(cells)) =
                            (pending_cell.take(), row_cells.as_mut())
                        {
                            cells.push(pending.into_cell(false));
                        }
                    }
                    b"EnumValue" => {
                        if let (Some(cells), Some(parsed)) = (row_cells.take(), content.as_mut())
                        {
                            parsed.push_enum_value(EnumValue::from_cells(cells));
                        }
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        content.ok_or_else(|| {
            Error::MalformedDocument(format!("missing root element <{}>", ENUM_CONTENT_TAG))
        })
    }
}

/// Cell state collected while reading one `<EnumAttributeValue>` element.
struct PendingCell {
    is_null: bool,
    international: bool,
    text: String,
}

impl PendingCell {
    fn from_element(element: &BytesStart<'_>) -> Result<Self, Error> {
        let attributes = attributes_of(element)?;
        Ok(Self {
            is_null: attributes.get("isNull").map_or(false, |v| parse_bool(v)),
            international: attributes
                .get("international")
                .map_or(false, |v| parse_bool(v)),
            text: String::new(),
        })
    }

    fn into_cell(self, literal_slot: bool) -> EnumAttributeValue {
        let value = if self.international {
            if self.is_null {
                Value::International(InternationalString::new())
            } else {
                Value::International(InternationalString::from_compact(&self.text))
            }
        } else if self.is_null {
            Value::Plain(None)
        } else {
            Value::Plain(Some(self.text))
        };
        let mut cell = if literal_slot {
            EnumAttributeValue::new_literal_name()
        } else {
            EnumAttributeValue::new_plain()
        };
        cell.set_value(value);
        cell
    }
}

fn read_plain_attribute(
    element: &BytesStart<'_>,
    enum_type: Option<&mut EnumType>,
) -> Result<(), Error> {
    let Some(enum_type) = enum_type else {
        return Err(Error::MalformedDocument(
            "attribute element outside of a type".to_string(),
        ));
    };
    let attributes = attributes_of(element)?;
    let mut parsed = PlainEnumAttribute::new(
        attributes.get("name").cloned().unwrap_or_default(),
        attributes.get("datatype").cloned().unwrap_or_default(),
    );
    parsed.identifier = attributes.get("identifier").map_or(false, |v| parse_bool(v));
    parsed.unique = attributes.get("unique").map_or(false, |v| parse_bool(v));
    parsed.mandatory = attributes.get("mandatory").map_or(false, |v| parse_bool(v));
    parsed.inherited = attributes.get("inherited").map_or(false, |v| parse_bool(v));
    parsed.used_as_name_in_ui = attributes
        .get("usedAsNameInUi")
        .map_or(false, |v| parse_bool(v));
    parsed.multilingual = attributes
        .get("multilingual")
        .map_or(false, |v| parse_bool(v));
    enum_type.new_enum_attribute(parsed);
    Ok(())
}

fn read_literal_attribute(
    element: &BytesStart<'_>,
    enum_type: Option<&mut EnumType>,
) -> Result<(), Error> {
    let Some(enum_type) = enum_type else {
        return Err(Error::MalformedDocument(
            "attribute element outside of a type".to_string(),
        ));
    };
    let attributes = attributes_of(element)?;
    let literal = EnumLiteralNameAttribute::new().with_default_value_provider(
        attributes
            .get("defaultValueProviderAttribute")
            .cloned()
            .unwrap_or_default(),
    );
    enum_type.new_enum_literal_name_attribute(literal);
    Ok(())
}

fn write_attribute<W: io::Write>(
    writer: &mut Writer<W>,
    attribute: &EnumAttribute,
) -> Result<(), Error> {
    match attribute {
        EnumAttribute::LiteralName(literal) => {
            let mut element = BytesStart::new(LITERAL_NAME_ATTRIBUTE_TAG);
            if !literal.default_value_provider_attribute.is_empty() {
                element.push_attribute((
                    "defaultValueProviderAttribute",
                    literal.default_value_provider_attribute.as_str(),
                ));
            }
            writer.write_event(Event::Empty(element))?;
        }
        EnumAttribute::Plain(plain) => {
            let mut element = BytesStart::new(ATTRIBUTE_TAG);
            element.push_attribute(("name", plain.name.as_str()));
            element.push_attribute(("datatype", plain.datatype.as_str()));
            element.push_attribute(("identifier", bool_str(plain.identifier)));
            element.push_attribute(("unique", bool_str(plain.unique)));
            element.push_attribute(("mandatory", bool_str(plain.mandatory)));
            element.push_attribute(("inherited", bool_str(plain.inherited)));
            element.push_attribute(("usedAsNameInUi", bool_str(plain.used_as_name_in_ui)));
            element.push_attribute(("multilingual", bool_str(plain.multilingual)));
            writer.write_event(Event::Empty(element))?;
        }
    }
    Ok(())
}

fn write_row<W: io::Write>(writer: &mut Writer<W>, row: &EnumValue) -> Result<(), Error> {
    writer.write_event(Event::Start(BytesStart::new(VALUE_TAG)))?;
    for cell in row.enum_attribute_values() {
        match cell.value() {
            Value::Plain(None) => {
                let mut element = BytesStart::new(CELL_TAG);
                element.push_attribute(("isNull", "true"));
                writer.write_event(Event::Empty(element))?;
            }
            Value::Plain(Some(text)) => {
                writer.write_event(Event::Start(BytesStart::new(CELL_TAG)))?;
                if !text.is_empty() {
                    writer.write_event(Event::Text(BytesText::new(text)))?;
                }
                writer.write_event(Event::End(BytesEnd::new(CELL_TAG)))?;
            }
            Value::International(text) => {
                let mut element = BytesStart::new(CELL_TAG);
                element.push_attribute(("international", "true"));
                let compact = text.to_compact();
                if compact.is_empty() {
                    element.push_attribute(("isNull", "true"));
                    writer.write_event(Event::Empty(element))?;
                } else {
                    writer.write_event(Event::Start(element))?;
                    writer.write_event(Event::Text(BytesText::new(&compact)))?;
                    writer.write_event(Event::End(BytesEnd::new(CELL_TAG)))?;
                }
            }
        }
    }
    writer.write_event(Event::End(BytesEnd::new(VALUE_TAG)))?;
    Ok(())
}
