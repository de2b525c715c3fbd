use crate::{
    escape::string_literal,
    tables::{ElementClass, property_name},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValue<'a> {
    String(&'a str),
    /// A boolean attribute written without a value, e.g. `disabled=""`.
    True,
}

impl PropertyValue<'_> {
    pub fn to_literal(&self) -> String {
        match self {
            PropertyValue::String(value) => string_literal(value),
            PropertyValue::True => "true".to_string(),
        }
    }
}

/// Ordered output properties of one element.
pub type PropertyMap<'a> = Vec<(&'a str, PropertyValue<'a>)>;

/// Filters and renames the attributes of an element into `.props()` entries.
///
/// Event handlers (`on*`) and the attributes handled by dedicated emission
/// paths are dropped. Returns `None` when nothing is left.
pub fn extract_properties(
    class: ElementClass,
    attributes: &[(String, String)],
) -> Option<PropertyMap<'_>> {
    let mut properties: PropertyMap<'_> = Vec::new();

    for (name, value) in attributes {
        if name.starts_with("on") {
            continue;
        }

        let Some(property) = property_name(name, class) else {
            continue;
        };

        let value = if value.is_empty() {
            PropertyValue::True
        } else {
            PropertyValue::String(value)
        };

        match properties.iter_mut().find(|(existing, _)| *existing == property) {
            Some(entry) => entry.1 = value,
            None => properties.push((property, value)),
        }
    }

    if properties.is_empty() {
        None
    } else {
        Some(properties)
    }
}
