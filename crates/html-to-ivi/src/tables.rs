//! Static lookup tables shared by the extractors and the emitter.

/// Namespace every emitted constructor is called on, e.g. `h.div()`.
pub const BUILDER_NAMESPACE: &str = "h";

/// Prefix of the input constructors, e.g. `h.inputCheckbox()`.
pub const INPUT_CONSTRUCTOR_PREFIX: &str = "input";

const DEFAULT_INPUT_SUBTYPE: &str = "Text";

/// Decides which emission rules apply to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementClass {
    Plain,
    InputLike,
    TextAreaLike,
}

impl ElementClass {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "input" => ElementClass::InputLike,
            "textarea" => ElementClass::TextAreaLike,
            _ => ElementClass::Plain,
        }
    }
}

/// Maps an attribute name to the property it is emitted as.
///
/// `None` means the attribute is consumed by a dedicated emission path and must
/// not show up in `.props()`. Unlisted names map to themselves.
pub fn property_name(attribute: &str, class: ElementClass) -> Option<&str> {
    match (attribute, class) {
        ("class" | "style" | "autofocus", _) => None,
        ("type" | "checked" | "value", ElementClass::InputLike) => None,
        ("accept-charset", _) => Some("acceptCharset"),
        ("for", _) => Some("htmlFor"),
        (name, _) => Some(name),
    }
}

/// Maps the `type` attribute of an `<input>` to the constructor suffix.
pub fn input_subtype(input_type: Option<&str>) -> &'static str {
    match input_type {
        Some("button") => "Button",
        Some("checkbox") => "Checkbox",
        Some("color") => "Color",
        Some("date") => "Date",
        Some("datetime") => "Datetime",
        Some("datetime-local") => "DatetimeLocal",
        Some("email") => "Email",
        Some("file") => "File",
        Some("hidden") => "Hidden",
        Some("image") => "Image",
        Some("month") => "Month",
        Some("number") => "Number",
        Some("password") => "Password",
        Some("radio") => "Radio",
        Some("range") => "Range",
        Some("reset") => "Reset",
        Some("search") => "Search",
        Some("submit") => "Submit",
        Some("tel") => "Tel",
        Some("text") => "Text",
        Some("time") => "Time",
        Some("url") => "Url",
        Some("week") => "Week",
        _ => DEFAULT_INPUT_SUBTYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("input", ElementClass::InputLike)]
    #[case("textarea", ElementClass::TextAreaLike)]
    #[case("div", ElementClass::Plain)]
    #[case("select", ElementClass::Plain)]
    #[case("my-widget", ElementClass::Plain)]
    fn test_element_class(#[case] tag: &str, #[case] expected: ElementClass) {
        assert_eq!(ElementClass::from_tag(tag), expected);
    }

    #[rstest]
    #[case("class", ElementClass::Plain, None)]
    #[case("style", ElementClass::TextAreaLike, None)]
    #[case("autofocus", ElementClass::InputLike, None)]
    #[case("type", ElementClass::InputLike, None)]
    #[case("checked", ElementClass::InputLike, None)]
    #[case("value", ElementClass::InputLike, None)]
    #[case("type", ElementClass::Plain, Some("type"))]
    #[case("value", ElementClass::Plain, Some("value"))]
    #[case("accept-charset", ElementClass::Plain, Some("acceptCharset"))]
    #[case("for", ElementClass::Plain, Some("htmlFor"))]
    #[case("data-id", ElementClass::InputLike, Some("data-id"))]
    fn test_property_name(
        #[case] attribute: &str,
        #[case] class: ElementClass,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(property_name(attribute, class), expected);
    }

    #[rstest]
    #[case(Some("checkbox"), "Checkbox")]
    #[case(Some("datetime-local"), "DatetimeLocal")]
    #[case(Some("url"), "Url")]
    #[case(Some("week"), "Week")]
    #[case(Some("text"), "Text")]
    #[case(Some("Checkbox"), "Text")]
    #[case(Some("unknown"), "Text")]
    #[case(Some(""), "Text")]
    #[case(None, "Text")]
    fn test_input_subtype(#[case] input_type: Option<&str>, #[case] expected: &str) {
        assert_eq!(input_subtype(input_type), expected);
    }
}
