/// Ordered CSS property/value pairs taken from a `style` attribute.
pub type StyleMap<'a> = Vec<(&'a str, &'a str)>;

/// Splits an inline style into property/value pairs.
///
/// Segments are separated by `;` and split on their first `:`. Segments
/// without a `:` are dropped. Returns `None` when no pair was found.
pub fn extract_styles(style: &str) -> Option<StyleMap<'_>> {
    let mut styles: StyleMap<'_> = Vec::new();

    for (key, value) in style
        .split(';')
        .filter_map(|segment| segment.split_once(':'))
        .map(|(key, value)| (key.trim(), value.trim()))
    {
        // A repeated property keeps its first position and takes the last value.
        match styles.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => styles.push((key, value)),
        }
    }

    if styles.is_empty() { None } else { Some(styles) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("color: red", Some(vec![("color", "red")]))]
    #[case(
        "color:red; margin : 0 auto ;",
        Some(vec![("color", "red"), ("margin", "0 auto")])
    )]
    #[case(
        "background: url(http://example.com/a.png)",
        Some(vec![("background", "url(http://example.com/a.png)")])
    )]
    #[case("color red; width: 1px", Some(vec![("width", "1px")]))]
    #[case("color: red; color: blue; top: 0", Some(vec![("color", "blue"), ("top", "0")]))]
    #[case("color:", Some(vec![("color", "")]))]
    #[case("", None)]
    #[case(";;", None)]
    #[case("no colon here", None)]
    fn test_extract_styles(#[case] style: &str, #[case] expected: Option<StyleMap<'_>>) {
        assert_eq!(extract_styles(style), expected);
    }
}
