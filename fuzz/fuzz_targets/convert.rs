#![no_main]

use arbitrary::Arbitrary;
use html_to_ivi::{MarkupChild, MarkupNode, TransformOptions};
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;

const TAGS: &[&str] = &["div", "span", "input", "textarea", "label", "ul", "li", "p"];
const ATTRIBUTES: &[&str] = &["class", "style", "type", "value", "checked", "for", "onclick", "id"];

#[derive(Debug, Clone, Arbitrary)]
enum Child {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, Arbitrary)]
struct Element {
    tag: u8,
    attributes: Vec<(u8, String)>,
    children: Vec<Child>,
}

impl Element {
    fn to_node(&self) -> MarkupNode {
        MarkupNode {
            tag: TAGS[self.tag as usize % TAGS.len()].to_string(),
            attributes: self
                .attributes
                .iter()
                .map(|(name, value)| {
                    (
                        ATTRIBUTES[*name as usize % ATTRIBUTES.len()].to_string(),
                        value.clone(),
                    )
                })
                .collect(),
            children: self
                .children
                .iter()
                .map(|child| match child {
                    Child::Element(element) => MarkupChild::Element(element.to_node()),
                    Child::Text(text) => MarkupChild::Text(text.clone()),
                })
                .collect(),
        }
    }

    fn to_html(&self) -> String {
        let tag = TAGS[self.tag as usize % TAGS.len()];
        let attributes = self
            .attributes
            .iter()
            .map(|(name, value)| {
                format!(
                    r#" {}="{}""#,
                    ATTRIBUTES[*name as usize % ATTRIBUTES.len()],
                    value.replace('"', "&quot;")
                )
            })
            .join("");
        let children = self
            .children
            .iter()
            .map(|child| match child {
                Child::Element(element) => element.to_html(),
                Child::Text(text) => text.replace('<', "&lt;"),
            })
            .join("");

        format!("<{tag}{attributes}>{children}</{tag}>")
    }
}

#[derive(Debug, Clone, Arbitrary)]
struct Context {
    raw_html: Option<String>,
    root: Option<Element>,
    trim: bool,
}

fuzz_target!(|context: Context| {
    let options = TransformOptions {
        trim: context.trim,
        ..Default::default()
    };

    if let Some(html) = &context.raw_html {
        let _ = html_to_ivi::convert(html, &options);
    }

    if let Some(root) = &context.root {
        let node = root.to_node();
        assert_eq!(
            html_to_ivi::emit_component(&node, &options),
            html_to_ivi::emit_component(&node, &options)
        );
        let _ = html_to_ivi::convert(&root.to_html(), &options);
    }
});
