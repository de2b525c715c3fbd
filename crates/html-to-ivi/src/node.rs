/// A child of a [`MarkupNode`]: either a nested element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupChild {
    Element(MarkupNode),
    Text(String),
}

/// An element as produced by the markup parser. Attribute and child order is
/// the source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkupNode {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<MarkupChild>,
}

impl MarkupNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_child(mut self, child: impl Into<MarkupChild>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns the value of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attribute, _)| attribute == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<MarkupNode> for MarkupChild {
    fn from(node: MarkupNode) -> Self {
        MarkupChild::Element(node)
    }
}

impl From<&str> for MarkupChild {
    fn from(text: &str) -> Self {
        MarkupChild::Text(text.to_string())
    }
}
