pub const DEFAULT_COMPONENT_NAME: &str = "Component";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Name of the emitted component function.
    pub component_name: String,
    /// Drop text children that consist only of whitespace.
    pub trim: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions {
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            trim: true,
        }
    }
}
