//! Form document port definition.

/// Port for reading named input controls from a form document.
pub trait FormDocument {
    /// Whether a control with this name exists in the document.
    fn has_control(&self, name: &str) -> bool;

    /// Current value of the control, or `None` when it does not exist.
    fn control_value(&self, name: &str) -> Option<String>;
}
