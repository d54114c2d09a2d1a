use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// User typed into a field. Marks it dirty.
    SetValue { field: String, value: String },
    /// User left a field. Marks it touched.
    Blur { field: String },
    /// User pressed submit.
    Submit,
    /// Restore initial values and clear every flag.
    Reset,
}

impl Intent for FormIntent {}
