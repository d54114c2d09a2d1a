use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::field::FieldSpec;

/// Errors found when checking a form schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("form declares no fields")]
    NoFields,

    #[error("field at position {index} has an empty name")]
    EmptyName { index: usize },

    #[error("field '{name}' is declared more than once")]
    DuplicateField { name: String },
}

/// Ordered list of fields making up a form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Checks:
    /// - At least one field is declared
    /// - Every field has a non-empty, unique name
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::NoFields);
        }

        let mut seen = HashSet::new();
        for (index, field) in self.fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(SchemaError::EmptyName { index });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }

        Ok(())
    }
}
