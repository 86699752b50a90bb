//! Error types for roster operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Index {index} out of range for register of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No space separating first and family name in {0:?}")]
    MissingNameSeparator(String),

    #[error("Empty first or family name part in {0:?}")]
    EmptyNamePart(String),

    #[error("Family name {family_name:?} is shorter than {required} characters")]
    FamilyNameTooShort { family_name: String, required: usize },

    #[error("Failed to serialize register: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RosterError {
    /// True for every out-of-range access (index, name split, short family name)
    pub fn is_out_of_range(&self) -> bool {
        !matches!(self, RosterError::Serialization(_))
    }
}
