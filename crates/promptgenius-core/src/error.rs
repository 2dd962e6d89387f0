use thiserror::Error;

use crate::form::Field;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptGeniusError {
    #[error("unknown {table} id: {id}")]
    UnknownOption { table: &'static str, id: String },

    #[error("incomplete form: {0} is not set")]
    IncompleteForm(Field),
}
