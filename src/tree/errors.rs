use derive_builder::UninitializedFieldError;
use sqlparser::parser::ParserError;

#[derive(thiserror::Error, Debug)]
pub enum AstError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unsupported statement: {0}")]
    UnsupportedStmt(String),
    #[error("parse error: {0}")]
    Parse(
        #[from]
        #[source]
        ParserError,
    ),
}

impl From<UninitializedFieldError> for AstError {
    fn from(e: UninitializedFieldError) -> Self {
        AstError::InvalidArgument(format!("{} is null", e.field_name()))
    }
}
