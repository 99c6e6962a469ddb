use std::fmt;

use itertools::Itertools;
use sqlparser::ast::ObjectName;

use super::AstError;

/// A name of a table, view, custom type, etc., possibly multi-part, i.e. db.schema.obj
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    parts: Vec<String>,
}

impl QualifiedName {
    pub fn new(parts: Vec<String>) -> Result<Self, AstError> {
        if parts.is_empty() {
            return Err(AstError::InvalidArgument("parts is empty".to_string()));
        }
        Ok(Self { parts })
    }

    pub fn of<I, S>(first: impl Into<String>, rest: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts = std::iter::once(first.into())
            .chain(rest.into_iter().map(Into::into))
            .collect();
        Self { parts }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// All parts except the last one, `None` for a single part name.
    pub fn prefix(&self) -> Option<QualifiedName> {
        match self.parts.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self {
                parts: rest.to_vec(),
            }),
            _ => None,
        }
    }

    pub fn suffix(&self) -> &str {
        // parts is never empty
        &self.parts[self.parts.len() - 1]
    }

    /// Whether the trailing parts of this name are equal to `suffix`.
    pub fn has_suffix(&self, suffix: &QualifiedName) -> bool {
        self.parts.ends_with(&suffix.parts)
    }
}

impl TryFrom<&ObjectName> for QualifiedName {
    type Error = AstError;

    fn try_from(object_name: &ObjectName) -> Result<Self, Self::Error> {
        Self::new(object_name.0.iter().map(|ident| ident.value.clone()).collect())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.parts.iter().join("."))
    }
}
