use std::fmt;

use sqlparser::ast;

use super::{AstVisitor, Node};

/// The SELECT subtree of a statement. Owned by value, compared and hashed structurally.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Query {
    body: Box<ast::Query>,
}

impl Query {
    pub fn new(body: ast::Query) -> Self {
        Self {
            body: Box::new(body),
        }
    }

    pub fn body(&self) -> &ast::Query {
        &self.body
    }
}

impl From<ast::Query> for Query {
    fn from(body: ast::Query) -> Self {
        Self::new(body)
    }
}

impl From<Box<ast::Query>> for Query {
    fn from(body: Box<ast::Query>) -> Self {
        Self { body }
    }
}

impl Node for Query {
    fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized,
    {
        visitor.visit_query(self, context)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.body)
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Query")
            .field(&format_args!("{}", self.body))
            .finish()
    }
}
