use std::fmt;
use std::hash::{Hash, Hasher};

use derive_builder::Builder;

use super::{AstError, AstVisitor, Node, QualifiedName, Query};
use crate::util::format_sql;

/// `CREATE TABLE <name> [PARTITIONED BY (<columns>)] AS <query>`
///
/// Identity of the statement is the target name and the source query, partition metadata does
/// not take part in equality or hashing.
#[derive(Clone, Builder)]
#[builder(pattern = "owned", build_fn(error = "AstError"))]
pub struct CreateTableAsSelect {
    #[builder(setter(into))]
    name: QualifiedName,
    #[builder(setter(into))]
    query: Query,
    #[builder(default)]
    partition: bool,
    #[builder(default, setter(custom))]
    partition_list: Box<[String]>,
}

impl CreateTableAsSelect {
    pub fn new<I, S>(name: QualifiedName, query: Query, partition: bool, partition_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            query,
            partition,
            partition_list: partition_list.into_iter().map(Into::into).collect(),
        }
    }

    /// Builder for callers holding possibly absent parts, `build` fails with
    /// [`AstError::InvalidArgument`] when `name` or `query` was never set.
    pub fn builder() -> CreateTableAsSelectBuilder {
        CreateTableAsSelectBuilder::default()
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn is_partition(&self) -> bool {
        self.partition
    }

    pub fn partition_list(&self) -> &[String] {
        &self.partition_list
    }
}

impl CreateTableAsSelectBuilder {
    /// Copies the given columns, unset means no partition columns.
    pub fn partition_list<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partition_list = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}

impl Node for CreateTableAsSelect {
    fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized,
    {
        visitor.visit_create_table_as_select(self, context)
    }
}

impl PartialEq for CreateTableAsSelect {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.name == other.name && self.query == other.query)
    }
}

impl Eq for CreateTableAsSelect {}

impl Hash for CreateTableAsSelect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.query.hash(state);
    }
}

impl fmt::Debug for CreateTableAsSelect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CreateTableAsSelect")
            .field("name", &format_args!("{}", self.name))
            .field("query", &format_args!("{}", self.query))
            .finish()
    }
}

impl fmt::Display for CreateTableAsSelect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_sql(self))
    }
}
