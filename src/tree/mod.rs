mod create_table_as_select;
mod errors;
mod qualified_name;
mod query;
mod visitor;

use std::fmt;

pub use create_table_as_select::*;
pub use errors::*;
pub use qualified_name::*;
pub use query::*;
pub use visitor::*;

use strum_macros::Display;

use crate::util::format_sql;

/// The core idea of `for_all_nodes` is to generate boilerplate code for all tree nodes,
/// which means passing the name of a macro into another macro.
///
/// Every node listed here gets a [`NodeType`] value and a `visit_<node>` method on
/// [`AstVisitor`], so a new node can't be added without every visitor handling it.
#[macro_export]
macro_rules! for_all_nodes {
    ($macro:ident) => {
        $macro! {
            Query,
            CreateTableAsSelect
        }
    };
}

pub trait WithNodeType {
    fn node_type(&self) -> NodeType;
}

/// impl [`NodeType`] fn for each node.
macro_rules! enum_node_type {
    ($($node_name:ident),*) => {
        /// each enum value represent a tree node struct type
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
        pub enum NodeType {
            $($node_name),*
        }

        $(impl WithNodeType for $node_name {
            fn node_type(&self) -> NodeType {
                NodeType::$node_name
            }
        })*
    };
}

for_all_nodes! { enum_node_type }

/// A node of the statement tree. A node only knows which visitor method matches its own shape,
/// the traversal itself lives in the visitor.
pub trait Node: WithNodeType + fmt::Debug {
    fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized;
}

/// Closed set of statements produced by the parser front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Query(Query),
    CreateTableAsSelect(CreateTableAsSelect),
}

impl WithNodeType for Statement {
    fn node_type(&self) -> NodeType {
        match self {
            Statement::Query(q) => q.node_type(),
            Statement::CreateTableAsSelect(s) => s.node_type(),
        }
    }
}

impl Node for Statement {
    fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized,
    {
        match self {
            Statement::Query(q) => q.accept(visitor, context),
            Statement::CreateTableAsSelect(s) => s.accept(visitor, context),
        }
    }
}

impl From<Query> for Statement {
    fn from(query: Query) -> Self {
        Statement::Query(query)
    }
}

impl From<CreateTableAsSelect> for Statement {
    fn from(stmt: CreateTableAsSelect) -> Self {
        Statement::CreateTableAsSelect(stmt)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_sql(self))
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::test_util::*;
    use super::*;

    #[test]
    fn test_statement_equality_across_variants() {
        let query = build_query("select a from t");
        let ctas = build_ctas("foo.bar", "select a from t", false, &[]);

        let s1 = Statement::from(query.clone());
        let s2 = Statement::from(ctas.clone());
        assert!(s1 != s2);
        assert!(s1 == Statement::Query(query));
        assert!(s2 == Statement::CreateTableAsSelect(ctas));
    }

    #[test]
    fn test_statement_node_type() {
        let s1 = Statement::from(build_query("select 1"));
        let s2 = Statement::from(build_ctas("t", "select 1", true, &["a"]));
        assert_eq!(s1.node_type(), NodeType::Query);
        assert_eq!(s2.node_type(), NodeType::CreateTableAsSelect);
        assert_eq!(s2.node_type().to_string(), "CreateTableAsSelect");
    }
}
