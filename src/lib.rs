pub mod cli;
pub mod parser;
pub mod tree;
pub mod util;

pub use self::parser::{parse, parse_query, SqlDialect};
pub use self::tree::{
    AstError, AstVisitor, CreateTableAsSelect, Node, NodeType, QualifiedName, Query, Statement,
    WithNodeType,
};
