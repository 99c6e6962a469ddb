mod ast_builder;

pub use ast_builder::*;
use log::debug;
use sqlparser::dialect::{Dialect, GenericDialect, HiveDialect, PostgreSqlDialect};
use sqlparser::parser::Parser;
use strum_macros::{Display, EnumString};

use crate::tree::{AstError, Query, Statement};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SqlDialect {
    #[default]
    Generic,
    Hive,
    PostgreSql,
}

impl SqlDialect {
    fn dialect(&self) -> Box<dyn Dialect> {
        match self {
            SqlDialect::Generic => Box::new(GenericDialect {}),
            SqlDialect::Hive => Box::new(HiveDialect {}),
            SqlDialect::PostgreSql => Box::new(PostgreSqlDialect {}),
        }
    }
}

/// Parse sql text and lower every statement into the tree.
pub fn parse(sql: &str, dialect: SqlDialect) -> Result<Vec<Statement>, AstError> {
    let stmts = Parser::parse_sql(dialect.dialect().as_ref(), sql)?;
    debug!("parsed {} statement(s) with {} dialect", stmts.len(), dialect);
    stmts.into_iter().map(AstBuilder::build_statement).collect()
}

/// Parse sql text that must hold exactly one SELECT query.
pub fn parse_query(sql: &str, dialect: SqlDialect) -> Result<Query, AstError> {
    let mut stmts = parse(sql, dialect)?;
    match (stmts.pop(), stmts.is_empty()) {
        (Some(Statement::Query(query)), true) => Ok(query),
        (Some(stmt), true) => Err(AstError::UnsupportedStmt(format!(
            "expected a query, found {}",
            stmt
        ))),
        _ => Err(AstError::UnsupportedStmt(format!(
            "expected exactly one query: {}",
            sql
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::tree::{NodeType, QualifiedName, WithNodeType};

    #[test_case("generic", SqlDialect::Generic)]
    #[test_case("HIVE", SqlDialect::Hive)]
    #[test_case("PostgreSQL", SqlDialect::PostgreSql)]
    fn test_dialect_from_str(input: &str, expected: SqlDialect) {
        assert_eq!(SqlDialect::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_dialect_display() {
        assert_eq!(SqlDialect::default().to_string(), "generic");
        assert_eq!(SqlDialect::PostgreSql.to_string(), "postgresql");
        assert!(SqlDialect::from_str("mysql").is_err());
    }

    #[test]
    fn test_parse_create_table_as_select() {
        let sql = "create table foo.bar as select a, b from t";
        let stmts = parse(sql, SqlDialect::Generic).unwrap();
        assert_eq!(stmts.len(), 1);
        match &stmts[0] {
            Statement::CreateTableAsSelect(ctas) => {
                assert_eq!(ctas.name(), &QualifiedName::of("foo", ["bar"]));
                assert_eq!(ctas.query().to_string(), "SELECT a, b FROM t");
                assert!(!ctas.is_partition());
                assert!(ctas.partition_list().is_empty());
            }
            other => panic!("unexpected statement {:?}", other),
        }
    }

    #[test_case(SqlDialect::Generic)]
    #[test_case(SqlDialect::Hive)]
    #[test_case(SqlDialect::PostgreSql)]
    fn test_parse_partitioned_create_table_as_select(dialect: SqlDialect) {
        let sql = "create table foo.bar partitioned by (y string, m int) as select v, y, m from t";
        let stmts = parse(sql, dialect).unwrap();
        match &stmts[..] {
            [Statement::CreateTableAsSelect(ctas)] => {
                assert_eq!(ctas.name(), &QualifiedName::of("foo", ["bar"]));
                assert!(ctas.is_partition());
                assert_eq!(ctas.partition_list(), &["y", "m"]);
                assert_eq!(ctas.query().to_string(), "SELECT v, y, m FROM t");
            }
            other => panic!("unexpected statements {:?}", other),
        }
    }

    #[test_case(SqlDialect::Generic)]
    #[test_case(SqlDialect::Hive)]
    #[test_case(SqlDialect::PostgreSql)]
    fn test_parse_partition_columns_need_types(dialect: SqlDialect) {
        let sql = "create table foo.bar partitioned by (y, m) as select v, y, m from t";
        let err = parse(sql, dialect).unwrap_err();
        assert!(matches!(err, AstError::Parse(_)), "{:?}", err);
    }

    #[test]
    fn test_parse_multiple_statements() {
        let stmts = parse(
            "select 1; create table t as select 2;",
            SqlDialect::PostgreSql,
        )
        .unwrap();
        let types = stmts.iter().map(|s| s.node_type()).collect::<Vec<_>>();
        assert_eq!(types, vec![NodeType::Query, NodeType::CreateTableAsSelect]);
    }

    #[test_case("create table t (a int)" ; "create table without query")]
    #[test_case("insert into t values (1)" ; "insert")]
    #[test_case("drop table t" ; "drop table")]
    fn test_parse_unsupported(sql: &str) {
        let err = parse(sql, SqlDialect::Generic).unwrap_err();
        assert!(matches!(err, AstError::UnsupportedStmt(_)), "{:?}", err);
    }

    #[test]
    fn test_parse_error() {
        let err = parse("create table t as", SqlDialect::Generic).unwrap_err();
        assert!(matches!(err, AstError::Parse(_)), "{:?}", err);
    }

    #[test_case("create table t as select 1" ; "not a query")]
    #[test_case("select 1; select 2" ; "two queries")]
    #[test_case("" ; "empty")]
    fn test_parse_query_rejects(sql: &str) {
        let err = parse_query(sql, SqlDialect::Generic).unwrap_err();
        assert!(matches!(err, AstError::UnsupportedStmt(_)), "{:?}", err);
    }
}
