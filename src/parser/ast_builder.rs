use log::debug;
use sqlparser::ast::{self, HiveDistributionStyle};

use crate::tree::{AstError, CreateTableAsSelect, QualifiedName, Query, Statement};

/// Lowers sqlparser statements into the tree.
pub struct AstBuilder;

impl AstBuilder {
    pub fn build_statement(stmt: ast::Statement) -> Result<Statement, AstError> {
        debug!("build statement: {}", stmt);
        match stmt {
            ast::Statement::Query(query) => Ok(Query::from(query).into()),
            ast::Statement::CreateTable {
                name,
                columns,
                hive_distribution,
                query: Some(query),
                ..
            } => {
                if !columns.is_empty() {
                    return Err(AstError::UnsupportedStmt(format!(
                        "create table {} with column list and query",
                        name
                    )));
                }
                let (partition, partition_list) = Self::build_partition(hive_distribution);
                let ctas = CreateTableAsSelect::new(
                    QualifiedName::try_from(&name)?,
                    Query::from(query),
                    partition,
                    partition_list,
                );
                Ok(ctas.into())
            }
            _ => Err(AstError::UnsupportedStmt(stmt.to_string())),
        }
    }

    fn build_partition(distribution: HiveDistributionStyle) -> (bool, Vec<String>) {
        match distribution {
            HiveDistributionStyle::PARTITIONED { columns } => {
                (true, columns.into_iter().map(|c| c.name.value).collect())
            }
            _ => (false, vec![]),
        }
    }
}
