use itertools::Itertools;

use crate::tree::{AstVisitor, CreateTableAsSelect, Node, Query};

const INDENT: &str = "  ";

/// Renders a tree back to SQL text, the context is the current indent level.
///
/// The tree keeps partition column names only, so a `PARTITIONED BY (..)` clause is printed
/// without column types. That text is for display and logging, the parser needs a type after
/// every partition column and rejects it. Statements without partitioning parse back to an
/// equal statement.
#[derive(Default)]
pub struct SqlFormatter;

impl SqlFormatter {
    fn indent(level: usize) -> String {
        INDENT.repeat(level)
    }
}

impl AstVisitor<String, usize> for SqlFormatter {
    fn visit_query(&mut self, node: &Query, indent: usize) -> String {
        format!("{}{}", Self::indent(indent), node)
    }

    fn visit_create_table_as_select(
        &mut self,
        node: &CreateTableAsSelect,
        indent: usize,
    ) -> String {
        let mut sql = format!("{}CREATE TABLE {}", Self::indent(indent), node.name());
        if node.is_partition() {
            sql.push_str(&format!(
                " PARTITIONED BY ({})",
                node.partition_list().iter().join(", ")
            ));
        }
        sql.push_str(" AS\n");
        let query: String = node.query().accept(self, indent + 1);
        sql.push_str(&query);
        sql
    }
}

pub fn format_sql<N: Node>(node: &N) -> String {
    node.accept(&mut SqlFormatter, 0)
}
