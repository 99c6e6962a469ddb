mod sql_formatter;

pub use sql_formatter::*;
