use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Error, Result};
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::Editor;

use crate::parser::{parse, SqlDialect};
use crate::tree::WithNodeType;

pub fn interactive() -> Result<()> {
    let mut rl = Editor::<()>::new()?;
    load_history(&mut rl);
    let mut dialect = SqlDialect::default();

    loop {
        let read_sql = read_sql(&mut rl);
        match read_sql {
            Ok(sql) => {
                if !sql.trim().is_empty() {
                    rl.add_history_entry(sql.as_str());
                    run_sql(&mut dialect, sql);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
            }
            Err(ReadlineError::Eof) => {
                println!("Exited");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    save_history(&mut rl);
    Ok(())
}

/// Makes sure `<cache_dir>/history.txt` exists and returns its path.
fn prepare_history(cache_dir: &Path) -> io::Result<PathBuf> {
    std::fs::create_dir_all(cache_dir)?;
    let history_path = cache_dir.join("history.txt");
    if !history_path.exists() {
        File::create(&history_path)?;
    }
    Ok(history_path)
}

fn load_history(rl: &mut Editor<()>) {
    let Some(cache_dir) = dirs::cache_dir().map(|p| p.join("sqltree")) else {
        return;
    };
    match prepare_history(&cache_dir) {
        Ok(history_path) => {
            if rl.load_history(&history_path).is_err() {
                info!("No previous history.");
            }
        }
        Err(err) => warn!("Prepare history in {} failed {}.", cache_dir.display(), err),
    }
}

fn save_history(rl: &mut Editor<()>) {
    let path = dirs::cache_dir().map(|p| p.join("sqltree").join("history.txt"));

    if let Some(ref path) = path {
        if let Err(err) = rl.save_history(path) {
            warn!("Save history failed {}.", err);
        }
    }
}

fn read_sql(rl: &mut Editor<()>) -> Result<String, ReadlineError> {
    let mut sql = String::new();
    loop {
        let prompt = if sql.is_empty() { "> " } else { "? " };
        let line = rl.readline(prompt)?;
        if line.is_empty() {
            continue;
        }

        // internal commands starts with "\"
        if line.starts_with('\\') && sql.is_empty() {
            return Ok(line);
        }

        sql.push_str(line.as_str());
        if line.ends_with(';') {
            return Ok(sql);
        } else {
            sql.push('\n');
        }
    }
}

fn run_sql(dialect: &mut SqlDialect, sql: String) {
    if let Some(cmds) = sql.trim().strip_prefix('\\') {
        match run_internal(dialect, cmds) {
            Ok(_) => println!("Run Internal {} Success", cmds),
            Err(err) => println!("Run Internal {} Err: {}", cmds, err),
        }
        return;
    }

    match parse(sql.as_str(), *dialect) {
        Ok(stmts) => {
            for stmt in stmts {
                println!("{}: {:?}\n{};\n", stmt.node_type(), stmt, stmt);
            }
        }
        Err(err) => println!("Run Error: {}", err),
    }
}

fn run_internal(dialect: &mut SqlDialect, cmds: &str) -> Result<()> {
    if let Some(name) = cmds.strip_prefix("dialect") {
        *dialect = SqlDialect::from_str(name.trim())
            .map_err(|_| Error::msg(format!("Unknown dialect {}", name.trim())))?;
        info!("switched to {} dialect", dialect);
        Ok(())
    } else {
        Err(Error::msg("Unknown internal command"))
    }
}
