//! Grammar tables from JSON files.
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::grammar::GrammarTable;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, T>(de) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at JSON path {path} → {}", err.into_inner()))
        }
    }
}

pub fn parse_table(src: &str) -> Result<GrammarTable, String> {
    let mut table = from_str_with_path::<GrammarTable>(src)?;
    table.restore_names();
    Ok(table)
}

pub fn load_file(path: &Path) -> Result<GrammarTable> {
    let grammar_file = |message: String| Error::GrammarFile { path: path.to_path_buf(), message };
    let source = std::fs::read_to_string(path).map_err(|error| grammar_file(error.to_string()))?;
    parse_table(&source).map_err(grammar_file)
}

/// Load and merge every file matched by `patterns`, in argument order. A
/// family defined again by a later file replaces the earlier definition.
pub fn load_files<I>(patterns: I) -> Result<GrammarTable>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut table = GrammarTable::new();
    for path in resolve_file_path_patterns(patterns)? {
        table.extend(load_file(&path)?);
    }
    Ok(table)
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();
        let glob_error = |message: String| Error::GrammarFile { path: PathBuf::from(pattern), message };

        if has_glob_chars(pattern) {
            let entries = glob::glob(pattern).map_err(|e| glob_error(e.to_string()))?;
            let mut matched = entries
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| glob_error(e.to_string()))?;
            if matched.is_empty() {
                return Err(glob_error("glob pattern matched no files".to_string()));
            }
            // glob yields alphabetical order already; keep it explicit
            matched.sort();
            out.extend(matched);
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TWO_FAMILIES: &str = r#"{
        "Stmt": {
            "productions": [
                { "name": "Print", "fields": [{ "type": "Expr", "name": "expression" }] }
            ]
        },
        "Expr": {
            "imports": ["java.util.List"],
            "productions": [
                { "name": "Literal", "fields": [{ "type": "Object", "name": "value" }] },
                { "name": "Nil" }
            ]
        }
    }"#;

    #[test]
    fn document_order_is_table_order() {
        let table = parse_table(TWO_FAMILIES).unwrap();
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["Stmt", "Expr"]);
        let expr = table.lookup_family("Expr").unwrap();
        assert_eq!(expr.name, "Expr");
        assert_eq!(expr.imports, vec!["java.util.List"]);
        assert!(expr.productions[1].fields.is_empty());
        assert!(table.lookup_family("Stmt").unwrap().imports.is_empty());
    }

    #[test]
    fn errors_carry_json_path() {
        let bad = r#"{ "Expr": { "productions": [ { "name": "Literal", "fields": [ { "name": "value" } ] } ] } }"#;
        let message = parse_table(bad).unwrap_err();
        assert!(message.contains("Expr.productions[0].fields[0]"), "{message}");
        assert!(message.contains("type"), "{message}");
    }

    #[test]
    fn later_files_replace_earlier_families() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), TWO_FAMILIES).unwrap();
        fs::write(
            dir.path().join("b.json"),
            r#"{ "Stmt": { "productions": [] }, "Decl": {} }"#,
        ).unwrap();

        let pattern = dir.path().join("*.json");
        let table = load_files([pattern.to_string_lossy()]).unwrap();
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["Stmt", "Expr", "Decl"]);
        assert!(table.lookup_family("Stmt").unwrap().productions.is_empty());
    }

    #[test]
    fn missing_file_and_empty_glob_are_grammar_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            load_files([missing.to_string_lossy()]),
            Err(Error::GrammarFile { .. })
        ));
        let empty = dir.path().join("*.json");
        match load_files([empty.to_string_lossy()]) {
            Err(Error::GrammarFile { message, .. }) => assert!(message.contains("matched no files")),
            other => panic!("expected GrammarFile error, got {other:?}"),
        }
    }
}
