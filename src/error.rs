use std::path::PathBuf;

use crate::grammar::validate::Issue;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown family `{key}` (known: {})", known.join(", "))]
    UnknownFamily { key: String, known: Vec<String> },

    #[error("failed to write {}: {source}", path.display())]
    SinkIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("grammar file {}: {message}", path.display())]
    GrammarFile { path: PathBuf, message: String },

    #[error("malformed grammar ({} issue(s)):\n{}", .0.len(), render_issues(.0))]
    MalformedGrammar(Vec<Issue>),
}

fn render_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}
