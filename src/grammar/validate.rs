//! Optional lint pass over a grammar table.
//!
//! Synthesis never calls this: a malformed table still produces (malformed)
//! output. The CLI reports what this finds and, under `--strict`, refuses to
//! generate.
use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Family, GrammarTable};

static JAVA_IDENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap()
});

const JAVA_KEYWORDS: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "false", "final", "finally", "float", "for", "goto", "if",
    "implements", "import", "instanceof", "int", "interface", "long", "native",
    "new", "null", "package", "private", "protected", "public", "return",
    "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "true", "try", "void", "volatile", "while",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// `Family`, `Family.Production` or `Family.Production.field`.
    pub location: String,
    pub kind: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    NotAnIdentifier(String),
    ReservedWord(String),
    DuplicateProduction(String),
    DuplicateField(String),
    EmptyType,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::NotAnIdentifier(name) => {
                write!(f, "{}: `{name}` is not a valid identifier", self.location)
            }
            IssueKind::ReservedWord(name) => {
                write!(f, "{}: `{name}` is a reserved word", self.location)
            }
            IssueKind::DuplicateProduction(name) => {
                write!(f, "{}: production `{name}` is declared more than once", self.location)
            }
            IssueKind::DuplicateField(name) => {
                write!(f, "{}: field `{name}` is declared more than once", self.location)
            }
            IssueKind::EmptyType => write!(f, "{}: empty type tag", self.location),
        }
    }
}

fn check_name(location: &str, name: &str, out: &mut Vec<Issue>) {
    let kind = if !JAVA_IDENT.is_match(name) {
        IssueKind::NotAnIdentifier(name.to_string())
    } else if JAVA_KEYWORDS.contains(&name) {
        IssueKind::ReservedWord(name.to_string())
    } else {
        return;
    };
    out.push(Issue { location: location.to_string(), kind });
}

/// Every issue in table order. Empty means the table is well-formed.
pub fn validate(table: &GrammarTable) -> Vec<Issue> {
    table.families().flat_map(validate_family).collect()
}

/// Issues of one family, in production/field order.
pub fn validate_family(family: &Family) -> Vec<Issue> {
    let mut out = Vec::new();
    check_name(&family.name, &family.name, &mut out);

    let mut seen_productions = HashSet::new();
    for production in &family.productions {
        let at = format!("{}.{}", family.name, production.name);
        check_name(&at, &production.name, &mut out);
        if !seen_productions.insert(production.name.as_str()) {
            out.push(Issue {
                location: family.name.clone(),
                kind: IssueKind::DuplicateProduction(production.name.clone()),
            });
        }

        let mut seen_fields = HashSet::new();
        for field in &production.fields {
            let field_at = format!("{at}.{}", field.name);
            check_name(&field_at, &field.name, &mut out);
            if field.ty.trim().is_empty() {
                out.push(Issue { location: field_at.clone(), kind: IssueKind::EmptyType });
            }
            if !seen_fields.insert(field.name.as_str()) {
                out.push(Issue {
                    location: at.clone(),
                    kind: IssueKind::DuplicateField(field.name.clone()),
                });
            }
        }
    }
    out
}
