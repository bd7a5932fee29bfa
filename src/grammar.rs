//! Grammar model: families of productions, each production an ordered list of
//! typed fields.
//!
//! Everything here is read-only once built. Order is load-bearing: it fixes
//! the order of visitor methods, variant classes, constructor parameters and
//! field declarations in the generated code.
pub mod builtin;
pub mod validate;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Copied verbatim into the output (`List<Expr>`, `Expr.Variable`, ...).
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub productions: Vec<Production>,
}

/// Family name → family, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrammarTable {
    families: IndexMap<String, Family>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Field {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self { ty: ty.into(), name: name.into() }
    }
}

impl Production {
    pub fn new<I, T, N>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (T, N)>,
        T: Into<String>,
        N: Into<String>,
    {
        let fields = fields.into_iter().map(|(ty, name)| Field::new(ty, name)).collect();
        Self { name: name.into(), fields }
    }

    /// `Type name, Type name`: the constructor parameter list and the
    /// right-hand side of the header's grammar line.
    pub fn signature(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{} {}", f.ty, f.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Family {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), imports: Vec::new(), productions: Vec::new() }
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    pub fn with_production(mut self, production: Production) -> Self {
        self.productions.push(production);
        self
    }
}

static BUILTIN: Lazy<GrammarTable> = Lazy::new(builtin::jlox);

impl GrammarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The jlox expression/statement grammar.
    pub fn builtin() -> &'static GrammarTable {
        &BUILTIN
    }

    /// Insert a family under its own name. A family already present under
    /// that name is replaced in place, keeping its position.
    pub fn insert(&mut self, family: Family) {
        self.families.insert(family.name.clone(), family);
    }

    pub fn with_family(mut self, family: Family) -> Self {
        self.insert(family);
        self
    }

    /// Merge `other` into `self`; families of `other` win on name clashes.
    pub fn extend(&mut self, other: GrammarTable) {
        for (_, family) in other.families {
            self.insert(family);
        }
    }

    pub fn lookup_family(&self, key: &str) -> Result<&Family> {
        self.families.get(key).ok_or_else(|| Error::UnknownFamily {
            key: key.to_string(),
            known: self.keys().map(str::to_string).collect(),
        })
    }

    /// Exact key match, else case-insensitive (`"expr"` → `"Expr"`).
    pub fn resolve_key(&self, raw: &str) -> Option<&str> {
        let raw = raw.trim();
        if let Some((key, _)) = self.families.get_key_value(raw) {
            return Some(key.as_str());
        }
        self.families
            .keys()
            .find(|key| key.eq_ignore_ascii_case(raw))
            .map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.values()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Serde leaves `Family::name` empty; fill it in from the map keys.
    pub(crate) fn restore_names(&mut self) {
        for (key, family) in self.families.iter_mut() {
            family.name = key.clone();
        }
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_family() {
        let table = GrammarTable::builtin();
        let expr = table.lookup_family("Expr").unwrap();
        assert_eq!(expr.name, "Expr");
        assert_eq!(expr.productions.first().map(|p| p.name.as_str()), Some("Assign"));
    }

    #[test]
    fn lookup_unknown_family_lists_known_keys() {
        let table = GrammarTable::builtin();
        match table.lookup_family("Foo") {
            Err(Error::UnknownFamily { key, known }) => {
                assert_eq!(key, "Foo");
                assert_eq!(known, vec!["Expr".to_string(), "Stmt".to_string()]);
            }
            other => panic!("expected UnknownFamily, got {other:?}"),
        }
    }

    #[test]
    fn lookup_is_case_sensitive_but_resolve_is_not() {
        let table = GrammarTable::builtin();
        assert!(table.lookup_family("expr").is_err());
        assert_eq!(table.resolve_key("expr"), Some("Expr"));
        assert_eq!(table.resolve_key(" STMT "), Some("Stmt"));
        assert_eq!(table.resolve_key("decl"), None);
    }

    #[test]
    fn exact_key_wins_over_case_insensitive_match() {
        let table = GrammarTable::new()
            .with_family(Family::new("Expr"))
            .with_family(Family::new("EXPR"));
        assert_eq!(table.resolve_key("EXPR"), Some("EXPR"));
        assert_eq!(table.resolve_key("Expr"), Some("Expr"));
        assert_eq!(table.resolve_key("expr"), Some("Expr"));
    }

    #[test]
    fn signature_keeps_field_order() {
        let p = Production::new("Binary", [("Expr", "left"), ("Token", "operator"), ("Expr", "right")]);
        assert_eq!(p.signature(), "Expr left, Token operator, Expr right");
        assert_eq!(Production::new("Nil", Vec::<(&str, &str)>::new()).signature(), "");
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut table = GrammarTable::new()
            .with_family(Family::new("A"))
            .with_family(Family::new("B"));
        table.insert(Family::new("A").with_imports(["java.util.Map"]));
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(table.lookup_family("A").unwrap().imports, vec!["java.util.Map"]);
    }

    #[test]
    fn serde_round_trip_restores_names() {
        let json = serde_json::to_string(GrammarTable::builtin()).unwrap();
        let mut back: GrammarTable = serde_json::from_str(&json).unwrap();
        back.restore_names();
        assert_eq!(&back, GrammarTable::builtin());
    }
}
