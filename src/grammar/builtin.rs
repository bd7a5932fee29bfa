//! The grammar shipped with the tool: jlox expressions and statements.
use super::{Family, GrammarTable, Production};

const LIST: &str = "java.util.List";

pub(super) fn jlox() -> GrammarTable {
    GrammarTable::new().with_family(expr()).with_family(stmt())
}

fn expr() -> Family {
    Family::new("Expr")
        .with_imports([LIST])
        .with_production(Production::new("Assign", [("Token", "name"), ("Expr", "value")]))
        .with_production(Production::new("Ternary", [
            ("Expr", "left"),
            ("Token", "first"),
            ("Expr", "middle"),
            ("Token", "second"),
            ("Expr", "right"),
        ]))
        .with_production(Production::new("Binary", [("Expr", "left"), ("Token", "operator"), ("Expr", "right")]))
        .with_production(Production::new("Set", [("Expr", "object"), ("Token", "name"), ("Expr", "value")]))
        .with_production(Production::new("Super", [("Token", "keyword"), ("Token", "method")]))
        .with_production(Production::new("This", [("Token", "keyword")]))
        .with_production(Production::new("Unary", [("Token", "operator"), ("Expr", "right")]))
        .with_production(Production::new("Call", [("Expr", "callee"), ("Token", "paren"), ("List<Expr>", "arguments")]))
        .with_production(Production::new("Get", [("Expr", "object"), ("Token", "name")]))
        .with_production(Production::new("AnonFunction", [("List<Token>", "params"), ("List<Stmt>", "body")]))
        .with_production(Production::new("Grouping", [("Expr", "expression")]))
        .with_production(Production::new("Literal", [("Object", "value")]))
        .with_production(Production::new("Logical", [("Expr", "left"), ("Token", "operator"), ("Expr", "right")]))
        .with_production(Production::new("Variable", [("Token", "name")]))
}

fn stmt() -> Family {
    Family::new("Stmt")
        .with_imports([LIST])
        .with_production(Production::new("Block", [("List<Stmt>", "statements")]))
        .with_production(Production::new("Class", [
            ("Token", "name"),
            ("Expr.Variable", "superclass"),
            ("List<Stmt.Function>", "methods"),
        ]))
        .with_production(Production::new("Expression", [("Expr", "expression")]))
        .with_production(Production::new("Function", [("Token", "name"), ("Expr.AnonFunction", "definition")]))
        .with_production(Production::new("If", [("Expr", "condition"), ("Stmt", "thenBranch"), ("Stmt", "elseBranch")]))
        .with_production(Production::new("Print", [("Expr", "expression")]))
        .with_production(Production::new("Return", [("Token", "keyword"), ("Expr", "value")]))
        .with_production(Production::new("While", [("Expr", "condition"), ("Stmt", "body")]))
        .with_production(Production::new("Break", [("Token", "keyword")]))
        .with_production(Production::new("Var", [("Token", "name"), ("Expr", "initializer")]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(family: &Family) -> Vec<&str> {
        family.productions.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn expr_productions_in_declared_order() {
        let table = jlox();
        let expr = table.lookup_family("Expr").unwrap();
        assert_eq!(names(expr), vec![
            "Assign", "Ternary", "Binary", "Set", "Super", "This", "Unary", "Call",
            "Get", "AnonFunction", "Grouping", "Literal", "Logical", "Variable",
        ]);
        assert_eq!(expr.imports, vec![LIST]);
        assert_eq!(expr.productions[4].signature(), "Token keyword, Token method");
    }

    #[test]
    fn stmt_productions_in_declared_order() {
        let table = jlox();
        let stmt = table.lookup_family("Stmt").unwrap();
        assert_eq!(names(stmt), vec![
            "Block", "Class", "Expression", "Function", "If",
            "Print", "Return", "While", "Break", "Var",
        ]);
        let class = &stmt.productions[1];
        assert_eq!(class.signature(), "Token name, Expr.Variable superclass, List<Stmt.Function> methods");
    }

    #[test]
    fn builtin_table_passes_validation() {
        assert!(crate::grammar::validate::validate(&jlox()).is_empty());
    }
}
