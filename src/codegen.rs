//! IR → Java source lines. One method per construct, called in file order.
use crate::ir::{BaseClass, Header, Unit, Variant, VisitorInterface};

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct Codegen {
    lines: Vec<String>,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, unit: &Unit) {
        self.emit_header(&unit.header);
        self.emit_package(&unit.package);
        self.emit_imports(&unit.imports);
        self.emit_base(&unit.base);
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{text}", INDENT.repeat(depth)));
        }
    }

    fn blank(&mut self) {
        self.line(0, "");
    }

    fn emit_header(&mut self, header: &Header) {
        self.line(0, "/**");
        self.line(0, " * Implements the syntax grammar:");
        for rule in &header.rules {
            self.line(0, format!(" * {INDENT}{} -> {};", rule.head, rule.body));
        }
        self.line(0, format!(
            " * automatically generated with `{}` on {}.",
            header.tool, header.generated_at,
        ));
        self.line(0, "*/");
    }

    fn emit_package(&mut self, package: &str) {
        self.line(0, format!("package {package};"));
        self.blank();
    }

    fn emit_imports(&mut self, imports: &[String]) {
        if imports.is_empty() {
            return;
        }
        for entry in imports {
            self.line(0, format!("import {entry};"));
        }
        self.blank();
        self.blank();
    }

    fn emit_base(&mut self, base: &BaseClass) {
        self.line(0, format!("abstract class {} {{", base.name));
        self.emit_visitor(&base.visitor);
        for variant in &base.variants {
            self.emit_variant(variant);
        }
        self.line(1, "abstract <R> R accept(Visitor<R> visitor);");
        self.line(0, "}");
        self.blank();
    }

    fn emit_visitor(&mut self, visitor: &VisitorInterface) {
        self.line(1, "interface Visitor<R> {");
        for method in &visitor.methods {
            self.line(2, format!("R {}({} {});", method.name, method.param_ty, method.param));
        }
        self.line(1, "}");
        self.blank();
    }

    fn emit_variant(&mut self, variant: &Variant) {
        let params = variant.members.iter()
            .map(|m| format!("{} {}", m.ty, m.name))
            .collect::<Vec<_>>()
            .join(", ");

        self.line(1, format!("static class {} extends {} {{", variant.name, variant.extends));

        // constructor
        self.line(2, format!("{}({params}) {{", variant.name));
        for member in &variant.members {
            self.line(3, format!("this.{0}={0};", member.name));
        }
        self.line(2, "}");
        self.blank();

        // double dispatch
        self.line(2, "@Override");
        self.line(2, "<R> R accept(Visitor<R> visitor) {");
        self.line(3, format!("return visitor.{}(this);", variant.visit_method));
        self.line(2, "}");
        self.blank();

        for member in &variant.members {
            self.line(2, format!("final {} {};", member.ty, member.name));
        }
        self.line(1, "}");
        self.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Member, VisitMethod};
    use pretty_assertions::assert_eq;

    fn unit_with(variants: Vec<Variant>, imports: Vec<String>) -> Unit {
        Unit {
            header: Header { rules: Vec::new(), tool: "visitgen".into(), generated_at: "01/02/25 03:04".into() },
            package: "demo".into(),
            imports,
            base: BaseClass {
                name: "Expr".into(),
                visitor: VisitorInterface {
                    methods: variants.iter().map(|v| VisitMethod {
                        name: v.visit_method.clone(),
                        param_ty: v.name.clone(),
                        param: "expr".into(),
                    }).collect(),
                },
                variants,
            },
        }
    }

    #[test]
    fn variant_block_layout() {
        let grouping = Variant {
            name: "Grouping".into(),
            extends: "Expr".into(),
            members: vec![Member { ty: "Expr".into(), name: "expression".into() }],
            visit_method: "visitGroupingExpr".into(),
        };
        let mut cg = Codegen::new();
        cg.emit(&unit_with(vec![grouping], vec!["java.util.List".into()]));
        assert_eq!(cg.into_lines(), vec![
            "/**",
            " * Implements the syntax grammar:",
            " * automatically generated with `visitgen` on 01/02/25 03:04.",
            "*/",
            "package demo;",
            "",
            "import java.util.List;",
            "",
            "",
            "abstract class Expr {",
            "    interface Visitor<R> {",
            "        R visitGroupingExpr(Grouping expr);",
            "    }",
            "",
            "    static class Grouping extends Expr {",
            "        Grouping(Expr expression) {",
            "            this.expression=expression;",
            "        }",
            "",
            "        @Override",
            "        <R> R accept(Visitor<R> visitor) {",
            "            return visitor.visitGroupingExpr(this);",
            "        }",
            "",
            "        final Expr expression;",
            "    }",
            "",
            "    abstract <R> R accept(Visitor<R> visitor);",
            "}",
            "",
        ]);
    }

    #[test]
    fn no_imports_means_no_import_block() {
        let mut cg = Codegen::new();
        cg.emit(&unit_with(Vec::new(), Vec::new()));
        let src = cg.into_lines().join("\n");
        assert!(!src.contains("import "));
        assert!(src.contains("package demo;\n\nabstract class Expr {\n"));
        assert!(src.ends_with("}\n"));
    }
}
