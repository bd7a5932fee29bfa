use crate::grammar::{Family, Production};
use crate::ir::{BaseClass, GrammarRule, Header, Member, Unit, Variant, VisitMethod, VisitorInterface};
use crate::synth::Provenance;

/// `visit` + production + family, e.g. `visitBinaryExpr`.
pub fn visit_method_name(production: &str, family: &str) -> String {
    format!("visit{production}{family}")
}

/// Visitor parameter name: the family name, lower-cased (`expr`, `stmt`).
pub fn visitor_param_name(family: &str) -> String {
    family.to_lowercase()
}

pub fn lower_to_ir(family: &Family, package: &str, provenance: &Provenance) -> Unit {
    Unit {
        header: Header {
            rules: family.productions.iter().map(grammar_rule).collect(),
            tool: provenance.tool.clone(),
            generated_at: provenance.formatted_timestamp(),
        },
        package: package.to_string(),
        imports: family.imports.clone(),
        base: BaseClass {
            name: family.name.clone(),
            visitor: lower_visitor(family),
            variants: family.productions.iter().map(|p| lower_variant(p, &family.name)).collect(),
        },
    }
}

fn grammar_rule(production: &Production) -> GrammarRule {
    GrammarRule {
        head: production.name.clone(),
        body: production.signature(),
    }
}

fn lower_visitor(family: &Family) -> VisitorInterface {
    let param = visitor_param_name(&family.name);
    let methods = family.productions.iter().map(|p| VisitMethod {
        name: visit_method_name(&p.name, &family.name),
        param_ty: p.name.clone(),
        param: param.clone(),
    }).collect();
    VisitorInterface { methods }
}

fn lower_variant(production: &Production, family: &str) -> Variant {
    Variant {
        name: production.name.clone(),
        extends: family.to_string(),
        members: production.fields.iter().map(|f| Member {
            ty: f.ty.clone(),
            name: f.name.clone(),
        }).collect(),
        visit_method: visit_method_name(&production.name, family),
    }
}
