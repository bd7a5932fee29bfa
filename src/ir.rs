// Class-hierarchy IR for codegen. Names are fully derived here; codegen only
// decides layout.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub header: Header,
    pub package: String,
    pub imports: Vec<String>,   // may be empty → no import block
    pub base: BaseClass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub rules: Vec<GrammarRule>,
    pub tool: String,
    pub generated_at: String,   // already formatted
}

/// One `Name -> Type name, ...` documentation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarRule {
    pub head: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseClass {
    pub name: String,
    pub visitor: VisitorInterface,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorInterface {
    pub methods: Vec<VisitMethod>,
}

/// `R <name>(<param_ty> <param>);`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitMethod {
    pub name: String,
    pub param_ty: String,
    pub param: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub extends: String,
    pub members: Vec<Member>,   // constructor params, assignments and finals all follow this order
    pub visit_method: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub ty: String,
    pub name: String,
}
