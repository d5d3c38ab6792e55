//! Syntax tree model for Sango.
//!
//! Two closed node categories, [`Statement`] and [`Expression`], plus [`TypeExpression`] and a
//! handful of auxiliary structs. The tree is a strict ownership hierarchy: every node
//! exclusively owns its children, and a node's variant is fixed at construction.
//!
//! Sub-nodes that can fail to parse are `Option<_>`: the parser records a diagnostic and
//! leaves the slot empty instead of aborting, so a partial tree always exists. `Display`
//! renders the canonical re-serialization relied on by the parse-dump tooling and golden
//! tests (infix grouping always parenthesized, statements suffixed with `;`); absent slots
//! render as nothing.

use std::fmt;

/// A half-open byte range into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// The smallest span covering both inputs.
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// Root of the tree: the ordered top-level statements of one source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// The closed set of statement variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `val a, b: T = value;` — immutable binding, comma-separated names destructure tuples.
    Val(Binding),
    /// `var x = value;` — mutable binding, same shape as `Val`.
    Var(Binding),
    /// `return expr;`
    Return { value: Option<Expression> },
    /// `x += expr;` — an identifier followed by an assignment-family operator. The operator
    /// is kept as spelled.
    Assignment {
        target: String,
        op: String,
        value: Option<Expression>,
    },
    /// Any other expression in statement position.
    Expression { expression: Option<Expression> },
    /// `def name(params): Ret = body` — always named in statement position.
    Function(FunctionLiteral),
    /// `include "stdio.h"` — registers the header with the foreign-function registry.
    Include { path: String },
    /// `type Name = T`
    TypeAlias {
        name: String,
        ty: Option<TypeExpression>,
    },
    /// `struct Name { field: T; ... }`
    Struct {
        name: String,
        fields: Vec<StructFieldDef>,
    },
    /// `impl *Name { def method() = ...; }`
    Impl {
        receiver: ReceiverInfo,
        methods: Vec<FunctionLiteral>,
    },
    /// `define NAME <rest of line>` — the value is the raw same-line token text.
    Define { name: String, value: String },
    /// `for x <- iterable { ... }` or `for i in range { ... }`.
    For {
        variable: String,
        iterable: Option<Expression>,
        body: Option<Block>,
        /// `true` for the `in` form, `false` for `<-`.
        uses_in: bool,
    },
    /// `while (cond) { ... }`
    While {
        condition: Option<Expression>,
        body: Option<Block>,
    },
    /// `defer expr`
    Defer { expression: Option<Expression> },
    /// `assert(expr)`
    Assert { condition: Option<Expression> },
}

/// Shared shape of `val` and `var` statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub names: Vec<String>,
    pub ty: Option<TypeExpression>,
    pub value: Option<Expression>,
}

/// The closed set of expression variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(String),
    IntegerLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
    BooleanLiteral(bool),
    NullLiteral,
    /// `_`
    Wildcard,
    /// `(-x)`, `(!ok)`, `(sizeof v)`. The operator is kept as text because `sizeof` is a
    /// keyword, not a registry operator.
    Prefix {
        op: String,
        operand: Option<Box<Expression>>,
    },
    /// `(left op right)` — always parenthesized in the canonical form. The operator is kept
    /// as text because member access spells `.` here, which is punctuation, not a registry
    /// operator.
    Infix {
        op: String,
        left: Option<Box<Expression>>,
        right: Option<Box<Expression>>,
    },
    /// `{ stmt stmt }` — dual-natured: usable in both statement and expression position;
    /// its value is conceptually its final statement.
    Block(Block),
    If {
        condition: Option<Box<Expression>>,
        consequence: Option<Block>,
        alternative: Option<Block>,
    },
    /// Named (`def f(x) = ...`) or anonymous (`def(x) = ...`) function.
    FunctionLiteral(FunctionLiteral),
    Call {
        callee: Box<Expression>,
        args: Vec<Expression>,
    },
    Array(Vec<Expression>),
    /// `(target[index])` — the index may itself be a `Range` (slice).
    Index {
        target: Box<Expression>,
        index: Option<Box<Expression>>,
    },
    /// `start..end` / `start..=end`, either bound optional.
    Range {
        start: Option<Box<Expression>>,
        end: Option<Box<Expression>>,
        inclusive: bool,
    },
    Tuple(Vec<Expression>),
    /// `Name { x: 1 }` or bare `{ x: 1 }`.
    StructLiteral {
        type_name: Option<String>,
        fields: Vec<StructFieldInit>,
    },
    Match {
        scrutinee: Option<Box<Expression>>,
        cases: Vec<MatchCase>,
    },
}

/// An ordered statement sequence between braces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

/// Function shape shared by `def` statements, methods, and anonymous literals.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub name: Option<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeExpression>,
    /// Either a `Block` expression or a single expression body.
    pub body: Option<Box<Expression>>,
}

/// A function parameter: name plus optional `: Type`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: Option<TypeExpression>,
}

/// How an `impl` block binds its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverKind {
    Value,
    Pointer,
    Reference,
}

/// Receiver of an `impl` block, derived from the `*Name` / `&Name` / `Name` spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverInfo {
    pub kind: ReceiverKind,
    pub type_name: String,
}

/// One `name: Type` entry of a `struct` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct StructFieldDef {
    pub name: String,
    pub ty: Option<TypeExpression>,
}

/// One field of a struct literal: `name: value` or `.name = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct StructFieldInit {
    pub name: String,
    pub value: Option<Expression>,
}

/// One `pattern [if guard] => result` case of a `match`.
///
/// Patterns share the expression grammar; there is no separate pattern language.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCase {
    pub pattern: Option<Expression>,
    pub guard: Option<Expression>,
    pub result: Option<Expression>,
}

/// The closed set of type-expression variants.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpression {
    /// A bare type name: primitive or user-defined.
    Named(String),
    /// `[]T`, nestable as `[][]T`.
    Array(Box<TypeExpression>),
    /// `(A, B)`
    Tuple(Vec<TypeExpression>),
    /// `(A, B) -> R`
    Function {
        params: Vec<TypeExpression>,
        ret: Box<TypeExpression>,
    },
    /// `{ field: T, ... }` — field order follows the source.
    Record(Vec<(String, TypeExpression)>),
}

// --- canonical re-serialization ----------------------------------------------

fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(sep)
}

fn opt<T: fmt::Display>(item: &Option<T>) -> String {
    item.as_ref().map(|i| i.to_string()).unwrap_or_default()
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Val(binding) => write_binding(f, "val", binding),
            Statement::Var(binding) => write_binding(f, "var", binding),
            Statement::Return { value } => match value {
                Some(value) => write!(f, "return {value};"),
                None => write!(f, "return;"),
            },
            Statement::Assignment { target, op, value } => {
                write!(f, "{target} {op} {};", opt(value))
            }
            Statement::Expression { expression } => write!(f, "{}", opt(expression)),
            Statement::Function(function) => write!(f, "{function}"),
            Statement::Include { path } => write!(f, "include {path:?}"),
            Statement::TypeAlias { name, ty } => write!(f, "type {name} = {}", opt(ty)),
            Statement::Struct { name, fields } => {
                write!(f, "struct {name} {{ {} }}", join(fields, "; "))
            }
            Statement::Impl { receiver, methods } => {
                write!(f, "impl {receiver} {{ {} }}", join(methods, "; "))
            }
            Statement::Define { name, value } => write!(f, "define {name} {value}"),
            Statement::For {
                variable,
                iterable,
                body,
                uses_in,
            } => {
                let arrow = if *uses_in { "in" } else { "<-" };
                write!(f, "for {variable} {arrow} {} {}", opt(iterable), opt(body))
            }
            Statement::While { condition, body } => {
                write!(f, "while {} {}", opt(condition), opt(body))
            }
            Statement::Defer { expression } => write!(f, "defer {}", opt(expression)),
            Statement::Assert { condition } => write!(f, "assert({})", opt(condition)),
        }
    }
}

fn write_binding(f: &mut fmt::Formatter<'_>, keyword: &str, binding: &Binding) -> fmt::Result {
    write!(f, "{keyword} {}", binding.names.join(", "))?;
    if let Some(ty) = &binding.ty {
        write!(f, ": {ty}")?;
    }
    if let Some(value) = &binding.value {
        write!(f, " = {value}")?;
    }
    write!(f, ";")
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(name) => write!(f, "{name}"),
            Expression::IntegerLiteral(value) => write!(f, "{value}"),
            Expression::FloatLiteral(value) => write!(f, "{value}"),
            Expression::StringLiteral(value) => write!(f, "{value:?}"),
            Expression::BooleanLiteral(value) => write!(f, "{value}"),
            Expression::NullLiteral => write!(f, "null"),
            Expression::Wildcard => write!(f, "_"),
            Expression::Prefix { op, operand } => {
                // Word operators (`sizeof`) need a separating space; symbols do not.
                let sep = if op.ends_with(|c: char| c.is_ascii_alphanumeric()) {
                    " "
                } else {
                    ""
                };
                write!(f, "({op}{sep}{})", opt(operand))
            }
            Expression::Infix { op, left, right } => {
                write!(f, "({} {op} {})", opt(left), opt(right))
            }
            Expression::Block(block) => write!(f, "{block}"),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {} {}", opt(condition), opt(consequence))?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Expression::FunctionLiteral(function) => write!(f, "{function}"),
            Expression::Call { callee, args } => write!(f, "{callee}({})", join(args, ", ")),
            Expression::Array(elements) => write!(f, "[{}]", join(elements, ", ")),
            Expression::Index { target, index } => write!(f, "({target}[{}])", opt(index)),
            Expression::Range { start, end, inclusive } => {
                let op = if *inclusive { "..=" } else { ".." };
                write!(f, "{}{op}{}", opt(start), opt(end))
            }
            Expression::Tuple(elements) => write!(f, "({})", join(elements, ", ")),
            Expression::StructLiteral { type_name, fields } => {
                if let Some(type_name) = type_name {
                    write!(f, "{type_name} ")?;
                }
                if fields.is_empty() {
                    write!(f, "{{}}")
                } else {
                    write!(f, "{{ {} }}", join(fields, ", "))
                }
            }
            Expression::Match { scrutinee, cases } => {
                write!(f, "match {} {{ {} }}", opt(scrutinee), join(cases, "; "))
            }
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            write!(f, "{{}}")
        } else {
            write!(f, "{{ {} }}", join(&self.statements, " "))
        }
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "def")?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        write!(f, "({})", join(&self.parameters, ", "))?;
        if let Some(return_type) = &self.return_type {
            write!(f, ": {return_type}")?;
        }
        write!(f, " = {}", opt(&self.body))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ty {
            Some(ty) => write!(f, "{}: {ty}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl fmt::Display for ReceiverInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            ReceiverKind::Value => "",
            ReceiverKind::Pointer => "*",
            ReceiverKind::Reference => "&",
        };
        write!(f, "{marker}{}", self.type_name)
    }
}

impl fmt::Display for StructFieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, opt(&self.ty))
    }
}

impl fmt::Display for StructFieldInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, opt(&self.value))
    }
}

impl fmt::Display for MatchCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", opt(&self.pattern))?;
        if let Some(guard) = &self.guard {
            write!(f, " if {guard}")?;
        }
        write!(f, " => {}", opt(&self.result))
    }
}

impl fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpression::Named(name) => write!(f, "{name}"),
            TypeExpression::Array(element) => write!(f, "[]{element}"),
            TypeExpression::Tuple(elements) => write!(f, "({})", join(elements, ", ")),
            TypeExpression::Function { params, ret } => {
                write!(f, "({}) -> {ret}", join(params, ", "))
            }
            TypeExpression::Record(fields) => {
                let rendered: Vec<String> =
                    fields.iter().map(|(name, ty)| format!("{name}: {ty}")).collect();
                write!(f, "{{ {} }}", rendered.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infix_always_parenthesized() {
        let expr = Expression::Infix {
            op: "+".to_string(),
            left: Some(Box::new(Expression::IntegerLiteral(1))),
            right: Some(Box::new(Expression::Infix {
                op: "*".to_string(),
                left: Some(Box::new(Expression::IntegerLiteral(2))),
                right: Some(Box::new(Expression::IntegerLiteral(3))),
            })),
        };
        assert_eq!(expr.to_string(), "(1 + (2 * 3))");
    }

    #[test]
    fn test_missing_slots_render_empty() {
        let expr = Expression::Infix {
            op: "+".to_string(),
            left: Some(Box::new(Expression::IntegerLiteral(1))),
            right: None,
        };
        assert_eq!(expr.to_string(), "(1 + )");
    }

    #[test]
    fn test_binding_with_annotation() {
        let statement = Statement::Val(Binding {
            names: vec!["a".to_string(), "b".to_string()],
            ty: Some(TypeExpression::Tuple(vec![
                TypeExpression::Named("int".to_string()),
                TypeExpression::Named("int".to_string()),
            ])),
            value: Some(Expression::Tuple(vec![
                Expression::IntegerLiteral(10),
                Expression::IntegerLiteral(20),
            ])),
        });
        assert_eq!(statement.to_string(), "val a, b: (int, int) = (10, 20);");
    }

    #[test]
    fn test_range_rendering() {
        let range = Expression::Range {
            start: None,
            end: Some(Box::new(Expression::IntegerLiteral(5))),
            inclusive: false,
        };
        assert_eq!(range.to_string(), "..5");

        let range = Expression::Range {
            start: Some(Box::new(Expression::IntegerLiteral(1))),
            end: Some(Box::new(Expression::IntegerLiteral(5))),
            inclusive: true,
        };
        assert_eq!(range.to_string(), "1..=5");
    }

    #[test]
    fn test_function_type_vs_tuple_type() {
        let tuple = TypeExpression::Tuple(vec![
            TypeExpression::Named("int".to_string()),
            TypeExpression::Named("float".to_string()),
        ]);
        assert_eq!(tuple.to_string(), "(int, float)");

        let function = TypeExpression::Function {
            params: vec![TypeExpression::Named("int".to_string())],
            ret: Box::new(TypeExpression::Named("bool".to_string())),
        };
        assert_eq!(function.to_string(), "(int) -> bool");
    }

    #[test]
    fn test_span_merge() {
        assert_eq!(Span::new(3, 7).merge(Span::new(5, 12)), Span::new(3, 12));
    }
}
