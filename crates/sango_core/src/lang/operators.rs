//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with basic metadata: precedence,
//! associativity, and whether the operator belongs to the assignment family.
//!
//! ## Notes
//! - Lookup via [`from_str`] is case-sensitive.
//! - The [`precedence`] scale is shared with the parser; higher binds tighter. Operators that
//!   never appear in infix position (e.g. `!`, `~`, `->`) carry [`precedence::LOWEST`] so the
//!   Pratt loop never treats them as continuations.
//!
//! ## Examples
//! ```rust
//! use sango_core::lang::operators::{self, precedence, OperatorId};
//!
//! assert_eq!(operators::from_str("**"), Some(OperatorId::StarStar));
//! assert_eq!(operators::info_for(OperatorId::StarStar).precedence, precedence::POWER);
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// The shared binding-strength scale, lowest to highest.
///
/// The parser uses these values directly as the `min_precedence` argument of its Pratt loop;
/// [`PREFIX`], [`CALL`], and [`DOT`] belong to token kinds that are not operators (unary
/// position, `(`/`[`/`{` postfix, `.` access) but occupy slots on the same scale.
pub mod precedence {
    pub const LOWEST: u8 = 0;
    pub const ASSIGN: u8 = 10;
    pub const OR: u8 = 20;
    pub const AND: u8 = 30;
    pub const BIT_OR: u8 = 40;
    pub const BIT_XOR: u8 = 50;
    pub const BIT_AND: u8 = 60;
    pub const EQUALITY: u8 = 70;
    pub const RELATIONAL: u8 = 80;
    pub const SHIFT: u8 = 90;
    pub const SUM: u8 = 100;
    pub const PRODUCT: u8 = 110;
    pub const POWER: u8 = 120;
    pub const PREFIX: u8 = 130;
    pub const CALL: u8 = 140;
    pub const DOT: u8 = 150;
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    StarStar,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Assignment family
    Assign,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,
    AmpAssign,
    PipeAssign,
    CaretAssign,
    ShlAssign,
    ShrAssign,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,

    // Logical
    AndAnd,
    OrOr,
    Bang,

    // Arrows
    Arrow,
    FatArrow,
    LArrow,

    // Ranges
    DotDot,
    DotDotEq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    /// `true` for `=` and every compound-assignment operator. The parser treats these as
    /// statement-level constructs, never as expression infix operators.
    pub is_assignment: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", precedence::SUM, Associativity::Left, false),
    op(OperatorId::Minus, "-", precedence::SUM, Associativity::Left, false),
    op(OperatorId::Star, "*", precedence::PRODUCT, Associativity::Left, false),
    op(OperatorId::Slash, "/", precedence::PRODUCT, Associativity::Left, false),
    op(OperatorId::Percent, "%", precedence::PRODUCT, Associativity::Left, false),
    op(OperatorId::StarStar, "**", precedence::POWER, Associativity::Right, false),
    // Comparison
    op(OperatorId::EqEq, "==", precedence::EQUALITY, Associativity::Left, false),
    op(OperatorId::NotEq, "!=", precedence::EQUALITY, Associativity::Left, false),
    op(OperatorId::Lt, "<", precedence::RELATIONAL, Associativity::Left, false),
    op(OperatorId::Gt, ">", precedence::RELATIONAL, Associativity::Left, false),
    op(OperatorId::LtEq, "<=", precedence::RELATIONAL, Associativity::Left, false),
    op(OperatorId::GtEq, ">=", precedence::RELATIONAL, Associativity::Left, false),
    // Assignment family
    op(OperatorId::Assign, "=", precedence::ASSIGN, Associativity::Right, true),
    op(OperatorId::PlusAssign, "+=", precedence::ASSIGN, Associativity::Right, true),
    op(OperatorId::MinusAssign, "-=", precedence::ASSIGN, Associativity::Right, true),
    op(OperatorId::StarAssign, "*=", precedence::ASSIGN, Associativity::Right, true),
    op(OperatorId::SlashAssign, "/=", precedence::ASSIGN, Associativity::Right, true),
    op(OperatorId::PercentAssign, "%=", precedence::ASSIGN, Associativity::Right, true),
    op(OperatorId::AmpAssign, "&=", precedence::ASSIGN, Associativity::Right, true),
    op(OperatorId::PipeAssign, "|=", precedence::ASSIGN, Associativity::Right, true),
    op(OperatorId::CaretAssign, "^=", precedence::ASSIGN, Associativity::Right, true),
    op(OperatorId::ShlAssign, "<<=", precedence::ASSIGN, Associativity::Right, true),
    op(OperatorId::ShrAssign, ">>=", precedence::ASSIGN, Associativity::Right, true),
    // Bitwise
    op(OperatorId::Amp, "&", precedence::BIT_AND, Associativity::Left, false),
    op(OperatorId::Pipe, "|", precedence::BIT_OR, Associativity::Left, false),
    op(OperatorId::Caret, "^", precedence::BIT_XOR, Associativity::Left, false),
    op(OperatorId::Tilde, "~", precedence::LOWEST, Associativity::None, false),
    op(OperatorId::Shl, "<<", precedence::SHIFT, Associativity::Left, false),
    op(OperatorId::Shr, ">>", precedence::SHIFT, Associativity::Left, false),
    // Logical
    op(OperatorId::AndAnd, "&&", precedence::AND, Associativity::Left, false),
    op(OperatorId::OrOr, "||", precedence::OR, Associativity::Left, false),
    op(OperatorId::Bang, "!", precedence::LOWEST, Associativity::None, false),
    // Arrows
    op(OperatorId::Arrow, "->", precedence::LOWEST, Associativity::None, false),
    op(OperatorId::FatArrow, "=>", precedence::LOWEST, Associativity::None, false),
    op(OperatorId::LArrow, "<-", precedence::LOWEST, Associativity::None, false),
    // Ranges
    op(OperatorId::DotDot, "..", precedence::RELATIONAL, Associativity::Left, false),
    op(OperatorId::DotDotEq, "..=", precedence::RELATIONAL, Associativity::Left, false),
];

/// Look up the metadata for an operator id.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`], `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Return the canonical spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return `true` if `id` is `=` or a compound-assignment operator.
pub fn is_assignment(id: OperatorId) -> bool {
    info_for(id).is_assignment
}

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    is_assignment: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        is_assignment,
    }
}
