//! Primitive type-name vocabulary.
//!
//! Sango reserves its primitive type names at the lexical level: `int` is a distinct token
//! kind, not an identifier. The parser still treats these tokens as ordinary named types; the
//! separate kind exists so the lexer's keyword classification stays table-driven.

/// Stable identifier for every primitive type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveId {
    Int,
    Long,
    Float,
    Double,
    Bool,
    String,
    Void,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Byte,
}

/// Metadata for a primitive type name.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub id: PrimitiveId,
    pub spelling: &'static str,
}

/// Registry of all primitive type names.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    prim(PrimitiveId::Int, "int"),
    prim(PrimitiveId::Long, "long"),
    prim(PrimitiveId::Float, "float"),
    prim(PrimitiveId::Double, "double"),
    prim(PrimitiveId::Bool, "bool"),
    prim(PrimitiveId::String, "string"),
    prim(PrimitiveId::Void, "void"),
    prim(PrimitiveId::I8, "i8"),
    prim(PrimitiveId::I16, "i16"),
    prim(PrimitiveId::I32, "i32"),
    prim(PrimitiveId::I64, "i64"),
    prim(PrimitiveId::U8, "u8"),
    prim(PrimitiveId::U16, "u16"),
    prim(PrimitiveId::U32, "u32"),
    prim(PrimitiveId::U64, "u64"),
    prim(PrimitiveId::F32, "f32"),
    prim(PrimitiveId::F64, "f64"),
    prim(PrimitiveId::Byte, "byte"),
];

/// Look up the metadata for a primitive id.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveId) -> &'static PrimitiveInfo {
    PRIMITIVES.iter().find(|p| p.id == id).expect("primitive info missing")
}

/// Resolve a primitive type spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<PrimitiveId> {
    PRIMITIVES.iter().find(|p| p.spelling == spelling).map(|p| p.id)
}

/// Return the canonical spelling of a primitive type.
pub fn as_str(id: PrimitiveId) -> &'static str {
    info_for(id).spelling
}

const fn prim(id: PrimitiveId, spelling: &'static str) -> PrimitiveInfo {
    PrimitiveInfo { id, spelling }
}
