//! C-type → Sango-type spelling map.

/// Fixed mapping from C type spellings to Sango type spellings.
pub const TYPE_MAPPING: &[(&str, &str)] = &[
    // Basic integer types
    ("int", "int"),
    ("long", "long"),
    ("short", "i16"),
    ("char", "i8"),
    ("unsigned int", "u32"),
    ("unsigned long", "u64"),
    ("unsigned char", "u8"),
    ("size_t", "u64"),
    // Floating point types
    ("float", "float"),
    ("double", "double"),
    // Pointer types
    ("*void", "*void"),
    // C strings
    ("*char", "*u8"),
    ("*int", "*int"),
    ("*float", "*float"),
    ("*double", "*double"),
    // FILE is an opaque pointer
    ("*FILE", "*void"),
    // Special types
    ("void", "void"),
    ("bool", "bool"),
];

/// Map a C type spelling to its Sango equivalent.
///
/// Unrecognized spellings pass through unchanged; this is the extension point for
/// user-defined foreign types.
pub fn map_c_type(c_type: &str) -> &str {
    TYPE_MAPPING
        .iter()
        .find(|(c, _)| *c == c_type)
        .map(|(_, sango)| *sango)
        .unwrap_or(c_type)
}
