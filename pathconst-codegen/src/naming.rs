//! C#-specific naming and literal rules.

use pathconst_core::sanitize_identifier;

/// C# reserved keywords. Contextual keywords (`var`, `async`, ...) are legal
/// member names and are not listed.
pub const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a C# reserved keyword.
pub fn is_reserved(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Derive the member name for a file path.
///
/// Starts from [`sanitize_identifier`], then prefixes `_` when the result is
/// empty or starts with a digit, and `@` when it is a keyword
/// (e.g., "class" -> "@class", "1.png" -> "_1_png").
pub fn member_name(path: &str) -> String {
    let name = sanitize_identifier(path);
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", name)
    } else if is_reserved(&name) {
        format!("@{}", name)
    } else {
        name
    }
}

/// Escape a string for use inside a C# regular (`"..."`) string literal.
pub fn escape_string_literal(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            _ => escaped.push(c),
        }
    }
    escaped
}
