//! Identifier and literal helpers for generated Go code.

use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

/// Converts a wire key to an exported Go identifier.
///
/// ## Examples
///
/// ```
/// use framegen_gen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("bool_attribute"), "BoolAttribute");
/// assert_eq!(to_pascal_case("list_nested_attribute_three"), "ListNestedAttributeThree");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    name.to_upper_camel_case()
}

/// Converts a wire key to an unexported Go identifier, e.g. for locals.
pub fn to_camel_case(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Converts a name to the snake case used in package and file names.
pub fn to_snake_case(name: &str) -> String {
    name.to_snake_case()
}

/// Quotes `value` as an interpreted Go string literal.
///
/// ## Examples
///
/// ```
/// use framegen_gen::naming::quote_go_string;
///
/// assert_eq!(quote_go_string("plain"), "\"plain\"");
/// assert_eq!(quote_go_string("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// ```
pub fn quote_go_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
