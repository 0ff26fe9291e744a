//! Case-conversion filters available inside templates.
//!
//! Declaration templates derive identifiers from variables (a record name
//! from a module name, a file stem from a type name), so the engine exposes
//! the usual case conversions, backed by `heck`.

use std::collections::HashMap;

use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use tera::{Tera, Value};

/// Register every case filter on the given Tera instance.
pub(crate) fn register(tera: &mut Tera) {
    tera.register_filter("snake_case", snake_case);
    tera.register_filter("pascal_case", pascal_case);
    tera.register_filter("camel_case", camel_case);
    tera.register_filter("kebab_case", kebab_case);
}

fn str_input<'a>(value: &'a Value, filter: &str) -> tera::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{filter} filter expects a string")))
}

fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(str_input(value, "snake_case")?.to_snake_case()))
}

fn pascal_case(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(
        str_input(value, "pascal_case")?.to_pascal_case(),
    ))
}

fn camel_case(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(
        str_input(value, "camel_case")?.to_lower_camel_case(),
    ))
}

fn kebab_case(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(str_input(value, "kebab_case")?.to_kebab_case()))
}
