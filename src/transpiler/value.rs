use crate::types::infer_collection_type;
use crate::value::{RuntimeValue, Scalar};

/// Renders literal values as Go literals.
///
/// String contents are emitted verbatim unless `escape_strings` is set, in
/// which case quotes, backslashes and control characters are escaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueRenderer {
    escape_strings: bool,
}

impl ValueRenderer {
    pub fn new(escape_strings: bool) -> Self {
        Self { escape_strings }
    }

    pub fn render(&self, value: &RuntimeValue) -> String {
        match value {
            RuntimeValue::Bool(value) => render_bool(*value).to_string(),
            RuntimeValue::Int(value) => value.to_string(),
            RuntimeValue::Float(value) => render_float(*value),
            RuntimeValue::Str(value) => self.render_string(value),
            RuntimeValue::Nil => "nil".to_string(),
            RuntimeValue::Sequence(items) => {
                let element_type = infer_collection_type(items);
                let rendered = items
                    .iter()
                    .map(|item| self.render(item))
                    .collect::<Vec<_>>();
                format!("[]{element_type}{{{}}}", rendered.join(", "))
            }
            RuntimeValue::Mapping(entries) => {
                let key_type = infer_collection_type(entries.iter().map(|(key, _)| key));
                let value_type = infer_collection_type(entries.iter().map(|(_, value)| value));
                let rendered = entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", self.render(key), self.render(value)))
                    .collect::<Vec<_>>();
                format!("map[{key_type}]{value_type}{{{}}}", rendered.join(", "))
            }
        }
    }

    pub fn render_scalar(&self, scalar: &Scalar) -> String {
        match scalar {
            Scalar::Bool(value) => render_bool(*value).to_string(),
            Scalar::Int(value) => value.to_string(),
            Scalar::Float(value) => render_float(*value),
            Scalar::Str(value) => self.render_string(value),
            Scalar::Nil => "nil".to_string(),
        }
    }

    fn render_string(&self, value: &str) -> String {
        if !self.escape_strings {
            return format!("\"{value}\"");
        }
        let mut rendered = String::with_capacity(value.len() + 2);
        rendered.push('"');
        for c in value.chars() {
            match c {
                '"' => rendered.push_str("\\\""),
                '\\' => rendered.push_str("\\\\"),
                '\n' => rendered.push_str("\\n"),
                '\r' => rendered.push_str("\\r"),
                '\t' => rendered.push_str("\\t"),
                c if c.is_ascii_control() => {
                    rendered.push_str(&format!("\\x{:02x}", c as u32));
                }
                c => rendered.push(c),
            }
        }
        rendered.push('"');
        rendered
    }
}

fn render_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Shortest text that reads back as the same float and still looks like one
/// (`1.0`, not `1`).
fn render_float(value: f64) -> String {
    if value.is_nan() {
        "math.NaN()".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { 1 } else { -1 };
        format!("math.Inf({sign})")
    } else {
        format!("{value:?}")
    }
}

/// Renders `value` with the default (verbatim string) settings.
pub fn render_value(value: &RuntimeValue) -> String {
    ValueRenderer::default().render(value)
}
