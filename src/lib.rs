pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod token;
pub mod transpiler;
pub mod types;
pub mod value;

pub use crate::config::{TranspilerConfig, UnsupportedPolicy};
pub use crate::error::{Error, UnsupportedError};
pub use crate::transpiler::{
    Transpiler, render_assignment, render_conditional_header, render_expression, render_value,
    trim_outer_brackets, trim_outer_brackets_quoted,
};

/// Parses `source` and translates every top-level statement into Go.
pub fn translate(source: &str, config: &TranspilerConfig) -> Result<String, Error> {
    let program = parser::parse(source)?;
    Transpiler::new(config.clone()).transpile(&program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_source_text() {
        let output = translate("if a > b and b > 0:\n    pass\n", &TranspilerConfig::default())
            .expect("translate failed");
        assert_eq!(output, "if (a > b && b > 0) {}");
    }

    #[test]
    fn surfaces_frontend_errors() {
        let err = translate("x = 1 @ 2\n", &TranspilerConfig::default())
            .expect_err("expected failure");
        assert!(matches!(err, Error::Frontend(_)));
        assert!(err.to_string().contains("Unexpected character '@'"));
    }
}
