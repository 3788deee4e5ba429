use tracing::{debug, warn};

use crate::ast::{Program, Statement};
use crate::config::{TranspilerConfig, UnsupportedPolicy};
use crate::error::{Error, UnsupportedError};
use crate::node::{Assignment, ConditionalHeader};

pub use self::brackets::{trim_outer_brackets, trim_outer_brackets_quoted};
pub use self::expression::{ExpressionRenderer, render_expression};
pub use self::value::{ValueRenderer, render_value};

mod brackets;
mod expression;
mod value;

/// Renders each binding as a short variable declaration, one per line.
pub fn render_assignment(assignment: &Assignment) -> String {
    Transpiler::default().render_assignment(assignment)
}

/// Renders an `if` header with an empty body.
pub fn render_conditional_header(header: &ConditionalHeader) -> String {
    Transpiler::default().render_conditional_header(header)
}

/// Translates whole programs statement by statement.
#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    config: TranspilerConfig,
    values: ValueRenderer,
}

impl Transpiler {
    pub fn new(config: TranspilerConfig) -> Self {
        let values = ValueRenderer::new(config.escape_strings);
        Self { config, values }
    }

    pub fn transpile(&self, program: &Program) -> Result<String, Error> {
        let mut output = String::new();

        for (index, statement) in program.statements.iter().enumerate() {
            // Reported positions are 1-based
            let index = index + 1;
            debug!(index, kind = statement.kind_name(), "translating statement");

            match self.transpile_statement(statement) {
                Ok(Some(rendered)) => {
                    if !output.is_empty() {
                        output.push('\n');
                    }
                    output.push_str(&rendered);
                }
                Ok(None) => {}
                Err(source) => match self.config.unsupported {
                    UnsupportedPolicy::Reject => {
                        return Err(Error::Unsupported { index, source });
                    }
                    UnsupportedPolicy::Skip => {
                        warn!(index, error = %source, "skipping unsupported statement");
                    }
                },
            }
        }

        Ok(output)
    }

    /// `Ok(None)` for statements with no Go counterpart, such as `pass`.
    pub fn transpile_statement(
        &self,
        statement: &Statement,
    ) -> Result<Option<String>, UnsupportedError> {
        match statement {
            Statement::Assign { .. } | Statement::AnnAssign { .. } => {
                let assignment = Assignment::try_from(statement)?;
                Ok(Some(self.render_assignment(&assignment)))
            }
            Statement::If { .. } => {
                let header = ConditionalHeader::try_from(statement)?;
                Ok(Some(self.render_conditional_header(&header)))
            }
            Statement::Pass => Ok(None),
            Statement::Expr(_) | Statement::Unsupported { .. } => {
                Err(UnsupportedError::Statement {
                    kind: statement.kind_name(),
                })
            }
        }
    }

    pub fn render_assignment(&self, assignment: &Assignment) -> String {
        assignment
            .bindings
            .iter()
            .map(|(name, value)| format!("{name} := {}", self.values.render(value)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_conditional_header(&self, header: &ConditionalHeader) -> String {
        let condition = ExpressionRenderer::new(self.values).render(&header.test);
        // Quotes only delimit strings reliably once literals are escaped
        let condition = if self.config.escape_strings {
            trim_outer_brackets_quoted(&condition)
        } else {
            trim_outer_brackets(&condition)
        };
        format!("if ({condition}) {{}}")
    }
}
