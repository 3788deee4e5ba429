use crate::ast::{BoolOperator, CompareOperator, UnaryOperator};
use crate::node::{ExpressionNode, Operand};

use super::value::ValueRenderer;

/// Renders conditions as Go expressions.
///
/// Every boolean operation is wrapped in its own pair of parentheses, so the
/// output keeps the source precedence at any nesting depth. Redundant outer
/// layers are left for [`super::trim_outer_brackets`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpressionRenderer {
    values: ValueRenderer,
}

impl ExpressionRenderer {
    pub fn new(values: ValueRenderer) -> Self {
        Self { values }
    }

    pub fn render(&self, node: &ExpressionNode) -> String {
        match node {
            ExpressionNode::NameRef(name) => name.clone(),
            ExpressionNode::Literal(scalar) => self.values.render_scalar(scalar),
            ExpressionNode::UnaryOp { op, operand } => {
                format!("{}{}", unary_token(*op), self.render_operand(operand))
            }
            ExpressionNode::Compare { left, op, right } => format!(
                "{} {} {}",
                self.render_operand(left),
                compare_token(*op),
                self.render_operand(right)
            ),
            ExpressionNode::BoolOp { op, left, right } => format!(
                "({} {} {})",
                self.render(left),
                bool_token(*op),
                self.render(right)
            ),
        }
    }

    fn render_operand(&self, operand: &Operand) -> String {
        match operand {
            Operand::Name(name) => name.clone(),
            Operand::Literal(scalar) => self.values.render_scalar(scalar),
        }
    }
}

fn unary_token(op: UnaryOperator) -> &'static str {
    match op {
        UnaryOperator::Not => "!",
        UnaryOperator::Plus => "+",
        UnaryOperator::Minus => "-",
    }
}

fn compare_token(op: CompareOperator) -> &'static str {
    match op {
        CompareOperator::Greater => ">",
        CompareOperator::GreaterEqual => ">=",
        CompareOperator::Less => "<",
        CompareOperator::LessEqual => "<=",
        CompareOperator::Equal => "==",
        CompareOperator::NotEqual => "!=",
    }
}

fn bool_token(op: BoolOperator) -> &'static str {
    match op {
        BoolOperator::And => "&&",
        BoolOperator::Or => "||",
    }
}

pub fn render_expression(node: &ExpressionNode) -> String {
    ExpressionRenderer::default().render(node)
}
