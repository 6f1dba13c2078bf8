//! Human-readable rendering of functions.
//!
//! The output is meant for printing and for checking results, it is not parsed back.
//! - a zero scalar renders as `0`, a scalar or power of exactly 1 is elided (`x`, not `1x^1`)
//! - integral numbers render without a decimal point
//! - sums and products are parenthesized only when they have more than one operand
//! - a negative operand of a sum is joined with ` - ` instead of ` + `
//! - a composite chain substitutes `x` in each outer function with the inner one
use crate::symbolic::composite::CompositeChain;
use crate::symbolic::function::Function;
use crate::symbolic::operations::{Addition, Multiplication, Subtraction};
use crate::symbolic::primitives::{Exponential, Logarithm, PolyTerm};
use itertools::Itertools;
use std::fmt;

/// Shortest representation of `value`: `2` instead of `2.0`, `0` for both zeros.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

impl fmt::Display for PolyTerm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.is_constant() {
            return write!(f, "{}", format_number(self.scalar));
        }
        let coefficient = if self.scalar == 1.0 {
            String::new()
        } else if self.scalar == -1.0 {
            "-".to_string()
        } else {
            format_number(self.scalar)
        };
        if self.power == 1.0 {
            write!(f, "{}x", coefficient)
        } else {
            write!(f, "{}x^{}", coefficient, format_number(self.power))
        }
    }
}

impl fmt::Display for Exponential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_natural() {
            write!(f, "e^x")
        } else {
            write!(f, "{}^x", format_number(self.base))
        }
    }
}

impl fmt::Display for Logarithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_natural() {
            write!(f, "ln(x)")
        } else {
            write!(f, "log{}(x)", format_number(self.base))
        }
    }
}

impl fmt::Display for Addition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut terms = self.operands().iter().map(ToString::to_string);
        let Some(first) = terms.next() else {
            return write!(f, "0");
        };
        let mut rendered = first;
        for term in terms {
            match term.strip_prefix('-') {
                Some(negated) => {
                    rendered.push_str(" - ");
                    rendered.push_str(negated);
                }
                None => {
                    rendered.push_str(" + ");
                    rendered.push_str(&term);
                }
            }
        }
        if self.len() > 1 {
            write!(f, "({})", rendered)
        } else {
            write!(f, "{}", rendered)
        }
    }
}

impl fmt::Display for Multiplication {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered = self.operands().iter().join(" * ");
        if self.len() > 1 {
            write!(f, "({})", rendered)
        } else {
            write!(f, "{}", rendered)
        }
    }
}

impl fmt::Display for Subtraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} - {})", self.minuend(), self.subtrahend())
    }
}

impl fmt::Display for CompositeChain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "x");
        }
        let mut message = String::from("x");
        for func in self.iter() {
            message = message.replace('x', &format!("({})", func));
        }
        // drop the parentheses around the outermost function
        let stripped = message
            .strip_prefix('(')
            .and_then(|m| m.strip_suffix(')'))
            .unwrap_or(&message);
        write!(f, "{}", stripped)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Function::PolyTerm(inner) => inner.fmt(f),
            Function::Exponential(inner) => inner.fmt(f),
            Function::Logarithm(inner) => inner.fmt(f),
            Function::Addition(inner) => inner.fmt(f),
            Function::Multiplication(inner) => inner.fmt(f),
            Function::Subtraction(inner) => inner.fmt(f),
            Function::CompositeChain(inner) => inner.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::function::Differentiable;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.50), "2.5");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_poly_term_rendering() {
        assert_eq!(PolyTerm::new(0.0, 5.0).to_string(), "0");
        assert_eq!(PolyTerm::new(1.0, 1.0).to_string(), "x");
        assert_eq!(PolyTerm::new(2.5, 2.0).to_string(), "2.5x^2");
        assert_eq!(PolyTerm::new(3.0, 0.0).to_string(), "3");
        assert_eq!(PolyTerm::new(-1.0, 2.0).to_string(), "-x^2");
        assert_eq!(PolyTerm::new(1.0, -1.0).to_string(), "x^-1");
        assert_eq!(PolyTerm::new(4.0, 0.5).to_string(), "4x^0.5");
    }

    #[test]
    fn test_leaf_rendering() {
        assert_eq!(Exponential::natural().to_string(), "e^x");
        assert_eq!(Exponential::new(2.0).to_string(), "2^x");
        assert_eq!(Logarithm::natural().to_string(), "ln(x)");
        assert_eq!(Logarithm::new(10.0).to_string(), "log10(x)");
        assert_eq!(Logarithm::new(2.5).to_string(), "log2.5(x)");
    }

    #[test]
    fn test_addition_rendering() {
        let sum = Addition::new(vec![
            PolyTerm::new(1.0, 2.0).into(),
            PolyTerm::new(3.0, 1.0).into(),
        ]);
        assert_eq!(sum.to_string(), "(3x + x^2)");
        let with_negative = Addition::new(vec![
            PolyTerm::new(1.0, 1.0).into(),
            PolyTerm::new(-2.0, 3.0).into(),
        ]);
        assert_eq!(with_negative.to_string(), "(x - 2x^3)");
        assert_eq!(Addition::new(vec![PolyTerm::new(1.0, 2.0).into()]).to_string(), "x^2");
        assert_eq!(Addition::new(vec![]).to_string(), "0");
    }

    #[test]
    fn test_product_and_difference_rendering() {
        let product = Multiplication::new(vec![
            PolyTerm::new(1.0, 2.0).into(),
            Exponential::natural().into(),
        ]);
        assert_eq!(product.to_string(), "(x^2 * e^x)");
        let difference = Subtraction::new(Logarithm::natural().into(), PolyTerm::constant(1.0).into());
        assert_eq!(difference.to_string(), "(ln(x) - 1)");
    }

    #[test]
    fn test_chain_rendering_substitutes_inner_functions() {
        let chain: CompositeChain = vec![
            Function::from(Exponential::natural()),
            PolyTerm::new(2.0, 1.0).into(),
        ]
        .into_iter()
        .collect();
        assert_eq!(chain.to_string(), "e^(2x)");
        assert_eq!(CompositeChain::new().to_string(), "x");
        assert_eq!(
            CompositeChain::single_node(Logarithm::natural().into()).to_string(),
            "ln(x)"
        );
    }

    #[test]
    fn test_logarithm_derivative_rendering() {
        let derivative = Logarithm::new(10.0).differentiate();
        assert_eq!(
            derivative.to_string(),
            format!("((x * {}))^-1", 10.0f64.ln())
        );
    }

    #[test]
    fn test_product_rule_rendering_is_deterministic() {
        let product: Function = Multiplication::new(vec![
            PolyTerm::new(1.0, 2.0).into(),
            Exponential::natural().into(),
        ])
        .into();
        let first = product.differentiate().to_string();
        let second = product.differentiate().to_string();
        assert_eq!(first, second);
        assert_eq!(first, "((2x * e^x) + (e^x * x^2))");
    }
}
