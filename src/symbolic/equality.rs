//! Structural equality across representations.
//!
//! A single-node composite chain and the function it wraps are the same function, so both
//! sides are normalized with [`Function::normalized`] before the variants are compared.
//! The rule applies at every depth of the tree.
use crate::symbolic::composite::CompositeChain;
use crate::symbolic::function::Function;
use crate::symbolic::operations::{Addition, Multiplication, Subtraction};

impl PartialEq for Function {
    fn eq(&self, other: &Function) -> bool {
        match (self.normalized(), other.normalized()) {
            (Function::PolyTerm(a), Function::PolyTerm(b)) => a == b,
            (Function::Exponential(a), Function::Exponential(b)) => a == b,
            (Function::Logarithm(a), Function::Logarithm(b)) => a == b,
            (Function::Addition(a), Function::Addition(b)) => a == b,
            (Function::Multiplication(a), Function::Multiplication(b)) => a == b,
            (Function::Subtraction(a), Function::Subtraction(b)) => a == b,
            (Function::CompositeChain(a), Function::CompositeChain(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Addition {
    fn eq(&self, other: &Addition) -> bool {
        self.operands() == other.operands()
    }
}

impl PartialEq for Multiplication {
    fn eq(&self, other: &Multiplication) -> bool {
        self.operands() == other.operands()
    }
}

impl PartialEq for Subtraction {
    fn eq(&self, other: &Subtraction) -> bool {
        self.minuend() == other.minuend() && self.subtrahend() == other.subtrahend()
    }
}

impl PartialEq for CompositeChain {
    /// Node by node. A single-node chain also equals a chain of one node wrapping the same
    /// function in another single-node chain.
    fn eq(&self, other: &CompositeChain) -> bool {
        match (self.single(), other.single()) {
            (Some(a), Some(b)) => a == b,
            _ => self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b),
        }
    }
}
