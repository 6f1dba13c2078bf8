//! # Function capability
//!
//! Every node of an expression implements [`Differentiable`]: it can be evaluated at a
//! point and it can produce its own analytical derivative as a new [`Function`].
//!
//! `Function` is a closed sum type over all node variants. Dispatch of the trait methods
//! over the variants is generated by `enum_dispatch`, so `f.compute(x)` on a `Function`
//! forwards to the variant without a hand-written match.
//!
//! ## Building expressions
//! Leaves and combinators are built bottom-up, either with the constructors of each variant
//! or with the overloaded operators:
//! ```rust, ignore
//! let f = Function::from(PolyTerm::new(1.0, 2.0)) * Exponential::natural().into(); // x^2 * e^x
//! let df = f.differentiate();
//! ```
use crate::symbolic::composite::{ChainBuilder, CompositeChain};
use crate::symbolic::errors::DomainError;
use crate::symbolic::operations::{Addition, Multiplication, Subtraction};
use crate::symbolic::primitives::{Exponential, Logarithm, PolyTerm};
use enum_dispatch::enum_dispatch;
use strum_macros::{Display, EnumIter};

/// The contract every node of an expression tree implements.
#[enum_dispatch]
pub trait Differentiable {
    /// Evaluates the function at `x`.
    fn compute(&self, x: f64) -> Result<f64, DomainError>;
    /// Returns the analytical derivative. Never evaluates, never fails.
    fn differentiate(&self) -> Function;
}

/// A single-variable real function, represented as a tree of nodes.
///
/// Every variant is immutable once constructed: differentiation and composition always
/// produce new values.
#[enum_dispatch(Differentiable)]
#[derive(Debug, Clone)]
pub enum Function {
    /// `scalar * x^power`
    PolyTerm(PolyTerm),
    /// `base^x`
    Exponential(Exponential),
    /// `log_base(x)`
    Logarithm(Logarithm),
    /// sum of any number of operands
    Addition(Addition),
    /// product of one or more operands
    Multiplication(Multiplication),
    /// `fx - gx`
    Subtraction(Subtraction),
    /// nested application `f1(f2(...fn(x)))`
    CompositeChain(CompositeChain),
}

/// Variant tag of a [`Function`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum FunctionKind {
    PolyTerm,
    Exponential,
    Logarithm,
    Addition,
    Multiplication,
    Subtraction,
    CompositeChain,
}

impl Function {
    pub fn kind(&self) -> FunctionKind {
        match self {
            Function::PolyTerm(_) => FunctionKind::PolyTerm,
            Function::Exponential(_) => FunctionKind::Exponential,
            Function::Logarithm(_) => FunctionKind::Logarithm,
            Function::Addition(_) => FunctionKind::Addition,
            Function::Multiplication(_) => FunctionKind::Multiplication,
            Function::Subtraction(_) => FunctionKind::Subtraction,
            Function::CompositeChain(_) => FunctionKind::CompositeChain,
        }
    }

    /// Looks through single-node composite chains and returns the function they wrap.
    ///
    /// `CompositeChain[f]` and `f` denote the same function; equality and canonical
    /// ordering both compare the normalized forms.
    pub fn normalized(&self) -> &Function {
        let mut current = self;
        while let Function::CompositeChain(chain) = current {
            match chain.single() {
                Some(inner) => current = inner,
                None => break,
            }
        }
        current
    }

    /// Composition `outer(inner(x))`.
    ///
    /// Nodes of chains on either side are spliced in, so composing chains never nests
    /// one chain inside another.
    pub fn compose(outer: Function, inner: Function) -> Function {
        let mut builder = ChainBuilder::new();
        for f in [outer, inner] {
            match f {
                Function::CompositeChain(chain) => {
                    for node in chain.iter() {
                        builder.append_end(node.clone());
                    }
                }
                other => {
                    builder.append_end(other);
                }
            }
        }
        Function::CompositeChain(builder.build())
    }

    pub fn as_poly_term(&self) -> Option<&PolyTerm> {
        match self.normalized() {
            Function::PolyTerm(term) => Some(term),
            _ => None,
        }
    }

    /// True when the function is the literal zero constant.
    pub fn is_zero(&self) -> bool {
        self.as_poly_term().is_some_and(PolyTerm::is_zero)
    }
}

//___________________________________OPERATORS____________________________________

impl std::ops::Add for Function {
    type Output = Function;

    fn add(self, rhs: Function) -> Function {
        Function::Addition(Addition::new(vec![self, rhs]))
    }
}

impl std::ops::Sub for Function {
    type Output = Function;

    fn sub(self, rhs: Function) -> Function {
        Function::Subtraction(Subtraction::new(self, rhs))
    }
}

impl std::ops::Mul for Function {
    type Output = Function;

    fn mul(self, rhs: Function) -> Function {
        Function::Multiplication(Multiplication::new(vec![self, rhs]))
    }
}

impl std::ops::Neg for Function {
    type Output = Function;

    fn neg(self) -> Function {
        Function::Multiplication(Multiplication::new(vec![
            PolyTerm::constant(-1.0).into(),
            self,
        ]))
    }
}
