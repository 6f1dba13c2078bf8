//! Primitive leaves of an expression: polynomial terms, exponentials and logarithms.
//!
//! Each leaf carries the calculus rule for itself:
//! - `PolyTerm`: power rule, d/dx(a*x^n) = a*n*x^(n-1)
//! - `Exponential`: d/dx(b^x) = b^x * ln(b), e^x being its own derivative
//! - `Logarithm`: d/dx(log_b(x)) = 1 / (x * ln(b))
use crate::symbolic::composite::ChainBuilder;
use crate::symbolic::errors::DomainError;
use crate::symbolic::function::{Differentiable, Function};
use crate::symbolic::operations::Multiplication;
use std::f64::consts::E;

/// A single polynomial term `scalar * x^power`. A term with `power == 0` is a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyTerm {
    pub scalar: f64,
    pub power: f64,
}

impl PolyTerm {
    pub fn new(scalar: f64, power: f64) -> Self {
        Self { scalar, power }
    }

    /// The constant `value`, i.e. `value * x^0`.
    pub fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// The identity function `x`.
    pub fn identity() -> Self {
        Self::new(1.0, 1.0)
    }

    pub fn zero() -> Self {
        Self::constant(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.scalar == 0.0
    }

    pub fn is_constant(&self) -> bool {
        self.power == 0.0
    }
}

impl Differentiable for PolyTerm {
    fn compute(&self, x: f64) -> Result<f64, DomainError> {
        if x == 0.0 && self.power < 0.0 {
            return Err(DomainError::Pole {
                x,
                power: self.power,
            });
        }
        let value = self.scalar * x.powf(self.power);
        if value.is_nan() {
            return Err(DomainError::NotReal { x });
        }
        Ok(value)
    }

    fn differentiate(&self) -> Function {
        if self.is_constant() {
            return PolyTerm::zero().into();
        }
        PolyTerm::new(self.scalar * self.power, self.power - 1.0).into()
    }
}

/// The exponential function `base^x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    pub base: f64,
}

impl Exponential {
    pub fn new(base: f64) -> Self {
        Self { base }
    }

    /// `e^x`
    pub fn natural() -> Self {
        Self::new(E)
    }

    pub fn is_natural(&self) -> bool {
        self.base == E
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Self::natural()
    }
}

impl Differentiable for Exponential {
    fn compute(&self, x: f64) -> Result<f64, DomainError> {
        let value = if self.is_natural() {
            x.exp()
        } else {
            self.base.powf(x)
        };
        if value.is_nan() {
            return Err(DomainError::NotReal { x });
        }
        Ok(value)
    }

    fn differentiate(&self) -> Function {
        if self.is_natural() {
            return (*self).into();
        }
        Multiplication::new(vec![
            (*self).into(),
            PolyTerm::constant(self.base.ln()).into(),
        ])
        .into()
    }
}

/// The logarithm `log_base(x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logarithm {
    pub base: f64,
}

impl Logarithm {
    pub fn new(base: f64) -> Self {
        Self { base }
    }

    /// `ln(x)`
    pub fn natural() -> Self {
        Self::new(E)
    }

    pub fn is_natural(&self) -> bool {
        self.base == E
    }

    fn has_valid_base(&self) -> bool {
        self.base > 0.0 && self.base != 1.0
    }
}

impl Default for Logarithm {
    fn default() -> Self {
        Self::natural()
    }
}

impl Differentiable for Logarithm {
    fn compute(&self, x: f64) -> Result<f64, DomainError> {
        if !self.has_valid_base() {
            return Err(DomainError::InvalidLogBase { base: self.base });
        }
        if !(x > 0.0) {
            return Err(DomainError::NonPositiveLogArgument { x });
        }
        if self.is_natural() {
            Ok(x.ln())
        } else {
            Ok(x.ln() / self.base.ln())
        }
    }

    fn differentiate(&self) -> Function {
        if self.is_natural() {
            return PolyTerm::new(1.0, -1.0).into();
        }
        // (x * ln(base))^-1
        let mut derivative = ChainBuilder::new();
        derivative.append_start(PolyTerm::new(1.0, -1.0).into());
        derivative.append_end(
            Multiplication::new(vec![
                PolyTerm::identity().into(),
                PolyTerm::constant(self.base.ln()).into(),
            ])
            .into(),
        );
        derivative.build().into()
    }
}
