//! # Analysis on top of the symbolic engine
//!
//! Extends [`Function`] with the tools that make derivatives useful in practice:
//! - `nth_derivative(n)` - repeated differentiation
//! - `evaluate_many()`, `compute_on_linspace()` - evaluation over a grid of points, in
//!   parallel above a configurable size
//! - `compute_par()` - evaluation that fans sibling operands of sums, products and
//!   differences out on the rayon thread pool
//! - `compare_num()` - validation of the analytical derivative against a central finite
//!   difference
//! - `taylor_polynomial()` - Taylor expansion around a point, built from polynomial terms
//!   and composite chains
use crate::Utils::settings::{EvalSettings, ValidationSettings};
use crate::symbolic::errors::DomainError;
use crate::symbolic::function::{Differentiable, Function};
use crate::symbolic::operations::Addition;
use crate::symbolic::primitives::PolyTerm;
use crate::symbolic::utils::{linspace, norm, try_numerical_derivative};
use log::{debug, info, warn};
use rayon::prelude::*;

impl Function {
    /// Differentiates `n` times; `n == 0` returns a copy of the function.
    pub fn nth_derivative(&self, n: usize) -> Function {
        debug!("computing derivative of order {} of {}", n, self);
        (0..n).fold(self.clone(), |f, _| f.differentiate())
    }

    /// Evaluates the function like `compute`, evaluating the operands of sums, products and
    /// differences concurrently. Evaluation only reads the tree, so no locking is needed.
    pub fn compute_par(&self, x: f64) -> Result<f64, DomainError> {
        match self {
            Function::Addition(sum) => sum
                .operands()
                .par_iter()
                .map(|f| f.compute_par(x))
                .try_reduce(|| 0.0, |a, b| Ok(a + b)),
            Function::Multiplication(product) => product
                .operands()
                .par_iter()
                .map(|f| f.compute_par(x))
                .try_reduce(|| 1.0, |a, b| Ok(a * b)),
            Function::Subtraction(difference) => {
                let (fx, gx) = rayon::join(
                    || difference.minuend().compute_par(x),
                    || difference.subtrahend().compute_par(x),
                );
                Ok(fx? - gx?)
            }
            other => other.compute(x),
        }
    }

    /// Evaluates the function at every point of `xs`, in parallel once there are at least
    /// `settings.parallel_threshold` points.
    pub fn evaluate_many(
        &self,
        xs: &[f64],
        settings: &EvalSettings,
    ) -> Result<Vec<f64>, DomainError> {
        if xs.len() >= settings.parallel_threshold {
            xs.par_iter().map(|&x| self.compute(x)).collect()
        } else {
            xs.iter().map(|&x| self.compute(x)).collect()
        }
    }

    /// Evaluates the function on `num_values` evenly spaced points from `start` to `end`.
    pub fn compute_on_linspace(
        &self,
        start: f64,
        end: f64,
        num_values: usize,
        settings: &EvalSettings,
    ) -> Result<Vec<f64>, DomainError> {
        self.evaluate_many(&linspace(start, end, num_values), settings)
    }

    /// Compares the analytical derivative with a central finite difference on
    /// `settings.samples` points between `start` and `end`.
    ///
    /// # Returns
    /// `(norm, passed)`: the scaled norm of the difference between both derivatives, and
    /// whether it is below `settings.tolerance`.
    pub fn compare_num(
        &self,
        start: f64,
        end: f64,
        settings: &ValidationSettings,
    ) -> Result<(f64, bool), DomainError> {
        let domain = linspace(start, end, settings.samples);
        let analytical = self.differentiate();
        let analytical_values = domain
            .iter()
            .map(|&x| analytical.compute(x))
            .collect::<Result<Vec<f64>, DomainError>>()?;
        let numerical_values = try_numerical_derivative(|x| self.compute(x), &domain, settings.step)?;
        let norm_value = norm(&analytical_values, &numerical_values);
        let passed = norm_value < settings.tolerance;
        if passed {
            info!("derivative of {} matches finite differences, norm = {:e}", self, norm_value);
        } else {
            warn!(
                "derivative of {} deviates from finite differences, norm = {:e} > {:e}",
                self, norm_value, settings.tolerance
            );
        }
        Ok((norm_value, passed))
    }

    /// Taylor polynomial of the given order around `a`:
    /// sum over n of f^(n)(a) / n! * (x - a)^n.
    ///
    /// Around 0 the terms are plain polynomial terms, elsewhere each term is the chain
    /// `c_n * (x - a)^n`. Fails when a derivative is undefined at `a`.
    pub fn taylor_polynomial(&self, a: f64, order: usize) -> Result<Function, DomainError> {
        let mut terms: Vec<Function> = Vec::with_capacity(order + 1);
        let mut derivative = self.clone();
        let mut factorial = 1.0;
        for n in 0..=order {
            if n > 0 {
                derivative = derivative.differentiate();
                factorial *= n as f64;
            }
            let term = PolyTerm::new(derivative.compute(a)? / factorial, n as f64);
            if a == 0.0 {
                terms.push(term.into());
            } else {
                let shifted =
                    Function::from(PolyTerm::identity()) + Function::from(PolyTerm::constant(-a));
                terms.push(Function::compose(term.into(), shifted));
            }
        }
        info!("Taylor polynomial of {} around {} up to order {}", self, a, order);
        Ok(Addition::new(terms).into())
    }
}
