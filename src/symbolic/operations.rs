//! N-ary combinators: sums, products and differences of functions.
//!
//! Sum rule:        (f + g)' = f' + g'
//! Product rule:    (f * g)' = f' * g + g' * f, left-folded over more than two factors
//! Difference rule: (f - g)' = f' - g'
use crate::symbolic::errors::{BuildError, DomainError};
use crate::symbolic::function::{Differentiable, Function};
use crate::symbolic::ordering::canonical_cmp;
use crate::symbolic::primitives::PolyTerm;
use log::debug;

/// Sum of any number of functions, kept in canonical order.
///
/// An empty sum evaluates to 0.
#[derive(Debug, Clone)]
pub struct Addition {
    operands: Vec<Function>,
}

impl Addition {
    /// Builds the sum, merging polynomial terms of equal power and sorting the operands
    /// with the canonical comparator.
    pub fn new(operands: Vec<Function>) -> Self {
        let mut operands = merge_like_terms(operands);
        operands.sort_by(canonical_cmp);
        Self { operands }
    }

    pub fn operands(&self) -> &[Function] {
        &self.operands
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }
}

/// Adds up the scalars of polynomial terms sharing a power. The first term seen for a
/// power keeps its position. No other simplification happens here.
///
/// A single-node chain wrapping a polynomial term counts as that term, and a merged
/// term is stored bare.
fn merge_like_terms(operands: Vec<Function>) -> Vec<Function> {
    let mut merged: Vec<Function> = Vec::with_capacity(operands.len());
    let mut absorbed = 0usize;
    for operand in operands {
        let Some(term) = operand.as_poly_term().copied() else {
            merged.push(operand);
            continue;
        };
        let slot = merged.iter().position(|f| {
            f.as_poly_term()
                .is_some_and(|existing| existing.power == term.power)
        });
        match slot {
            Some(i) => {
                if let Some(existing) = merged[i].as_poly_term().copied() {
                    merged[i] = PolyTerm::new(existing.scalar + term.scalar, term.power).into();
                }
                absorbed += 1;
            }
            None => merged.push(operand),
        }
    }
    if absorbed > 0 {
        debug!("merged {} like polynomial terms", absorbed);
    }
    merged
}

impl Differentiable for Addition {
    fn compute(&self, x: f64) -> Result<f64, DomainError> {
        self.operands
            .iter()
            .try_fold(0.0, |sum, f| f.compute(x).map(|value| sum + value))
    }

    fn differentiate(&self) -> Function {
        Addition::new(self.operands.iter().map(|f| f.differentiate()).collect()).into()
    }
}

/// Product of one or more functions.
#[derive(Debug, Clone)]
pub struct Multiplication {
    operands: Vec<Function>,
}

impl Multiplication {
    /// # Panics
    /// When `operands` is empty.
    pub fn new(operands: Vec<Function>) -> Self {
        assert!(
            !operands.is_empty(),
            "a multiplication needs at least one operand"
        );
        Self { operands }
    }

    pub fn try_new(operands: Vec<Function>) -> Result<Self, BuildError> {
        if operands.is_empty() {
            return Err(BuildError::EmptyProduct);
        }
        Ok(Self { operands })
    }

    pub fn operands(&self) -> &[Function] {
        &self.operands
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }
}

impl Differentiable for Multiplication {
    fn compute(&self, x: f64) -> Result<f64, DomainError> {
        self.operands
            .iter()
            .try_fold(1.0, |product, f| f.compute(x).map(|value| product * value))
    }

    fn differentiate(&self) -> Function {
        let Some((first, rest)) = self.operands.split_first() else {
            return PolyTerm::zero().into();
        };
        // d(P_i * g) = P_i' * g + g' * P_i, where P_i is the product of the first i factors
        let mut derivative = first.differentiate();
        for (i, g) in rest.iter().enumerate() {
            let prefix = &self.operands[..=i];
            let product: Function = match prefix {
                [single] => single.clone(),
                _ => Multiplication::new(prefix.to_vec()).into(),
            };
            derivative = Addition::new(vec![
                Multiplication::new(vec![derivative, g.clone()]).into(),
                Multiplication::new(vec![g.differentiate(), product]).into(),
            ])
            .into();
        }
        derivative
    }
}

/// Difference `fx - gx`. Operand order matters.
#[derive(Debug, Clone)]
pub struct Subtraction {
    fx: Box<Function>,
    gx: Box<Function>,
}

impl Subtraction {
    pub fn new(fx: Function, gx: Function) -> Self {
        Self {
            fx: Box::new(fx),
            gx: Box::new(gx),
        }
    }

    /// Builds a difference from exactly two operands, minuend first.
    pub fn from_operands(operands: Vec<Function>) -> Result<Self, BuildError> {
        let found = operands.len();
        let [fx, gx]: [Function; 2] = operands
            .try_into()
            .map_err(|_| BuildError::SubtractionArity { found })?;
        Ok(Self::new(fx, gx))
    }

    pub fn minuend(&self) -> &Function {
        &self.fx
    }

    pub fn subtrahend(&self) -> &Function {
        &self.gx
    }
}

impl Differentiable for Subtraction {
    fn compute(&self, x: f64) -> Result<f64, DomainError> {
        Ok(self.fx.compute(x)? - self.gx.compute(x)?)
    }

    fn differentiate(&self) -> Function {
        Subtraction::new(self.fx.differentiate(), self.gx.differentiate()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::composite::CompositeChain;
    use crate::symbolic::function::FunctionKind;
    use crate::symbolic::primitives::{Exponential, Logarithm};
    use crate::symbolic::utils::{linspace, try_numerical_derivative};
    use approx::assert_relative_eq;
    use std::f64::consts::E;

    fn x_squared() -> Function {
        PolyTerm::new(1.0, 2.0).into()
    }

    #[test]
    fn test_addition_merges_equal_powers() {
        let sum = Addition::new(vec![
            PolyTerm::new(2.0, 3.0).into(),
            PolyTerm::new(5.0, 3.0).into(),
        ]);
        assert_eq!(sum.len(), 1);
        assert_eq!(sum.operands()[0], PolyTerm::new(7.0, 3.0).into());
    }

    #[test]
    fn test_addition_merges_poly_term_wrapped_in_single_node_chain() {
        let wrapped: Function = CompositeChain::single_node(PolyTerm::new(5.0, 3.0).into()).into();
        let sum = Addition::new(vec![PolyTerm::new(2.0, 3.0).into(), wrapped.clone()]);
        assert_eq!(sum.len(), 1);
        assert_eq!(sum.operands()[0].kind(), FunctionKind::PolyTerm);
        assert_eq!(sum.operands()[0], PolyTerm::new(7.0, 3.0).into());
        assert_eq!(sum.to_string(), "7x^3");

        // wrapped term seen first
        let sum = Addition::new(vec![wrapped, PolyTerm::new(1.0, 2.0).into(), PolyTerm::new(-1.0, 3.0).into()]);
        assert_eq!(
            sum.operands().to_vec(),
            vec![
                Function::from(PolyTerm::new(1.0, 2.0)),
                Function::from(PolyTerm::new(4.0, 3.0)),
            ]
        );
    }

    #[test]
    fn test_addition_merge_keeps_distinct_powers() {
        let sum = Addition::new(vec![
            PolyTerm::new(1.0, 2.0).into(),
            PolyTerm::new(4.0, 0.0).into(),
            PolyTerm::new(3.0, 2.0).into(),
            PolyTerm::new(-1.0, 0.0).into(),
        ]);
        assert_eq!(
            sum.operands().to_vec(),
            vec![
                Function::from(PolyTerm::new(3.0, 0.0)),
                Function::from(PolyTerm::new(4.0, 2.0)),
            ]
        );
    }

    #[test]
    fn test_addition_sorts_operands_canonically() {
        let sum = Addition::new(vec![
            Logarithm::natural().into(),
            Exponential::natural().into(),
            PolyTerm::new(1.0, 3.0).into(),
            PolyTerm::new(1.0, 1.0).into(),
        ]);
        let kinds: Vec<FunctionKind> = sum.operands().iter().map(Function::kind).collect();
        assert_eq!(
            kinds,
            vec![
                FunctionKind::PolyTerm,
                FunctionKind::PolyTerm,
                FunctionKind::Exponential,
                FunctionKind::Logarithm,
            ]
        );
        assert_eq!(sum.operands()[0], PolyTerm::new(1.0, 1.0).into());
    }

    #[test]
    fn test_empty_addition_is_zero() {
        let sum = Addition::new(vec![]);
        assert!(sum.is_empty());
        assert_eq!(sum.compute(42.0).unwrap(), 0.0);
        assert_eq!(sum.differentiate().compute(1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_sum_rule() {
        let sum = Addition::new(vec![x_squared(), Exponential::natural().into()]);
        let derivative = sum.differentiate();
        // 2x + e^x
        assert_relative_eq!(derivative.compute(1.0).unwrap(), 2.0 + E, epsilon = 1e-12);
    }

    #[test]
    fn test_product_rule_end_to_end() {
        let product = Multiplication::new(vec![x_squared(), Exponential::natural().into()]);
        let derivative = product.differentiate();
        assert_relative_eq!(derivative.compute(1.0).unwrap(), 3.0 * E, epsilon = 1e-12);
        assert_relative_eq!(derivative.compute(1.0).unwrap(), 8.1548, epsilon = 1e-4);
    }

    #[test]
    fn test_binary_product_rule_structure() {
        let f = x_squared();
        let g: Function = Exponential::natural().into();
        let derivative = Multiplication::new(vec![f.clone(), g.clone()]).differentiate();
        let expected = Addition::new(vec![
            Multiplication::new(vec![f.differentiate(), g.clone()]).into(),
            Multiplication::new(vec![g.differentiate(), f]).into(),
        ]);
        assert_eq!(derivative, expected.into());
    }

    #[test]
    fn test_n_ary_product_rule() {
        // x * e^x * ln(x)
        let product = Multiplication::new(vec![
            PolyTerm::identity().into(),
            Exponential::natural().into(),
            Logarithm::natural().into(),
        ]);
        let derivative = product.differentiate();
        let xs = linspace(0.5, 3.0, 20);
        let numeric = try_numerical_derivative(|x| product.compute(x), &xs, 1e-6).unwrap();
        for (x, expected) in xs.into_iter().zip(numeric) {
            assert_relative_eq!(derivative.compute(x).unwrap(), expected, max_relative = 1e-6, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_single_factor_product() {
        let product = Multiplication::new(vec![x_squared()]);
        assert_eq!(product.compute(3.0).unwrap(), 9.0);
        assert_eq!(product.differentiate(), PolyTerm::new(2.0, 1.0).into());
    }

    #[test]
    fn test_empty_product_is_rejected() {
        assert_eq!(
            Multiplication::try_new(vec![]).unwrap_err(),
            BuildError::EmptyProduct
        );
    }

    #[test]
    #[should_panic(expected = "at least one operand")]
    fn test_empty_product_panics_on_new() {
        let _ = Multiplication::new(vec![]);
    }

    #[test]
    fn test_subtraction_is_ordered() {
        let diff = Subtraction::new(x_squared(), PolyTerm::constant(1.0).into());
        assert_eq!(diff.compute(3.0).unwrap(), 8.0);
        let reversed = Subtraction::new(PolyTerm::constant(1.0).into(), x_squared());
        assert_eq!(reversed.compute(3.0).unwrap(), -8.0);
        let derivative = diff.differentiate();
        assert_eq!(derivative.compute(3.0).unwrap(), 6.0);
        assert!(matches!(derivative, Function::Subtraction(_)));
    }

    #[test]
    fn test_subtraction_from_operands() {
        let diff = Subtraction::from_operands(vec![x_squared(), PolyTerm::identity().into()])
            .unwrap();
        assert_eq!(diff.minuend(), &x_squared());
        assert_eq!(diff.subtrahend(), &PolyTerm::identity().into());
        assert_eq!(
            Subtraction::from_operands(vec![x_squared()]).unwrap_err(),
            BuildError::SubtractionArity { found: 1 }
        );
    }

    #[test]
    fn test_domain_error_propagates_through_combinators() {
        let sum = Addition::new(vec![x_squared(), Logarithm::natural().into()]);
        assert!(sum.compute(-1.0).is_err());
        let product = Multiplication::new(vec![x_squared(), PolyTerm::new(1.0, -2.0).into()]);
        assert_eq!(
            product.compute(0.0),
            Err(DomainError::Pole { x: 0.0, power: -2.0 })
        );
    }
}
