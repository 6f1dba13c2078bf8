/// core capability: the `Differentiable` trait and the `Function` sum type
///
///# Example
/// ```
/// use RustedCalculus::symbolic::function::{Differentiable, Function};
/// use RustedCalculus::symbolic::primitives::{Exponential, PolyTerm};
/// // x^2 * e^x
/// let f = Function::from(PolyTerm::new(1.0, 2.0)) * Function::from(Exponential::natural());
/// let df = f.differentiate();
/// println!("f = {}, f' = {}", f, df);
/// let value = df.compute(1.0).unwrap();
/// assert!((value - 3.0 * std::f64::consts::E).abs() < 1e-12);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod function;
/// polynomial terms, exponentials and logarithms
pub mod primitives;
/// sums, products and differences
pub mod operations;
///____________________________________________________________________________________________________________________________
/// # Composite chains
/// nested composition f1(f2(...fn(x))) and the chain rule
///# Example
/// ```
/// use RustedCalculus::symbolic::composite::CompositeChain;
/// use RustedCalculus::symbolic::function::{Differentiable, Function};
/// use RustedCalculus::symbolic::primitives::{Exponential, PolyTerm};
/// // e^(2x)
/// let mut chain = CompositeChain::new();
/// chain.append_end(Exponential::natural().into());
/// chain.append_end(PolyTerm::new(2.0, 1.0).into());
/// assert_eq!(chain.to_string(), "e^(2x)");
/// let derivative = Function::from(chain).differentiate();
/// assert!((derivative.compute(0.0).unwrap() - 2.0).abs() < 1e-12);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod composite;
/// canonical order of the operands of a sum
pub mod ordering;
/// equality across representations
pub mod equality;
/// pretty printing
pub mod display;
/// repeated derivatives, grid evaluation, numerical validation, Taylor polynomials
pub mod analysis;
pub mod errors;
pub mod utils;
