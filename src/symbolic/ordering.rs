//! Canonical ordering of functions, used to keep the operands of a sum in a deterministic
//! order.
//!
//! From lowest to highest:
//! 1) polynomial terms, by ascending power
//! 2) exponentials
//! 3) sums and differences
//! 4) products
//! 5) logarithms and composite chains
//!
//! Functions of the same rank other than polynomial terms compare equal, so a stable sort
//! keeps their relative order. Single-node chains rank as the function they wrap.
use crate::symbolic::function::{Function, FunctionKind};
use std::cmp::Ordering;

fn rank(kind: FunctionKind) -> u8 {
    match kind {
        FunctionKind::PolyTerm => 0,
        FunctionKind::Exponential => 1,
        FunctionKind::Addition | FunctionKind::Subtraction => 2,
        FunctionKind::Multiplication => 3,
        FunctionKind::Logarithm | FunctionKind::CompositeChain => 4,
    }
}

/// Total order over functions for sorting the operands of an `Addition`.
pub fn canonical_cmp(f: &Function, g: &Function) -> Ordering {
    let (f, g) = (f.normalized(), g.normalized());
    if let (Function::PolyTerm(fp), Function::PolyTerm(gp)) = (f, g) {
        return fp.power.total_cmp(&gp.power);
    }
    rank(f.kind()).cmp(&rank(g.kind()))
}
