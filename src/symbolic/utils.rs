// numeric helpers for checking symbolic results against finite differences

/// `num_values` evenly spaced points from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    match num_values {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Central difference (f(x+h) - f(x-h)) / 2h at every point of `x_values`, for a
/// function that can fail; stops at the first error.
pub fn try_numerical_derivative<F, E>(f: F, x_values: &[f64], h: f64) -> Result<Vec<f64>, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    x_values
        .iter()
        .map(|&x| Ok((f(x + h)? - f(x - h)?) / (2.0 * h)))
        .collect()
}

// compute norm of two vectors
pub fn norm(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return 0.0;
    }
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::errors::DomainError;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_central_difference_of_square() {
        let derivatives: Result<Vec<f64>, DomainError> =
            try_numerical_derivative(|x| Ok(x * x), &[0.0, 1.0, 2.0, 3.0], 1e-3);
        for (d, expected) in derivatives.unwrap().iter().zip([0.0, 2.0, 4.0, 6.0]) {
            assert_relative_eq!(*d, expected, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_try_numerical_derivative_stops_on_error() {
        let result: Result<Vec<f64>, String> = try_numerical_derivative(
            |x| if x > 0.0 { Ok(x.ln()) } else { Err(format!("ln({})", x)) },
            &[1.0, 0.0],
            1e-3,
        );
        assert!(result.is_err());
        let ok: Result<Vec<f64>, String> = try_numerical_derivative(|x| Ok(3.0 * x), &[1.0, 5.0], 1e-3);
        assert_relative_eq!(ok.unwrap()[1], 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_norm() {
        assert_eq!(norm(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
        assert_relative_eq!(norm(&[3.0, 0.0], &[0.0, 4.0]), 2.5);
        assert_eq!(norm(&[], &[]), 0.0);
    }
}
