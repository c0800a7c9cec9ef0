use crate::Function;

/// Estimates `f'(x)` with a forward difference.
///
/// Computes `(f(x + step) - f(x)) / step`. The estimate is only meaningful
/// where `f` is differentiable and `step` is small relative to the local
/// curvature. `step` must be nonzero; a zero step yields NaN.
pub fn derivative<F: Function + ?Sized>(f: &F, x: f64, step: f64) -> f64 {
    (f.call(x + step) - f.call(x)) / step
}

/// Estimates `f'(x)` with a central difference.
///
/// Computes `(f(x + step) - f(x - step)) / (2 * step)`, which is second-order
/// accurate but costs an extra evaluation away from `x`.
pub fn central_derivative<F: Function + ?Sized>(f: &F, x: f64, step: f64) -> f64 {
    (f.call(x + step) - f.call(x - step)) / (2.0 * step)
}

/// Finite-difference scheme used to estimate slopes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Difference {
    /// `(f(x + h) - f(x)) / h`
    #[default]
    Forward,
    /// `(f(x + h) - f(x - h)) / 2h`
    Central,
}

impl Difference {
    /// Estimates `f'(x)` using this scheme.
    pub fn estimate<F: Function + ?Sized>(self, f: &F, x: f64, step: f64) -> f64 {
        match self {
            Difference::Forward => derivative(f, x, step),
            Difference::Central => central_derivative(f, x, step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn forward_difference_of_quadratic() {
        // (x + h)^2 - x^2 = 2xh + h^2, so the estimate is exactly 2x + h.
        let slope = derivative(&|x: f64| x * x, 3.0, 1e-3);
        assert_relative_eq!(slope, 6.001, epsilon = 1e-9);
    }

    #[test]
    fn central_difference_of_quadratic_is_exact() {
        let slope = central_derivative(&|x: f64| x * x, 3.0, 1e-3);
        assert_relative_eq!(slope, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn constant_function_has_zero_slope() {
        let f = |_: f64| 4.2;
        assert!(derivative(&f, -7.0, 1e-3) == 0.0);
        assert!(central_derivative(&f, 11.0, 1e-3) == 0.0);
    }

    #[test]
    fn scheme_dispatches() {
        let f = |x: f64| x * x * x;
        assert_relative_eq!(
            Difference::Forward.estimate(&f, 1.0, 1e-3),
            derivative(&f, 1.0, 1e-3)
        );
        assert_relative_eq!(
            Difference::Central.estimate(&f, 1.0, 1e-3),
            central_derivative(&f, 1.0, 1e-3)
        );
        assert_eq!(Difference::default(), Difference::Forward);
    }
}
