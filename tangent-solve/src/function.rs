/// A real-valued function of one real variable.
///
/// Closures and function pointers taking and returning `f64` implement this
/// trait automatically, so most callers never name it.
pub trait Function {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn square(x: f64) -> f64 {
        x * x
    }

    /// A line `y = slope * x + offset`.
    struct Line {
        slope: f64,
        offset: f64,
    }

    impl Function for Line {
        fn call(&self, x: f64) -> f64 {
            self.slope * x + self.offset
        }
    }

    #[test]
    fn closures_and_fn_pointers_are_functions() {
        let shift = 3.0;
        let closure = |x: f64| x + shift;

        assert_relative_eq!(closure.call(1.0), 4.0);
        assert_relative_eq!(square.call(3.0), 9.0);
    }

    #[test]
    fn custom_types_are_functions() {
        let line = Line {
            slope: 2.0,
            offset: -1.0,
        };
        assert_relative_eq!(line.call(0.5), 0.0);
    }
}
