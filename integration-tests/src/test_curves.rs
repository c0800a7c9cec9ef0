use std::cell::Cell;

use tangent_solve::Function;

/// The curve `1 - x^2 + 2^x` from the tangent-line walkthrough.
pub struct Walkthrough;

impl Function for Walkthrough {
    fn call(&self, x: f64) -> f64 {
        1.0 - x * x + x.exp2()
    }
}

/// A polynomial with coefficients of descending degree.
pub struct Polynomial(pub Vec<f64>);

impl Function for Polynomial {
    fn call(&self, x: f64) -> f64 {
        self.0.iter().fold(0.0, |acc, c| acc * x + c)
    }
}

/// A function that never changes, so every tangent is flat.
pub struct Constant(pub f64);

impl Function for Constant {
    fn call(&self, _x: f64) -> f64 {
        self.0
    }
}

/// Wraps a function and counts how many times it is evaluated.
pub struct Counting<F> {
    inner: F,
    calls: Cell<usize>,
}

impl<F: Function> Counting<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<F: Function> Function for Counting<F> {
    fn call(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.call(x)
    }
}
