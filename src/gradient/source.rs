use rand::Rng;

#[cfg(test)]
use mockall::automock;

/// Source of uniform random numbers for the gradient generator
#[cfg_attr(test, automock)]
pub trait RandomSource {
    /// Next value, uniformly distributed over `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Draws from the thread-local RNG. Stateless and cheap to create.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Adapts any [`rand::Rng`], e.g. a seeded `StdRng` for reproducible output
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}
