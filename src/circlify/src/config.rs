/// Options for one [`Circlify`](crate::Circlify) run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    /// Add the unit circle under the default label.
    pub with_unit: bool,
    /// Seed for the enclosing circle shuffle. `None` draws from the thread
    /// rng.
    pub seed: Option<u64>,
    /// Score placement pairs on the rayon pool.
    pub parallel: bool,
}

impl Config {
    pub fn with_unit(mut self, with_unit: bool) -> Self {
        self.with_unit = with_unit;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
