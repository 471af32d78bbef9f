//! Builder configuration: RNG seed and animation timing.

/// Configuration for the character builder.
#[derive(Debug, Clone)]
pub struct ForgeConfig {
    /// RNG seed for reproducible dice rolls.
    pub seed: u64,
    /// Milliseconds of spin before each die is revealed.
    pub spin_ms: u64,
    /// Milliseconds each revealed roll is held before the next one.
    pub reveal_ms: u64,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spin_ms: 100,
            reveal_ms: 1000,
        }
    }
}

impl ForgeConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the spin delay in milliseconds.
    pub fn with_spin_ms(mut self, spin_ms: u64) -> Self {
        self.spin_ms = spin_ms;
        self
    }

    /// Set the reveal delay in milliseconds.
    pub fn with_reveal_ms(mut self, reveal_ms: u64) -> Self {
        self.reveal_ms = reveal_ms;
        self
    }
}
