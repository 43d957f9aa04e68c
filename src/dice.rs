//! Dice rollers.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::DieError;

/// Rolls taken by a fuzzy die before dividing.
const FUZZ_ROLLS: u32 = 10;

/// Largest divisor a fuzzy die may draw.
const FUZZ_MAX_DIVISOR: u32 = FUZZ_ROLLS - 1;

/// Something that can be rolled for a number.
pub trait Roll {
    /// Rolls once and returns the result.
    fn roll(&mut self) -> u32;
}

/// An n-sided die.
///
/// # Example
///
/// ```
/// use gamekit::Die;
///
/// let mut die = Die::new(6, 42).unwrap();
/// let face = die.roll();
/// assert!((1..=6).contains(&face));
/// ```
#[derive(Debug, Clone)]
pub struct Die {
    sides: u32,
    rng: ChaCha8Rng,
}

impl Die {
    /// Creates a die with `sides` faces whose rolls are driven by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`DieError::InvalidSides`] if `sides` is zero.
    pub fn new(sides: u32, seed: u64) -> Result<Self, DieError> {
        Self::with_rng(sides, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a die whose generator is seeded from the OS.
    ///
    /// # Errors
    ///
    /// Returns [`DieError::InvalidSides`] if `sides` is zero.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_entropy(sides: u32) -> Result<Self, DieError> {
        Self::with_rng(sides, ChaCha8Rng::from_os_rng())
    }

    fn with_rng(sides: u32, rng: ChaCha8Rng) -> Result<Self, DieError> {
        if sides == 0 {
            return Err(DieError::InvalidSides);
        }

        Ok(Self { sides, rng })
    }

    /// Returns the number of sides.
    #[must_use]
    pub const fn sides(&self) -> u32 {
        self.sides
    }

    /// Rolls the die, returning a value in `1..=sides`.
    pub fn roll(&mut self) -> u32 {
        self.rng.random_range(1..=self.sides)
    }
}

impl Roll for Die {
    fn roll(&mut self) -> u32 {
        Self::roll(self)
    }
}

/// A die that can be made deliberately unpredictable.
///
/// Without fuzz it rolls like a plain [`Die`]. With fuzz it sums ten rolls
/// and divides the total by a random divisor in `1..=9`, so results fall
/// anywhere in `1..=10 * sides`.
///
/// # Example
///
/// ```
/// use gamekit::FuzzyDie;
///
/// let mut die = FuzzyDie::new(6, 3).unwrap().with_fuzz(true);
/// let result = die.roll();
/// assert!((1..=60).contains(&result));
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyDie {
    die: Die,
    fuzz: bool,
}

impl FuzzyDie {
    /// Creates a fuzzy die with `sides` faces and fuzz turned off.
    ///
    /// # Errors
    ///
    /// Returns [`DieError::InvalidSides`] if `sides` is zero.
    pub fn new(sides: u32, seed: u64) -> Result<Self, DieError> {
        Die::new(sides, seed).map(Self::from)
    }

    /// Sets whether rolls are fuzzed.
    #[must_use]
    pub const fn with_fuzz(mut self, fuzz: bool) -> Self {
        self.fuzz = fuzz;
        self
    }

    /// Returns whether rolls are fuzzed.
    #[must_use]
    pub const fn is_fuzzy(&self) -> bool {
        self.fuzz
    }

    /// Returns the number of sides of the underlying die.
    #[must_use]
    pub const fn sides(&self) -> u32 {
        self.die.sides()
    }

    /// Rolls the die.
    pub fn roll(&mut self) -> u32 {
        if !self.fuzz {
            return self.die.roll();
        }

        let total = (0..FUZZ_ROLLS).fold(0_u32, |sum, _| sum.saturating_add(self.die.roll()));
        let divisor = self.die.rng.random_range(1..=FUZZ_MAX_DIVISOR);
        tracing::trace!(total, divisor, "fuzzed roll");

        total / divisor
    }
}

impl From<Die> for FuzzyDie {
    fn from(die: Die) -> Self {
        Self { die, fuzz: false }
    }
}

impl Roll for FuzzyDie {
    fn roll(&mut self) -> u32 {
        Self::roll(self)
    }
}
