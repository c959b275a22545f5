use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

/// Source of tile orderings.
///
/// Grid construction takes the permutation from an implementor of this trait,
/// so the only randomness in the game can be replaced in tests.
pub trait TileShuffler {
    /// Permutes `values` in place.
    fn shuffle(&mut self, values: &mut [Option<u8>]);
}

impl<T> TileShuffler for &mut T
where
    T: TileShuffler + ?Sized,
{
    fn shuffle(&mut self, values: &mut [Option<u8>]) {
        (**self).shuffle(values);
    }
}

/// Uniform shuffler backed by a seeded PCG generator.
///
/// The same seed always yields the same sequence of grids.
///
/// # Example
///
/// ```
/// use ayumu_generator::{SeededShuffler, TileShuffler};
///
/// let mut a = SeededShuffler::new(7);
/// let mut b = SeededShuffler::new(7);
///
/// let mut left = [Some(1), Some(2), Some(3), None];
/// let mut right = left;
/// a.shuffle(&mut left);
/// b.shuffle(&mut right);
/// assert_eq!(left, right);
/// ```
#[derive(Debug, Clone)]
pub struct SeededShuffler {
    seed: u64,
    rng: Pcg64,
}

impl SeededShuffler {
    /// Creates a shuffler from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Creates a shuffler with a seed drawn from the thread RNG.
    #[must_use]
    pub fn from_random_seed() -> Self {
        Self::new(rand::random())
    }

    /// Returns the seed this shuffler was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TileShuffler for SeededShuffler {
    fn shuffle(&mut self, values: &mut [Option<u8>]) {
        values.shuffle(&mut self.rng);
    }
}
