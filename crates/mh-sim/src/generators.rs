//! Random trial data generators

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::config::GuessPolicy;
use crate::door::Door;

/// Draw a single door uniformly
pub fn random_door<R: Rng + ?Sized>(rng: &mut R) -> Door {
    Door::ALL[rng.random_range(0..Door::ALL.len())]
}

/// Prize locations for `n` trials, uniform and independent
pub fn generate_prize_doors<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Door> {
    (0..n).map(|_| random_door(rng)).collect()
}

/// Guesses for `n` trials that never repeat the previous guess.
///
/// First guess is uniform, every later one is redrawn until it differs
/// from its predecessor.
pub fn generate_guesses<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Door> {
    let mut guesses = Vec::with_capacity(n);
    if n == 0 {
        return guesses;
    }

    guesses.push(random_door(rng));
    while guesses.len() < n {
        let door = random_door(rng);
        if Some(&door) == guesses.last() {
            continue;
        }
        guesses.push(door);
    }
    guesses
}

/// Guesses for `n` trials according to `policy`
pub fn generate_guesses_with<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    policy: GuessPolicy,
) -> Vec<Door> {
    match policy {
        GuessPolicy::NoRepeatWalk => generate_guesses(rng, n),
        GuessPolicy::Uniform => generate_prize_doors(rng, n),
        GuessPolicy::Fixed(door) => vec![door; n],
    }
}

/// Seedable source of trial data
pub struct DoorGenerator {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl DoorGenerator {
    /// Create a new generator with optional seed
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };

        Self { rng, seed }
    }

    /// Seed this generator was created with (None = OS entropy)
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Borrow the underlying RNG for the free functions
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn prize_doors(&mut self, n: usize) -> Vec<Door> {
        generate_prize_doors(&mut self.rng, n)
    }

    pub fn guesses(&mut self, n: usize, policy: GuessPolicy) -> Vec<Door> {
        generate_guesses_with(&mut self.rng, n, policy)
    }
}
