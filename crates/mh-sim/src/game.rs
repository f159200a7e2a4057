//! Game rules over whole trial batches

use rand::Rng;

use crate::config::HostPolicy;
use crate::door::Door;
use crate::{Result, SimError};

fn check_lengths(left: &[Door], right: &[Door]) -> Result<()> {
    if left.len() != right.len() {
        return Err(SimError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}

/// Host opens a door hiding a goat, different from the contestant's guess.
///
/// When the guess is the prize door the highest-numbered of the two goat
/// doors is opened.
pub fn reveal_goat_door(prize_doors: &[Door], guesses: &[Door]) -> Result<Vec<Door>> {
    check_lengths(prize_doors, guesses)?;

    Ok(prize_doors
        .iter()
        .zip(guesses)
        .map(|(&prize, &guess)| Door::third(prize, guess).unwrap_or(prize.others()[1]))
        .collect())
}

/// Same as [`reveal_goat_door`], with the two-goat case resolved by `policy`
pub fn reveal_goat_door_with<R: Rng + ?Sized>(
    rng: &mut R,
    prize_doors: &[Door],
    guesses: &[Door],
    policy: HostPolicy,
) -> Result<Vec<Door>> {
    match policy {
        HostPolicy::Highest => reveal_goat_door(prize_doors, guesses),
        HostPolicy::Random => {
            check_lengths(prize_doors, guesses)?;

            Ok(prize_doors
                .iter()
                .zip(guesses)
                .map(|(&prize, &guess)| match Door::third(prize, guess) {
                    Some(goat) => goat,
                    None => prize.others()[rng.random_range(0..2)],
                })
                .collect())
        }
    }
}

/// Switch every guess to the door that is neither the guess nor the goat door
pub fn switch_guess(guesses: &[Door], goat_doors: &[Door]) -> Result<Vec<Door>> {
    check_lengths(guesses, goat_doors)?;

    guesses
        .iter()
        .zip(goat_doors)
        .enumerate()
        .map(|(trial, (&guess, &goat))| {
            Door::third(guess, goat).ok_or(SimError::AmbiguousSwitch { trial })
        })
        .collect()
}

/// Percentage (0-100) of trials where the guess matches the prize door
pub fn win_percentage(guesses: &[Door], prize_doors: &[Door]) -> Result<f64> {
    check_lengths(guesses, prize_doors)?;
    if guesses.is_empty() {
        return Err(SimError::EmptyBatch);
    }

    Ok(count_wins(guesses, prize_doors) as f64 / guesses.len() as f64 * 100.0)
}

/// Number of positions where both sequences agree
pub(crate) fn count_wins(guesses: &[Door], prize_doors: &[Door]) -> usize {
    guesses
        .iter()
        .zip(prize_doors)
        .filter(|(guess, prize)| guess == prize)
        .count()
}
