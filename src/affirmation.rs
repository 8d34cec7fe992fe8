use rand::{seq::SliceRandom, Rng};

pub const AFFIRMATIONS: [&str; 5] = [
    "Trust your inner knowing.",
    "Your intuition is growing stronger.",
    "You already know the answer.",
    "Calm mind, clear vision.",
    "Let your inner voice guide you.",
];

/// Pick one affirmation uniformly
pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    AFFIRMATIONS.choose(rng).copied().unwrap_or(AFFIRMATIONS[0])
}
