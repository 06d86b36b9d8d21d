//! Pool of headers for the "surprise me" button.

use rand::Rng;

pub const RANDOM_HEADERS: [&str; 10] = [
    "🎯 Today’s Chosen One: Luck or Chaos?",
    "🐸 Fate Has Spoken (Kinda)",
    "🤡 Wheel of Fortunate-ish",
    "🍕 Spin It to Win… Bragging Rights",
    "🦄 The Universe Decides (No Refunds)",
    "🫣 One Spin to Rule Them All",
    "🎲 Destiny? Or Just Dumb Luck?",
    "🐔 Cluck of the Draw",
    "🛸 Beamed Up by Luck Today?",
    "🧃 Winner Gets Nothing But Vibes",
];

pub fn pick_random_header<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    RANDOM_HEADERS[rng.random_range(0..RANDOM_HEADERS.len())]
}
