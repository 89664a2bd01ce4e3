//! Randomized greeting.

use rand::Rng;

use crate::render::TextSink;

pub const GREETINGS: [&str; 4] = ["Hello world!", "¡Hola Mundo!", "你好，世界！", "Bonjour le monde!"];

/// Pick one greeting uniformly at random.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GREETINGS[rng.random_range(0..GREETINGS.len())]
}

/// Pick a greeting and write it into the greeting container.
pub fn add_random_greeting<R: Rng + ?Sized>(sink: &dyn TextSink, rng: &mut R) -> &'static str {
    let greeting = pick(rng);
    sink.replace_text(greeting);
    greeting
}

#[cfg(test)]
#[path = "greeting_test.rs"]
mod tests;
