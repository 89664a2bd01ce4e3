//! Function-composition demo shown as a burst of alerts on page load.

use crate::render::Notifier;

/// Apply `f` to the word `"world"`.
pub fn compose_world<T>(f: impl FnOnce(&'static str) -> T) -> T {
    f("world")
}

/// Curried greeting: `greet(name)(punctuation)`.
pub fn greet(name: &str) -> impl Fn(&str) -> String + '_ {
    move |punctuation: &str| format!("Hello {name}{punctuation}")
}

#[must_use]
pub fn add_happiness(item: &str) -> String {
    format!("{item} 😂")
}

/// `compose_world(greet)("!")`, split into words, each made happier.
#[must_use]
pub fn demo_words() -> Vec<String> {
    compose_world(greet)("!").split(' ').map(add_happiness).collect()
}

/// Alert each demo word in turn. Returns how many alerts were shown.
pub fn run_demo(notifier: &dyn Notifier) -> usize {
    let words = demo_words();
    for word in &words {
        notifier.notify(word);
    }
    words.len()
}

#[cfg(test)]
#[path = "composition_test.rs"]
mod tests;
