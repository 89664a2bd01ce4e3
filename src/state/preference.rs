//! The "max comments to display" setting.

use crate::config::DEFAULT_MAX_COMMENTS;

/// Maximum number of comments to request. Always non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayPreference(u32);

impl Default for DisplayPreference {
    fn default() -> Self {
        Self(DEFAULT_MAX_COMMENTS)
    }
}

impl From<u32> for DisplayPreference {
    fn from(limit: u32) -> Self {
        Self(limit)
    }
}

impl std::fmt::Display for DisplayPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl DisplayPreference {
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self(limit)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Interpret the raw text of the max-comments number input.
    ///
    /// Integers are taken as-is. Other finite numbers are truncated and
    /// clamped into `0..=u32::MAX`. Blank or non-numeric input counts as
    /// unset and yields `fallback`.
    #[must_use]
    pub fn from_input(raw: &str, fallback: Self) -> Self {
        let trimmed = raw.trim();
        if let Ok(limit) = trimmed.parse::<u32>() {
            return Self(limit);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self(clamp_to_u32(value)),
            _ => fallback,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_to_u32(value: f64) -> u32 {
    value.trunc().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
#[path = "preference_test.rs"]
mod tests;
