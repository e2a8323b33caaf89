//! Game configuration types.
//!
//! A game is configured by three values:
//! - `LayoutVariant`: which static 3D arrangement of slots to deal onto
//! - `Difficulty`: which face pool the deck is drawn from
//! - `SessionConfig`: scoring, shuffle allowance and the session seed
//!
//! Layout and difficulty names coming from outside (menus, saved settings)
//! go through `from_name`, which never fails: unknown names fall back to the
//! default variant with a warning.

use serde::{Deserialize, Serialize};

/// Named static tile arrangement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutVariant {
    /// Stepped pyramid with head, tail and legs.
    #[default]
    Turtle,
    /// Central column with two stepped wings.
    Butterfly,
    /// Perimeter walls around a low courtyard.
    Fortress,
}

impl LayoutVariant {
    /// Every built-in layout.
    pub const ALL: [LayoutVariant; 3] = [
        LayoutVariant::Turtle,
        LayoutVariant::Butterfly,
        LayoutVariant::Fortress,
    ];

    /// Lowercase name used by menus and saved settings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LayoutVariant::Turtle => "turtle",
            LayoutVariant::Butterfly => "butterfly",
            LayoutVariant::Fortress => "fortress",
        }
    }

    /// Look up a layout by name (case-insensitive).
    ///
    /// Unknown names fall back to the default layout.
    ///
    /// ```
    /// use baraja::core::LayoutVariant;
    ///
    /// assert_eq!(LayoutVariant::from_name("Butterfly"), LayoutVariant::Butterfly);
    /// assert_eq!(LayoutVariant::from_name("dragon"), LayoutVariant::Turtle);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_else(|| {
                log::warn!("Unknown layout {:?}, falling back to {}", name, Self::default());
                Self::default()
            })
    }
}

impl std::fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Difficulty profile: how wide the face pool of the deck is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Two suits, short rank range, no court faces.
    Easy,
    /// Three suits, full ranks, knights and jokers.
    #[default]
    Medium,
    /// Three suits, full ranks, every court category.
    Hard,
}

impl Difficulty {
    /// Every difficulty profile.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase name used by menus and saved settings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Look up a difficulty by name (case-insensitive).
    ///
    /// Unknown names fall back to the default difficulty.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_else(|| {
                log::warn!("Unknown difficulty {:?}, falling back to {}", name, Self::default());
                Self::default()
            })
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Points awarded for each matched pair.
    pub match_points: u32,

    /// Points deducted for each hint (score never drops below 0).
    pub hint_cost: u32,

    /// Shuffle actions allowed per game.
    /// Shuffling with none left is a no-op.
    pub max_shuffles: u32,

    /// How many reshuffles a single shuffle action may try
    /// before giving up on finding a playable board.
    pub shuffle_attempts: u32,

    /// Maximum number of tiles dealt onto a board.
    /// Layouts with more slots leave the excess slots empty.
    pub deck_budget: usize,

    /// Seed for the session RNG.
    /// Same seed produces the same sequence of deals.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            match_points: 100,
            hint_cost: 50,
            max_shuffles: 3,
            shuffle_attempts: 100,
            deck_budget: 144,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Use a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use custom match points and hint cost.
    pub fn with_scoring(mut self, match_points: u32, hint_cost: u32) -> Self {
        self.match_points = match_points;
        self.hint_cost = hint_cost;
        self
    }

    /// Use a custom shuffle allowance.
    pub fn with_max_shuffles(mut self, max_shuffles: u32) -> Self {
        self.max_shuffles = max_shuffles;
        self
    }

    /// Use a custom retry bound for shuffle-until-playable.
    pub fn with_shuffle_attempts(mut self, attempts: u32) -> Self {
        self.shuffle_attempts = attempts;
        self
    }

    /// Use a custom deck budget.
    pub fn with_deck_budget(mut self, budget: usize) -> Self {
        self.deck_budget = budget;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.match_points, 100);
        assert_eq!(config.hint_cost, 50);
        assert_eq!(config.max_shuffles, 3);
        assert_eq!(config.shuffle_attempts, 100);
        assert_eq!(config.deck_budget, 144);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_seed(123)
            .with_scoring(10, 5)
            .with_max_shuffles(0)
            .with_shuffle_attempts(7)
            .with_deck_budget(20);

        assert_eq!(config.seed, 123);
        assert_eq!(config.match_points, 10);
        assert_eq!(config.hint_cost, 5);
        assert_eq!(config.max_shuffles, 0);
        assert_eq!(config.shuffle_attempts, 7);
        assert_eq!(config.deck_budget, 20);
    }

    #[test]
    fn test_layout_names() {
        for variant in LayoutVariant::ALL {
            assert_eq!(LayoutVariant::from_name(variant.name()), variant);
        }
        assert_eq!(LayoutVariant::from_name("  FORTRESS "), LayoutVariant::Fortress);
        assert_eq!(LayoutVariant::from_name("pagoda"), LayoutVariant::Turtle);
        assert_eq!(LayoutVariant::from_name(""), LayoutVariant::Turtle);
    }

    #[test]
    fn test_difficulty_names() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(difficulty.name()), difficulty);
        }
        assert_eq!(Difficulty::from_name("Hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Medium);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
