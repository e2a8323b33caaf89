//! Tile faces and the match rule.
//!
//! A face is the `(suit, rank)` identity of a tile, independent of which
//! physical tile carries it. Faces match when their suits' `MatchClass`
//! says so:
//!
//! | suit | class | matches |
//! |---|---|---|
//! | Coins, Cups, Swords | `Exact` | same suit and rank |
//! | Jack, King | `Exact` | same suit and rank |
//! | Knight | `AnyInSuit` | any other Knight |
//! | Joker | `AnyInSuit` | any other Joker |
//!
//! ```
//! use baraja::tiles::{Face, Suit};
//!
//! assert!(Face::new(Suit::Cups, 3).matches(&Face::new(Suit::Cups, 3)));
//! assert!(!Face::new(Suit::Cups, 3).matches(&Face::new(Suit::Coins, 3)));
//!
//! // Knights match each other regardless of rank
//! assert!(Face::new(Suit::Knight, 1).matches(&Face::new(Suit::Knight, 4)));
//! assert!(!Face::new(Suit::Knight, 1).matches(&Face::new(Suit::Joker, 1)));
//! ```

use serde::{Deserialize, Serialize};

/// Highest rank of the numbered suits.
pub const MAX_PIP_RANK: u8 = 9;

/// Highest rank (sub-value) of the court categories.
pub const MAX_COURT_RANK: u8 = 4;

/// How faces of a suit are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchClass {
    /// Suit and rank must both be equal.
    Exact,
    /// Any two faces of the suit match, whatever their rank.
    AnyInSuit,
}

/// Closed set of tile categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Coins,
    Cups,
    Swords,
    Knight,
    Joker,
    Jack,
    King,
}

impl Suit {
    /// The numbered suits, in pool order.
    pub const PIPS: [Suit; 3] = [Suit::Coins, Suit::Cups, Suit::Swords];

    /// Match predicate table.
    #[must_use]
    pub const fn match_class(self) -> MatchClass {
        match self {
            Suit::Knight | Suit::Joker => MatchClass::AnyInSuit,
            Suit::Coins | Suit::Cups | Suit::Swords | Suit::Jack | Suit::King => MatchClass::Exact,
        }
    }

    /// Whether this is a numbered suit.
    #[must_use]
    pub const fn is_pip(self) -> bool {
        matches!(self, Suit::Coins | Suit::Cups | Suit::Swords)
    }

    /// Highest rank a face of this suit can carry.
    #[must_use]
    pub const fn max_rank(self) -> u8 {
        if self.is_pip() {
            MAX_PIP_RANK
        } else {
            MAX_COURT_RANK
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// The `(suit, rank)` identity of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Face {
    pub suit: Suit,
    pub rank: u8,
}

impl Face {
    /// Create a face.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Whether two faces can be removed together.
    ///
    /// Symmetric. The wildcard categories are checked before the exact
    /// comparison.
    #[must_use]
    pub fn matches(&self, other: &Face) -> bool {
        if self.suit == other.suit && self.suit.match_class() == MatchClass::AnyInSuit {
            return true;
        }
        self == other
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}
