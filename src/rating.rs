//! Result screen rating: the final score folded onto a one to five star
//! scale, with the matching headline.

use crate::config::MAX_STARS;

#[cfg(feature = "std")]
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Tier {
    NeedsWork,
    Good,
    GoodJob,
    Excellent,
}

impl Tier {
    pub fn from_stars(stars: u32) -> Self {
        match stars {
            0..=2 => Tier::NeedsWork,
            3 => Tier::Good,
            4 => Tier::GoodJob,
            _ => Tier::Excellent,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Tier::NeedsWork => "Not up the mark",
            Tier::Good => "Good",
            Tier::GoodJob => "Good Job",
            Tier::Excellent => "Excellent",
        }
    }

    pub fn subtext(&self) -> &'static str {
        match self {
            Tier::NeedsWork => "You can do it better.",
            Tier::Good => "You can do better.",
            Tier::GoodJob | Tier::Excellent => {
                "You have learned important financial and insurance concepts."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize))]
pub struct Rating {
    pub stars: u32,
    pub tier: Tier,
}

impl Rating {
    /// Scores above the star range are divided by the per-round award and
    /// rounded half up; anything is then clamped to `1..=MAX_STARS`.
    pub fn from_score(score: u32, award: u32) -> Self {
        let raw = if score > MAX_STARS && award > 0 {
            (score + award / 2) / award
        } else {
            score
        };
        let stars = raw.clamp(1, MAX_STARS);
        Rating {
            stars,
            tier: Tier::from_stars(stars),
        }
    }
}
