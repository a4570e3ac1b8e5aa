//! Special-round modifiers.

use serde::{Deserialize, Serialize};

/// Temporary rule change applied to exactly one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialModifier {
    /// Ordinary round.
    #[default]
    None,
    /// Winner scores 2 instead of 1.
    Double,
    /// Dominance is inverted: the standard loser wins.
    Reverse,
    /// Winner scores 1 and the loser drops 1, floored at zero.
    Steal,
}

impl SpecialModifier {
    /// Pool a special round is drawn from.
    pub const SPECIALS: [SpecialModifier; 3] = [
        SpecialModifier::Double,
        SpecialModifier::Reverse,
        SpecialModifier::Steal,
    ];

    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self, SpecialModifier::None)
    }

    /// Banner title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            SpecialModifier::None => "",
            SpecialModifier::Double => "Double Bonus Round!",
            SpecialModifier::Reverse => "Reversed Rules!",
            SpecialModifier::Steal => "Heist Round!",
        }
    }

    /// Banner description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            SpecialModifier::None => "",
            SpecialModifier::Double => "The winner earns 2 points",
            SpecialModifier::Reverse => "The weak beat the strong",
            SpecialModifier::Steal => "The winner steals a point from the loser",
        }
    }
}

impl std::fmt::Display for SpecialModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpecialModifier::None => "NONE",
            SpecialModifier::Double => "DOUBLE",
            SpecialModifier::Reverse => "REVERSE",
            SpecialModifier::Steal => "STEAL",
        };
        f.write_str(name)
    }
}
