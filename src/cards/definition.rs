//! Card definitions - static card data.
//!
//! A `Card` is supplied by the catalog and never changes once loaded.
//! Deck entries and saved decks hold their own copies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a card in the catalog (e.g. `"sv1-001"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Energy symbols paid for an attack, in printed order.
pub type EnergyCost = SmallVec<[String; 4]>;

/// One attack printed on a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    pub cost: EnergyCost,
    pub damage: u32,
    /// Free-text rules effect. Empty when the attack only deals damage.
    #[serde(default)]
    pub effect: String,
}

impl Attack {
    /// Create an attack with no effect text.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, cost: I, damage: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            cost: cost.into_iter().map(Into::into).collect(),
            damage,
            effect: String::new(),
        }
    }

    /// Set the effect text (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = effect.into();
        self
    }
}

/// Static card record as published in the catalog document.
///
/// JSON keys are camelCase (`imageUrl`), and the card type is stored under
/// `type`.
///
/// ## Example
///
/// ```
/// use deck_builder::cards::{Attack, Card};
///
/// let card = Card::new("sv1-025", "Pikachu")
///     .with_type("Lightning")
///     .with_hp(60)
///     .with_attack(Attack::new("Thunder Jolt", ["Lightning"], 30));
///
/// assert_eq!(card.id.as_str(), "sv1-025");
/// assert_eq!(card.attacks[0].damage, 30);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub hp: u32,
    pub stage: String,
    #[serde(default)]
    pub attacks: Vec<Attack>,
    #[serde(default)]
    pub weakness: String,
    #[serde(default)]
    pub resistance: String,
    pub retreat: u32,
    pub image_url: String,
    pub regulation: String,
}

impl Card {
    /// Create a card with the given id and name and blank printed data.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type: String::new(),
            hp: 0,
            stage: String::new(),
            attacks: Vec::new(),
            weakness: String::new(),
            resistance: String::new(),
            retreat: 0,
            image_url: String::new(),
            regulation: String::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = card_type.into();
        self
    }

    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp;
        self
    }

    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    /// Append an attack (builder pattern).
    #[must_use]
    pub fn with_attack(mut self, attack: Attack) -> Self {
        self.attacks.push(attack);
        self
    }

    #[must_use]
    pub fn with_weakness(mut self, weakness: impl Into<String>) -> Self {
        self.weakness = weakness.into();
        self
    }

    #[must_use]
    pub fn with_resistance(mut self, resistance: impl Into<String>) -> Self {
        self.resistance = resistance.into();
        self
    }

    #[must_use]
    pub fn with_retreat(mut self, retreat: u32) -> Self {
        self.retreat = retreat;
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    #[must_use]
    pub fn with_regulation(mut self, regulation: impl Into<String>) -> Self {
        self.regulation = regulation.into();
        self
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub(crate) fn name_contains_lower(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
