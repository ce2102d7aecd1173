//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its id,
//! display name, optional image and text payload, and whether it is a
//! special (gated) card.
//!
//! Whether a card has been opened is runtime state and lives in `Card`.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

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

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use gift_deck::cards::CardDefinition;
///
/// let finale = CardDefinition::new("5", "Grand Prize")
///     .with_image("/img/prize.png")
///     .with_text("You found it!")
///     .special();
///
/// assert!(finale.special);
/// assert_eq!(finale.image.as_deref(), Some("/img/prize.png"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Image reference (path or URL), resolved by the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Text revealed when the card is opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Special cards stay locked until every other card is opened.
    #[serde(default)]
    pub special: bool,
}

impl CardDefinition {
    /// Create a new, non-special card definition.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
            text: None,
            special: false,
        }
    }

    /// Set the image reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the text payload (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Mark as a special card (builder pattern).
    #[must_use]
    pub fn special(mut self) -> Self {
        self.special = true;
        self
    }
}
