//! Items and the body-part equipment slots they occupy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::ItemId;

/// A carryable object. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub svg: String,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        svg: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            description: description.into(),
            svg: svg.into(),
        }
    }
}

/// The three equipment slots a player has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySlot {
    Hands,
    Feet,
    Body,
}

impl BodySlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hands => "hands",
            Self::Feet => "feet",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for BodySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodySlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hands" => Ok(Self::Hands),
            "feet" => Ok(Self::Feet),
            "body" => Ok(Self::Body),
            other => Err(DomainError::parse(format!("Unknown body slot: {other}"))),
        }
    }
}

/// Equipment worn or held by a player, one optional item per slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyParts {
    pub hands: Option<Item>,
    pub feet: Option<Item>,
    pub body: Option<Item>,
}

impl BodyParts {
    pub fn get(&self, slot: BodySlot) -> Option<&Item> {
        match slot {
            BodySlot::Hands => self.hands.as_ref(),
            BodySlot::Feet => self.feet.as_ref(),
            BodySlot::Body => self.body.as_ref(),
        }
    }

    /// Place an item into a slot, returning whatever it displaced.
    pub fn equip(&mut self, slot: BodySlot, item: Item) -> Option<Item> {
        let target = match slot {
            BodySlot::Hands => &mut self.hands,
            BodySlot::Feet => &mut self.feet,
            BodySlot::Body => &mut self.body,
        };
        target.replace(item)
    }

    pub fn unequip(&mut self, slot: BodySlot) -> Option<Item> {
        match slot {
            BodySlot::Hands => self.hands.take(),
            BodySlot::Feet => self.feet.take(),
            BodySlot::Body => self.body.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> Item {
        Item::new("rusty sword", "A notched old blade.", "<svg/>")
    }

    #[test]
    fn equip_into_empty_slot() {
        let mut parts = BodyParts::default();
        assert!(parts.equip(BodySlot::Hands, sword()).is_none());
        assert_eq!(
            parts.get(BodySlot::Hands).map(|i| i.name.as_str()),
            Some("rusty sword")
        );
    }

    #[test]
    fn equip_displaces_previous_item() {
        let mut parts = BodyParts::default();
        parts.equip(BodySlot::Hands, sword());
        let staff = Item::new("oak staff", "Sturdy and knotted.", "<svg/>");
        let displaced = parts.equip(BodySlot::Hands, staff);
        assert_eq!(displaced.map(|i| i.name), Some("rusty sword".to_string()));
        assert_eq!(
            parts.get(BodySlot::Hands).map(|i| i.name.as_str()),
            Some("oak staff")
        );
    }

    #[test]
    fn slot_parse_round_trip() {
        for slot in [BodySlot::Hands, BodySlot::Feet, BodySlot::Body] {
            assert_eq!(slot.as_str().parse::<BodySlot>(), Ok(slot));
        }
        assert!("head".parse::<BodySlot>().is_err());
    }
}
