//! The player entity.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PlayerId;
use crate::item::{BodyParts, BodySlot, Item};
use crate::world::GridPos;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: GridPos,
    pub body_parts: BodyParts,
    pub inventory: Vec<Item>,
}

impl Player {
    /// A fresh player at the given spawn. The display name is derived
    /// from the client id prefix.
    pub fn new(id: PlayerId, position: GridPos) -> Self {
        let name = format!("Player {}", id.short());
        Self {
            id,
            name,
            position,
            body_parts: BodyParts::default(),
            inventory: Vec::new(),
        }
    }

    pub fn take_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Remove a named item from the inventory, case-insensitively.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let idx = self
            .inventory
            .iter()
            .position(|i| i.name.eq_ignore_ascii_case(name))?;
        Some(self.inventory.remove(idx))
    }

    /// Move a named item from the inventory into a body slot. An item
    /// already in the slot goes back to the inventory.
    pub fn equip(&mut self, slot: BodySlot, name: &str) -> Result<(), DomainError> {
        let item = self
            .remove_item(name)
            .ok_or_else(|| DomainError::not_found("Item", name))?;
        if let Some(displaced) = self.body_parts.equip(slot, item) {
            self.inventory.push(displaced);
        }
        Ok(())
    }
}
