use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon { min_damage: i32, max_damage: i32 },
    HealingPotion { heal_amount: i32 },
    Misc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub kind: ItemKind,
}

impl Item {
    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    /// Entering is gated on holding this item (quantity irrelevant).
    #[serde(default)]
    pub required_item: Option<ItemId>,
    /// Quest offered to players passing through.
    #[serde(default)]
    pub quest: Option<QuestId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestItemRequirement {
    pub item: ItemId,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub name: String,
    pub description: String,
    pub reward_experience: i32,
    pub reward_gold: i32,
    #[serde(default)]
    pub reward_item: Option<ItemId>,
    #[serde(default)]
    pub completion_items: Vec<QuestItemRequirement>,
}

/// Read-only id-keyed definitions of everything the player state refers to.
///
/// Player code holds ids into this catalog and never mutates entries; the
/// catalog is built once at startup from the built-in world or a YAML asset.
#[derive(Debug, Default, Clone)]
pub struct WorldCatalog {
    items: HashMap<ItemId, Item>,
    locations: HashMap<LocationId, Location>,
    quests: HashMap<QuestId, Quest>,
}

impl WorldCatalog {
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    pub fn quest(&self, id: QuestId) -> Option<&Quest> {
        self.quests.get(&id)
    }

    pub fn insert_item(&mut self, item: Item) -> Result<(), String> {
        if self.items.contains_key(&item.id) {
            return Err(format!("item {} already exists in catalog", item.id.0));
        }
        self.items.insert(item.id, item);
        Ok(())
    }

    pub fn insert_location(&mut self, location: Location) -> Result<(), String> {
        if self.locations.contains_key(&location.id) {
            return Err(format!("location {} already exists in catalog", location.id.0));
        }
        self.locations.insert(location.id, location);
        Ok(())
    }

    pub fn insert_quest(&mut self, quest: Quest) -> Result<(), String> {
        if self.quests.contains_key(&quest.id) {
            return Err(format!("quest {} already exists in catalog", quest.id.0));
        }
        self.quests.insert(quest.id, quest);
        Ok(())
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn quest_count(&self) -> usize {
        self.quests.len()
    }
}
