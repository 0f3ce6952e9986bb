use crate::world::catalog::{
    Item,
    ItemId,
    ItemKind,
    Location,
    LocationId,
    Quest,
    QuestId,
    QuestItemRequirement,
    WorldCatalog,
};

pub const ITEM_ID_RUSTY_SWORD: ItemId = ItemId(1);
pub const ITEM_ID_RAT_TAIL: ItemId = ItemId(2);
pub const ITEM_ID_PIECE_OF_FUR: ItemId = ItemId(3);
pub const ITEM_ID_SNAKE_FANG: ItemId = ItemId(4);
pub const ITEM_ID_SNAKESKIN: ItemId = ItemId(5);
pub const ITEM_ID_CLUB: ItemId = ItemId(6);
pub const ITEM_ID_HEALING_POTION: ItemId = ItemId(7);
pub const ITEM_ID_SPIDER_FANG: ItemId = ItemId(8);
pub const ITEM_ID_SPIDER_SILK: ItemId = ItemId(9);
pub const ITEM_ID_ADVENTURER_PASS: ItemId = ItemId(10);

pub const LOCATION_ID_HOME: LocationId = LocationId(1);
pub const LOCATION_ID_TOWN_SQUARE: LocationId = LocationId(2);
pub const LOCATION_ID_GUARD_POST: LocationId = LocationId(3);
pub const LOCATION_ID_ALCHEMIST_HUT: LocationId = LocationId(4);
pub const LOCATION_ID_ALCHEMISTS_GARDEN: LocationId = LocationId(5);
pub const LOCATION_ID_FARMHOUSE: LocationId = LocationId(6);
pub const LOCATION_ID_FARM_FIELD: LocationId = LocationId(7);
pub const LOCATION_ID_BRIDGE: LocationId = LocationId(8);
pub const LOCATION_ID_SPIDER_FOREST: LocationId = LocationId(9);

pub const QUEST_ID_CLEAR_ALCHEMIST_GARDEN: QuestId = QuestId(1);
pub const QUEST_ID_CLEAR_FARMERS_FIELD: QuestId = QuestId(2);

/// Registers the built-in starter world into an empty catalog.
pub fn register_default_world(catalog: &mut WorldCatalog) -> Result<(), String> {
    register_items(catalog)?;
    register_quests(catalog)?;
    register_locations(catalog)?;
    Ok(())
}

/// Convenience for callers that want the built-in world and nothing else.
pub fn default_catalog() -> Result<WorldCatalog, String> {
    let mut catalog = WorldCatalog::default();
    register_default_world(&mut catalog)?;
    Ok(catalog)
}

fn register_items(catalog: &mut WorldCatalog) -> Result<(), String> {
    let items = [
        Item {
            id: ITEM_ID_RUSTY_SWORD,
            name: "Rusty sword".to_string(),
            kind: ItemKind::Weapon {
                min_damage: 0,
                max_damage: 5,
            },
        },
        Item {
            id: ITEM_ID_RAT_TAIL,
            name: "Rat tail".to_string(),
            kind: ItemKind::Misc,
        },
        Item {
            id: ITEM_ID_PIECE_OF_FUR,
            name: "Piece of fur".to_string(),
            kind: ItemKind::Misc,
        },
        Item {
            id: ITEM_ID_SNAKE_FANG,
            name: "Snake fang".to_string(),
            kind: ItemKind::Misc,
        },
        Item {
            id: ITEM_ID_SNAKESKIN,
            name: "Snakeskin".to_string(),
            kind: ItemKind::Misc,
        },
        Item {
            id: ITEM_ID_CLUB,
            name: "Club".to_string(),
            kind: ItemKind::Weapon {
                min_damage: 3,
                max_damage: 10,
            },
        },
        Item {
            id: ITEM_ID_HEALING_POTION,
            name: "Healing potion".to_string(),
            kind: ItemKind::HealingPotion { heal_amount: 5 },
        },
        Item {
            id: ITEM_ID_SPIDER_FANG,
            name: "Spider fang".to_string(),
            kind: ItemKind::Misc,
        },
        Item {
            id: ITEM_ID_SPIDER_SILK,
            name: "Spider silk".to_string(),
            kind: ItemKind::Misc,
        },
        Item {
            id: ITEM_ID_ADVENTURER_PASS,
            name: "Adventurer pass".to_string(),
            kind: ItemKind::Misc,
        },
    ];
    for item in items {
        catalog.insert_item(item)?;
    }
    Ok(())
}

fn register_quests(catalog: &mut WorldCatalog) -> Result<(), String> {
    catalog.insert_quest(Quest {
        id: QUEST_ID_CLEAR_ALCHEMIST_GARDEN,
        name: "Clear the alchemist's garden".to_string(),
        description: "Kill the rats in the alchemist's garden and bring back 3 rat tails."
            .to_string(),
        reward_experience: 20,
        reward_gold: 10,
        reward_item: Some(ITEM_ID_HEALING_POTION),
        completion_items: vec![QuestItemRequirement {
            item: ITEM_ID_RAT_TAIL,
            quantity: 3,
        }],
    })?;
    catalog.insert_quest(Quest {
        id: QUEST_ID_CLEAR_FARMERS_FIELD,
        name: "Clear the farmer's field".to_string(),
        description: "Kill the snakes in the farmer's field and bring back 3 snake fangs."
            .to_string(),
        reward_experience: 20,
        reward_gold: 20,
        reward_item: Some(ITEM_ID_ADVENTURER_PASS),
        completion_items: vec![QuestItemRequirement {
            item: ITEM_ID_SNAKE_FANG,
            quantity: 3,
        }],
    })?;
    Ok(())
}

fn register_locations(catalog: &mut WorldCatalog) -> Result<(), String> {
    let locations = [
        Location {
            id: LOCATION_ID_HOME,
            name: "Home".to_string(),
            description: "Your house. You really need to clean up the place.".to_string(),
            required_item: None,
            quest: None,
        },
        Location {
            id: LOCATION_ID_TOWN_SQUARE,
            name: "Town square".to_string(),
            description: "You see a fountain.".to_string(),
            required_item: None,
            quest: None,
        },
        Location {
            id: LOCATION_ID_GUARD_POST,
            name: "Guard post".to_string(),
            description: "There is a large, tough-looking guard here.".to_string(),
            required_item: Some(ITEM_ID_ADVENTURER_PASS),
            quest: None,
        },
        Location {
            id: LOCATION_ID_ALCHEMIST_HUT,
            name: "Alchemist's hut".to_string(),
            description: "There are many strange plants on the shelves.".to_string(),
            required_item: None,
            quest: Some(QUEST_ID_CLEAR_ALCHEMIST_GARDEN),
        },
        Location {
            id: LOCATION_ID_ALCHEMISTS_GARDEN,
            name: "Alchemist's garden".to_string(),
            description: "Many plants are growing here.".to_string(),
            required_item: None,
            quest: None,
        },
        Location {
            id: LOCATION_ID_FARMHOUSE,
            name: "Farmhouse".to_string(),
            description: "There is a small farmhouse, with a farmer in front.".to_string(),
            required_item: None,
            quest: Some(QUEST_ID_CLEAR_FARMERS_FIELD),
        },
        Location {
            id: LOCATION_ID_FARM_FIELD,
            name: "Farmer's field".to_string(),
            description: "You see rows of vegetables growing here.".to_string(),
            required_item: None,
            quest: None,
        },
        Location {
            id: LOCATION_ID_BRIDGE,
            name: "Bridge".to_string(),
            description: "A stone bridge crosses a wide river.".to_string(),
            required_item: None,
            quest: None,
        },
        Location {
            id: LOCATION_ID_SPIDER_FOREST,
            name: "Forest".to_string(),
            description: "You see spider webs covering the trees in this forest.".to_string(),
            required_item: None,
            quest: None,
        },
    ];
    for location in locations {
        catalog.insert_location(location)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_world_registers_cleanly() {
        let catalog = default_catalog().expect("default world");
        assert_eq!(catalog.item_count(), 10);
        assert_eq!(catalog.location_count(), 9);
        assert_eq!(catalog.quest_count(), 2);
    }

    #[test]
    fn starter_references_resolve() {
        let catalog = default_catalog().expect("default world");
        let sword = catalog.item(ITEM_ID_RUSTY_SWORD).expect("rusty sword");
        assert!(sword.is_weapon());
        assert!(catalog.location(LOCATION_ID_HOME).is_some());
    }

    #[test]
    fn quest_rewards_point_at_catalog_items() {
        let catalog = default_catalog().expect("default world");
        for quest_id in [QUEST_ID_CLEAR_ALCHEMIST_GARDEN, QUEST_ID_CLEAR_FARMERS_FIELD] {
            let quest = catalog.quest(quest_id).expect("quest");
            let reward = quest.reward_item.expect("reward item");
            assert!(catalog.item(reward).is_some());
            for requirement in &quest.completion_items {
                assert!(catalog.item(requirement.item).is_some());
            }
        }
    }
}
