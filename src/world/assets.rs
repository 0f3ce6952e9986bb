use crate::world::catalog::{Item, Location, Quest, WorldCatalog};
use crate::world::defaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CATALOG_FILE_NAME: &str = "world.yaml";

/// On-disk shape of a world definition. Lists rather than maps so the file
/// stays diff-friendly; id uniqueness is checked on insert.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub quests: Vec<Quest>,
}

pub fn load_catalog(path: &Path) -> Result<WorldCatalog, String> {
    let data = fs::read_to_string(path)
        .map_err(|err| format!("catalog read failed for {}: {}", path.display(), err))?;
    parse_catalog(&data)
        .map_err(|err| format!("catalog load failed for {}: {}", path.display(), err))
}

/// `<root>/world.yaml` when present, the built-in world otherwise.
pub fn load_or_default(root: &Path) -> Result<WorldCatalog, String> {
    let path = root.join(CATALOG_FILE_NAME);
    if path.exists() {
        load_catalog(&path)
    } else {
        defaults::default_catalog()
    }
}

fn parse_catalog(data: &str) -> Result<WorldCatalog, String> {
    let file: CatalogFile =
        serde_yaml::from_str(data).map_err(|err| format!("catalog parse failed: {}", err))?;
    catalog_from_file(file)
}

fn catalog_from_file(file: CatalogFile) -> Result<WorldCatalog, String> {
    let mut catalog = WorldCatalog::default();
    for item in file.items {
        catalog.insert_item(item)?;
    }
    for location in file.locations {
        catalog.insert_location(location)?;
    }
    for quest in file.quests {
        catalog.insert_quest(quest)?;
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::catalog::{ItemId, ItemKind, LocationId};

    const SAMPLE: &str = r#"
items:
  - id: 1
    name: Rusty sword
    kind:
      Weapon:
        min_damage: 0
        max_damage: 5
  - id: 7
    name: Healing potion
    kind:
      HealingPotion:
        heal_amount: 5
  - id: 10
    name: Adventurer pass
    kind: Misc
locations:
  - id: 1
    name: Home
    description: Your house.
  - id: 3
    name: Guard post
    description: A guard blocks the road.
    required_item: 10
quests:
  - id: 1
    name: Clear the garden
    description: Bring back 3 rat tails.
    reward_experience: 20
    reward_gold: 10
    reward_item: 7
    completion_items:
      - item: 2
        quantity: 3
"#;

    #[test]
    fn parses_a_full_catalog_document() {
        let catalog = parse_catalog(SAMPLE).expect("catalog");
        assert_eq!(catalog.item_count(), 3);
        assert_eq!(catalog.location_count(), 2);
        assert_eq!(catalog.quest_count(), 1);

        let sword = catalog.item(ItemId(1)).expect("sword");
        assert_eq!(
            sword.kind,
            ItemKind::Weapon {
                min_damage: 0,
                max_damage: 5
            }
        );
        let post = catalog.location(LocationId(3)).expect("guard post");
        assert_eq!(post.required_item, Some(ItemId(10)));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = parse_catalog("items: []\n").expect("catalog");
        assert_eq!(catalog.item_count(), 0);
        assert_eq!(catalog.location_count(), 0);
        assert_eq!(catalog.quest_count(), 0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doc = r#"
locations:
  - id: 1
    name: Home
    description: a
  - id: 1
    name: Also home
    description: b
"#;
        let err = parse_catalog(doc).expect_err("duplicate");
        assert_eq!(err, "location 1 already exists in catalog");
    }

    #[test]
    fn malformed_yaml_reports_a_parse_error() {
        let err = parse_catalog("items: [oops").expect_err("malformed");
        assert!(err.starts_with("catalog parse failed:"));
    }
}
