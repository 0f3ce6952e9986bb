mod config;
pub mod entities;
pub mod persistence;
pub mod telemetry;
pub mod world;

pub use entities::events::{FieldEvents, PlayerField};
pub use entities::inventory::{Inventory, InventoryEntry};
pub use entities::player::Player;
pub use entities::quest_log::{QuestLog, QuestLogEntry};
pub use persistence::record::{player_from_record, player_to_record, LoadOutcome};
pub use persistence::store::SaveStore;
pub use world::catalog::{
    Item, ItemId, ItemKind, Location, LocationId, Quest, QuestId, QuestItemRequirement,
    WorldCatalog,
};

pub fn run(args: &[String]) -> Result<(), String> {
    let config = config::AppConfig::from_args(args)?;
    telemetry::logging::init(&config.root)?;
    let catalog = world::assets::load_or_default(&config.root)?;
    telemetry::logging::log_game(&format!(
        "world catalog ready: items={}, locations={}, quests={}",
        catalog.item_count(),
        catalog.location_count(),
        catalog.quest_count()
    ));

    let store = SaveStore::with_file(config.root.join("save"), config.save_file.clone());
    let player = match store.load_player()? {
        Some(LoadOutcome::Loaded(player)) => {
            telemetry::logging::log_game("player save loaded");
            player
        }
        Some(LoadOutcome::Defaulted { player, reason }) => {
            telemetry::logging::log_error(&format!(
                "player save unreadable, starting over: {}",
                reason
            ));
            eprintln!("adventure: save unreadable ({}), starting a new game", reason);
            player
        }
        None => {
            telemetry::logging::log_game("no player save, starting a new game");
            Player::create_default()
        }
    };

    print_status(&player, &catalog)?;

    store.save_player(&player)?;
    telemetry::logging::log_game(&format!(
        "player save written to {}",
        store.save_path().display()
    ));
    Ok(())
}

fn print_status(player: &Player, catalog: &WorldCatalog) -> Result<(), String> {
    let location = catalog
        .location(player.current_location)
        .ok_or_else(|| format!("location {} missing from catalog", player.current_location.0))?;

    println!("adventure: player status");
    println!(
        "- hit points: {}/{}",
        player.current_hit_points(),
        player.maximum_hit_points()
    );
    println!("- gold: {}", player.gold());
    println!(
        "- experience: {} (level {})",
        player.experience_points(),
        player.level()
    );
    println!("- location: {}", location.name);
    if let Some(weapon) = player.current_weapon {
        let item = catalog
            .item(weapon)
            .ok_or_else(|| format!("item {} missing from catalog", weapon.0))?;
        println!("- weapon: {}", item.name);
    }
    println!("- inventory:");
    for entry in player.inventory.entries() {
        let item = catalog
            .item(entry.item)
            .ok_or_else(|| format!("item {} missing from catalog", entry.item.0))?;
        println!("  {} x{}", item.name, entry.quantity);
    }
    println!("- quests:");
    for entry in player.quest_log.entries() {
        let quest = catalog
            .quest(entry.quest)
            .ok_or_else(|| format!("quest {} missing from catalog", entry.quest.0))?;
        println!(
            "  {} [{}]",
            quest.name,
            if entry.completed { "done" } else { "open" }
        );
    }
    Ok(())
}
