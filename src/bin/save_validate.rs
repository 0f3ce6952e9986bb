use adventure::{LoadOutcome, SaveStore};
use std::path::Path;

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        return Err("usage: save_validate <data-root>".to_string());
    }

    let store = SaveStore::from_root(Path::new(&args[1]));
    match store.load_player()? {
        None => {
            println!("no player save at {}", store.save_path().display());
        }
        Some(LoadOutcome::Loaded(player)) => {
            println!("save ok: {}", store.save_path().display());
            println!(
                "- hit points {}/{}, gold {}, experience {} (level {})",
                player.current_hit_points(),
                player.maximum_hit_points(),
                player.gold(),
                player.experience_points(),
                player.level()
            );
            println!(
                "- inventory entries: {}, quests: {}",
                player.inventory.len(),
                player.quest_log.len()
            );
        }
        Some(LoadOutcome::Defaulted { reason, .. }) => {
            return Err(format!(
                "save malformed at {}: {}",
                store.save_path().display(),
                reason
            ));
        }
    }
    Ok(())
}
