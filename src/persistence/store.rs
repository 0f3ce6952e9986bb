use crate::entities::player::Player;
use crate::persistence::record::{player_from_record, player_to_record, LoadOutcome};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SAVE_FILE: &str = "player.xml";

/// Reads and writes the player record under a save directory. The previous
/// save is copied aside before every write so a bad write never destroys
/// the only copy.
#[derive(Debug, Clone)]
pub struct SaveStore {
    root: PathBuf,
    file_name: String,
}

impl SaveStore {
    pub fn from_root(root: &Path) -> Self {
        Self::with_file(root.join("save"), DEFAULT_SAVE_FILE)
    }

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_file(root, DEFAULT_SAVE_FILE)
    }

    pub fn with_file(root: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            file_name: file_name.into(),
        }
    }

    pub fn save_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn backup_path(&self) -> PathBuf {
        self.root.join(format!("{}#", self.file_name))
    }

    /// `Ok(None)` when no save exists yet; a present but malformed save
    /// comes back as a `Defaulted` outcome, not an error.
    pub fn load_player(&self) -> Result<Option<LoadOutcome>, String> {
        let path = self.save_path();
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(format!(
                    "player save read failed for {}: {}",
                    path.display(),
                    err
                ))
            }
        };
        Ok(Some(player_from_record(&data)))
    }

    pub fn save_player(&self, player: &Player) -> Result<(), String> {
        fs::create_dir_all(&self.root).map_err(|err| {
            format!(
                "player save dir create failed for {}: {}",
                self.root.display(),
                err
            )
        })?;
        let path = self.save_path();
        let backup = self.backup_path();
        if path.exists() {
            fs::copy(&path, &backup).map_err(|err| {
                format!(
                    "player save backup failed for {}: {}",
                    backup.display(),
                    err
                )
            })?;
        }
        fs::write(&path, player_to_record(player))
            .map_err(|err| format!("player save write failed for {}: {}", path.display(), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::defaults::{ITEM_ID_RAT_TAIL, LOCATION_ID_BRIDGE};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_store() -> SaveStore {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        let root = std::env::temp_dir().join(format!("adventure-save-test-{}", suffix));
        SaveStore::new(root)
    }

    fn cleanup(store: &SaveStore) {
        let _ = fs::remove_dir_all(&store.root);
    }

    #[test]
    fn save_and_load_player_roundtrip() {
        let store = temp_store();
        let mut player = Player::create_default();
        player.add_experience(150);
        player.add_gold(30);
        player.current_location = LOCATION_ID_BRIDGE;
        player.add_item_to_inventory(ITEM_ID_RAT_TAIL);

        store.save_player(&player).expect("save");
        let outcome = store.load_player().expect("load").expect("present");
        let loaded = match outcome {
            LoadOutcome::Loaded(loaded) => loaded,
            LoadOutcome::Defaulted { reason, .. } => panic!("defaulted: {}", reason),
        };

        assert_eq!(loaded.experience_points(), player.experience_points());
        assert_eq!(loaded.gold(), player.gold());
        assert_eq!(loaded.current_location, player.current_location);
        assert_eq!(loaded.inventory, player.inventory);

        cleanup(&store);
    }

    #[test]
    fn missing_save_loads_as_none() {
        let store = temp_store();
        assert!(store.load_player().expect("load").is_none());
    }

    #[test]
    fn malformed_save_defaults_with_a_reason() {
        let store = temp_store();
        fs::create_dir_all(&store.root).expect("dir");
        fs::write(store.save_path(), "<Player><Stats></Stats></Player>").expect("write");

        let outcome = store.load_player().expect("load").expect("present");
        assert!(outcome.is_defaulted());
        assert_eq!(outcome.into_player(), Player::create_default());

        cleanup(&store);
    }

    #[test]
    fn saving_twice_keeps_a_backup_of_the_previous_save() {
        let store = temp_store();
        let first = Player::create_default();
        store.save_player(&first).expect("first save");

        let mut second = Player::create_default();
        second.add_gold(80);
        store.save_player(&second).expect("second save");

        let backup = fs::read_to_string(store.backup_path()).expect("backup");
        assert!(backup.contains("<Gold>20</Gold>"));
        let current = fs::read_to_string(store.save_path()).expect("current");
        assert!(current.contains("<Gold>100</Gold>"));

        cleanup(&store);
    }
}
