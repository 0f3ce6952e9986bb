pub mod creature;
pub mod events;
pub mod inventory;
pub mod player;
pub mod quest_log;
