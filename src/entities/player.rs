use crate::entities::creature::Vitals;
use crate::entities::events::PlayerField;
use crate::entities::inventory::Inventory;
use crate::entities::quest_log::QuestLog;
use crate::world::catalog::{ItemId, Location, LocationId, Quest, QuestId};
use crate::world::defaults::{ITEM_ID_RUSTY_SWORD, LOCATION_ID_HOME};

/// Experience points per level step.
const EXPERIENCE_PER_LEVEL: i32 = 100;

/// Hit points granted per level when the maximum is recomputed.
const HIT_POINTS_PER_LEVEL: i32 = 10;

/// The player aggregate: vitals, purse, progress, and the two ledgers.
///
/// Level is never stored; it is derived from experience on every read.
/// Catalog references are held as plain ids into the external read-only
/// world catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    vitals: Vitals,
    gold: i32,
    experience_points: i32,
    pub current_location: LocationId,
    pub current_weapon: Option<ItemId>,
    pub inventory: Inventory,
    pub quest_log: QuestLog,
}

impl Player {
    pub(crate) fn new(
        current_hit_points: i32,
        maximum_hit_points: i32,
        gold: i32,
        experience_points: i32,
    ) -> Self {
        Self {
            vitals: Vitals::new(current_hit_points, maximum_hit_points),
            gold,
            experience_points,
            current_location: LOCATION_ID_HOME,
            current_weapon: None,
            inventory: Inventory::default(),
            quest_log: QuestLog::default(),
        }
    }

    /// The fresh character every new game starts from: 10/10 hit points,
    /// 20 gold, no experience, a rusty sword, standing at home.
    pub fn create_default() -> Self {
        let mut player = Player::new(10, 10, 20, 0);
        player.inventory.add(ITEM_ID_RUSTY_SWORD);
        player.current_location = LOCATION_ID_HOME;
        player
    }

    pub fn current_hit_points(&self) -> i32 {
        self.vitals.current_hit_points()
    }

    pub fn maximum_hit_points(&self) -> i32 {
        self.vitals.maximum_hit_points()
    }

    pub fn set_current_hit_points(&mut self, value: i32) {
        self.vitals.set_current_hit_points(value);
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn set_gold(&mut self, value: i32) {
        self.gold = value;
        self.vitals.record(PlayerField::Gold);
    }

    pub fn add_gold(&mut self, amount: i32) {
        self.set_gold(self.gold + amount);
    }

    pub fn experience_points(&self) -> i32 {
        self.experience_points
    }

    /// Derived: 0-99 experience is level 1, 100-199 level 2, and so on.
    pub fn level(&self) -> i32 {
        self.experience_points / EXPERIENCE_PER_LEVEL + 1
    }

    /// Adds experience and recomputes the hit-point maximum from the new
    /// level. The current value is left untouched even when it now exceeds
    /// or trails the maximum; the display layer is expected to see the gap.
    pub fn add_experience(&mut self, amount: i32) {
        self.experience_points += amount;
        self.vitals.record(PlayerField::ExperiencePoints);
        self.vitals.record(PlayerField::Level);
        self.vitals
            .set_maximum_hit_points(self.level() * HIT_POINTS_PER_LEVEL);
    }

    /// Restores hit points, clamped to the maximum.
    pub fn heal(&mut self, amount: i32) {
        let healed = (self.current_hit_points() + amount).min(self.maximum_hit_points());
        self.set_current_hit_points(healed);
    }

    /// Applies damage without flooring at zero; death is a read, not a clamp.
    pub fn take_damage(&mut self, amount: i32) {
        self.set_current_hit_points(self.current_hit_points() - amount);
    }

    pub fn is_dead(&self) -> bool {
        self.current_hit_points() <= 0
    }

    pub fn equip_weapon(&mut self, item: ItemId) {
        self.current_weapon = Some(item);
    }

    pub fn move_to(&mut self, location: &Location) {
        self.current_location = location.id;
    }

    /// Single pickup entry point, for gameplay and record reconstruction
    /// alike. The merge rule in the ledger keeps item ids unique.
    pub fn add_item_to_inventory(&mut self, item: ItemId) {
        self.inventory.add(item);
    }

    /// True when the location declares no requirement, or when any entry
    /// matches the required item id regardless of its quantity.
    pub fn has_required_item(&self, location: &Location) -> bool {
        let Some(required) = location.required_item else {
            return true;
        };
        self.inventory.has_item(required)
    }

    pub fn has_this_quest(&self, quest: QuestId) -> bool {
        self.quest_log.has_quest(quest)
    }

    pub fn completed_this_quest(&self, quest: QuestId) -> bool {
        self.quest_log.completed(quest)
    }

    pub fn accept_quest(&mut self, quest: QuestId) {
        self.quest_log.accept(quest);
    }

    pub fn mark_quest_completed(&mut self, quest: QuestId) {
        self.quest_log.mark_completed(quest);
    }

    /// Every requirement must be met at its full quantity; the scan stops
    /// at the first shortfall.
    pub fn has_all_quest_completion_items(&self, quest: &Quest) -> bool {
        for requirement in &quest.completion_items {
            if !self
                .inventory
                .has_at_least(requirement.item, requirement.quantity)
            {
                return false;
            }
        }
        true
    }

    /// Consumes the turn-in items. Requirements the player does not hold
    /// are skipped, and held stacks are not floored at zero.
    pub fn remove_quest_completion_items(&mut self, quest: &Quest) {
        for requirement in &quest.completion_items {
            self.inventory
                .subtract(requirement.item, requirement.quantity);
        }
    }

    /// Turn-in flow: consume the items, pay out the rewards, flag the log
    /// entry. Whether the player holds the quest and the items is the
    /// caller's check to make first.
    pub fn complete_quest(&mut self, quest: &Quest) {
        self.remove_quest_completion_items(quest);
        self.add_experience(quest.reward_experience);
        self.add_gold(quest.reward_gold);
        if let Some(reward) = quest.reward_item {
            self.inventory.add(reward);
        }
        self.quest_log.mark_completed(quest.id);
    }

    pub fn drain_events(&mut self) -> Vec<PlayerField> {
        self.vitals.drain_events()
    }
}
