use crate::world::catalog::ItemId;

/// One owned stack: a catalog item reference and how many of it are held.
///
/// Quantity is signed: quest turn-ins subtract without a floor, so a
/// shortfall shows up as a negative count instead of being hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryEntry {
    pub item: ItemId,
    pub quantity: i32,
}

/// Ordered list of owned stacks, unique by item id.
///
/// Kept as a plain `Vec`: every lookup is a linear scan and entries stay in
/// first-acquired order. `add` is the only way an entry is created, which is
/// what keeps ids unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    /// Adds a single unit: first matching entry gains one, otherwise a new
    /// entry with quantity 1 is appended.
    pub fn add(&mut self, item: ItemId) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.item == item) {
            entry.quantity += 1;
            return;
        }
        self.entries.push(InventoryEntry { item, quantity: 1 });
    }

    /// Id match only; a zero or negative quantity still counts as "has".
    pub fn has_item(&self, item: ItemId) -> bool {
        self.entries.iter().any(|entry| entry.item == item)
    }

    /// True when an entry for the item exists with at least the asked-for
    /// quantity. Absent entries fail even when `quantity` is zero.
    pub fn has_at_least(&self, item: ItemId, quantity: i32) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.item == item && entry.quantity >= quantity)
    }

    pub fn quantity_of(&self, item: ItemId) -> i32 {
        self.entries
            .iter()
            .find(|entry| entry.item == item)
            .map(|entry| entry.quantity)
            .unwrap_or(0)
    }

    /// Subtracts from the first matching entry, even below zero. A missing
    /// entry is skipped silently, and an entry that reaches zero stays in
    /// the list.
    pub fn subtract(&mut self, item: ItemId, quantity: i32) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.item == item) {
            entry.quantity -= quantity;
        }
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_merges_into_a_single_entry() {
        let mut inventory = Inventory::default();
        inventory.add(ItemId(2));
        inventory.add(ItemId(2));

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.quantity_of(ItemId(2)), 2);
    }

    #[test]
    fn add_preserves_first_seen_order() {
        let mut inventory = Inventory::default();
        inventory.add(ItemId(5));
        inventory.add(ItemId(3));
        inventory.add(ItemId(5));

        let ids: Vec<u32> = inventory.entries().iter().map(|entry| entry.item.0).collect();
        assert_eq!(ids, vec![5, 3]);
    }

    #[test]
    fn subtract_can_drive_quantity_negative() {
        let mut inventory = Inventory::default();
        inventory.add(ItemId(4));
        inventory.subtract(ItemId(4), 3);

        assert_eq!(inventory.quantity_of(ItemId(4)), -2);
        assert!(inventory.has_item(ItemId(4)));
    }

    #[test]
    fn subtract_skips_missing_entries() {
        let mut inventory = Inventory::default();
        inventory.subtract(ItemId(9), 3);
        assert!(inventory.is_empty());
    }

    #[test]
    fn zero_quantity_entry_is_kept() {
        let mut inventory = Inventory::default();
        inventory.add(ItemId(4));
        inventory.subtract(ItemId(4), 1);

        assert_eq!(inventory.quantity_of(ItemId(4)), 0);
        assert_eq!(inventory.len(), 1);
        assert!(inventory.has_item(ItemId(4)));
    }

    #[test]
    fn has_at_least_requires_an_entry() {
        let inventory = Inventory::default();
        assert!(!inventory.has_at_least(ItemId(1), 0));
    }

    #[test]
    fn has_at_least_is_exact_at_the_boundary() {
        let mut inventory = Inventory::default();
        inventory.add(ItemId(2));
        inventory.add(ItemId(2));

        assert!(inventory.has_at_least(ItemId(2), 2));
        assert!(!inventory.has_at_least(ItemId(2), 3));
    }
}
