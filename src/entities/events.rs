/// Player properties a UI layer can watch for changes.
///
/// `Level` is derived from `ExperiencePoints` and never stored, but it is
/// reported alongside experience so a binding on the level display refreshes
/// without knowing the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerField {
    CurrentHitPoints,
    Gold,
    ExperiencePoints,
    Level,
}

/// Queue of field-change notifications recorded by mutating operations.
///
/// Mutators push into the queue inline; the consumer drains it after the
/// mutation returns. Observers therefore never run inside a mutation, so
/// re-entering the aggregate from a handler cannot corrupt it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldEvents {
    pending: Vec<PlayerField>,
}

impl FieldEvents {
    pub fn record(&mut self, field: PlayerField) {
        self.pending.push(field);
    }

    /// Empties the queue and returns the recorded fields in record order.
    pub fn drain(&mut self) -> Vec<PlayerField> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_fields_in_record_order() {
        let mut events = FieldEvents::default();
        events.record(PlayerField::Gold);
        events.record(PlayerField::ExperiencePoints);
        events.record(PlayerField::Level);

        assert_eq!(
            events.drain(),
            vec![
                PlayerField::Gold,
                PlayerField::ExperiencePoints,
                PlayerField::Level,
            ]
        );
        assert!(events.is_empty());
    }

    #[test]
    fn drain_on_empty_queue_is_empty() {
        let mut events = FieldEvents::default();
        assert!(events.drain().is_empty());
    }
}
