use crate::entities::events::{FieldEvents, PlayerField};

/// Hit-point block shared by anything alive.
///
/// The setters store whatever they are given: no floor at zero and no clamp
/// to the maximum. Callers are trusted, and downstream display logic expects
/// to see out-of-range values rather than have them corrected here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vitals {
    current_hit_points: i32,
    maximum_hit_points: i32,
    events: FieldEvents,
}

impl Vitals {
    pub fn new(current_hit_points: i32, maximum_hit_points: i32) -> Self {
        Self {
            current_hit_points,
            maximum_hit_points,
            events: FieldEvents::default(),
        }
    }

    pub fn current_hit_points(&self) -> i32 {
        self.current_hit_points
    }

    pub fn maximum_hit_points(&self) -> i32 {
        self.maximum_hit_points
    }

    pub fn set_current_hit_points(&mut self, value: i32) {
        self.current_hit_points = value;
        self.events.record(PlayerField::CurrentHitPoints);
    }

    /// The maximum changes silently; only the current value notifies.
    pub fn set_maximum_hit_points(&mut self, value: i32) {
        self.maximum_hit_points = value;
    }

    pub(crate) fn record(&mut self, field: PlayerField) {
        self.events.record(field);
    }

    pub fn drain_events(&mut self) -> Vec<PlayerField> {
        self.events.drain()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_current_hit_points_records_a_change() {
        let mut vitals = Vitals::new(10, 10);
        assert_eq!(vitals.pending_events(), 0);

        vitals.set_current_hit_points(7);

        assert_eq!(vitals.current_hit_points(), 7);
        assert_eq!(vitals.drain_events(), vec![PlayerField::CurrentHitPoints]);
    }

    #[test]
    fn set_current_hit_points_does_not_validate() {
        let mut vitals = Vitals::new(10, 10);
        vitals.set_current_hit_points(-3);
        assert_eq!(vitals.current_hit_points(), -3);

        vitals.set_current_hit_points(99);
        assert_eq!(vitals.current_hit_points(), 99);
        assert_eq!(vitals.maximum_hit_points(), 10);
    }

    #[test]
    fn set_maximum_hit_points_is_silent() {
        let mut vitals = Vitals::new(10, 10);
        vitals.set_maximum_hit_points(30);
        assert_eq!(vitals.maximum_hit_points(), 30);
        assert_eq!(vitals.pending_events(), 0);
    }
}
