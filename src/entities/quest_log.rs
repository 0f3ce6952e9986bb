use crate::world::catalog::QuestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestLogEntry {
    pub quest: QuestId,
    pub completed: bool,
}

/// Ordered list of quests the player has picked up, unique by quest id on
/// the gameplay path. Lookups scan in order and act on the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestLog {
    entries: Vec<QuestLogEntry>,
}

impl QuestLog {
    pub fn has_quest(&self, quest: QuestId) -> bool {
        self.entries.iter().any(|entry| entry.quest == quest)
    }

    /// Completion flag of the first matching entry. A quest never taken
    /// reads the same as one taken and not finished.
    pub fn completed(&self, quest: QuestId) -> bool {
        for entry in &self.entries {
            if entry.quest == quest {
                return entry.completed;
            }
        }
        false
    }

    /// Flags the first matching entry; no-op when the quest was never taken.
    pub fn mark_completed(&mut self, quest: QuestId) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.quest == quest) {
            entry.completed = true;
        }
    }

    /// Gameplay pickup: appends an open entry unless the quest is already
    /// in the log.
    pub fn accept(&mut self, quest: QuestId) {
        if self.has_quest(quest) {
            return;
        }
        self.entries.push(QuestLogEntry {
            quest,
            completed: false,
        });
    }

    /// Append straight from a saved record, keeping record order and the
    /// stored flag. Saved data is trusted: no duplicate-id guard here.
    pub(crate) fn push_saved(&mut self, quest: QuestId, completed: bool) {
        self.entries.push(QuestLogEntry { quest, completed });
    }

    pub fn entries(&self) -> &[QuestLogEntry] {
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
    fn accept_guards_against_duplicates() {
        let mut log = QuestLog::default();
        log.accept(QuestId(1));
        log.accept(QuestId(1));

        assert_eq!(log.len(), 1);
        assert!(log.has_quest(QuestId(1)));
    }

    #[test]
    fn completed_is_false_for_unknown_quest() {
        let log = QuestLog::default();
        assert!(!log.completed(QuestId(7)));
    }

    #[test]
    fn mark_completed_flags_first_match_only() {
        let mut log = QuestLog::default();
        log.push_saved(QuestId(1), false);
        log.push_saved(QuestId(1), false);

        log.mark_completed(QuestId(1));

        assert!(log.entries()[0].completed);
        assert!(!log.entries()[1].completed);
        assert!(log.completed(QuestId(1)));
    }

    #[test]
    fn mark_completed_ignores_unknown_quest() {
        let mut log = QuestLog::default();
        log.mark_completed(QuestId(3));
        assert!(log.is_empty());
    }

    #[test]
    fn push_saved_keeps_record_order_and_flags() {
        let mut log = QuestLog::default();
        log.push_saved(QuestId(2), true);
        log.push_saved(QuestId(1), false);

        let flags: Vec<(u32, bool)> = log
            .entries()
            .iter()
            .map(|entry| (entry.quest.0, entry.completed))
            .collect();
        assert_eq!(flags, vec![(2, true), (1, false)]);
    }
}
