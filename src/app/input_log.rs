//! Fortlaufend nummeriertes Protokoll verarbeiteter Editor-Eingaben.
//!
//! Grundlage für spätere Undo/Redo- oder Sync-Schichten: ein Konsument merkt
//! sich die letzte gesehene Sequenznummer und holt mit [`InputLog::since`] nach.

use super::EditorInput;
use std::collections::VecDeque;

/// Standard-Kapazität eines Logs.
pub const DEFAULT_LOG_CAPACITY: usize = 512;

/// Eine protokollierte Eingabe mit ihrer Sequenznummer.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedInput {
    pub seq: u64,
    pub input: EditorInput,
}

/// Ringpuffer fester Kapazität; die älteste Eingabe fällt zuerst heraus.
#[derive(Debug, Clone)]
pub struct InputLog {
    entries: VecDeque<LoggedInput>,
    capacity: usize,
    next_seq: u64,
}

impl InputLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Log mit eigener Kapazität (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_seq: 0,
        }
    }

    /// Hängt eine Eingabe an und gibt ihre Sequenznummer zurück.
    pub fn record(&mut self, input: EditorInput) -> u64 {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push_back(LoggedInput { seq, input });
        seq
    }

    /// Alle noch gehaltenen Eingaben mit `seq >= from`.
    pub fn since(&self, from: u64) -> impl Iterator<Item = &LoggedInput> {
        self.entries.iter().filter(move |entry| entry.seq >= from)
    }

    pub fn last(&self) -> Option<&LoggedInput> {
        self.entries.back()
    }

    /// Anzahl bisher protokollierter Eingaben (auch verdrängter).
    pub fn total_recorded(&self) -> u64 {
        self.next_seq
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InputLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_log_drops_oldest_entry() {
        let mut log = InputLog::with_capacity(3);
        for _ in 0..3 {
            log.record(EditorInput::PointerReleased);
        }
        let seq = log.record(EditorInput::ResetRequested);

        assert_eq!(seq, 3);
        assert_eq!(log.len(), 3);
        assert_eq!(log.total_recorded(), 4);
        assert_eq!(log.since(0).next().map(|e| e.seq), Some(1));
        assert_eq!(log.last().map(|e| &e.input), Some(&EditorInput::ResetRequested));
    }

    #[test]
    fn test_since_returns_newer_entries_in_order() {
        let mut log = InputLog::new();
        log.record(EditorInput::AddPointRequested);
        let mark = log.record(EditorInput::RemovePointRequested);
        log.record(EditorInput::ResetRequested);

        let newer: Vec<_> = log.since(mark).map(|e| e.input.clone()).collect();
        assert_eq!(
            newer,
            vec![EditorInput::RemovePointRequested, EditorInput::ResetRequested]
        );
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut log = InputLog::with_capacity(0);
        log.record(EditorInput::PointerReleased);
        log.record(EditorInput::AddPointRequested);
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.len(), 1);
    }
}
