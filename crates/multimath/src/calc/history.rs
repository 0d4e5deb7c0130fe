//! Bounded history of successful calculations

use super::{Operation, Value};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single entry in the calculation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Operation that produced the result
    pub operation: Operation,
    /// Left-hand side as displayed, e.g. `2.0 + 3.0`
    pub expression: String,
    /// The result of the calculation
    pub result: Value,
    /// Unix epoch millis at which the result was produced
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates a new history entry stamped with the current time
    #[must_use]
    pub fn new(operation: Operation, expression: String, result: Value) -> Self {
        Self::with_timestamp(operation, expression, result, Self::current_timestamp())
    }

    /// Creates a history entry with a specific timestamp
    #[must_use]
    pub fn with_timestamp(
        operation: Operation,
        expression: String,
        result: Value,
        timestamp: u64,
    ) -> Self {
        Self {
            operation,
            expression,
            result,
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Returns the full display line
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Calculator history manager
///
/// Oldest entries are dropped once `max_entries` is reached.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a new history with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history with custom maximum size (at least one entry)
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Adds an entry, evicting the oldest when full
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no calculation has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears all history entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Oldest entry
    #[must_use]
    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Serializes the history to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// One display line per entry, oldest first
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(expr: &str, result: f64, ts: u64) -> HistoryEntry {
        HistoryEntry::with_timestamp(Operation::Add, expr.into(), Value::Real(result), ts)
    }

    // ===== HistoryEntry tests =====

    #[test]
    fn test_history_entry_new_has_timestamp() {
        let e = HistoryEntry::new(Operation::Add, "2.0 + 2.0".into(), Value::Real(4.0));
        assert!(e.timestamp > 0);
    }

    #[test]
    fn test_history_entry_display() {
        let e = HistoryEntry::with_timestamp(
            Operation::Modulo,
            "-7 mod 3".into(),
            Value::Integer(2),
            0,
        );
        assert_eq!(e.display(), "-7 mod 3 = 2");
    }

    #[test]
    fn test_history_entry_serialize() {
        let json = serde_json::to_string(&entry("2.0 ^ 3.0", 8.0, 1000)).unwrap();
        assert!(json.contains("\"expression\":\"2.0 ^ 3.0\""));
        assert!(json.contains("\"result\":8.0"));
        assert!(json.contains("\"operation\":\"Add\""));
    }

    // ===== History tests =====

    #[test]
    fn test_history_new() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.max_entries(), History::DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_history_zero_capacity_keeps_one() {
        let mut history = History::with_capacity(0);
        history.push(entry("a", 1.0, 1));
        history.push(entry("b", 2.0, 2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().expression, "b");
    }

    #[test]
    fn test_history_max_entries_enforcement() {
        let mut history = History::with_capacity(3);
        for (i, name) in ["1", "2", "3", "4"].iter().enumerate() {
            history.push(entry(name, i as f64, i as u64));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.first().unwrap().expression, "2");
        assert_eq!(history.last().unwrap().expression, "4");
    }

    #[test]
    fn test_history_clear() {
        let mut history = History::new();
        history.push(entry("a", 1.0, 1));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_iter_order() {
        let mut history = History::new();
        history.push(entry("a", 1.0, 1));
        history.push(entry("b", 2.0, 2));
        let names: Vec<_> = history.iter().map(|e| e.expression.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_history_to_json() {
        let mut history = History::new();
        history.push(entry("1.0 + 1.0", 2.0, 1000));
        let json = history.to_json().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("1.0 + 1.0"));
    }

    #[test]
    fn test_history_export_formatted() {
        let mut history = History::new();
        history.push(entry("1.0 + 1.0", 2.0, 1000));
        history.push(entry("2.0 × 3.0", 6.0, 2000));
        assert_eq!(
            history.export_formatted(),
            "1.0 + 1.0 = 2.0\n2.0 × 3.0 = 6.0"
        );
    }

    #[test]
    fn test_history_export_formatted_empty() {
        assert_eq!(History::new().export_formatted(), "");
    }
}
