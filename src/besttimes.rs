//! Per-level best completion times.
//!
//! Persisted to LocalStorage as a plain JSON array with one slot per level,
//! `null` where no time is recorded yet.

use serde::{Deserialize, Serialize};

/// LocalStorage key (used only in wasm32)
#[allow(dead_code)]
const STORAGE_KEY: &str = "salty-crackers-best-times";

/// Best level times in milliseconds, indexed by level - 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestTimes {
    pub entries: Vec<Option<f64>>,
}

impl BestTimes {
    /// Empty record with one slot per level.
    pub fn new(total_levels: usize) -> Self {
        Self {
            entries: vec![None; total_levels],
        }
    }

    /// Parse a stored record, salvaging what it can: a non-array becomes an
    /// empty record, junk entries become empty slots, and the result is
    /// always exactly `total_levels` long.
    pub fn from_json(json: &str, total_levels: usize) -> Self {
        let parsed: Vec<serde_json::Value> = serde_json::from_str(json).unwrap_or_default();
        let entries = (0..total_levels)
            .map(|i| {
                parsed
                    .get(i)
                    .and_then(|v| v.as_f64())
                    .filter(|ms| ms.is_finite())
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.entries.get(idx).copied().flatten()
    }

    /// Number of levels with a recorded time.
    pub fn recorded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Record `elapsed_ms` for the level slot `idx` if it beats the stored
    /// best. Returns true when the record was updated.
    pub fn record(&mut self, idx: usize, elapsed_ms: f64) -> bool {
        if idx >= self.entries.len() {
            return false;
        }
        let improved = self.entries[idx].map(|best| elapsed_ms < best).unwrap_or(true);
        if improved {
            self.entries[idx] = Some(elapsed_ms);
        }
        improved
    }

    /// Load best times from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(total_levels: usize) -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(STORAGE_KEY) {
                let times = Self::from_json(&json, total_levels);
                log::info!("Loaded {} best times", times.recorded_count());
                return times;
            }
        }

        log::info!("No best times found, starting fresh");
        Self::new(total_levels)
    }

    /// Save best times to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(STORAGE_KEY, &json);
                log::info!("Best times saved ({} recorded)", self.recorded_count());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(total_levels: usize) -> Self {
        Self::new(total_levels)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Format milliseconds as seconds with two decimals, HUD style.
pub fn format_seconds(ms: f64) -> String {
    format!("{:.2}", ms / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_only_improves() {
        let mut times = BestTimes::new(9);
        assert!(times.record(0, 5000.0));
        assert!(!times.record(0, 6000.0));
        assert_eq!(times.get(0), Some(5000.0));
        assert!(times.record(0, 4000.0));
        assert_eq!(times.get(0), Some(4000.0));
        // Out-of-range slots are ignored.
        assert!(!times.record(99, 1.0));
    }

    #[test]
    fn test_salvage_junk_entries() {
        let times = BestTimes::from_json(r#"[1200.5, "fast", null, true]"#, 9);
        assert_eq!(times.entries.len(), 9);
        assert_eq!(times.get(0), Some(1200.5));
        assert_eq!(times.get(1), None);
        assert_eq!(times.get(2), None);
        assert_eq!(times.get(3), None);
        assert_eq!(times.recorded_count(), 1);
    }

    #[test]
    fn test_non_array_falls_back_to_empty() {
        assert_eq!(BestTimes::from_json(r#"{"oops": 1}"#, 9), BestTimes::new(9));
        assert_eq!(BestTimes::from_json("not json at all", 9), BestTimes::new(9));
    }

    #[test]
    fn test_extra_entries_are_truncated() {
        let times = BestTimes::from_json("[1, 2, 3, 4]", 2);
        assert_eq!(times.entries.len(), 2);
        assert_eq!(times.get(1), Some(2.0));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut times = BestTimes::new(2);
        times.record(0, 64.0);
        let json = serde_json::to_string(&times).unwrap();
        assert_eq!(json, "[64.0,null]");
        assert_eq!(BestTimes::from_json(&json, 2), times);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0), "0.00");
        assert_eq!(format_seconds(1234.0), "1.23");
        assert_eq!(format_seconds(61789.0), "61.79");
    }
}
