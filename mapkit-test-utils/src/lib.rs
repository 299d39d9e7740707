//! mapkit Test Utilities
//!
//! This crate provides shared testing utilities and helpers for the mapkit project.

use mapkit_core::{Key, Map, Value};

pub mod strategies;

/// Convert a JSON literal into a [`Map`]. Arrays become lists keyed `0..n`.
///
/// Panics if `json` is neither an object nor an array.
pub fn map_from(json: serde_json::Value) -> Map {
    match Value::from(json) {
        Value::Map(map) => map,
        other => panic!("object or array expected, got {}", other.type_name()),
    }
}

/// Convert a JSON literal into a [`Value`].
pub fn value_from(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .try_init();
}

/// Builder for creating test records with common patterns
pub struct RecordBuilder {
    fields: Map,
}

impl RecordBuilder {
    /// Create a new record builder
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Add a field with a string value
    pub fn string(mut self, key: impl Into<Key>, value: &str) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// Add a field with an integer value
    pub fn int(mut self, key: impl Into<Key>, value: i64) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// Add a field with a float value
    pub fn float(mut self, key: impl Into<Key>, value: f64) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// Add a field with a boolean value
    pub fn bool(mut self, key: impl Into<Key>, value: bool) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// Add a field with a null value
    pub fn null(mut self, key: impl Into<Key>) -> Self {
        self.fields.insert(key, Value::Null);
        self
    }

    /// Add a field holding a nested map
    pub fn map(mut self, key: impl Into<Key>, value: Map) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// Build the record
    pub fn build(self) -> Map {
        self.fields
    }

    /// Build the record as a value, ready to go into a sequence
    pub fn build_value(self) -> Value {
        Value::Map(self.fields)
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate test data with various patterns
pub struct TestDataGenerator;

impl TestDataGenerator {
    /// Sequence of person records, one lacking `lastName` and one with a null
    /// `nickname`
    pub fn people() -> Map {
        Map::from_list([
            RecordBuilder::new()
                .int("id", 1)
                .string("firstName", "Billy")
                .string("lastName", "Smith")
                .string("nickname", "Bill")
                .build_value(),
            RecordBuilder::new()
                .int("id", 2)
                .string("firstName", "Bobby")
                .null("nickname")
                .build_value(),
            RecordBuilder::new()
                .int("id", 3)
                .string("firstName", "Sue")
                .string("lastName", "Jones")
                .string("nickname", "")
                .build_value(),
        ])
    }

    /// Three-level configuration map with a list leaf
    pub fn nested_config() -> Map {
        let login = RecordBuilder::new()
            .string("username", "scott")
            .string("password", "tiger")
            .build();
        let db = RecordBuilder::new()
            .string("host", "localhost")
            .int("port", 5432)
            .map("login", login)
            .build();

        RecordBuilder::new()
            .map("db", db)
            .map("servers", Map::from_list(["alpha", "beta"]))
            .bool("debug", false)
            .build()
    }

    /// Records whose `value` field changes type from one record to the next
    pub fn mixed_type_records() -> Map {
        Map::from_list([
            RecordBuilder::new().string("id", "1").int("value", 42).build_value(),
            RecordBuilder::new().string("id", "2").string("value", "42").build_value(),
            RecordBuilder::new().string("id", "3").float("value", 42.0).build_value(),
            RecordBuilder::new().string("id", "4").bool("value", true).build_value(),
        ])
    }

    /// A large list of log-like records for stress testing
    pub fn large_record_set(count: usize) -> Map {
        Map::from_list((0..count).map(|i| {
            let level = match i % 4 {
                0 => "DEBUG",
                1 => "INFO",
                2 => "WARN",
                _ => "ERROR",
            };

            RecordBuilder::new()
                .int("id", i as i64)
                .int("timestamp", 1609459200 + i as i64)
                .string("level", level)
                .string("user", &format!("user_{}", i % 100))
                .build_value()
        }))
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use mapkit_core::{Key, Map};

    /// Assert that `actual` holds exactly `expected` keys, in order
    pub fn assert_keys(actual: &Map, expected: &[Key], context: &str) {
        let keys: Vec<&Key> = actual.keys().collect();
        let expected: Vec<&Key> = expected.iter().collect();
        if keys != expected {
            panic!(
                "Key assertion failed in {}:\nExpected: {:?}\nActual: {:?}",
                context, expected, keys
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_builder() {
        let record = RecordBuilder::new()
            .string("name", "test")
            .int("age", 25)
            .bool("active", true)
            .build();

        assert_eq!(record.get("name").and_then(Value::as_str), Some("test"));
        assert_eq!(record.get("age").and_then(Value::as_i64), Some(25));
        assert_eq!(record.get("active").and_then(Value::as_bool), Some(true));
        assert_eq!(record, map_from(json!({"name": "test", "age": 25, "active": true})));
    }

    #[test]
    fn test_map_from_arrays_are_lists() {
        let list = map_from(json!(["a", "b"]));
        assert!(list.is_list());
        assert_eq!(list.get(1), Some(&Value::from("b")));
    }

    #[test]
    #[should_panic(expected = "object or array expected")]
    fn test_map_from_rejects_scalars() {
        map_from(json!(5));
    }

    #[test]
    fn test_people_fixture() {
        let people = TestDataGenerator::people();
        assert_eq!(people.len(), 3);
        assert!(people.values().all(Value::is_map));
    }

    #[test]
    fn test_large_record_set() {
        let records = TestDataGenerator::large_record_set(1000);
        assert_eq!(records.len(), 1000);

        // Check that user field cycles through 100 unique values
        let mut users = std::collections::HashSet::new();
        for record in records.values() {
            if let Some(user) = record.as_map().and_then(|r| r.get("user")).and_then(Value::as_str) {
                users.insert(user.to_string());
            }
        }
        assert_eq!(users.len(), 100);
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
