//! Parameter Traversal

use crate::pbrt::Float;
use std::collections::HashMap;

/// Receives the named parameters of objects during traversal.
pub trait TraversalCallback {
    /// Called once for every exposed parameter. The callback may read or
    /// overwrite the values in place.
    ///
    /// * `name`  - Parameter name.
    /// * `value` - Parameter values.
    fn put_parameter(&mut self, name: &str, value: &mut [Float]);
}

/// Objects exposing parameters for inspection and editing.
///
/// Traversal requires exclusive access so it cannot run while the object is
/// being evaluated.
pub trait TraversableObject {
    /// Hands every parameter to the callback. Default exposes nothing.
    ///
    /// * `callback` - The callback.
    fn traverse(&mut self, _callback: &mut dyn TraversalCallback) {}
}

/// Records a copy of every parameter seen during traversal.
#[derive(Clone, Debug, Default)]
pub struct ParameterSnapshot {
    params: HashMap<String, Vec<Float>>,
}

impl ParameterSnapshot {
    /// Create a new, empty `ParameterSnapshot`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded values of a parameter.
    ///
    /// * `name` - Parameter name.
    pub fn get(&self, name: &str) -> Option<&[Float]> {
        self.params.get(name).map(|v| &v[..])
    }

    /// Returns the recorded parameter names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.params.keys().map(|k| &k[..]).collect();
        names.sort_unstable();
        names
    }
}

impl TraversalCallback for ParameterSnapshot {
    fn put_parameter(&mut self, name: &str, value: &mut [Float]) {
        self.params.insert(String::from(name), value.to_vec());
    }
}

/// Overwrites a single named parameter during traversal.
#[derive(Clone, Debug)]
pub struct ParameterUpdate {
    name: String,
    values: Vec<Float>,
    applied: bool,
}

impl ParameterUpdate {
    /// Create a new `ParameterUpdate`.
    ///
    /// * `name`   - Parameter name.
    /// * `values` - New values. Must match the parameter's length.
    pub fn new(name: &str, values: &[Float]) -> Self {
        Self {
            name: String::from(name),
            values: values.to_vec(),
            applied: false,
        }
    }

    /// Returns true if the parameter was found and overwritten.
    pub fn applied(&self) -> bool {
        self.applied
    }
}

impl TraversalCallback for ParameterUpdate {
    fn put_parameter(&mut self, name: &str, value: &mut [Float]) {
        if name != self.name {
            return;
        }
        if value.len() != self.values.len() {
            warn!(
                "Cannot update parameter '{}': expected {} values but got {}.",
                name,
                value.len(),
                self.values.len()
            );
            return;
        }
        value.copy_from_slice(&self.values);
        self.applied = true;
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        a: [Float; 2],
        b: [Float; 1],
    }

    impl TraversableObject for Pair {
        fn traverse(&mut self, callback: &mut dyn TraversalCallback) {
            callback.put_parameter("a", &mut self.a);
            callback.put_parameter("b", &mut self.b);
        }
    }

    #[test]
    fn snapshot_records_all() {
        let mut pair = Pair {
            a: [1.0, 2.0],
            b: [3.0],
        };
        let mut snapshot = ParameterSnapshot::new();
        pair.traverse(&mut snapshot);

        assert_eq!(snapshot.names(), vec!["a", "b"]);
        assert_eq!(snapshot.get("a"), Some(&[1.0, 2.0][..]));
        assert_eq!(snapshot.get("b"), Some(&[3.0][..]));
        assert_eq!(snapshot.get("c"), None);
    }

    #[test]
    fn update_named_parameter() {
        let mut pair = Pair {
            a: [1.0, 2.0],
            b: [3.0],
        };
        let mut update = ParameterUpdate::new("a", &[5.0, 6.0]);
        pair.traverse(&mut update);

        assert!(update.applied());
        assert_eq!(pair.a, [5.0, 6.0]);
        assert_eq!(pair.b, [3.0]);
    }

    #[test]
    fn update_length_mismatch_is_ignored() {
        let mut pair = Pair {
            a: [1.0, 2.0],
            b: [3.0],
        };
        let mut update = ParameterUpdate::new("b", &[5.0, 6.0]);
        pair.traverse(&mut update);

        assert!(!update.applied());
        assert_eq!(pair.b, [3.0]);
    }
}
