//! Parameter Set Items

use std::cell::Cell;

/// Stores the values of a named parameter and whether it was queried.
#[derive(Clone, Debug)]
pub struct ParamSetItem<T> {
    /// The values.
    pub values: Vec<T>,

    /// Set once the parameter has been looked up.
    looked_up: Cell<bool>,
}

impl<T> ParamSetItem<T> {
    /// Create a new `ParamSetItem<T>`.
    ///
    /// * `values` - The values.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            looked_up: Cell::new(false),
        }
    }

    /// Marks the parameter as queried.
    pub fn mark_looked_up(&self) {
        self.looked_up.set(true);
    }

    /// Returns true if the parameter was queried.
    pub fn looked_up(&self) -> bool {
        self.looked_up.get()
    }
}
