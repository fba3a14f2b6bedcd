//! Parameter Sets

use crate::error::*;
use crate::pbrt::*;
use crate::spectrum::*;
use std::collections::HashMap;
use std::fmt;

mod paramset_item;

// Re-export
pub use paramset_item::*;

/// A hashmap of parameter sets stored by name.
pub type ParamSetMap<T> = HashMap<String, ParamSetItem<T>>;

/// Stores named plugin properties of different types in hashmaps.
#[derive(Clone, Default)]
pub struct ParamSet {
    pub bools: ParamSetMap<bool>,
    pub floats: ParamSetMap<Float>,
    pub colors: ParamSetMap<Color3f>,
    pub strings: ParamSetMap<String>,
}

/// Define a macro that can be used to generate a function for adding/replacing
/// parameter set item.
macro_rules! paramset_add {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&mut self, name: &str, values: &[$t]) {
            let n = String::from(name);
            self.$paramset.insert(n, ParamSetItem::new(values.to_vec()));
        }
    };
}

/// Define a macro that can be used to generate a function for removing
/// parameter set item.
macro_rules! paramset_erase {
    ($func: ident, $paramset: ident) => {
        pub fn $func(&mut self, name: &str) -> bool {
            self.$paramset.remove(name).is_some()
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a single item.
macro_rules! paramset_find_one {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str, default: $t) -> $t {
            match self.$paramset.get(name) {
                Some(param) if param.values.len() == 1 => {
                    param.mark_looked_up();
                    param.values[0].clone()
                }
                _ => default,
            }
        }
    };
}

/// Define a macro that can be used to print parameter set items.
macro_rules! display_param {
    ($params: expr, $param_type: literal, $formatter: expr) => {
        let mut names: Vec<&String> = $params.keys().collect();
        names.sort();
        for name in names {
            write!($formatter, "\n\"{} {}\" [ ", $param_type, name)?;
            for v in $params[name].values.iter() {
                write!($formatter, "{} ", v)?;
            }
            write!($formatter, "]")?;
        }
    };
}

impl ParamSet {
    /// Returns a new `ParamSet`.
    pub fn new() -> Self {
        Self::default()
    }

    paramset_erase!(erase_bool, bools);
    paramset_find_one!(find_one_bool, bool, bools);
    paramset_add!(add_bool, bool, bools);

    paramset_add!(add_float, Float, floats);
    paramset_add!(add_string, String, strings);

    /// Add/replace an RGB color.
    ///
    /// * `name`   - Parameter name.
    /// * `values` - RGB values in a linear slice.
    pub fn add_rgb(&mut self, name: &str, values: &[Float]) {
        let n = values.len();
        if n % 3 > 0 {
            warn!("Ignoring extra values provided with color '{}'.", name);
        }
        let colors: Vec<Color3f> = values
            .chunks_exact(3)
            .map(|c| Color3f::rgb(c[0], c[1], c[2]))
            .collect();
        self.colors
            .insert(String::from(name), ParamSetItem::new(colors));
    }

    /// Returns a required color. A single float is accepted as a grey color.
    ///
    /// * `name` - Parameter name.
    pub fn get_color(&self, name: &str) -> Result<Color3f> {
        if let Some(param) = self.colors.get(name) {
            if param.values.len() > 1 {
                warn!("Ignoring excess values provided with parameter '{}'", name);
            }
            if let Some(c) = param.values.first() {
                param.mark_looked_up();
                return Ok(*c);
            }
        }

        if let Some(param) = self.floats.get(name) {
            if param.values.len() > 1 {
                warn!("Ignoring excess values provided with parameter '{}'", name);
            }
            if let Some(v) = param.values.first() {
                param.mark_looked_up();
                return Ok(Color3f::splat(*v));
            }
        }

        Err(Error::MissingParameter(String::from(name)))
    }

    /// Returns the names of parameters that were never queried.
    pub fn unused(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .bools
            .iter()
            .filter(|(_, p)| !p.looked_up())
            .map(|(n, _)| n.clone())
            .chain(
                self.floats
                    .iter()
                    .filter(|(_, p)| !p.looked_up())
                    .map(|(n, _)| n.clone()),
            )
            .chain(
                self.colors
                    .iter()
                    .filter(|(_, p)| !p.looked_up())
                    .map(|(n, _)| n.clone()),
            )
            .chain(
                self.strings
                    .iter()
                    .filter(|(_, p)| !p.looked_up())
                    .map(|(n, _)| n.clone()),
            )
            .collect();
        names.sort();
        names
    }

    /// Logs a warning for each parameter that was never queried.
    ///
    /// * `plugin` - Name of the plugin the parameters were given to.
    pub fn report_unused(&self, plugin: &str) {
        for name in self.unused() {
            warn!("Parameter '{}' unused by '{}'.", name, plugin);
        }
    }
}

impl fmt::Display for ParamSet {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_param!(self.bools, "bool", f);
        display_param!(self.floats, "float", f);
        display_param!(self.colors, "rgb", f);
        display_param!(self.strings, "string", f);
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
