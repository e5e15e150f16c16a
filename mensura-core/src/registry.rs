//! Per-dimension lookup tables and compact key derivation.
//!
//! Every unit catalog owns one [`Registry`], built lazily on first access and never mutated afterwards. Reads are
//! lock-free and safe from any thread.

use crate::unit::UnitCatalog;
use log::debug;
use std::collections::HashMap;

pub(crate) use once_cell::sync::Lazy;

/// Converts a display name to snake_case.
///
/// Spaces become underscores, an underscore is inserted before every uppercase letter that does not already follow
/// one, everything is lower-cased and runs of underscores collapse. Consecutive capitals split letter by letter
/// (`"BTU"` becomes `"b_t_u"`), which is why lookups go through the prebuilt key table instead of recomputing keys.
///
/// ```rust
/// use mensura_core::to_snake_case;
/// assert_eq!(to_snake_case("KilometersPerHour"), "kilometers_per_hour");
/// assert_eq!(to_snake_case("Metric Ton"), "metric_ton");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);

    for c in name.chars() {
        let c = if c == ' ' { '_' } else { c };
        if c.is_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else if c == '_' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Builds the compact key of a unit: `lower(dimension) + "_" + snake(name)`.
///
/// ```rust
/// use mensura_core::unit_key;
/// assert_eq!(unit_key("pressure", "Kilopascal"), "pressure_kilopascal");
/// ```
pub fn unit_key(dimension: &str, name: &str) -> String {
    format!("{}_{}", dimension.to_lowercase(), to_snake_case(name))
}

/// Splits a compact key on its first underscore into `(dimension, unit_name)`.
///
/// A key without an underscore yields an empty unit name. Multi-word dimension tags are split at their first word
/// here; [`Dimension::from_key_prefix`](crate::Dimension::from_key_prefix) recovers the full tag.
pub fn parse_unit_key(key: &str) -> (&str, &str) {
    key.split_once('_').unwrap_or((key, ""))
}

/// Lookup tables for the units of one catalog.
///
/// - **by symbol**: exact wire symbols plus alternate symbols (`"kPa"`, `"inH2O"`).
/// - **by key**: compact keys derived with [`unit_key`] (`"pressure_kilopascal"`), then the catalog's extra keys
///   (`"pressure_psi"`).
/// - **by alias**: lower-cased symbols, names and parse aliases (`"pounds per square inch"`). Symbols are
///   registered before long-form aliases and the first registration of a token wins.
#[derive(Debug)]
pub struct Registry<U> {
    by_symbol: HashMap<String, U>,
    by_key: HashMap<String, U>,
    by_alias: HashMap<String, U>,
}

impl<U: UnitCatalog> Registry<U> {
    /// Builds the tables from the catalog. Called once per catalog by its lazy static.
    pub fn build() -> Self {
        let mut by_symbol = HashMap::new();
        let mut by_key = HashMap::new();
        let mut by_alias = HashMap::new();

        for &unit in U::ALL {
            by_symbol.entry(unit.symbol().to_string()).or_insert(unit);
            for alt in unit.alt_symbols() {
                by_symbol.entry((*alt).to_string()).or_insert(unit);
            }
            by_key
                .entry(unit_key(U::DIMENSION.as_str(), unit.name()))
                .or_insert(unit);
            by_alias.entry(unit.symbol().to_lowercase()).or_insert(unit);
        }

        for &unit in U::ALL {
            for key in unit.keys() {
                by_key.entry((*key).to_string()).or_insert(unit);
            }
        }

        for &unit in U::ALL {
            for alt in unit.alt_symbols() {
                by_alias.entry(alt.to_lowercase()).or_insert(unit);
            }
            by_alias.entry(unit.name().to_lowercase()).or_insert(unit);
            for alias in unit.aliases() {
                by_alias.entry(alias.to_lowercase()).or_insert(unit);
            }
        }

        debug!(
            "built {} registry: {} symbols, {} keys, {} aliases",
            U::DIMENSION,
            by_symbol.len(),
            by_key.len(),
            by_alias.len()
        );

        Registry {
            by_symbol,
            by_key,
            by_alias,
        }
    }

    /// Exact symbol lookup.
    pub fn by_symbol(&self, symbol: &str) -> Option<U> {
        self.by_symbol.get(symbol).copied()
    }

    /// Compact key lookup. Falls back to the lower-cased key.
    pub fn by_key(&self, key: &str) -> Option<U> {
        self.by_key
            .get(key)
            .or_else(|| self.by_key.get(&key.to_lowercase()))
            .copied()
    }

    /// Case-insensitive alias lookup, ignoring surrounding whitespace.
    pub fn by_alias(&self, token: &str) -> Option<U> {
        self.by_alias.get(&token.trim().to_lowercase()).copied()
    }

    /// Every registered compact key.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.by_key.keys().map(String::as_str)
    }
}
