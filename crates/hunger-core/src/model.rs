// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Zone and district data shapes.
//!
//! These are plain containers. Nothing here validates metric values or
//! relates zones to each other; a district simply owns its zones keyed by
//! code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named numeric metrics attached to a zone (e.g. `"Population"`).
pub type Metrics = BTreeMap<String, f32>;

/// A state, county, city, or any other unit identified by a code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Identifying code.
    pub code: String,
    /// Display name. Starts out equal to `code`.
    pub name: String,
    /// Metric values keyed by metric name.
    pub metrics: Metrics,
}

impl Zone {
    /// Create a zone whose display name is its code.
    pub fn new(code: impl Into<String>, metrics: Metrics) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
            metrics,
        }
    }
}

/// Zones grouped by their code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct District {
    /// Member zones keyed by zone code.
    pub zones: BTreeMap<String, Zone>,
}

impl District {
    /// Create an empty district.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn metrics(pairs: &[(&str, f32)]) -> Metrics {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
    }

    #[test]
    fn zone_name_starts_as_code() {
        let zone = Zone::new("TX", metrics(&[("Population", 1_000_000.0)]));
        assert_eq!(zone.code, "TX");
        assert_eq!(zone.name, zone.code);
        assert_eq!(zone.metrics.get("Population"), Some(&1_000_000.0));
    }

    #[test]
    fn zone_accepts_unvalidated_metrics() {
        let zone = Zone::new("AK", metrics(&[("GDP ($1m)", -1.5), ("Land (mi2)", 0.0)]));
        assert_eq!(zone.metrics.len(), 2);
        assert!(zone.metrics["GDP ($1m)"] < 0.0);
    }

    #[test]
    fn empty_district_has_no_zones() {
        let district = District::new();
        assert!(district.zones.is_empty());
        assert_eq!(district, District::default());
    }

    #[test]
    fn district_keys_are_unique_per_code() {
        let mut district = District::new();
        district
            .zones
            .insert("RI".into(), Zone::new("RI", metrics(&[("Population", 1.0)])));
        district
            .zones
            .insert("RI".into(), Zone::new("RI", metrics(&[("Population", 2.0)])));
        assert_eq!(district.zones.len(), 1);
        assert_eq!(district.zones["RI"].metrics["Population"], 2.0);
    }

    #[test]
    fn zone_serializes_with_sorted_metrics() {
        let zone = Zone::new("VT", metrics(&[("b", 2.0), ("a", 1.0)]));
        let json = serde_json::to_string(&zone).unwrap();
        assert_eq!(
            json,
            r#"{"code":"VT","name":"VT","metrics":{"a":1.0,"b":2.0}}"#
        );
    }
}
