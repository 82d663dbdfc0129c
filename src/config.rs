//! Runtime configuration for the comanda core.
//!
//! All knobs the scheduling core recognizes live here. The struct is
//! serde-deserializable so a deployment can load it from whatever config
//! source the embedding application uses; every field has a default.

use serde::{Deserialize, Serialize};

/// Tuning knobs for polling, delivery windows, and urgency thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComandaConfig {
    /// Chef-view refresh period in milliseconds.
    pub poll_interval_ms: u64,

    /// Minutes a delivery order has from creation until it auto-expires.
    pub delivery_window_minutes: i64,

    /// Remaining minutes at or below which a delivery order tags `Critical`.
    pub critical_threshold_minutes: i64,

    /// Remaining minutes at or below which a delivery order tags `Warning`.
    pub warning_threshold_minutes: i64,
}

impl Default for ComandaConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 3000,
            delivery_window_minutes: 30,
            critical_threshold_minutes: 5,
            warning_threshold_minutes: 15,
        }
    }
}

impl ComandaConfig {
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms)
    }

    pub fn delivery_window(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.delivery_window_minutes)
    }

    pub fn critical_threshold(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.critical_threshold_minutes)
    }

    pub fn warning_threshold(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.warning_threshold_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ComandaConfig::default();
        assert_eq!(config.poll_interval_ms, 3000);
        assert_eq!(config.critical_threshold_minutes, 5);
        assert_eq!(config.warning_threshold_minutes, 15);
    }

    #[test]
    fn durations_derive_from_minute_knobs() {
        let config = ComandaConfig {
            delivery_window_minutes: 20,
            ..ComandaConfig::default()
        };
        assert_eq!(config.delivery_window(), chrono::Duration::minutes(20));
        assert_eq!(config.poll_interval(), std::time::Duration::from_millis(3000));
    }
}
