//! Derived metrics over a recovered pulse train.
//!
//! Pure reductions: no hidden state, no clock access - the caller supplies
//! `now`. A train is assumed to be in temporal order, the way the store
//! returns it.

use rite_core::Pulse;
use serde::Serialize;

/// Window, in seconds, for the "recent activity" measure.
const RECENT_WINDOW: f64 = 86_400.0;

/// Coarse health classification from recent activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Alive,
    Dormant,
    Critical,
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Health::Alive => "alive",
            Health::Dormant => "dormant",
            Health::Critical => "critical",
        };
        f.write_str(text)
    }
}

/// Summary statistics over a pulse train.
#[derive(Clone, Debug, Serialize)]
pub struct Metrics {
    /// Number of pulses.
    pub total: usize,
    /// First-to-last span, in days.
    pub lifespan_days: f64,
    /// Pulses per hour over the whole lifespan.
    pub rate_per_hour: f64,
    /// Standard deviation of inter-arrival seconds.
    pub regularity: f64,
    /// Pulses per hour over the trailing 24 h window.
    pub life_force: f64,
    /// Seconds between the last pulse and `now`.
    pub seconds_since_last: f64,
    pub health: Health,
}

impl Metrics {
    /// Reduce a pulse train to its metrics. `None` on an empty train.
    pub fn compute(pulses: &[Pulse], now: f64) -> Option<Self> {
        let first = pulses.first()?;
        let last = pulses.last()?;

        let lifespan = last.time - first.time;
        let hours = lifespan / 3600.0;
        let rate_per_hour = if hours > 0.0 {
            pulses.len() as f64 / hours
        } else {
            0.0
        };

        let intervals: Vec<f64> = pulses.windows(2).map(|w| w[1].time - w[0].time).collect();
        let regularity = stddev(&intervals);

        let recent = pulses
            .iter()
            .filter(|p| now - p.time < RECENT_WINDOW)
            .count();
        let life_force = recent as f64 / 24.0;

        let health = if life_force > 0.5 {
            Health::Alive
        } else if life_force > 0.1 {
            Health::Dormant
        } else {
            Health::Critical
        };

        Some(Self {
            total: pulses.len(),
            lifespan_days: lifespan / 86_400.0,
            rate_per_hour,
            regularity,
            life_force,
            seconds_since_last: now - last.time,
            health,
        })
    }
}

fn stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
