use crate::config::AppConfig;
use async_trait::async_trait;
use rand::{thread_rng, Rng};
use std::time::Duration;

/// Fraud check applied to every recorded click. The production implementation
/// is a simulation; the trait exists so tests can inject a deterministic one.
#[async_trait]
pub trait ClickValidator: Send + Sync {
    async fn validate(&self) -> bool;
}

/// Simulated validation: waits out an artificial processing delay, then
/// passes the click with probability 0.5.
pub struct SimulatedValidator {
    delay: Duration,
}

impl SimulatedValidator {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl ClickValidator for SimulatedValidator {
    async fn validate(&self) -> bool {
        tokio::time::sleep(self.delay).await;
        thread_rng().gen_bool(0.5)
    }
}

/// Only valid clicks earn credit; the redirect itself never depends on the
/// outcome.
pub fn earnings_for(is_valid: bool, config: &AppConfig) -> f64 {
    if is_valid {
        config.earnings_per_valid_click
    } else {
        0.0
    }
}
