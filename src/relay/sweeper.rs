//! Background sweep that evicts idle rooms

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::{interval, MissedTickBehavior};

use super::Relay;

/// Evict rooms that have been empty for `ttl`, checking every `period`
///
/// Runs until the task is dropped.
pub async fn run(relay: Arc<Relay>, ttl: Duration, period: Duration) {
    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        timer.tick().await;
        let evicted = relay.evict_idle_rooms(Instant::now(), ttl);
        if !evicted.is_empty() {
            log::info!("Evicted {} idle rooms: {}", evicted.len(), evicted.join(", "));
        }
    }
}
