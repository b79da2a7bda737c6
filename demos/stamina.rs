//! Stamina example: catch-up regeneration under buffs
//!
//! This example demonstrates:
//! - Building a resource from a JSON config
//! - Reconciling it at a few points in time with a frozen clock
//! - Haste, max-up and fatigue buffs over the timeline
//!
//! Run with `RUST_LOG=zzregen=debug` to see every reconciled segment.

use tracing_subscriber::EnvFilter;
use zzregen::*;

const FATIGUE: ChannelId = ChannelId::new(1);
const VIGOR: ChannelId = ChannelId::new(2);
const HASTE: ChannelId = ChannelId::new(3);

fn main() -> Result<(), RegenError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ResourceConfig::from_json(
        r#"{
            "min": 0,
            "max": 100,
            "tick_interval": 60,
            "tick_value": 5,
            "channels": { "current": 1, "max": 2, "interval": 3 }
        }"#,
    )?;

    let mut stamina = config.new_state(20)?;
    stamina.last_update_at = 0;

    println!("=== Stamina ===");
    println!("Start: {}/{}", stamina.current, stamina.max);

    // Haste for the first ten minutes, vigor for an hour, fatigue wearing off at 20 minutes.
    let buffs = vec![
        Buff::new(HASTE, -30, 600_000),
        Buff::new(VIGOR, 50, 3_600_000),
        Buff::new(FATIGUE, 10, 1_200_000),
    ];

    for minutes in [5, 15, 30, 90] {
        stamina.buffs = buffs.clone();
        stamina.retain_active_buffs(stamina.last_update_at);
        // Base values come from config on every call; buffs are reapplied on top.
        stamina.max = config.max;
        stamina.tick_interval = config.tick_interval;

        let report = reconcile(&mut stamina, &FixedClock(minutes * 60_000));

        println!("\nAt {} min:", minutes);
        for segment in &report.segments {
            println!(
                "  segment @{}s: interval {}s, max {}, ticks {}{}",
                segment.at / 1000,
                segment.tick_interval,
                segment.max,
                segment.ticks,
                segment
                    .suppressed
                    .map(|m| format!(", fatigue -{}", m))
                    .unwrap_or_default()
            );
        }
        println!(
            "  stamina {}/{} (next tick in {}s){}",
            stamina.current,
            stamina.max,
            stamina.remaining_seconds,
            if report.capped { " [full]" } else { "" }
        );
    }

    Ok(())
}
