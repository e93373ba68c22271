//! pasture — smallest runnable demo of the mobmind goal scheduler.
//!
//! Eight grazing mobs idle around a pasture: they wander, glance about, and
//! eat when hungry.  Midway through the run a wolf appears at the center and
//! every mob's panic goal preempts whatever it was doing; once the wolf
//! leaves, normal behavior resumes.
//!
//! Run with `RUST_LOG=mob_goal=trace` to watch individual goal transitions.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mob_core::{MobId, Tick, Vec2};
use mob_sim::{GrazeGoal, LookAroundGoal, PanicGoal, SimBuilder, SimConfig, SimObserver, WanderGoal};

// ── Constants ─────────────────────────────────────────────────────────────────

const MOB_COUNT: usize = 8;
const SEED: u64 = 42;
const TOTAL_TICKS: u64 = 400;
const WOLF_ARRIVES: u64 = 200; // tick at which the wolf shows up
const WOLF_LEAVES: u64 = 260;

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter {
    interval: u64,
}

impl SimObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, running_goals: usize) {
        if tick.0 % self.interval == 0 {
            info!(%tick, running_goals, "progress");
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SimConfig {
        total_ticks: TOTAL_TICKS,
        seed: SEED,
    };

    // Spawn the herd on a loose grid around the origin.
    let positions: Vec<Vec2> = (0..MOB_COUNT)
        .map(|i| Vec2::new((i % 4) as f32 * 6.0, (i / 4) as f32 * 6.0))
        .collect();

    let mut sim = SimBuilder::new(config, MOB_COUNT)
        .positions(positions)
        .build(|_, selector| {
            selector.add(1, PanicGoal::new(1.4, 24.0));
            selector.add(5, GrazeGoal::new(60, 80));
            selector.add(6, WanderGoal::new(8.0, 120, 0.5));
            selector.add(8, LookAroundGoal::new(80));
        })?;

    let mut observer = ProgressPrinter { interval: 50 };

    // Phase 1: peaceful grazing.
    sim.run_ticks(WOLF_ARRIVES, &mut observer);

    // Phase 2: a wolf appears at the center of the pasture.
    let wolf = Vec2::new(9.0, 3.0);
    info!(at = %wolf, "wolf arrives");
    for i in 0..MOB_COUNT {
        sim.scare(MobId(i as u32), wolf);
    }
    sim.run_ticks(WOLF_LEAVES - WOLF_ARRIVES, &mut observer);

    // Phase 3: the wolf leaves; the herd settles down again.
    info!("wolf leaves");
    for i in 0..MOB_COUNT {
        sim.calm(MobId(i as u32));
    }
    sim.run_ticks(TOTAL_TICKS - WOLF_LEAVES, &mut observer);

    // ── Summary ───────────────────────────────────────────────────────────
    println!("final state after {TOTAL_TICKS} ticks:");
    for mob in sim.mobs() {
        println!(
            "  {}: pos {} fullness {:>3} dist from wolf spot {:.1}",
            mob.id,
            mob.pos,
            mob.fullness,
            mob.pos.distance(wolf),
        );
    }
    Ok(())
}
