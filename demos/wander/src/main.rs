//! wander — smallest runnable demo for the rust_rw mobility simulator.
//!
//! Scatters a handful of random walkers on the plane, runs a few simulated
//! minutes, prints every course change as it happens, and ends with a
//! position table.  One walker is reconfigured with faster speed bounds and
//! one is disposed mid-run to show both paths.

use std::sync::Arc;

use anyhow::Result;

use rw_core::{ModelId, Position, SimTime, Velocity};
use rw_mobility::{RandomWalkModel, WalkDefaults, WalkMode};
use rw_sim::{CourseChangeObserver, Sim};

// ── Constants ─────────────────────────────────────────────────────────────────

const WALKER_COUNT: usize = 4;
const SEED:         u64   = 42;
const RUN_SECS:     u64   = 300; // 5 simulated minutes

// ── Observer ──────────────────────────────────────────────────────────────────

struct CoursePrinter;

impl CourseChangeObserver for CoursePrinter {
    fn on_course_change(
        &mut self,
        model:    ModelId,
        time:     SimTime,
        position: Position,
        velocity: Velocity,
    ) {
        println!(
            "  t={:<10} {}: at {}, new course {}",
            time.to_string(),
            model,
            position,
            velocity
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== wander — rust_rw random-walk demo ===");
    println!("Walkers: {WALKER_COUNT}  |  Run: {RUN_SECS} s  |  Seed: {SEED}");
    println!();

    // 1. Defaults: pedestrian speeds, new heading every 20 m.
    let mut defaults = WalkDefaults::new();
    defaults.set_mode(WalkMode::Distance)?;
    defaults.set_mode_distance(20.0)?;

    // 2. Sim with a printing observer.
    let mut sim: Sim<RandomWalkModel> = Sim::new(SEED);
    sim.register_observer(Box::new(CoursePrinter));

    // 3. Walkers 0–2 share the default snapshot; walker 3 gets a private
    //    copy with faster bounds.
    let mut ids = Vec::new();
    for i in 0..WALKER_COUNT - 1 {
        let origin = Position::new(10.0 * i as f64, 0.0);
        let model = RandomWalkModel::new(defaults.snapshot(), origin, sim.now())?;
        ids.push(sim.add_model(model)?);
    }
    let mut fast = (*defaults.snapshot()).clone();
    fast.set_speed_bounds(1.0, 2.0)?;
    let model = RandomWalkModel::new(Arc::new(fast), Position::new(-10.0, -10.0), sim.now())?;
    ids.push(sim.add_model(model)?);

    // 4. Run the first half, then retire walker 1.
    sim.run_until(SimTime::from_secs(RUN_SECS / 2))?;
    println!();
    println!("-- disposing {} at t={} --", ids[1], sim.now());
    println!();
    sim.dispose(ids[1])?;
    sim.run_until(SimTime::from_secs(RUN_SECS))?;

    // 5. Final position table.
    println!();
    println!("{:<14} {:<26} {:<10}", "Walker", "Position", "Speed");
    println!("{}", "-".repeat(52));
    for id in sim.live_ids().collect::<Vec<_>>() {
        let p = sim.position(id)?;
        let speed = sim.velocity(id)?.speed();
        println!("{:<14} {:<26} {:<10.2}", id.to_string(), p.to_string(), speed);
    }

    Ok(())
}
