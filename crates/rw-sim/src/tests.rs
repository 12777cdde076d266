//! Unit tests for rw-sim.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use rw_core::{ModelId, Position, SimTime, Velocity};
use rw_mobility::{RandomWalkModel, WalkDefaults, WalkMode, WalkParameters};

use crate::{CourseChangeObserver, Sim, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Records every course-change notification; clone the handle to inspect
/// them after the boxed observer has been moved into the sim.
#[derive(Clone, Default)]
struct Recorder {
    events: Rc<RefCell<Vec<(ModelId, SimTime, Position, Velocity)>>>,
}

impl Recorder {
    fn times_for(&self, id: ModelId) -> Vec<SimTime> {
        self.events
            .borrow()
            .iter()
            .filter(|(m, ..)| *m == id)
            .map(|&(_, t, ..)| t)
            .collect()
    }

    fn count(&self) -> usize {
        self.events.borrow().len()
    }
}

impl CourseChangeObserver for Recorder {
    fn on_course_change(&mut self, model: ModelId, time: SimTime, pos: Position, vel: Velocity) {
        self.events.borrow_mut().push((model, time, pos, vel));
    }
}

fn time_params(interval_secs: u64) -> Arc<WalkParameters> {
    Arc::new(WalkParameters {
        min_speed: 0.1,
        max_speed: 0.5,
        mode:      WalkMode::Time,
        mode_time: SimTime::from_secs(interval_secs),
        ..WalkParameters::default()
    })
}

fn unit_speed_distance_params(metres: f64) -> Arc<WalkParameters> {
    Arc::new(WalkParameters {
        min_speed:     1.0,
        max_speed:     1.0,
        mode:          WalkMode::Distance,
        mode_distance: metres,
        ..WalkParameters::default()
    })
}

fn sim_with_recorder(seed: u64) -> (Sim<RandomWalkModel>, Recorder) {
    let mut sim = Sim::new(seed);
    let recorder = Recorder::default();
    sim.register_observer(Box::new(recorder.clone()));
    (sim, recorder)
}

fn add_walker(sim: &mut Sim<RandomWalkModel>, params: Arc<WalkParameters>) -> ModelId {
    let model = RandomWalkModel::new(params, Position::ORIGIN, sim.now()).unwrap();
    sim.add_model(model).unwrap()
}

// ── Resample cadence ──────────────────────────────────────────────────────────

#[cfg(test)]
mod cadence {
    use super::*;

    #[test]
    fn time_mode_fires_every_interval() {
        let (mut sim, rec) = sim_with_recorder(1);
        let id = add_walker(&mut sim, time_params(5));

        sim.run_until(SimTime::from_secs(20)).unwrap();

        let expected: Vec<SimTime> = (0..=4).map(|i| SimTime::from_secs(i * 5)).collect();
        assert_eq!(rec.times_for(id), expected);
    }

    #[test]
    fn unit_speed_distance_ten_fires_every_ten_seconds() {
        let (mut sim, rec) = sim_with_recorder(2);
        let id = add_walker(&mut sim, unit_speed_distance_params(10.0));

        sim.run_until(SimTime::from_secs(35)).unwrap();

        let expected: Vec<SimTime> = (0..=3).map(|i| SimTime::from_secs(i * 10)).collect();
        assert_eq!(rec.times_for(id), expected);
        assert!((sim.velocity(id).unwrap().speed() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn every_resample_notifies() {
        let (mut sim, rec) = sim_with_recorder(3);
        add_walker(&mut sim, time_params(1));
        add_walker(&mut sim, time_params(1));

        sim.run_until(SimTime::from_secs(10)).unwrap();

        // 2 models × (initial + 10 interval firings).
        assert_eq!(rec.count(), 2 * 11);
    }

    #[test]
    fn step_delivers_one_event() {
        let (mut sim, _rec) = sim_with_recorder(4);
        add_walker(&mut sim, time_params(5));

        assert_eq!(sim.step().unwrap(), Some(SimTime::from_secs(5)));
        assert_eq!(sim.now(), SimTime::from_secs(5));
        assert_eq!(sim.step().unwrap(), Some(SimTime::from_secs(10)));
    }

    #[test]
    fn run_until_advances_clock_even_without_events() {
        let mut sim: Sim<RandomWalkModel> = Sim::new(0);
        sim.run_until(SimTime::from_secs(42)).unwrap();
        assert_eq!(sim.now(), SimTime::from_secs(42));
        assert_eq!(sim.step().unwrap(), None);
    }
}

// ── Position interface ────────────────────────────────────────────────────────

#[cfg(test)]
mod positions {
    use super::*;

    #[test]
    fn read_mid_leg_integrates_lazily() {
        let mut sim: Sim<RandomWalkModel> = Sim::new(5);
        let id = add_walker(&mut sim, unit_speed_distance_params(10.0));

        sim.run_until(SimTime::from_secs(3)).unwrap();
        let p = sim.position(id).unwrap();
        // Unit speed, 3 s into the first 10 m leg.
        assert!((p.distance_to(Position::ORIGIN) - 3.0).abs() < 1e-9);
        assert_eq!(p.z, 0.0);

        // Reading again without advancing time changes nothing.
        assert_eq!(sim.position(id).unwrap(), p);
    }

    #[test]
    fn set_position_notifies_only_on_change() {
        let (mut sim, rec) = sim_with_recorder(6);
        let id = add_walker(&mut sim, time_params(100));
        let after_add = rec.count();

        // Writing the stored value back: no notification.
        sim.set_position(id, Position::ORIGIN).unwrap();
        assert_eq!(rec.count(), after_add);

        // Writing a different value: one notification.
        sim.set_position(id, Position::new(5.0, -2.0)).unwrap();
        assert_eq!(rec.count(), after_add + 1);
        assert_eq!(sim.position(id).unwrap(), Position::new(5.0, -2.0));
    }

    #[test]
    fn set_position_does_not_disturb_the_chain() {
        let (mut sim, rec) = sim_with_recorder(7);
        let id = add_walker(&mut sim, time_params(5));

        sim.run_until(SimTime::from_secs(2)).unwrap();
        sim.set_position(id, Position::new(50.0, 50.0)).unwrap();
        sim.run_until(SimTime::from_secs(10)).unwrap();

        // Resamples still at 0, 5, 10 — plus the forced write at 2.
        assert_eq!(
            rec.times_for(id),
            vec![
                SimTime::ZERO,
                SimTime::from_secs(2),
                SimTime::from_secs(5),
                SimTime::from_secs(10),
            ]
        );
    }
}

// ── Disposal ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod disposal {
    use super::*;

    #[test]
    fn dispose_cancels_pending_event() {
        let (mut sim, rec) = sim_with_recorder(8);
        let id = add_walker(&mut sim, time_params(5));

        sim.run_until(SimTime::from_secs(7)).unwrap();
        let before = rec.times_for(id);
        assert_eq!(before, vec![SimTime::ZERO, SimTime::from_secs(5)]);

        sim.dispose(id).unwrap();
        sim.run_until(SimTime::from_secs(100)).unwrap();

        // No event ever fired for the disposed model.
        assert_eq!(rec.times_for(id), before);
    }

    #[test]
    fn operations_on_disposed_model_fail() {
        let mut sim: Sim<RandomWalkModel> = Sim::new(9);
        let id = add_walker(&mut sim, time_params(5));
        sim.dispose(id).unwrap();

        assert!(matches!(sim.position(id), Err(SimError::ModelDisposed(_))));
        assert!(matches!(sim.velocity(id), Err(SimError::ModelDisposed(_))));
        assert!(matches!(
            sim.set_position(id, Position::ORIGIN),
            Err(SimError::ModelDisposed(_))
        ));
        assert!(matches!(sim.dispose(id), Err(SimError::ModelDisposed(_))));
    }

    #[test]
    fn unknown_model_fails() {
        let mut sim: Sim<RandomWalkModel> = Sim::new(10);
        assert!(matches!(
            sim.position(ModelId(3)),
            Err(SimError::UnknownModel(_))
        ));
    }

    #[test]
    fn other_models_keep_walking() {
        let (mut sim, rec) = sim_with_recorder(11);
        let dead = add_walker(&mut sim, time_params(5));
        let alive = add_walker(&mut sim, time_params(5));

        sim.dispose(dead).unwrap();
        sim.run_until(SimTime::from_secs(10)).unwrap();

        assert_eq!(rec.times_for(dead), vec![SimTime::ZERO]);
        assert_eq!(
            rec.times_for(alive),
            vec![SimTime::ZERO, SimTime::from_secs(5), SimTime::from_secs(10)]
        );
        assert_eq!(sim.live_ids().collect::<Vec<_>>(), vec![alive]);
    }
}

// ── Shared defaults, end to end ───────────────────────────────────────────────

#[cfg(test)]
mod shared_defaults {
    use super::*;

    #[test]
    fn models_share_snapshot_until_defaults_change() {
        let mut defaults = WalkDefaults::new();
        let mut sim: Sim<RandomWalkModel> = Sim::new(12);

        let a = add_walker(&mut sim, defaults.snapshot());
        let b = add_walker(&mut sim, defaults.snapshot());
        assert!(Arc::ptr_eq(
            sim.model(a).unwrap().parameters(),
            sim.model(b).unwrap().parameters()
        ));

        defaults.set_speed_bounds(1.0, 2.0).unwrap();
        let c = add_walker(&mut sim, defaults.snapshot());
        let c_params = sim.model(c).unwrap().parameters();
        assert!(!Arc::ptr_eq(sim.model(a).unwrap().parameters(), c_params));
        assert_eq!((c_params.min_speed, c_params.max_speed), (1.0, 2.0));
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    fn final_positions(seed: u64) -> Vec<Position> {
        let mut sim: Sim<RandomWalkModel> = Sim::new(seed);
        let ids: Vec<ModelId> = (0..4)
            .map(|_| add_walker(&mut sim, Arc::new(WalkParameters::default())))
            .collect();
        sim.run_until(SimTime::from_secs(120)).unwrap();
        ids.iter().map(|&id| sim.position(id).unwrap()).collect()
    }

    #[test]
    fn same_seed_same_trajectories() {
        assert_eq!(final_positions(99), final_positions(99));
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(final_positions(1), final_positions(2));
    }
}
