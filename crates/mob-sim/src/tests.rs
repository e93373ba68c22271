//! Unit tests for the demo world.

use mob_core::{MobId, ResourceFlag, Tick, Vec2};
use mob_goal::GoalSelector;

use crate::{
    GrazeGoal, Mob, NoopObserver, PanicGoal, SimBuilder, SimConfig, SimError, SimObserver,
    WanderGoal,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(total_ticks: u64) -> SimConfig {
    SimConfig { total_ticks, seed: 42 }
}

fn lone_mob() -> Mob {
    Mob::new(MobId(0), 42, Vec2::ZERO)
}

/// One goal-selector tick followed by the sim's movement integration.
fn step(selector: &mut GoalSelector<Mob>, mob: &mut Mob) {
    selector.tick(mob);
    mob.apply_movement();
}

// ── Mob ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mob {
    use super::*;

    #[test]
    fn movement_clamps_to_target_and_clears_it() {
        let mut mob = lone_mob();
        mob.move_target = Some(Vec2::new(1.0, 0.0));
        mob.move_speed = 5.0;
        mob.apply_movement();
        assert_eq!(mob.pos, Vec2::new(1.0, 0.0));
        assert!(!mob.is_moving());
    }

    #[test]
    fn movement_steps_by_speed() {
        let mut mob = lone_mob();
        mob.move_target = Some(Vec2::new(10.0, 0.0));
        mob.move_speed = 1.0;
        mob.apply_movement();
        assert!((mob.pos.x - 1.0).abs() < 1e-5);
        assert!(mob.is_moving());
        assert_eq!(mob.heading, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn digest_saturates_at_zero() {
        let mut mob = lone_mob();
        mob.fullness = 1;
        mob.digest();
        mob.digest();
        assert_eq!(mob.fullness, 0);
    }
}

// ── Goals ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod goals {
    use super::*;

    #[test]
    fn wander_eventually_moves_the_mob() {
        let mut mob = lone_mob();
        let mut selector = GoalSelector::new();
        // chance 1 → triggers on the first idle tick.
        selector.add(6, WanderGoal::new(10.0, 1, 0.5));

        for _ in 0..50 {
            step(&mut selector, &mut mob);
        }
        assert!(mob.pos != Vec2::ZERO);
    }

    #[test]
    fn panic_flees_until_safe_distance() {
        let mut mob = lone_mob();
        let mut selector = GoalSelector::new();
        let panic_id = selector.add(1, PanicGoal::new(1.0, 20.0));

        mob.threat = Some(Vec2::new(1.0, 0.0));
        step(&mut selector, &mut mob);
        assert_eq!(selector.holder_of(ResourceFlag::Move), Some(panic_id));

        let mut last_distance = mob.pos.distance(Vec2::new(1.0, 0.0));
        for _ in 0..30 {
            step(&mut selector, &mut mob);
            let d = mob.pos.distance(Vec2::new(1.0, 0.0));
            assert!(d >= last_distance, "panic moved toward the threat");
            last_distance = d;
        }

        // Far enough away: the goal has let go.
        assert!(last_distance >= 20.0);
        assert_eq!(selector.running_goals().count(), 0);
        assert!(!mob.is_moving());
    }

    #[test]
    fn panic_preempts_wander() {
        let mut mob = lone_mob();
        let mut selector = GoalSelector::new();
        let panic_id = selector.add(1, PanicGoal::new(1.0, 20.0));
        let wander_id = selector.add(6, WanderGoal::new(10.0, 1, 0.5));

        step(&mut selector, &mut mob);
        assert_eq!(selector.holder_of(ResourceFlag::Move), Some(wander_id));

        mob.threat = Some(mob.pos);
        step(&mut selector, &mut mob);
        assert_eq!(selector.holder_of(ResourceFlag::Move), Some(panic_id));
    }

    #[test]
    fn calm_releases_panic() {
        let mut mob = lone_mob();
        let mut selector = GoalSelector::new();
        let panic_id = selector.add(1, PanicGoal::new(1.0, 100.0));

        mob.threat = Some(Vec2::new(1.0, 0.0));
        step(&mut selector, &mut mob);
        assert_eq!(selector.holder_of(ResourceFlag::Move), Some(panic_id));

        mob.threat = None;
        step(&mut selector, &mut mob);
        assert_eq!(selector.running_goals().count(), 0);
    }

    #[test]
    fn graze_refills_fullness_and_holds_move() {
        let mut mob = lone_mob();
        mob.fullness = 10;
        let mut selector = GoalSelector::new();
        let graze_id = selector.add(2, GrazeGoal::new(1, 50));
        let wander_id = selector.add(6, WanderGoal::new(10.0, 1, 0.5));

        for i in 0..GrazeGoal::EAT_TICKS {
            step(&mut selector, &mut mob);
            if i < GrazeGoal::EAT_TICKS - 1 {
                // Mid-meal: grazing holds Move, so wandering stays idle.
                assert_eq!(selector.holder_of(ResourceFlag::Move), Some(graze_id));
                assert!(!selector.goals().any(|g| g.id() == wander_id && g.is_running()));
            }
        }
        assert_eq!(mob.fullness, Mob::MAX_FULLNESS);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn rejects_zero_total_ticks() {
        let err = SimBuilder::new(config(0), 1).build(|_, _| {}).unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_position_count_mismatch() {
        let err = SimBuilder::new(config(10), 2)
            .positions(vec![Vec2::ZERO])
            .build(|_, _| {})
            .unwrap_err();
        assert!(matches!(
            err,
            SimError::MobCountMismatch { expected: 2, got: 1, .. }
        ));
    }

    #[test]
    fn defaults_spawn_at_origin() {
        let sim = SimBuilder::new(config(10), 3).build(|_, _| {}).unwrap();
        assert_eq!(sim.mob_count(), 3);
        assert!(sim.mobs().all(|m| m.pos == Vec2::ZERO));
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sim {
    use super::*;

    fn pasture(total_ticks: u64) -> crate::Sim {
        SimBuilder::new(config(total_ticks), 4)
            .positions(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(5.0, 0.0),
                Vec2::new(0.0, 5.0),
                Vec2::new(5.0, 5.0),
            ])
            .build(|_, selector| {
                selector.add(1, PanicGoal::new(1.2, 24.0));
                selector.add(2, GrazeGoal::new(50, 60));
                selector.add(6, WanderGoal::new(8.0, 40, 0.5));
            })
            .unwrap()
    }

    #[test]
    fn identical_seeds_produce_identical_runs() {
        let mut a = pasture(150);
        let mut b = pasture(150);
        a.run(&mut NoopObserver);
        b.run(&mut NoopObserver);

        let pos_a: Vec<Vec2> = a.mobs().map(|m| m.pos).collect();
        let pos_b: Vec<Vec2> = b.mobs().map(|m| m.pos).collect();
        assert_eq!(pos_a, pos_b);
    }

    #[test]
    fn scare_event_drives_the_mob_away() {
        let mut sim = pasture(1_000);
        sim.run_ticks(5, &mut NoopObserver);

        let mob = MobId(0);
        let threat = sim.mob(mob).unwrap().pos + Vec2::new(1.0, 0.0);
        assert!(sim.scare(mob, threat));
        sim.run_ticks(10, &mut NoopObserver);

        let distance = sim.mob(mob).unwrap().pos.distance(threat);
        assert!(distance > 5.0, "mob only {distance} units from threat");
        // The selector shows the panic goal (priority 1) holding Move.
        let selector = sim.selector(mob).unwrap();
        let holder = selector.holder_of(ResourceFlag::Move).unwrap();
        let running_priority = selector
            .goals()
            .find(|g| g.id() == holder)
            .map(|g| g.priority());
        assert_eq!(running_priority, Some(1));
    }

    #[test]
    fn scare_unknown_mob_is_rejected() {
        let mut sim = pasture(10);
        assert!(!sim.scare(MobId(99), Vec2::ZERO));
        assert!(!sim.calm(MobId(99)));
    }

    #[test]
    fn observer_sees_every_tick() {
        #[derive(Default)]
        struct TickCounter {
            ticks: usize,
            ended_at: Option<Tick>,
        }
        impl SimObserver for TickCounter {
            fn on_tick_end(&mut self, _tick: Tick, _running: usize) {
                self.ticks += 1;
            }
            fn on_sim_end(&mut self, final_tick: Tick) {
                self.ended_at = Some(final_tick);
            }
        }

        let mut sim = pasture(20);
        let mut counter = TickCounter::default();
        sim.run(&mut counter);
        assert_eq!(counter.ticks, 20);
        assert_eq!(counter.ended_at, Some(Tick(20)));
    }
}
