//! Unit tests for mob-core primitives.

#[cfg(test)]
mod ids {
    use crate::{GoalId, MobId};

    #[test]
    fn index_roundtrip() {
        let id = MobId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(MobId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(MobId(0) < MobId(1));
        assert!(GoalId(100) > GoalId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(MobId::INVALID.0, u32::MAX);
        assert_eq!(GoalId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(GoalId(7).to_string(), "GoalId(7)");
    }
}

#[cfg(test)]
mod flags {
    use crate::{FlagSet, ResourceFlag};

    #[test]
    fn empty_set() {
        let set = FlagSet::EMPTY;
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        for flag in ResourceFlag::ALL {
            assert!(!set.contains(flag));
        }
    }

    #[test]
    fn of_and_contains() {
        let set = FlagSet::of(&[ResourceFlag::Move, ResourceFlag::Jump]);
        assert!(set.contains(ResourceFlag::Move));
        assert!(set.contains(ResourceFlag::Jump));
        assert!(!set.contains(ResourceFlag::Look));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn duplicates_are_harmless() {
        let set = FlagSet::of(&[ResourceFlag::Look, ResourceFlag::Look]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn intersects() {
        let a = FlagSet::of(&[ResourceFlag::Move, ResourceFlag::Look]);
        let b = FlagSet::single(ResourceFlag::Look);
        let c = FlagSet::single(ResourceFlag::Target);
        assert!(a.intersects(b));
        assert!(!a.intersects(c));
        assert!(!FlagSet::EMPTY.intersects(a));
    }

    #[test]
    fn insert_remove() {
        let mut set = FlagSet::EMPTY;
        set.insert(ResourceFlag::Target);
        assert!(set.contains(ResourceFlag::Target));
        set.remove(ResourceFlag::Target);
        assert!(set.is_empty());
    }

    #[test]
    fn iter_ordinal_order() {
        let set = FlagSet::of(&[ResourceFlag::Target, ResourceFlag::Move]);
        let flags: Vec<_> = set.iter().collect();
        assert_eq!(flags, vec![ResourceFlag::Move, ResourceFlag::Target]);
    }

    #[test]
    fn bitor_combinators() {
        let set = FlagSet::single(ResourceFlag::Move) | ResourceFlag::Look;
        assert_eq!(set, FlagSet::of(&[ResourceFlag::Move, ResourceFlag::Look]));
        let all: FlagSet = ResourceFlag::ALL.into_iter().collect();
        assert_eq!(all, FlagSet::ALL);
    }

    #[test]
    fn display() {
        let set = FlagSet::of(&[ResourceFlag::Move, ResourceFlag::Look]);
        assert_eq!(set.to_string(), "{move|look}");
        assert_eq!(FlagSet::EMPTY.to_string(), "{}");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn offset_and_since() {
        let t = Tick(10);
        assert_eq!(t.offset(5), Tick(15));
        assert_eq!(Tick(15).since(t), 5);
        assert_eq!(Tick(15) - t, 5);
    }

    #[test]
    fn advance() {
        let mut t = Tick::ZERO;
        t.advance();
        t.advance();
        assert_eq!(t, Tick(2));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

#[cfg(test)]
mod pos {
    use crate::Vec2;

    #[test]
    fn distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalized_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn toward_is_unit_length() {
        let dir = Vec2::new(1.0, 1.0).toward(Vec2::new(4.0, 5.0));
        assert!((dir.length() - 1.0).abs() < 1e-5);
    }
}

#[cfg(test)]
mod rng {
    use crate::{MobId, MobRng};

    #[test]
    fn deterministic_per_mob() {
        let mut a1 = MobRng::new(42, MobId(0));
        let mut a2 = MobRng::new(42, MobId(0));
        let xs: Vec<u64> = (0..8).map(|_| a1.random::<u64>()).collect();
        let ys: Vec<u64> = (0..8).map(|_| a2.random::<u64>()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_mobs_diverge() {
        let mut a = MobRng::new(42, MobId(0));
        let mut b = MobRng::new(42, MobId(1));
        let xs: Vec<u64> = (0..8).map(|_| a.random::<u64>()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random::<u64>()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = MobRng::new(7, MobId(3));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // Out-of-range probabilities are clamped rather than panicking.
        assert!(rng.gen_bool(2.0));
    }
}
