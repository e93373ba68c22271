//! Resource flags — the mutually-exclusive capability categories a goal may
//! claim while running.
//!
//! # Design
//!
//! The flag set is closed and tiny (four variants), so it is represented as a
//! plain enum plus a `u8`-backed [`FlagSet`] bitset.  Exhaustive `match`es
//! over [`ResourceFlag`] are compiler-checked, set operations are single
//! bitwise instructions, and a flag→holder lock table can be a fixed
//! four-element array indexed by [`ResourceFlag::index`].

use std::fmt;

// ── ResourceFlag ──────────────────────────────────────────────────────────────

/// A capability category that at most one running goal may hold at a time.
///
/// Two goals whose flag sets intersect can never run concurrently for the
/// same mob; the arbitrator resolves the conflict by priority.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceFlag {
    /// Locomotion — walking, fleeing, pathing toward a target.
    Move,
    /// Gaze direction — where the mob's head/eyes point.
    Look,
    /// Vertical impulse — jumping, hopping obstacles.
    Jump,
    /// Target acquisition — choosing what to attack or follow.
    Target,
}

impl ResourceFlag {
    /// Number of flag variants.  Lock tables are `[_; ResourceFlag::COUNT]`.
    pub const COUNT: usize = 4;

    /// All variants in ordinal order.
    pub const ALL: [ResourceFlag; Self::COUNT] = [
        ResourceFlag::Move,
        ResourceFlag::Look,
        ResourceFlag::Jump,
        ResourceFlag::Target,
    ];

    /// Ordinal of this flag, suitable for array indexing.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label for logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            ResourceFlag::Move   => "move",
            ResourceFlag::Look   => "look",
            ResourceFlag::Jump   => "jump",
            ResourceFlag::Target => "target",
        }
    }
}

impl fmt::Display for ResourceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FlagSet ───────────────────────────────────────────────────────────────────

/// A set of [`ResourceFlag`]s stored as one byte.
///
/// All operations are O(1) bitwise arithmetic.  Construction is
/// const-friendly so goals can declare their requirements as constants:
///
/// ```
/// use mob_core::{FlagSet, ResourceFlag};
///
/// const FLAGS: FlagSet = FlagSet::of(&[ResourceFlag::Move, ResourceFlag::Look]);
/// assert!(FLAGS.contains(ResourceFlag::Move));
/// assert!(!FLAGS.contains(ResourceFlag::Jump));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlagSet(u8);

impl FlagSet {
    /// The empty set — a goal with no resource requirements.
    pub const EMPTY: FlagSet = FlagSet(0);

    /// Every flag.
    pub const ALL: FlagSet = FlagSet((1 << ResourceFlag::COUNT) - 1);

    /// Build a set from a slice of flags.  Duplicates are harmless.
    pub const fn of(flags: &[ResourceFlag]) -> FlagSet {
        let mut bits = 0u8;
        let mut i = 0;
        while i < flags.len() {
            bits |= 1 << flags[i].index();
            i += 1;
        }
        FlagSet(bits)
    }

    /// The singleton set containing only `flag`.
    #[inline(always)]
    pub const fn single(flag: ResourceFlag) -> FlagSet {
        FlagSet(1 << flag.index())
    }

    #[inline(always)]
    pub const fn contains(self, flag: ResourceFlag) -> bool {
        self.0 & (1 << flag.index()) != 0
    }

    /// `true` if the two sets share at least one flag.
    #[inline(always)]
    pub const fn intersects(self, other: FlagSet) -> bool {
        self.0 & other.0 != 0
    }

    #[inline(always)]
    pub fn insert(&mut self, flag: ResourceFlag) {
        self.0 |= 1 << flag.index();
    }

    #[inline(always)]
    pub fn remove(&mut self, flag: ResourceFlag) {
        self.0 &= !(1 << flag.index());
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of flags in the set.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the contained flags in ordinal order.
    pub fn iter(self) -> impl Iterator<Item = ResourceFlag> {
        ResourceFlag::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl From<ResourceFlag> for FlagSet {
    #[inline(always)]
    fn from(flag: ResourceFlag) -> FlagSet {
        FlagSet::single(flag)
    }
}

impl std::ops::BitOr for FlagSet {
    type Output = FlagSet;
    #[inline(always)]
    fn bitor(self, rhs: FlagSet) -> FlagSet {
        FlagSet(self.0 | rhs.0)
    }
}

impl std::ops::BitOr<ResourceFlag> for FlagSet {
    type Output = FlagSet;
    #[inline(always)]
    fn bitor(self, rhs: ResourceFlag) -> FlagSet {
        FlagSet(self.0 | FlagSet::single(rhs).0)
    }
}

impl FromIterator<ResourceFlag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = ResourceFlag>>(iter: I) -> FlagSet {
        let mut set = FlagSet::EMPTY;
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for flag in self.iter() {
            if !first {
                write!(f, "|")?;
            }
            f.write_str(flag.as_str())?;
            first = false;
        }
        write!(f, "}}")
    }
}
