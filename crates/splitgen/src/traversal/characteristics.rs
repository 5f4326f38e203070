use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// Properties a traversal guarantees about the values it produces.
///
/// A small bit set; combine flags with `|`.
///
/// ```
/// use splitgen::Characteristics;
///
/// let flags = Characteristics::ORDERED | Characteristics::DISTINCT;
/// assert!(flags.contains(Characteristics::DISTINCT));
/// assert!(!flags.contains(Characteristics::SIZED));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Characteristics(u8);

impl Characteristics {
    /// Values have a defined encounter order (ascending index).
    pub const ORDERED: Self = Self(1 << 0);
    /// No two produced values are equal.
    pub const DISTINCT: Self = Self(1 << 1);
    /// Values are produced in their natural sort order.
    pub const SORTED: Self = Self(1 << 2);
    /// The exact remaining size is known as a `u64`.
    pub const SIZED: Self = Self(1 << 3);
    /// Every traversal produced by a split is also `SIZED`.
    pub const SUBSIZED: Self = Self(1 << 4);
    /// The source domain cannot change during traversal.
    pub const IMMUTABLE: Self = Self(1 << 5);

    const NAMES: [(Self, &'static str); 6] = [
        (Self::ORDERED, "ORDERED"),
        (Self::DISTINCT, "DISTINCT"),
        (Self::SORTED, "SORTED"),
        (Self::SIZED, "SIZED"),
        (Self::SUBSIZED, "SUBSIZED"),
        (Self::IMMUTABLE, "IMMUTABLE"),
    ];

    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every flag in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Flags set in either operand.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Flags set in `self` but not in `other`.
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for Characteristics {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Characteristics {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for Characteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}
