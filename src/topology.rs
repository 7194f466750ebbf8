//! Folded-strip coordinate mapping.
//!
//! The staff houses two LED strips folded back on themselves: logical
//! indices 0 and N-1 sit together at the grip, and indices N/2-1 and N/2
//! meet at the far tip. Every effect that cares about "how far from the
//! grip" a pixel is goes through [`Topology::distance_from_root`].

/// Physical arrangement of a logical pixel run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Both ends of the index range are at the grip, the middle is at the tip.
    Folded,
    /// Plain straight strip; distance is measured from the midpoint.
    Linear,
}

impl Topology {
    /// Distance of pixel `i` from the grip-side root, in pixels.
    ///
    /// Total for all `0 <= i < n` with `n >= 2`. Under [`Topology::Folded`]
    /// the result is symmetric: `distance_from_root(i, n) ==
    /// distance_from_root(n - 1 - i, n)`.
    #[must_use]
    pub const fn distance_from_root(self, i: usize, n: usize) -> usize {
        let midpoint = n / 2;
        match self {
            Self::Folded => {
                if i < midpoint {
                    i
                } else {
                    n - 1 - i
                }
            }
            Self::Linear => {
                if i < midpoint {
                    midpoint - i
                } else {
                    i - midpoint
                }
            }
        }
    }

    /// Index of the first pixel of the second half (the fold point).
    #[must_use]
    pub const fn midpoint(self, n: usize) -> usize {
        n / 2
    }
}
