//! Integer angle units ("arcs").
//!
//! A full turn is six screen widths, so one horizontal pixel of the 60° field
//! of view is exactly one arc and no per-column float→angle conversion is
//! ever needed.

/// Angle in arc units. Signed so offsets and un-wrapped sums stay cheap;
/// table lookups always go through [`Arcs::wrap`].
pub type Arc = i32;

/// Arc constants derived from the screen width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arcs {
    pub a5: Arc,
    pub a30: Arc,
    pub a60: Arc,
    pub a90: Arc,
    pub a180: Arc,
    pub a270: Arc,
    pub a360: Arc,
}

impl Arcs {
    /// `width` must be even and positive (checked by `RenderConfig::validate`).
    pub fn for_width(width: usize) -> Self {
        let a60 = width as Arc;
        let a30 = a60 / 2;
        let a90 = a30 * 3;
        let a180 = a90 * 2;
        Self {
            a5: a30 / 6,
            a30,
            a60,
            a90,
            a180,
            a270: a90 * 3,
            a360: a180 * 2,
        }
    }

    /// Fold any arc into `[0, a360)`.
    #[inline(always)]
    pub fn wrap(&self, a: Arc) -> Arc {
        a.rem_euclid(self.a360)
    }

    /// Wrapped arc as a table index.
    #[inline(always)]
    pub fn index(&self, a: Arc) -> usize {
        self.wrap(a) as usize
    }

    /// Arc → radians, no epsilon.
    #[inline]
    pub fn to_rad(&self, a: Arc) -> f64 {
        a as f64 * std::f64::consts::PI / self.a180 as f64
    }

    /// Ray points towards +y (screen "down" on the overhead map).
    #[inline]
    pub fn facing_down(&self, a: Arc) -> bool {
        a > 0 && a < self.a180
    }

    /// Ray points towards +x.
    #[inline]
    pub fn facing_right(&self, a: Arc) -> bool {
        a < self.a90 || a > self.a270
    }
}
