//! Precomputed trigonometry indexed by [`Arc`].
//!
//! Built once per renderer and read-only afterwards. Every table except the
//! fisheye one holds `a360 + 1` entries so both `0` and the wrap point exist.

use log::debug;

use crate::engine::angle::{Arc, Arcs};
use crate::world::TILE_SIZE;

/// Added to every table angle so exact multiples of 90° never produce a zero
/// cosine/tangent (which would punch a hole into the wall at those columns).
pub const ANGLE_EPSILON: f64 = 0.0001;

/// Immutable lookup tables consumed by the ray caster.
#[derive(Clone, Debug)]
pub struct TrigTables {
    arcs: Arcs,
    sin: Vec<f32>,
    inv_sin: Vec<f32>,
    cos: Vec<f32>,
    inv_cos: Vec<f32>,
    tan: Vec<f32>,
    inv_tan: Vec<f32>,
    x_step: Vec<f32>,
    y_step: Vec<f32>,
    fish_eye: Vec<f32>,
}

impl TrigTables {
    pub fn build(arcs: Arcs) -> Self {
        let len = arcs.a360 as usize + 1;
        let mut t = Self {
            arcs,
            sin: Vec::with_capacity(len),
            inv_sin: Vec::with_capacity(len),
            cos: Vec::with_capacity(len),
            inv_cos: Vec::with_capacity(len),
            tan: Vec::with_capacity(len),
            inv_tan: Vec::with_capacity(len),
            x_step: Vec::with_capacity(len),
            y_step: Vec::with_capacity(len),
            fish_eye: vec![0.0; arcs.a60 as usize + 1],
        };

        for i in 0..=arcs.a360 {
            let rad = arcs.to_rad(i) + ANGLE_EPSILON;
            let s = rad.sin() as f32;
            let c = rad.cos() as f32;
            let tn = rad.tan() as f32;

            t.sin.push(s);
            t.inv_sin.push(1.0 / s);
            t.cos.push(c);
            t.inv_cos.push(1.0 / c);
            t.tan.push(tn);
            t.inv_tan.push(1.0 / tn);

            // x distance between two consecutive horizontal-line crossings
            let xs = (TILE_SIZE / tn).abs();
            let facing_left = i >= arcs.a90 && i < arcs.a270;
            t.x_step.push(if facing_left { -xs } else { xs });

            // y distance between two consecutive vertical-line crossings
            let ys = (TILE_SIZE * tn).abs();
            let facing_up = i >= arcs.a180;
            t.y_step.push(if facing_up { -ys } else { ys });
        }

        // cos is even: fill both halves from the same value
        for k in 0..=arcs.a30 {
            let f = (1.0 / arcs.to_rad(k).cos()) as f32;
            t.fish_eye[(arcs.a30 + k) as usize] = f;
            t.fish_eye[(arcs.a30 - k) as usize] = f;
        }

        debug!(
            "trig tables built: {} angles, fisheye span {}",
            len,
            t.fish_eye.len()
        );
        t
    }

    #[inline(always)]
    pub fn arcs(&self) -> &Arcs {
        &self.arcs
    }

    #[inline]
    pub fn sin(&self, a: Arc) -> f32 {
        self.sin[self.arcs.index(a)]
    }
    #[inline]
    pub fn inv_sin(&self, a: Arc) -> f32 {
        self.inv_sin[self.arcs.index(a)]
    }
    #[inline]
    pub fn cos(&self, a: Arc) -> f32 {
        self.cos[self.arcs.index(a)]
    }
    #[inline]
    pub fn inv_cos(&self, a: Arc) -> f32 {
        self.inv_cos[self.arcs.index(a)]
    }
    #[inline]
    pub fn tan(&self, a: Arc) -> f32 {
        self.tan[self.arcs.index(a)]
    }
    #[inline]
    pub fn inv_tan(&self, a: Arc) -> f32 {
        self.inv_tan[self.arcs.index(a)]
    }
    #[inline]
    pub fn x_step(&self, a: Arc) -> f32 {
        self.x_step[self.arcs.index(a)]
    }
    #[inline]
    pub fn y_step(&self, a: Arc) -> f32 {
        self.y_step[self.arcs.index(a)]
    }

    /// Fisheye factor `1 / cos(offset)` for a column offset in
    /// `[-a30, a30]`; offsets outside that span are clamped.
    #[inline]
    pub fn fish_eye(&self, offset: Arc) -> f32 {
        let idx = (offset + self.arcs.a30).clamp(0, self.arcs.a60);
        self.fish_eye[idx as usize]
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
