//! Rendering abstraction layer.
//!
//! *The ray caster never touches a pixel buffer directly.*
//! It produces a list of [`WallSlice`]s (left-to-right) and hands them to a
//! type that implements [`Renderer`].
//!
//! * Back-ends only need opaque rectangle fills and lines.
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use crate::engine::WallSlice;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

pub mod overhead;
pub mod palette;
pub mod software;

pub use overhead::draw_overhead;
pub use software::Software;

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Opaque rectangle `x .. x + w`, `y .. y + h`; clipped to the frame.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba);

    /// One-pixel line, clipped to the frame.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl: background, slices and frame bracketing.
pub trait RendererExt: Renderer {
    /// Banded sky over the top three fifths, banded ground below.
    fn draw_background(&mut self, width: usize, height: usize) {
        let (w, h) = (width as i32, height as i32);

        let mut c: u32 = 25;
        let mut r = 0;
        while r < (h / 5) * 3 {
            self.fill_rect(0, r, w, 10, palette::rgb(c.min(255) as u8, 125, 225));
            c += 5;
            r += 10;
        }

        c = 22;
        while r < h {
            self.fill_rect(0, r, w, 15, palette::rgb(20, c.min(255) as u8, 20));
            c += 10;
            r += 5;
        }
    }

    fn draw_slices(&mut self, slices: &[WallSlice]) {
        for s in slices {
            self.fill_rect(s.x as i32, s.top, s.w as i32, s.height(), s.color);
        }
    }

    /// Whole frame in one call; the overhead map, if wanted, goes through
    /// `overlay` before the buffer is submitted.
    fn draw_frame<O, F>(
        &mut self,
        width: usize,
        height: usize,
        slices: &[WallSlice],
        overlay: O,
        submit: F,
    ) where
        O: FnOnce(&mut Self),
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        self.draw_background(width, height);
        self.draw_slices(slices);
        overlay(self);
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}
