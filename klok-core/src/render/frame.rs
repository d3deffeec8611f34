use resvg::tiny_skia::Pixmap;

use crate::{
    clock::angles::HandAngles,
    foundation::error::{KlokError, KlokResult},
    render::{background::BackgroundCache, hands::draw_hands},
    theme::store::Theme,
};

/// One composited frame as a borrowed premultiplied RGBA8 pixel view.
#[derive(Clone, Copy, Debug)]
pub struct FrameRgba<'a> {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 bytes, tightly packed.
    pub data: &'a [u8],
}

/// Composes cached background plus freshly drawn hands into one frame.
///
/// Owns the background cache and a reusable frame surface; neither is
/// reallocated while the viewport size stays the same.
#[derive(Default)]
pub struct FrameRenderer {
    background: BackgroundCache,
    frame: Option<Pixmap>,
}

impl FrameRenderer {
    /// Create a renderer with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of background rebuilds performed so far.
    pub fn background_rebuilds(&self) -> u64 {
        self.background.rebuilds()
    }

    /// Render one frame at `width`x`height` for the given hand angles.
    ///
    /// Ensures the background cache matches the viewport, copies it into the
    /// frame surface, draws the hands on top and exposes the result.
    pub fn render(
        &mut self,
        theme: &Theme,
        angles: HandAngles,
        width: u32,
        height: u32,
    ) -> KlokResult<FrameRgba<'_>> {
        let background = self.background.ensure(theme, width, height)?;

        let reuse = self
            .frame
            .as_ref()
            .is_some_and(|f| f.width() == width && f.height() == height);
        if !reuse {
            self.frame = Some(
                Pixmap::new(width, height)
                    .ok_or_else(|| KlokError::render("failed to allocate frame surface"))?,
            );
        }
        let frame = self
            .frame
            .as_mut()
            .ok_or_else(|| KlokError::render("frame surface missing after allocation"))?;

        // Paint the cached background, then the moving hands.
        frame.data_mut().copy_from_slice(background.data());
        draw_hands(frame, theme, angles, width, height)?;

        Ok(FrameRgba {
            width,
            height,
            data: frame.data(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
