use resvg::tiny_skia::{Pixmap, Transform};

use crate::{
    foundation::error::{KlokError, KlokResult},
    render::{render_layer, viewport_scale},
    theme::{layer::Layer, store::Theme},
};

/// Single-slot memo of the composited static layers, keyed by viewport size.
///
/// Rasterizing six vector layers is expensive relative to the tick rate, so
/// the static composite is rebuilt only when the viewport size changes and
/// reused as-is on every other draw. The cache is never patched
/// incrementally; any size mismatch drops the old surface and rebuilds from
/// scratch.
#[derive(Default)]
pub struct BackgroundCache {
    surface: Option<Pixmap>,
    width: u32,
    height: u32,
    rebuilds: u64,
}

impl BackgroundCache {
    /// Create an empty cache; the first [`ensure`](Self::ensure) rebuilds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the static composite for `width`x`height`, rebuilding it
    /// first when the cached surface has a different size (or none exists).
    pub fn ensure(
        &mut self,
        theme: &Theme,
        width: u32,
        height: u32,
    ) -> KlokResult<&Pixmap> {
        let hit = self.surface.is_some() && self.width == width && self.height == height;
        if !hit {
            // Release the stale surface before allocating its replacement.
            self.surface = None;
            let surface = render_static_layers(theme, width, height)?;
            self.surface = Some(surface);
            self.width = width;
            self.height = height;
            self.rebuilds += 1;
            tracing::debug!(width, height, rebuilds = self.rebuilds, "background rebuilt");
        }

        match self.surface.as_ref() {
            Some(surface) => Ok(surface),
            None => Err(KlokError::render("background cache empty after rebuild")),
        }
    }

    /// Drop the cached surface; the next [`ensure`](Self::ensure) rebuilds.
    pub fn invalidate(&mut self) {
        self.surface = None;
    }

    /// Number of full rebuilds performed so far.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}

/// Composite the time-invariant layers into a fresh transparent surface in
/// fixed z-order: drop-shadow, face, marks, face-shadow, glass, frame.
///
/// Empty slots are skipped silently; a per-layer failure is logged with the
/// layer name and skipped, and the remaining layers still render.
fn render_static_layers(theme: &Theme, width: u32, height: u32) -> KlokResult<Pixmap> {
    let (sx, sy) = viewport_scale(theme.logical_size(), width, height)?;

    // Pixmap::new clears to fully transparent.
    let mut surface = Pixmap::new(width, height)
        .ok_or_else(|| KlokError::render("failed to allocate background surface"))?;
    let scale = Transform::from_scale(sx, sy);

    for layer in Layer::STATIC_LAYERS {
        let Some(tree) = theme.layer(layer) else {
            continue;
        };
        if let Err(err) = render_layer(tree, scale, theme.logical_size(), &mut surface) {
            tracing::warn!(layer = layer.name(), error = %err, "skipping static layer");
        }
    }

    Ok(surface)
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
