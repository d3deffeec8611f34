pub mod background;
pub mod frame;
pub mod hands;

use resvg::tiny_skia::{Pixmap, Transform};

use crate::foundation::error::{KlokError, KlokResult};

/// Rasterize one layer tree into `surface`.
///
/// `transform` maps the logical coordinate space onto the surface; the tree's
/// intrinsic size is first scaled to `logical` so every layer file shares the
/// drop shadow's coordinate space regardless of its own document size.
///
/// Callers log and skip on error; a single bad layer never aborts a frame.
pub(crate) fn render_layer(
    tree: &usvg::Tree,
    transform: Transform,
    logical: (u32, u32),
    surface: &mut Pixmap,
) -> KlokResult<()> {
    let size = tree.size();
    let (w, h) = (size.width(), size.height());
    if !w.is_finite() || w <= 0.0 || !h.is_finite() || h <= 0.0 {
        return Err(KlokError::render("layer svg has invalid intrinsic size"));
    }

    let fit = Transform::from_scale(logical.0 as f32 / w, logical.1 as f32 / h);
    resvg::render(tree, transform.pre_concat(fit), &mut surface.as_mut());
    Ok(())
}

/// Per-axis scale from the logical coordinate space to a viewport.
///
/// Non-uniform scale is permitted; aspect locking is the window shell's job.
pub(crate) fn viewport_scale(
    logical: (u32, u32),
    width: u32,
    height: u32,
) -> KlokResult<(f32, f32)> {
    if width == 0 || height == 0 {
        return Err(KlokError::render(format!(
            "viewport must be non-empty, got {width}x{height}"
        )));
    }
    let sx = width as f32 / logical.0 as f32;
    let sy = height as f32 / logical.1 as f32;
    if !sx.is_finite() || sx <= 0.0 || !sy.is_finite() || sy <= 0.0 {
        return Err(KlokError::render("degenerate viewport scale"));
    }
    Ok((sx, sy))
}
