use resvg::tiny_skia::{Pixmap, Transform};

use crate::{
    clock::angles::HandAngles,
    foundation::error::KlokResult,
    render::{render_layer, viewport_scale},
    theme::{layer::Layer, store::Theme},
};

/// Fixed translation applied to hand shadows, in logical pixels, before the
/// hand rotation.
const SHADOW_OFFSET: (f32, f32) = (1.0, 1.0);

/// Base rotation aligning the artwork's "3 o'clock = 0°" rest position with
/// a face where 12 o'clock is up.
const BASE_ROTATION_DEG: f32 = -90.0;

/// Draw the six hand/shadow layers onto `frame`, each rotated about the
/// viewport center by its current angle.
///
/// Draw order is all shadows then all hands ([`Layer::HAND_LAYERS`]), so
/// every shadow stays beneath every hand when hands cross. Each layer
/// composes its own transform from scratch; rotations never accumulate.
/// Empty slots are skipped, per-layer failures are logged and non-fatal.
pub fn draw_hands(
    frame: &mut Pixmap,
    theme: &Theme,
    angles: HandAngles,
    width: u32,
    height: u32,
) -> KlokResult<()> {
    let (sx, sy) = viewport_scale(theme.logical_size(), width, height)?;

    // Viewport center, then logical scale, then the fixed base rotation;
    // per-layer offset and rotation compose on top.
    let base = Transform::from_translate(width as f32 / 2.0, height as f32 / 2.0)
        .pre_concat(Transform::from_scale(sx, sy))
        .pre_concat(Transform::from_rotate(BASE_ROTATION_DEG));

    for layer in Layer::HAND_LAYERS {
        let Some(tree) = theme.layer(layer) else {
            continue;
        };
        let Some(angle_deg) = angles.for_layer(layer) else {
            continue;
        };

        let mut transform = base;
        if layer.is_hand_shadow() {
            // Offset applies before the rotation, like the original artwork
            // expects.
            transform =
                transform.pre_concat(Transform::from_translate(SHADOW_OFFSET.0, SHADOW_OFFSET.1));
        }
        transform = transform.pre_concat(Transform::from_rotate(angle_deg as f32));

        if let Err(err) = render_layer(tree, transform, theme.logical_size(), frame) {
            tracing::warn!(layer = layer.name(), error = %err, "skipping hand layer");
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/hands.rs"]
mod tests;
