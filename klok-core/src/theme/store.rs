use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    config::prefs,
    foundation::error::{KlokError, KlokResult},
    theme::layer::Layer,
};

/// System-wide themes root; holds a `themes/<name>/` directory per theme.
pub const SYSTEM_THEMES_ROOT: &str = "/usr/share/klok";

/// Options controlling which layers a theme load brings in.
#[derive(Clone, Copy, Debug)]
pub struct ThemeOptions {
    /// When false the second hand and its shadow are never loaded, so
    /// every renderer skips them as empty slots.
    pub show_seconds: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self { show_seconds: true }
    }
}

/// Resolve `<root>/themes/<name>` from either the system themes root or the
/// per-user config directory.
pub fn theme_dir(name: &str, user_themes: bool) -> KlokResult<PathBuf> {
    let root = if user_themes {
        prefs::config_dir()?
    } else {
        PathBuf::from(SYSTEM_THEMES_ROOT)
    };
    Ok(root.join("themes").join(name))
}

/// A loaded theme: one optional parsed SVG tree per layer slot, plus the
/// logical coordinate space taken from the drop shadow's intrinsic size.
///
/// Loading is front-loaded and synchronous; draw calls only read slots.
#[derive(Clone, Debug)]
pub struct Theme {
    name: String,
    slots: [Option<Arc<usvg::Tree>>; Layer::COUNT],
    logical_w: u32,
    logical_h: u32,
}

impl Theme {
    /// Load every layer of the theme at `dir`.
    ///
    /// A required layer that cannot be loaded yields [`KlokError::Theme`].
    /// An optional layer that cannot be loaded logs a warning and leaves its
    /// slot empty; renderers treat the empty slot as "skip this layer".
    #[tracing::instrument(skip(opts))]
    pub fn load(dir: &Path, name: &str, opts: ThemeOptions) -> KlokResult<Self> {
        let mut slots: [Option<Arc<usvg::Tree>>; Layer::COUNT] =
            std::array::from_fn(|_| None);

        for layer in Layer::ALL {
            if layer.is_seconds() && !opts.show_seconds {
                continue;
            }
            let path = dir.join(layer.file_name());
            match load_layer(&path) {
                Ok(tree) => slots[layer.index()] = Some(tree),
                Err(err) if layer.required() => {
                    return Err(KlokError::theme(format!(
                        "cannot load required layer '{}' from '{}': {err:#}",
                        layer.name(),
                        path.display(),
                    )));
                }
                Err(err) => {
                    let err = format!("{err:#}");
                    tracing::warn!(
                        layer = layer.name(),
                        path = %path.display(),
                        error = %err,
                        "optional layer missing, skipping"
                    );
                }
            }
        }

        let drop_shadow = slots[Layer::DropShadow.index()]
            .as_deref()
            .ok_or_else(|| KlokError::theme("drop shadow slot empty after load"))?;
        let (logical_w, logical_h) = intrinsic_px(drop_shadow)?;

        Ok(Self {
            name: name.to_string(),
            slots,
            logical_w,
            logical_h,
        })
    }

    /// Theme name as selected by configuration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parsed tree for `layer`, or `None` when the slot is empty.
    pub fn layer(&self, layer: Layer) -> Option<&usvg::Tree> {
        self.slots[layer.index()].as_deref()
    }

    /// Logical pixel size of the clock artwork, from the drop shadow's
    /// intrinsic size. All layers and hand rotations are scaled against it.
    pub fn logical_size(&self) -> (u32, u32) {
        (self.logical_w, self.logical_h)
    }
}

fn load_layer(path: &Path) -> anyhow::Result<Arc<usvg::Tree>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read svg from '{}'", path.display()))?;
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(&bytes, &opts).context("parse svg tree")?;
    Ok(Arc::new(tree))
}

/// Intrinsic size of a parsed tree in whole pixels, rejecting degenerate
/// documents before they reach the rasterizer.
fn intrinsic_px(tree: &usvg::Tree) -> KlokResult<(u32, u32)> {
    fn to_px(v: f32) -> KlokResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(KlokError::theme("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    Ok((to_px(size.width())?, to_px(size.height())?))
}

#[cfg(test)]
#[path = "../../tests/unit/theme/store.rs"]
mod tests;
