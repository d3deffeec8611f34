//! Klok is the rendering engine behind a themeable analog SVG desktop clock.
//!
//! A theme is a directory of up to twelve conventionally named SVG files
//! (see [`Layer`]). The engine loads them once, composites the time-invariant
//! layers into a cached background surface, and rotates the hand layers over
//! it on every draw:
//!
//! 1. **Load**: `theme dir -> Theme` (parsed `usvg` trees, one optional slot
//!    per layer; the drop shadow's intrinsic size becomes the logical
//!    coordinate space)
//! 2. **Background**: static layers -> [`BackgroundCache`], rebuilt only when
//!    the viewport size changes
//! 3. **Hands**: wall-clock time -> [`HandAngles`] -> rotated hand/shadow
//!    layers drawn on top of the cached background
//! 4. **Frame**: [`FrameRenderer`] glues 2 and 3 into one premultiplied
//!    RGBA8 frame ready for texture upload
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO during steady state**: theme loading is front-loaded in
//!   [`Theme::load`]; draw calls never touch the filesystem.
//! - **Degrade, don't fail**: a missing optional layer or a per-layer render
//!   problem is a `tracing` warning and a skipped layer, never an error that
//!   crosses back into application control flow.
//! - **Premultiplied RGBA8** end-to-end: frames come out premultiplied.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod clock;
mod config;
mod foundation;
mod render;
mod theme;

pub use clock::angles::HandAngles;
pub use config::prefs::{Prefs, config_dir, default_prefs_path};
pub use foundation::error::{KlokError, KlokResult};
pub use render::background::BackgroundCache;
pub use render::frame::{FrameRenderer, FrameRgba};
pub use render::hands::draw_hands;
pub use theme::layer::Layer;
pub use theme::store::{SYSTEM_THEMES_ROOT, Theme, ThemeOptions, theme_dir};
