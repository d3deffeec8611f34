use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureOptions};
use klok::{FrameRenderer, HandAngles, Prefs, Theme};

/// The window shell: one clock per window, redrawn on a fixed-interval tick.
///
/// Each `update` renders one frame into an egui texture and schedules the
/// next tick; the windowing layer may coalesce ticks under load. Preferences
/// are written back with the final window size when the app is dropped.
pub struct ClockApp {
    theme: Theme,
    prefs: Prefs,
    renderer: FrameRenderer,
    texture: Option<TextureHandle>,
}

impl ClockApp {
    pub fn new(theme: Theme, prefs: Prefs) -> Self {
        Self {
            theme,
            prefs,
            renderer: FrameRenderer::new(),
            texture: None,
        }
    }

    fn paint_clock(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let avail = ui.available_rect_before_wrap();

        // Aspect-lock the destination rect to the logical artwork so window
        // resizes never distort the face.
        let (logical_w, logical_h) = self.theme.logical_size();
        let aspect = logical_w as f32 / logical_h as f32;
        let mut size = avail.size();
        if size.x / size.y > aspect {
            size.x = size.y * aspect;
        } else {
            size.y = size.x / aspect;
        }
        let rect = egui::Rect::from_center_size(avail.center(), size);

        // Rasterize at physical resolution so the vector art stays crisp on
        // hidpi screens.
        let ppp = ctx.pixels_per_point();
        let width = (size.x * ppp).round().max(1.0) as u32;
        let height = (size.y * ppp).round().max(1.0) as u32;

        match self.renderer.render(&self.theme, HandAngles::now(), width, height) {
            Ok(frame) => {
                let pixels = frame
                    .data
                    .chunks_exact(4)
                    .map(|px| Color32::from_rgba_premultiplied(px[0], px[1], px[2], px[3]))
                    .collect();
                let image = ColorImage {
                    size: [frame.width as usize, frame.height as usize],
                    pixels,
                };
                match &mut self.texture {
                    Some(texture) => texture.set(image, TextureOptions::LINEAR),
                    None => {
                        self.texture =
                            Some(ctx.load_texture("clock-frame", image, TextureOptions::LINEAR));
                    }
                }
            }
            Err(err) => tracing::warn!(error = %err, "frame render failed"),
        }

        if let Some(texture) = &self.texture {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ui.painter().image(texture.id(), rect, uv, Color32::WHITE);
        }
    }
}

impl eframe::App for ClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track the live window size so the shutdown save persists it.
        let window = ctx.screen_rect().size();
        self.prefs.width = window.x.round().max(1.0) as u32;
        self.prefs.height = window.y.round().max(1.0) as u32;

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.paint_clock(ctx, ui);

                // Undecorated window: drag anywhere to move it.
                let response = ui.interact(
                    ui.max_rect(),
                    egui::Id::new("clock-drag"),
                    egui::Sense::drag(),
                );
                if response.drag_started() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                }
            });

        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Arm the next tick; stopping only happens at process exit.
        ctx.request_repaint_after(self.prefs.tick_interval());
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Fully transparent window background; only the artwork shows.
        [0.0, 0.0, 0.0, 0.0]
    }
}

impl Drop for ClockApp {
    fn drop(&mut self) {
        // Save failure must not prevent a clean shutdown.
        if let Err(err) = self.prefs.save() {
            tracing::warn!(error = %err, "failed to save preferences");
        }
    }
}
