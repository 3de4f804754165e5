use crate::audio::controller::PlaybackController;
use crate::audio::player::RodioBackend;
use crate::audio::sampler::PositionSampler;
use crate::config::PlayerConfig;
use crate::ui::view_state::ViewState;
use crate::utils::time_format::seek_target;
use eframe::egui::{self, CentralPanel, Context, Layout, Slider};
use eframe::Frame;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

const ACCENT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x03, 0x45, 0xfc);
const LIGHTER_ACCENT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x66, 0x99, 0xFF);

/// What the user asked for during a frame, applied after rendering.
enum UiAction {
    PickFile,
    TogglePlayPause,
    Seek(Duration),
}

pub struct PlayerApp {
    config: PlayerConfig,
    player: PlaybackController<RodioBackend>,
    sampler: PositionSampler,
}

impl PlayerApp {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            sampler: PositionSampler::new(config.refresh_interval()),
            player: PlaybackController::new(RodioBackend::default()),
            config,
        }
    }
}

impl eframe::App for PlayerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();
        self.player.poll_completion();
        self.sampler.tick(&mut self.player, now);

        if let Some(wait) = self.sampler.until_next(now) {
            ctx.request_repaint_after(wait);
        }

        let view = self.player.view_state();
        if let Some(action) = self.render_ui(ctx, &view) {
            self.apply(action, &view);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.player.release();
    }
}

impl PlayerApp {
    fn render_ui(&self, ctx: &Context, view: &ViewState) -> Option<UiAction> {
        let mut action = None;

        CentralPanel::default().show(ctx, |ui| {
            ui.label(format!("File: {}", view.file_name));
            ui.add_space(16.0);

            if let Some(seek) = Self::render_seek_bar(ui, view) {
                action = Some(seek);
            }
            ui.add_space(4.0);

            ui.allocate_ui_with_layout(
                egui::vec2(ui.available_width(), 20.0),
                Layout::left_to_right(egui::Align::Center),
                |ui| {
                    ui.label(view.elapsed_label());
                    ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(view.duration_label());
                    });
                },
            );
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Choose and Play").clicked() {
                    action = Some(UiAction::PickFile);
                }
                ui.add_space(16.0);
                if ui.button(view.play_button_label()).clicked() {
                    action = Some(UiAction::TogglePlayPause);
                }
            });
        });

        action
    }

    fn render_seek_bar(ui: &mut egui::Ui, view: &ViewState) -> Option<UiAction> {
        let mut fraction = view.progress();

        ui.scope(|ui| {
            let width = ui.available_width();
            ui.spacing_mut().slider_width = width;
            ui.visuals_mut().selection.bg_fill = ACCENT_COLOR;
            ui.visuals_mut().widgets.inactive.bg_fill = LIGHTER_ACCENT_COLOR;

            let response = ui.add(
                Slider::new(&mut fraction, 0.0..=1.0)
                    .show_value(false)
                    .trailing_fill(true),
            );

            response
                .changed()
                .then(|| UiAction::Seek(seek_target(fraction, view.duration)))
        })
        .inner
    }

    fn apply(&mut self, action: UiAction, view: &ViewState) {
        match action {
            UiAction::PickFile => {
                if let Some(path) = self.pick_file() {
                    self.player.load(&path);
                }
            }
            UiAction::TogglePlayPause => self.player.toggle(),
            UiAction::Seek(target) => {
                debug!(
                    from_ms = view.elapsed.as_millis() as u64,
                    to_ms = target.as_millis() as u64,
                    "seek bar dragged"
                );
                self.player.seek(target);
            }
        }
    }

    fn pick_file(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("Audio", self.config.audio_extensions.as_slice())
            .pick_file()
    }
}
