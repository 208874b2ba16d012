use egui::Context;

use crate::controller::{GameSession, KeyBindings};
use crate::model::{CENTER_LANE, LANE_COUNT};

/// Draw the HUD for the current frame. Call inside `Context::run`.
pub fn draw_hud(ctx: &Context, session: &GameSession, bindings: &KeyBindings, fps: f32) {
    draw_status_window(ctx, session, fps);
    draw_controls_window(ctx, bindings);
    draw_banner(ctx, session);
    draw_lane_strip(ctx, session);
}

fn draw_status_window(ctx: &Context, session: &GameSession, fps: f32) {
    let camera = session.camera();
    let track = session.track();

    egui::Window::new("Run")
        .default_pos([8.0, 8.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(format!("Lives: {} / {}", session.lives(), session.starting_lives())).strong());
            ui.add(egui::ProgressBar::new(track.progress()).show_percentage());
            ui.label(egui::RichText::new(format!("Obstacle: {} / {}", track.cursor() + 1, track.len())).small());
            ui.label(egui::RichText::new(format!("Lane: {}  Speed: {:.1}", camera.lane, camera.forward_speed)).small());
            ui.label(egui::RichText::new(format!("z: {:.1}", camera.eye.z)).small());
            ui.label(egui::RichText::new(format!("FPS: {fps:.0}")).small());
        });
}

fn key_label(key: &str) -> &str {
    match key {
        " " => "Space",
        other => other,
    }
}

fn draw_controls_window(ctx: &Context, bindings: &KeyBindings) {
    egui::Window::new("Controls")
        .default_pos([8.0, 200.0])
        .default_open(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(format!("{} / Left - Lane left", key_label(&bindings.left))).small());
            ui.label(egui::RichText::new(format!("{} / Right - Lane right", key_label(&bindings.right))).small());
            ui.label(egui::RichText::new(format!("{} - Pause", key_label(&bindings.pause))).small());
            ui.label(egui::RichText::new(format!("{} - Restart", key_label(&bindings.restart))).small());
            ui.label(egui::RichText::new(format!("{} - Speed up", key_label(&bindings.boost))).small());
            ui.label(egui::RichText::new(format!("{} - Quit", key_label(&bindings.quit))).small());
        });
}

fn draw_banner(ctx: &Context, session: &GameSession) {
    let text = if session.is_won() {
        "WIN"
    } else if session.is_paused() {
        "PAUSED"
    } else {
        return;
    };

    egui::Area::new(egui::Id::new("banner"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 24.0])
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(text).size(32.0).color(egui::Color32::WHITE));
        });
}

/// Five boxes along the bottom: the player's lane outlined, the current
/// obstacle's lane filled red.
fn draw_lane_strip(ctx: &Context, session: &GameSession) {
    let player_lane = session.camera().lane;
    let obstacle_lane = session.track().current().lane + CENTER_LANE;

    egui::Area::new(egui::Id::new("lanes"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -8.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for lane in 1..=LANE_COUNT {
                    let fill = if lane == obstacle_lane {
                        egui::Color32::from_rgb(240, 90, 64)
                    } else {
                        egui::Color32::from_rgb(40, 40, 56)
                    };
                    let stroke = if lane == player_lane {
                        egui::Stroke::new(2.0, egui::Color32::YELLOW)
                    } else {
                        egui::Stroke::new(0.5, egui::Color32::BLACK)
                    };
                    egui::Frame::NONE
                        .fill(fill)
                        .stroke(stroke)
                        .inner_margin(2.0)
                        .show(ui, |ui| {
                            ui.set_min_size(egui::vec2(36.0, 36.0));
                            ui.vertical_centered(|ui| {
                                ui.label(egui::RichText::new(lane.to_string()).size(10.0).color(egui::Color32::WHITE));
                            });
                        });
                }
            });
        });
}
