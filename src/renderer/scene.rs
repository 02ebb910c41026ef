//! Snapshot -> triangle list, painted back to front

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors, shade, with_alpha};
use crate::config::GameConfig;
use crate::consts::{GROUND_HEIGHT, HUD_HEIGHT};
use crate::sim::{Cloud, Duck, ParticleEffect, ScreenMode, Snapshot};

const SKY_BANDS: u32 = 32;
const ELLIPSE_SEGMENTS: u32 = 20;
const SPARK_SEGMENTS: u32 = 6;
const PUFF_SEGMENTS: u32 = 16;

/// Build the full frame for a snapshot
pub fn build_scene(snap: &Snapshot<'_>, config: &GameConfig) -> Vec<Vertex> {
    let screen = Vec2::new(config.screen_width, config.screen_height);
    let mut out = Vec::with_capacity(4096);

    background(&mut out, screen, snap.clouds);
    for duck in snap.ducks {
        duck_sprite(&mut out, duck, config.duck_scale);
    }
    for effect in snap.particles {
        burst(&mut out, effect);
    }
    hud(&mut out, snap, screen);
    if snap.mode != ScreenMode::Playing {
        out.extend(shapes::rect(Vec2::ZERO, screen, colors::OVERLAY_DIM));
    }
    crosshair(&mut out, snap.crosshair);

    out
}

fn background(out: &mut Vec<Vertex>, screen: Vec2, clouds: &[Cloud]) {
    out.extend(shapes::vertical_gradient(
        Vec2::ZERO,
        screen,
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
        SKY_BANDS,
    ));
    for cloud in clouds {
        cloud_sprite(out, cloud, screen.x);
    }

    let horizon = screen.y - GROUND_HEIGHT;
    out.extend(shapes::rect(
        Vec2::new(0.0, horizon),
        Vec2::new(screen.x, GROUND_HEIGHT),
        colors::GRASS,
    ));

    // Ground stripes every 60px
    let mut x = 0.0;
    while x < screen.x {
        out.extend(shapes::rect(
            Vec2::new(x, screen.y - 80.0),
            Vec2::new(30.0, 80.0),
            colors::GROUND_DARK,
        ));
        x += 60.0;
    }
}

fn cloud_sprite(out: &mut Vec<Vertex>, cloud: &Cloud, screen_width: f32) {
    // Fully off screen while waiting to wrap
    if cloud.pos.x + cloud.size.x < 0.0 || cloud.pos.x > screen_width {
        return;
    }
    for puff in &cloud.puffs {
        out.extend(shapes::ellipse(
            cloud.pos + puff.center,
            puff.radii,
            with_alpha(colors::CLOUD, puff.alpha),
            PUFF_SEGMENTS,
        ));
    }
}

/// Body color drifts warmer with speed so faster levels read differently
fn body_color(duck: &Duck) -> [f32; 4] {
    let t = ((duck.vel.x.abs() - 100.0) / 200.0).clamp(0.0, 1.0);
    [0.55 + 0.4 * t, 0.35 + 0.3 * t, 0.2, 1.0]
}

fn duck_sprite(out: &mut Vec<Vertex>, duck: &Duck, scale: f32) {
    let region = duck.hit_region();
    let size = region.size();
    let c = region.center();
    let dir = if duck.facing_right() { 1.0 } else { -1.0 };
    let body = body_color(duck);

    // Soft shadow below
    out.extend(shapes::ellipse(
        c + Vec2::new(0.0, size.y / 2.0 + 6.0 + size.y * 0.2),
        Vec2::new(size.x * 0.55, size.y * 0.2),
        colors::SHADOW,
        ELLIPSE_SEGMENTS,
    ));

    // Body with a darker offset underlay
    let body_radii = size / 2.0;
    out.extend(shapes::ellipse(
        c + Vec2::splat(6.0 * scale),
        body_radii,
        shade(body, 0.08),
        ELLIPSE_SEGMENTS,
    ));
    out.extend(shapes::ellipse(c, body_radii, body, ELLIPSE_SEGMENTS));

    // Wing rises and falls with the flap phase
    let wing_offset = duck.flap.sin() * 12.0 * scale;
    let wing_color = [
        (body[0] + 0.12).min(1.0),
        (body[1] + 0.2).min(1.0),
        0.35,
        1.0,
    ];
    out.extend(shapes::ellipse(
        c + Vec2::new(-dir * size.x * 0.05, -size.y * 0.05 - wing_offset),
        Vec2::new(size.x * 0.45, size.y * 0.3),
        wing_color,
        ELLIPSE_SEGMENTS,
    ));

    // Head and beak on the leading side
    let head_radii = Vec2::new(17.0, 15.0) * scale;
    let head = c + Vec2::new(dir * size.x / 3.0, -size.y / 2.0 + head_radii.y - 2.0 * scale);
    out.extend(shapes::ellipse(head, head_radii, colors::DUCK_HEAD, ELLIPSE_SEGMENTS));

    let tip = head + Vec2::new(dir * (head_radii.x + 20.0 * scale), 0.0);
    let root = head + Vec2::new(dir * (head_radii.x - 4.0 * scale), 0.0);
    out.extend(shapes::triangle(
        root,
        tip + Vec2::new(0.0, -6.0 * scale),
        tip + Vec2::new(0.0, 6.0 * scale),
        colors::BEAK,
    ));

    // Eye
    let eye = head + Vec2::new(dir * 6.0 * scale, -4.0 * scale);
    out.extend(shapes::circle(eye, 5.0 * scale, [1.0; 4], 8));
    out.extend(shapes::circle(eye, 2.0 * scale, [0.05, 0.05, 0.05, 1.0], 6));
}

fn burst(out: &mut Vec<Vertex>, effect: &ParticleEffect) {
    let life = effect.life_fraction();
    if life <= 0.0 {
        return;
    }
    let color = with_alpha(colors::SPARK, life);
    for spark in &effect.sparks {
        let radius = (spark.size * life).max(1.0);
        out.extend(shapes::circle(spark.pos, radius, color, SPARK_SEGMENTS));
    }
}

fn hud(out: &mut Vec<Vertex>, snap: &Snapshot<'_>, screen: Vec2) {
    out.extend(shapes::rect(
        Vec2::new(8.0, 8.0),
        Vec2::new(screen.x - 16.0, HUD_HEIGHT - 8.0),
        colors::HUD_PANEL,
    ));

    // One heart per point of starting health
    for i in 0..snap.health_per_level {
        let color = if i < snap.health {
            colors::HEART_FULL
        } else {
            colors::HEART_EMPTY
        };
        let origin = Vec2::new(320.0 + i as f32 * 30.0, 12.0);
        out.extend(shapes::circle(origin + Vec2::new(10.0, 12.0), 6.0, color, 10));
        out.extend(shapes::circle(origin + Vec2::new(18.0, 12.0), 6.0, color, 10));
        out.extend(shapes::triangle(
            origin + Vec2::new(4.0, 14.0),
            origin + Vec2::new(24.0, 14.0),
            origin + Vec2::new(14.0, 24.0),
            color,
        ));
    }

    // Hit progress bar
    let progress = snap.hits as f32 / snap.ducks_to_clear.max(1) as f32;
    let bar_min = Vec2::new(700.0_f32.min(screen.x - 200.0), 40.0);
    out.extend(shapes::rect(bar_min, Vec2::new(180.0, 6.0), colors::HEART_EMPTY));
    out.extend(shapes::rect(
        bar_min,
        Vec2::new(180.0 * progress, 6.0),
        colors::HEART_FULL,
    ));
}

fn crosshair(out: &mut Vec<Vertex>, at: Vec2) {
    let color = colors::CROSSHAIR;
    out.extend(shapes::ring(at, 10.0, 12.0, color, 24));
    out.extend(shapes::line(at - Vec2::new(22.0, 0.0), at - Vec2::new(8.0, 0.0), 2.0, color));
    out.extend(shapes::line(at + Vec2::new(8.0, 0.0), at + Vec2::new(22.0, 0.0), 2.0, color));
    out.extend(shapes::line(at - Vec2::new(0.0, 22.0), at - Vec2::new(0.0, 8.0), 2.0, color));
    out.extend(shapes::line(at + Vec2::new(0.0, 8.0), at + Vec2::new(0.0, 22.0), 2.0, color));
}
