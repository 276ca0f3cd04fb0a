// File: crates/chart-core/src/render.rs
// Summary: Paints a Scene onto any Skia canvas (raster figure or SVG).

use skia_safe as skia;

use crate::legend::Legend;
use crate::scene::{PlotLine, Scene};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Theme;
use crate::RenderOptions;

pub fn paint_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions, shaper: &TextShaper) {
    let theme = &opts.theme;
    canvas.clear(theme.background);

    if opts.minor_grid {
        draw_grid(canvas, scene, &scene.x.ticks.minor, &scene.y.ticks.minor, theme.grid_minor);
    }
    draw_grid(canvas, scene, &scene.x.ticks.major, &scene.y.ticks.major, theme.grid);

    canvas.save();
    canvas.clip_rect(scene.plot.to_skia(), skia::ClipOp::Intersect, true);
    for line in &scene.lines {
        draw_line_series(canvas, scene, line);
    }
    canvas.restore();

    draw_axes(canvas, scene, theme);
    if opts.draw_labels {
        draw_tick_labels(canvas, scene, theme, shaper);
        draw_axis_labels(canvas, scene, theme, shaper);
    }
    if let Some(legend) = &scene.legend {
        draw_legend(canvas, scene, legend, theme, shaper, opts.draw_labels);
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, scene: &Scene, xs: &[f64], ys: &[f64], color: skia::Color) {
    let st = &scene.style;
    let mut paint = stroke(color, st.grid_width);
    paint.set_path_effect(skia::PathEffect::dash(&st.grid_dash, 0.0));

    let (sx, sy) = (scene.x_scale(), scene.y_scale());
    let p = scene.plot;
    // verticals
    for &x in xs {
        let px = sx.to_px(x);
        canvas.draw_line((px, p.top), (px, p.bottom), &paint);
    }
    // horizontals
    for &y in ys {
        let py = sy.to_px(y);
        canvas.draw_line((p.left, py), (p.right, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    let st = &scene.style;
    let spine = stroke(theme.axis_line, st.spine_width);
    canvas.draw_rect(scene.plot.to_skia(), &spine);

    let tick = stroke(theme.tick, st.spine_width);
    let (sx, sy) = (scene.x_scale(), scene.y_scale());
    let p = scene.plot;
    for &x in &scene.x.ticks.major {
        let px = sx.to_px(x);
        canvas.draw_line((px, p.bottom), (px, p.bottom + st.tick_length), &tick);
    }
    for &y in &scene.y.ticks.major {
        let py = sy.to_px(y);
        canvas.draw_line((p.left - st.tick_length, py), (p.left, py), &tick);
    }
}

fn draw_tick_labels(canvas: &skia::Canvas, scene: &Scene, theme: &Theme, shaper: &TextShaper) {
    let st = &scene.style;
    let (sx, sy) = (scene.x_scale(), scene.y_scale());
    let p = scene.plot;
    let off = st.tick_length + st.tick_pad;
    for (&x, label) in scene.x.ticks.major.iter().zip(&scene.x.tick_labels) {
        shaper.draw_anchored(canvas, label, (sx.to_px(x), p.bottom + off), st.font_size, theme.axis_label, HAlign::Center, VAlign::Top);
    }
    for (&y, label) in scene.y.ticks.major.iter().zip(&scene.y.tick_labels) {
        shaper.draw_anchored(canvas, label, (p.left - off, sy.to_px(y)), st.font_size, theme.axis_label, HAlign::Right, VAlign::Middle);
    }
}

fn draw_axis_labels(canvas: &skia::Canvas, scene: &Scene, theme: &Theme, shaper: &TextShaper) {
    let st = &scene.style;
    let p = scene.plot;
    let x_center = (p.left + p.right) * 0.5;
    shaper.draw_anchored(
        canvas,
        &scene.x.label,
        (x_center, scene.height as f32 - st.layout_pad),
        st.font_size,
        theme.axis_label,
        HAlign::Center,
        VAlign::Bottom,
    );
    let (_, h) = shaper.measure(&scene.y.label, st.font_size);
    let y_center = (p.top + p.bottom) * 0.5;
    shaper.draw_vertical(canvas, &scene.y.label, (st.layout_pad + h * 0.5, y_center), st.font_size, theme.axis_label);
}

fn draw_line_series(canvas: &skia::Canvas, scene: &Scene, line: &PlotLine) {
    let st = &scene.style;
    let mut paint = stroke(line.color, st.line_width);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_stroke_cap(skia::paint::Cap::Round);

    for run in scene.segments(line) {
        if run.len() < 2 {
            continue;
        }
        let mut path = skia::Path::new();
        path.move_to(run[0]);
        for &pt in run.iter().skip(1) {
            path.line_to(pt);
        }
        canvas.draw_path(&path, &paint);
    }

    let marker = fill(line.color);
    for (x, y) in scene.markers(line) {
        canvas.draw_circle((x, y), st.marker_radius, &marker);
    }
}

fn draw_legend(canvas: &skia::Canvas, scene: &Scene, legend: &Legend, theme: &Theme, shaper: &TextShaper, draw_labels: bool) {
    let st = &scene.style;
    let m = &scene.legend_metrics;
    let frame = legend.frame.to_skia();
    let radius = m.font_size * 0.2;
    canvas.draw_round_rect(frame, radius, radius, &fill(theme.legend_face));
    canvas.draw_round_rect(frame, radius, radius, &stroke(theme.legend_frame, st.spine_width));

    let handle_left = legend.frame.left + m.pad;
    let handle_right = handle_left + m.handle_length;
    let text_left = handle_right + m.handle_gap;
    for (i, entry) in legend.entries.iter().enumerate() {
        let cy = legend.row_center_y(i, m);
        canvas.draw_line((handle_left, cy), (handle_right, cy), &stroke(entry.color, st.line_width));
        canvas.draw_circle(((handle_left + handle_right) * 0.5, cy), st.marker_radius, &fill(entry.color));
        if draw_labels {
            shaper.draw_anchored(canvas, &entry.label, (text_left, cy), m.font_size, theme.axis_label, HAlign::Left, VAlign::Middle);
        }
    }
}
