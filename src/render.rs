use web_sys as web;

use crate::core::{RingSpec, Starfield};

/// Redraw the overlay canvas for one frame: starfield behind, orbit rings on
/// top, both centered on the layout anchor (page coordinates).
pub fn draw_frame(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    anchor: (f64, f64),
    stars: &Starfield,
    plan: &[RingSpec],
) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, w, h);
    draw_starfield(ctx, stars);
    draw_rings(ctx, anchor, plan);
}

fn draw_starfield(ctx: &web::CanvasRenderingContext2d, stars: &Starfield) {
    for star in stars.stars() {
        let opacity = stars.twinkle_opacity(star);
        let x = star.x as f64;
        let y = star.y as f64;
        let r = star.radius as f64;

        if star.bright {
            if let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, r * 2.0) {
                _ = gradient.add_color_stop(0.0, &rgba_white(opacity));
                _ = gradient.add_color_stop(0.5, &rgba_white(opacity * 0.5));
                _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(x - r * 2.0, y - r * 2.0, r * 4.0, r * 4.0);
            }
        }

        ctx.begin_path();
        _ = ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
        ctx.set_fill_style_str(&rgba_white(opacity));
        ctx.fill();
    }
}

fn draw_rings(ctx: &web::CanvasRenderingContext2d, anchor: (f64, f64), plan: &[RingSpec]) {
    for spec in plan {
        ctx.set_line_width(spec.line_width as f64);
        ctx.set_stroke_style_str(&rgba_white(spec.opacity));
        ctx.begin_path();
        _ = ctx.arc(
            anchor.0,
            anchor.1,
            spec.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.stroke();
    }
}

fn rgba_white(opacity: f32) -> String {
    format!("rgba(255, 255, 255, {:.3})", opacity.clamp(0.0, 1.0))
}
