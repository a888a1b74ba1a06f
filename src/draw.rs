use shared::Particle;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Outline of a plus-shaped star on a unit square.
const STAR_OUTLINE: [(f64, f64); 12] = [
    (0.4, 0.0),
    (0.6, 0.0),
    (0.6, 0.4),
    (1.0, 0.4),
    (1.0, 0.6),
    (0.6, 0.6),
    (0.6, 1.0),
    (0.4, 1.0),
    (0.4, 0.6),
    (0.0, 0.6),
    (0.0, 0.4),
    (0.4, 0.4),
];

const DOT_SIZE: f64 = 2.0;

pub fn draw_star(
    context: &CanvasRenderingContext2d,
    star: &Particle,
    scroll: (f64, f64),
) -> Result<(), JsValue> {
    if !star.visible {
        return Ok(());
    }

    let left = star.position.0 - scroll.0;
    let top = star.position.1 - scroll.1;

    context.set_fill_style_str(&star.color.to_string());
    context.begin_path();

    for (i, (x, y)) in STAR_OUTLINE.iter().enumerate() {
        let (x, y) = (left + x * star.size, top + y * star.size);

        if i == 0 {
            context.move_to(x, y);
        } else {
            context.line_to(x, y);
        }
    }

    context.close_path();
    context.fill();

    Ok(())
}

pub fn draw_dot(
    context: &CanvasRenderingContext2d,
    dot: &Particle,
    scroll: (f64, f64),
) -> Result<(), JsValue> {
    if !dot.visible {
        return Ok(());
    }

    context.set_fill_style_str(&dot.color.to_string());
    context.fill_rect(
        dot.position.0 - scroll.0,
        dot.position.1 - scroll.1,
        DOT_SIZE,
        DOT_SIZE,
    );

    Ok(())
}
