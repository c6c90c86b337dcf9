use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{TRANSITION_FOCUS, TRANSITION_ORBIT, Z_CENTER, Z_INCOMING, Z_ORBITING};
use crate::core::{BodyKind, BodyState, Motion, OrbitalEngine, Viewport, Visual};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport from the window inner size; hidden or detached windows come back
/// as a zero viewport and the core floors the bounds.
pub fn window_viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

/// Keep the overlay canvas backing store matched to the window inner size.
pub fn sync_overlay_canvas_size(canvas: &web::HtmlCanvasElement) {
    let vp = window_viewport();
    canvas.set_width((vp.width as u32).max(1));
    canvas.set_height((vp.height as u32).max(1));
}

/// Create one element per roster body under the system anchor. Image bodies
/// get an `<img>`, tinted ones a sphere div; labeled bodies carry a floating
/// name tag.
pub fn spawn_body_elements(
    document: &web::Document,
    system: &web::Element,
    engine: &OrbitalEngine,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let mut els = Vec::with_capacity(engine.len());
    for body in engine.bodies() {
        let el: web::HtmlElement = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create body element: {:?}", e))?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("body element is not an HtmlElement"))?;
        let kind_class = match body.kind {
            BodyKind::Primary => "planet",
            BodyKind::Satellite => "moon",
        };
        el.set_class_name(&format!("celestial-body {} {}", kind_class, body.id));

        match body.visual {
            Visual::Image(src) => {
                let img = document
                    .create_element("img")
                    .map_err(|e| anyhow::anyhow!("create body image: {:?}", e))?;
                img.set_class_name("body-image");
                _ = img.set_attribute("src", src);
                _ = img.set_attribute("alt", if body.label.is_empty() { body.id } else { body.label });
                _ = img.set_attribute("draggable", "false");
                _ = el.append_child(&img);
            }
            Visual::Tint(color) => {
                let sphere: web::HtmlElement = document
                    .create_element("div")
                    .map_err(|e| anyhow::anyhow!("create body sphere: {:?}", e))?
                    .dyn_into()
                    .map_err(|_| anyhow::anyhow!("body sphere is not an HtmlElement"))?;
                sphere.set_class_name("body-sphere");
                _ = sphere.style().set_property("background", color);
                _ = el.append_child(&sphere);
            }
        }

        if !body.label.is_empty() {
            let name = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("create body name: {:?}", e))?;
            name.set_class_name("body-name");
            name.set_text_content(Some(body.label));
            _ = el.append_child(&name);
        }

        system
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("attach body element: {:?}", e))?;
        els.push(el);
    }
    Ok(els)
}

pub fn remove_body_elements(els: &[web::HtmlElement]) {
    for el in els {
        el.remove();
    }
}

/// Per-frame style pass: translate/size every body element from its
/// published state and keep the stacking/transition/class flags in sync.
pub fn apply_body_layout(els: &[web::HtmlElement], engine: &OrbitalEngine, focused: Option<usize>) {
    for (i, el) in els.iter().enumerate() {
        let Some(st) = engine.state(i) else { continue };
        apply_one(el, st, focused == Some(i));
    }
}

fn apply_one(el: &web::HtmlElement, st: &BodyState, is_focused: bool) {
    let style = el.style();
    let size = st.size.max(0.0);
    _ = style.set_property("width", &format!("{size:.1}px"));
    _ = style.set_property("height", &format!("{size:.1}px"));
    _ = style.set_property(
        "transform",
        &format!(
            "translate(calc(-50% + {:.2}px), calc(-50% + {:.2}px))",
            st.position.x, st.position.y
        ),
    );

    let in_transit = st.motion == Motion::MovingToCenter;
    let centered = st.motion == Motion::Centered;
    let z = if centered {
        Z_CENTER
    } else if is_focused && in_transit {
        Z_INCOMING
    } else {
        Z_ORBITING
    };
    _ = style.set_property("z-index", z);
    _ = style.set_property(
        "transition",
        if centered || in_transit {
            TRANSITION_FOCUS
        } else {
            TRANSITION_ORBIT
        },
    );

    let cl = el.class_list();
    _ = if centered {
        cl.add_1("center-planet")
    } else {
        cl.remove_1("center-planet")
    };
    _ = if is_focused {
        cl.add_1("focused")
    } else {
        cl.remove_1("focused")
    };
}
