#![cfg(target_arch = "wasm32")]

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use crate::constants::{CANVAS_ID, SYSTEM_ID};
use crate::core::{default_roster, OrbitalEngine, Starfield};
use crate::events::{commit_focus, InputWiring, ListenerSet};
use crate::frame::{FrameContext, LoopHandle};

/// One live visualization. Held in a thread-local so the exported control
/// functions can reach it; dropped wholesale by `dismantle`.
struct Session {
    document: web::Document,
    engine: Rc<RefCell<OrbitalEngine>>,
    focused: Rc<RefCell<Option<usize>>>,
    body_els: Rc<Vec<web::HtmlElement>>,
    listeners: Option<ListenerSet>,
    loop_handle: LoopHandle,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = RefCell::new(None);
}

/// Clone the shared handles out of the session so command handling never
/// holds the thread-local borrow while user code (event listeners) runs.
fn session_parts() -> Option<(
    web::Document,
    Rc<RefCell<OrbitalEngine>>,
    Rc<RefCell<Option<usize>>>,
)> {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|s| (s.document.clone(), s.engine.clone(), s.focused.clone()))
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orrery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let system: web::HtmlElement = document
        .get_element_by_id(SYSTEM_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{SYSTEM_ID}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{SYSTEM_ID} is not an HtmlElement"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{CANVAS_ID} is not a canvas"))?;
    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("canvas 2d context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("canvas 2d context unavailable"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("unexpected 2d context type"))?;

    dom::sync_overlay_canvas_size(&canvas);

    let engine = Rc::new(RefCell::new(OrbitalEngine::new(default_roster())));
    // The home body starts centered and focused, matching the panel default.
    let focused = Rc::new(RefCell::new(engine.borrow().home()));

    let body_els = Rc::new(dom::spawn_body_elements(&document, &system, &engine.borrow())?);

    let vp = dom::window_viewport();
    let starfield = Starfield::generate(vp.width, vp.height, rand::random());

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        engine: engine.clone(),
        focused: focused.clone(),
        system: system.clone(),
        body_els: body_els.clone(),
        canvas: canvas.clone(),
        ctx2d,
        starfield,
        last_instant: Instant::now(),
    }));
    let loop_handle = frame::start_loop(frame_ctx.clone());

    let listeners = events::wire_input_handlers(InputWiring {
        document: document.clone(),
        system,
        canvas,
        engine: engine.clone(),
        focused: focused.clone(),
        body_els: body_els.clone(),
        frame_ctx,
        loop_handle: loop_handle.clone(),
    });

    let body_count = engine.borrow().len();
    log::info!("orrery-web running with {} bodies", body_count);

    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(Session {
            document,
            engine,
            focused,
            body_els,
            listeners: Some(listeners),
            loop_handle,
        });
    });
    Ok(())
}

/// Focus a body by roster id. Unknown ids are rejected (no defocus side
/// effect); satellite ids and re-focus of the centered body are no-ops.
#[wasm_bindgen]
pub fn focus_body(id: &str) {
    let Some((document, engine, focused)) = session_parts() else {
        return;
    };
    let idx = engine.borrow().index_of(id);
    match idx {
        Some(i) => commit_focus(&document, &engine, &focused, Some(i)),
        None => log::warn!("[focus] unknown body id {:?}", id),
    }
}

/// Defocus: the home body glides back to the center.
#[wasm_bindgen]
pub fn clear_focus() {
    let Some((document, engine, focused)) = session_parts() else {
        return;
    };
    commit_focus(&document, &engine, &focused, None);
}

/// Tear the whole view down: stop the frame loop, drop every listener and
/// pending debounce timer, and remove the spawned body elements.
#[wasm_bindgen]
pub fn dismantle() {
    let session = SESSION.with(|cell| cell.borrow_mut().take());
    let Some(mut session) = session else { return };
    session.loop_handle.shutdown();
    if let Some(listeners) = session.listeners.take() {
        listeners.dismantle();
    }
    dom::remove_body_elements(&session.body_els);
    log::info!("orrery-web dismantled");
}
