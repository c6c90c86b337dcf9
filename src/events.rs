use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{MAIN_CONTENT_ID, RESIZE_DEBOUNCE_MS};
use crate::core::{BodyKind, OrbitalEngine, Starfield, Viewport};
use crate::frame::{FrameContext, LoopHandle};
use crate::{dom, overlay};

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub system: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub engine: Rc<RefCell<OrbitalEngine>>,
    pub focused: Rc<RefCell<Option<usize>>>,
    pub body_els: Rc<Vec<web::HtmlElement>>,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
    pub loop_handle: LoopHandle,
}

/// Registered listeners plus the resize debounce state. Closures are kept
/// (not forgotten) so `dismantle` can actually unhook everything when the
/// hosting view goes away.
pub struct ListenerSet {
    listeners: Vec<(web::EventTarget, &'static str, Closure<dyn FnMut(web::Event)>)>,
    debounce_id: Rc<Cell<Option<i32>>>,
    debounce_action: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl ListenerSet {
    fn new() -> Self {
        Self {
            listeners: Vec::new(),
            debounce_id: Rc::new(Cell::new(None)),
            debounce_action: Rc::new(RefCell::new(None)),
        }
    }

    fn listen(
        &mut self,
        target: &web::EventTarget,
        name: &'static str,
        f: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        self.listeners.push((target.clone(), name, closure));
    }

    /// Remove every listener and clear any pending debounce timer.
    pub fn dismantle(mut self) {
        for (target, name, closure) in self.listeners.drain(..) {
            _ = target.remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        if let Some(id) = self.debounce_id.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(id);
            }
        }
        self.debounce_action.borrow_mut().take();
    }
}

/// Apply a focus command and, if it changed anything, publish the new focus
/// to the shared state, the stats panel and outside listeners.
pub fn commit_focus(
    document: &web::Document,
    engine: &Rc<RefCell<OrbitalEngine>>,
    focused: &Rc<RefCell<Option<usize>>>,
    target: Option<usize>,
) {
    if !engine.borrow_mut().apply_focus(target) {
        return;
    }
    *focused.borrow_mut() = target;

    let (label, id) = {
        let eng = engine.borrow();
        let shown = target.or(eng.home());
        let label: &'static str = shown
            .and_then(|i| eng.bodies().get(i))
            .map(|b| if b.label.is_empty() { b.id } else { b.label })
            .unwrap_or("");
        let id: Option<&'static str> = target.and_then(|i| eng.bodies().get(i).map(|b| b.id));
        (label, id)
    };
    overlay::update_panel(document, label, target.is_some());
    overlay::dispatch_focus_change(document, id);
}

pub fn wire_input_handlers(w: InputWiring) -> ListenerSet {
    let mut set = ListenerSet::new();
    wire_body_clicks(&w, &mut set);
    wire_outside_click(&w, &mut set);
    wire_resize(&w, &mut set);
    set
}

fn wire_body_clicks(w: &InputWiring, set: &mut ListenerSet) {
    let clickable: Vec<usize> = w
        .engine
        .borrow()
        .bodies()
        .iter()
        .enumerate()
        .filter(|(_, b)| b.kind == BodyKind::Primary)
        .map(|(i, _)| i)
        .collect();

    for i in clickable {
        let Some(el) = w.body_els.get(i) else { continue };
        let document = w.document.clone();
        let engine = w.engine.clone();
        let focused = w.focused.clone();
        set.listen(el.as_ref(), "click", move |_ev| {
            log::info!("[click] focus body {}", i);
            commit_focus(&document, &engine, &focused, Some(i));
        });
    }
}

fn wire_outside_click(w: &InputWiring, set: &mut ListenerSet) {
    // Clicks outside the main content defocus; the system anchor stands in
    // when the host page has no such wrapper.
    let boundary: web::Element = w
        .document
        .get_element_by_id(MAIN_CONTENT_ID)
        .unwrap_or_else(|| w.system.clone().into());
    let document = w.document.clone();
    let engine = w.engine.clone();
    let focused = w.focused.clone();
    set.listen(w.document.as_ref(), "mousedown", move |ev| {
        if focused.borrow().is_none() {
            return;
        }
        let inside = ev
            .target()
            .as_ref()
            .and_then(|t| t.dyn_ref::<web::Node>())
            .map(|node| boundary.contains(Some(node)))
            .unwrap_or(false);
        if !inside {
            log::info!("[click] defocus (outside main content)");
            commit_focus(&document, &engine, &focused, None);
        }
    });
}

fn wire_resize(w: &InputWiring, set: &mut ListenerSet) {
    // Debounced: bursts of resize/orientation events coalesce into one
    // recomputation, then the frame loop restarts cleanly.
    let action = {
        let w = w.clone();
        Closure::wrap(Box::new(move || {
            let vp_win = dom::window_viewport();
            log::info!(
                "[resize] viewport {}x{}",
                vp_win.width as i32,
                vp_win.height as i32
            );
            dom::sync_overlay_canvas_size(&w.canvas);
            w.frame_ctx.borrow_mut().starfield =
                Starfield::generate(vp_win.width, vp_win.height, rand::random());
            let rect = w.system.get_bounding_client_rect();
            w.engine
                .borrow_mut()
                .clamp_distances(&Viewport::new(rect.width() as f32, rect.height() as f32));
            w.loop_handle.restart();
        }) as Box<dyn FnMut()>)
    };
    *set.debounce_action.borrow_mut() = Some(action);

    let Some(window) = web::window() else { return };
    for name in ["resize", "orientationchange"] {
        let debounce_id = set.debounce_id.clone();
        let debounce_action = set.debounce_action.clone();
        set.listen(window.as_ref(), name, move |_ev| {
            let Some(window) = web::window() else { return };
            if let Some(id) = debounce_id.take() {
                window.clear_timeout_with_handle(id);
            }
            if let Some(action) = debounce_action.borrow().as_ref() {
                let callback = action.as_ref().unchecked_ref::<js_sys::Function>();
                if let Ok(id) = window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(callback, RESIZE_DEBOUNCE_MS)
                {
                    debounce_id.set(Some(id));
                }
            }
        });
    }
}
