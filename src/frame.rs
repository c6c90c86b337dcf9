use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{ring_plan, OrbitalEngine, Starfield, Viewport};
use crate::{dom, render};

/// Everything one animation frame needs. All motion and drawing run here, on
/// the browser's frame callback; readers only ever observe a fully-stepped
/// state.
pub struct FrameContext {
    pub engine: Rc<RefCell<OrbitalEngine>>,
    pub focused: Rc<RefCell<Option<usize>>>,

    pub system: web::HtmlElement,
    pub body_els: Rc<Vec<web::HtmlElement>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,

    pub starfield: Starfield,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let rect = self.system.get_bounding_client_rect();
        let vp = Viewport::new(rect.width() as f32, rect.height() as f32);
        let focused = *self.focused.borrow();

        self.engine.borrow_mut().step(focused, &vp);

        let engine = self.engine.borrow();
        dom::apply_body_layout(&self.body_els, &engine, focused);

        self.starfield.advance(dt_sec);

        let anchor = (
            rect.left() + rect.width() / 2.0,
            rect.top() + rect.height() / 2.0,
        );
        let occupied = engine.occupied_orbits();
        let plan = ring_plan(&occupied, &dom::window_viewport());
        render::draw_frame(&self.ctx2d, &self.canvas, anchor, &self.starfield, &plan);
    }
}

/// Handle to the requestAnimationFrame loop. Stores the pending callback id
/// so the loop can be restarted after a resize and fully cancelled when the
/// view is dismantled.
#[derive(Clone)]
pub struct LoopHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    fn request_next(&self) {
        let Some(window) = web::window() else { return };
        if let Some(tick) = self.tick.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                self.raf_id.set(Some(id));
            }
        }
    }

    /// Cancel the pending frame. The tick closure stays alive so `restart`
    /// can pick the loop back up.
    pub fn stop(&self) {
        if let (Some(window), Some(id)) = (web::window(), self.raf_id.take()) {
            _ = window.cancel_animation_frame(id);
        }
    }

    /// Stop-then-request: exactly one loop runs afterwards, never two.
    pub fn restart(&self) {
        self.stop();
        self.request_next();
    }

    /// Terminal teardown; the loop cannot be restarted after this.
    pub fn shutdown(&self) {
        self.stop();
        self.tick.borrow_mut().take();
    }
}

/// Start the frame loop. The tick closure re-arms itself every frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        raf_id: Rc::new(Cell::new(None)),
        tick: Rc::new(RefCell::new(None)),
    };
    let rearm = handle.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        rearm.request_next();
    }) as Box<dyn FnMut()>));
    handle.request_next();
    handle
}
