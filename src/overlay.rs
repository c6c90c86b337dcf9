use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::{FOCUS_EVENT, PLANET_DISPLAY_ID, PLANET_NAME_ID};

/// Refresh the stats panel. With no focus the panel shows the home body's
/// name without its `focused` styling; the stat rows themselves belong to
/// the host page.
pub fn update_panel(document: &web::Document, label: &str, focused: bool) {
    if let Some(el) = document.get_element_by_id(PLANET_NAME_ID) {
        el.set_text_content(Some(label));
    }
    if let Some(el) = document.get_element_by_id(PLANET_DISPLAY_ID) {
        let cl = el.class_list();
        _ = if focused {
            cl.add_1("focused")
        } else {
            cl.remove_1("focused")
        };
    }
}

/// Announce a committed focus change to outside collaborators. Detail is the
/// body id, or null on defocus.
pub fn dispatch_focus_change(document: &web::Document, id: Option<&str>) {
    let detail = id.map(JsValue::from_str).unwrap_or(JsValue::NULL);
    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    if let Ok(ev) = web::CustomEvent::new_with_event_init_dict(FOCUS_EVENT, &init) {
        _ = document.dispatch_event(&ev);
    }
}
