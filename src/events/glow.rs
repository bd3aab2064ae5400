use super::Listener;
use crate::constants::{glow_style, GLOW_ELEMENT_ID};
use anyhow::anyhow;
use singularity_core::{GlowState, GLOW_SIZE_PX};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Glow element plus the document listeners that move and fade it.
pub struct GlowWiring {
    element: web::HtmlElement,
    listeners: Vec<Listener>,
}

fn apply(element: &web::HtmlElement, state: &GlowState) {
    let style = element.style();
    let (left, top) = state.style_position();
    _ = style.set_property("left", &left);
    _ = style.set_property("top", &top);
    _ = style.set_property("opacity", state.opacity());
}

pub fn attach(document: &web::Document) -> anyhow::Result<GlowWiring> {
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let element = document
        .create_element("div")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    element.set_id(GLOW_ELEMENT_ID);
    _ = element.set_attribute("style", &glow_style(GLOW_SIZE_PX));
    body.append_child(&element).map_err(|e| anyhow!("{:?}", e))?;

    let state = Rc::new(RefCell::new(GlowState::default()));
    let target: &web::EventTarget = document.as_ref();

    let (st, el) = (state.clone(), element.clone());
    let on_move = Listener::attach(target, "mousemove", move |ev| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            let mut s = st.borrow_mut();
            s.on_move(me.client_x() as f64, me.client_y() as f64);
            apply(&el, &s);
        }
    })?;

    let (st, el) = (state.clone(), element.clone());
    let on_enter = Listener::attach(target, "mouseenter", move |_| {
        let mut s = st.borrow_mut();
        s.on_enter();
        apply(&el, &s);
    })?;

    let (st, el) = (state, element.clone());
    let on_leave = Listener::attach(target, "mouseleave", move |_| {
        let mut s = st.borrow_mut();
        s.on_leave();
        apply(&el, &s);
    })?;

    Ok(GlowWiring {
        element,
        listeners: vec![on_move, on_enter, on_leave],
    })
}

impl GlowWiring {
    pub fn detach(self) {
        for l in self.listeners {
            l.detach();
        }
        self.element.remove();
    }
}
