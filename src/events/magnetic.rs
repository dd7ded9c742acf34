use crate::constants::{MAGNETIC_DISABLED_ATTR, MAGNETIC_SELECTOR, TILT_PERSPECTIVE_PX};
use crate::{css, dom, input};
use backdrop_core::{MagneticControl, SpringConfig};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct MagneticSlot {
    element: web::HtmlElement,
    control: MagneticControl,
    // Last transform written, to skip redundant style writes
    applied: Option<String>,
}

impl MagneticSlot {
    fn sync_disabled(&mut self) {
        let disabled = self.element.has_attribute(MAGNETIC_DISABLED_ATTR);
        if disabled != self.control.is_disabled() {
            self.control.set_disabled(disabled);
        }
    }
}

/// Pointer-reactive tilt for every `[data-magnetic]` element found at mount.
/// Dropping it removes the listeners and the inline transforms.
pub struct MagneticWiring {
    slots: Rc<RefCell<Vec<MagneticSlot>>>,
    _listeners: Vec<EventListener>,
}

impl MagneticWiring {
    pub fn attach(document: &web::Document, spring: SpringConfig) -> Self {
        let elements = dom::query_all_html(document, MAGNETIC_SELECTOR);
        let slots = Rc::new(RefCell::new(
            elements
                .iter()
                .map(|element| {
                    let mut slot = MagneticSlot {
                        element: element.clone(),
                        control: MagneticControl::new(spring),
                        applied: None,
                    };
                    slot.sync_disabled();
                    slot
                })
                .collect::<Vec<_>>(),
        ));

        let mut listeners = Vec::with_capacity(elements.len() * 5);
        for (index, element) in elements.iter().enumerate() {
            listeners.push(on(element, "pointerenter", &slots, index, |slot, _| {
                slot.sync_disabled();
                slot.control.enter();
            }));
            listeners.push(on(element, "pointermove", &slots, index, |slot, ev| {
                let rect = input::dom_rect(&slot.element.get_bounding_client_rect());
                slot.control.pointer_move(input::client_point(ev), rect);
            }));
            listeners.push(on(element, "pointerleave", &slots, index, |slot, _| {
                slot.control.leave();
            }));
            listeners.push(on(element, "pointerdown", &slots, index, |slot, _| {
                slot.control.press();
            }));
            listeners.push(on(element, "pointerup", &slots, index, |slot, _| {
                slot.control.release();
            }));
        }
        log::info!("[magnetic] wired {} controls", elements.len());

        Self {
            slots,
            _listeners: listeners,
        }
    }

    /// Advance every control's springs and write the resulting transform.
    pub fn step(&self, dt_sec: f32) {
        for slot in self.slots.borrow_mut().iter_mut() {
            if slot.control.is_at_rest() && slot.applied.is_none() {
                continue;
            }
            let tilt = slot.control.step(dt_sec);
            let style = slot.element.style();
            if css::is_neutral(&tilt) && slot.control.is_at_rest() {
                _ = style.remove_property("transform");
                slot.applied = None;
                continue;
            }
            let transform = css::tilt_transform(&tilt, TILT_PERSPECTIVE_PX);
            if slot.applied.as_deref() != Some(transform.as_str()) {
                _ = style.set_property("transform", &transform);
                slot.applied = Some(transform);
            }
        }
    }
}

impl Drop for MagneticWiring {
    fn drop(&mut self) {
        for slot in self.slots.borrow().iter() {
            if slot.applied.is_some() {
                _ = slot.element.style().remove_property("transform");
            }
        }
    }
}

fn on(
    element: &web::HtmlElement,
    event_type: &'static str,
    slots: &Rc<RefCell<Vec<MagneticSlot>>>,
    index: usize,
    handler: impl Fn(&mut MagneticSlot, &web::MouseEvent) + 'static,
) -> EventListener {
    let slots = Rc::clone(slots);
    EventListener::new(element, event_type, move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if let Some(slot) = slots.borrow_mut().get_mut(index) {
            handler(slot, ev);
        }
    })
}
