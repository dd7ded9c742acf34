use crate::input;
use backdrop_core::PointerState;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type PressHandler = Rc<dyn Fn(&PointerState)>;
type ReleaseHandler = Rc<dyn Fn()>;

/// Sole owner of the shared pointer state. Listens on the window so the
/// backdrop canvas can stay `pointer-events: none`; dropping it removes every
/// listener.
pub struct PointerSubscription {
    state: Rc<RefCell<PointerState>>,
    _listeners: Vec<EventListener>,
}

impl PointerSubscription {
    pub fn attach(
        window: &web::Window,
        on_press: impl Fn(&PointerState) + 'static,
        on_release: impl Fn() + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(PointerState::default()));
        let on_press: PressHandler = Rc::new(on_press);
        let on_release: ReleaseHandler = Rc::new(on_release);
        let listeners = vec![
            wire_pointermove(window, &state),
            wire_pointerdown(window, &state, on_press),
            wire_pointerup(window, &state, "pointerup", Rc::clone(&on_release)),
            wire_pointerup(window, &state, "pointercancel", on_release),
        ];
        Self {
            state,
            _listeners: listeners,
        }
    }

    pub fn state(&self) -> Rc<RefCell<PointerState>> {
        Rc::clone(&self.state)
    }
}

fn wire_pointermove(window: &web::Window, state: &Rc<RefCell<PointerState>>) -> EventListener {
    let state = Rc::clone(state);
    EventListener::new(window, "pointermove", move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let pos = input::client_point(ev);
        state.borrow_mut().move_to(pos.x, pos.y);
    })
}

fn wire_pointerdown(
    window: &web::Window,
    state: &Rc<RefCell<PointerState>>,
    on_press: PressHandler,
) -> EventListener {
    let state = Rc::clone(state);
    EventListener::new(window, "pointerdown", move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let pos = input::client_point(ev);
        let snapshot = {
            let mut s = state.borrow_mut();
            s.move_to(pos.x, pos.y);
            s.press();
            *s
        };
        log::debug!("[pointer] press at ({:.0},{:.0})", snapshot.x, snapshot.y);
        on_press(&snapshot);
    })
}

fn wire_pointerup(
    window: &web::Window,
    state: &Rc<RefCell<PointerState>>,
    event_type: &'static str,
    on_release: ReleaseHandler,
) -> EventListener {
    let state = Rc::clone(state);
    EventListener::new(window, event_type, move |_event: &web::Event| {
        let was_down = state.borrow().down;
        state.borrow_mut().release();
        if was_down {
            on_release();
        }
    })
}
