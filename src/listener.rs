use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// An event listener that stays registered until it is dropped or [`Listener::remove`]d.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<Listener, JsValue> {
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Listener {
            target: target.clone(),
            kind,
            closure,
        })
    }

    pub fn remove(&self) -> Result<(), JsValue> {
        self.target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.remove();
    }
}
