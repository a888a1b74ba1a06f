use std::cell::{Cell, RefCell};

use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::window;

/// A self re-arming `requestAnimationFrame` loop with at most one pending request.
#[derive(Default)]
pub struct FrameLoop {
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    pub fn new() -> FrameLoop {
        FrameLoop::default()
    }

    pub fn install(&self, callback: Closure<dyn FnMut(f64)>) {
        self.callback.replace(Some(callback));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Requests the next frame unless one is already pending or the loop was stopped.
    pub fn arm(&self) -> Result<(), JsValue> {
        if self.is_pending() {
            return Ok(());
        }

        if let Some(callback) = self.callback.borrow().as_ref() {
            let handle = window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
            self.pending.set(Some(handle));
        }

        Ok(())
    }

    /// Marks the pending request as delivered; called first thing in the callback.
    pub fn fired(&self) {
        self.pending.set(None);
    }

    /// Cancels the pending request; the next [`FrameLoop::arm`] starts the loop again.
    pub fn cancel(&self) -> Result<(), JsValue> {
        if let Some(handle) = self.pending.take() {
            window()?.cancel_animation_frame(handle)?;
        }

        Ok(())
    }

    /// Cancels the pending request and drops the callback, so the loop cannot re-arm.
    pub fn stop(&self) -> Result<(), JsValue> {
        self.cancel()?;
        self.callback.borrow_mut().take();

        Ok(())
    }
}
