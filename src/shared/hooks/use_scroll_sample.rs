use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::domain::models::ScrollSample;
use crate::domain::services::StyleProfile;
use crate::shared::logging::log_scrolled_changed;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;

/// Clamp a raw `scrollY` to the range any profile can tell apart.
///
/// Offsets past the saturation point render identically for every profile,
/// so they all collapse to one stored value.
pub fn settle_offset(raw: f64) -> f64 {
    let offset = if raw.is_finite() { raw.max(0.0) } else { 0.0 };
    offset.min(StyleProfile::saturation_offset())
}

/// The offset to store for a new raw reading, or `None` when nothing changes
pub(crate) fn next_offset(previous: f64, raw: f64) -> Option<f64> {
    let next = settle_offset(raw);
    (next != previous).then_some(next)
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn publish(offset: &mut Signal<f64>, raw: f64) {
    let previous = *offset.peek();
    if let Some(next) = next_offset(previous, raw) {
        offset.set(next);
    }
}

/// Owns the window `scroll` listener. Dropping the guard removes it.
#[cfg(target_arch = "wasm32")]
pub(crate) struct ScrollListenerGuard {
    window: web_sys::Window,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl ScrollListenerGuard {
    /// Calls `on_scroll` with `window.scrollY` now and on every `scroll` event
    pub(crate) fn attach(
        mut on_scroll: impl FnMut(f64) + 'static,
    ) -> crate::shared::errors::Result<Self> {
        use crate::shared::errors::NavbarError;
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(NavbarError::NoWindow)?;

        // Page may be restored mid-scroll (reload, back navigation)
        let initial_offset = window.scroll_y().unwrap_or(0.0);
        on_scroll(initial_offset);

        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
            on_scroll(reader.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut(_)>);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|e| NavbarError::Listener(format!("{:?}", e)))?;

        crate::shared::logging::log_listener_attached(initial_offset);

        Ok(Self { window, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollListenerGuard {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        match self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => crate::shared::logging::log_listener_detached(),
            Err(e) => crate::shared::logging::log_listener_detach_error(&format!("{:?}", e)),
        }
    }
}

/// Tracks the window scroll position as a [`ScrollSample`] for `profile`.
///
/// The listener stores a settled offset and is independent of the profile,
/// so the sample is recomputed with the current profile on every render.
/// The listener is attached once on mount and removed on unmount. Outside
/// the browser the offset stays at the top of the page.
pub fn use_scroll_sample(profile: StyleProfile) -> ScrollSample {
    let offset = use_signal(|| 0.0);

    #[cfg(target_arch = "wasm32")]
    {
        let guard: Rc<RefCell<Option<ScrollListenerGuard>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        let guard_clone = guard.clone();
        use_effect(move || {
            if guard_clone.borrow().is_some() {
                return;
            }
            let mut offset = offset;
            match ScrollListenerGuard::attach(move |raw| publish(&mut offset, raw)) {
                Ok(listener) => *guard_clone.borrow_mut() = Some(listener),
                Err(e) => crate::shared::logging::log_listener_error(&e.to_string()),
            }
        });

        use_drop(move || {
            guard.borrow_mut().take();
        });
    }

    let sample = profile.tracker().sample(offset());

    let was_scrolled: Rc<Cell<bool>> = use_hook(|| Rc::new(Cell::new(false)));
    if was_scrolled.replace(sample.is_scrolled) != sample.is_scrolled {
        log_scrolled_changed(sample.is_scrolled, sample.offset);
    }

    sample
}
