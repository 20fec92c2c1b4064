use leptos::prelude::*;

/// Eases wheel scrolling for the whole page while mounted. Renders nothing.
#[component]
pub fn SmoothScroll() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    driver::mount();
}

#[cfg(feature = "hydrate")]
mod driver {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use leptos::prelude::*;
    use leptos::web_sys::{self, AddEventListenerOptions, WheelEvent, Window};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};

    use crate::scroll::{normalize_delta, SmoothScroll};

    type FrameCallback = Closure<dyn FnMut(f64)>;

    /// Install the driver once the component is live in the browser. The
    /// driver is owned by the component, so dropping it on unmount detaches
    /// the listener and cancels the frame loop.
    pub(super) fn mount() {
        let driver = StoredValue::new_local(None::<Driver>);
        Effect::new(move |_| {
            if driver.with_value(Option::is_none) {
                match Driver::install() {
                    Ok(d) => driver.set_value(Some(d)),
                    Err(err) => leptos::logging::warn!("smooth scroll unavailable: {err:?}"),
                }
            }
        });
    }

    pub struct Driver {
        window: Window,
        wheel: Closure<dyn FnMut(WheelEvent)>,
        frame: Rc<RefCell<Option<FrameCallback>>>,
        pending: Rc<Cell<Option<i32>>>,
    }

    impl Driver {
        pub fn install() -> Result<Self, JsValue> {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let scroll = Rc::new(RefCell::new(SmoothScroll::default()));
            let pending = Rc::new(Cell::new(None));
            let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

            let on_frame = Closure::<dyn FnMut(f64)>::new({
                let window = window.clone();
                let scroll = Rc::clone(&scroll);
                let pending = Rc::clone(&pending);
                let frame = Rc::downgrade(&frame);
                move |_timestamp: f64| {
                    pending.set(None);
                    let (y, animating) = {
                        let mut state = scroll.borrow_mut();
                        (state.step(), state.is_animating())
                    };
                    window.scroll_to_with_x_and_y(0.0, y);
                    if animating {
                        if let Some(frame) = frame.upgrade() {
                            request_frame(&window, &frame, &pending);
                        }
                    }
                }
            });
            *frame.borrow_mut() = Some(on_frame);

            let wheel = Closure::<dyn FnMut(WheelEvent)>::new({
                let window = window.clone();
                let frame = Rc::clone(&frame);
                let pending = Rc::clone(&pending);
                move |ev: WheelEvent| {
                    // Pinch-zoom arrives as ctrl+wheel
                    if ev.ctrl_key() {
                        return;
                    }
                    ev.prevent_default();

                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or_default();
                    let max = max_scroll(&window, viewport);
                    {
                        let mut state = scroll.borrow_mut();
                        state.sync(window.scroll_y().unwrap_or_default());
                        state.scroll_by(normalize_delta(ev.delta_y(), ev.delta_mode(), viewport), max);
                    }
                    request_frame(&window, &frame, &pending);
                }
            });

            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            window.add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                wheel.as_ref().unchecked_ref(),
                &options,
            )?;

            Ok(Self {
                window,
                wheel,
                frame,
                pending,
            })
        }
    }

    impl Drop for Driver {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
            if let Some(id) = self.pending.take() {
                let _ = self.window.cancel_animation_frame(id);
            }
            self.frame.borrow_mut().take();
        }
    }

    fn request_frame(window: &Window, frame: &RefCell<Option<FrameCallback>>, pending: &Cell<Option<i32>>) {
        if pending.get().is_some() {
            return;
        }
        if let Some(callback) = frame.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                pending.set(Some(id));
            }
        }
    }

    fn max_scroll(window: &Window, viewport: f64) -> f64 {
        let height = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or_default();
        (height - viewport).max(0.0)
    }
}
