//! wasm-bindgen surface for Kineto interactivity.
//!
//! JS-facing conventions:
//! - Constructor takes a single options object: `player` (selector, element,
//!   or animation instance), optional `playerInstance` seek override,
//!   optional `container`, plus the `mode` and `actions` configuration.
//! - [`create`] builds the binding and attaches its listeners in one call.
//! - `start()`/`stop()` attach and detach listeners; both are idempotent.
//! - Errors cross the boundary as `JsError` with a readable message.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, MouseEvent, Window};

use kineto_interact_core::{Config, Engine, InputEvent, Listener, Mode};

pub mod dom;
pub mod player;

pub use player::{classify, resolve, JsPlayer, PlayerSource, ResolvedPlayer};

use player::jsvalue_is_undefined_or_null;

fn object_member(options: &JsValue, key: &str) -> Option<JsValue> {
    let value = Reflect::get(options, &JsValue::from_str(key)).ok()?;
    if jsvalue_is_undefined_or_null(&value) {
        None
    } else {
        Some(value)
    }
}

/// One attached host listener, kept alive until `stop()`.
struct ListenerBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Interactivity binding between a DOM container and a Lottie player.
#[wasm_bindgen]
pub struct KinetoInteract {
    engine: Rc<RefCell<Engine<JsPlayer>>>,
    container: Element,
    bindings: Vec<ListenerBinding>,
}

#[wasm_bindgen]
impl KinetoInteract {
    /// Build the binding without attaching listeners.
    ///
    /// Fails when the player or the container cannot be resolved; action
    /// shape problems are logged and tolerated instead.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<KinetoInteract, JsError> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsError::new("no window available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsError::new("no document available"))?;

        let config: Config = swb::from_value(options.clone())
            .map_err(|err| JsError::new(&format!("invalid options: {err}")))?;

        let player_value = object_member(&options, "player")
            .ok_or_else(|| JsError::new("options.player is required"))?;
        let source = classify(&player_value).ok_or_else(|| {
            JsError::new("options.player is neither a selector, an element, nor an animation")
        })?;
        let resolved = resolve(&document, source).map_err(|err| JsError::new(&err.to_string()))?;

        let seek_override = object_member(&options, "playerInstance")
            .and_then(|value| value.dyn_into::<Object>().ok())
            .or_else(|| {
                resolved
                    .host
                    .clone()
                    .map(|element| element.unchecked_into::<Object>())
            });
        let js_player = JsPlayer::new(resolved.animation, seek_override);

        let container = resolve_container(&document, &options, &js_player, resolved.host)?;

        Ok(KinetoInteract {
            engine: Rc::new(RefCell::new(Engine::new(config, js_player))),
            container,
            bindings: Vec::new(),
        })
    }

    /// Attach this mode's listeners and begin dispatching. Idempotent.
    pub fn start(&mut self) -> Result<(), JsError> {
        if !self.bindings.is_empty() {
            return Ok(());
        }
        let window = web_sys::window().ok_or_else(|| JsError::new("no window available"))?;
        self.engine.borrow_mut().start();
        let listeners: &'static [Listener] = self.engine.borrow().listeners();
        for &listener in listeners {
            let (target, event) = match listener {
                Listener::Scroll => (EventTarget::from(window.clone()), "scroll"),
                Listener::PointerEnter => (self.container_target(), "mouseenter"),
                Listener::PointerLeave => (self.container_target(), "mouseleave"),
                Listener::PointerMove => (self.container_target(), "mousemove"),
            };
            self.attach(target, event, listener, window.clone())?;
        }
        Ok(())
    }

    /// Detach every listener and stop dispatching. Idempotent.
    pub fn stop(&mut self) {
        self.engine.borrow_mut().stop();
        for binding in self.bindings.drain(..) {
            let _ = binding
                .target
                .remove_event_listener_with_callback(
                    binding.event,
                    binding.callback.as_ref().unchecked_ref(),
                );
        }
    }

    #[wasm_bindgen(getter)]
    pub fn is_active(&self) -> bool {
        self.engine.borrow().is_active()
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        match self.engine.borrow().mode() {
            Mode::Scroll => "scroll",
            Mode::Hover => "hover",
            Mode::MousePosition => "mouseposition",
        }
        .to_string()
    }
}

impl KinetoInteract {
    fn container_target(&self) -> EventTarget {
        EventTarget::from(self.container.clone())
    }

    fn attach(
        &mut self,
        target: EventTarget,
        event: &'static str,
        listener: Listener,
        window: Window,
    ) -> Result<(), JsError> {
        let engine = Rc::clone(&self.engine);
        let container = self.container.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |raw: Event| {
            let Some(input) = to_input(listener, &raw) else {
                return;
            };
            // Reentrant events while a dispatch is on the stack are dropped.
            let Ok(mut engine) = engine.try_borrow_mut() else {
                return;
            };
            let geometry = dom::snapshot(&window, &container);
            let _ = engine.dispatch(input, &geometry);
        });
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_| JsError::new(&format!("failed to attach '{event}' listener")))?;
        self.bindings.push(ListenerBinding {
            target,
            event,
            callback,
        });
        Ok(())
    }
}

fn to_input(listener: Listener, event: &Event) -> Option<InputEvent> {
    Some(match listener {
        Listener::Scroll => InputEvent::Scroll,
        Listener::PointerEnter => InputEvent::PointerEnter,
        Listener::PointerLeave => InputEvent::PointerLeave,
        Listener::PointerMove => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            InputEvent::PointerMove {
                x: mouse.page_x() as f32,
                y: mouse.page_y() as f32,
            }
        }
    })
}

fn resolve_container(
    document: &Document,
    options: &JsValue,
    player: &JsPlayer,
    host: Option<Element>,
) -> Result<Element, JsError> {
    if let Some(value) = object_member(options, "container") {
        if let Some(selector) = value.as_string() {
            return document
                .query_selector(&selector)
                .ok()
                .flatten()
                .ok_or_else(|| {
                    JsError::new(&format!("no element matches container selector '{selector}'"))
                });
        }
        if let Ok(element) = value.dyn_into::<Element>() {
            return Ok(element);
        }
        return Err(JsError::new(
            "options.container must be a selector or an element",
        ));
    }
    if let Some(element) = host {
        return Ok(element);
    }
    player.wrapper().ok_or_else(|| {
        JsError::new("options.container is missing and the player exposes no wrapper element")
    })
}

/// Build a binding from a host options object and start it immediately.
#[wasm_bindgen]
pub fn create(options: JsValue) -> Result<KinetoInteract, JsError> {
    let mut interact = KinetoInteract::new(options)?;
    interact.start()?;
    Ok(interact)
}

/// Bump when the exported surface changes shape.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
