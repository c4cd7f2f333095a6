//! Bridges the [`PlayerHandle`] trait onto a JavaScript Lottie player.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use kineto_interact_core::{FrameSpan, InteractError, PlayerHandle};

#[inline]
pub(crate) fn jsvalue_is_undefined_or_null(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

/// How the host described the player in the options object.
pub enum PlayerSource {
    /// A ready animation instance exposing the Lottie API directly.
    Instance(Object),
    /// A custom element that hands out its animation via `getLottie()`.
    HostElement(Element),
    /// A plain element with no way to reach an animation.
    Element(Element),
    /// A CSS selector to look up at resolve time.
    Selector(String),
}

/// Classifies an arbitrary JS value into a [`PlayerSource`].
///
/// Returns `None` when the value is absent or of a shape we cannot use at
/// all (numbers, booleans, and the like).
pub fn classify(value: &JsValue) -> Option<PlayerSource> {
    if jsvalue_is_undefined_or_null(value) {
        return None;
    }
    if let Some(selector) = value.as_string() {
        return Some(PlayerSource::Selector(selector));
    }
    if let Some(element) = value.dyn_ref::<Element>() {
        return Some(if has_function(value, "getLottie") {
            PlayerSource::HostElement(element.clone())
        } else {
            PlayerSource::Element(element.clone())
        });
    }
    if has_function(value, "playSegments") {
        return value
            .clone()
            .dyn_into::<Object>()
            .ok()
            .map(PlayerSource::Instance);
    }
    None
}

/// A player resolved down to its raw animation object, keeping the host
/// element around when resolution went through one.
pub struct ResolvedPlayer {
    pub animation: Object,
    pub host: Option<Element>,
}

/// Resolves a [`PlayerSource`] to the underlying animation object.
pub fn resolve(document: &Document, source: PlayerSource) -> Result<ResolvedPlayer, InteractError> {
    match source {
        PlayerSource::Instance(animation) => Ok(ResolvedPlayer {
            animation,
            host: None,
        }),
        PlayerSource::HostElement(element) => Ok(ResolvedPlayer {
            animation: get_lottie(&element)?,
            host: Some(element),
        }),
        PlayerSource::Element(element) => Err(InteractError::PlayerUnresolved {
            reason: format!(
                "element <{}> does not expose an animation",
                element.tag_name().to_lowercase()
            ),
        }),
        PlayerSource::Selector(selector) => {
            let element = document
                .query_selector(&selector)
                .map_err(|_| InteractError::PlayerUnresolved {
                    reason: format!("invalid player selector '{selector}'"),
                })?
                .ok_or_else(|| InteractError::PlayerUnresolved {
                    reason: format!("no element matches player selector '{selector}'"),
                })?;
            if has_function(element.as_ref(), "getLottie") {
                Ok(ResolvedPlayer {
                    animation: get_lottie(&element)?,
                    host: Some(element),
                })
            } else {
                Err(InteractError::PlayerUnresolved {
                    reason: format!("'{selector}' matched an element without an animation"),
                })
            }
        }
    }
}

fn get_lottie(element: &Element) -> Result<Object, InteractError> {
    let getter = function_member(element.as_ref(), "getLottie").ok_or_else(|| {
        InteractError::PlayerUnresolved {
            reason: "player element lost its getLottie() method".to_string(),
        }
    })?;
    let animation = getter
        .call0(element.as_ref())
        .map_err(|_| InteractError::PlayerUnresolved {
            reason: "getLottie() threw while resolving the player".to_string(),
        })?;
    if jsvalue_is_undefined_or_null(&animation) {
        return Err(InteractError::PlayerUnresolved {
            reason: "player element has not loaded an animation yet".to_string(),
        });
    }
    animation
        .dyn_into::<Object>()
        .map_err(|_| InteractError::PlayerUnresolved {
            reason: "getLottie() returned a non-object".to_string(),
        })
}

fn function_member(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|member| member.dyn_into::<Function>().ok())
}

fn has_function(target: &JsValue, name: &str) -> bool {
    function_member(target, name).is_some()
}

/// [`PlayerHandle`] backed by a live JavaScript animation object.
///
/// Playback calls go to the animation itself; percent seeks go to the
/// `playerInstance` override when the host supplied one, since web-component
/// wrappers accept `"NN%"` strings where the raw animation does not.
pub struct JsPlayer {
    animation: Object,
    seek_target: Object,
}

impl JsPlayer {
    pub fn new(animation: Object, seek_override: Option<Object>) -> Self {
        let seek_target = seek_override.unwrap_or_else(|| animation.clone());
        Self {
            animation,
            seek_target,
        }
    }

    /// The DOM element the animation renders into, when the player exposes
    /// one. Used as a fallback scroll container.
    pub fn wrapper(&self) -> Option<Element> {
        Reflect::get(self.animation.as_ref(), &JsValue::from_str("wrapper"))
            .ok()
            .and_then(|value| value.dyn_into::<Element>().ok())
    }

    fn call(&self, name: &str, args: &[JsValue]) {
        let Some(function) = function_member(self.animation.as_ref(), name) else {
            return;
        };
        // Player methods may throw; swallow the error and keep dispatching.
        let _ = match args {
            [] => function.call0(self.animation.as_ref()),
            [a] => function.call1(self.animation.as_ref(), a),
            [a, b] => function.call2(self.animation.as_ref(), a, b),
            _ => return,
        };
    }

    fn read(&self, name: &str) -> JsValue {
        Reflect::get(self.animation.as_ref(), &JsValue::from_str(name))
            .unwrap_or(JsValue::UNDEFINED)
    }
}

impl PlayerHandle for JsPlayer {
    fn play_segments(&mut self, span: FrameSpan, force: bool) {
        let segment = Array::of2(
            &JsValue::from_f64(span.start as f64),
            &JsValue::from_f64(span.end as f64),
        );
        self.call("playSegments", &[segment.into(), JsValue::from_bool(force)]);
    }

    fn reset_segments(&mut self) {
        self.call("resetSegments", &[JsValue::from_bool(true)]);
    }

    fn play(&mut self) {
        self.call("play", &[]);
    }

    fn stop(&mut self) {
        self.call("stop", &[]);
    }

    fn go_to_and_stop(&mut self, frame: f32) {
        self.call(
            "goToAndStop",
            &[JsValue::from_f64(frame as f64), JsValue::from_bool(true)],
        );
    }

    fn seek_to_percent(&mut self, percent: u32) {
        let Some(seek) = function_member(self.seek_target.as_ref(), "seek") else {
            return;
        };
        let _ = seek.call1(
            self.seek_target.as_ref(),
            &JsValue::from_str(&format!("{percent}%")),
        );
    }

    fn is_paused(&self) -> bool {
        self.read("isPaused").as_bool().unwrap_or(false)
    }

    fn set_loop(&mut self, looping: bool) {
        let _ = Reflect::set(
            self.animation.as_ref(),
            &JsValue::from_str("loop"),
            &JsValue::from_bool(looping),
        );
    }

    fn total_frames(&self) -> f32 {
        self.read("totalFrames").as_f64().unwrap_or(0.0) as f32
    }
}
