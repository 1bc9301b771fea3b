// Copyright 2025 the Sidesheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for the Sidesheet environment capability probes.
//!
//! This crate implements [`HostEnv`] over the real DOM via `web_sys` when
//! targeting `wasm32`. [`BrowserEnv`] is a zero-sized handle to the ambient
//! window/document pair; capability checks go through `js_sys::Reflect` where
//! the probe is a JS `in` check, and through the window's `CSS` namespace for
//! `supports` queries.
//!
//! Call `install()` once during startup to register the browser as the
//! process-wide ambient environment. That enables the per-process
//! memoization of the transform-property probe and lets the no-argument
//! conveniences (`remap_event`, `transform_property`,
//! `supports_custom_properties`) behave like their defaulted originals.
//!
//! ```no_run
//! # #[cfg(target_arch = "wasm32")]
//! # fn setup() {
//! sidesheet_env_caps_web::install().expect("install once at startup");
//!
//! let down = sidesheet_env_caps_web::remap_event("touchstart");
//! let property = sidesheet_env_caps_web::transform_property();
//! # let _ = (down, property);
//! # }
//! ```

use sidesheet_env_caps::{HostEnv, StyleSurface};

#[cfg(target_arch = "wasm32")]
use sidesheet_env_caps::{AmbientEnvInstalled, TransformProperty, install_ambient_env};

#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{CssStyleDeclaration, Document, HtmlElement};

/// The browser's ambient window/document pair (only functional on `wasm32`).
///
/// The handle is zero-sized; every probe looks the globals up again, so the
/// type stays `Sync` and a single `static` instance can serve as the
/// canonical ambient handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserEnv;

/// The canonical [`BrowserEnv`] instance that `install()` registers as
/// ambient.
pub static BROWSER_ENV: BrowserEnv = BrowserEnv;

#[cfg(target_arch = "wasm32")]
fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

#[cfg(target_arch = "wasm32")]
struct BrowserStyleSurface {
    style: CssStyleDeclaration,
}

#[cfg(target_arch = "wasm32")]
impl StyleSurface for BrowserStyleSurface {
    fn has_property(&self, property: &str) -> bool {
        // The `in` check: camel- and dash-cased property keys both live on
        // the declaration object itself or its prototype.
        Reflect::has(self.style.as_ref(), &JsValue::from_str(property)).unwrap_or(false)
    }
}

#[cfg(target_arch = "wasm32")]
impl HostEnv for BrowserEnv {
    fn document_has_event_handler(&self, handler: &str) -> bool {
        match document() {
            Some(document) => {
                Reflect::has(document.as_ref(), &JsValue::from_str(handler)).unwrap_or(false)
            }
            None => false,
        }
    }

    fn create_probe_element(&self) -> Box<dyn StyleSurface> {
        let document = document().expect("no global `document` to create a probe element in");
        let element: HtmlElement = document
            .create_element("div")
            .and_then(|element| element.dyn_into::<HtmlElement>().map_err(JsValue::from))
            .expect("creating a throwaway <div> probe element");
        Box::new(BrowserStyleSurface {
            style: element.style(),
        })
    }

    fn css_supports(&self, declaration: &str) -> bool {
        // window.CSS.supports(declaration); absent `CSS` means no support.
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Ok(css) = Reflect::get(window.as_ref(), &JsValue::from_str("CSS")) else {
            return false;
        };
        if css.is_undefined() || css.is_null() {
            return false;
        }
        let supports = Reflect::get(&css, &JsValue::from_str("supports"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok());
        match supports {
            Some(supports) => supports
                .call1(&css, &JsValue::from_str(declaration))
                .ok()
                .and_then(|value| value.as_bool())
                .unwrap_or(false),
            None => false,
        }
    }
}

/// Register the browser as the process-wide ambient environment.
///
/// Call once during startup, before the first capability query. Later calls
/// return [`AmbientEnvInstalled`] and change nothing.
#[cfg(target_arch = "wasm32")]
pub fn install() -> Result<(), AmbientEnvInstalled> {
    install_ambient_env(&BROWSER_ENV)
}

/// [`sidesheet_env_caps::remap_event`] against the browser environment.
#[cfg(target_arch = "wasm32")]
pub fn remap_event(event: &str) -> &str {
    sidesheet_env_caps::remap_event(&BROWSER_ENV, event)
}

/// [`sidesheet_env_caps::transform_property`] against the browser
/// environment.
///
/// Memoized per process once [`install`] has run.
#[cfg(target_arch = "wasm32")]
pub fn transform_property() -> TransformProperty {
    sidesheet_env_caps::transform_property(&BROWSER_ENV)
}

/// [`sidesheet_env_caps::supports_custom_properties`] against the browser
/// environment.
#[cfg(target_arch = "wasm32")]
pub fn supports_custom_properties() -> bool {
    sidesheet_env_caps::supports_custom_properties(&BROWSER_ENV)
}

// Stub impl for non-wasm targets so the crate can be included in the
// workspace.
#[cfg(not(target_arch = "wasm32"))]
impl HostEnv for BrowserEnv {
    fn document_has_event_handler(&self, _handler: &str) -> bool {
        unimplemented!("BrowserEnv is only available on wasm32")
    }

    fn create_probe_element(&self) -> Box<dyn StyleSurface> {
        unimplemented!("BrowserEnv is only available on wasm32")
    }

    fn css_supports(&self, _declaration: &str) -> bool {
        unimplemented!("BrowserEnv is only available on wasm32")
    }
}
