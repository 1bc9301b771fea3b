// Copyright 2025 the Sidesheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidesheet Env Caps: host environment capability probes for drawer UI.
//!
//! Drawer-style components need to answer a small number of questions about
//! the environment they run in before they can wire up interactions:
//!
//! - Which event names should I listen for? Touch-less environments expose
//!   pointer events instead of touch events, so [`remap_event`] translates
//!   `touchstart`/`touchmove`/`touchend` to their pointer equivalents when
//!   the environment reports no touch support.
//! - Which CSS property animates the panel? [`transform_property`] probes a
//!   throwaway element and picks between the unprefixed `transform` property
//!   and the vendor-prefixed `-webkit-transform` fallback.
//! - Can I theme through custom properties? [`supports_custom_properties`]
//!   asks the environment's own style-capability query.
//!
//! Each query takes the environment explicitly as a [`HostEnv`] reference, so
//! tests and non-browser hosts can supply a double without monkey-patching.
//! Browser builds get the real implementation from `sidesheet_env_caps_web`.
//!
//! ## Ambient environment
//!
//! A process can install one canonical ambient environment with
//! [`install_ambient_env`], mirroring how the queries default to the global
//! window in a browser. The transform-property probe is memoized for that one
//! environment: the first answer computed against the installed handle is
//! reused for the rest of the process, while every other environment is
//! probed fresh on every call. Identity is decided by address comparison
//! against the installed handle, never by capability equivalence.
//!
//! ## Minimal example
//!
//! ```
//! use sidesheet_env_caps::{HostEnv, StyleSurface, TransformProperty};
//!
//! struct Probe(&'static [&'static str]);
//!
//! impl StyleSurface for Probe {
//!     fn has_property(&self, property: &str) -> bool {
//!         self.0.contains(&property)
//!     }
//! }
//!
//! /// A touch-less environment whose elements only know `-webkit-transform`.
//! struct OldWebKit;
//!
//! impl HostEnv for OldWebKit {
//!     fn document_has_event_handler(&self, _handler: &str) -> bool {
//!         false
//!     }
//!     fn create_probe_element(&self) -> Box<dyn StyleSurface> {
//!         Box::new(Probe(&["-webkit-transform"]))
//!     }
//!     fn css_supports(&self, _declaration: &str) -> bool {
//!         false
//!     }
//! }
//!
//! let env = OldWebKit;
//! assert_eq!(sidesheet_env_caps::remap_event(&env, "touchstart"), "pointerdown");
//! assert_eq!(
//!     sidesheet_env_caps::transform_property(&env),
//!     TransformProperty::WebkitPrefixed,
//! );
//! assert_eq!(TransformProperty::WebkitPrefixed.as_str(), "-webkit-transform");
//! assert!(!sidesheet_env_caps::supports_custom_properties(&env));
//! ```

mod env;
mod event;
mod style;

pub use env::{AmbientEnvInstalled, HostEnv, StyleSurface, ambient_env, install_ambient_env};
pub use event::remap_event;
pub use style::{TransformProperty, supports_custom_properties, transform_property};
