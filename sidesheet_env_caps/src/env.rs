// Copyright 2025 the Sidesheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host environment seam and the ambient environment registry.

use std::error::Error;
use std::fmt;
use std::ptr;
use std::sync::OnceLock;

/// Capability surface of a host environment.
///
/// This is the window/document pair the capability probes run against. The
/// trait is deliberately narrow: it exposes exactly the three introspection
/// points the probes need, so a test double is a few lines of code.
///
/// An environment that cannot satisfy these methods cannot be constructed;
/// there is no runtime notion of a malformed environment.
pub trait HostEnv {
    /// Whether the environment's document exposes a handler slot with the
    /// given name, e.g. `ontouchstart`.
    ///
    /// This is the containment-style check a browser performs for
    /// `"ontouchstart" in document`.
    fn document_has_event_handler(&self, handler: &str) -> bool;

    /// Create a throwaway element whose style surface can be probed.
    ///
    /// The element is never attached to anything and is dropped as soon as
    /// the probe has its answer.
    fn create_probe_element(&self) -> Box<dyn StyleSurface>;

    /// Whether the environment's CSS engine accepts the given `supports`
    /// declaration, e.g. `(--color: red)`.
    fn css_supports(&self, declaration: &str) -> bool;
}

/// Inline style surface of a probe element created by [`HostEnv`].
pub trait StyleSurface {
    /// Whether the surface recognizes the given CSS property name.
    fn has_property(&self, property: &str) -> bool;
}

static AMBIENT_ENV: OnceLock<&'static (dyn HostEnv + Sync)> = OnceLock::new();

/// Error returned by [`install_ambient_env`] when an ambient environment has
/// already been installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbientEnvInstalled;

impl fmt::Display for AmbientEnvInstalled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ambient host environment is already installed")
    }
}

impl Error for AmbientEnvInstalled {}

/// Install the canonical ambient environment for this process.
///
/// At most one environment can be installed over the lifetime of the
/// process; a second call returns [`AmbientEnvInstalled`] and leaves the
/// first installation in place. Installing an ambient environment is what
/// enables the per-process memoization in
/// [`transform_property`](crate::transform_property).
pub fn install_ambient_env(
    env: &'static (dyn HostEnv + Sync),
) -> Result<(), AmbientEnvInstalled> {
    AMBIENT_ENV.set(env).map_err(|_| AmbientEnvInstalled)
}

/// The installed ambient environment, if any.
pub fn ambient_env() -> Option<&'static (dyn HostEnv + Sync)> {
    AMBIENT_ENV.get().copied()
}

/// Whether `env` is the installed ambient environment.
///
/// Identity is address identity against the installed handle. Two
/// environments with identical capabilities are still distinct.
pub(crate) fn is_ambient(env: &dyn HostEnv) -> bool {
    match ambient_env() {
        Some(ambient) => ptr::addr_eq(ptr::from_ref(ambient), ptr::from_ref(env)),
        None => false,
    }
}

#[cfg(test)]
pub(crate) mod test_env {
    use super::{HostEnv, StyleSurface};

    /// Configurable environment double mirroring a browser window.
    pub(crate) struct TestEnv {
        pub(crate) touch_events: bool,
        pub(crate) style_properties: &'static [&'static str],
        pub(crate) custom_properties: bool,
    }

    struct TestSurface {
        properties: &'static [&'static str],
    }

    impl StyleSurface for TestSurface {
        fn has_property(&self, property: &str) -> bool {
            self.properties.contains(&property)
        }
    }

    impl HostEnv for TestEnv {
        fn document_has_event_handler(&self, handler: &str) -> bool {
            handler == "ontouchstart" && self.touch_events
        }

        fn create_probe_element(&self) -> Box<dyn StyleSurface> {
            Box::new(TestSurface {
                properties: self.style_properties,
            })
        }

        fn css_supports(&self, declaration: &str) -> bool {
            declaration == "(--color: red)" && self.custom_properties
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_env::TestEnv;
    use super::*;

    // The unit test binary never installs an ambient environment; the
    // install/memoization interplay is covered by `tests/ambient.rs`, which
    // runs in its own process.

    #[test]
    fn no_ambient_env_by_default() {
        assert!(ambient_env().is_none());
    }

    #[test]
    fn nothing_is_ambient_before_install() {
        let env = TestEnv {
            touch_events: true,
            style_properties: &["transform"],
            custom_properties: true,
        };
        assert!(!is_ambient(&env));
    }

    #[test]
    fn installed_error_formats_a_message() {
        let message = AmbientEnvInstalled.to_string();
        assert!(message.contains("already installed"));
    }
}
