// Copyright 2025 the Sidesheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style capability probes: transform property resolution and custom
//! property support.

use std::fmt;
use std::sync::OnceLock;

use crate::env::{HostEnv, is_ambient};

/// CSS property name probed on the throwaway element.
const UNPREFIXED_PROBE: &str = "transform";

/// Declaration submitted to the environment's `supports` query.
const CUSTOM_PROPERTY_DECLARATION: &str = "(--color: red)";

/// The CSS property a drawer should animate in a given environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformProperty {
    /// The unprefixed `transform` property.
    Unprefixed,
    /// The vendor-prefixed `-webkit-transform` fallback.
    WebkitPrefixed,
}

impl TransformProperty {
    /// The property name as it appears in a stylesheet.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unprefixed => "transform",
            Self::WebkitPrefixed => "-webkit-transform",
        }
    }
}

impl fmt::Display for TransformProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer memoized for the ambient environment. Written at most once per
/// process and never invalidated, even if the environment's capabilities
/// later change.
static AMBIENT_TRANSFORM_PROPERTY: OnceLock<TransformProperty> = OnceLock::new();

fn probe_transform_property(env: &dyn HostEnv) -> TransformProperty {
    let element = env.create_probe_element();
    if element.has_property(UNPREFIXED_PROBE) {
        TransformProperty::Unprefixed
    } else {
        TransformProperty::WebkitPrefixed
    }
}

/// Resolve which transform property the environment supports.
///
/// The probe creates a throwaway element and checks whether its style
/// surface recognizes `transform`; environments that do not get the
/// `-webkit-transform` fallback.
///
/// When `env` is the installed ambient environment (see
/// [`install_ambient_env`](crate::install_ambient_env)), the first answer is
/// cached for the rest of the process and later calls return it without
/// re-probing. Any other environment is probed fresh on every call and never
/// touches the cache.
pub fn transform_property(env: &dyn HostEnv) -> TransformProperty {
    if is_ambient(env) {
        *AMBIENT_TRANSFORM_PROPERTY.get_or_init(|| probe_transform_property(env))
    } else {
        probe_transform_property(env)
    }
}

/// Whether the environment supports CSS custom properties.
///
/// Delegates to the environment's own style-capability query with the
/// declaration `(--color: red)` and returns its answer unchanged.
pub fn supports_custom_properties(env: &dyn HostEnv) -> bool {
    env.css_supports(CUSTOM_PROPERTY_DECLARATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::test_env::TestEnv;

    // None of these tests install an ambient environment, so every call here
    // takes the fresh-probe path; the memoized path is covered by
    // `tests/ambient.rs` in its own process.

    #[test]
    fn unprefixed_when_element_knows_transform() {
        let env = TestEnv {
            touch_events: false,
            style_properties: &["transform"],
            custom_properties: false,
        };
        assert_eq!(transform_property(&env), TransformProperty::Unprefixed);
    }

    #[test]
    fn webkit_fallback_when_element_does_not_know_transform() {
        let env = TestEnv {
            touch_events: false,
            style_properties: &["-webkit-transform"],
            custom_properties: false,
        };
        assert_eq!(transform_property(&env), TransformProperty::WebkitPrefixed);
    }

    #[test]
    fn distinct_environments_never_share_probe_results() {
        let unprefixed = TestEnv {
            touch_events: false,
            style_properties: &["transform"],
            custom_properties: false,
        };
        let prefixed = TestEnv {
            touch_events: false,
            style_properties: &[],
            custom_properties: false,
        };

        // Interleaved calls stay independent in both directions.
        assert_eq!(transform_property(&unprefixed), TransformProperty::Unprefixed);
        assert_eq!(transform_property(&prefixed), TransformProperty::WebkitPrefixed);
        assert_eq!(transform_property(&unprefixed), TransformProperty::Unprefixed);
        assert_eq!(transform_property(&prefixed), TransformProperty::WebkitPrefixed);
    }

    #[test]
    fn property_names_match_the_stylesheet_tokens() {
        assert_eq!(TransformProperty::Unprefixed.as_str(), "transform");
        assert_eq!(TransformProperty::WebkitPrefixed.as_str(), "-webkit-transform");
        assert_eq!(TransformProperty::Unprefixed.to_string(), "transform");
    }

    #[test]
    fn custom_property_support_is_the_environment_answer() {
        let yes = TestEnv {
            touch_events: false,
            style_properties: &[],
            custom_properties: true,
        };
        let no = TestEnv {
            touch_events: false,
            style_properties: &[],
            custom_properties: false,
        };
        assert!(supports_custom_properties(&yes));
        assert!(!supports_custom_properties(&no));
    }
}
