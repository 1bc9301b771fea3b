// Copyright 2025 the Sidesheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-to-pointer event name remapping.

use crate::env::HostEnv;

/// Handler slot whose presence on the document signals touch support.
const TOUCH_START_HANDLER: &str = "ontouchstart";

/// Remap a touch event name to its pointer equivalent when the environment
/// does not support touch events.
///
/// Exactly three names are remapped: `touchstart` to `pointerdown`,
/// `touchmove` to `pointermove`, and `touchend` to `pointerup`. Every other
/// name, and every name on a touch-capable environment, is returned
/// unchanged.
pub fn remap_event<'a>(env: &dyn HostEnv, event: &'a str) -> &'a str {
    if env.document_has_event_handler(TOUCH_START_HANDLER) {
        return event;
    }

    match event {
        "touchstart" => "pointerdown",
        "touchmove" => "pointermove",
        "touchend" => "pointerup",
        other => other,
    }
}
