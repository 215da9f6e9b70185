//! Feature capability probe
//!
//! Decides once, at setup, whether the host can move the strip with a 2-D
//! transform and animate it with a CSS transition. The verdict is stored as
//! a small table of resolved CSS property names so position writes never
//! probe again.

use mintslide_host::Host;

/// Vendor prefixes tried after the unprefixed DOM property name
const VENDOR_PREFIXES: [&str; 4] = ["Webkit", "Moz", "O", "ms"];

/// DOM transition property name -> completion event it fires
const TRANSITION_END_EVENTS: [(&str, &str); 4] = [
    ("transition", "transitionend"),
    ("WebkitTransition", "webkitTransitionEnd"),
    ("MozTransition", "transitionend"),
    ("OTransition", "otransitionend"),
];

/// Resolved capabilities of the host environment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// CSS property to write transforms to, if transforms are usable
    pub transform_property: Option<&'static str>,
    /// CSS property to write transition durations to, if transitions are usable
    pub transition_property: Option<&'static str>,
    /// Event the host fires when a CSS transition completes
    pub transition_end_event: Option<&'static str>,
}

impl Capabilities {
    /// No transform, no transition: everything runs on the fallback path
    pub const NONE: Capabilities = Capabilities {
        transform_property: None,
        transition_property: None,
        transition_end_event: None,
    };

    /// Query the host. Engines on the denylist are forced onto the fallback
    /// path whatever they advertise.
    pub fn probe<H: Host + ?Sized>(host: &H) -> Self {
        if host.is_denylisted_engine() {
            log::debug!("capability probe: denylisted engine, forcing fallback");
            return Self::NONE;
        }

        let transform_property = resolve_property(host, "transform", "transform");
        let transition_property = resolve_property(host, "transition", "transition-duration");
        let transition_end_event = transition_property.and_then(|_| {
            TRANSITION_END_EVENTS
                .iter()
                .find(|(property, _)| host.style_property_defined(property))
                .map(|(_, event)| *event)
        });

        let caps = Self {
            transform_property,
            transition_property,
            transition_end_event,
        };
        log::debug!(
            "capability probe: transforms={} transitions={} transition_end={:?}",
            caps.supports_transform(),
            caps.supports_transition(),
            caps.transition_end_event
        );
        caps
    }

    /// Whether the strip can be moved with a transform
    pub fn supports_transform(&self) -> bool {
        self.transform_property.is_some()
    }

    /// Whether the strip can be animated with a CSS transition
    pub fn supports_transition(&self) -> bool {
        self.transition_property.is_some()
    }
}

/// Return the CSS property to use for `dom_property`, trying the
/// unprefixed name first and then each vendor prefix.
///
/// `css_suffix` is the hyphenated property written through `set_style`
/// (e.g. `transition-duration` for the `transition` probe).
fn resolve_property<H: Host + ?Sized>(host: &H, dom_property: &str, css_suffix: &'static str) -> Option<&'static str> {
    if host.style_property_defined(dom_property) {
        return Some(css_suffix);
    }

    let mut capitalized = String::with_capacity(dom_property.len());
    let mut chars = dom_property.chars();
    if let Some(first) = chars.next() {
        capitalized.extend(first.to_uppercase());
        capitalized.push_str(chars.as_str());
    }

    VENDOR_PREFIXES
        .iter()
        .find(|prefix| host.style_property_defined(&format!("{prefix}{capitalized}")))
        .map(|prefix| prefixed_css_name(prefix, css_suffix))
}

/// Map a DOM vendor prefix onto the hyphenated CSS property name
fn prefixed_css_name(prefix: &str, css_suffix: &'static str) -> &'static str {
    match (prefix, css_suffix) {
        ("Webkit", "transform") => "-webkit-transform",
        ("Moz", "transform") => "-moz-transform",
        ("O", "transform") => "-o-transform",
        ("ms", "transform") => "-ms-transform",
        ("Webkit", "transition-duration") => "-webkit-transition-duration",
        ("Moz", "transition-duration") => "-moz-transition-duration",
        ("O", "transition-duration") => "-o-transition-duration",
        ("ms", "transition-duration") => "-ms-transition-duration",
        _ => css_suffix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintslide_host_mock::MockHost;

    #[test]
    fn test_probe_unprefixed() {
        let host = MockHost::new(3, 300.0).with_accelerated();
        let caps = Capabilities::probe(&host);

        assert_eq!(caps.transform_property, Some("transform"));
        assert_eq!(caps.transition_property, Some("transition-duration"));
        assert_eq!(caps.transition_end_event, Some("transitionend"));
    }

    #[test]
    fn test_probe_vendor_prefixed() {
        let host = MockHost::new(3, 300.0).with_properties(&["WebkitTransform", "WebkitTransition"]);
        let caps = Capabilities::probe(&host);

        assert_eq!(caps.transform_property, Some("-webkit-transform"));
        assert_eq!(caps.transition_property, Some("-webkit-transition-duration"));
        assert_eq!(caps.transition_end_event, Some("webkitTransitionEnd"));
    }

    #[test]
    fn test_probe_nothing_supported() {
        let host = MockHost::new(3, 300.0);
        let caps = Capabilities::probe(&host);

        assert_eq!(caps, Capabilities::NONE);
        assert!(!caps.supports_transform());
        assert!(!caps.supports_transition());
    }

    #[test]
    fn test_probe_transform_only() {
        let host = MockHost::new(3, 300.0).with_properties(&["msTransform"]);
        let caps = Capabilities::probe(&host);

        assert_eq!(caps.transform_property, Some("-ms-transform"));
        assert!(!caps.supports_transition());
        assert!(caps.transition_end_event.is_none());
    }

    #[test]
    fn test_probe_denylisted_engine_forces_fallback() {
        let host = MockHost::new(3, 300.0).with_accelerated().denylisted();
        assert_eq!(Capabilities::probe(&host), Capabilities::NONE);
    }
}
