//! Error types for slider construction

use mintslide_host::HostError;

/// Errors that can occur while setting up a slider.
///
/// Page operations never fail: out-of-range requests are clamped. Only
/// construction (option validation, tree mounting) and the browser binding
/// return these.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SliderError {
    /// An option value can never produce a usable layout.
    #[error("invalid option `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },

    /// The slide source has no children.
    #[error("slider has no slides")]
    NoSlides,

    /// A host primitive failed.
    #[error("host error: {0}")]
    Host(#[from] HostError),
}

impl SliderError {
    pub(crate) fn invalid(option: &'static str, reason: impl Into<String>) -> Self {
        SliderError::InvalidOption {
            option,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_display() {
        let err = SliderError::invalid("slideWidth", "must be positive, got -3");
        assert_eq!(err.to_string(), "invalid option `slideWidth`: must be positive, got -3");
    }

    #[test]
    fn test_host_error_converts() {
        let err: SliderError = HostError::Dom("boom".to_string()).into();
        assert!(matches!(err, SliderError::Host(HostError::Dom(_))));
        assert_eq!(err.to_string(), "host error: DOM operation failed: boom");
    }
}
