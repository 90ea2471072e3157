//! Result and error types for ubicar operations

use thiserror::Error;

/// Result type alias for ubicar operations
pub type UbicarResult<T> = Result<T, UbicarError>;

/// Error type for all ubicar operations.
///
/// Collaborator failures (stale handles, missing frames, failed lookups)
/// surface through the same taxonomy the remote end reports them with; the
/// resolver never rewraps, retries, or recovers on the caller's behalf.
#[derive(Debug, Error)]
pub enum UbicarError {
    /// Element handle no longer refers to an attached DOM node
    #[error("Stale element reference: {id}")]
    StaleElement {
        /// Remote reference of the detached element
        id: String,
    },

    /// Element has no computed layout box (removed from layout flow)
    #[error("Element {id} is not rendered: no layout box")]
    ElementNotRendered {
        /// Remote reference of the unrendered element
        id: String,
    },

    /// Frame identifier did not match any frame in the current document
    #[error("No such frame: {frame}")]
    FrameNotFound {
        /// Identifier that failed to match
        frame: String,
    },

    /// No element matched the selector
    #[error("No such element: {selector}")]
    ElementNotFound {
        /// Selector that failed to match
        selector: String,
    },

    /// Viewport coordinates requested for a context nested deeper than one frame
    #[error("Viewport position is undefined at frame depth {depth}: only a single frame level is supported")]
    ViewportUndefined {
        /// Depth of the offending frame context
        depth: usize,
    },

    /// Navigation to a URL failed
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed to load
        url: String,
        /// Error message from the session
        message: String,
    },

    /// Computed style value could not be parsed as a pixel length
    #[error("Invalid CSS pixel length: {value:?}")]
    InvalidCssLength {
        /// Raw property value as reported by the session
        value: String,
    },

    /// Browser session failure outside the element/frame taxonomy
    #[error("Session error: {message}")]
    Session {
        /// Error message from the session
        message: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    mod display_tests {
        use super::*;

        #[test]
        fn test_stale_element_display() {
            let err = UbicarError::StaleElement {
                id: "e-1138".to_string(),
            };
            assert_eq!(err.to_string(), "Stale element reference: e-1138");
        }

        #[test]
        fn test_viewport_undefined_reports_depth() {
            let err = UbicarError::ViewportUndefined { depth: 2 };
            assert!(err.to_string().contains("depth 2"));
        }

        #[test]
        fn test_navigation_display_includes_url_and_message() {
            let err = UbicarError::Navigation {
                url: "https://example.test/missing".to_string(),
                message: "no such page".to_string(),
            };
            let rendered = err.to_string();
            assert!(rendered.contains("https://example.test/missing"));
            assert!(rendered.contains("no such page"));
        }

        #[test]
        fn test_invalid_css_length_quotes_value() {
            let err = UbicarError::InvalidCssLength {
                value: "auto".to_string(),
            };
            assert_eq!(err.to_string(), "Invalid CSS pixel length: \"auto\"");
        }
    }

    mod conversion_tests {
        use super::*;

        #[test]
        fn test_json_error_converts() {
            let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
            let err = UbicarError::from(json_err);
            assert!(matches!(err, UbicarError::Json(_)));
        }
    }
}
