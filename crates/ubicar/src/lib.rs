//! Ubicar: Frame-Aware Element Geometry for Browser Automation
//!
//! Ubicar (Spanish: "to locate/place") resolves a located page element and
//! its frame context into the two integer coordinate pairs automation
//! clients work with: document position, stable under scrolling, and
//! viewport position, which tracks the current scroll. Sub-pixel layout
//! measurements are rounded once per measurement (halves away from zero)
//! and composed in integer space.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      UBICAR Architecture                         │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Caller     │    │ Coordinate │    │ Browser    │            │
//! │   │ (harness,  │───►│ Resolver   │───►│ Session    │            │
//! │   │  client)   │    │            │    │ (remote)   │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session boundary is a trait, so any protocol client can sit behind
//! it; [`MockSession`] scripts the same surface in-process, which makes
//! the geometry semantics testable without a browser.
//!
//! # Example
//!
//! ```
//! use ubicar::prelude::*;
//!
//! let page = MockDocument::new().with_element(
//!     MockElement::new("box").with_rect(RawRect::new(10.9, 10.1, 48.7, 49.3)),
//! );
//! let mut session = MockSession::new().with_page("https://app.test/", page);
//! session.navigate("https://app.test/")?;
//!
//! let element = session.find_element(&Selector::id("box"))?;
//! let coords = CoordinateResolver::new()
//!     .resolve(&session, &element, &FrameContext::top())?;
//! assert_eq!(coords.document, Point::new(11, 10));
//! # Ok::<(), ubicar::UbicarError>(())
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod element;
mod frame;
mod geometry;
mod locator;
mod resolver;
mod result;
mod session;
mod style;

pub use element::{ElementHandle, ELEMENT_KEY};
pub use frame::{FrameContext, FrameId};
pub use geometry::{px, Point, RawPoint, RawRect, Size};
pub use locator::Selector;
pub use resolver::{CoordinateResolver, ElementCoordinates, MAX_VIEWPORT_FRAME_DEPTH};
pub use result::{UbicarError, UbicarResult};
pub use session::{BrowserSession, MockDocument, MockElement, MockFrame, MockSession};
pub use style::PixelLength;

/// Convenience re-exports for client code and tests
pub mod prelude {
    pub use super::element::{ElementHandle, ELEMENT_KEY};
    pub use super::frame::{FrameContext, FrameId};
    pub use super::geometry::{px, Point, RawPoint, RawRect, Size};
    pub use super::locator::Selector;
    pub use super::resolver::{CoordinateResolver, ElementCoordinates, MAX_VIEWPORT_FRAME_DEPTH};
    pub use super::result::{UbicarError, UbicarResult};
    pub use super::session::{BrowserSession, MockDocument, MockElement, MockFrame, MockSession};
    pub use super::style::PixelLength;
}
