//! Coordinate resolution
//!
//! [`CoordinateResolver`] turns an element's sub-pixel layout geometry into
//! the two integer coordinate pairs automation callers work with: where the
//! element sits in the full document, and where it currently sits in the
//! visible viewport. Every measurement is rounded once, then composed in
//! integer space, so frame composition stays exactly additive.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::element::ElementHandle;
use crate::frame::FrameContext;
use crate::geometry::{Point, Size};
use crate::result::{UbicarError, UbicarResult};
use crate::session::BrowserSession;

/// Deepest frame nesting viewport coordinates are defined for.
///
/// Remote ends report viewport positions within a single frame; composing
/// them across further nesting has no defined answer, so resolution
/// reports the combination as unsupported instead of guessing.
pub const MAX_VIEWPORT_FRAME_DEPTH: usize = 1;

/// Both coordinate spaces of one resolved element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCoordinates {
    /// Position within the full scrollable document of the frame chain's
    /// root; stable under scrolling
    pub document: Point,
    /// Position within the current frame's visible viewport; changes as
    /// the frame scrolls. `None` when the context nests deeper than
    /// [`MAX_VIEWPORT_FRAME_DEPTH`]
    pub viewport: Option<Point>,
}

/// Stateless resolver from layout geometry to pixel coordinates.
///
/// The resolver holds no session and caches nothing: every call re-queries
/// current layout through the [`BrowserSession`] passed to it, since
/// geometry is inherently time-varying. One resolver value is safely
/// reusable across elements and sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateResolver;

impl CoordinateResolver {
    /// Create a resolver
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolve both coordinate pairs for an element.
    ///
    /// `context` names the frame chain the session is currently switched
    /// into; the caller keeps the two in step. An empty context means the
    /// top-level document.
    ///
    /// The element's raw box is rounded to whole pixels, then the rounded
    /// origins of the context's ancestor frames are added for the document
    /// position. The viewport position subtracts the current scroll offset
    /// instead, and only exists while the context is at most one frame
    /// deep.
    pub fn resolve<S>(
        &self,
        session: &S,
        element: &ElementHandle,
        context: &FrameContext,
    ) -> UbicarResult<ElementCoordinates>
    where
        S: BrowserSession + ?Sized,
    {
        let rect = session.bounding_rect(element)?;
        let local = rect.origin();

        let mut document = local;
        for depth in 1..=context.depth() {
            let ancestor = session.frame_rect(&context.frames()[..depth])?;
            trace!("Frame offset at depth {depth}: {}", ancestor.origin());
            document = document + ancestor.origin();
        }

        let viewport = if context.depth() <= MAX_VIEWPORT_FRAME_DEPTH {
            let scroll = session.scroll_offset()?.rounded();
            Some(local - scroll)
        } else {
            None
        };

        debug!("Resolved {element}: document {document}, viewport {viewport:?}");
        Ok(ElementCoordinates { document, viewport })
    }

    /// Scroll-invariant position within the root document of `context`
    pub fn document_position<S>(
        &self,
        session: &S,
        element: &ElementHandle,
        context: &FrameContext,
    ) -> UbicarResult<Point>
    where
        S: BrowserSession + ?Sized,
    {
        self.resolve(session, element, context).map(|c| c.document)
    }

    /// Scroll-variant position within the current frame's viewport.
    ///
    /// Fails with [`UbicarError::ViewportUndefined`] before touching the
    /// session when `context` nests deeper than
    /// [`MAX_VIEWPORT_FRAME_DEPTH`]. Values outside the viewport bounds
    /// (negative, or past its width/height) are valid results for
    /// scrolled-out elements, not errors.
    pub fn viewport_position<S>(
        &self,
        session: &S,
        element: &ElementHandle,
        context: &FrameContext,
    ) -> UbicarResult<Point>
    where
        S: BrowserSession + ?Sized,
    {
        if context.depth() > MAX_VIEWPORT_FRAME_DEPTH {
            return Err(UbicarError::ViewportUndefined {
                depth: context.depth(),
            });
        }
        self.resolve(session, element, context)?
            .viewport
            .ok_or_else(|| UbicarError::ViewportUndefined {
                depth: context.depth(),
            })
    }

    /// Border-box size rounded to whole pixels
    pub fn element_size<S>(&self, session: &S, element: &ElementHandle) -> UbicarResult<Size>
    where
        S: BrowserSession + ?Sized,
    {
        Ok(session.bounding_rect(element)?.size())
    }
}
