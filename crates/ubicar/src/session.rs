//! The browser session boundary
//!
//! [`BrowserSession`] is everything coordinate resolution needs from a
//! remote end, expressed as sequential blocking calls. Implementations
//! wrap a real protocol client; [`MockSession`] scripts the same surface
//! in-process: pages are registered per URL as trees of documents, frames,
//! and elements, and a call history records every interaction for
//! verification.

use std::collections::HashMap;

use tracing::{debug, trace};
use uuid::Uuid;

use crate::element::ElementHandle;
use crate::frame::FrameId;
use crate::geometry::{RawPoint, RawRect, Size};
use crate::locator::Selector;
use crate::result::{UbicarError, UbicarResult};

/// Boundary to a live browser session.
///
/// Geometry reads (`bounding_rect`, `frame_rect`, `scroll_offset`,
/// `viewport_size`, `computed_style`) take `&self`: resolving coordinates
/// never changes session state. State transitions (navigation, frame
/// switches, clicks) take `&mut self`.
///
/// # Implementations
///
/// - A protocol client wrapping a remote end (WebDriver, CDP)
/// - [`MockSession`] for unit testing
pub trait BrowserSession {
    /// Navigate to URL
    fn navigate(&mut self, url: &str) -> UbicarResult<()>;

    /// Locate the first element matching the selector
    fn find_element(&mut self, selector: &Selector) -> UbicarResult<ElementHandle>;

    /// Enter a frame of the current document
    fn switch_to_frame(&mut self, frame: &FrameId) -> UbicarResult<()>;

    /// Return to the top-level document
    fn switch_to_top(&mut self) -> UbicarResult<()>;

    /// Sub-pixel border box of an element, document-relative within the
    /// frame that owns it
    fn bounding_rect(&self, element: &ElementHandle) -> UbicarResult<RawRect>;

    /// A single computed CSS property, serialized as the engine reports it
    fn computed_style(&self, element: &ElementHandle, property: &str) -> UbicarResult<String>;

    /// Border box of the frame named by the last element of `path`, within
    /// its parent document.
    ///
    /// `path` is absolute, starting at the top document, so same-named
    /// frames at different nesting depths stay distinguishable.
    fn frame_rect(&self, path: &[FrameId]) -> UbicarResult<RawRect>;

    /// Scroll offset of the current browsing context
    fn scroll_offset(&self) -> UbicarResult<RawPoint>;

    /// Size of the current visible viewport
    fn viewport_size(&self) -> UbicarResult<Size>;

    /// Click an element
    fn click(&mut self, element: &ElementHandle) -> UbicarResult<()>;
}

/// One scripted element in a mock document.
///
/// A fresh element has no layout box, the state an element removed from
/// layout flow (`display:none`) reports; script geometry with
/// [`MockElement::with_rect`].
#[derive(Debug, Clone)]
pub struct MockElement {
    /// Remote reference minted for this element
    pub reference: String,
    /// `id` attribute the element is found by
    pub id_attr: String,
    /// Border box, document-relative within the owning frame; `None`
    /// when the element has no layout box
    pub rect: Option<RawRect>,
    /// Whether the element has been detached from the document
    pub detached: bool,
    /// Viewport-pinned (`position:fixed`): the document-relative box
    /// tracks the scroll offset
    pub fixed: bool,
    /// Computed styles by property name
    pub styles: HashMap<String, String>,
}

impl MockElement {
    /// Create an element found by the given `id` attribute
    pub fn new(id_attr: impl Into<String>) -> Self {
        Self {
            reference: Uuid::new_v4().to_string(),
            id_attr: id_attr.into(),
            rect: None,
            detached: false,
            fixed: false,
            styles: HashMap::new(),
        }
    }

    /// Script the element's border box
    #[must_use]
    pub fn with_rect(mut self, rect: RawRect) -> Self {
        self.rect = Some(rect);
        self
    }

    /// Script a computed style property
    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// Pin the element to the viewport (`position:fixed`)
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Start the element detached from the document
    #[must_use]
    pub fn detached(mut self) -> Self {
        self.detached = true;
        self
    }
}

/// One scripted frame: a named border box embedding a child document
#[derive(Debug, Clone)]
pub struct MockFrame {
    /// `name`/`id` attribute the frame is switched to by; its index is
    /// its position in the parent document
    pub name: String,
    /// Border box within the parent document
    pub rect: RawRect,
    /// The embedded document
    pub document: MockDocument,
}

impl MockFrame {
    /// Create a frame with an empty embedded document
    pub fn new(name: impl Into<String>, rect: RawRect) -> Self {
        Self {
            name: name.into(),
            rect,
            document: MockDocument::new(),
        }
    }

    /// Script the embedded document
    #[must_use]
    pub fn with_document(mut self, document: MockDocument) -> Self {
        self.document = document;
        self
    }
}

/// One scripted document: elements, child frames, and a scroll offset.
///
/// The same type describes a page's top document and every embedded frame
/// document.
#[derive(Debug, Clone, Default)]
pub struct MockDocument {
    /// Elements in this document
    pub elements: Vec<MockElement>,
    /// Frames embedded in this document, in tree order
    pub frames: Vec<MockFrame>,
    /// Scroll offset of this document's browsing context
    pub scroll: RawPoint,
}

impl MockDocument {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element
    #[must_use]
    pub fn with_element(mut self, element: MockElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Embed a frame
    #[must_use]
    pub fn with_frame(mut self, frame: MockFrame) -> Self {
        self.frames.push(frame);
        self
    }

    /// Script the initial scroll offset
    #[must_use]
    pub fn with_scroll(mut self, scroll: RawPoint) -> Self {
        self.scroll = scroll;
        self
    }
}

/// Scripted in-process session for unit testing.
///
/// Pages are registered per URL and stay pristine: `navigate` loads a
/// fresh working copy, so scroll changes and detached elements never leak
/// across navigations.
#[derive(Debug)]
pub struct MockSession {
    pages: HashMap<String, MockDocument>,
    current_url: Option<String>,
    current_page: Option<MockDocument>,
    current_frames: Vec<FrameId>,
    viewport: Size,
    /// Call history for verification
    pub call_history: Vec<String>,
}

impl Default for MockSession {
    fn default() -> Self {
        Self {
            pages: HashMap::new(),
            current_url: None,
            current_page: None,
            current_frames: Vec::new(),
            viewport: Size::new(1920, 1080),
            call_history: Vec::new(),
        }
    }
}

impl MockSession {
    /// Create a session with no pages registered
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page under a URL
    #[must_use]
    pub fn with_page(mut self, url: impl Into<String>, document: MockDocument) -> Self {
        self.pages.insert(url.into(), document);
        self
    }

    /// Override the scripted viewport size
    #[must_use]
    pub const fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// URL of the currently loaded page, if any
    #[must_use]
    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// Get call history
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.call_history
    }

    /// Check if method was called
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.call_history.iter().any(|c| c.starts_with(method))
    }

    /// Set the scroll offset of the current browsing context
    pub fn set_scroll(&mut self, scroll: RawPoint) -> UbicarResult<()> {
        self.current_document_mut()?.scroll = scroll;
        Ok(())
    }

    /// Detach the element with the given `id` attribute from the current
    /// document, so handles to it go stale
    pub fn detach_element(&mut self, id_attr: &str) -> UbicarResult<()> {
        let doc = self.current_document_mut()?;
        let element = doc
            .elements
            .iter_mut()
            .find(|e| e.id_attr == id_attr)
            .ok_or_else(|| UbicarError::ElementNotFound {
                selector: format!("id={id_attr}"),
            })?;
        element.detached = true;
        Ok(())
    }

    fn no_page() -> UbicarError {
        UbicarError::Session {
            message: "no page loaded".to_string(),
        }
    }

    fn find_frame<'a>(document: &'a MockDocument, frame: &FrameId) -> Option<&'a MockFrame> {
        match frame {
            FrameId::Index(index) => document.frames.get(usize::from(*index)),
            FrameId::Name(name) => document.frames.iter().find(|f| f.name == *name),
        }
    }

    /// Document of the browsing context the session is switched into
    fn current_document(&self) -> UbicarResult<&MockDocument> {
        let mut document = self.current_page.as_ref().ok_or_else(Self::no_page)?;
        for frame in &self.current_frames {
            document = &Self::find_frame(document, frame)
                .ok_or_else(|| UbicarError::FrameNotFound {
                    frame: frame.to_string(),
                })?
                .document;
        }
        Ok(document)
    }

    fn current_document_mut(&mut self) -> UbicarResult<&mut MockDocument> {
        let mut document = self.current_page.as_mut().ok_or_else(Self::no_page)?;
        for frame in &self.current_frames {
            let found = match frame {
                FrameId::Index(index) => document.frames.get_mut(usize::from(*index)),
                FrameId::Name(name) => document.frames.iter_mut().find(|f| f.name == *name),
            };
            document = &mut found
                .ok_or_else(|| UbicarError::FrameNotFound {
                    frame: frame.to_string(),
                })?
                .document;
        }
        Ok(document)
    }

    fn attached_element<'a>(
        document: &'a MockDocument,
        element: &ElementHandle,
    ) -> UbicarResult<&'a MockElement> {
        document
            .elements
            .iter()
            .find(|e| e.reference == element.id() && !e.detached)
            .ok_or_else(|| UbicarError::StaleElement {
                id: element.id().to_string(),
            })
    }
}

impl BrowserSession for MockSession {
    fn navigate(&mut self, url: &str) -> UbicarResult<()> {
        self.call_history.push(format!("navigate:{url}"));
        let page = self
            .pages
            .get(url)
            .cloned()
            .ok_or_else(|| UbicarError::Navigation {
                url: url.to_string(),
                message: "no page registered for this URL".to_string(),
            })?;
        debug!("Navigating to {url}");
        self.current_url = Some(url.to_string());
        self.current_page = Some(page);
        self.current_frames.clear();
        Ok(())
    }

    fn find_element(&mut self, selector: &Selector) -> UbicarResult<ElementHandle> {
        self.call_history.push(format!("find_element:{selector}"));
        let document = self.current_document()?;
        // Scripted lookup matches id attributes only; CSS/XPath evaluation
        // belongs to a real remote end.
        let found = match selector {
            Selector::Id(id) => document
                .elements
                .iter()
                .find(|e| !e.detached && e.id_attr == *id),
            _ => None,
        };
        found
            .map(|e| ElementHandle::new(e.reference.clone()))
            .ok_or_else(|| UbicarError::ElementNotFound {
                selector: selector.to_string(),
            })
    }

    fn switch_to_frame(&mut self, frame: &FrameId) -> UbicarResult<()> {
        self.call_history.push(format!("switch_to_frame:{frame}"));
        let document = self.current_document()?;
        if Self::find_frame(document, frame).is_none() {
            return Err(UbicarError::FrameNotFound {
                frame: frame.to_string(),
            });
        }
        debug!("Switching to frame {frame}");
        self.current_frames.push(frame.clone());
        Ok(())
    }

    fn switch_to_top(&mut self) -> UbicarResult<()> {
        self.call_history.push("switch_to_top".to_string());
        if self.current_page.is_none() {
            return Err(Self::no_page());
        }
        self.current_frames.clear();
        Ok(())
    }

    fn bounding_rect(&self, element: &ElementHandle) -> UbicarResult<RawRect> {
        let document = self.current_document()?;
        let found = Self::attached_element(document, element)?;
        let rect = found.rect.ok_or_else(|| UbicarError::ElementNotRendered {
            id: element.id().to_string(),
        })?;
        // A viewport-pinned box keeps its place on screen, so its
        // document-relative position moves with the scroll offset.
        let rect = if found.fixed {
            rect.translated(document.scroll.x, document.scroll.y)
        } else {
            rect
        };
        trace!("Bounding box of {element}: {rect:?}");
        Ok(rect)
    }

    fn computed_style(&self, element: &ElementHandle, property: &str) -> UbicarResult<String> {
        let document = self.current_document()?;
        let found = Self::attached_element(document, element)?;
        Ok(found.styles.get(property).cloned().unwrap_or_default())
    }

    fn frame_rect(&self, path: &[FrameId]) -> UbicarResult<RawRect> {
        let (last, ancestors) = path.split_last().ok_or_else(|| UbicarError::Session {
            message: "empty frame path".to_string(),
        })?;
        let mut document = self.current_page.as_ref().ok_or_else(Self::no_page)?;
        for frame in ancestors {
            document = &Self::find_frame(document, frame)
                .ok_or_else(|| UbicarError::FrameNotFound {
                    frame: frame.to_string(),
                })?
                .document;
        }
        Self::find_frame(document, last)
            .map(|f| f.rect)
            .ok_or_else(|| UbicarError::FrameNotFound {
                frame: last.to_string(),
            })
    }

    fn scroll_offset(&self) -> UbicarResult<RawPoint> {
        Ok(self.current_document()?.scroll)
    }

    fn viewport_size(&self) -> UbicarResult<Size> {
        if self.current_page.is_none() {
            return Err(Self::no_page());
        }
        Ok(self.viewport)
    }

    fn click(&mut self, element: &ElementHandle) -> UbicarResult<()> {
        self.call_history.push(format!("click:{}", element.id()));
        let document = self.current_document()?;
        Self::attached_element(document, element)?;
        Ok(())
    }
}
