//! Frame identifiers and the nesting context of an element lookup

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for one embedded browsing context, in the forms
/// `switch_to_frame` accepts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameId {
    /// Zero-based position among the parent document's frames
    Index(u16),
    /// `name` or `id` attribute of the frame element
    Name(String),
}

impl FrameId {
    /// Frame addressed by its `name` or `id` attribute
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Frame addressed by zero-based index
    #[must_use]
    pub const fn index(index: u16) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Ordered chain of frames from the top document down to the current one.
///
/// An empty context means the top-level document itself. The caller owns
/// the context and keeps it in step with the frame the session is actually
/// switched into; resolution only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameContext {
    frames: Vec<FrameId>,
}

impl FrameContext {
    /// Context for the top-level document, no frames entered
    #[must_use]
    pub const fn top() -> Self {
        Self { frames: Vec::new() }
    }

    /// Extend the chain by one more nested frame
    #[must_use]
    pub fn with_frame(mut self, frame: FrameId) -> Self {
        self.frames.push(frame);
        self
    }

    /// Number of frames entered below the top document
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Whether this is the top-level document
    #[must_use]
    pub fn is_top(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frame chain, outermost first
    #[must_use]
    pub fn frames(&self) -> &[FrameId] {
        &self.frames
    }
}

impl From<FrameId> for FrameContext {
    fn from(frame: FrameId) -> Self {
        Self::top().with_frame(frame)
    }
}

impl FromIterator<FrameId> for FrameContext {
    fn from_iter<I: IntoIterator<Item = FrameId>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FrameContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("top")?;
        for frame in &self.frames {
            write!(f, " > {frame}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod frame_id_tests {
        use super::*;

        #[test]
        fn test_name_and_index_constructors() {
            assert_eq!(FrameId::name("ifr"), FrameId::Name("ifr".to_string()));
            assert_eq!(FrameId::index(2), FrameId::Index(2));
        }

        #[test]
        fn test_display_forms() {
            assert_eq!(FrameId::name("ifr").to_string(), "ifr");
            assert_eq!(FrameId::index(0).to_string(), "#0");
        }
    }

    mod context_tests {
        use super::*;

        #[test]
        fn test_top_context_is_empty() {
            let ctx = FrameContext::top();
            assert!(ctx.is_top());
            assert_eq!(ctx.depth(), 0);
            assert!(ctx.frames().is_empty());
        }

        #[test]
        fn test_with_frame_extends_depth() {
            let ctx = FrameContext::top()
                .with_frame(FrameId::name("ifr"))
                .with_frame(FrameId::name("ifr"));
            assert_eq!(ctx.depth(), 2);
            assert!(!ctx.is_top());
        }

        #[test]
        fn test_frames_preserve_order() {
            let ctx = FrameContext::top()
                .with_frame(FrameId::name("outer"))
                .with_frame(FrameId::index(0));
            assert_eq!(
                ctx.frames(),
                &[FrameId::name("outer"), FrameId::index(0)]
            );
        }

        #[test]
        fn test_from_single_frame() {
            let ctx = FrameContext::from(FrameId::name("ifr"));
            assert_eq!(ctx.depth(), 1);
        }

        #[test]
        fn test_collects_from_frame_ids() {
            let ctx: FrameContext = vec![FrameId::name("outer"), FrameId::index(1)]
                .into_iter()
                .collect();
            assert_eq!(ctx.depth(), 2);
            assert_eq!(ctx.frames(), &[FrameId::name("outer"), FrameId::index(1)]);
        }

        #[test]
        fn test_display_chain() {
            let ctx = FrameContext::top()
                .with_frame(FrameId::name("ifr"))
                .with_frame(FrameId::index(1));
            assert_eq!(ctx.to_string(), "top > ifr > #1");
            assert_eq!(FrameContext::top().to_string(), "top");
        }
    }
}
