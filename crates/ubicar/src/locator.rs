//! Element location strategies
//!
//! A [`Selector`] names an element the way the remote end understands:
//! each variant maps onto one W3C location strategy plus its expression.
//! Sessions take selectors by reference and translate them with
//! [`Selector::strategy`] / [`Selector::expression`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Element location strategy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector expression
    Css(String),
    /// `id` attribute value
    Id(String),
    /// XPath expression
    XPath(String),
    /// Exact anchor text
    LinkText(String),
}

impl Selector {
    /// Select by CSS expression
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Select by `id` attribute
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Select by XPath expression
    pub fn xpath(xpath: impl Into<String>) -> Self {
        Self::XPath(xpath.into())
    }

    /// Select an anchor by its exact text
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    /// The W3C location strategy this selector uses
    #[must_use]
    pub const fn strategy(&self) -> &'static str {
        match self {
            Self::Css(_) | Self::Id(_) => "css selector",
            Self::XPath(_) => "xpath",
            Self::LinkText(_) => "link text",
        }
    }

    /// The expression sent alongside [`Selector::strategy`].
    ///
    /// Id selection goes over the wire as an attribute-equality CSS
    /// expression, so ids containing CSS metacharacters need no escaping.
    #[must_use]
    pub fn expression(&self) -> String {
        match self {
            Self::Css(css) => css.clone(),
            Self::Id(id) => format!("[id={id:?}]"),
            Self::XPath(xpath) => xpath.clone(),
            Self::LinkText(text) => text.clone(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(css) => write!(f, "css={css}"),
            Self::Id(id) => write!(f, "id={id}"),
            Self::XPath(xpath) => write!(f, "xpath={xpath}"),
            Self::LinkText(text) => write!(f, "text={text}"),
        }
    }
}
