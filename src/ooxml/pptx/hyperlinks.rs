//! Click actions for shapes.
//!
//! A shape can either jump to another slide of the same presentation or open
//! an external URL. DrawingML stores both as a single `<a:hlinkClick>` on the
//! shape, so a shape carries at most one action.

use super::writer::SlideRef;

/// Action performed when a shape is clicked during a slide show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Jump to another slide of the presentation
    Slide(SlideRef),
    /// Open an external URL
    Hyperlink {
        /// Address to open
        url: String,
    },
}

impl ClickAction {
    /// Create an external URL action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use museo_danzas::ooxml::pptx::ClickAction;
    ///
    /// let link = ClickAction::url("https://example.com");
    /// assert!(link.is_external());
    /// ```
    pub fn url(url: impl Into<String>) -> Self {
        ClickAction::Hyperlink { url: url.into() }
    }

    /// Create a jump to `slide`.
    pub fn slide(slide: SlideRef) -> Self {
        ClickAction::Slide(slide)
    }

    /// The `action` attribute of `<a:hlinkClick>`, if any.
    pub(crate) fn ppaction(&self) -> Option<&'static str> {
        match self {
            ClickAction::Slide(_) => Some("ppaction://hlinksldjump"),
            ClickAction::Hyperlink { .. } => None,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, ClickAction::Hyperlink { .. })
    }

    /// Target slide of a jump action.
    pub fn target_slide(&self) -> Option<SlideRef> {
        match self {
            ClickAction::Slide(slide) => Some(*slide),
            ClickAction::Hyperlink { .. } => None,
        }
    }

    /// Address of an external action.
    pub fn address(&self) -> Option<&str> {
        match self {
            ClickAction::Slide(_) => None,
            ClickAction::Hyperlink { url } => Some(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_action() {
        let link = ClickAction::url("https://example.com");
        assert!(link.is_external());
        assert_eq!(link.address(), Some("https://example.com"));
        assert_eq!(link.target_slide(), None);
        assert_eq!(link.ppaction(), None);
    }

    #[test]
    fn test_slide_action() {
        let jump = ClickAction::slide(SlideRef::new(1));
        assert!(!jump.is_external());
        assert_eq!(jump.target_slide(), Some(SlideRef::new(1)));
        assert_eq!(jump.ppaction(), Some("ppaction://hlinksldjump"));
    }
}
