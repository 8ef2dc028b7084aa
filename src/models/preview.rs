//! Image preview and body scroll-lock state.

/// Image shown in the preview overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewTarget {
    pub src: String,
    /// Alt text, also rendered as the caption. May be empty.
    pub caption: String,
}

/// Page-wide preview state: nothing, or exactly one image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    current: Option<PreviewTarget>,
}

impl PreviewState {
    /// Show an image, replacing whatever is currently previewed.
    pub fn open(&mut self, src: impl Into<String>, caption: impl Into<String>) {
        self.current = Some(PreviewTarget {
            src: src.into(),
            caption: caption.into(),
        });
    }

    /// Dismiss the preview. Returns `false` if nothing was open.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn current(&self) -> Option<&PreviewTarget> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

/// Remembers the document's `overflow` value while scrolling is locked.
///
/// Engaging twice keeps the value captured by the first call, so a single
/// release always restores the pre-lock style no matter how many previews
/// were opened in between.
#[derive(Debug, Default)]
pub struct ScrollLock {
    saved: Option<String>,
}

impl ScrollLock {
    /// Lock scrolling, capturing `current_overflow` if not already locked.
    ///
    /// Returns `true` when the lock was newly engaged.
    pub fn engage(&mut self, current_overflow: &str) -> bool {
        if self.saved.is_some() {
            return false;
        }
        self.saved = Some(current_overflow.to_string());
        true
    }

    /// Unlock scrolling, yielding the value to restore (if locked).
    pub fn release(&mut self) -> Option<String> {
        self.saved.take()
    }

    pub fn is_engaged(&self) -> bool {
        self.saved.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_previous_target() {
        let mut state = PreviewState::default();
        state.open("/screenshots/chat-view.png", "Chat view");
        state.open("/screenshots/vertical-mode.png", "Vertical tab layout");

        let current = state.current().expect("preview should be open");
        assert_eq!(current.src, "/screenshots/vertical-mode.png");
        assert_eq!(current.caption, "Vertical tab layout");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = PreviewState::default();
        assert!(!state.close());

        state.open("/demo.gif", "");
        assert!(state.is_open());
        assert!(state.close());
        assert!(!state.close());
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_scroll_lock_restores_original_after_repeated_engage() {
        for opens in 1..5 {
            let mut lock = ScrollLock::default();
            let mut body_overflow = String::from("auto");

            for _ in 0..opens {
                if lock.engage(&body_overflow) {
                    body_overflow = "hidden".to_string();
                }
            }
            assert!(lock.is_engaged());
            assert_eq!(body_overflow, "hidden");

            if let Some(previous) = lock.release() {
                body_overflow = previous;
            }
            assert_eq!(body_overflow, "auto");
            assert!(!lock.is_engaged());
        }
    }

    #[test]
    fn test_scroll_lock_release_without_engage() {
        let mut lock = ScrollLock::default();
        assert_eq!(lock.release(), None);
        assert!(lock.engage(""));
        assert_eq!(lock.release(), Some(String::new()));
        assert_eq!(lock.release(), None);
    }
}
