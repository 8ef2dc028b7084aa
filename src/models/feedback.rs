//! "Copied!" feedback for clipboard buttons.

/// Feedback state of a single copy button.
///
/// Every successful copy bumps a generation counter; a scheduled reset only
/// applies if it carries the latest generation. Repeated clicks therefore
/// restart the feedback window instead of being cut short by an older timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    /// Enter the "copied" state. Returns the generation to hand to [`expire`].
    ///
    /// [`expire`]: CopyFeedback::expire
    pub fn mark_copied(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.generation
    }

    /// Leave the "copied" state if `generation` is still current.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.copied && generation == self.generation {
            self.copied = false;
            true
        } else {
            false
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW_MS: u64 = 2000;

    /// Replays copy clicks at the given times against a pending-reset queue.
    fn copied_at(clicks: &[u64], at: u64) -> bool {
        let mut feedback = CopyFeedback::default();
        let mut resets: Vec<(u64, u64)> = Vec::new();
        let mut events: Vec<u64> = clicks.to_vec();
        events.sort_unstable();

        for click in events {
            while let Some(pos) = resets.iter().position(|(due, _)| *due <= click) {
                let (_, generation) = resets.remove(pos);
                feedback.expire(generation);
            }
            let generation = feedback.mark_copied();
            resets.push((click + WINDOW_MS, generation));
        }
        for (due, generation) in resets {
            if due <= at {
                feedback.expire(generation);
            }
        }
        feedback.is_copied()
    }

    #[test]
    fn test_single_copy_window() {
        assert!(copied_at(&[0], 0));
        assert!(copied_at(&[0], 1999));
        assert!(!copied_at(&[0], 2000));
    }

    #[test]
    fn test_second_copy_restarts_window() {
        // Second click at 1500ms: feedback must survive the first timer at 2000ms.
        assert!(copied_at(&[0, 1500], 2000));
        assert!(copied_at(&[0, 1500], 3499));
        assert!(!copied_at(&[0, 1500], 3500));
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.mark_copied();
        let second = feedback.mark_copied();

        assert!(!feedback.expire(first));
        assert!(feedback.is_copied());
        assert!(feedback.expire(second));
        assert!(!feedback.is_copied());
        assert!(!feedback.expire(second));
    }
}
