// src/animation/frame_animator.rs
//
// Gates the animation loop at a fixed frame interval and owns the
// redraw-request seam. Start/stop are idempotent; no frame fires while
// stopped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("redraw request failed: {reason}")]
    RequestFailed { reason: String },
}

/// The redraw-request side of the frame loop. A failed request skips one
/// frame's repaint; it never stops the animator.
pub trait RedrawScheduler {
    fn request_redraw(&mut self) -> Result<(), ScheduleError>;
}

/// Scheduler for loop modes that already repaint every frame, where a
/// redraw request is trivially satisfied. nannou's default refresh-sync
/// loop is one of these.
#[derive(Debug, Default)]
pub struct ContinuousRedraw;

impl RedrawScheduler for ContinuousRedraw {
    fn request_redraw(&mut self) -> Result<(), ScheduleError> {
        Ok(())
    }
}

pub struct FrameAnimator {
    running: bool,
    frame_timer: f32,
    frame_duration: f32,
    scheduler: Box<dyn RedrawScheduler>,
}

impl FrameAnimator {
    pub fn new(frame_duration: f32, scheduler: Box<dyn RedrawScheduler>) -> Self {
        Self {
            running: false,
            frame_timer: 0.0,
            frame_duration,
            scheduler,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Accumulates `dt` and fires once per elapsed frame interval while
    /// running. Never fires while stopped.
    pub fn frame_due(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.frame_timer += dt;
        if self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            true
        } else {
            false
        }
    }

    pub fn request_redraw(&mut self) -> Result<(), ScheduleError> {
        self.scheduler.request_redraw()
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            // Pre-load the timer so the first frame fires on the next
            // update, matching an immediate initial redraw
            self.frame_timer = self.frame_duration;
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingScheduler;

    impl RedrawScheduler for FailingScheduler {
        fn request_redraw(&mut self) -> Result<(), ScheduleError> {
            Err(ScheduleError::RequestFailed {
                reason: "surface lost".into(),
            })
        }
    }

    fn animator() -> FrameAnimator {
        FrameAnimator::new(0.02, Box::new(ContinuousRedraw))
    }

    #[test]
    fn test_no_frames_while_stopped() {
        let mut anim = animator();
        assert!(!anim.frame_due(1.0));
        assert!(!anim.is_running());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut anim = animator();
        anim.start();
        assert!(anim.is_running());
        // First frame fires immediately after start
        assert!(anim.frame_due(0.0));

        // A second start must not re-arm the immediate frame
        anim.start();
        assert!(anim.is_running());
        assert!(!anim.frame_due(0.0));
    }

    #[test]
    fn test_stop_is_idempotent_and_gates_frames() {
        let mut anim = animator();
        anim.start();
        anim.stop();
        anim.stop();
        assert!(!anim.is_running());
        assert!(!anim.frame_due(1.0));
    }

    #[test]
    fn test_frame_pacing() {
        let mut anim = animator();
        anim.start();
        assert!(anim.frame_due(0.0)); // initial frame

        // Half an interval: not due yet
        assert!(!anim.frame_due(0.01));
        // Second half: due exactly once
        assert!(anim.frame_due(0.01));
        assert!(!anim.frame_due(0.0));
    }

    #[test]
    fn test_scheduler_failure_surfaces_without_stopping() {
        let mut anim = FrameAnimator::new(0.02, Box::new(FailingScheduler));
        anim.start();
        assert!(anim.request_redraw().is_err());
        assert!(anim.is_running());
    }
}
