// src/animation/shape_state.rs
//
// Per-shape scale progression: idle until started, then a fixed-step
// climb (or descent) to the next whole-cycle boundary.

/// Outcome of one `ShapeState::update` step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateResult {
    /// Not animating; nothing moved.
    Idle,
    /// Mid-cycle; the scale moved by one step.
    Running,
    /// The cycle boundary was reached; carries the committed checkpoint.
    CycleComplete(f32),
}

#[derive(Debug, Clone)]
pub struct ShapeState {
    scale: f32,
    dir: f32,
    prev_scale: f32,
    scale_gap: f32,
}

impl ShapeState {
    pub fn new(scale_gap: f32) -> Self {
        Self {
            scale: 0.0,
            dir: 0.0,
            prev_scale: 0.0,
            scale_gap,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0.0
    }

    pub fn update(&mut self) -> UpdateResult {
        if self.dir == 0.0 {
            return UpdateResult::Idle;
        }
        self.scale += self.scale_gap * self.dir;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            // Snap to the exact boundary and freeze until the next start
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            return UpdateResult::CycleComplete(self.prev_scale);
        }
        UpdateResult::Running
    }

    /// Begins a new cycle if idle, returning whether it started. The
    /// direction alternates with the rest position: +1 from 0, -1 from 1.
    pub fn start(&mut self) -> bool {
        if self.dir != 0.0 {
            return false;
        }
        self.dir = 1.0 - 2.0 * self.prev_scale;
        true
    }

    #[cfg(test)]
    pub(crate) fn dir(&self) -> f32 {
        self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE_GAP: f32 = 0.02 / 6.0;

    fn run_to_completion(state: &mut ShapeState) -> (f32, usize) {
        let mut steps = 0;
        loop {
            steps += 1;
            assert!(steps < 10_000, "cycle never completed");
            match state.update() {
                UpdateResult::CycleComplete(checkpoint) => return (checkpoint, steps),
                UpdateResult::Running => {}
                UpdateResult::Idle => panic!("state went idle mid-cycle"),
            }
        }
    }

    #[test]
    fn test_update_is_noop_while_idle() {
        let mut state = ShapeState::new(SCALE_GAP);
        assert_eq!(state.update(), UpdateResult::Idle);
        assert_eq!(state.scale(), 0.0);
    }

    #[test]
    fn test_start_from_rest_goes_forward() {
        let mut state = ShapeState::new(SCALE_GAP);
        assert!(state.start());
        assert_eq!(state.dir(), 1.0);

        // A second start while animating is refused
        assert!(!state.start());
    }

    #[test]
    fn test_cycle_snaps_to_exact_boundary() {
        let mut state = ShapeState::new(SCALE_GAP);
        assert!(state.start());

        let mut prev = 0.0;
        let mut completions = 0;
        for _ in 0..10_000 {
            match state.update() {
                UpdateResult::Running => {
                    assert!(state.scale() > prev, "scale did not increase");
                    prev = state.scale();
                }
                UpdateResult::CycleComplete(checkpoint) => {
                    completions += 1;
                    assert_eq!(checkpoint, 1.0);
                    assert_eq!(state.scale(), 1.0);
                    break;
                }
                UpdateResult::Idle => panic!("state went idle mid-cycle"),
            }
        }
        assert_eq!(completions, 1);
        assert!(state.is_idle());
    }

    #[test]
    fn test_direction_alternates_every_cycle() {
        let mut state = ShapeState::new(SCALE_GAP);

        assert!(state.start());
        assert_eq!(state.dir(), 1.0);
        let (checkpoint, _) = run_to_completion(&mut state);
        assert_eq!(checkpoint, 1.0);

        // From rest position 1 the next pass runs backwards
        assert!(state.start());
        assert_eq!(state.dir(), -1.0);
        let (checkpoint, _) = run_to_completion(&mut state);
        assert_eq!(checkpoint, 0.0);

        assert!(state.start());
        assert_eq!(state.dir(), 1.0);
    }
}
