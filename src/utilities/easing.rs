//src/utilities/easing.rs

// progress math for the box filler animation

use std::f32::consts::PI;

pub fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

/// Clamps a global progress value in [0,1] into the `i`-th of `n` equal
/// windows: 0 before the window opens, a linear 0..1 ramp while it is
/// active, 1 after it closes.
pub fn divide_scale(total: f32, i: usize, n: usize) -> f32 {
    let past_start = (total - i as f32 * inverse(n)).max(0.0);
    past_start.min(inverse(n)) * n as f32
}

/// Maps linear progress in [0,1] to a symmetric rise-then-fall curve,
/// peaking at 0.5.
pub fn sinify(t: f32) -> f32 {
    (t * PI).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_inverse() {
        assert_eq!(inverse(1), 1.0);
        assert_eq!(inverse(4), 0.25);
    }

    #[test]
    fn test_divide_scale_window_boundaries() {
        // Zero until the window opens
        assert_eq!(divide_scale(0.0, 1, 4), 0.0);
        assert_eq!(divide_scale(0.25, 1, 4), 0.0);

        // Linear ramp inside the window
        assert!((divide_scale(0.375, 1, 4) - 0.5).abs() < EPS);

        // Holds at 1 after the window closes
        assert!((divide_scale(0.5, 1, 4) - 1.0).abs() < EPS);
        assert!((divide_scale(0.9, 1, 4) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_divide_scale_monotonic_and_bounded() {
        for i in 0..4 {
            let mut prev = 0.0;
            for step in 0..=100 {
                let total = step as f32 / 100.0;
                let v = divide_scale(total, i, 4);
                assert!((0.0..=1.0 + EPS).contains(&v));
                assert!(v + EPS >= prev, "not monotonic at total={}", total);
                prev = v;
            }
        }
    }

    #[test]
    fn test_sinify_endpoints_and_peak() {
        assert!(sinify(0.0).abs() < EPS);
        assert!(sinify(1.0).abs() < 1e-5);
        assert!((sinify(0.5) - 1.0).abs() < EPS);
    }
}
