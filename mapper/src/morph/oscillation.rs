//! Periodic waveforms used to move between two morphospace states.

use std::f64::consts::TAU;

use wig_taxonomy::{MorphCoordinates, OscillationPattern};

/// Samples `pattern` at `total_steps` evenly spaced points covering `cycles`
/// full periods. Every value lies in `[0, 1]`; 0.0 is state A, 1.0 is state B.
#[must_use]
pub fn oscillate(pattern: OscillationPattern, total_steps: u32, cycles: u32) -> Vec<f64> {
    if total_steps == 0 {
        return Vec::new();
    }
    let steps = f64::from(total_steps);
    let cycles = f64::from(cycles);
    (0..total_steps)
        .map(|i| {
            let turns = cycles * f64::from(i) / steps;
            match pattern {
                OscillationPattern::Sinusoidal => 0.5 * (1.0 + (TAU * turns).sin()),
                OscillationPattern::Triangular => {
                    let position = turns.fract();
                    if position < 0.5 {
                        2.0 * position
                    } else {
                        2.0 * (1.0 - position)
                    }
                }
                OscillationPattern::Square => {
                    if turns.fract() < 0.5 {
                        0.0
                    } else {
                        1.0
                    }
                }
            }
        })
        .collect()
}

/// Interpolates from `a` to `b` at each alpha.
#[must_use]
pub fn trajectory(
    a: &MorphCoordinates,
    b: &MorphCoordinates,
    alphas: &[f64],
) -> Vec<MorphCoordinates> {
    alphas.iter().map(|&alpha| a.lerp(b, alpha)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinusoid_starts_midway_and_peaks_at_quarter() {
        let alphas = oscillate(OscillationPattern::Sinusoidal, 20, 1);
        assert_eq!(alphas.len(), 20);
        assert!((alphas[0] - 0.5).abs() < 1e-12);
        assert!((alphas[5] - 1.0).abs() < 1e-12);
        assert!(alphas[15].abs() < 1e-12);
    }

    #[test]
    fn triangle_ramps_linearly() {
        let alphas = oscillate(OscillationPattern::Triangular, 8, 2);
        assert_eq!(alphas, vec![0.0, 0.5, 1.0, 0.5, 0.0, 0.5, 1.0, 0.5]);
    }

    #[test]
    fn square_holds_each_half() {
        let alphas = oscillate(OscillationPattern::Square, 6, 1);
        assert_eq!(alphas, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn every_pattern_stays_in_unit_interval() {
        for pattern in OscillationPattern::ALL {
            for alpha in oscillate(*pattern, 60, 3) {
                assert!((0.0..=1.0).contains(&alpha), "{pattern}: {alpha}");
            }
        }
    }

    #[test]
    fn zero_steps_is_empty() {
        assert!(oscillate(OscillationPattern::Square, 0, 3).is_empty());
    }

    #[test]
    fn trajectory_hits_endpoints() {
        let a = MorphCoordinates([0.0; 5]);
        let b = MorphCoordinates([1.0; 5]);
        let path = trajectory(&a, &b, &[0.0, 1.0]);
        assert_eq!(path, vec![a, b]);
    }
}
