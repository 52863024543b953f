//! Rainbow color mapping for scalar samples.
//!
//! Maps a normalized scalar ratio onto a heat-map palette that sweeps the
//! full hue circle: blue at ratio 0, through cyan, green, yellow, red and
//! magenta, back to blue at ratio 1. Each channel samples one shared
//! piecewise intensity curve at its own phase-shifted hue, so the map is
//! total and periodic - any real input lands on a well-defined color.

/// Phase shift between the three channel hues.
const CHANNEL_PHASE: f32 = 1.0 / 3.0;

/// Hue below which intensity ramps up linearly from 0 to 255.
const RAMP_UP_END: f32 = 1.0 / 6.0;

/// Hue below which intensity holds at the saturated plateau.
const PLATEAU_END: f32 = 1.0 / 2.0;

/// Hue below which intensity ramps back down to 0.
const RAMP_DOWN_END: f32 = 2.0 / 3.0;

/// Maps a scalar ratio to an RGB color on the rainbow palette.
///
/// The ratio is nominally in `[0, 1]` but is never clamped: out-of-domain
/// values wrap around the hue circle, so `rainbow(r)` and `rainbow(r + 1.0)`
/// agree for any real `r`.
#[must_use]
pub fn rainbow(ratio: f32) -> [u8; 3] {
    // Invert so low samples land on the blue end and high samples sweep
    // toward red.
    let adjusted = 1.0 - ratio;
    [
        hue_intensity(adjusted),
        hue_intensity(adjusted - CHANNEL_PHASE),
        hue_intensity(adjusted + CHANNEL_PHASE),
    ]
}

/// Evaluates the shared channel intensity curve at a hue.
///
/// The hue is wrapped into `[0, 1)` first; the curve rises over the first
/// sixth, saturates through the middle, falls back to zero by two thirds,
/// and stays dark for the remainder.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // ramp values stay within [0, 255]
fn hue_intensity(hue: f32) -> u8 {
    let mut h = hue - hue.floor();
    if h < 0.0 {
        h += 1.0;
    }

    if h < RAMP_UP_END {
        (255.0 * h * 6.0).round() as u8
    } else if h < PLATEAU_END {
        0xFF
    } else if h < RAMP_DOWN_END {
        (255.0 * (RAMP_DOWN_END - h) * 6.0).round() as u8
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_palette_table() {
        // Regression anchor for the full hue sweep.
        assert_eq!(rainbow(0.0), [0, 0, 255]);
        assert_eq!(rainbow(1.0 / 6.0), [0, 255, 255]);
        assert_eq!(rainbow(1.0 / 3.0), [0, 255, 0]);
        assert_eq!(rainbow(1.0 / 2.0), [255, 255, 0]);
        assert_eq!(rainbow(2.0 / 3.0), [255, 0, 0]);
        assert_eq!(rainbow(5.0 / 6.0), [255, 0, 255]);
        // Periodic: ratio 1 wraps onto ratio 0.
        assert_eq!(rainbow(1.0), rainbow(0.0));
    }

    #[test]
    fn test_out_of_domain_ratios_wrap() {
        assert_eq!(rainbow(-5.5), rainbow(0.5));
        assert_eq!(rainbow(3.5), rainbow(0.5));
        assert_eq!(rainbow(-1.5), rainbow(0.5));
        // Far outside the domain the result is still a well-defined color.
        let _ = rainbow(1000.25);
        let _ = rainbow(-0.75);
    }

    #[test]
    fn test_periodicity_on_half_steps() {
        // Half steps keep every phase-shifted hue away from the curve's
        // half-intensity rounding boundaries, so the wrap identity holds
        // bit-for-bit.
        for i in -20i16..20 {
            let r = f32::from(i) / 2.0;
            assert_eq!(rainbow(r), rainbow(r + 1.0), "ratio {r}");
        }
    }

    #[test]
    fn test_falling_ramp_is_continuous() {
        // Just inside the falling band the intensity is still saturated and
        // decays toward zero at the band's end.
        assert_eq!(hue_intensity(0.5), 255);
        assert!(hue_intensity(0.6) > 0);
        assert_eq!(hue_intensity(2.0 / 3.0), 0);

        let mid = hue_intensity(7.0 / 12.0);
        assert!((120..=135).contains(&mid), "got {mid}");
    }

    #[test]
    fn test_non_finite_input_still_yields_a_color() {
        // Not part of the caller contract, but must not panic.
        let _ = rainbow(f32::NAN);
        let _ = rainbow(f32::INFINITY);
        let _ = rainbow(f32::NEG_INFINITY);
    }

    proptest! {
        #[test]
        fn prop_total_for_finite_ratios(ratio in -1.0e6_f32..1.0e6_f32) {
            // Output is a byte triple for every finite input; no panic, no
            // out-of-range channel by construction.
            let _ = rainbow(ratio);
        }

        #[test]
        fn prop_periodicity_within_rounding(ratio in -1.0e3_f32..1.0e3_f32) {
            // The +1 shift is not always exact in f32, so allow one
            // intensity step of slack per channel.
            let a = rainbow(ratio);
            let b = rainbow(ratio + 1.0);
            for c in 0..3 {
                let diff = i16::from(a[c]).abs_diff(i16::from(b[c]));
                prop_assert!(diff <= 1, "channel {c}: {} vs {}", a[c], b[c]);
            }
        }
    }
}
