//! Flame flicker curve
//!
//! Everything here is a pure function of elapsed time, so a frame can be
//! recomputed from scratch instead of nudging the previous one.

/// `(angular frequency, amplitude)` of the summed sine terms
const FLICKER_TERMS: [(f32, f32); 3] = [(8.0, 0.03), (12.5, 0.02), (20.0, 0.015)];

const OUTER_SWAY_FREQUENCY: f32 = 5.0;
const OUTER_SWAY_AMPLITUDE: f32 = 0.02;
const INNER_SWAY_FREQUENCY: f32 = 6.0;
const INNER_SWAY_AMPLITUDE: f32 = 0.015;
const INNER_SCALE_GAIN: f32 = 1.2;
const INTENSITY_GAIN: f32 = 2.0;
const LIGHT_LIFT_GAIN: f32 = 0.1;

/// Sum of the flicker sine terms at `elapsed_time` seconds
pub fn flicker(elapsed_time: f32) -> f32 {
    FLICKER_TERMS
        .iter()
        .map(|&(frequency, amplitude)| (elapsed_time * frequency).sin() * amplitude)
        .sum()
}

/// Visual parameters of the flame for one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlickerFrame {
    /// Raw flicker value
    pub flicker: f32,
    /// Uniform scale of the outer cone
    pub outer_scale: f32,
    /// X offset of the outer cone inside the flame group
    pub outer_offset_x: f32,
    /// Uniform scale of the inner cone
    pub inner_scale: f32,
    /// X offset of the inner cone inside the flame group
    pub inner_offset_x: f32,
    /// Light intensity
    pub light_intensity: f32,
    /// Light height above its resting position
    pub light_lift: f32,
}

impl FlickerFrame {
    /// Compute the frame for `elapsed_time` given the light's resting intensity
    pub fn at(elapsed_time: f32, base_intensity: f32) -> Self {
        let flicker = flicker(elapsed_time);
        Self {
            flicker,
            outer_scale: 1.0 + flicker,
            outer_offset_x: (elapsed_time * OUTER_SWAY_FREQUENCY).sin() * OUTER_SWAY_AMPLITUDE,
            inner_scale: 1.0 + flicker * INNER_SCALE_GAIN,
            inner_offset_x: (elapsed_time * INNER_SWAY_FREQUENCY).sin() * INNER_SWAY_AMPLITUDE,
            light_intensity: base_intensity + flicker * INTENSITY_GAIN,
            light_lift: flicker * LIGHT_LIFT_GAIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rest_frame_at_time_zero() {
        let frame = FlickerFrame::at(0.0, 1.5);
        assert_eq!(frame.flicker, 0.0);
        assert_eq!(frame.outer_scale, 1.0);
        assert_eq!(frame.inner_scale, 1.0);
        assert_eq!(frame.outer_offset_x, 0.0);
        assert_eq!(frame.inner_offset_x, 0.0);
        assert_eq!(frame.light_intensity, 1.5);
        assert_eq!(frame.light_lift, 0.0);
    }

    #[test]
    fn test_known_value() {
        // At t = pi/2 the 8 and 20 rad/s terms vanish; 12.5 rad/s lands on pi/4
        let expected = 0.02 * std::f32::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(flicker(FRAC_PI_2), expected, epsilon = 1e-4);
    }

    #[test]
    fn test_flicker_is_bounded() {
        let bound = 0.03 + 0.02 + 0.015;
        for step in 0..2000 {
            let t = step as f32 * 0.0037;
            assert!(
                flicker(t).abs() <= bound + 1e-6,
                "flicker out of range at t={t}"
            );
        }
    }

    #[test]
    fn test_derived_parameters() {
        let t = 0.731;
        let frame = FlickerFrame::at(t, 1.5);
        let f = flicker(t);
        assert_relative_eq!(frame.outer_scale, 1.0 + f);
        assert_relative_eq!(frame.inner_scale, 1.0 + f * 1.2);
        assert_relative_eq!(frame.outer_offset_x, (t * 5.0).sin() * 0.02);
        assert_relative_eq!(frame.inner_offset_x, (t * 6.0).sin() * 0.015);
        assert_relative_eq!(frame.light_intensity, 1.5 + f * 2.0);
        assert_relative_eq!(frame.light_lift, f * 0.1);
    }
}
