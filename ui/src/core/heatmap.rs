//! Color scale for the correlation heatmap.
//!
//! A two-sided diverging scale: both halves interpolate away from one
//! neutral slate base, toward emerald for positive coefficients and red for
//! negative ones. Opacity tracks magnitude, so weak correlations fade into
//! the card background and strong ones read at a glance.

/// Neutral base both halves of the scale start from.
const NEUTRAL: (u8, u8, u8) = (30, 41, 59);
/// Saturated endpoint for +1.
const POSITIVE: (u8, u8, u8) = (16, 185, 129);
/// Saturated endpoint for -1.
const NEGATIVE: (u8, u8, u8) = (239, 68, 68);

/// Alpha at zero magnitude and the gain applied per unit of magnitude,
/// giving 0.15 at a coefficient of 0 and 0.65 at ±1.
const ALPHA_FLOOR: f32 = 0.15;
const ALPHA_GAIN: f32 = 0.5;

/// Self-correlation cells are 1 by definition; they get a fixed highlight
/// instead of the computed scale so they read as structure, not signal.
pub const DIAGONAL_HIGHLIGHT: Rgba = Rgba {
    r: 59,
    g: 130,
    b: 246,
    a: 0.2,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// CSS `rgba(...)` string for inline styles.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Map a correlation coefficient to a cell background. The input is clamped
/// to [-1, 1]; magnitude drives both channel interpolation and alpha.
pub fn correlation_color(value: f64) -> Rgba {
    let clamped = value.clamp(-1.0, 1.0);
    let intensity = clamped.abs();
    let target = if clamped >= 0.0 { POSITIVE } else { NEGATIVE };

    Rgba {
        r: lerp_channel(NEUTRAL.0, target.0, intensity),
        g: lerp_channel(NEUTRAL.1, target.1, intensity),
        b: lerp_channel(NEUTRAL.2, target.2, intensity),
        a: ALPHA_FLOOR + intensity as f32 * ALPHA_GAIN,
    }
}

/// Cell labels switch to a bright foreground on strongly saturated
/// backgrounds; below the threshold a muted foreground keeps the grid calm.
pub fn needs_high_contrast_label(value: f64) -> bool {
    value.abs() > 0.5
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_reach_the_saturated_endpoints() {
        let positive = correlation_color(1.0);
        assert_eq!((positive.r, positive.g, positive.b), POSITIVE);
        assert!((positive.a - 0.65).abs() < 1e-6);

        let negative = correlation_color(-1.0);
        assert_eq!((negative.r, negative.g, negative.b), NEGATIVE);
        assert!((negative.a - 0.65).abs() < 1e-6);
    }

    #[test]
    fn zero_is_the_neutral_base_at_minimum_alpha() {
        let neutral = correlation_color(0.0);
        assert_eq!((neutral.r, neutral.g, neutral.b), NEUTRAL);
        assert!((neutral.a - ALPHA_FLOOR).abs() < 1e-6);
    }

    #[test]
    fn opposite_signs_never_collide() {
        for v in [0.1, 0.25, 0.5, 0.77, 1.0] {
            assert_ne!(correlation_color(v), correlation_color(-v));
        }
    }

    #[test]
    fn alpha_grows_with_magnitude() {
        let mut last = correlation_color(0.0).a;
        for v in [0.2, 0.4, 0.6, 0.8, 1.0] {
            let alpha = correlation_color(v).a;
            assert!(alpha > last, "alpha must increase with |v|");
            assert_eq!(alpha, correlation_color(-v).a, "alpha depends on |v| only");
            last = alpha;
        }
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        assert_eq!(correlation_color(3.2), correlation_color(1.0));
        assert_eq!(correlation_color(-7.0), correlation_color(-1.0));
    }

    #[test]
    fn diagonal_highlight_is_not_on_the_scale() {
        assert_ne!(DIAGONAL_HIGHLIGHT, correlation_color(1.0));
    }

    #[test]
    fn label_contrast_switches_past_half_magnitude() {
        assert!(!needs_high_contrast_label(0.5));
        assert!(needs_high_contrast_label(0.51));
        assert!(needs_high_contrast_label(-0.9));
        assert!(!needs_high_contrast_label(0.0));
    }

    #[test]
    fn css_renders_all_four_channels() {
        assert_eq!(DIAGONAL_HIGHLIGHT.css(), "rgba(59, 130, 246, 0.2)");
    }
}
