//! Pointer parallax for the starfield background.

/// Pixels of offset per pixel of pointer displacement from the viewport center
pub const PARALLAX_SCALE: f64 = 0.01;

/// Relative speed of each background layer, nearest last
pub const LAYER_FACTORS: [f64; 3] = [1.0, 1.5, 2.0];

/// Classes of the three background layers
pub const LAYER_CLASSES: [&str; 3] = ["stars", "stars2", "stars3"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxOffset {
    pub x: f64,
    pub y: f64,
}

impl ParallaxOffset {
    pub fn from_pointer(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            x: (client_x - viewport_w / 2.0) * PARALLAX_SCALE,
            y: (client_y - viewport_h / 2.0) * PARALLAX_SCALE,
        }
    }

    /// CSS transforms for the three layers, in [`LAYER_CLASSES`] order
    pub fn layer_transforms(&self) -> [String; 3] {
        LAYER_FACTORS.map(|factor| {
            format!(
                "translate({}px, {}px)",
                css_number(self.x * factor),
                css_number(self.y * factor)
            )
        })
    }
}

// Browsers print -0 as "0"
fn css_number(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_zero() {
        let offset = ParallaxOffset::from_pointer(500.0, 400.0, 1000.0, 800.0);
        assert_eq!(offset, ParallaxOffset { x: 0.0, y: 0.0 });
        assert_eq!(
            offset.layer_transforms(),
            [
                "translate(0px, 0px)".to_string(),
                "translate(0px, 0px)".to_string(),
                "translate(0px, 0px)".to_string(),
            ]
        );
    }

    #[test]
    fn test_layers_move_at_increasing_rates() {
        let offset = ParallaxOffset::from_pointer(700.0, 200.0, 1000.0, 800.0);
        assert_eq!(offset.x, 2.0);
        assert_eq!(offset.y, -2.0);

        let [near, mid, far] = offset.layer_transforms();
        assert_eq!(near, "translate(2px, -2px)");
        assert_eq!(mid, "translate(3px, -3px)");
        assert_eq!(far, "translate(4px, -4px)");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        let offset = ParallaxOffset { x: -0.0, y: 1.0 };
        assert_eq!(offset.layer_transforms()[0], "translate(0px, 1px)");
    }
}
