//! Transform model for the viewer.
//! Owns scale, rotation and translation of the displayed image and the
//! projection used to render it.

pub const DEFAULT_MIN_SCALE: f64 = 0.5;
pub const DEFAULT_MAX_SCALE: f64 = 4.0;

/// Scale limits. Always `0 < min <= 1 <= max`, so clamping never panics
/// and the identity scale stays reachable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    min: f64,
    max: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE,
        }
    }
}

impl ScaleBounds {
    /// Non-finite or non-positive limits fall back to the defaults and
    /// swapped limits are reordered.
    pub fn new(min: f64, max: f64) -> Self {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        let mut min = if usable(min) { min } else { DEFAULT_MIN_SCALE };
        let mut max = if usable(max) { max } else { DEFAULT_MAX_SCALE };
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self {
            min: min.min(1.0),
            max: max.max(1.0),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn clamp(&self, proposed: f64) -> f64 {
        proposed.clamp(self.min, self.max)
    }
}

/// Framing the user chose for the current image. Not persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    scale: f64,
    /// Always one of 0, 90, 180, 270.
    rotation_deg: u16,
    translate_x: f64,
    translate_y: f64,
    bounds: ScaleBounds,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new(ScaleBounds::default())
    }
}

impl TransformState {
    pub fn new(bounds: ScaleBounds) -> Self {
        Self {
            scale: bounds.clamp(1.0),
            rotation_deg: 0,
            translate_x: 0.0,
            translate_y: 0.0,
            bounds,
        }
    }

    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn rotation_deg(&self) -> u16 {
        self.rotation_deg
    }

    /// Clamps `proposed` into the scale bounds and stores it. Non-finite
    /// proposals are dropped and the last valid scale is kept.
    pub fn set_scale(&mut self, proposed: f64) -> f64 {
        if proposed.is_finite() {
            self.scale = self.bounds.clamp(proposed);
        }
        self.scale
    }

    pub fn rotate_step(&mut self) {
        self.rotation_deg = (self.rotation_deg + 90) % 360;
    }

    /// Free-form pan; the image may leave the view entirely.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx;
        self.translate_y += dy;
    }

    pub fn translate(&self) -> (f64, f64) {
        (self.translate_x, self.translate_y)
    }

    pub fn set_translate(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.translate_x = x;
            self.translate_y = y;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.bounds);
    }

    pub fn project(&self) -> RenderTransform {
        RenderTransform {
            translate_x: self.translate_x,
            translate_y: self.translate_y,
            scale: self.scale,
            rotation_deg: self.rotation_deg,
        }
    }
}

/// Composed transform handed to the renderer: translate, then scale, then
/// rotate. Translation is in unscaled screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotation_deg: u16,
}

impl RenderTransform {
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.translate_x, self.translate_y, self.scale, self.rotation_deg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_stays_within_bounds() {
        let mut t = TransformState::default();
        for proposed in [0.0, -3.0, 0.49, 0.5, 1.7, 4.0, 4.01, 1e9, f64::NAN, f64::INFINITY] {
            let applied = t.set_scale(proposed);
            assert!((0.5..=4.0).contains(&applied), "{proposed} -> {applied}");
            assert_eq!(applied, t.scale());
        }
    }

    #[test]
    fn nan_scale_keeps_last_valid_value() {
        let mut t = TransformState::default();
        t.set_scale(2.5);
        assert_eq!(t.set_scale(f64::NAN), 2.5);
    }

    #[test]
    fn custom_upper_bound_clamps() {
        let mut t = TransformState::new(ScaleBounds::new(0.5, 3.0));
        assert_eq!(t.set_scale(3.5), 3.0);
    }

    #[test]
    fn four_rotations_wrap_to_start() {
        let mut t = TransformState::default();
        t.rotate_step();
        assert_eq!(t.rotation_deg(), 90);
        t.rotate_step();
        t.rotate_step();
        assert_eq!(t.rotation_deg(), 270);
        t.rotate_step();
        assert_eq!(t.rotation_deg(), 0);
    }

    #[test]
    fn pan_is_unbounded() {
        let mut t = TransformState::default();
        t.pan(-5000.0, 12000.0);
        t.pan(1.0, -2.0);
        assert_eq!(t.translate(), (-4999.0, 11998.0));
    }

    #[test]
    fn reset_restores_identity_and_keeps_bounds() {
        let bounds = ScaleBounds::new(0.25, 3.0);
        let mut t = TransformState::new(bounds);
        t.set_scale(2.0);
        t.rotate_step();
        t.pan(10.0, 20.0);
        t.reset();
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.rotation_deg(), 0);
        assert_eq!(t.translate(), (0.0, 0.0));
        assert_eq!(t.bounds(), bounds);
    }

    #[test]
    fn inverted_or_invalid_bounds_are_normalized() {
        let swapped = ScaleBounds::new(2.0, 0.75);
        assert_eq!((swapped.min(), swapped.max()), (0.75, 2.0));
        let high = ScaleBounds::new(2.0, 3.0);
        assert_eq!((high.min(), high.max()), (1.0, 3.0));
        let broken = ScaleBounds::new(f64::NAN, -1.0);
        assert_eq!(broken, ScaleBounds::default());

        let mut t = TransformState::new(ScaleBounds::new(4.0, 0.5));
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.set_scale(9.0), 4.0);
    }

    #[test]
    fn projection_orders_translate_scale_rotate() {
        let mut t = TransformState::default();
        t.pan(30.0, -15.5);
        t.set_scale(1.5);
        t.rotate_step();
        assert_eq!(
            t.project().to_css(),
            "translate(30px, -15.5px) scale(1.5) rotate(90deg)"
        );
    }
}
