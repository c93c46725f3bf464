use crate::core::constants::{
    ALLOWED_CENTER_MAX, ALLOWED_CENTER_MIN, INITIAL_CENTER, INITIAL_SCALE, MAX_ZOOM_LEVEL,
    MIN_ZOOM_LEVEL, SCALE_STEP,
};
use crate::core::data::complex::Complex;
use crate::core::data::pixel_size::PixelSize;

/// Parameters of one issued request, ready for
/// [`RenderController::request`](crate::controllers::interactive::RenderController::request).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewRequest {
    pub sequence_id: u64,
    pub center: Complex,
    pub pixel_size: PixelSize,
    pub scale: f64,
    pub zoom_level: f64,
    pub downscale_only: bool,
}

/// Position and depth of the view, plus the id of the newest request.
///
/// Only frames carrying the newest id are accepted, so anything still in
/// flight for an older view is dropped on arrival.
#[derive(Debug, Clone)]
pub struct ViewState {
    pixel_size: PixelSize,
    center: Complex,
    scale: f64,
    zoom_level: f64,
    sequence_id: u64,
    cursor_dependent_zoom: bool,
}

impl ViewState {
    #[must_use]
    pub fn new(pixel_size: PixelSize) -> Self {
        Self {
            pixel_size,
            center: INITIAL_CENTER,
            scale: INITIAL_SCALE,
            zoom_level: MIN_ZOOM_LEVEL,
            sequence_id: 0,
            cursor_dependent_zoom: true,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    #[must_use]
    pub fn pixel_size(&self) -> PixelSize {
        self.pixel_size
    }

    #[must_use]
    pub fn sequence_id(&self) -> u64 {
        self.sequence_id
    }

    pub fn set_pixel_size(&mut self, pixel_size: PixelSize) {
        self.pixel_size = pixel_size;
    }

    pub fn set_cursor_dependent_zoom(&mut self, enabled: bool) {
        self.cursor_dependent_zoom = enabled;
    }

    /// Jumps to `center` at `scale` plane units per pixel, deriving the zoom
    /// level from the scale. Center and depth are clamped to their allowed
    /// ranges.
    pub fn look_at(&mut self, center: Complex, scale: f64) {
        let zoom_level = MIN_ZOOM_LEVEL + (INITIAL_SCALE / scale).log2();
        let zoom_level = if zoom_level.is_nan() {
            MIN_ZOOM_LEVEL
        } else {
            zoom_level.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL)
        };

        self.center = center.clamp(ALLOWED_CENTER_MIN, ALLOWED_CENTER_MAX);
        self.scale = INITIAL_SCALE * SCALE_STEP.powf(zoom_level - MIN_ZOOM_LEVEL);
        self.zoom_level = zoom_level;
    }

    /// Drags the image by a pixel offset. The center moves the opposite way
    /// and stays inside the allowed region.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let moved = self.center - Complex::new(dx, dy) * self.scale;
        self.center = moved.clamp(ALLOWED_CENTER_MIN, ALLOWED_CENTER_MAX);
    }

    /// Zooms in by `steps` levels (negative zooms out), each level halving the
    /// scale. With cursor dependent zoom on, the plane point under `cursor`
    /// stays put; otherwise the view zooms about its center.
    ///
    /// Returns whether the view changed.
    pub fn zoom(&mut self, cursor: Option<(f64, f64)>, steps: f64) -> bool {
        let zoom_level = (self.zoom_level + steps).clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL);
        let delta = zoom_level - self.zoom_level;

        if delta == 0.0 {
            return false;
        }

        let factor = SCALE_STEP.powf(delta);

        if let (Some((x, y)), true) = (cursor, self.cursor_dependent_zoom) {
            let half_width = self.pixel_size.width() as f64 / 2.0;
            let half_height = self.pixel_size.height() as f64 / 2.0;
            self.pan((x - half_width) * (factor - 1.0), (y - half_height) * (factor - 1.0));
        }

        self.scale *= factor;
        self.zoom_level = zoom_level;
        true
    }

    /// Back to the initial view. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        let changed = self.scale != INITIAL_SCALE || self.center != INITIAL_CENTER;

        self.center = INITIAL_CENTER;
        self.scale = INITIAL_SCALE;
        self.zoom_level = MIN_ZOOM_LEVEL;
        changed
    }

    /// Issues a request for the current view under a fresh sequence id.
    pub fn next_request(&mut self, downscale_only: bool) -> ViewRequest {
        self.sequence_id += 1;

        ViewRequest {
            sequence_id: self.sequence_id,
            center: self.center,
            pixel_size: self.pixel_size,
            scale: self.scale,
            zoom_level: self.zoom_level,
            downscale_only,
        }
    }

    /// Whether a frame rendered for `sequence_id` belongs to the newest request.
    #[must_use]
    pub fn accepts(&self, sequence_id: u64) -> bool {
        sequence_id == self.sequence_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_view() -> ViewState {
        ViewState::new(PixelSize::new(200, 100).unwrap())
    }

    fn plane_point(view: &ViewState, x: f64, y: f64) -> Complex {
        let size = view.pixel_size();
        view.center()
            + Complex::new(
                x - size.width() as f64 / 2.0,
                y - size.height() as f64 / 2.0,
            ) * view.scale()
    }

    fn assert_close(a: Complex, b: Complex) {
        assert!(a.is_within(b, 1e-12), "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_initial_view() {
        let view = create_view();

        assert_eq!(view.center(), Complex::new(-0.5, 0.0));
        assert_eq!(view.scale(), 0.005);
        assert_eq!(view.zoom_level(), 1.0);
        assert_eq!(view.sequence_id(), 0);
    }

    #[test]
    fn test_pan_moves_center_against_drag() {
        let mut view = create_view();

        view.pan(100.0, -20.0);

        assert_close(view.center(), Complex::new(-1.0, 0.1));
    }

    #[test]
    fn test_pan_is_clamped_to_allowed_region() {
        let mut view = create_view();

        view.pan(-1.0e6, 1.0e6);

        assert_eq!(view.center(), Complex::new(3.0, -2.0));
    }

    #[test]
    fn test_zoom_halves_scale_per_step() {
        let mut view = create_view();
        view.set_cursor_dependent_zoom(false);

        assert!(view.zoom(Some((0.0, 0.0)), 2.0));

        assert_eq!(view.scale(), 0.005 * 0.25);
        assert_eq!(view.zoom_level(), 3.0);
        assert_eq!(view.center(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let mut view = create_view();
        let before = plane_point(&view, 150.0, 20.0);

        view.zoom(Some((150.0, 20.0)), 3.0);

        assert_close(plane_point(&view, 150.0, 20.0), before);
    }

    #[test]
    fn test_zoom_level_is_clamped() {
        let mut view = create_view();

        assert!(!view.zoom(None, -1.0));
        assert_eq!(view.zoom_level(), 1.0);

        assert!(view.zoom(None, 100.0));
        assert_eq!(view.zoom_level(), MAX_ZOOM_LEVEL);
        assert_eq!(view.scale(), 0.005 * 0.5f64.powf(MAX_ZOOM_LEVEL - 1.0));

        assert!(!view.zoom(None, 1.0));
    }

    #[test]
    fn test_look_at_derives_zoom_level_from_scale() {
        let mut view = create_view();

        view.look_at(Complex::new(-0.75, 0.1), 0.005 / 8.0);

        assert_eq!(view.center(), Complex::new(-0.75, 0.1));
        assert_eq!(view.zoom_level(), 4.0);
        assert_eq!(view.scale(), 0.005 / 8.0);
    }

    #[test]
    fn test_look_at_clamps_center_and_depth() {
        let mut view = create_view();

        view.look_at(Complex::new(10.0, -10.0), 1.0);
        assert_eq!(view.center(), Complex::new(3.0, -2.0));
        assert_eq!(view.zoom_level(), MIN_ZOOM_LEVEL);
        assert_eq!(view.scale(), INITIAL_SCALE);

        view.look_at(Complex::ZERO, 1e-300);
        assert_eq!(view.zoom_level(), MAX_ZOOM_LEVEL);
    }

    #[test]
    fn test_reset_restores_initial_view() {
        let mut view = create_view();
        assert!(!view.reset());

        view.pan(10.0, 10.0);
        view.zoom(None, 4.0);

        assert!(view.reset());
        assert_eq!(view.center(), INITIAL_CENTER);
        assert_eq!(view.scale(), INITIAL_SCALE);
        assert_eq!(view.zoom_level(), 1.0);
    }

    #[test]
    fn test_next_request_increments_sequence_id() {
        let mut view = create_view();

        let first = view.next_request(false);
        view.zoom(None, 1.0);
        let second = view.next_request(true);

        assert_eq!(first.sequence_id, 1);
        assert_eq!(second.sequence_id, 2);
        assert_eq!(second.scale, 0.0025);
        assert_eq!(second.zoom_level, 2.0);
        assert!(second.downscale_only);
    }

    #[test]
    fn test_only_frames_of_latest_request_are_accepted() {
        let mut view = create_view();
        for _ in 0..3 {
            view.next_request(false);
        }

        // frames for 1 and 2 arrive after 3 was issued
        assert!(view.accepts(3));
        assert!(!view.accepts(1));
        assert!(!view.accepts(2));
        assert!(!view.accepts(4));
    }
}
