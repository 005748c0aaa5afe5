use crate::error::TrackError;
use crate::geometry::Rect;

/// Drivable surface: the union of its rectangles.
///
/// Bounds checks run once per tick and once per ray sample, so the lookup is
/// a plain linear scan over a handful of rectangles.
#[derive(Clone, Debug)]
pub struct Track {
    rects: Vec<Rect>,
}

impl Track {
    /// Builds a track from its rectangles.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EmptyTrack`] for an empty list and
    /// [`TrackError::DegenerateRect`] for the first rectangle that has a
    /// non-positive or non-finite dimension.
    pub fn new(rects: Vec<Rect>) -> Result<Self, TrackError> {
        if rects.is_empty() {
            return Err(TrackError::EmptyTrack);
        }
        if let Some((index, rect)) = rects.iter().enumerate().find(|(_, r)| r.is_degenerate()) {
            return Err(TrackError::DegenerateRect { index, rect: *rect });
        }
        Ok(Self { rects })
    }

    #[must_use]
    pub fn is_in_bounds(&self, x: f64, y: f64) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }

    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rects() -> Track {
        Track::new(vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(20.0, 0.0, 10.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn in_bounds_matches_any_rect() {
        let t = two_rects();
        assert!(t.is_in_bounds(5.0, 5.0));
        assert!(t.is_in_bounds(25.0, 5.0));
        assert!(!t.is_in_bounds(15.0, 5.0));
        assert!(!t.is_in_bounds(5.0, -0.1));
    }

    #[test]
    fn in_bounds_agrees_with_exhaustive_scan() {
        let t = two_rects();
        for xi in -5..40 {
            for yi in -5..15 {
                let (x, y) = (f64::from(xi) * 0.75, f64::from(yi) * 0.75);
                let expected = t.rects().iter().any(|r| r.contains(x, y));
                assert_eq!(t.is_in_bounds(x, y), expected, "mismatch at ({x}, {y})");
            }
        }
    }

    #[test]
    fn empty_track_is_rejected() {
        assert!(matches!(Track::new(Vec::new()), Err(TrackError::EmptyTrack)));
    }

    #[test]
    fn degenerate_rect_reports_index() {
        let err = Track::new(vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 0.0, 10.0, 0.0),
        ])
        .unwrap_err();
        assert!(matches!(err, TrackError::DegenerateRect { index: 1, .. }));
    }
}
