//! Geographic primitives shared by the map screen, the POI client, and the
//! location providers.

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components are finite numbers.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// A rectangular map viewport: center coordinates plus the latitude/longitude
/// span of the visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub fn new(latitude: f64, longitude: f64, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude,
            longitude,
            latitude_delta,
            longitude_delta,
        }
    }

    /// A square viewport of the given span centered on `coords`.
    pub fn centered_on(coords: Coordinates, span: f64) -> Self {
        Self {
            latitude: coords.latitude,
            longitude: coords.longitude,
            latitude_delta: span,
            longitude_delta: span,
        }
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// All four fields are finite and both deltas are positive.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude_delta.is_finite()
            && self.longitude_delta.is_finite()
            && self.latitude_delta > 0.0
            && self.longitude_delta > 0.0
    }

    /// The same viewport shifted by the given amounts.
    pub fn shifted(&self, d_latitude: f64, d_longitude: f64) -> Self {
        Self {
            latitude: self.latitude + d_latitude,
            longitude: self.longitude + d_longitude,
            ..*self
        }
    }

    /// The same center with both deltas scaled by `factor`.
    /// A factor below 1.0 zooms in, above 1.0 zooms out.
    pub fn zoomed(&self, factor: f64) -> Self {
        Self {
            latitude_delta: self.latitude_delta * factor,
            longitude_delta: self.longitude_delta * factor,
            ..*self
        }
    }

    /// Whether `coords` falls inside the visible area.
    pub fn contains(&self, coords: Coordinates) -> bool {
        let half_lat = self.latitude_delta / 2.0;
        let half_lon = self.longitude_delta / 2.0;
        (coords.latitude - self.latitude).abs() <= half_lat
            && (coords.longitude - self.longitude).abs() <= half_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on_uses_square_span() {
        let region = Region::centered_on(Coordinates::new(45.5, -73.6), 0.01);
        assert_eq!(region.latitude, 45.5);
        assert_eq!(region.longitude, -73.6);
        assert_eq!(region.latitude_delta, 0.01);
        assert_eq!(region.longitude_delta, 0.01);
    }

    #[test]
    fn test_region_validity() {
        assert!(Region::new(45.5, -73.6, 0.1, 0.2).is_valid());
        assert!(!Region::new(45.5, -73.6, 0.0, 0.2).is_valid());
        assert!(!Region::new(45.5, -73.6, -0.1, 0.2).is_valid());
        assert!(!Region::new(f64::NAN, -73.6, 0.1, 0.2).is_valid());
        assert!(!Region::new(45.5, f64::INFINITY, 0.1, 0.2).is_valid());
    }

    #[test]
    fn test_shifted_moves_center_only() {
        let region = Region::new(45.5, -73.6, 0.1, 0.2);
        let shifted = region.shifted(0.05, -0.05);
        assert_eq!(shifted.latitude, 45.55);
        assert_eq!(shifted.longitude, -73.65);
        assert_eq!(shifted.latitude_delta, 0.1);
        assert_eq!(shifted.longitude_delta, 0.2);
    }

    #[test]
    fn test_zoomed_scales_deltas_only() {
        let region = Region::new(45.5, -73.6, 0.1, 0.2);
        let zoomed = region.zoomed(0.5);
        assert_eq!(zoomed.latitude, 45.5);
        assert_eq!(zoomed.latitude_delta, 0.05);
        assert_eq!(zoomed.longitude_delta, 0.1);
        assert!(zoomed.is_valid());
    }

    #[test]
    fn test_contains() {
        let region = Region::new(45.5, -73.6, 0.2, 0.2);
        assert!(region.contains(Coordinates::new(45.5, -73.6)));
        assert!(region.contains(Coordinates::new(45.59, -73.69)));
        assert!(!region.contains(Coordinates::new(45.7, -73.6)));
        assert!(!region.contains(Coordinates::new(45.5, -73.0)));
    }
}
