use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Great-circle distance in kilometers.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Initial bearing from `self` to `other`, normalized to `[0, 360)` degrees.
    pub fn bearing_to(&self, other: &Coordinates) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let y = delta_lng.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

        let bearing = y.atan2(x).to_degrees();
        (bearing + 360.0) % 360.0
    }

    /// Round coordinates to specified decimal places for caching.
    pub fn round(&self, decimal_places: u32) -> Self {
        let multiplier = 10_f64.powi(decimal_places as i32);
        Coordinates {
            lat: (self.lat * multiplier).round() / multiplier,
            lng: (self.lng * multiplier).round() / multiplier,
        }
    }
}

/// Unsigned acute difference between two bearings, in `[0, 180]` degrees.
pub fn bearing_difference(b1: f64, b2: f64) -> f64 {
    let diff = (b1 - b2).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Symmetric `(n+1)x(n+1)` distance matrix in kilometers: index 0 is `user`,
/// indices `1..=n` are `places` in caller-supplied order. Filled for `i<j`
/// then mirrored; the diagonal is left at zero.
pub fn build_distance_matrix(user: &Coordinates, places: &[Coordinates]) -> Vec<Vec<f64>> {
    let n = places.len();
    let mut points = Vec::with_capacity(n + 1);
    points.push(*user);
    points.extend_from_slice(places);

    let mut matrix = vec![vec![0.0; n + 1]; n + 1];
    for i in 0..=n {
        for j in (i + 1)..=n {
            let d = points[i].distance_to(&points[j]);
            matrix[i][j] = d;
            matrix[j][i] = d;
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(48.8566, 2.3522).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, 181.0).is_err());
    }

    #[test]
    fn test_distance_calculation() {
        let paris = Coordinates::new(48.8566, 2.3522).unwrap();
        let london = Coordinates::new(51.5074, -0.1278).unwrap();

        let distance = paris.distance_to(&london);
        assert!((distance - 344.0).abs() < 10.0);
    }

    #[test]
    fn test_rounding() {
        let coords = Coordinates::new(48.856614, 2.352222).unwrap();
        let rounded = coords.round(3);
        assert_eq!(rounded.lat, 48.857);
        assert_eq!(rounded.lng, 2.352);
    }

    #[test]
    fn test_bearing_due_north() {
        let a = Coordinates::new(10.0, 106.0).unwrap();
        let b = Coordinates::new(11.0, 106.0).unwrap();
        let bearing = a.bearing_to(&b);
        assert!(bearing.abs() < 1.0, "expected ~0 degrees, got {bearing}");
    }

    #[test]
    fn test_bearing_due_east() {
        let a = Coordinates::new(10.0, 106.0).unwrap();
        let b = Coordinates::new(10.0, 107.0).unwrap();
        let bearing = a.bearing_to(&b);
        assert!((bearing - 90.0).abs() < 1.0, "expected ~90 degrees, got {bearing}");
    }

    #[test]
    fn test_bearing_difference_wraps() {
        assert_eq!(bearing_difference(10.0, 20.0), 10.0);
        assert_eq!(bearing_difference(350.0, 10.0), 20.0);
        assert_eq!(bearing_difference(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_distance_matrix_shape_and_symmetry() {
        let user = Coordinates::new(10.0, 106.0).unwrap();
        let places = vec![
            Coordinates::new(10.01, 106.0).unwrap(),
            Coordinates::new(10.0, 106.02).unwrap(),
        ];
        let matrix = build_distance_matrix(&user, &places);
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix[0].len(), 3);
        for row in &matrix {
            assert_eq!(row[0], matrix[0][0].max(row[0]).min(row[0]));
        }
        assert_eq!(matrix[1][2], matrix[2][1]);
        assert_eq!(matrix[0][0], 0.0);
        assert!(matrix[0][1] > 0.0);
    }
}
