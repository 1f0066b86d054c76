/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use meteopipe::LatLon;
///
/// let london = LatLon(51.5085, -0.1257);
/// assert_eq!(london.0, 51.5085); // Latitude
/// assert_eq!(london.1, -0.1257); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);
