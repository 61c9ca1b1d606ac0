//! Great-circle geodesy and navigational derivations
//!
//! Distance and initial bearing on a spherical Earth, compass-rose and
//! hemisphere cardinals, turn direction, and cross-track deviation from a
//! planned route leg.

pub mod bearing;
pub mod compass;
pub mod cross_track;
pub mod distance;

pub use bearing::{calculate_bearing, calculate_turn};
pub use compass::{cardinal_from_bearing, latitude_cardinal, longitude_cardinal};
pub use cross_track::{cross_track_error, cross_track_error_legacy};
pub use distance::distance_between_points;
