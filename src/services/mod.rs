//! External collaborators of the signal engine: the ephemeris and the clock.

pub mod clock;
pub mod ephemeris;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ephemeris::{init_oracle, AnalyticEphemeris, EphemerisOracle, NullOracle};
