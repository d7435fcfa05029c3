pub const AIR_DENSITY: f64 = 1.18; // kg/m^3
pub const GRAVITY: f64 = 9.81; // m/s^2
pub const MIN_AIRSPEED_THRESH: f64 = 0.1; // m/s, advance-ratio regularization floor

// Standard PWM endpoints for motor channels
pub const PWM_MIN: f64 = 1000.0;
pub const PWM_MAX: f64 = 2000.0;
