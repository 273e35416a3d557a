//! Physical unit conversion constants
//!
//! Parsers report SI-ish values (metres, °C, bar); these factors convert
//! the imperial units some devices store.

/// Metres per foot
pub const FEET: f64 = 0.3048;

/// Pascal per psi
pub const PSI: f64 = 6894.757293168;

/// Pascal per bar
pub const BAR: f64 = 100_000.0;

/// Convert °F to °C
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * (5.0 / 9.0)
}

/// Convert psi to bar
pub fn psi_to_bar(psi: f64) -> f64 {
    psi * PSI / BAR
}
