//! Configuration fixtures.

/// Pricing rules and their standard values, as the seeder inserts them.
pub const PRICING_RULES: &[(&str, f64)] = &[
    ("max_guests_per_room", 3.0),
    ("surcharge_guest_threshold", 3.0),
    ("surcharge_rate", 0.25),
];
