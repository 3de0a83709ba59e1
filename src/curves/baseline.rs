//! Built-in expected-strokes baseline
//!
//! Anchor points are `(distance_m, expected_strokes)` and follow the shape of
//! published tour averages, converted to metres.

use crate::types::Lie;

pub(super) const TEE: &[(f64, f64)] = &[
    (90.0, 2.92),
    (120.0, 2.99),
    (150.0, 3.05),
    (180.0, 3.15),
    (210.0, 3.35),
    (250.0, 3.60),
    (300.0, 3.90),
    (350.0, 4.05),
    (400.0, 4.15),
    (450.0, 4.45),
    (500.0, 4.65),
    (550.0, 4.85),
];

pub(super) const FAIRWAY: &[(f64, f64)] = &[
    (10.0, 2.18),
    (20.0, 2.40),
    (40.0, 2.60),
    (60.0, 2.70),
    (80.0, 2.75),
    (100.0, 2.80),
    (120.0, 2.85),
    (140.0, 2.91),
    (160.0, 2.98),
    (180.0, 3.08),
    (200.0, 3.19),
    (230.0, 3.40),
    (260.0, 3.65),
    (300.0, 3.95),
];

pub(super) const ROUGH: &[(f64, f64)] = &[
    (10.0, 2.34),
    (20.0, 2.59),
    (40.0, 2.78),
    (60.0, 2.91),
    (80.0, 2.96),
    (100.0, 3.02),
    (120.0, 3.08),
    (140.0, 3.15),
    (160.0, 3.23),
    (180.0, 3.31),
    (200.0, 3.42),
    (230.0, 3.62),
    (260.0, 3.86),
    (300.0, 4.13),
];

pub(super) const SAND: &[(f64, f64)] = &[
    (10.0, 2.43),
    (20.0, 2.53),
    (40.0, 2.82),
    (60.0, 3.08),
    (80.0, 3.24),
    (100.0, 3.30),
    (120.0, 3.36),
    (140.0, 3.44),
    (160.0, 3.55),
    (180.0, 3.68),
    (200.0, 3.80),
    (250.0, 4.10),
    (300.0, 4.40),
];

pub(super) const RECOVERY: &[(f64, f64)] = &[
    (20.0, 3.05),
    (50.0, 3.25),
    (100.0, 3.60),
    (150.0, 3.80),
    (200.0, 3.95),
    (250.0, 4.15),
    (300.0, 4.40),
];

pub(super) const GREEN: &[(f64, f64)] = &[
    (0.6, 1.00),
    (1.0, 1.04),
    (2.0, 1.34),
    (3.0, 1.56),
    (5.0, 1.80),
    (8.0, 1.94),
    (12.0, 2.05),
    (18.0, 2.17),
    (25.0, 2.27),
    (40.0, 2.42),
];

pub(super) fn anchors() -> [(Lie, &'static [(f64, f64)]); 6] {
    [
        (Lie::Tee, TEE),
        (Lie::Fairway, FAIRWAY),
        (Lie::Rough, ROUGH),
        (Lie::Sand, SAND),
        (Lie::Recovery, RECOVERY),
        (Lie::Green, GREEN),
    ]
}
