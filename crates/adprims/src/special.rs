//! Special functions backing primal evaluations.

use std::f64::consts::PI;

const LANCZOS_G: f64 = 7.0;

const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// `ln |Γ(x)|` using the Lanczos approximation (g = 7, n = 9).
///
/// Arguments below 0.5 go through the reflection formula
/// `Γ(x) Γ(1 - x) = π / sin(πx)`. Poles at non-positive integers give `+∞`.
pub(crate) fn ln_gamma(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return f64::INFINITY;
    }
    if x <= 0.0 && x.fract() == 0.0 {
        return f64::INFINITY;
    }
    if x < 0.5 {
        let s = (PI * x).sin().abs();
        return (PI / s).ln() - ln_gamma(1.0 - x);
    }

    let z = x - 1.0;
    let t = z + LANCZOS_G + 0.5;
    let mut a = LANCZOS_COEFFS[0];
    for (i, &c) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        a += c / (z + i as f64);
    }
    0.5 * (2.0 * PI).ln() + (z + 0.5) * t.ln() - t + a.ln()
}
