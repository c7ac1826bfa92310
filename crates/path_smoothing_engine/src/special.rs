//! Spezielle Funktionen: normiertes Fresnel-Integral und Drei-Punkte-Krümmung.

use glam::DVec2;
use num_complex::Complex;
use std::f64::consts::{FRAC_PI_2, PI};

/// Grenze zwischen Potenzreihe und Kettenbruch (Argument des Fresnel-Integrals).
const SERIES_LIMIT: f64 = 1.5;
/// Maximale Iterationen für Reihe und Kettenbruch (konvergieren nach < 60 Schritten).
const MAX_ITERATIONS: usize = 100;
/// Kleinste darstellbare Größe als Startwert des Lentz-Verfahrens.
const FPMIN: f64 = 1.0e-300;

/// Normiertes Fresnel-Integral.
///
/// Liefert `(C(t), S(t))` mit `C(t) = ∫₀ᵗ cos(π/2·u²) du` und `S(t) = ∫₀ᵗ sin(π/2·u²) du`.
/// Die Kurve `t ↦ (C(t), S(t))` ist die Einheits-Klothoide mit Bogenlänge `t` und
/// Krümmung `π·t`. Beide Funktionen sind ungerade.
pub fn fresnel(t: f64) -> DVec2 {
    let ax = t.abs();
    let (c, s) = if ax < FPMIN.sqrt() {
        (ax, 0.0)
    } else if ax <= SERIES_LIMIT {
        fresnel_series(ax)
    } else {
        fresnel_continued_fraction(ax)
    };

    if t < 0.0 {
        DVec2::new(-c, -s)
    } else {
        DVec2::new(c, s)
    }
}

/// Potenzreihe, abwechselnd Glieder für S und C.
fn fresnel_series(ax: f64) -> (f64, f64) {
    let fact = FRAC_PI_2 * ax * ax;
    let mut sum_c = ax;
    let mut sum_s = 0.0;
    let mut term = ax;
    let mut sign = 1.0;

    for k in 1..=MAX_ITERATIONS {
        term *= fact / k as f64;
        let odd = k % 2 == 1;
        let target = if odd { &mut sum_s } else { &mut sum_c };
        *target += sign * term / (2 * k + 1) as f64;
        let converged = term < target.abs() * f64::EPSILON;

        if odd {
            sign = -sign;
        }
        if converged {
            break;
        }
    }

    (sum_c, sum_s)
}

/// Kettenbruch der komplementären Fehlerfunktion (modifiziertes Lentz-Verfahren).
fn fresnel_continued_fraction(ax: f64) -> (f64, f64) {
    let one = Complex::new(1.0, 0.0);
    let pix2 = PI * ax * ax;
    let mut b = Complex::new(1.0, -pix2);
    let mut c = Complex::new(1.0 / FPMIN, 0.0);
    let mut d = one / b;
    let mut h = d;
    let mut n = -1.0;

    for _ in 2..=MAX_ITERATIONS {
        n += 2.0;
        let a = -n * (n + 1.0);
        b += 4.0;
        d = one / (d * a + b);
        c = b + a / c;
        let del = c * d;
        h *= del;
        if (del.re - 1.0).abs() + del.im.abs() < f64::EPSILON {
            break;
        }
    }

    h *= Complex::new(ax, -ax);
    let cs = Complex::new(0.5, 0.5) * (one - Complex::cis(0.5 * pix2) * h);
    (cs.re, cs.im)
}

/// Vorzeichenbehaftete Krümmung des Kreises durch drei Punkte (Menger-Krümmung).
///
/// `4·A / (|p0p1|·|p1p2|·|p2p0|)` mit der vorzeichenbehafteten Dreiecksfläche `A`.
/// Positiv, wenn die Punkte gegen den Uhrzeigersinn liegen (Linkskurve).
/// Kollineare Punkte liefern 0, zusammenfallende NaN.
pub fn three_point_curvature(p0: DVec2, p1: DVec2, p2: DVec2) -> f64 {
    let doubled_area = (p1 - p0).perp_dot(p2 - p0);
    let product = p0.distance(p1) * p1.distance(p2) * p2.distance(p0);
    2.0 * doubled_area / product
}

/// Ersetzt eine nicht messbare Krümmung (NaN) durch 0 (Anzeige und Plot).
pub fn curvature_or_zero(curvature: f64) -> f64 {
    if curvature.is_nan() { 0.0 } else { curvature }
}
