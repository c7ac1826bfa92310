//! Fehlertypen der Glättungs-Engine.
//!
//! Nur ungueltige Parameter sind Fehler. Degenerierte Geometrie (vernachlässigbarer
//! Winkel, Radius 0) wird als `Smoothing::None` aufgelöst, nicht als Fehler.

/// Fehler bei ungueltigen Eingabewerten oder nicht konvergierender Radius-Korrektur.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmoothingError {
    #[error("Glaettungsfaktor muss in [0, 1] liegen, erhalten: {0}")]
    SmoothingFactorOutOfRange(f64),

    #[error("Breite der kubischen Parabel darf nicht negativ sein, erhalten: {0}")]
    NegativeWidth(f64),

    #[error("Koeffizient K der kubischen Parabel darf nicht 0 sein")]
    ZeroShapeCoefficient,

    #[error("Laenge der Klothoide darf nicht negativ sein, erhalten: {0}")]
    NegativeLength(f64),

    #[error("Radius muss positiv sein, erhalten: {0}")]
    NonPositiveRadius(f64),

    #[error("Schrittweite muss positiv sein, erhalten: {0}")]
    NonPositiveDelta(f64),

    #[error("Anzahl der Plot-Punkte muss positiv sein")]
    ZeroPlotPoints,

    #[error("Plot-Bereich ungueltig: min {min} >= max {max}")]
    InvalidPlotRange { min: f64, max: f64 },

    #[error(
        "Radius-Korrektur nach {iterations} Schritten nicht konvergiert \
         (Ziel {radius}, erreicht {reached})"
    )]
    RadiusNotConverged {
        radius: f64,
        reached: f64,
        iterations: usize,
    },
}

/// Ergebnis-Alias der Engine.
pub type Result<T> = std::result::Result<T, SmoothingError>;
