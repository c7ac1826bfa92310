use super::Smoothing;
use crate::parts::{LinePart, PathPart};

/// Verkettet die Glättungen aufeinanderfolgender Ecken zu einem Pfad.
///
/// Ausgangsstrecke einer Ecke und Eingangsstrecke der nächsten liegen auf derselben
/// Strecke zwischen zwei Wegpunkten; sie werden zu einer Strecke vom Beginn der
/// einen bis zum Ende der anderen zusammengelegt. Leere Eingabe ergibt einen leeren
/// Pfad.
pub fn join_smoothings(smoothings: &[Smoothing]) -> Vec<PathPart> {
    let mut parts = Vec::with_capacity(smoothings.len() * 4 + 1);
    let mut previous: Option<&LinePart> = None;

    for smoothing in smoothings {
        let line1 = smoothing.line1();
        let entry = match previous {
            None => *line1,
            Some(last) => LinePart::new(last.start, line1.end),
        };
        parts.push(entry.into());
        parts.extend(smoothing.inner_parts());
        previous = Some(smoothing.line2());
    }

    if let Some(last) = previous {
        parts.push((*last).into());
    }
    parts
}
