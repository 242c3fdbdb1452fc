//! Ordered pin palette and nearest-colour lookup.

use crate::error::{PushpinError, Result};

use super::Colour;

/// An ordered collection of pin colours.
///
/// Order is significant: when two entries are equally close to a pixel,
/// the earlier one wins, and board output depends on that tie-break
/// being stable. Duplicates are allowed (the first copy shadows the rest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Create a palette from an ordered colour list.
    ///
    /// Fails on an empty list, so lookups on a constructed palette
    /// never can.
    pub fn new(colours: Vec<Colour>) -> Result<Self> {
        if colours.is_empty() {
            return Err(PushpinError::Config {
                message: "Palette has no colours".to_string(),
                help: Some("Provide at least one colour".to_string()),
            });
        }
        Ok(Self { colours })
    }

    /// Parse a palette from hex strings, in order.
    pub fn from_hex(hex: &[impl AsRef<str>]) -> Result<Self> {
        let colours = hex
            .iter()
            .map(|s| Colour::from_hex(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colours)
    }

    /// Find the palette entry closest to `target` by squared RGB distance.
    ///
    /// The first entry achieving the minimum distance wins.
    pub fn nearest(&self, target: Colour) -> Colour {
        let mut best = self.colours[0];
        let mut best_dist = target.distance_sq(best);

        for &c in &self.colours[1..] {
            let dist = target.distance_sq(c);
            if dist < best_dist {
                best_dist = dist;
                best = c;
            }
        }

        best
    }

    /// Number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always false: construction rejects empty palettes.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Iterate colours in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &Colour> {
        self.colours.iter()
    }

    /// Check whether a colour is a palette member.
    pub fn contains(&self, colour: Colour) -> bool {
        self.colours.contains(&colour)
    }
}
