//! Nearest-swatch hue counting over a fixed named palette.
//!
//! Every (sample, swatch) pair closer than [`MATCH_DISTANCE`] in RGB space
//! counts once for the swatch's hue. A sample may therefore count towards
//! several swatches and several hues; the result is a match tally, not a
//! partition of the samples.

mod swatches;

#[cfg(test)]
mod tests;

pub use swatches::{PALETTE, PALETTE_SIZE};

use image::RgbaImage;
use rayon::prelude::*;
use tracing::debug;

use crate::resize::resize_exact;

/// Strict upper bound on the RGB distance for a swatch match.
pub const MATCH_DISTANCE: f64 = 15.0;

/// Side length images are thumbnailed to before sampling.
pub const SAMPLE_SIZE: u32 = 100;

/// One decoded pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

impl PixelSample {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Euclidean distance in RGB space. Alpha is ignored.
    pub fn distance(&self, other: &PixelSample) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    pub fn matches(&self, swatch: &PixelSample) -> bool {
        self.distance(swatch) < MATCH_DISTANCE
    }
}

impl From<image::Rgba<u8>> for PixelSample {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self::rgba(r, g, b, a)
    }
}

/// Opaque RGB sample without an alpha channel.
pub const fn rgb(r: u8, g: u8, b: u8) -> PixelSample {
    PixelSample { r, g, b, a: None }
}

/// A named hue and its representative swatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub swatches: [PixelSample; 10],
}

impl PaletteEntry {
    pub const fn new(name: &'static str, swatches: [PixelSample; 10]) -> Self {
        Self { name, swatches }
    }

    /// Number of (sample, swatch) pairs of this entry within matching distance.
    pub fn count_matches(&self, samples: &[PixelSample]) -> u64 {
        self.swatches
            .iter()
            .map(|swatch| samples.iter().filter(|s| s.matches(swatch)).count() as u64)
            .sum()
    }
}

/// Match counts per hue name, in palette order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HueMatchCounts {
    entries: Vec<(&'static str, u64)>,
}

impl HueMatchCounts {
    /// Merge partial counts, summing entries that share a name.
    ///
    /// First appearance decides a name's position.
    pub fn merge<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, u64)>,
    {
        let mut counts = Self::default();
        for (name, count) in parts {
            counts.add(name, count);
        }
        counts
    }

    fn add(&mut self, name: &'static str, count: u64) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing += count,
            None => self.entries.push((name, count)),
        }
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

/// Count swatch matches for every palette entry.
///
/// Entries are counted in parallel, each into its own counter; the
/// counters are merged afterwards so the result does not depend on
/// scheduling order.
pub fn count_hue_matches(samples: &[PixelSample], palette: &[PaletteEntry]) -> HueMatchCounts {
    let per_entry: Vec<(&'static str, u64)> = palette
        .par_iter()
        .map(|entry| (entry.name, entry.count_matches(samples)))
        .collect();
    HueMatchCounts::merge(per_entry)
}

/// The `n` names with the most matches, highest first.
///
/// Equal counts keep palette order.
pub fn top_hues(counts: &HueMatchCounts, n: usize) -> Vec<&'static str> {
    let mut ranked: Vec<(&'static str, u64)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(n).map(|(name, _)| name).collect()
}

/// Thumbnail `img` and collect every pixel that is not transparent black.
pub fn sample_pixels(img: &RgbaImage) -> Vec<PixelSample> {
    let thumb = resize_exact(img, SAMPLE_SIZE, SAMPLE_SIZE);
    let samples: Vec<PixelSample> = thumb
        .pixels()
        .filter(|px| px.0 != [0, 0, 0, 0])
        .map(|px| PixelSample::from(*px))
        .collect();
    debug!(
        width = img.width(),
        height = img.height(),
        samples = samples.len(),
        "Sampled pixels for hue counting"
    );
    samples
}

/// Like [`top_hues`], but leaves out hues that matched no sample.
pub fn matched_top_hues(counts: &HueMatchCounts, n: usize) -> Vec<&'static str> {
    top_hues(counts, n)
        .into_iter()
        .filter(|name| counts.get(name).unwrap_or(0) > 0)
        .collect()
}

/// Rank the fixed palette's hues by how often they appear in `img`.
///
/// Only hues with at least one match are returned, so a grayscale image
/// yields an empty list.
pub fn dominant_hues(img: &RgbaImage, n: usize) -> Vec<&'static str> {
    let samples = sample_pixels(img);
    let counts = count_hue_matches(&samples, &PALETTE);
    let hues = matched_top_hues(&counts, n);
    debug!(total_matches = counts.total(), ?hues, "Ranked dominant hues");
    hues
}
