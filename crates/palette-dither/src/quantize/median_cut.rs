//! Median-cut color quantization.
//!
//! The sample set is copied once into a contiguous buffer. Buckets are
//! `(start, end)` ranges over that buffer and are split breadth-first, one
//! level at a time, so that the leaf order (and therefore the palette order)
//! depends only on the input.
//!
//! # Determinism rules
//!
//! - Split axis: the channel with the widest `max - min` range. Ties go to
//!   red, then green, then blue.
//! - Ordering: samples are sorted with a stable sort on the split channel,
//!   so samples with equal keys keep their input order.
//! - Median: the lower half receives `ceil(n / 2)` samples.
//! - Terminal buckets: a bucket with fewer than two samples is not split;
//!   it is carried forward twice per remaining level, so its color fills
//!   every palette slot it would have produced.
//! - Averaging: per-channel mean rounded half away from zero.

use tracing::{debug, trace};

use super::{QuantizeError, Quantizer};
use crate::color::{ColorSample, Rgb};

/// Largest accepted bisection depth (a 65 536-entry palette).
pub const MAX_DEPTH: u32 = 16;

/// Median-cut quantizer.
///
/// ```
/// use palette_dither::{ColorSample, MedianCut, Quantizer};
///
/// let samples = vec![ColorSample::new(40, 80, 120); 5];
/// let colors = MedianCut.quantize(&samples, 2).unwrap();
/// assert_eq!(colors.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianCut;

impl Quantizer for MedianCut {
    fn quantize(&self, samples: &[ColorSample], depth: u32) -> Result<Vec<Rgb>, QuantizeError> {
        quantize(samples, depth)
    }
}

/// A contiguous range of the working sample buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bucket {
    start: usize,
    end: usize,
}

impl Bucket {
    #[inline]
    fn len(self) -> usize {
        self.end - self.start
    }

    /// Per-channel `max - min` over the bucket's samples.
    fn ranges(self, samples: &[ColorSample]) -> [u8; 3] {
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];
        for sample in &samples[self.start..self.end] {
            for c in 0..3 {
                min[c] = min[c].min(sample.value[c]);
                max[c] = max[c].max(sample.value[c]);
            }
        }
        [max[0] - min[0], max[1] - min[1], max[2] - min[2]]
    }

    /// Sort along the widest channel and cut at the median.
    fn split(self, samples: &mut [ColorSample]) -> (Bucket, Bucket) {
        let axis = widest_channel(self.ranges(samples));
        samples[self.start..self.end].sort_by_key(|sample| sample.value[axis]);

        let mid = self.start + self.len().div_ceil(2);
        trace!(
            start = self.start,
            end = self.end,
            axis,
            mid,
            "Split bucket"
        );
        (
            Bucket {
                start: self.start,
                end: mid,
            },
            Bucket {
                start: mid,
                end: self.end,
            },
        )
    }

    /// Component-wise mean, rounded half away from zero.
    fn average(self, samples: &[ColorSample]) -> Rgb {
        let n = self.len() as u64;
        let mut sums = [0u64; 3];
        for sample in &samples[self.start..self.end] {
            for c in 0..3 {
                sums[c] += sample.value[c] as u64;
            }
        }
        // All terms are non-negative, so half-up equals half-away-from-zero.
        let mean = |sum: u64| ((2 * sum + n) / (2 * n)) as u8;
        Rgb::new(mean(sums[0]), mean(sums[1]), mean(sums[2]))
    }
}

/// Index of the largest range; earlier channels win ties (R > G > B).
#[inline]
fn widest_channel(ranges: [u8; 3]) -> usize {
    let mut axis = 0;
    for c in 1..3 {
        if ranges[c] > ranges[axis] {
            axis = c;
        }
    }
    axis
}

/// Derive a palette of exactly `2^depth` colors from `samples`.
///
/// `depth = 0` yields the average of all samples.
///
/// # Errors
///
/// - [`QuantizeError::EmptyInput`] if `samples` is empty
/// - [`QuantizeError::DepthTooLarge`] if `depth > MAX_DEPTH`
pub fn quantize(samples: &[ColorSample], depth: u32) -> Result<Vec<Rgb>, QuantizeError> {
    if samples.is_empty() {
        return Err(QuantizeError::EmptyInput);
    }
    if depth > MAX_DEPTH {
        return Err(QuantizeError::DepthTooLarge {
            depth,
            max: MAX_DEPTH,
        });
    }

    let mut working = samples.to_vec();
    let mut buckets = vec![Bucket {
        start: 0,
        end: working.len(),
    }];

    for level in 0..depth {
        let mut next = Vec::with_capacity(buckets.len() * 2);
        for bucket in buckets {
            if bucket.len() < 2 {
                next.push(bucket);
                next.push(bucket);
            } else {
                let (lower, upper) = bucket.split(&mut working);
                next.push(lower);
                next.push(upper);
            }
        }
        buckets = next;
        trace!(level, buckets = buckets.len(), "Finished median-cut level");
    }

    debug!(
        samples = samples.len(),
        depth,
        colors = buckets.len(),
        "Median-cut quantization complete"
    );

    Ok(buckets
        .into_iter()
        .map(|bucket| bucket.average(&working))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reds(colors: &[Rgb]) -> Vec<u8> {
        colors.iter().map(|c| c.r).collect()
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(quantize(&[], 2), Err(QuantizeError::EmptyInput));
        assert_eq!(quantize(&[], 0), Err(QuantizeError::EmptyInput));
    }

    #[test]
    fn test_depth_too_large_rejected() {
        let samples = [ColorSample::new(1, 2, 3)];
        assert_eq!(
            quantize(&samples, MAX_DEPTH + 1),
            Err(QuantizeError::DepthTooLarge {
                depth: MAX_DEPTH + 1,
                max: MAX_DEPTH
            })
        );
    }

    #[test]
    fn test_depth_zero_is_global_mean() {
        let samples = [
            ColorSample::new(0, 10, 255),
            ColorSample::new(1, 20, 255),
            ColorSample::new(2, 31, 0),
        ];
        // r: 3/3 = 1, g: 61/3 = 20.33 -> 20, b: 510/3 = 170
        assert_eq!(quantize(&samples, 0).unwrap(), vec![Rgb::new(1, 20, 170)]);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let samples = [ColorSample::new(1, 0, 254), ColorSample::new(2, 1, 255)];
        assert_eq!(quantize(&samples, 0).unwrap(), vec![Rgb::new(2, 1, 255)]);
    }

    #[test]
    fn test_output_size_is_power_of_two() {
        let samples: Vec<ColorSample> = (0..37u8)
            .map(|i| ColorSample::new(i * 7, 255 - i * 3, i))
            .collect();
        for depth in 0..=7 {
            let colors = quantize(&samples, depth).unwrap();
            assert_eq!(colors.len(), 1 << depth, "depth {depth}");
        }
    }

    #[test]
    fn test_odd_bucket_gives_extra_sample_to_lower_half() {
        let samples = [
            ColorSample::new(0, 0, 0),
            ColorSample::new(100, 0, 0),
            ColorSample::new(200, 0, 0),
        ];
        let colors = quantize(&samples, 1).unwrap();
        assert_eq!(colors, vec![Rgb::new(50, 0, 0), Rgb::new(200, 0, 0)]);
    }

    #[test]
    fn test_terminal_bucket_is_duplicated_in_place() {
        let samples = [
            ColorSample::new(0, 0, 0),
            ColorSample::new(100, 0, 0),
            ColorSample::new(200, 0, 0),
        ];
        let colors = quantize(&samples, 2).unwrap();
        assert_eq!(reds(&colors), vec![0, 100, 200, 200]);
    }

    #[test]
    fn test_single_sample_fills_every_slot() {
        let samples = [ColorSample::new(9, 8, 7)];
        let colors = quantize(&samples, 3).unwrap();
        assert_eq!(colors, vec![Rgb::new(9, 8, 7); 8]);
    }

    #[test]
    fn test_split_axis_is_widest_channel() {
        // Blue has the widest range, so the cut separates low and high blue.
        let samples = [
            ColorSample::new(10, 0, 255),
            ColorSample::new(20, 5, 0),
            ColorSample::new(0, 10, 250),
            ColorSample::new(30, 0, 5),
        ];
        let colors = quantize(&samples, 1).unwrap();
        // low blue: (20,5,0),(30,0,5); high blue: (0,10,250),(10,0,255)
        assert_eq!(colors, vec![Rgb::new(25, 3, 3), Rgb::new(5, 5, 253)]);
    }

    #[test]
    fn test_axis_tie_prefers_red_over_green() {
        // Red and green both span 0..=255.
        let samples = [
            ColorSample::new(0, 255, 0),
            ColorSample::new(255, 0, 0),
            ColorSample::new(10, 10, 0),
            ColorSample::new(245, 245, 0),
        ];
        let colors = quantize(&samples, 1).unwrap();
        assert_eq!(colors, vec![Rgb::new(5, 133, 0), Rgb::new(250, 123, 0)]);
    }

    #[test]
    fn test_axis_tie_prefers_green_over_blue() {
        let samples = [
            ColorSample::new(7, 0, 255),
            ColorSample::new(7, 255, 0),
            ColorSample::new(7, 20, 20),
            ColorSample::new(7, 230, 230),
        ];
        // Sorted by green: (0,255) (20,20) (230,230) (255,0)
        let colors = quantize(&samples, 1).unwrap();
        assert_eq!(colors, vec![Rgb::new(7, 10, 138), Rgb::new(7, 243, 115)]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let samples = [
            ColorSample::new(0, 0, 9),
            ColorSample::new(0, 0, 1),
            ColorSample::new(255, 0, 5),
            ColorSample::new(0, 0, 3),
        ];
        let colors = quantize(&samples, 1).unwrap();
        assert_eq!(colors, vec![Rgb::new(0, 0, 5), Rgb::new(128, 0, 4)]);
    }

    #[test]
    fn test_input_slice_is_not_reordered() {
        let samples = vec![
            ColorSample::new(200, 0, 0),
            ColorSample::new(0, 0, 0),
            ColorSample::new(100, 0, 0),
        ];
        let before = samples.clone();
        quantize(&samples, 2).unwrap();
        assert_eq!(samples, before);
    }

    #[test]
    fn test_trait_matches_function() {
        let samples: Vec<ColorSample> = (0..50u8)
            .map(|i| ColorSample::new(i.wrapping_mul(13), i.wrapping_mul(29), i))
            .collect();
        assert_eq!(
            MedianCut.quantize(&samples, 3).unwrap(),
            quantize(&samples, 3).unwrap()
        );
    }

    #[test]
    fn test_widest_channel_ties() {
        assert_eq!(widest_channel([5, 5, 5]), 0);
        assert_eq!(widest_channel([4, 5, 5]), 1);
        assert_eq!(widest_channel([4, 4, 5]), 2);
        assert_eq!(widest_channel([0, 0, 0]), 0);
    }
}
