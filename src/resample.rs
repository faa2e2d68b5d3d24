// src/resample.rs

use ndarray::Array1;
use std::error::Error;

/// Builds the sequence of input-sample indices that the render loop walks.
///
/// The output holds `round(total_frames / speed)` indices, evenly spaced over
/// `[0, total_frames - 1]` and truncated to integers, so `speed > 1` skips
/// samples and `speed < 1` repeats them at the fixed output frame rate.
///
/// Degenerate inputs resolve explicitly: zero input samples, or a speed large
/// enough to round the output length to zero, produce an empty sequence (the
/// caller decides whether that warrants a warning). A single input sample
/// repeats index 0.
pub fn resample_indices(total_frames: usize, speed: f64) -> Result<Vec<usize>, Box<dyn Error>> {
    if !(speed > 0.0) {
        return Err(format!(
            "Error: invalid speed multiplier {}: must be greater than zero.",
            speed
        )
        .into());
    }
    if total_frames == 0 {
        return Ok(Vec::new());
    }

    let output_len = (total_frames as f64 / speed).round() as usize;
    if output_len == 0 {
        return Ok(Vec::new());
    }

    let ramp = Array1::linspace(0.0, (total_frames - 1) as f64, output_len);
    let mut indices: Vec<usize> = ramp
        .iter()
        .map(|&x| (x as usize).min(total_frames - 1))
        .collect();
    // linspace builds each value as start + i * step, so the final value can
    // land a hair under the endpoint; pin it to the last input index.
    if output_len >= 2 {
        if let Some(last) = indices.last_mut() {
            *last = total_frames - 1;
        }
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_speed_is_identity() {
        let indices = resample_indices(10, 1.0).unwrap();
        assert_eq!(indices, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn double_speed_halves_the_output() {
        let indices = resample_indices(10, 2.0).unwrap();
        assert_eq!(indices.len(), 5);
        assert_eq!(*indices.first().unwrap(), 0);
        assert_eq!(*indices.last().unwrap(), 9);
    }

    #[test]
    fn half_speed_repeats_samples() {
        let indices = resample_indices(4, 0.5).unwrap();
        assert_eq!(indices.len(), 8);
        assert_eq!(*indices.first().unwrap(), 0);
        assert_eq!(*indices.last().unwrap(), 3);
        // Every input index must still be visited.
        for i in 0..4 {
            assert!(indices.contains(&i));
        }
    }

    #[test]
    fn sequences_are_nondecreasing_with_rounded_length() {
        for &(total, speed) in &[(100usize, 1.0f64), (100, 3.0), (100, 0.25), (7, 2.0), (33, 1.7)] {
            let indices = resample_indices(total, speed).unwrap();
            assert_eq!(indices.len(), (total as f64 / speed).round() as usize);
            assert_eq!(*indices.first().unwrap(), 0);
            assert_eq!(*indices.last().unwrap(), total - 1);
            assert!(indices.windows(2).all(|w| w[0] <= w[1]));
            assert!(indices.iter().all(|&i| i < total));
        }
    }

    #[test]
    fn nonpositive_speed_is_an_error() {
        assert!(resample_indices(10, 0.0).is_err());
        assert!(resample_indices(10, -1.5).is_err());
        assert!(resample_indices(10, f64::NAN).is_err());
        let err = resample_indices(10, 0.0).unwrap_err();
        assert!(err.to_string().contains("speed"));
    }

    #[test]
    fn zero_input_samples_yield_empty_sequence() {
        assert!(resample_indices(0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn single_input_sample_repeats_index_zero() {
        assert_eq!(resample_indices(1, 1.0).unwrap(), vec![0]);
        assert_eq!(resample_indices(1, 0.25).unwrap(), vec![0; 4]);
    }

    #[test]
    fn huge_speed_yields_empty_sequence() {
        assert!(resample_indices(10, 1000.0).unwrap().is_empty());
    }
}
