use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::application::ports::AudioError;

const CHUNK_SIZE: usize = 1024;

/// Converts mono `samples` from `from_rate` to `to_rate`.
pub fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, AudioError> {
    if from_rate == to_rate {
        return Ok(samples.to_vec());
    }
    resample_by_ratio(samples, to_rate as f64 / from_rate as f64)
}

/// Band-limited sinc resampling producing `round(len * ratio)` samples,
/// aligned with the input (the filter delay is removed).
pub fn resample_by_ratio(samples: &[f32], ratio: f64) -> Result<Vec<f32>, AudioError> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(AudioError::ProcessingFailed(format!(
            "invalid resample ratio {}",
            ratio
        )));
    }

    let expected_len = (samples.len() as f64 * ratio).round() as usize;
    if samples.is_empty() || expected_len == 0 {
        return Ok(Vec::new());
    }

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let mut resampler = SincFixedIn::<f32>::new(ratio, 1.0, params, CHUNK_SIZE, 1)
        .map_err(|e| AudioError::ProcessingFailed(format!("resampler init: {}", e)))?;

    let delay = resampler.output_delay();
    let wanted = delay + expected_len;
    let mut output = Vec::with_capacity(wanted + CHUNK_SIZE);

    let mut chunks = samples.chunks(CHUNK_SIZE);
    while output.len() < wanted {
        // Past the end of the input the filter is flushed with silence.
        let mut input = chunks.next().map(<[f32]>::to_vec).unwrap_or_default();
        input.resize(CHUNK_SIZE, 0.0);

        let result = resampler
            .process(&[input], None)
            .map_err(|e| AudioError::ProcessingFailed(format!("resample: {}", e)))?;

        if let Some(channel) = result.first() {
            output.extend_from_slice(channel);
        }
    }

    output.drain(..delay);
    output.truncate(expected_len);
    Ok(output)
}
