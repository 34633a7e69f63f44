//! Centred short-time Fourier transform, its inverse, and a phase vocoder.
//!
//! Frames are `n_fft` samples of the signal zero-padded by `n_fft / 2` on both
//! sides, weighted by a periodic Hann window, taken every `hop_length`
//! samples. Only the `n_fft / 2 + 1` non-negative frequency bins are kept.

use std::f32::consts::PI;

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

pub type Frame = Vec<Complex<f32>>;

/// Periodic Hann window of `size` points.
pub fn hann_window(size: usize) -> Vec<f32> {
    let factor = 2.0 * PI / size as f32;
    (0..size)
        .map(|i| 0.5 - 0.5 * (i as f32 * factor).cos())
        .collect()
}

/// Number of centred frames for a signal of `len` samples.
pub fn frame_count(len: usize, hop_length: usize) -> usize {
    1 + len / hop_length
}

pub fn stft(samples: &[f32], n_fft: usize, hop_length: usize) -> Vec<Frame> {
    let pad = n_fft / 2;
    let mut padded = vec![0.0f32; pad + samples.len() + pad];
    padded[pad..pad + samples.len()].copy_from_slice(samples);

    let window = hann_window(n_fft);
    let n_bins = n_fft / 2 + 1;
    let n_frames = frame_count(samples.len(), hop_length);

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(n_fft);

    (0..n_frames)
        .map(|frame_idx| {
            let start = frame_idx * hop_length;
            let mut buffer: Vec<Complex<f32>> = (0..n_fft)
                .map(|i| Complex::new(padded[start + i] * window[i], 0.0))
                .collect();
            fft.process(&mut buffer);
            buffer.truncate(n_bins);
            buffer
        })
        .collect()
}

/// Inverse of [`stft`], returning exactly `length` samples.
///
/// Overlap-added frames are divided by the summed squared window wherever that
/// sum is non-negligible; output beyond the covered span is zero.
pub fn istft(frames: &[Frame], n_fft: usize, hop_length: usize, length: usize) -> Vec<f32> {
    let window = hann_window(n_fft);
    let span = n_fft + hop_length * frames.len().saturating_sub(1);
    let mut signal = vec![0.0f32; span];
    let mut window_sum = vec![0.0f32; span];

    let mut planner = FftPlanner::<f32>::new();
    let ifft = planner.plan_fft_inverse(n_fft);
    let scale = 1.0 / n_fft as f32;

    for (frame_idx, frame) in frames.iter().enumerate() {
        let mut buffer = vec![Complex::new(0.0f32, 0.0); n_fft];
        for (k, value) in frame.iter().enumerate().take(n_fft / 2 + 1) {
            buffer[k] = *value;
            if k > 0 && k < n_fft - k {
                buffer[n_fft - k] = value.conj();
            }
        }
        // A real signal has real DC and Nyquist bins.
        buffer[0].im = 0.0;
        if n_fft % 2 == 0 {
            buffer[n_fft / 2].im = 0.0;
        }
        ifft.process(&mut buffer);

        let start = frame_idx * hop_length;
        for i in 0..n_fft {
            signal[start + i] += buffer[i].re * scale * window[i];
            window_sum[start + i] += window[i] * window[i];
        }
    }

    for (value, norm) in signal.iter_mut().zip(&window_sum) {
        if *norm > f32::MIN_POSITIVE {
            *value /= norm;
        }
    }

    let offset = n_fft / 2;
    let mut output: Vec<f32> = signal.into_iter().skip(offset).take(length).collect();
    output.resize(length, 0.0);
    output
}

/// Stretches `frames` in time by `1 / rate`, keeping per-bin phase advance
/// consistent so pitch is preserved.
pub fn phase_vocoder(frames: &[Frame], rate: f32, hop_length: usize) -> Vec<Frame> {
    let Some(first) = frames.first() else {
        return Vec::new();
    };
    if !rate.is_finite() || rate <= 0.0 {
        return Vec::new();
    }
    let n_bins = first.len();
    let n_fft = 2 * (n_bins - 1);

    let steps: Vec<f32> = (0..)
        .map(|i| i as f32 * rate)
        .take_while(|&step| step < frames.len() as f32)
        .collect();

    let expected_advance: Vec<f32> = (0..n_bins)
        .map(|k| 2.0 * PI * hop_length as f32 * k as f32 / n_fft as f32)
        .collect();

    let silent = vec![Complex::new(0.0f32, 0.0); n_bins];
    let column = |idx: usize| frames.get(idx).unwrap_or(&silent);

    let mut phase: Vec<f32> = first.iter().map(|c| c.arg()).collect();
    let mut stretched = Vec::with_capacity(steps.len());

    for step in steps {
        let idx = step.floor() as usize;
        let alpha = step.fract();
        let (left, right) = (column(idx), column(idx + 1));

        let frame: Frame = (0..n_bins)
            .map(|k| {
                let magnitude = (1.0 - alpha) * left[k].norm() + alpha * right[k].norm();
                Complex::from_polar(magnitude, phase[k])
            })
            .collect();
        stretched.push(frame);

        for k in 0..n_bins {
            let mut delta = right[k].arg() - left[k].arg() - expected_advance[k];
            delta -= 2.0 * PI * (delta / (2.0 * PI)).round();
            phase[k] += expected_advance[k] + delta;
        }
    }

    stretched
}
