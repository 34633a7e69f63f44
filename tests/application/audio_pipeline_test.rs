use augmenta::application::ports::AudioError;
use augmenta::domain::SampleBuffer;

use crate::helpers::fixtures::{
    SAMPLE_RATE, assert_close, dominant_frequency, read_wav, sine, sine_wav, test_audio_pipeline,
    wav_bytes,
};

#[test]
fn given_one_second_sine_when_extracting_features_then_values_match_signal() {
    let pipeline = test_audio_pipeline();
    let buffer = SampleBuffer::new(sine(440.0, SAMPLE_RATE, SAMPLE_RATE as usize, 0.5), SAMPLE_RATE);

    let features = pipeline.features(&buffer).unwrap();

    assert!((features.duration_secs - 1.0).abs() < 1e-12);
    assert!((features.mean_frequency_hz - SAMPLE_RATE as f64 / 4.0).abs() < 1e-3);
    assert!(features.max_amplitude <= 0.5 + 1e-6);
    assert!(features.max_amplitude > 0.49);
    assert!((features.rms_energy - 0.5 / 2f64.sqrt()).abs() < 1e-3);
    assert!(features.rms_energy <= features.max_amplitude);
}

#[test]
fn given_440hz_sine_when_extracting_features_then_zero_crossing_rate_tracks_frequency() {
    let pipeline = test_audio_pipeline();
    let buffer = SampleBuffer::new(sine(440.0, SAMPLE_RATE, SAMPLE_RATE as usize, 0.5), SAMPLE_RATE);

    let features = pipeline.features(&buffer).unwrap();

    // Two crossings per period.
    let expected = 2.0 * 440.0 / SAMPLE_RATE as f64;
    assert!((features.zero_crossing_rate - expected).abs() < 0.005);
}

#[test]
fn given_empty_buffer_when_extracting_features_then_error() {
    let result = test_audio_pipeline().features(&SampleBuffer::new(Vec::new(), SAMPLE_RATE));

    assert!(matches!(result, Err(AudioError::ProcessingFailed(_))));
}

#[test]
fn given_wav_when_processing_then_spectrogram_and_features_come_from_same_buffer() {
    let analysis = test_audio_pipeline().process(&sine_wav(440.0, 0.5)).unwrap();

    let png = image::load_from_memory(&analysis.spectrogram_png).unwrap();
    assert_eq!((png.width(), png.height()), (1000, 400));
    assert!((analysis.features.duration_secs - 0.5).abs() < 1e-3);
}

#[test]
fn given_sine_when_shifting_up_four_semitones_then_length_is_kept_and_pitch_rises() {
    let pipeline = test_audio_pipeline();
    let buffer = SampleBuffer::new(sine(440.0, SAMPLE_RATE, SAMPLE_RATE as usize, 0.5), SAMPLE_RATE);

    let shifted = pipeline.pitch_shift(&buffer, 4.0).unwrap();

    assert_eq!(shifted.len(), buffer.len());
    assert_eq!(shifted.sample_rate, SAMPLE_RATE);
    assert_close(
        dominant_frequency(&shifted.samples, SAMPLE_RATE),
        440.0 * 2f32.powf(4.0 / 12.0),
        0.03,
    );
}

#[test]
fn given_sine_when_shifting_up_then_down_then_original_pitch_returns() {
    let pipeline = test_audio_pipeline();
    let buffer = SampleBuffer::new(sine(440.0, SAMPLE_RATE, SAMPLE_RATE as usize, 0.5), SAMPLE_RATE);

    let up = pipeline.pitch_shift(&buffer, 4.0).unwrap();
    let back = pipeline.pitch_shift(&up, -4.0).unwrap();

    assert_eq!(back.len(), buffer.len());
    assert_close(dominant_frequency(&back.samples, SAMPLE_RATE), 440.0, 0.03);
}

#[test]
fn given_wav_when_augmenting_then_high_and_low_move_in_opposite_directions() {
    let pair = test_audio_pipeline().augment(&sine_wav(440.0, 1.0)).unwrap();

    let (high_spec, high) = read_wav(&pair.high);
    let (low_spec, low) = read_wav(&pair.low);

    assert_eq!(high_spec.sample_rate, SAMPLE_RATE);
    assert_eq!(low_spec.sample_rate, SAMPLE_RATE);
    assert_eq!(high.len(), SAMPLE_RATE as usize);
    assert_eq!(low.len(), SAMPLE_RATE as usize);

    assert!(dominant_frequency(&high, SAMPLE_RATE) > 500.0);
    assert!(dominant_frequency(&low, SAMPLE_RATE) < 380.0);
}

#[test]
fn given_silence_when_augmenting_then_outputs_stay_silent() {
    let silence = wav_bytes(&vec![0.0; 4096], SAMPLE_RATE);

    let pair = test_audio_pipeline().augment(&silence).unwrap();

    let (_, high) = read_wav(&pair.high);
    assert_eq!(high.len(), 4096);
    assert!(high.iter().all(|s| s.abs() < 1e-3));
}

#[test]
fn given_out_of_range_shift_when_pitch_shifting_then_error() {
    let buffer = SampleBuffer::new(vec![0.1; 1024], SAMPLE_RATE);

    let result = test_audio_pipeline().pitch_shift(&buffer, 120.0);

    assert!(matches!(result, Err(AudioError::ProcessingFailed(_))));
}

#[test]
fn given_non_audio_bytes_when_processing_then_unsupported_format() {
    let result = test_audio_pipeline().process(b"this is not a sound file at all");

    assert!(matches!(result, Err(AudioError::UnsupportedFormat(_))));
}
