use std::io::Cursor;

use augmenta::application::ports::{AudioCodec, AudioError};
use augmenta::domain::SampleBuffer;
use augmenta::infrastructure::audio::{DEFAULT_SAMPLE_RATE, PcmAudioCodec};

use crate::helpers::fixtures::{
    SAMPLE_RATE, assert_close, dominant_frequency, read_wav, sine, wav_bytes,
};

fn stereo_wav(left: f32, right: f32, frames: usize, sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut bytes = Vec::new();
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
        for _ in 0..frames {
            writer.write_sample((left * i16::MAX as f32) as i16).unwrap();
            writer.write_sample((right * i16::MAX as f32) as i16).unwrap();
        }
        writer.finalize().unwrap();
    }
    bytes
}

#[test]
fn given_default_codec_when_inspecting_then_targets_22050() {
    assert_eq!(DEFAULT_SAMPLE_RATE, 22_050);
}

#[test]
fn given_mono_wav_at_target_rate_when_decoding_then_samples_pass_through() {
    let samples = sine(440.0, SAMPLE_RATE, 2_000, 0.5);

    let buffer = PcmAudioCodec::default()
        .decode(&wav_bytes(&samples, SAMPLE_RATE))
        .unwrap();

    assert_eq!(buffer.sample_rate, SAMPLE_RATE);
    assert_eq!(buffer.len(), samples.len());
    for (decoded, original) in buffer.samples.iter().zip(&samples) {
        assert!((decoded - original).abs() < 1e-3);
    }
}

#[test]
fn given_stereo_wav_when_decoding_then_channels_are_averaged() {
    let buffer = PcmAudioCodec::new(None)
        .decode(&stereo_wav(0.5, 0.1, 1_000, 16_000))
        .unwrap();

    assert_eq!(buffer.sample_rate, 16_000);
    assert_eq!(buffer.len(), 1_000);
    assert!(buffer.samples.iter().all(|s| (s - 0.3).abs() < 1e-3));
}

#[test]
fn given_44100_wav_when_decoding_then_resampled_to_target_rate() {
    let samples = sine(440.0, 44_100, 44_100, 0.5);

    let buffer = PcmAudioCodec::default()
        .decode(&wav_bytes(&samples, 44_100))
        .unwrap();

    assert_eq!(buffer.sample_rate, SAMPLE_RATE);
    assert_eq!(buffer.len(), 22_050);
    assert_close(dominant_frequency(&buffer.samples, SAMPLE_RATE), 440.0, 0.03);
}

#[test]
fn given_native_rate_codec_when_decoding_then_source_rate_is_kept() {
    let buffer = PcmAudioCodec::new(None)
        .decode(&wav_bytes(&sine(200.0, 8_000, 800, 0.5), 8_000))
        .unwrap();

    assert_eq!(buffer.sample_rate, 8_000);
    assert_eq!(buffer.len(), 800);
}

#[test]
fn given_non_audio_bytes_when_decoding_then_unsupported_format() {
    let result = PcmAudioCodec::default().decode(b"GIF89a not audio at all");

    assert!(matches!(result, Err(AudioError::UnsupportedFormat(_))));
}

#[test]
fn given_wav_without_samples_when_decoding_then_error() {
    assert!(PcmAudioCodec::default().decode(&wav_bytes(&[], SAMPLE_RATE)).is_err());
}

#[test]
fn given_out_of_range_samples_when_encoding_then_clamped_to_full_scale() {
    let buffer = SampleBuffer::new(vec![0.0, 1.0, -1.0, 2.5, -3.0], 11_025);

    let wav = PcmAudioCodec::default().encode_wav(&buffer).unwrap();

    let (spec, samples) = read_wav(&wav);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_rate, 11_025);
    assert_eq!(samples, vec![0.0, 1.0, -1.0, 1.0, -1.0]);
}
