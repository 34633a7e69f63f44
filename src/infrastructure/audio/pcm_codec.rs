use std::io::Cursor;

use symphonia::core::audio::SampleBuffer as DecodedSamples;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioCodec, AudioError};
use crate::domain::SampleBuffer;

use super::resampler::resample;

pub const DEFAULT_SAMPLE_RATE: u32 = 22_050;

/// Decodes any container symphonia can probe into mono `f32` PCM and writes
/// 16-bit PCM WAV with `hound`.
#[derive(Debug, Clone, Copy)]
pub struct PcmAudioCodec {
    target_sample_rate: Option<u32>,
}

impl PcmAudioCodec {
    /// `None` keeps each input's native sample rate.
    pub fn new(target_sample_rate: Option<u32>) -> Self {
        Self { target_sample_rate }
    }

    fn decode_native(&self, data: &[u8]) -> Result<(Vec<f32>, u32), AudioError> {
        let cursor = Cursor::new(data.to_vec());
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        let probed = symphonia::default::get_probe()
            .format(
                &Hint::new(),
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::UnsupportedFormat(format!("probe: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| AudioError::DecodingFailed("no audio track found".to_string()))?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let mut source_rate = codec_params.sample_rate;

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::UnsupportedFormat(format!("codec: {}", e)))?;

        let mut mono: Vec<f32> = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                Err(symphonia::core::errors::Error::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(AudioError::DecodingFailed(format!("packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(d) => d,
                Err(symphonia::core::errors::Error::DecodeError(e)) => {
                    tracing::warn!(error = %e, "Skipping corrupt audio frame");
                    continue;
                }
                Err(e) => {
                    return Err(AudioError::DecodingFailed(format!("decode: {}", e)));
                }
            };

            let spec = *decoded.spec();
            let num_frames = decoded.frames();
            if num_frames == 0 {
                continue;
            }
            source_rate.get_or_insert(spec.rate);
            let channels = spec.channels.count().max(1);

            let mut interleaved = DecodedSamples::<f32>::new(num_frames as u64, spec);
            interleaved.copy_interleaved_ref(decoded);

            mono.extend(
                interleaved
                    .samples()
                    .chunks(channels)
                    .map(|frame| frame.iter().sum::<f32>() / channels as f32),
            );
        }

        if mono.is_empty() {
            return Err(AudioError::DecodingFailed(
                "no audio samples decoded".to_string(),
            ));
        }

        let source_rate = source_rate
            .ok_or_else(|| AudioError::DecodingFailed("unknown sample rate".to_string()))?;

        Ok((mono, source_rate))
    }
}

impl Default for PcmAudioCodec {
    fn default() -> Self {
        Self::new(Some(DEFAULT_SAMPLE_RATE))
    }
}

impl AudioCodec for PcmAudioCodec {
    fn decode(&self, bytes: &[u8]) -> Result<SampleBuffer, AudioError> {
        let (samples, source_rate) = self.decode_native(bytes)?;

        let buffer = match self.target_sample_rate {
            Some(target) if target != source_rate => {
                SampleBuffer::new(resample(&samples, source_rate, target)?, target)
            }
            _ => SampleBuffer::new(samples, source_rate),
        };

        tracing::debug!(
            source_rate,
            sample_rate = buffer.sample_rate,
            samples = buffer.len(),
            "Audio decoded to mono PCM"
        );

        Ok(buffer)
    }

    fn encode_wav(&self, buffer: &SampleBuffer) -> Result<Vec<u8>, AudioError> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: buffer.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut bytes = Vec::new();
        {
            let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec)
                .map_err(|e| AudioError::EncodingFailed(e.to_string()))?;
            for &sample in &buffer.samples {
                let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
                writer
                    .write_sample(value)
                    .map_err(|e| AudioError::EncodingFailed(e.to_string()))?;
            }
            writer
                .finalize()
                .map_err(|e| AudioError::EncodingFailed(e.to_string()))?;
        }

        Ok(bytes)
    }
}
