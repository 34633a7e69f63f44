use crate::domain::{Operation, OperationOutput, Payload};

use super::audio_pipeline::AudioPipeline;
use super::image_pipeline::ImagePipeline;
use super::pipeline_error::PipelineError;
use super::text_pipeline::TextPipeline;

/// Routes an `(operation, payload)` pair to the pipeline for the payload's modality.
///
/// Runs synchronously; callers on an async runtime should move it onto a
/// blocking thread.
pub struct MediaDispatcher {
    text: TextPipeline,
    image: ImagePipeline,
    audio: AudioPipeline,
}

impl MediaDispatcher {
    pub fn new(text: TextPipeline, image: ImagePipeline, audio: AudioPipeline) -> Self {
        Self { text, image, audio }
    }

    pub fn text(&self) -> &TextPipeline {
        &self.text
    }

    pub fn image(&self) -> &ImagePipeline {
        &self.image
    }

    pub fn audio(&self) -> &AudioPipeline {
        &self.audio
    }

    pub fn dispatch(
        &self,
        operation: Operation,
        payload: Payload,
    ) -> Result<OperationOutput, PipelineError> {
        tracing::debug!(
            operation = %operation,
            modality = %payload.modality(),
            payload_bytes = payload.len(),
            "Dispatching media operation"
        );

        let output = match (operation, payload) {
            (Operation::Process, Payload::Text(text)) => {
                OperationOutput::Tokens(self.text.tokenize(&text))
            }
            (Operation::Augment, Payload::Text(text)) => {
                OperationOutput::AugmentedText(self.text.augment(&text))
            }
            (Operation::Process, Payload::Image(bytes)) => {
                OperationOutput::ProcessedImage(self.image.process(&bytes)?)
            }
            (Operation::Augment, Payload::Image(bytes)) => {
                OperationOutput::ImageVariants(self.image.augment(&bytes)?)
            }
            (Operation::Process, Payload::Audio(bytes)) => {
                OperationOutput::AudioAnalysis(self.audio.process(&bytes)?)
            }
            (Operation::Augment, Payload::Audio(bytes)) => {
                OperationOutput::PitchShifted(self.audio.augment(&bytes)?)
            }
        };

        Ok(output)
    }
}
