/// Mono PCM samples in `[-1.0, 1.0]` at a fixed sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl SampleBuffer {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
