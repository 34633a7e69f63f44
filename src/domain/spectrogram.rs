const AMIN: f32 = 1e-5;

/// STFT magnitudes laid out as `frames[frame][bin]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    pub frames: Vec<Vec<f32>>,
    pub sample_rate: u32,
    pub n_fft: usize,
    pub hop_length: usize,
}

impl Spectrogram {
    pub fn n_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn n_bins(&self) -> usize {
        self.n_fft / 2 + 1
    }

    pub fn peak(&self) -> f32 {
        self.frames
            .iter()
            .flat_map(|frame| frame.iter().copied())
            .fold(0.0f32, f32::max)
    }

    /// Converts magnitudes to decibels relative to this spectrogram's own peak.
    ///
    /// `20·log10(max(amin, S)) - 20·log10(max(amin, peak))`, then every value is
    /// floored at `max_db - top_db`.
    pub fn to_decibels(&self, top_db: f32) -> DecibelSpectrogram {
        let reference = 20.0 * self.peak().max(AMIN).log10();

        let mut frames: Vec<Vec<f32>> = self
            .frames
            .iter()
            .map(|frame| {
                frame
                    .iter()
                    .map(|&m| 20.0 * m.max(AMIN).log10() - reference)
                    .collect()
            })
            .collect();

        let max_db = frames
            .iter()
            .flat_map(|f| f.iter().copied())
            .fold(f32::NEG_INFINITY, f32::max);

        if max_db.is_finite() {
            let floor = max_db - top_db;
            for value in frames.iter_mut().flat_map(|f| f.iter_mut()) {
                *value = value.max(floor);
            }
        }

        DecibelSpectrogram {
            frames,
            sample_rate: self.sample_rate,
            n_fft: self.n_fft,
            hop_length: self.hop_length,
        }
    }
}

/// Decibel-scaled spectrogram, 0 dB at the source's peak.
#[derive(Debug, Clone, PartialEq)]
pub struct DecibelSpectrogram {
    pub frames: Vec<Vec<f32>>,
    pub sample_rate: u32,
    pub n_fft: usize,
    pub hop_length: usize,
}

impl DecibelSpectrogram {
    pub fn n_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn n_bins(&self) -> usize {
        self.n_fft / 2 + 1
    }

    /// `(min, max)` over all cells, `(0, 0)` when empty.
    pub fn range(&self) -> (f32, f32) {
        let mut cells = self.frames.iter().flat_map(|f| f.iter().copied());
        let Some(first) = cells.next() else {
            return (0.0, 0.0);
        };
        cells.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    /// Time covered by the frame grid, in seconds.
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        (self.n_frames() * self.hop_length) as f32 / self.sample_rate as f32
    }

    pub fn nyquist_hz(&self) -> f32 {
        self.sample_rate as f32 / 2.0
    }
}
