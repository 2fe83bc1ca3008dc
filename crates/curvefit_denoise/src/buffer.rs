//! Sample buffers with sample-rate and channel metadata.

use crate::DenoiseError;

/// Interleaved samples plus the metadata needed to write them back out.
///
/// Multi-channel data is stored frame by frame: for two channels the layout
/// is `L0 R0 L1 R1 ...`.
///
/// # Example
///
/// ```
/// use curvefit_denoise::SampleBuffer;
///
/// let stereo = SampleBuffer::new(vec![1.0, 3.0, 2.0, 4.0], 44_100, 2).unwrap();
/// let mono = stereo.to_mono();
/// assert_eq!(mono.samples(), &[2.0, 3.0]);
///
/// let back = mono.upmix(2).unwrap();
/// assert_eq!(back.samples(), &[2.0, 2.0, 3.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    sample_rate: u32,
    channels: u16,
}

impl SampleBuffer {
    /// Wrap interleaved samples.
    ///
    /// # Errors
    ///
    /// `InvalidBuffer` when `channels` or `sample_rate` is zero, or the
    /// sample count is not a whole number of frames.
    pub fn new(samples: Vec<f64>, sample_rate: u32, channels: u16) -> Result<Self, DenoiseError> {
        if channels == 0 {
            return Err(DenoiseError::InvalidBuffer(
                "channel count must be at least 1".to_string(),
            ));
        }
        if sample_rate == 0 {
            return Err(DenoiseError::InvalidBuffer(
                "sample rate must be positive".to_string(),
            ));
        }
        if samples.len() % channels as usize != 0 {
            return Err(DenoiseError::InvalidBuffer(format!(
                "{} samples do not divide into {} channels",
                samples.len(),
                channels
            )));
        }
        Ok(Self {
            samples,
            sample_rate,
            channels,
        })
    }

    /// A single-channel buffer.
    pub fn mono(samples: Vec<f64>, sample_rate: u32) -> Result<Self, DenoiseError> {
        Self::new(samples, sample_rate, 1)
    }

    /// Interleaved samples.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Samples per second per channel.
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of interleaved channels.
    #[inline]
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of frames (samples per channel).
    #[inline]
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Returns true if the buffer holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// Average all channels of each frame into one sample.
    pub fn to_mono(&self) -> SampleBuffer {
        let channels = self.channels as usize;
        let samples = if channels == 1 {
            self.samples.clone()
        } else {
            self.samples
                .chunks_exact(channels)
                .map(|frame| frame.iter().sum::<f64>() / channels as f64)
                .collect()
        };
        SampleBuffer {
            samples,
            sample_rate: self.sample_rate,
            channels: 1,
        }
    }

    /// Duplicate each sample of a mono buffer into `channels` channels.
    ///
    /// # Errors
    ///
    /// `InvalidBuffer` if this buffer is not mono or `channels` is zero.
    pub fn upmix(&self, channels: u16) -> Result<SampleBuffer, DenoiseError> {
        if self.channels != 1 {
            return Err(DenoiseError::InvalidBuffer(format!(
                "only mono buffers can be up-mixed, this one has {} channels",
                self.channels
            )));
        }
        let samples = self
            .samples
            .iter()
            .flat_map(|&s| std::iter::repeat(s).take(channels as usize))
            .collect();
        SampleBuffer::new(samples, self.sample_rate, channels)
    }
}
