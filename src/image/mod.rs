use serde::{Deserialize, Serialize};

/// An owned, channel major buffer of `f64` values. Each channel (density, pressure, a
/// velocity component, a metric component, ...) is stored contiguously, and every
/// channel has the same number of entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    data: Vec<f64>,
    channels: usize,
}

impl Image {
    /// Allocates a zeroed image with `channels` channels of `len` entries each.
    pub fn new(channels: usize, len: usize) -> Self {
        Self {
            data: vec![0.0; channels * len],
            channels,
        }
    }

    pub fn storage(&self) -> &[f64] {
        &self.data
    }

    /// Number of entries per channel.
    pub fn len(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }

        self.data.len() / self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn num_channels(&self) -> usize {
        self.channels
    }

    pub fn channel(&self, channel: usize) -> &[f64] {
        let stride = self.len();
        &self.data[stride * channel..stride * (channel + 1)]
    }

    pub fn channel_mut(&mut self, channel: usize) -> &mut [f64] {
        let stride = self.len();
        &mut self.data[stride * channel..stride * (channel + 1)]
    }

    /// Reads entry `index` of several channels at once.
    pub fn gather<const L: usize>(&self, channels: [usize; L], index: usize) -> [f64; L] {
        let stride = self.len();
        debug_assert!(index < stride);
        channels.map(|channel| self.data[stride * channel + index])
    }

    /// Writes entry `index` of several channels at once.
    pub fn scatter<const L: usize>(
        &mut self,
        channels: [usize; L],
        index: usize,
        values: [f64; L],
    ) {
        let stride = self.len();
        debug_assert!(index < stride);
        for (channel, value) in channels.into_iter().zip(values) {
            self.data[stride * channel + index] = value;
        }
    }

    /// Fills every channel with the given values, one per channel.
    pub fn fill(&mut self, values: &[f64]) {
        assert_eq!(values.len(), self.channels);
        for (channel, &value) in values.iter().enumerate() {
            self.channel_mut(channel).fill(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_layout() {
        let mut image = Image::new(3, 4);
        assert_eq!(image.len(), 4);
        assert_eq!(image.num_channels(), 3);

        image.channel_mut(1).copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);
        image.scatter([0, 2], 3, [-1.0, 9.0]);

        assert_eq!(image.gather([0, 1, 2], 3), [-1.0, 4.0, 9.0]);
        assert_eq!(&image.storage()[4..8], &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(image.storage()[3], -1.0);
        assert_eq!(image.storage()[11], 9.0);
    }

    #[test]
    fn fill_channels() {
        let mut image = Image::new(2, 3);
        image.fill(&[1.0, 2.0]);
        assert_eq!(image.channel(0), &[1.0; 3]);
        assert_eq!(image.channel(1), &[2.0; 3]);

        assert!(Image::default().is_empty());
    }
}
