//! Profile photo source and the confirmation pulse after an upload.

#[cfg(test)]
#[path = "photo_test.rs"]
mod photo_test;

/// Scale applied right after a new photo lands.
pub const PULSE_SCALE: f64 = 1.1;
/// Resting scale.
pub const REST_SCALE: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoState {
    /// Image source: the initial asset path, then a `data:` URL once a file
    /// has been read.
    pub src: String,
    pub scale: f64,
    /// Number of photos loaded so far; keys the pulse reset.
    pub pulse_seq: u64,
}

impl PhotoState {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into(), scale: REST_SCALE, pulse_seq: 0 }
    }

    /// Replace the photo with freshly decoded data and start the pulse.
    /// Returns the sequence to pass to [`Self::settle`].
    pub fn loaded(&mut self, data_url: String) -> u64 {
        self.src = data_url;
        self.scale = PULSE_SCALE;
        self.pulse_seq += 1;
        self.pulse_seq
    }

    /// End of the pulse. Ignored if a newer photo restarted it.
    pub fn settle(&mut self, seq: u64) -> bool {
        if seq != self.pulse_seq {
            return false;
        }
        self.scale = REST_SCALE;
        true
    }

    #[must_use]
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }
}
