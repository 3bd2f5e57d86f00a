//! Buffer-size configuration for the stream adapter.

use crate::constants::{DEFAULT_DECODE_BUFFER_SIZE, DEFAULT_ENCODE_BUFFER_SIZE};
use crate::Mode;

/// Requested read sizes per mode.
///
/// Values are requests: the stream adapter still rounds them up to a whole
/// number of groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    pub encode_buffer_size: usize,
    pub decode_buffer_size: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            encode_buffer_size: DEFAULT_ENCODE_BUFFER_SIZE,
            decode_buffer_size: DEFAULT_DECODE_BUFFER_SIZE,
        }
    }
}

impl StreamConfig {
    /// Returns the requested buffer size for `mode`.
    pub fn buffer_size(&self, mode: Mode) -> usize {
        match mode {
            Mode::Encode => self.encode_buffer_size,
            Mode::Decode => self.decode_buffer_size,
        }
    }

    /// Replaces both sizes with `size` when one is given.
    pub fn with_override(self, size: Option<usize>) -> Self {
        match size {
            Some(size) => Self {
                encode_buffer_size: size,
                decode_buffer_size: size,
            },
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StreamConfig::default();
        assert_eq!(config.buffer_size(Mode::Encode), 4500);
        assert_eq!(config.buffer_size(Mode::Decode), 4800);
    }

    #[test]
    fn override_applies_to_both_modes() {
        let config = StreamConfig::default().with_override(Some(7));
        assert_eq!(config.buffer_size(Mode::Encode), 7);
        assert_eq!(config.buffer_size(Mode::Decode), 7);
        assert_eq!(
            StreamConfig::default().with_override(None),
            StreamConfig::default()
        );
    }
}
