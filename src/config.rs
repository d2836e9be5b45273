// Render settings shared by the library and the viewer binary.

/// Screen geometry and column sub-sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Frame width in pixels; also the number of arcs in the 60° view.
    pub width: usize,
    pub height: usize,
    /// Pixels per cast ray. Larger is faster and blockier.
    pub stride: usize,
    /// Overhead map cell size in pixels, 0 disables it.
    pub minimap_scale: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 400,
            stride: 5,
            minimap_scale: 5,
        }
    }
}

/// Rejected render settings.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("screen width must be positive")]
    ZeroWidth,

    /// Arc constants are derived by halving the width.
    #[error("screen width {0} must be even")]
    OddWidth(usize),

    #[error("screen height must be positive")]
    ZeroHeight,

    #[error("column stride {stride} must be within 1..={width}")]
    BadStride { stride: usize, width: usize },
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.width % 2 != 0 {
            return Err(ConfigError::OddWidth(self.width));
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.stride == 0 || self.stride > self.width {
            return Err(ConfigError::BadStride {
                stride: self.stride,
                width: self.width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(RenderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_geometry() {
        let base = RenderConfig::default();
        let cases = [
            (RenderConfig { width: 0, ..base }, ConfigError::ZeroWidth),
            (RenderConfig { width: 641, ..base }, ConfigError::OddWidth(641)),
            (RenderConfig { height: 0, ..base }, ConfigError::ZeroHeight),
            (
                RenderConfig { stride: 0, ..base },
                ConfigError::BadStride { stride: 0, width: 640 },
            ),
            (
                RenderConfig { stride: 700, ..base },
                ConfigError::BadStride { stride: 700, width: 640 },
            ),
        ];
        for (cfg, err) in cases {
            assert_eq!(cfg.validate(), Err(err));
        }
    }
}
