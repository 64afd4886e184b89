use serde::{Deserialize, Serialize};

use crate::ControllerError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Pull distance that is ignored before progress starts to accumulate.
    pub rest_distance: f32,
    /// When false, every padding change is delivered as `Immediate`.
    pub animate_padding: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            rest_distance: 0.0,
            animate_padding: true,
        }
    }
}

impl RefreshConfig {
    pub fn validate(&self) -> Result<(), ControllerError> {
        if !self.rest_distance.is_finite() || self.rest_distance < 0.0 {
            return Err(ControllerError::InvalidRestDistance(self.rest_distance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_rest_distance() {
        let config = RefreshConfig {
            rest_distance: -1.0,
            ..RefreshConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ControllerError::InvalidRestDistance(-1.0))
        );
        assert!(RefreshConfig::default().validate().is_ok());
    }
}
