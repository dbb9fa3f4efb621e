//! Configuration system
//!
//! [`PhysicsConfig`] replaces the global physics-manager accessors: it carries
//! gravity, friction and resolution constants and is handed to every tick
//! through [`crate::physics::TickContext`].

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec3;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is outside its allowed range
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        /// Offending field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// # Physics Configuration
///
/// Global simulation constants. Gravity is applied as `gravity * gravity_direction`
/// each tick to every live body that opted into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity magnitude
    pub gravity: f32,
    /// Gravity direction (expected to be unit length)
    pub gravity_direction: Vec3,
    /// Velocity removed from the x component each tick
    pub friction: f32,
    /// Velocities inside `(-threshold, threshold)` on x snap to zero
    pub friction_threshold: f32,
    /// Induced torques at or below this magnitude are dropped
    pub torque_threshold: f32,
    /// Coefficient of restitution used when resolving contacts
    pub restitution: f32,
    /// Apply impulses to colliding pairs after detection
    pub resolve_collisions: bool,
    /// Share of the penetration pushed out per tick
    pub correction_percent: f32,
    /// Penetration tolerated without positional correction
    pub penetration_slop: f32,
    /// Emit debug handles for every body each tick
    pub draw_handles: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            gravity_direction: Vec3::new(0.0, -1.0, 0.0),
            friction: 0.002,
            friction_threshold: 0.005,
            torque_threshold: 0.001,
            restitution: 0.5,
            resolve_collisions: true,
            correction_percent: 0.8,
            penetration_slop: 0.01,
            draw_handles: false,
        }
    }
}

impl Config for PhysicsConfig {}

impl PhysicsConfig {
    /// Gravity as an acceleration vector
    pub fn gravity_vector(&self) -> Vec3 {
        self.gravity_direction * self.gravity
    }

    /// Check the configured constants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity_direction.norm_squared() <= f32::EPSILON {
            return Err(ConfigError::Invalid {
                field: "gravity_direction",
                reason: "must not be the zero vector".to_string(),
            });
        }

        let non_negative = [
            ("friction", self.friction),
            ("friction_threshold", self.friction_threshold),
            ("torque_threshold", self.torque_threshold),
            ("restitution", self.restitution),
            ("correction_percent", self.correction_percent),
            ("penetration_slop", self.penetration_slop),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a non-negative number, got {value}"),
                });
            }
        }

        Ok(())
    }
}
