use anyhow::{Context, Result};
use cgmath::{vec3, Vector3};
use serde::{Deserialize, Serialize};
use std::path::Path;
use transporter::{PhysicsWorld, SceneBuilder, TeleportConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub teleport: TeleportConfig,
    pub scene: SceneConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub floor_height: f32,
    pub floor_size: f32,
    pub walls: Vec<WallConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallConfig {
    pub center: [f32; 3],
    pub half_extents: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            floor_height: 0.0,
            floor_size: 120.0,
            walls: Vec::new(),
        }
    }
}

impl SceneConfig {
    pub fn build(&self) -> PhysicsWorld {
        self.walls
            .iter()
            .fold(
                SceneBuilder::new().with_floor(self.floor_height, self.floor_size),
                |builder, wall| {
                    builder.with_wall(to_vec(wall.center), to_vec(wall.half_extents))
                },
            )
            .build()
    }
}

fn to_vec(v: [f32; 3]) -> Vector3<f32> {
    vec3(v[0], v[1], v[2])
}

impl SimConfig {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: SimConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}
