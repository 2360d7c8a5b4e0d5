use serde::{ Deserialize, Serialize };
use std::path::{ Path, PathBuf };
use std::time::Duration;

use crate::engine::error::{ EngineError, EngineResult };

/// Looked up in the working directory. Optional.
pub const CONFIG_FILE: &str = "orbit-cube.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Preferred MSAA sample count. Falls back to the best available.
    pub samples: u8,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Orbit Cube".to_string(),
            samples: 4,
            vsync: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub radius: f32,
    pub height: f32,
    /// Added to the orbit angle before placing the eye (radians)
    pub phase: f32,
    /// Orbit advance per accepted frame (radians)
    pub step: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            height: 5.0,
            phase: std::f32::consts::FRAC_PI_4,
            step: 0.04,
            fov_degrees: 57.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ShaderConfig {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from("vert.glsl"),
            fragment: PathBuf::from("frag.glsl"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub shaders: ShaderConfig,
    /// Minimum wall-clock gap between rendered frames
    pub frame_interval_secs: f64,
    pub clear_color: [f32; 4],
    /// Draw the small marker cube above the main one
    pub show_marker: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            shaders: ShaderConfig::default(),
            frame_interval_secs: 0.01,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            show_marker: false,
        }
    }
}

impl DemoConfig {
    /// Defaults when the file does not exist; any other problem is fatal.
    pub fn load_or_default(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("[CONFIG] No {} found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(EngineError::FileRead { path: path.to_path_buf(), source });
            }
        };

        let config = Self::from_json(&text).map_err(|reason| EngineError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        log::info!("[CONFIG] Loaded {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(text).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err("window size must be non-zero".into());
        }
        Duration::try_from_secs_f64(self.frame_interval_secs).map_err(|e| {
            format!("frame_interval_secs {} is not a usable interval: {}", self.frame_interval_secs, e)
        })?;
        self.camera.validate()
    }

    /// Zero for an interval `validate` would reject.
    pub fn frame_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.frame_interval_secs).unwrap_or_default()
    }
}

impl CameraConfig {
    fn validate(&self) -> Result<(), String> {
        let fields = [
            ("radius", self.radius),
            ("height", self.height),
            ("phase", self.phase),
            ("step", self.step),
            ("fov_degrees", self.fov_degrees),
            ("near", self.near),
            ("far", self.far),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(format!("camera {} must be a finite number", name));
        }
        // A zero radius puts the eye on the up axis and the look-at degenerates
        if self.radius <= 0.0 {
            return Err("camera radius must be positive".into());
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err("camera fov_degrees must lie strictly between 0 and 180".into());
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err("camera planes must satisfy 0 < near < far".into());
        }
        Ok(())
    }
}
