use crate::CONFY_APP_NAME;
use crate::camera::CameraConfig;
use crate::camera::view::{FOV_MAX, FOV_MIN, PITCH_LIMIT};
use crate::error::FlycamError;

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("fov bounds ({min}, {max}) must satisfy 1 <= min <= max <= 45")]
    FovBounds { min: f32, max: f32 },
    #[error("pitch limit {0} must be within (0, 89]")]
    PitchLimit(f32),
    #[error("clip planes near={near} far={far} must satisfy 0 < near < far")]
    ClipPlanes { near: f32, far: f32 },
    #[error("window size {width}x{height} must be non-zero")]
    WindowSize { width: u32, height: u32 },
}

fn positive(name: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NotPositive { name, value })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub mouse_sensitivity: f32,
    pub scroll_sensitivity: f32,
    pub move_speed: f32,
    pub lock_to_horizontal_plane: bool,
    pub invert_pitch: bool,
    pub fov_min: f32,
    pub fov_max: f32,
    pub pitch_limit: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        let config = CameraConfig::default();
        Self {
            mouse_sensitivity: config.sensitivity,
            scroll_sensitivity: config.scroll_sensitivity,
            move_speed: config.base_speed,
            lock_to_horizontal_plane: config.lock_to_horizontal_plane,
            invert_pitch: config.invert_pitch,
            fov_min: config.fov_bounds.0,
            fov_max: config.fov_bounds.1,
            pitch_limit: config.pitch_limit,
        }
    }
}

impl CameraSettings {
    pub fn load() -> Self {
        validated_or_default("camera", read_section("camera"), Self::validate)
    }

    pub fn try_load() -> Result<Self, FlycamError> {
        let loaded = read_section::<Self>("camera")?;
        loaded
            .validate()
            .map_err(|e| FlycamError::from(e).with_arg("section", "camera"))?;
        Ok(loaded)
    }

    pub fn save(&self) -> Result<(), FlycamError> {
        write_section("camera", self)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("mouse_sensitivity", self.mouse_sensitivity)?;
        positive("scroll_sensitivity", self.scroll_sensitivity)?;
        positive("move_speed", self.move_speed)?;
        if !(FOV_MIN <= self.fov_min && self.fov_min <= self.fov_max && self.fov_max <= FOV_MAX) {
            return Err(SettingsError::FovBounds {
                min: self.fov_min,
                max: self.fov_max,
            });
        }
        if !(self.pitch_limit > 0.0 && self.pitch_limit <= PITCH_LIMIT) {
            return Err(SettingsError::PitchLimit(self.pitch_limit));
        }
        Ok(())
    }
}

impl From<&CameraSettings> for CameraConfig {
    fn from(settings: &CameraSettings) -> Self {
        CameraConfig {
            sensitivity: settings.mouse_sensitivity,
            scroll_sensitivity: settings.scroll_sensitivity,
            base_speed: settings.move_speed,
            lock_to_horizontal_plane: settings.lock_to_horizontal_plane,
            invert_pitch: settings.invert_pitch,
            fov_bounds: (settings.fov_min, settings.fov_max),
            pitch_limit: settings.pitch_limit,
        }
        .clamped()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Flycam".to_string(),
            width: 800,
            height: 600,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}

impl WindowSettings {
    pub fn load() -> Self {
        validated_or_default("window", read_section("window"), Self::validate)
    }

    pub fn try_load() -> Result<Self, FlycamError> {
        let loaded = read_section::<Self>("window")?;
        loaded
            .validate()
            .map_err(|e| FlycamError::from(e).with_arg("section", "window"))?;
        Ok(loaded)
    }

    pub fn save(&self) -> Result<(), FlycamError> {
        write_section("window", self)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::WindowSize {
                width: self.width,
                height: self.height,
            });
        }
        let (near, far) = (self.near_plane, self.far_plane);
        if !(near.is_finite() && far.is_finite() && near > 0.0 && near < far) {
            return Err(SettingsError::ClipPlanes { near, far });
        }
        Ok(())
    }
}

fn read_section<T>(name: &'static str) -> Result<T, FlycamError>
where
    T: Serialize + DeserializeOwned + Default,
{
    confy::load(CONFY_APP_NAME, name)
        .map_err(|e| FlycamError::from(e).with_arg("section", name))
}

fn write_section<T: Serialize>(name: &'static str, value: &T) -> Result<(), FlycamError> {
    confy::store(CONFY_APP_NAME, name, value)
        .map_err(|e| FlycamError::from(e).with_arg("section", name))?;
    info!("{name} settings saved");
    Ok(())
}

/// Falls back to defaults when a section could not be read or does not validate.
fn validated_or_default<T: Default>(
    name: &str,
    loaded: Result<T, FlycamError>,
    validate: impl Fn(&T) -> Result<(), SettingsError>,
) -> T {
    let loaded = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("failed to load {name} settings, using defaults: {e}");
            return T::default();
        }
    };
    match validate(&loaded) {
        Ok(()) => loaded,
        Err(e) => {
            warn!("invalid {name} settings, using defaults: {e}");
            T::default()
        }
    }
}

// Aggregate struct for convenience
pub struct Settings {
    pub camera: CameraSettings,
    pub window: WindowSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            camera: CameraSettings::load(),
            window: WindowSettings::load(),
        }
    }

    /// Like [`Settings::load`] but reports unreadable or invalid sections.
    pub fn try_load() -> Result<Self, FlycamError> {
        Ok(Self {
            camera: CameraSettings::try_load()?,
            window: WindowSettings::try_load()?,
        })
    }

    pub fn save(&self) -> Result<(), FlycamError> {
        self.camera.save()?;
        self.window.save()
    }
}
