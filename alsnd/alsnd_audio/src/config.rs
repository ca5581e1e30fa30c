use crate::sound::sanitize_volume;
use alsnd_cfg::Config;
use std::path::{Path, PathBuf};

const DEFAULT_SOUNDS_ROOT: &str = "assets/sounds";

#[derive(Clone, Debug, PartialEq)]
pub struct Sound_Manager_Config {
    /// Directory the `file` arguments of the load calls are relative to.
    pub sounds_root: Box<Path>,
    /// Gain given to every newly loaded sound.
    pub default_volume: f32,
    /// None opens the default output device.
    pub device_name: Option<String>,
}

impl Default for Sound_Manager_Config {
    fn default() -> Self {
        Sound_Manager_Config {
            sounds_root: PathBuf::from(DEFAULT_SOUNDS_ROOT).into_boxed_path(),
            default_volume: 1.0,
            device_name: None,
        }
    }
}

impl Sound_Manager_Config {
    pub fn with_sounds_root(sounds_root: &Path) -> Self {
        Sound_Manager_Config {
            sounds_root: sounds_root.into(),
            ..Self::default()
        }
    }

    /// Reads the `audio/*` cfg vars, using the default for any that's missing.
    pub fn from_cfg(cfg: &Config) -> Self {
        let defaults = Self::default();
        let sounds_root = cfg
            .read_string("audio/sounds_root")
            .map_or(defaults.sounds_root, |root| {
                PathBuf::from(root).into_boxed_path()
            });
        let default_volume = cfg
            .read_f32("audio/default_volume")
            .and_then(sanitize_volume)
            .unwrap_or(defaults.default_volume);
        let device_name = cfg.read_string("audio/device").map(String::from);

        Sound_Manager_Config {
            sounds_root,
            default_volume,
            device_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cfg_gives_defaults() {
        let cfg = Config::new_from_str("");
        assert_eq!(Sound_Manager_Config::from_cfg(&cfg), Sound_Manager_Config::default());
    }

    #[test]
    fn reads_audio_section() {
        let cfg = Config::new_from_str(
            "/audio\nsounds_root res/sfx\ndefault_volume 0.25\ndevice Null Audio Device\n",
        );
        let mgr_cfg = Sound_Manager_Config::from_cfg(&cfg);
        assert_eq!(&*mgr_cfg.sounds_root, Path::new("res/sfx"));
        assert_approx_eq!(mgr_cfg.default_volume, 0.25f32);
        assert_eq!(mgr_cfg.device_name.as_deref(), Some("Null Audio Device"));
    }

    #[test]
    fn default_volume_is_clamped() {
        let cfg = Config::new_from_str("/audio\ndefault_volume 3\n");
        assert_approx_eq!(Sound_Manager_Config::from_cfg(&cfg).default_volume, 1.0f32);
    }
}
