use crate::sound::{Sound, Sound_Buffer};
use alsnd_audio_backend::sound as backend_sound;
use alsnd_audio_backend::Audio_Error;
use std::path::{Path, PathBuf};

/// Sequential id of a loaded sound. Ids start from 0 and are never reused
/// by the same Sound_Manager.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sound_Id(u32);

impl Sound_Id {
    pub const INVALID: Sound_Id = Sound_Id(u32::MAX);

    pub const fn from_u32(x: u32) -> Sound_Id {
        Sound_Id(x)
    }

    pub const fn val(self) -> u32 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl std::fmt::Display for Sound_Id {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            write!(f, "#INVALID")
        }
    }
}

pub(crate) struct Loaded_Sound {
    // NOTE: `sound` must be declared before `buffer`: the source has to be released
    // before the buffer it's bound to.
    pub sound: Sound,
    pub buffer: Sound_Buffer,
}

/// Owns every loaded buffer together with its dedicated source, indexed by Sound_Id.
#[derive(Default)]
pub(crate) struct Buffer_Store {
    sounds: Vec<Loaded_Sound>,
}

impl Buffer_Store {
    pub fn load(&mut self, path: &Path, looping: bool) -> Result<Sound_Id, Audio_Error> {
        // -1 since MAX is reserved for the invalid id
        debug_assert!(self.sounds.len() < u32::MAX as usize - 1);

        let buffer = backend_sound::create_sound_buffer(path)?;
        let mut sound = backend_sound::create_sound_with_buffer(&buffer)?;
        backend_sound::set_sound_looping(&mut sound, looping);

        self.sounds.push(Loaded_Sound { sound, buffer });
        Ok(Sound_Id(self.sounds.len() as u32 - 1))
    }

    pub fn get(&self, id: Sound_Id) -> Option<&Loaded_Sound> {
        if id.is_valid() {
            self.sounds.get(id.0 as usize)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, id: Sound_Id) -> Option<&mut Loaded_Sound> {
        if id.is_valid() {
            self.sounds.get_mut(id.0 as usize)
        } else {
            None
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Loaded_Sound> {
        self.sounds.iter_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Loaded_Sound> {
        self.sounds.iter()
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn clear(&mut self) {
        self.sounds.clear();
    }
}

/// `<sounds_root>/<file>.<ext>`, or `<sounds_root>/<file>` if `ext` is empty.
pub fn sound_path(sounds_root: &Path, file: &str, ext: &str) -> Box<Path> {
    let mut s = PathBuf::from(sounds_root);
    if ext.is_empty() {
        s.push(file);
    } else {
        s.push(format!("{}.{}", file, ext));
    }
    s.into_boxed_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsnd_test::test_common::{create_test_sounds_dir, write_test_wav};

    #[test]
    fn sound_path_joins_root_file_and_ext() {
        let root = Path::new("assets/sounds");
        assert_eq!(
            &*sound_path(root, "click", "wav"),
            Path::new("assets/sounds/click.wav")
        );
        assert_eq!(
            &*sound_path(root, "click.ogg", ""),
            Path::new("assets/sounds/click.ogg")
        );
    }

    #[test]
    #[cfg(not(feature = "audio-openal"))]
    fn invalid_id_never_resolves() {
        let dir = create_test_sounds_dir();
        let path = write_test_wav(dir.path(), "coin.wav", 1, 8000, 0.1);

        let mut store = Buffer_Store::default();
        let id = store.load(&path, false).unwrap();
        assert_eq!(id, Sound_Id::from_u32(0));
        assert!(store.get(id).is_some());
        assert!(store.get(Sound_Id::INVALID).is_none());
        assert!(store.get_mut(Sound_Id::from_u32(1)).is_none());
    }

    #[test]
    fn sound_id_display() {
        assert_eq!(Sound_Id::from_u32(3).to_string(), "#3");
        assert_eq!(Sound_Id::INVALID.to_string(), "#INVALID");
    }
}
