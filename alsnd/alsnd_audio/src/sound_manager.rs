use crate::config::Sound_Manager_Config;
use crate::res::{sound_path, Buffer_Store, Loaded_Sound, Sound_Id};
use crate::sound::{self, Audio_Context};
use alsnd_audio_backend::sound as backend_sound;
use alsnd_audio_backend::Audio_Error;
use std::collections::HashMap;
use std::path::Path;

/// Loads sound files into buffers and controls their sources, either by the
/// Sound_Id returned at load time or by a caller-chosen string key.
///
/// Lookups that miss (unknown id or key) are logged and otherwise ignored:
/// play/stop/rewind do nothing and queries return false or None.
pub struct Sound_Manager {
    // NOTE: field order matters. Sources and buffers must be released before the context.
    sounds: Buffer_Store,
    keyed_sounds: HashMap<String, Sound_Id>,
    sounds_root: Box<Path>,
    default_volume: f32,
    audio_ctx: Audio_Context,
}

impl Sound_Manager {
    pub fn new(audio_ctx: Audio_Context, cfg: &Sound_Manager_Config) -> Self {
        Sound_Manager {
            sounds: Buffer_Store::default(),
            keyed_sounds: HashMap::new(),
            sounds_root: cfg.sounds_root.clone(),
            default_volume: sound::sanitize_volume(cfg.default_volume).unwrap_or(1.0),
            audio_ctx,
        }
    }

    /// Opens the configured output device (or the default one) and creates the context.
    pub fn init(cfg: &Sound_Manager_Config) -> Result<Self, Audio_Error> {
        let audio_ctx = backend_sound::init_audio_with_device(cfg.device_name.as_deref())?;
        Ok(Self::new(audio_ctx, cfg))
    }

    /// Releases all sources, buffers and the audio context. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if !self.audio_ctx.is_open() {
            return;
        }
        self.keyed_sounds.clear();
        self.sounds.clear();
        backend_sound::shutdown_audio(&mut self.audio_ctx);
        lok!("Sound manager shut down.");
    }

    pub fn is_shut_down(&self) -> bool {
        !self.audio_ctx.is_open()
    }

    pub fn load_sound_from_file(
        &mut self,
        file: &str,
        ext: &str,
        looping: bool,
    ) -> Result<Sound_Id, Audio_Error> {
        if self.is_shut_down() {
            return Err(Audio_Error::Init(String::from(
                "audio context was already shut down",
            )));
        }

        let path = sound_path(&self.sounds_root, file, ext);
        let id = self.sounds.load(&path, looping).map_err(|err| {
            lerr!("Failed to load sound {:?}: {}", path, err);
            err
        })?;

        if let Some(loaded) = self.sounds.get_mut(id) {
            backend_sound::set_sound_volume(&mut loaded.sound, self.default_volume);
        }
        lok!("Loaded sound {:?} as {}", path, id);

        Ok(id)
    }

    /// Like `load_sound_from_file`, but also makes the sound reachable through `key`.
    /// Fails without loading anything if `key` is already taken.
    pub fn load_sound_with_key(
        &mut self,
        key: &str,
        file: &str,
        ext: &str,
        looping: bool,
    ) -> Result<(), Audio_Error> {
        if self.keyed_sounds.contains_key(key) {
            lerr!("Not loading {}.{}: key \"{}\" is already in use.", file, ext, key);
            return Err(Audio_Error::Duplicate_Key(String::from(key)));
        }

        let id = self.load_sound_from_file(file, ext, looping)?;
        self.keyed_sounds.insert(String::from(key), id);
        Ok(())
    }

    pub fn play_sound_with_id(&mut self, id: Sound_Id) {
        if let Some(loaded) = self.get_sound_mut(id) {
            sound::play_sound(&mut loaded.sound);
        }
    }

    pub fn play_sound_with_key(&mut self, key: &str) {
        if let Some(id) = self.id_for_key(key) {
            self.play_sound_with_id(id);
        }
    }

    /// Out-of-range volumes are clamped to [0, 1]; a NaN volume leaves the gain untouched.
    pub fn play_sound_with_id_at_volume(&mut self, id: Sound_Id, volume: f32) {
        if let Some(loaded) = self.get_sound_mut(id) {
            sound::set_sound_volume(&mut loaded.sound, volume);
            sound::play_sound(&mut loaded.sound);
        }
    }

    pub fn play_sound_with_key_at_volume(&mut self, key: &str, volume: f32) {
        if let Some(id) = self.id_for_key(key) {
            self.play_sound_with_id_at_volume(id, volume);
        }
    }

    pub fn stop_sound_with_id(&mut self, id: Sound_Id) {
        if let Some(loaded) = self.get_sound_mut(id) {
            sound::stop_sound(&mut loaded.sound);
        }
    }

    pub fn stop_sound_with_key(&mut self, key: &str) {
        if let Some(id) = self.id_for_key(key) {
            self.stop_sound_with_id(id);
        }
    }

    pub fn stop_all_sounds(&mut self) {
        for loaded in self.sounds.iter_mut() {
            sound::stop_sound(&mut loaded.sound);
        }
    }

    pub fn is_playing_sound_with_id(&self, id: Sound_Id) -> bool {
        self.get_sound(id)
            .map_or(false, |loaded| sound::sound_playing(&loaded.sound))
    }

    pub fn is_playing_sound_with_key(&self, key: &str) -> bool {
        self.id_for_key(key)
            .map_or(false, |id| self.is_playing_sound_with_id(id))
    }

    /// Moves the sound back to its start without playing it.
    pub fn rewind_sound_with_id(&mut self, id: Sound_Id) {
        if let Some(loaded) = self.get_sound_mut(id) {
            sound::rewind_sound(&mut loaded.sound);
        }
    }

    pub fn rewind_sound_with_key(&mut self, key: &str) {
        if let Some(id) = self.id_for_key(key) {
            self.rewind_sound_with_id(id);
        }
    }

    pub fn set_volume_with_id(&mut self, id: Sound_Id, volume: f32) {
        if let Some(loaded) = self.get_sound_mut(id) {
            sound::set_sound_volume(&mut loaded.sound, volume);
        }
    }

    pub fn set_volume_with_key(&mut self, key: &str, volume: f32) {
        if let Some(id) = self.id_for_key(key) {
            self.set_volume_with_id(id, volume);
        }
    }

    pub fn sound_volume_with_id(&self, id: Sound_Id) -> Option<f32> {
        self.get_sound(id)
            .map(|loaded| sound::sound_volume(&loaded.sound))
    }

    pub fn sound_volume_with_key(&self, key: &str) -> Option<f32> {
        self.id_for_key(key)
            .and_then(|id| self.sound_volume_with_id(id))
    }

    /// Playback position, in seconds.
    pub fn sound_offset_with_id(&self, id: Sound_Id) -> Option<f32> {
        self.get_sound(id)
            .map(|loaded| backend_sound::sound_offset(&loaded.sound))
    }

    pub fn sound_offset_with_key(&self, key: &str) -> Option<f32> {
        self.id_for_key(key)
            .and_then(|id| self.sound_offset_with_id(id))
    }

    /// Moves the playback position to `secs`. The playing state is unchanged.
    pub fn seek_sound_with_id(&mut self, id: Sound_Id, secs: f32) {
        if let Some(loaded) = self.get_sound_mut(id) {
            if let Err(err) = backend_sound::set_sound_offset(&mut loaded.sound, secs) {
                lerr!("Failed to seek sound {} to {} s: {}", id, secs, err);
            }
        }
    }

    pub fn seek_sound_with_key(&mut self, key: &str, secs: f32) {
        if let Some(id) = self.id_for_key(key) {
            self.seek_sound_with_id(id, secs);
        }
    }

    /// Length of the sound's buffer, in seconds.
    pub fn sound_duration_with_id(&self, id: Sound_Id) -> Option<f32> {
        self.get_sound(id)
            .map(|loaded| backend_sound::sound_buffer_duration(&loaded.buffer))
    }

    pub fn is_looping_with_id(&self, id: Sound_Id) -> bool {
        self.get_sound(id)
            .map_or(false, |loaded| backend_sound::sound_looping(&loaded.sound))
    }

    pub fn is_looping_with_key(&self, key: &str) -> bool {
        self.id_for_key(key)
            .map_or(false, |id| self.is_looping_with_id(id))
    }

    pub fn sound_id_for_key(&self, key: &str) -> Option<Sound_Id> {
        self.keyed_sounds.get(key).copied()
    }

    pub fn n_loaded_sounds(&self) -> usize {
        self.sounds.len()
    }

    pub fn n_keyed_sounds(&self) -> usize {
        self.keyed_sounds.len()
    }

    pub fn n_sounds_playing(&self) -> usize {
        self.sounds
            .iter()
            .filter(|loaded| sound::sound_playing(&loaded.sound))
            .count()
    }

    fn id_for_key(&self, key: &str) -> Option<Sound_Id> {
        let id = self.sound_id_for_key(key);
        if id.is_none() {
            lwarn!("No sound loaded with key \"{}\"", key);
        }
        id
    }

    fn get_sound(&self, id: Sound_Id) -> Option<&Loaded_Sound> {
        let loaded = self.sounds.get(id);
        if loaded.is_none() {
            lwarn!("No sound loaded with id {}", id);
        }
        loaded
    }

    fn get_sound_mut(&mut self, id: Sound_Id) -> Option<&mut Loaded_Sound> {
        let loaded = self.sounds.get_mut(id);
        if loaded.is_none() {
            lwarn!("No sound loaded with id {}", id);
        }
        loaded
    }
}

impl Drop for Sound_Manager {
    fn drop(&mut self) {
        self.shutdown();
    }
}
