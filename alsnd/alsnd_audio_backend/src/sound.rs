#[cfg(all(feature = "audio-null", not(feature = "audio-openal")))]
pub mod null;

#[cfg(feature = "audio-openal")]
pub mod openal;

#[cfg(all(feature = "audio-null", not(feature = "audio-openal")))]
pub use self::null as backend;

#[cfg(feature = "audio-openal")]
pub use self::openal as backend;

#[cfg(not(any(feature = "audio-null", feature = "audio-openal")))]
compile_error!("alsnd_audio_backend needs one of the `audio-null` or `audio-openal` features.");

pub type Sound_Buffer = backend::Sound_Buffer;
pub type Sound = backend::Sound;
pub type Audio_Context = backend::Audio_Context;

pub use backend::{
    create_sound_buffer, create_sound_buffer_from_decoded, create_sound_with_buffer, init_audio,
    init_audio_with_device, play_sound, rewind_sound, set_sound_looping, set_sound_offset,
    set_sound_volume, shutdown_audio, sound_buffer_duration, sound_looping, sound_offset,
    sound_playing, sound_state, sound_volume, stop_sound,
};

/// Playback state of a source, as reported by the backend.
/// A paused backend source reports `Stopped`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sound_State {
    Initial,
    Playing,
    Stopped,
}
