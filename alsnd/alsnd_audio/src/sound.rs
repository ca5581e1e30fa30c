use alsnd_audio_backend::sound::backend;

// A Sound stands to a Sound_Buffer like a Sprite to a Texture.
pub type Sound = backend::Sound;
pub type Sound_Buffer = backend::Sound_Buffer;
pub type Audio_Context = backend::Audio_Context;

pub use alsnd_audio_backend::sound::Sound_State;

pub const MIN_VOLUME: f32 = 0.0;
pub const MAX_VOLUME: f32 = 1.0;

/// Brings `volume` into [MIN_VOLUME, MAX_VOLUME]. Returns None for NaN.
pub fn sanitize_volume(volume: f32) -> Option<f32> {
    if volume.is_nan() {
        lwarn!("Ignoring NaN volume.");
        return None;
    }
    let clamped = volume.clamp(MIN_VOLUME, MAX_VOLUME);
    if clamped != volume {
        lwarn!("Volume {} is out of range: clamped to {}.", volume, clamped);
    }
    Some(clamped)
}

pub fn play_sound(sound: &mut Sound) {
    backend::play_sound(sound);
}

pub fn stop_sound(sound: &mut Sound) {
    backend::stop_sound(sound);
}

pub fn rewind_sound(sound: &mut Sound) {
    backend::rewind_sound(sound);
}

pub fn sound_playing(sound: &Sound) -> bool {
    backend::sound_playing(sound)
}

pub fn sound_state(sound: &Sound) -> Sound_State {
    backend::sound_state(sound)
}

pub fn set_sound_volume(sound: &mut Sound, volume: f32) {
    if let Some(volume) = sanitize_volume(volume) {
        backend::set_sound_volume(sound, volume);
    }
}

pub fn sound_volume(sound: &Sound) -> f32 {
    backend::sound_volume(sound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_in_range_passes_through() {
        assert_eq!(sanitize_volume(0.0), Some(0.0));
        assert_eq!(sanitize_volume(0.8), Some(0.8));
        assert_eq!(sanitize_volume(1.0), Some(1.0));
    }

    #[test]
    fn volume_out_of_range_is_clamped() {
        assert_eq!(sanitize_volume(1.5), Some(1.0));
        assert_eq!(sanitize_volume(-0.2), Some(0.0));
        assert_eq!(sanitize_volume(f32::INFINITY), Some(1.0));
    }

    #[test]
    fn nan_volume_is_rejected() {
        assert_eq!(sanitize_volume(f32::NAN), None);
    }
}
