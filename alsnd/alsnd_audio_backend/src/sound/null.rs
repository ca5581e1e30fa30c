// A backend that makes no sound. It decodes files like the real one and keeps
// track of each source's state so the layers above it behave the same.

use super::Sound_State;
use crate::decode::{decode_audio_file, Decoded_Audio};
use crate::error::Audio_Error;
use std::path::Path;

pub const NULL_DEVICE_NAME: &str = "Null Audio Device";

// Same value as OpenAL's AL_INVALID_VALUE.
const INVALID_VALUE: i32 = 0xA003;

pub struct Audio_Context {
    open: bool,
}

impl Audio_Context {
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Drop for Audio_Context {
    fn drop(&mut self) {
        shutdown_audio(self);
    }
}

pub struct Sound_Buffer {
    duration: f32,
}

pub struct Sound {
    state: Sound_State,
    gain: f32,
    looping: bool,
    offset: f32,
    duration: f32,
}

pub fn init_audio() -> Result<Audio_Context, Audio_Error> {
    init_audio_with_device(None)
}

pub fn init_audio_with_device(device_name: Option<&str>) -> Result<Audio_Context, Audio_Error> {
    match device_name {
        None | Some(NULL_DEVICE_NAME) => {
            lok!("Successfully opened {}", NULL_DEVICE_NAME);
            Ok(Audio_Context { open: true })
        }
        Some(name) => Err(Audio_Error::Init(format!(
            "failed to open audio device `{}`",
            name
        ))),
    }
}

pub fn shutdown_audio(ctx: &mut Audio_Context) {
    if ctx.open {
        ldebug!("Closed {}", NULL_DEVICE_NAME);
        ctx.open = false;
    }
}

pub fn create_sound_buffer(file: &Path) -> Result<Sound_Buffer, Audio_Error> {
    let decoded = decode_audio_file(file)?;
    create_sound_buffer_from_decoded(&decoded)
}

pub fn create_sound_buffer_from_decoded(
    decoded: &Decoded_Audio,
) -> Result<Sound_Buffer, Audio_Error> {
    Ok(Sound_Buffer {
        duration: decoded.duration(),
    })
}

pub fn sound_buffer_duration(buf: &Sound_Buffer) -> f32 {
    buf.duration
}

pub fn create_sound_with_buffer(buf: &Sound_Buffer) -> Result<Sound, Audio_Error> {
    Ok(Sound {
        state: Sound_State::Initial,
        gain: 1.0,
        looping: false,
        offset: 0.,
        duration: buf.duration,
    })
}

pub fn play_sound(sound: &mut Sound) {
    sound.state = Sound_State::Playing;
}

pub fn stop_sound(sound: &mut Sound) {
    if sound.state == Sound_State::Playing {
        sound.state = Sound_State::Stopped;
    }
    sound.offset = 0.;
}

pub fn rewind_sound(sound: &mut Sound) {
    sound.state = Sound_State::Initial;
    sound.offset = 0.;
}

pub fn sound_state(sound: &Sound) -> Sound_State {
    sound.state
}

pub fn sound_playing(sound: &Sound) -> bool {
    sound.state == Sound_State::Playing
}

pub fn set_sound_volume(sound: &mut Sound, volume: f32) {
    sound.gain = volume;
}

pub fn sound_volume(sound: &Sound) -> f32 {
    sound.gain
}

pub fn set_sound_looping(sound: &mut Sound, looping: bool) {
    sound.looping = looping;
}

pub fn sound_looping(sound: &Sound) -> bool {
    sound.looping
}

pub fn sound_offset(sound: &Sound) -> f32 {
    sound.offset
}

pub fn set_sound_offset(sound: &mut Sound, secs: f32) -> Result<(), Audio_Error> {
    if secs.is_nan() || secs < 0. || secs > sound.duration {
        return Err(Audio_Error::Backend(INVALID_VALUE));
    }
    sound.offset = secs;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_sec_sound() -> Sound {
        let decoded = Decoded_Audio {
            samples: vec![0; 44100],
            channels: 1,
            sample_rate: 44100,
        };
        let buf = create_sound_buffer_from_decoded(&decoded).unwrap();
        create_sound_with_buffer(&buf).unwrap()
    }

    #[test]
    fn source_state_machine() {
        let mut sound = one_sec_sound();
        assert_eq!(sound_state(&sound), Sound_State::Initial);

        play_sound(&mut sound);
        assert!(sound_playing(&sound));

        stop_sound(&mut sound);
        assert_eq!(sound_state(&sound), Sound_State::Stopped);

        play_sound(&mut sound);
        set_sound_offset(&mut sound, 0.5).unwrap();
        // Playing again keeps the current position.
        play_sound(&mut sound);
        assert!(sound_playing(&sound));
        assert_eq!(sound_offset(&sound), 0.5);
        rewind_sound(&mut sound);
        assert_eq!(sound_state(&sound), Sound_State::Initial);
        assert_eq!(sound_offset(&sound), 0.);
    }

    #[test]
    fn stop_on_initial_source_stays_initial() {
        let mut sound = one_sec_sound();
        stop_sound(&mut sound);
        assert_eq!(sound_state(&sound), Sound_State::Initial);
    }

    #[test]
    fn offset_out_of_range_is_rejected() {
        let mut sound = one_sec_sound();
        assert!(set_sound_offset(&mut sound, 2.0).is_err());
        assert!(set_sound_offset(&mut sound, -0.1).is_err());
        assert!(set_sound_offset(&mut sound, f32::NAN).is_err());
        assert_eq!(sound_offset(&sound), 0.);
    }

    #[test]
    fn unknown_device_fails_init() {
        assert!(init_audio().is_ok());
        assert!(init_audio_with_device(Some(NULL_DEVICE_NAME)).is_ok());
        assert!(matches!(
            init_audio_with_device(Some("Some Sound Blaster")),
            Err(Audio_Error::Init(_))
        ));
    }

    #[test]
    fn shutdown_twice_is_fine() {
        let mut ctx = init_audio().unwrap();
        shutdown_audio(&mut ctx);
        shutdown_audio(&mut ctx);
        assert!(!ctx.is_open());
    }
}
