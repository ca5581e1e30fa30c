use super::Sound_State;
use crate::decode::{decode_audio_file, Decoded_Audio};
use crate::error::Audio_Error;
use std::ffi::CString;
use std::path::Path;

pub struct Sound {
    source: al::ALuint,
}

impl Drop for Sound {
    fn drop(&mut self) {
        if self.source > 0 {
            unsafe {
                al::alDeleteSources(1, &self.source);
            }
        }
    }
}

pub struct Sound_Buffer {
    buf: al::ALuint,
    duration: f32,
}

impl Drop for Sound_Buffer {
    fn drop(&mut self) {
        if self.buf > 0 {
            unsafe {
                al::alDeleteBuffers(1, &self.buf);
            }
        }
    }
}

pub struct Audio_Context {
    device: *mut al::ALCdevice,
    context: *mut al::ALCcontext,
}

impl Audio_Context {
    pub fn is_open(&self) -> bool {
        !self.device.is_null()
    }
}

impl Drop for Audio_Context {
    fn drop(&mut self) {
        shutdown_audio(self);
    }
}

pub fn init_audio() -> Result<Audio_Context, Audio_Error> {
    init_audio_with_device(None)
}

pub fn init_audio_with_device(device_name: Option<&str>) -> Result<Audio_Context, Audio_Error> {
    let device_name = device_name
        .map(CString::new)
        .transpose()
        .map_err(|err| Audio_Error::Init(err.to_string()))?;

    // A null name requests the default device
    let device = unsafe {
        al::alcOpenDevice(
            device_name
                .as_ref()
                .map_or(std::ptr::null(), |name| name.as_ptr()),
        )
    };
    if device.is_null() {
        lerr!("Failed to get OpenAL device");
        return Err(Audio_Error::Init(String::from("failed to open OpenAL device")));
    }
    lok!("Successfully opened OpenAL device");

    // From here on, dropping `ctx` releases whatever was created.
    let mut ctx = Audio_Context {
        device,
        context: std::ptr::null_mut(),
    };

    ctx.context = unsafe { al::alcCreateContext(device, std::ptr::null()) };
    if ctx.context.is_null() {
        let err = unsafe { al::alcGetError(device) };
        lerr!("Failed to create OpenAL context: ALC errcode {}", err);
        return Err(Audio_Error::Init(format!(
            "failed to create OpenAL context (ALC errcode {})",
            err
        )));
    }

    let ok = unsafe { al::alcMakeContextCurrent(ctx.context) };
    if ok != al::ALC_TRUE {
        lerr!("Failed to make OpenAL context current");
        return Err(Audio_Error::Init(String::from(
            "failed to make OpenAL context current",
        )));
    }

    Ok(ctx)
}

pub fn shutdown_audio(ctx: &mut Audio_Context) {
    if !ctx.context.is_null() {
        unsafe {
            al::alcMakeContextCurrent(std::ptr::null_mut());
            al::alcDestroyContext(ctx.context);
        }
        ctx.context = std::ptr::null_mut();
    }
    if !ctx.device.is_null() {
        let ok = unsafe { al::alcCloseDevice(ctx.device) };
        if ok != al::ALC_TRUE {
            lerr!("Failed to close OpenAL device!");
        }
        ctx.device = std::ptr::null_mut();
    }
}

// Clears the sticky AL error state.
#[inline]
fn reset_al_error() {
    unsafe {
        al::alGetError();
    }
}

#[inline]
fn check_al_error() -> Result<(), Audio_Error> {
    let err = unsafe { al::alGetError() };
    if err == al::AL_NO_ERROR {
        Ok(())
    } else {
        Err(Audio_Error::Backend(err))
    }
}

pub fn create_sound_buffer(file: &Path) -> Result<Sound_Buffer, Audio_Error> {
    let decoded = decode_audio_file(file)?;
    create_sound_buffer_from_decoded(&decoded)
}

pub fn create_sound_buffer_from_decoded(
    decoded: &Decoded_Audio,
) -> Result<Sound_Buffer, Audio_Error> {
    let format = match decoded.channels {
        1 => al::AL_FORMAT_MONO16,
        2 => al::AL_FORMAT_STEREO16,
        n => return Err(Audio_Error::Unsupported_Channels(n)),
    };

    let sound_buf = new_sound_buf(decoded.duration())?;

    // put data into the buffer
    reset_al_error();
    unsafe {
        let size = std::mem::size_of::<i16>() * decoded.samples.len();
        al::alBufferData(
            sound_buf.buf,
            format,
            decoded.samples.as_ptr() as *const _,
            size as _,
            decoded.sample_rate as _,
        );
    }
    check_al_error()?;

    Ok(sound_buf)
}

fn new_sound_buf(duration: f32) -> Result<Sound_Buffer, Audio_Error> {
    reset_al_error();

    let mut buf: al::ALuint = 0;
    unsafe {
        al::alGenBuffers(1, &mut buf);
    }
    check_al_error()?;

    Ok(Sound_Buffer { buf, duration })
}

pub fn sound_buffer_duration(buf: &Sound_Buffer) -> f32 {
    buf.duration
}

pub fn create_sound_with_buffer(buf: &Sound_Buffer) -> Result<Sound, Audio_Error> {
    let sound = new_sound()?;
    debug_assert!(unsafe { al::alIsBuffer(buf.buf) == al::AL_TRUE });

    reset_al_error();
    unsafe {
        al::alSourcei(sound.source, al::AL_BUFFER, buf.buf as _);
    }
    check_al_error()?;

    Ok(sound)
}

fn new_sound() -> Result<Sound, Audio_Error> {
    reset_al_error();

    let mut source: al::ALuint = 0;
    unsafe {
        al::alGenSources(1, &mut source);
    }
    check_al_error()?;

    ldebug!("Created sound with OpenAL source {}.", source);
    debug_assert!(unsafe { al::alIsSource(source) == al::AL_TRUE });
    Ok(Sound { source })
}

pub fn play_sound(sound: &mut Sound) {
    if sound.source == 0 {
        lwarn!("Sound wasn't played because source is invalid.");
        return;
    }

    // alSourcePlay on a playing source would restart it.
    if sound_playing(sound) {
        lverbose!("Source {} is already playing.", sound.source);
        return;
    }

    reset_al_error();
    unsafe {
        al::alSourcePlay(sound.source);
    }
    if let Err(err) = check_al_error() {
        lerr!("Error playing sound: {}", err);
    }
}

pub fn stop_sound(sound: &mut Sound) {
    reset_al_error();
    unsafe {
        al::alSourceStop(sound.source);
    }
    if let Err(err) = check_al_error() {
        lerr!("Error stopping sound: {}", err);
    }
}

pub fn rewind_sound(sound: &mut Sound) {
    reset_al_error();
    unsafe {
        al::alSourceRewind(sound.source);
    }
    if let Err(err) = check_al_error() {
        lerr!("Error rewinding sound: {}", err);
    }
}

pub fn sound_state(sound: &Sound) -> Sound_State {
    let mut state: al::ALint = 0;
    reset_al_error();
    unsafe {
        al::alGetSourcei(sound.source, al::AL_SOURCE_STATE, &mut state);
    }
    if let Err(err) = check_al_error() {
        lerr!("Error retrieving sound source state: {}", err);
        return Sound_State::Stopped;
    }

    match state {
        al::AL_PLAYING => Sound_State::Playing,
        al::AL_INITIAL => Sound_State::Initial,
        _ => Sound_State::Stopped,
    }
}

pub fn sound_playing(sound: &Sound) -> bool {
    sound_state(sound) == Sound_State::Playing
}

pub fn set_sound_volume(sound: &mut Sound, volume: f32) {
    reset_al_error();
    unsafe {
        al::alSourcef(sound.source, al::AL_GAIN, volume);
    }
    if let Err(err) = check_al_error() {
        lerr!("Error setting gain {} on sound: {}", volume, err);
    }
}

pub fn sound_volume(sound: &Sound) -> f32 {
    let mut gain: al::ALfloat = 0.0;
    reset_al_error();
    unsafe {
        al::alGetSourcef(sound.source, al::AL_GAIN, &mut gain);
    }
    if let Err(err) = check_al_error() {
        lerr!("Error reading gain of sound: {}", err);
    }
    gain
}

pub fn set_sound_looping(sound: &mut Sound, looping: bool) {
    let value = if looping { al::AL_TRUE } else { al::AL_FALSE };
    reset_al_error();
    unsafe {
        al::alSourcei(sound.source, al::AL_LOOPING, value as _);
    }
    if let Err(err) = check_al_error() {
        lerr!("Error setting looping on sound: {}", err);
    }
}

pub fn sound_looping(sound: &Sound) -> bool {
    let mut looping: al::ALint = 0;
    reset_al_error();
    unsafe {
        al::alGetSourcei(sound.source, al::AL_LOOPING, &mut looping);
    }
    if let Err(err) = check_al_error() {
        lerr!("Error reading looping of sound: {}", err);
    }
    looping == al::AL_TRUE as al::ALint
}

pub fn sound_offset(sound: &Sound) -> f32 {
    let mut offset: al::ALfloat = 0.0;
    reset_al_error();
    unsafe {
        al::alGetSourcef(sound.source, al::AL_SEC_OFFSET, &mut offset);
    }
    if let Err(err) = check_al_error() {
        lerr!("Error reading offset of sound: {}", err);
    }
    offset
}

pub fn set_sound_offset(sound: &mut Sound, secs: f32) -> Result<(), Audio_Error> {
    reset_al_error();
    unsafe {
        al::alSourcef(sound.source, al::AL_SEC_OFFSET, secs);
    }
    check_al_error()
}

mod al {
    use std::ffi;

    pub const ALC_TRUE: ALCboolean = 1;

    pub const AL_TRUE: ALboolean = 1;
    pub const AL_FALSE: ALboolean = 0;

    pub const AL_NO_ERROR: ALenum = 0;

    pub const AL_FORMAT_MONO16: ALenum = 0x1101;
    pub const AL_FORMAT_STEREO16: ALenum = 0x1103;

    pub const AL_LOOPING: ALenum = 0x1007;
    pub const AL_BUFFER: ALenum = 0x1009;
    pub const AL_GAIN: ALenum = 0x100A;
    pub const AL_SOURCE_STATE: ALenum = 0x1010;
    pub const AL_INITIAL: ALint = 0x1011;
    pub const AL_PLAYING: ALint = 0x1012;
    pub const AL_SEC_OFFSET: ALenum = 0x1024;

    pub type ALCdevice = ffi::c_void;
    pub type ALCcontext = ffi::c_void;
    pub type ALCchar = ffi::c_char;
    pub type ALCboolean = ffi::c_char;
    pub type ALCint = ffi::c_int;
    pub type ALCenum = ffi::c_int;

    pub type ALuint = ffi::c_uint;
    pub type ALint = ffi::c_int;
    pub type ALsizei = ffi::c_int;
    pub type ALenum = ffi::c_int;
    pub type ALvoid = ffi::c_void;
    pub type ALboolean = ffi::c_char;
    pub type ALfloat = ffi::c_float;

    #[link(name = "openal")]
    extern "C" {
        pub fn alcGetError(device: *mut ALCdevice) -> ALCenum;
        pub fn alcOpenDevice(devicename: *const ALCchar) -> *mut ALCdevice;
        pub fn alcCloseDevice(device: *mut ALCdevice) -> ALCboolean;
        pub fn alcCreateContext(device: *mut ALCdevice, attrlist: *const ALCint)
            -> *mut ALCcontext;
        pub fn alcDestroyContext(context: *mut ALCcontext);
        pub fn alcMakeContextCurrent(context: *mut ALCcontext) -> ALCboolean;

        pub fn alGetError() -> ALenum;
        pub fn alGenBuffers(n: ALsizei, buffers: *mut ALuint);
        pub fn alDeleteBuffers(n: ALsizei, buffers: *const ALuint);
        pub fn alBufferData(
            buffer: ALuint,
            format: ALenum,
            data: *const ALvoid,
            size: ALsizei,
            freq: ALsizei,
        );
        pub fn alIsBuffer(buf: ALuint) -> ALboolean;

        pub fn alGenSources(n: ALsizei, sources: *mut ALuint);
        pub fn alDeleteSources(n: ALsizei, sources: *const ALuint);
        pub fn alSourcei(source: ALuint, pname: ALenum, value: ALint);
        pub fn alSourcef(source: ALuint, pname: ALenum, value: ALfloat);
        pub fn alGetSourcei(source: ALuint, pname: ALenum, value: *mut ALint);
        pub fn alGetSourcef(source: ALuint, pname: ALenum, value: *mut ALfloat);
        pub fn alSourcePlay(source: ALuint);
        pub fn alSourceStop(source: ALuint);
        pub fn alSourceRewind(source: ALuint);
        pub fn alIsSource(source: ALuint) -> ALboolean;
    }
}
