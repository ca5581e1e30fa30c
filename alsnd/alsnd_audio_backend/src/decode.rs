use crate::error::Audio_Error;
use std::fs;
use std::path::Path;

/// Interleaved 16-bit PCM, ready to be handed to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded_Audio {
    pub samples: Vec<i16>,
    pub channels: u16,
    pub sample_rate: u32,
}

impl Decoded_Audio {
    pub fn n_frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Length in seconds.
    pub fn duration(&self) -> f32 {
        if self.sample_rate == 0 {
            0.
        } else {
            self.n_frames() as f32 / self.sample_rate as f32
        }
    }
}

/// Decodes `path`, picking the decoder from its extension.
pub fn decode_audio_file(path: &Path) -> Result<Decoded_Audio, Audio_Error> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let decoded = match ext.as_str() {
        "wav" | "wave" => read_and_decode_wav_file(path)?,
        "ogg" => read_and_decode_ogg_file(path)?,
        _ => return Err(Audio_Error::Unsupported_Format(ext)),
    };

    if decoded.channels != 1 && decoded.channels != 2 {
        return Err(Audio_Error::Unsupported_Channels(decoded.channels));
    }
    if decoded.samples.is_empty() {
        return Err(Audio_Error::Decode(format!("{:?} contains no samples", path)));
    }

    ldebug!(
        "Decoded {:?}: length {} s, sample rate {} Hz, {} channels",
        path,
        decoded.duration(),
        decoded.sample_rate,
        decoded.channels
    );

    Ok(decoded)
}

fn hound_error(err: hound::Error) -> Audio_Error {
    match err {
        hound::Error::IoError(err) => Audio_Error::Io(err),
        err => Audio_Error::Decode(err.to_string()),
    }
}

fn read_and_decode_wav_file(path: &Path) -> Result<Decoded_Audio, Audio_Error> {
    let mut reader = hound::WavReader::open(path).map_err(hound_error)?;
    let spec = reader.spec();

    let samples: Vec<i16> = match spec.sample_format {
        hound::SampleFormat::Int => match spec.bits_per_sample {
            16 => reader
                .samples::<i16>()
                .collect::<Result<_, _>>()
                .map_err(hound_error)?,
            8 => reader
                .samples::<i8>()
                .map(|s| s.map(|s| (s as i16) << 8))
                .collect::<Result<_, _>>()
                .map_err(hound_error)?,
            24 | 32 => {
                let shift = spec.bits_per_sample - 16;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|s| (s >> shift) as i16))
                    .collect::<Result<_, _>>()
                    .map_err(hound_error)?
            }
            n => {
                return Err(Audio_Error::Decode(format!(
                    "unsupported bit depth {}",
                    n
                )))
            }
        },
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|s| (s.clamp(-1., 1.) * i16::MAX as f32) as i16))
            .collect::<Result<_, _>>()
            .map_err(hound_error)?,
    };

    Ok(Decoded_Audio {
        samples,
        channels: spec.channels,
        sample_rate: spec.sample_rate,
    })
}

fn read_and_decode_ogg_file(path: &Path) -> Result<Decoded_Audio, Audio_Error> {
    use lewton::inside_ogg as ogg;

    let file_reader = fs::File::open(path)?;
    let mut ogg_reader = ogg::OggStreamReader::new(file_reader)
        .map_err(|err| Audio_Error::Decode(err.to_string()))?;

    let mut samples = vec![];
    while let Some(packets) = ogg_reader
        .read_dec_packet_itl()
        .map_err(|err| Audio_Error::Decode(err.to_string()))?
    {
        samples.extend(packets);
    }

    let header = &ogg_reader.ident_hdr;
    Ok(Decoded_Audio {
        samples,
        channels: u16::from(header.audio_channels),
        sample_rate: header.audio_sample_rate,
    })
}
