use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Used for setting up tests which need sound files on disk.
// The directory is deleted when the returned TempDir is dropped.
pub fn create_test_sounds_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("alsnd_test_sounds")
        .tempdir()
        .expect("Failed to create test sounds dir!")
}

/// Writes a 16-bit sine wave of `duration` seconds to `dir/name`.
pub fn write_test_wav(
    dir: &Path,
    name: &str,
    channels: u16,
    sample_rate: u32,
    duration: f32,
) -> PathBuf {
    let path = dir.join(name);
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec)
        .unwrap_or_else(|err| panic!("Failed to create {:?}: {}", path, err));

    let n_frames = (duration * sample_rate as f32) as usize;
    for i in 0..n_frames {
        let t = i as f32 / sample_rate as f32;
        let sample = (t * 440.0 * 2.0 * std::f32::consts::PI).sin() * 0.5 * i16::MAX as f32;
        for _ in 0..channels {
            writer
                .write_sample(sample as i16)
                .unwrap_or_else(|err| panic!("Failed to write {:?}: {}", path, err));
        }
    }
    writer
        .finalize()
        .unwrap_or_else(|err| panic!("Failed to finalize {:?}: {}", path, err));

    path
}

pub fn write_test_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap_or_else(|err| panic!("Failed to write {:?}: {}", path, err));
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_readable_wav() {
        let dir = create_test_sounds_dir();
        let path = write_test_wav(dir.path(), "beep.wav", 2, 22050, 0.5);

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().channels, 2);
        assert_eq!(reader.spec().sample_rate, 22050);
        assert_eq!(reader.duration(), 11025);
    }

    #[test]
    fn approx_eq_on_options() {
        assert_approx_eq!(Some(0.5f32), Some(0.5f32));
        assert_approx_eq!(0.1f32 + 0.2, 0.3f32, eps = 1e-6);
    }
}
