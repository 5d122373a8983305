use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};

const SAMPLE_RATE: u32 = 44_100;
const EAT_VOLUME: f32 = 0.35;

// Simple WAV (PCM16 mono) generator for tones
pub fn generate_wav_sine(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    let num_samples = (duration_seconds * SAMPLE_RATE as f32) as u32;
    let block_align: u16 = 2;
    let byte_rate = SAMPLE_RATE * block_align as u32;
    let data_size = num_samples * 2;

    let mut data = Vec::with_capacity(44 + data_size as usize);
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(36 + data_size).to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk: PCM, mono, 16 bits
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for n in 0..num_samples {
        let t = n as f32 / SAMPLE_RATE as f32;
        let sample = (amplitude * (std::f32::consts::TAU * frequency_hz * t).sin() * i16::MAX as f32) as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}

/// The "eat" blip. Stays silent if the sound could not be loaded.
pub struct EatCue {
    sound: Option<Sound>,
}

impl EatCue {
    pub async fn load() -> Self {
        let bytes = generate_wav_sine(880.0, 0.08, 0.6);
        let sound = match load_sound_from_bytes(&bytes).await {
            Ok(sound) => Some(sound),
            Err(err) => {
                tracing::warn!("eat sound unavailable: {err:?}");
                None
            }
        };
        Self { sound }
    }

    pub fn play(&self) {
        if let Some(sound) = &self.sound {
            play_sound(sound, PlaySoundParams { looped: false, volume: EAT_VOLUME });
        }
    }
}
