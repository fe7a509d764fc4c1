use anyhow::{Result, anyhow};
use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};

use crate::game::TickOutcome;

const SAMPLE_RATE: u32 = 44_100;

pub struct SoundCues {
    eat: Sound,
    die: Sound,
    volume: f32,
}

impl SoundCues {
    pub async fn load(volume: f32) -> Result<Self> {
        let eat = load_sound_from_bytes(&sine_wav(880.0, 0.08, 0.6))
            .await
            .map_err(|err| anyhow!("creating eat sound: {err:?}"))?;
        let die = load_sound_from_bytes(&sine_wav(110.0, 0.25, 0.7))
            .await
            .map_err(|err| anyhow!("creating game over sound: {err:?}"))?;
        Ok(Self { eat, die, volume: volume.clamp(0.0, 1.0) })
    }

    pub fn play(&self, outcome: TickOutcome) {
        let (sound, gain) = match outcome {
            TickOutcome::Ate => (&self.eat, 0.35),
            TickOutcome::Died => (&self.die, 0.6),
            TickOutcome::Moved => return,
        };
        if self.volume > 0.0 {
            play_sound(sound, PlaySoundParams { looped: false, volume: gain * self.volume });
        }
    }
}

/// Mono PCM16 WAV holding a sine tone.
fn sine_wav(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    let num_samples = (duration_seconds * SAMPLE_RATE as f32) as u32;
    let block_align: u16 = 2;
    let data_size = num_samples * block_align as u32;
    let mut data = Vec::with_capacity(data_size as usize + 44);

    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(36 + data_size).to_le_bytes());
    data.extend_from_slice(b"WAVE");
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // mono
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&(SAMPLE_RATE * block_align as u32).to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7 * i16::MAX as f32;
    for n in 0..num_samples {
        let t = n as f32 / SAMPLE_RATE as f32;
        let sample = (amplitude * (std::f32::consts::TAU * frequency_hz * t).sin()) as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}
