use super::{ForceFeedback, RumbleState};
use evdev::{Device, FFEffect, FFEffectData, FFEffectKind, FFReplay, FFTrigger};
use std::path::Path;

/// Dual-motor rumble through the evdev force feedback interface
pub struct RumbleDevice {
    device: Option<Device>,
    available: bool,
    rumble_effect: Option<FFEffect>,
    effect_playing: bool,
}

impl RumbleDevice {
    pub fn new(device_path: Option<&Path>) -> anyhow::Result<Self> {
        let mut ff_device = Self {
            device: None,
            available: false,
            rumble_effect: None,
            effect_playing: false,
        };

        if let Some(path) = device_path {
            ff_device.connect(path)?;
        } else {
            ff_device.auto_detect()?;
        }

        Ok(ff_device)
    }

    fn connect(&mut self, path: &Path) -> anyhow::Result<()> {
        let device = Device::open(path)
            .map_err(|e| anyhow::anyhow!("Failed to open device {}: {}", path.display(), e))?;

        match device.supported_ff() {
            Some(supported_ff) if supported_ff.iter().count() > 0 => {
                log::info!(
                    "Device supports FF effect types: {:?}",
                    supported_ff.iter().collect::<Vec<_>>()
                );
            }
            _ => {
                return Err(anyhow::anyhow!(
                    "Device {} does not support force feedback",
                    path.display()
                ));
            }
        }

        log::info!(
            "Connected to rumble device: {} at {}",
            device.name().unwrap_or("Unknown"),
            path.display()
        );
        self.device = Some(device);
        self.available = true;

        self.create_rumble_effect()?;

        Ok(())
    }

    fn auto_detect(&mut self) -> anyhow::Result<()> {
        for i in 0..32 {
            let path = format!("/dev/input/event{}", i);
            if !Path::new(&path).exists() {
                continue;
            }
            let Ok(device) = Device::open(&path) else {
                continue;
            };
            if !device.supported_ff().map(|ff| ff.iter().count() > 0).unwrap_or(false) {
                continue;
            }

            log::info!(
                "Auto-detected FF device: {} at {}",
                device.name().unwrap_or("Unknown"),
                path
            );
            self.device = Some(device);
            self.available = true;

            if let Err(e) = self.create_rumble_effect() {
                log::warn!("Failed to create rumble effect for auto-detected device: {}", e);
                self.device = None;
                self.available = false;
                continue;
            }

            return Ok(());
        }

        log::warn!("No force feedback device found");
        Ok(())
    }

    fn effect_data(rumble: &RumbleState) -> FFEffectData {
        FFEffectData {
            direction: 0,
            trigger: FFTrigger::default(),
            replay: FFReplay {
                length: 0, // Plays until stopped
                delay: 0,
            },
            kind: FFEffectKind::Rumble {
                strong_magnitude: (rumble.large_motor * u16::MAX as f32) as u16,
                weak_magnitude: (rumble.small_motor * u16::MAX as f32) as u16,
            },
        }
    }

    fn create_rumble_effect(&mut self) -> anyhow::Result<()> {
        let device = self
            .device
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("No device available"))?;

        let effect = device
            .upload_ff_effect(Self::effect_data(&RumbleState::default()))
            .map_err(|e| anyhow::anyhow!("Failed to create rumble effect: {}", e))?;

        log::info!("Created rumble effect with ID: {}", effect.id());
        self.rumble_effect = Some(effect);
        Ok(())
    }
}

impl ForceFeedback for RumbleDevice {
    fn apply_rumble(&mut self, rumble: &RumbleState) -> anyhow::Result<()> {
        if !self.available {
            return Ok(());
        }

        if self.rumble_effect.is_none() {
            log::debug!("Rumble effect not yet created, creating now.");
            self.create_rumble_effect()?;
        }

        log::debug!(
            "Applying rumble: large={:.3}, small={:.3}",
            rumble.large_motor,
            rumble.small_motor
        );

        if let Some(ref mut effect) = self.rumble_effect {
            effect
                .update(Self::effect_data(rumble))
                .map_err(|e| anyhow::anyhow!("Failed to update rumble effect: {}", e))?;

            if !self.effect_playing {
                effect
                    .play(1)
                    .map_err(|e| anyhow::anyhow!("Failed to play rumble effect: {}", e))?;
                self.effect_playing = true;
            }
        }

        Ok(())
    }

    fn stop(&mut self) -> anyhow::Result<()> {
        if !self.available || !self.effect_playing {
            return Ok(());
        }

        if let Some(ref mut effect) = self.rumble_effect {
            effect
                .stop()
                .map_err(|e| anyhow::anyhow!("Failed to stop effect: {}", e))?;
            log::debug!("Stopped rumble effect");
        }

        self.effect_playing = false;
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl Drop for RumbleDevice {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            log::warn!("Failed to clean up rumble on drop: {}", e);
        }
    }
}
