use padstate::config::PadConfig;
use padstate::force_feedback::{Haptics, NullHaptics};
use padstate::input::{InputEvent, InputReader};
use padstate::{Button, ControllerState, MonotonicClock, SlotId};
use std::thread;
use std::time::Instant;

#[cfg(target_os = "linux")]
use padstate::force_feedback::{ForceFeedback, HapticWorker, RumbleDevice};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PadConfig::load().unwrap_or_else(|| {
        let config = PadConfig::default();
        if let Err(e) = config.save() {
            log::warn!("Failed to write default config: {}", e);
        }
        config
    });

    let mut reader = InputReader::new()?;
    let slot = SlotId(config.slot);
    let haptics = open_haptics(&config, &reader, slot);
    let mut pad = ControllerState::new(slot, &reader, MonotonicClock::new(), haptics);

    let interval = config.tick_interval();
    log::info!("Polling {} every {:?}, hold Start + Select to quit", slot, interval);

    loop {
        let tick_start = Instant::now();

        for event in reader.poll() {
            match event {
                InputEvent::DeviceConnected { device } => {
                    log::info!("Connected: {} on {}", device.name, device.slot);
                }
                InputEvent::DeviceDisconnected { device_id } => {
                    log::info!("Disconnected: {}", device_id);
                }
            }
        }

        pad.update(&reader);

        if pad.button(Button::Start) && pad.button(Button::Select) {
            log::info!("Start + Select held, exiting");
            break;
        }

        if pad.jump_pressed() {
            let rumble = &config.jump_rumble;
            pad.vibrate(rumble.left, rumble.right, rumble.duration());
        }
        if pad.attack() {
            log::debug!("Attack held");
        }
        if pad.special_attack() {
            log::debug!("Special attack held (RT {:.2})", pad.right_trigger());
        }

        let aim = pad.aim();
        log::trace!("movement={:?} aim={:?}", pad.movement(), aim);

        if let Some(rest) = interval.checked_sub(tick_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    pad.stop_vibration();
    Ok(())
}

#[cfg(target_os = "linux")]
fn open_haptics(config: &PadConfig, reader: &InputReader, slot: SlotId) -> Box<dyn Haptics> {
    let path = config
        .force_feedback_device
        .as_ref()
        .map(std::path::PathBuf::from)
        .or_else(|| reader.device_path(slot));

    match RumbleDevice::new(path.as_deref()) {
        Ok(device) if device.is_available() => match HapticWorker::spawn(device) {
            Ok(worker) => {
                log::info!("Force feedback initialized");
                return Box::new(worker);
            }
            Err(e) => log::error!("Failed to start haptic worker: {}", e),
        },
        Ok(_) => log::warn!("No rumble-capable device, vibration disabled"),
        Err(e) => log::warn!("Force feedback not available: {}", e),
    }

    Box::new(NullHaptics)
}

#[cfg(not(target_os = "linux"))]
fn open_haptics(_config: &PadConfig, _reader: &InputReader, _slot: SlotId) -> Box<dyn Haptics> {
    log::warn!("Rumble is only supported on Linux, vibration disabled");
    Box::new(NullHaptics)
}
