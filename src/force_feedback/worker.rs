use super::{ForceFeedback, Haptics, RumbleState};
use crate::controller::SlotId;
use crossbeam_channel::Sender;
use std::thread::{self, JoinHandle};

struct RumbleCommand {
    slot: SlotId,
    rumble: RumbleState,
}

/// Runs a [`ForceFeedback`] device on its own thread.
///
/// `set_vibration` only queues the request, so the frame loop never waits on
/// device I/O. Dropping the worker stops the motors and joins the thread.
pub struct HapticWorker {
    sender: Option<Sender<RumbleCommand>>,
    thread: Option<JoinHandle<()>>,
}

impl HapticWorker {
    pub fn spawn<F>(mut device: F) -> anyhow::Result<Self>
    where
        F: ForceFeedback + 'static,
    {
        let (sender, receiver) = crossbeam_channel::unbounded::<RumbleCommand>();

        let thread = thread::Builder::new()
            .name("haptics".to_string())
            .spawn(move || {
                for command in receiver.iter() {
                    let result = if command.rumble.is_idle() {
                        device.stop()
                    } else {
                        device.apply_rumble(&command.rumble)
                    };
                    if let Err(e) = result {
                        log::error!("{}: failed to apply rumble: {}", command.slot, e);
                    }
                }

                if let Err(e) = device.stop() {
                    log::warn!("Failed to stop rumble on shutdown: {}", e);
                }
                log::debug!("Haptic worker exiting");
            })?;

        Ok(Self {
            sender: Some(sender),
            thread: Some(thread),
        })
    }
}

impl Haptics for HapticWorker {
    fn set_vibration(&self, slot: SlotId, left: f32, right: f32) -> anyhow::Result<()> {
        let rumble = RumbleState::new(left, right);
        log::debug!(
            "{}: queue rumble large={:.3}, small={:.3}",
            slot,
            rumble.large_motor,
            rumble.small_motor
        );

        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Haptic worker already shut down"))?;
        sender
            .send(RumbleCommand { slot, rumble })
            .map_err(|_| anyhow::anyhow!("Haptic worker thread has exited"))
    }
}

impl Drop for HapticWorker {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop
        self.sender.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("Haptic worker thread panicked");
            }
        }
    }
}
