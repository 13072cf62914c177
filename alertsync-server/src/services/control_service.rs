use alertsync_api::models::ControlMailbox;
use tokio::sync::RwLock;

/// Latest commands for the device. Fields are written independently and the
/// device reads both on its next poll.
pub struct ControlService {
    mailbox: RwLock<ControlMailbox>,
}

impl ControlService {
    pub fn new() -> Self {
        Self {
            mailbox: RwLock::new(ControlMailbox::default()),
        }
    }

    pub async fn set_emergency_intent(&self, emergency: bool) -> ControlMailbox {
        let mut mailbox = self.mailbox.write().await;
        mailbox.emergency_button = emergency;

        *mailbox
    }

    pub async fn set_servo_command(&self, open: bool) -> ControlMailbox {
        let mut mailbox = self.mailbox.write().await;
        mailbox.servo_open = open;

        *mailbox
    }

    pub async fn mailbox(&self) -> ControlMailbox {
        *self.mailbox.read().await
    }
}

impl Default for ControlService {
    fn default() -> Self {
        Self::new()
    }
}
