use alertsync_api::models::{ControlMailbox, DeviceState, EventLogEntry, TelemetryReport};
use alertsync_api::{Category, classify};
use rand::Rng;

/// Full scale of the simulated 12-bit ADC.
pub const ANALOG_MAX: i32 = 4095;

/// Largest step of the analog random walk per report.
const MAX_STEP: i32 = 180;

/// Danger level at which the simulated operator hits the physical button.
pub const PANIC_LEVEL: i32 = 95;

pub fn danger_level(analog_input: i32) -> i32 {
    analog_input.clamp(0, ANALOG_MAX) * 100 / ANALOG_MAX
}

pub fn next_reading<R: Rng + ?Sized>(current: i32, rng: &mut R) -> i32 {
    (current + rng.random_range(-MAX_STEP..=MAX_STEP)).clamp(0, ANALOG_MAX)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indicators {
    pub red_led: bool,
    pub blue_led: bool,
    pub buzzer: bool,
    pub emergency_led: bool,
}

pub fn indicators(category: Category) -> Indicators {
    match category {
        Category::Emergency => Indicators {
            red_led: true,
            buzzer: true,
            emergency_led: true,
            ..Default::default()
        },
        Category::Danger => Indicators {
            red_led: true,
            buzzer: true,
            ..Default::default()
        },
        Category::Warning => Indicators {
            red_led: true,
            ..Default::default()
        },
        Category::Normal => Indicators {
            blue_led: true,
            ..Default::default()
        },
    }
}

/// In-memory stand-in for the embedded device.
#[derive(Debug, Clone, Default)]
pub struct DeviceSim {
    pub analog_input: i32,
    pub emergency: bool,
    pub servo_open: bool,
}

impl DeviceSim {
    pub fn new(analog_input: i32) -> Self {
        Self {
            analog_input: analog_input.clamp(0, ANALOG_MAX),
            ..Default::default()
        }
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.analog_input = next_reading(self.analog_input, rng);
    }

    /// Builds a complete report. Every field is set: the server replaces the
    /// whole snapshot, so an omitted `emergency` would read back as `false`.
    pub fn report(&self) -> TelemetryReport {
        let level = danger_level(self.analog_input);
        let lights = indicators(classify(level, self.emergency));

        TelemetryReport {
            analog_input: Some(self.analog_input),
            danger_level: Some(level),
            emergency: Some(self.emergency),
            red_led: Some(lights.red_led),
            blue_led: Some(lights.blue_led),
            buzzer: Some(lights.buzzer),
            emergency_led: Some(lights.emergency_led),
            servo_open: Some(self.servo_open),
        }
    }

    pub fn apply(&mut self, control: ControlMailbox) {
        self.emergency = control.emergency_button;
        self.servo_open = control.servo_open;
    }

    /// Presses the physical button once the reading crosses [`PANIC_LEVEL`].
    /// Returns `true` when the press should be sent to the server.
    pub fn press_panic_button(&mut self) -> bool {
        if self.emergency || danger_level(self.analog_input) < PANIC_LEVEL {
            return false;
        }

        self.emergency = true;
        true
    }
}

/// One operator action issued by the simulated dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardCommand {
    OpenServo,
    CloseServo,
    EmergencyOn,
    EmergencyOff,
}

impl DashboardCommand {
    const CYCLE: [DashboardCommand; 4] = [
        DashboardCommand::OpenServo,
        DashboardCommand::EmergencyOn,
        DashboardCommand::EmergencyOff,
        DashboardCommand::CloseServo,
    ];
}

/// Walks the dashboard through its fixed cycle of operator actions.
#[derive(Debug, Clone, Default)]
pub struct DashboardSim {
    position: usize,
}

impl DashboardSim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_command(&mut self) -> DashboardCommand {
        let command = DashboardCommand::CYCLE[self.position % DashboardCommand::CYCLE.len()];
        self.position = self.position.wrapping_add(1);
        command
    }
}

pub fn render_status(esp: &DeviceState) -> String {
    format!(
        "{} level={} analog={} red={} blue={} buzzer={} door={}",
        esp.category().label(),
        esp.danger_level,
        esp.analog_input,
        esp.red_led,
        esp.blue_led,
        esp.buzzer,
        if esp.servo_open { "open" } else { "closed" },
    )
}

pub fn render_entry(entry: &EventLogEntry) -> String {
    format!(
        "[{}] {} {} (level {})",
        entry.category().label(),
        entry.time,
        entry.event,
        entry.danger_level,
    )
}

/// Entries that arrived after `last_seen`, oldest first. When `last_seen` has
/// already scrolled out of the window the whole window counts as new.
pub fn fresh_entries<'a>(logs: &'a [EventLogEntry], last_seen: Option<&EventLogEntry>) -> &'a [EventLogEntry] {
    match last_seen.and_then(|seen| logs.iter().rposition(|entry| entry == seen)) {
        Some(index) => &logs[index + 1..],
        None => logs,
    }
}
