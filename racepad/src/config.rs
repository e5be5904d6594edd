use embassy_time::Duration;

/// Tunable configurations for the pad.
#[derive(Clone, Debug, Default)]
pub struct PadConfig {
    pub jiggler: JigglerConfig,
    pub display: DisplayConfig,
    pub mouse: MouseConfig,
    pub tick: TickConfig,
}

/// Config for the mouse jiggler
#[derive(Clone, Copy, Debug)]
pub struct JigglerConfig {
    /// Minimum time between two synthetic motions
    pub interval: Duration,
}

impl Default for JigglerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
        }
    }
}

/// Config for the status display
#[derive(Clone, Copy, Debug)]
pub struct DisplayConfig {
    /// The display is redrawn at most this often when the mode doesn't change
    pub refresh_interval: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(1000),
        }
    }
}

/// Config for synthetic mouse motion
#[derive(Clone, Copy, Debug)]
pub struct MouseConfig {
    /// Pointer displacement of one motion step, in HID report units
    pub move_delta: i8,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self { move_delta: 8 }
    }
}

/// Config for the scheduler tick of [`crate::keyboard::Keyboard::run`]
#[derive(Clone, Copy, Debug)]
pub struct TickConfig {
    pub interval: Duration,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(10),
        }
    }
}
