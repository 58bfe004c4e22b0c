#![allow(dead_code)]

use myrtio_matrix_animator::{
    Animator, AnimatorConfig, Clock, Duration, Instant, OutputDriver, Rgb, animation::Stage,
};

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Clock that only moves when told to (or when something blocks on it)
#[derive(Debug, Default)]
pub struct FakeClock {
    now_ms: u64,
    pub blocked: Vec<Duration>,
}

impl FakeClock {
    pub fn at(now_ms: u64) -> Self {
        Self {
            now_ms,
            blocked: Vec::new(),
        }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now_ms)
    }

    fn block_for(&mut self, duration: Duration) {
        self.blocked.push(duration);
        self.now_ms += duration.as_millis();
    }
}

/// Driver that keeps every frame it was asked to write
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingDriver {
    pub fn last(&self) -> &[Rgb] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

/// Stage for ticking animations without an animator
#[derive(Debug)]
pub struct FakeStage {
    pub brightness: u8,
    /// Frames pushed with `show`, with the brightness at that moment
    pub shown: Vec<(u8, Vec<Rgb>)>,
    pub held: Vec<Duration>,
}

impl FakeStage {
    pub fn new(brightness: u8) -> Self {
        Self {
            brightness,
            shown: Vec::new(),
            held: Vec::new(),
        }
    }
}

impl Default for FakeStage {
    fn default() -> Self {
        Self::new(25)
    }
}

impl Stage for FakeStage {
    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn show(&mut self, leds: &[Rgb]) {
        self.shown.push((self.brightness, leds.to_vec()));
    }

    fn hold(&mut self, duration: Duration) {
        self.held.push(duration);
    }
}

pub type TestAnimator = Animator<RecordingDriver, FakeClock, 25>;

/// Fresh engine with the default configuration and a clock at zero
pub fn animator() -> TestAnimator {
    Animator::new(
        RecordingDriver::default(),
        FakeClock::at(0),
        &AnimatorConfig::default(),
    )
}

pub fn ms(ms: u64) -> Instant {
    Instant::from_millis(ms)
}
