pub mod display;
pub mod renderer;
pub mod runtime;
pub mod splatter;
pub mod telemetry;
pub mod ui;

pub use phasor_config as config;
pub use phasor_protocol as protocol;
pub use runtime::{
    animate, now_ms, AnimationReport, DeviceRuntime, FrameSource, LifecycleOutcome, RuntimeMode,
};

pub fn boot_message() -> &'static str {
    "phasor-device ready"
}
