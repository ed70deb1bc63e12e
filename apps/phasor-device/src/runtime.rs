use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use phasor_config::DeviceConfig;
use phasor_core::{Captions, DiagramState, RotatingVectorDiagram};
use phasor_protocol::{Frame, LifecycleEvent};
use phasor_scheduler::{AnimationController, TickSchedule};
use tokio::sync::Notify;
use tracing::{info, warn};

use crate::display::SurfaceSize;
use crate::renderer::{FrameRenderer, RecordingRenderer};

const MAX_DIAGNOSTICS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeMode {
    Inactive,
    Active,
    Destroyed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleOutcome {
    Activated,
    Deactivated,
    Ignored,
}

/// Shared handle that turns the diagram's current state into numbered
/// frames. The tick loop and the runtime both hold one.
#[derive(Clone)]
pub struct FrameSource {
    diagram: Rc<RefCell<RotatingVectorDiagram>>,
    seq: Rc<Cell<u64>>,
}

impl FrameSource {
    pub fn next_frame(&self) -> Frame {
        let seq = self.seq.get().saturating_add(1);
        self.seq.set(seq);
        let diagram = self.diagram.borrow();
        let state = diagram.state();
        let mut frame = Frame::new(seq, state.angle_degrees, state.width, state.height)
            .with_instructions(diagram.render());
        frame.issued_at_ms = Some(now_ms());
        frame
    }

    pub fn last_seq(&self) -> u64 {
        self.seq.get()
    }
}

/// Tick count a caller is waiting for; the tick loop signals `reached` once
/// the redraw counter gets there.
#[derive(Default)]
struct TickGoal {
    target: Cell<Option<u64>>,
    reached: Notify,
}

pub struct DeviceRuntime {
    mode: RuntimeMode,
    surface: SurfaceSize,
    frames: FrameSource,
    controller: AnimationController,
    renderer: Option<Rc<RefCell<dyn FrameRenderer>>>,
    redraw_requests: Rc<Cell<u64>>,
    tick_goal: Rc<TickGoal>,
    diagnostics: VecDeque<String>,
}

impl DeviceRuntime {
    pub fn new(config: &DeviceConfig) -> Self {
        let diagram = RotatingVectorDiagram::with_angle(config.animation.initial_angle_degrees)
            .with_step(config.animation.step_degrees)
            .with_captions(Captions::from(&config.captions));
        let mut runtime = Self {
            mode: RuntimeMode::Inactive,
            surface: SurfaceSize::new(0.0, 0.0),
            frames: FrameSource {
                diagram: Rc::new(RefCell::new(diagram)),
                seq: Rc::new(Cell::new(0)),
            },
            controller: AnimationController::new(TickSchedule::from_millis(
                config.animation.tick_interval_ms,
            )),
            renderer: None,
            redraw_requests: Rc::new(Cell::new(0)),
            tick_goal: Rc::new(TickGoal::default()),
            diagnostics: VecDeque::new(),
        };
        runtime.resize(config.surface.width, config.surface.height);
        runtime
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn schedule(&self) -> TickSchedule {
        self.controller.schedule()
    }

    /// Snapshot of the diagram state. A copy, so it can be held across
    /// awaits while ticks keep mutating the diagram.
    pub fn state(&self) -> DiagramState {
        *self.frames.diagram.borrow().state()
    }

    pub fn frame_source(&self) -> FrameSource {
        self.frames.clone()
    }

    /// Redraws requested by ticks so far.
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests.get()
    }

    pub fn diagnostics(&self) -> &VecDeque<String> {
        &self.diagnostics
    }

    /// Frames produced by ticks are presented here. Takes effect on the
    /// next activation.
    pub fn attach_renderer(&mut self, renderer: Rc<RefCell<dyn FrameRenderer>>) {
        self.renderer = Some(renderer);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = SurfaceSize::new(width, height);
        if self.surface.is_degenerate() {
            self.push_diagnostic(format!("degenerate_surface_{width}x{height}"));
        }
        self.frames.diagram.borrow_mut().on_surface_resized(width, height);
    }

    pub fn render_frame(&self) -> Frame {
        self.frames.next_frame()
    }

    pub fn apply_lifecycle(&mut self, event: LifecycleEvent) -> LifecycleOutcome {
        match event {
            LifecycleEvent::Resume => {
                if self.activate() {
                    LifecycleOutcome::Activated
                } else {
                    LifecycleOutcome::Ignored
                }
            }
            LifecycleEvent::Pause => {
                if self.deactivate() {
                    LifecycleOutcome::Deactivated
                } else {
                    LifecycleOutcome::Ignored
                }
            }
            LifecycleEvent::Destroy => {
                let stopped = self.deactivate();
                self.mode = RuntimeMode::Destroyed;
                info!("runtime destroyed");
                if stopped {
                    LifecycleOutcome::Deactivated
                } else {
                    LifecycleOutcome::Ignored
                }
            }
        }
    }

    /// Start the tick loop. Must run inside a `tokio::task::LocalSet`.
    pub fn activate(&mut self) -> bool {
        if self.mode == RuntimeMode::Destroyed {
            warn!("activate ignored after destroy");
            return false;
        }
        let frames = self.frames.clone();
        let renderer = self.renderer.clone();
        let redraws = Rc::clone(&self.redraw_requests);
        let goal = Rc::clone(&self.tick_goal);
        let started = self.controller.activate(move || {
            frames.diagram.borrow_mut().tick();
            redraws.set(redraws.get().saturating_add(1));
            if goal.target.get().is_some_and(|target| redraws.get() >= target) {
                goal.target.set(None);
                goal.reached.notify_one();
            }
            if let Some(renderer) = renderer.as_ref() {
                let frame = frames.next_frame();
                if let Err(err) = renderer.borrow_mut().present(&frame) {
                    warn!(seq = frame.seq, error = %err, "frame presentation failed");
                }
            }
        });
        if started {
            self.mode = RuntimeMode::Active;
            info!(angle = self.state().angle_degrees, "animation started");
        }
        started
    }

    pub fn deactivate(&mut self) -> bool {
        let stopped = self.controller.deactivate();
        if self.mode == RuntimeMode::Active {
            self.mode = RuntimeMode::Inactive;
        }
        if stopped {
            info!(angle = self.state().angle_degrees, "animation stopped");
        }
        stopped
    }

    /// Activate, wait until exactly `ticks` more ticks have fired, then
    /// deactivate. Counts ticks rather than elapsed time, so a slow clock
    /// cannot cut the run short. Returns `false` without running when the
    /// animation is already active or the runtime was destroyed.
    pub async fn run_ticks(&mut self, ticks: u64) -> bool {
        if ticks == 0 || self.mode != RuntimeMode::Inactive {
            return false;
        }
        let target = self.redraw_requests.get().saturating_add(ticks);
        self.tick_goal.target.set(Some(target));
        if !self.activate() {
            self.tick_goal.target.set(None);
            return false;
        }
        self.tick_goal.reached.notified().await;
        self.deactivate();
        true
    }

    fn push_diagnostic(&mut self, entry: impl Into<String>) {
        self.diagnostics.push_back(entry.into());
        while self.diagnostics.len() > MAX_DIAGNOSTICS {
            self.diagnostics.pop_front();
        }
    }
}

/// Outcome of a headless run.
#[derive(Clone, Debug)]
pub struct AnimationReport {
    pub final_frame: Frame,
    pub ticks: u64,
    pub redraws: u64,
    pub frames_presented: u64,
}

/// Run the diagram for `ticks` ticks with a recording renderer attached and
/// report the frame it ends on. Must run inside a `tokio::task::LocalSet`.
pub async fn animate(config: &DeviceConfig, ticks: u64) -> AnimationReport {
    let recorder = Rc::new(RefCell::new(RecordingRenderer::with_capacity(4)));
    let mut runtime = DeviceRuntime::new(config);
    runtime.attach_renderer(recorder.clone());

    if !runtime.run_ticks(ticks).await {
        warn!(ticks, "animation did not run");
    }

    let final_frame = runtime.render_frame();
    let frames_presented = recorder.borrow().stats().frames_presented;
    AnimationReport {
        final_frame,
        ticks,
        redraws: runtime.redraw_requests(),
        frames_presented,
    }
}

pub fn now_ms() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(dur) => dur.as_millis() as u64,
        Err(_) => 0,
    }
}
