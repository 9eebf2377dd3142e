// Headless backend: replays a scripted event stream and renders off-screen
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::draw::{CairoRenderer, Palette, render_frame};
use crate::input::{InputState, Layout};
use crate::script::EventScript;

/// What a finished replay produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySummary {
    /// Frames rendered
    pub frames: usize,
    /// Events fed to the state machine
    pub events: usize,
    /// Cells in the history after the last frame
    pub points: usize,
    /// Last algorithm run duration in seconds
    pub last_execution_secs: f64,
    /// Whether a close event ended the replay early
    pub closed: bool,
}

/// Keeps ticks at a fixed rate when replaying in real time.
struct FrameClock {
    frame_time: Duration,
    next_frame: Instant,
}

impl FrameClock {
    fn new(frame_rate: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / frame_rate.max(1),
            next_frame: Instant::now(),
        }
    }

    /// Sleeps until the next frame is due.
    fn wait(&mut self) {
        self.next_frame += self.frame_time;
        let now = Instant::now();
        if self.next_frame > now {
            thread::sleep(self.next_frame - now);
        } else {
            // Running behind; don't try to catch up with a burst
            self.next_frame = now;
        }
    }
}

/// Headless backend state
pub struct HeadlessBackend {
    surface: cairo::ImageSurface,
    palette: Palette,
    frame_rate: u32,
    input_state: InputState,
}

impl HeadlessBackend {
    pub fn new(config: &Config) -> Result<Self> {
        let layout = Layout::from_config(config);
        let surface = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            layout.window_width(),
            layout.window_height(),
        )
        .context("Failed to create Cairo surface")?;

        info!(
            "Created {}x{} surface ({}x{} cells of {} px, sidebar {} px)",
            layout.window_width(),
            layout.window_height(),
            layout.grid_width,
            layout.grid_height,
            layout.cell_size,
            layout.sidebar_width
        );

        Ok(Self {
            surface,
            palette: Palette::from_config(&config.colors),
            frame_rate: config.performance.frame_rate,
            input_state: InputState::new(layout),
        })
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Runs the frame loop over every tick of the script.
    ///
    /// Each tick feeds its events through the state machine in order, then
    /// redraws the whole frame. A close event stops the loop after the
    /// current frame has been drawn.
    pub fn run(&mut self, script: &EventScript, realtime: bool) -> Result<ReplaySummary> {
        let mut clock = realtime.then(|| FrameClock::new(self.frame_rate));
        let mut frames = 0;
        let mut events = 0;

        for tick in script.ticks() {
            for event in tick {
                self.input_state.handle_event(*event);
                events += 1;
            }

            self.render()?;
            frames += 1;

            if self.input_state.should_exit {
                info!("Exit requested, stopping replay after frame {frames}");
                break;
            }

            if let Some(clock) = clock.as_mut() {
                clock.wait();
            }
        }

        // A script without ticks still produces one frame
        if frames == 0 {
            self.render()?;
            frames = 1;
        }

        Ok(ReplaySummary {
            frames,
            events,
            points: self.input_state.history.len(),
            last_execution_secs: self.input_state.history.last_execution_secs(),
            closed: self.input_state.should_exit,
        })
    }

    fn render(&mut self) -> Result<()> {
        let ctx = cairo::Context::new(&self.surface).context("Failed to create Cairo context")?;
        let mut renderer = CairoRenderer::new(&ctx, self.input_state.layout, self.palette);
        render_frame(&mut renderer, &self.input_state, self.palette.points);
        debug!(
            "Rendered frame with {} cells",
            self.input_state.history.len()
        );
        Ok(())
    }

    /// Writes the most recent frame as a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<()> {
        self.surface.flush();
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        self.surface
            .write_to_png(&mut file)
            .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
        info!("Wrote frame to {}", path.display());
        Ok(())
    }
}
