use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use crossbeam::channel::{self, Sender};
use log::{debug, info, trace};
use mandelbrot_explorer::{
    ColourSchemeKind, Complex, Frame, FrameSink, PixelSize, RenderController, RenderSettings,
    ViewState, constants,
};

/// Progressive Mandelbrot renderer.
///
/// Issues a burst of zoom requests, faster than the renderer can finish them,
/// and reports which frames survive to the final view.
#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer", version)]
struct Cli {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Real part of the starting view center
    #[arg(long, allow_hyphen_values = true, default_value_t = constants::INITIAL_CENTER.real)]
    center_re: f64,

    /// Imaginary part of the starting view center
    #[arg(long, allow_hyphen_values = true, default_value_t = constants::INITIAL_CENTER.imag)]
    center_im: f64,

    /// Starting scale in plane units per pixel
    #[arg(long, default_value_t = constants::INITIAL_SCALE)]
    scale: f64,

    /// Zoom levels to step through, one request each
    #[arg(long, default_value_t = 8)]
    zoom_steps: u32,

    /// Fixed iteration budget (automatic from zoom level when omitted)
    #[arg(long)]
    iterations: Option<u32>,

    /// Worker threads per pass (all cores when omitted)
    #[arg(long)]
    threads: Option<usize>,

    /// Disable the four-lane pre-pass
    #[arg(long)]
    no_batch: bool,

    /// Stop after the coarse pass of each request
    #[arg(long)]
    downscale_only: bool,

    #[arg(long, value_enum, default_value_t = ColourScheme::RedRamp)]
    colour_scheme: ColourScheme,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ColourScheme {
    RedRamp,
    Fire,
    BlueWhite,
}

impl From<ColourScheme> for ColourSchemeKind {
    fn from(scheme: ColourScheme) -> Self {
        match scheme {
            ColourScheme::RedRamp => ColourSchemeKind::RedRamp,
            ColourScheme::Fire => ColourSchemeKind::FireGradient,
            ColourScheme::BlueWhite => ColourSchemeKind::BlueWhiteGradient,
        }
    }
}

impl Cli {
    fn settings(&self) -> RenderSettings {
        RenderSettings {
            threads_count: self.threads.unwrap_or(1),
            iterations_count: self.iterations.unwrap_or(constants::MIN_ITERATIONS),
            threads_count_auto: self.threads.is_none(),
            iterations_count_auto: self.iterations.is_none(),
            batch_pre_pass: !self.no_batch,
            colour_scheme: self.colour_scheme.into(),
        }
    }
}

/// Forwards frames over a rendezvous channel, so the render thread blocks
/// until the consumer takes each frame.
struct ChannelFrameSink {
    sender: Sender<Frame>,
}

impl FrameSink for ChannelFrameSink {
    fn frame_ready(&self, frame: Frame) {
        if self.sender.send(frame).is_err() {
            trace!("frame dropped, consumer has gone away");
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    requests: u64,
    accepted: usize,
    discarded: usize,
    final_frame_coarse: bool,
}

fn run(cli: &Cli) -> Result<Summary, Box<dyn std::error::Error>> {
    let pixel_size = PixelSize::new(cli.width, cli.height)?;
    let (sender, receiver) = channel::bounded(0);

    let mut controller = RenderController::new(Arc::new(ChannelFrameSink { sender }));
    controller.set_settings(cli.settings());

    let mut view = ViewState::new(pixel_size);
    view.look_at(Complex::new(cli.center_re, cli.center_im), cli.scale);
    view.set_cursor_dependent_zoom(false);

    let start = Instant::now();
    let mut summary = Summary::default();

    let mut issue = |view: &mut ViewState, controller: &mut RenderController| {
        let request = view.next_request(cli.downscale_only);
        controller.request(
            request.sequence_id,
            request.center,
            request.pixel_size,
            request.scale,
            request.zoom_level,
            request.downscale_only,
        );
        debug!(
            "request {}: zoom level {}, scale {:e}",
            request.sequence_id, request.zoom_level, request.scale
        );
        summary.requests += 1;
    };

    issue(&mut view, &mut controller);
    for _ in 0..cli.zoom_steps {
        if !view.zoom(None, 1.0) {
            break;
        }
        issue(&mut view, &mut controller);
    }

    let settings = controller.settings();
    info!(
        "{} requests issued, {} threads, {} iterations for the final view",
        summary.requests, settings.threads_count, settings.iterations_count
    );

    for frame in receiver.iter() {
        if !view.accepts(frame.sequence_id) {
            debug!("discarding stale frame of request {}", frame.sequence_id);
            summary.discarded += 1;
            continue;
        }

        let size = frame.pixel_buffer.pixel_size();
        info!(
            "request {}: {} frame {}x{} rendered in {:?}",
            frame.sequence_id,
            if frame.coarse { "coarse" } else { "precise" },
            size.width(),
            size.height(),
            frame.render_duration
        );
        summary.accepted += 1;
        summary.final_frame_coarse = frame.coarse;

        if !frame.coarse || cli.downscale_only {
            break;
        }
    }

    // the render thread may be blocked handing over a frame
    drop(receiver);
    controller.shutdown();

    info!(
        "finished in {:?}: {} frames accepted, {} discarded",
        start.elapsed(),
        summary.accepted,
        summary.discarded
    );

    Ok(summary)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    run(&Cli::parse())?;

    Ok(())
}
