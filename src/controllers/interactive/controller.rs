use crate::controllers::interactive::data::render_settings::RenderSettings;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::actions::render_pass::render_pass::run_pass;
use crate::core::constants::COARSE_SIZE_MULTIPLIER;
use crate::core::data::complex::Complex;
use crate::core::data::frame::Frame;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::render_request::RenderRequest;
use crossbeam::atomic::AtomicCell;
use log::{debug, error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

struct SharedState {
    requested: AtomicCell<Option<RenderRequest>>,
    settings: AtomicCell<RenderSettings>,
    drop_frame: AtomicBool,
    shutdown: AtomicBool,
    wait_lock: Mutex<()>,
    wake: Condvar,
    sink: Arc<dyn FrameSink>,
}

impl SharedState {
    fn lock_wait(&self) -> MutexGuard<'_, ()> {
        self.wait_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Abandons the current pass and wakes the render thread.
    fn retarget(&self) {
        self.drop_frame.store(true, Ordering::Release);

        // taken so the signal cannot land between the render thread's flag
        // check and its wait
        let _guard = self.lock_wait();
        self.wake.notify_one();
    }

    fn stop(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
        self.retarget();
    }

    fn is_cancelled(&self) -> bool {
        self.drop_frame.load(Ordering::Relaxed) || self.shutdown.load(Ordering::Relaxed)
    }

    fn wait_for_retarget(&self) {
        let mut guard = self.lock_wait();
        while !self.drop_frame.load(Ordering::Acquire) {
            guard = self.wake.wait(guard).unwrap_or_else(PoisonError::into_inner);
        }
        self.drop_frame.swap(false, Ordering::AcqRel);
    }

    fn deliver(&self, frame: Option<Frame>) {
        if let Some(frame) = frame {
            debug!(
                "request {}: delivering {} frame",
                frame.sequence_id,
                if frame.coarse { "coarse" } else { "precise" }
            );
            self.sink.frame_ready(frame);
        }
    }
}

/// Progressive renderer driving a background thread.
///
/// Every request is rendered as a coarse overscan frame followed, unless the
/// request is `downscale_only` or is superseded first, by a precise frame.
/// Only the newest request is kept; a new one cancels whatever pass is in
/// flight. The thread starts lazily on the first request.
pub struct RenderController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

/// Stops a [`RenderController`]'s render thread from any thread.
#[derive(Clone)]
pub struct StopHandle {
    shared: Arc<SharedState>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.shared.stop();
    }
}

impl RenderController {
    pub fn new(sink: Arc<dyn FrameSink>) -> Self {
        let shared = Arc::new(SharedState {
            requested: AtomicCell::new(None),
            settings: AtomicCell::new(RenderSettings::default().resolved()),
            drop_frame: AtomicBool::new(false),
            shutdown: AtomicBool::new(false),
            wait_lock: Mutex::new(()),
            wake: Condvar::new(),
            sink,
        });

        Self {
            shared,
            worker: None,
        }
    }

    /// Replaces the pending request and retargets the renderer to it,
    /// starting the render thread if it is not running.
    ///
    /// `sequence_id` is echoed in every frame of this request and should
    /// increase with each call.
    pub fn request(
        &mut self,
        sequence_id: u64,
        center: Complex,
        pixel_size: PixelSize,
        scale: f64,
        zoom_level: f64,
        downscale_only: bool,
    ) {
        let settings = self.shared.settings.load();
        self.shared.requested.store(Some(settings.request(
            sequence_id,
            center,
            pixel_size,
            scale,
            zoom_level,
            downscale_only,
        )));

        let finished = self
            .worker
            .as_ref()
            .is_some_and(JoinHandle::is_finished);
        if finished || self.shared.shutdown.load(Ordering::Acquire) {
            self.join_worker();
        }

        if self.worker.is_some() {
            self.shared.retarget();
        } else {
            self.start();
        }
    }

    /// Asks the render thread to finish. Returns immediately.
    pub fn stop(&self) {
        self.shared.stop();
    }

    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Stops the render thread and waits for it to exit.
    pub fn shutdown(&mut self) {
        self.shared.stop();
        self.join_worker();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Current settings. With auto iterations, the count reported is the one
    /// resolved for the latest request.
    #[must_use]
    pub fn settings(&self) -> RenderSettings {
        let mut settings = self.shared.settings.load();

        if settings.iterations_count_auto {
            if let Some(request) = self.shared.requested.load() {
                settings.iterations_count = request.iterations_count;
            }
        }

        settings
    }

    /// Takes effect from the next request.
    pub fn set_settings(&self, settings: RenderSettings) {
        self.shared.settings.store(settings.resolved());
    }

    fn start(&mut self) {
        self.shared.shutdown.store(false, Ordering::Relaxed);
        self.shared.drop_frame.store(false, Ordering::Release);

        let worker_shared = Arc::clone(&self.shared);
        self.worker = Some(thread::spawn(move || {
            Self::render_loop(&worker_shared);
        }));
    }

    fn join_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("render thread panicked");
            }
        }
    }

    fn render_loop(shared: &SharedState) {
        info!("render thread started");

        let cancel = || shared.is_cancelled();

        while !shared.shutdown.load(Ordering::Relaxed) {
            if let Some(current) = shared.requested.load() {
                shared.deliver(run_pass(&current, COARSE_SIZE_MULTIPLIER, true, &cancel));

                if !current.downscale_only && !shared.drop_frame.load(Ordering::Acquire) {
                    shared.deliver(run_pass(&current, 1, false, &cancel));
                }
            }

            shared.wait_for_retarget();
        }

        info!("render thread stopped");
    }
}

impl Drop for RenderController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
