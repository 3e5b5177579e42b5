//! Watch face engine
//!
//! The engine is the one owner of the display state. It:
//! - Receives lifecycle callbacks from the host
//! - Keeps the redraw timer in step with the display phase
//! - Drains the inbound update channel and applies forecasts
//! - Draws frames on request
//!
//! Every method must be called from the host's serialized context.

use embassy_sync::blocking_mutex::raw::RawMutex;
use sunshine_display::{Bounds, DrawSurface, SurfaceError};
use sunshine_protocol::{TapKind, WeatherUpdate, WEATHER_TOPIC};

use crate::config::FaceConfig;
use crate::inbound::UpdateChannel;
use crate::render::{FrameReport, Renderer};
use crate::scheduler::{FireOutcome, RedrawScheduler, TimerToken};
use crate::state::{
    DisplayProperties, DisplayState, FacePhase, Forecast, LifecycleEvent, Stage, TapCommand,
    WindowInsets, ZoneId,
};
use crate::traits::FaceHost;
use crate::{debug, info, trace, warn};

/// What the engine did with an inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateOutcome {
    /// Forecast replaced and a frame requested
    Applied,
    /// Topic is not the weather topic
    IgnoredTopic,
    /// Payload did not decode; state unchanged
    Rejected,
    /// Face not live
    Inactive,
}

/// Lifecycle state machine holding the scheduler, channel and renderer
pub struct WatchFaceEngine<'ch, H: FaceHost, M: RawMutex, const N: usize> {
    host: H,
    updates: &'ch UpdateChannel<M, N>,
    state: DisplayState,
    scheduler: RedrawScheduler,
    renderer: Renderer,
    stage: Stage,
    /// Whether time zone notifications are currently registered
    time_zone_observer: bool,
}

impl<'ch, H: FaceHost, M: RawMutex, const N: usize> WatchFaceEngine<'ch, H, M, N> {
    /// Create an engine waiting for `Created`
    pub fn new(host: H, updates: &'ch UpdateChannel<M, N>, config: &FaceConfig) -> Self {
        Self {
            host,
            updates,
            state: DisplayState::new(),
            scheduler: RedrawScheduler::new(config.interactive_update_ms),
            renderer: Renderer::new(config),
            stage: Stage::Pending,
            time_zone_observer: false,
        }
    }

    /// Current display state
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Current composite phase
    pub fn phase(&self) -> FacePhase {
        FacePhase::resolve(self.stage, &self.state.flags())
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_timer_armed(&self) -> bool {
        self.scheduler.is_armed()
    }

    pub fn armed_token(&self) -> Option<TimerToken> {
        self.scheduler.armed_token()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Dispatch a lifecycle event to its callback
    pub fn handle_event(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Created => self.on_create(),
            LifecycleEvent::VisibilityChanged(visible) => self.on_visibility_changed(visible),
            LifecycleEvent::PropertiesChanged(props) => self.on_properties_changed(props),
            LifecycleEvent::AmbientModeChanged(ambient) => self.on_ambient_mode_changed(ambient),
            LifecycleEvent::TimeZoneChanged(zone_id) => self.on_time_zone_changed(&zone_id),
            LifecycleEvent::TimeTick => self.on_time_tick(),
            LifecycleEvent::WindowInsets(insets) => self.on_apply_window_insets(insets),
            LifecycleEvent::TapGesture(tap) => self.handle_tap(tap),
            LifecycleEvent::Destroyed => self.on_destroy(),
        }
    }

    /// Face instantiated: open the update channel, start hidden
    pub fn on_create(&mut self) {
        if !self.enter(&LifecycleEvent::Created) {
            return;
        }
        self.state.reset_flags();
        self.updates.open();
        info!("watch face created");
        self.update_timer();
    }

    pub fn on_visibility_changed(&mut self, visible: bool) {
        if !self.enter(&LifecycleEvent::VisibilityChanged(visible)) {
            return;
        }
        debug!("visibility -> {}", visible);
        self.state.set_visible(visible);

        if visible {
            self.register_time_zone_observer();
            // Zone may have changed while no one was listening
            let zone_id = self.host.system_zone();
            self.state.set_zone(zone_id);
            self.refresh_clock();
        } else {
            self.unregister_time_zone_observer();
        }

        self.update_timer();
    }

    pub fn on_properties_changed(&mut self, props: DisplayProperties) {
        if !self.enter(&LifecycleEvent::PropertiesChanged(props)) {
            return;
        }
        debug!(
            "properties: low_bit_ambient={} burn_in_protection={}",
            props.low_bit_ambient, props.burn_in_protection
        );
        self.state
            .set_capabilities(props.low_bit_ambient, props.burn_in_protection);
        self.update_ambient_hints();
    }

    pub fn on_ambient_mode_changed(&mut self, ambient: bool) {
        if !self.enter(&LifecycleEvent::AmbientModeChanged(ambient)) {
            return;
        }

        if self.state.is_ambient() != ambient {
            debug!("ambient -> {}", ambient);
            self.state.set_ambient(ambient);
            self.update_ambient_hints();
            self.host.invalidate();
        }

        self.update_timer();
    }

    /// Once-per-minute host tick; the only redraw source in ambient mode
    pub fn on_time_tick(&mut self) {
        if !self.enter(&LifecycleEvent::TimeTick) {
            return;
        }
        trace!("time tick");
        self.host.invalidate();
    }

    pub fn on_apply_window_insets(&mut self, insets: WindowInsets) {
        if !self.enter(&LifecycleEvent::WindowInsets(insets)) {
            return;
        }
        debug!("window insets: round={}", insets.is_round);
        self.renderer.apply_insets(insets);
    }

    /// Touch input as reported by the host, kind given as its wire code
    pub fn on_tap_command(&mut self, code: u8, x: i32, y: i32, event_time_ms: u64) {
        let Some(kind) = TapKind::from_code(code) else {
            debug!("unknown tap type {}", code);
            return;
        };
        self.handle_tap(TapCommand::new(kind, x, y, event_time_ms));
    }

    fn handle_tap(&mut self, tap: TapCommand) {
        if !self.enter(&LifecycleEvent::TapGesture(tap)) {
            return;
        }
        if tap.kind.completes_gesture() {
            let count = self.state.record_tap();
            trace!("tap {} at ({}, {})", count, tap.x, tap.y);
            self.host.invalidate();
        }
    }

    pub fn on_time_zone_changed(&mut self, zone_id: &str) {
        let Ok(zone_id) = ZoneId::try_from(zone_id) else {
            warn!("time zone id too long, ignoring");
            return;
        };
        if !self.enter(&LifecycleEvent::TimeZoneChanged(zone_id.clone())) {
            return;
        }
        info!("time zone -> {}", zone_id.as_str());
        self.state.set_zone(zone_id);
        self.refresh_clock();
        self.host.invalidate();
    }

    /// Face torn down: stop the timer, drop observers, close the channel
    pub fn on_destroy(&mut self) {
        if !self.enter(&LifecycleEvent::Destroyed) {
            return;
        }
        self.scheduler.cancel(&mut self.host);
        self.unregister_time_zone_observer();
        self.updates.close();
        info!("watch face destroyed");
    }

    /// Wake-up delivered by the platform timer
    ///
    /// Stale tokens and fires after teardown are dropped. An accepted fire
    /// requests one frame, then re-arms only if the phase still wants it.
    pub fn on_timer_fired(&mut self, token: TimerToken) -> FireOutcome {
        if !self.stage.is_live() {
            debug!("timer fire ({}) after teardown ignored", token.0);
            return FireOutcome::Stale;
        }

        let still_running = self.phase().timer_should_run();
        let now_ms = self.host.now_ms();
        let outcome = self
            .scheduler
            .on_fire(token, still_running, now_ms, &mut self.host);
        if outcome.is_accepted() {
            self.host.invalidate();
        }
        outcome
    }

    /// Apply one `(topic, payload)` delivery
    ///
    /// The forecast is replaced only after the whole payload decodes.
    pub fn on_message(&mut self, topic: &str, payload: &[u8]) -> UpdateOutcome {
        if !self.stage.is_live() {
            debug!("message on {} while not live, dropped", topic);
            return UpdateOutcome::Inactive;
        }
        if topic != WEATHER_TOPIC {
            debug!("ignoring message on unknown topic {}", topic);
            return UpdateOutcome::IgnoredTopic;
        }

        match WeatherUpdate::parse(payload) {
            Ok(update) => {
                info!(
                    "weather update: high={} low={} condition={:?}",
                    update.high,
                    update.low,
                    update.condition_id()
                );
                self.state.apply_forecast(Forecast::from(update));
                self.host.invalidate();
                UpdateOutcome::Applied
            }
            Err(e) => {
                warn!("dropping malformed weather update: {}", e);
                UpdateOutcome::Rejected
            }
        }
    }

    /// Apply everything queued on the update channel; returns the count
    pub fn pump_inbound(&mut self) -> usize {
        let mut handled = 0;
        while let Some(message) = self.updates.try_take() {
            self.on_message(&message.topic, &message.payload);
            handled += 1;
        }
        handled
    }

    /// Draw one frame
    ///
    /// Reads the clock first so the frame shows the current time.
    pub fn draw<S>(&mut self, surface: &mut S, bounds: Bounds) -> Result<FrameReport, SurfaceError>
    where
        S: DrawSurface + ?Sized,
    {
        if self.stage == Stage::Destroyed {
            return Err(SurfaceError::Unavailable);
        }
        self.refresh_clock();
        self.renderer
            .draw(&self.state, &self.host, surface, bounds)
    }

    /// Check the stage accepts `event` and advance it
    fn enter(&mut self, event: &LifecycleEvent) -> bool {
        if !self.stage.accepts(event) {
            debug!("{:?} ignored in stage {:?}", event, self.stage);
            return false;
        }
        self.stage = self.stage.transition(event);
        true
    }

    fn refresh_clock(&mut self) {
        let now_ms = self.host.now_ms();
        let now = self.host.local_time(self.state.zone_id(), now_ms);
        self.state.set_now(now);
    }

    /// Anti-aliasing is off only while ambient on a low-bit display
    fn update_ambient_hints(&mut self) {
        let flags = self.state.flags();
        self.renderer
            .set_ambient_hints(!(flags.ambient && flags.low_bit_ambient));
    }

    /// Recompute whether the interactive timer runs from the current phase
    fn update_timer(&mut self) {
        let run = self.phase().timer_should_run();
        let now_ms = self.host.now_ms();
        self.scheduler
            .set_desired_running(run, now_ms, &mut self.host);
    }

    fn register_time_zone_observer(&mut self) {
        if !self.time_zone_observer {
            self.host.register_time_zone_observer();
            self.time_zone_observer = true;
        }
    }

    fn unregister_time_zone_observer(&mut self) {
        if self.time_zone_observer {
            self.host.unregister_time_zone_observer();
            self.time_zone_observer = false;
        }
    }
}
