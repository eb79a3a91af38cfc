//! Panel state machine.
//!
//! Sequences the CSS height transition around render cycles:
//!
//! ```text
//!            click                  transitionend
//!   Closed ─────────▶ Opening ─────────────────────▶ Open (height: auto)
//!     ▲                                                │ click
//!     │ transitionend                                  ▼
//!     └──────────── collapse (50ms after commit) ◀── Closing (height pinned)
//! ```
//!
//! `auto` cannot be animated, so closing first pins the height to the
//! measured pixel value, lets that render commit, and only then collapses
//! to zero.

use serde::{Deserialize, Serialize};

use crate::models::{AccordionPosition, Height, Overflow, PanelConfig, PanelState, Transition};

/// Delay between pinning the height and collapsing it to zero, long enough
/// for the browser to apply the pixel height first.
pub const COLLAPSE_DELAY_MS: u32 = 50;

/// Animation phase. Tracked alongside [`PanelState`] so that late
/// `transitionend` notifications can be told apart from current ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Lifecycle notifications, one per caller callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    Opening,
    Opened,
    Closing,
    Closed,
}

/// What a trigger click should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerIntent {
    /// Trigger disabled
    Ignored,
    /// Externally controlled: hand the position token to the caller
    Delegate(Option<AccordionPosition>),
    Open,
    Close,
}

/// Permission to run the deferred collapse. Stale once another open or
/// close has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseTicket {
    epoch: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    config: PanelConfig,
    state: PanelState,
    phase: Phase,
    externally_controlled: bool,
    committed_height: Height,
    epoch: u64,
}

impl Panel {
    pub fn new(config: PanelConfig) -> Self {
        let state = PanelState::new(&config);
        let phase = if config.open { Phase::Open } else { Phase::Closed };
        Self {
            committed_height: state.height,
            config,
            state,
            phase,
            externally_controlled: false,
            epoch: 0,
        }
    }

    /// Hand open/close decisions to the caller: clicks only delegate.
    #[must_use]
    pub fn externally_controlled(mut self, controlled: bool) -> Self {
        self.externally_controlled = controlled;
        self
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.state.is_closed
    }

    /// Whether children are part of the render: always, unless lazy
    /// rendering holds them back until the first open.
    pub fn renders_children(&self) -> bool {
        !self.config.lazy_render || self.state.has_been_opened
    }

    /// Mount lazily rendered children ahead of the first open so they can
    /// be measured. Does not change the visual state.
    pub fn reveal_children(&mut self) {
        self.state.has_been_opened = true;
    }

    pub fn trigger_intent(&self) -> TriggerIntent {
        if self.config.trigger_disabled {
            TriggerIntent::Ignored
        } else if self.externally_controlled {
            TriggerIntent::Delegate(self.config.accordion_position.clone())
        } else if self.state.is_closed {
            TriggerIntent::Open
        } else {
            TriggerIntent::Close
        }
    }

    /// Intent needed to bring the panel to `wanted` (true = open), if any.
    /// Used when the caller drives the panel through its `open` input.
    pub fn intent_for_open(&self, wanted: bool) -> Option<TriggerIntent> {
        let heading_open = !self.state.is_closed && self.phase != Phase::Closing;
        match (wanted, heading_open) {
            (true, false) => Some(TriggerIntent::Open),
            (false, true) => Some(TriggerIntent::Close),
            _ => None,
        }
    }

    /// Handle a trigger click. `measured` is the current rendered height of
    /// the content, `None` when it is not attached.
    ///
    /// `Opening`/`Closing` are reported before the state changes.
    pub fn handle_trigger_click<F>(&mut self, measured: Option<f64>, notify: F) -> TriggerIntent
    where
        F: FnMut(Lifecycle),
    {
        let intent = self.trigger_intent();
        self.apply(&intent, measured, notify);
        intent
    }

    /// Run an Open or Close intent with its lifecycle notifications.
    /// Other intents are no-ops.
    pub fn apply<F>(&mut self, intent: &TriggerIntent, measured: Option<f64>, mut notify: F)
    where
        F: FnMut(Lifecycle),
    {
        let done = match intent {
            TriggerIntent::Open => {
                notify(Lifecycle::Opening);
                self.begin_open(measured)
            }
            TriggerIntent::Close => {
                notify(Lifecycle::Closing);
                self.begin_close(measured)
            }
            TriggerIntent::Ignored | TriggerIntent::Delegate(_) => None,
        };
        if let Some(done) = done {
            notify(done);
        }
    }

    /// Start the open animation towards the measured content height.
    ///
    /// Returns `Some(Opened)` when no animation can run (content not
    /// attached, or nothing to animate) and the panel settled immediately.
    pub fn begin_open(&mut self, measured: Option<f64>) -> Option<Lifecycle> {
        self.epoch += 1;
        self.state.should_switch_auto_on_next_cycle = false;
        self.state.has_been_opened = true;
        self.state.is_closed = false;

        let target = match measured {
            Some(px) if px > 0.0 && !self.at_height(px) => px,
            _ => {
                log::debug!("Collapsible: nothing to animate, settling open");
                self.settle_open();
                return Some(Lifecycle::Opened);
            }
        };

        self.state.transition = self.config.transition();
        self.state.overflow = Overflow::Hidden;
        self.state.height = Height::Px(target);
        self.phase = Phase::Opening;
        log::debug!("Collapsible: opening to {target}px");
        None
    }

    /// Start the close animation by pinning the height to the measured
    /// content height. The collapse itself happens in [`Panel::collapse`].
    ///
    /// Returns `Some(Closed)` when the panel snapped shut instead.
    pub fn begin_close(&mut self, measured: Option<f64>) -> Option<Lifecycle> {
        self.epoch += 1;
        self.state.transition = self.config.transition();

        let Some(px) = measured.filter(|px| *px > 0.0) else {
            log::debug!("Collapsible: nothing to animate, snapping closed");
            self.state.should_switch_auto_on_next_cycle = false;
            self.state.height = Height::ZERO;
            self.state.overflow = Overflow::Hidden;
            self.state.is_closed = true;
            self.phase = Phase::Closed;
            return Some(Lifecycle::Closed);
        };

        self.state.should_switch_auto_on_next_cycle = true;
        self.state.height = Height::Px(px);
        self.phase = Phase::Closing;
        log::debug!("Collapsible: closing from {px}px");
        None
    }

    /// Post-render hook. Call once after every render of a state change.
    ///
    /// When a close was requested, returns the ticket for the deferred
    /// collapse; the host runs [`Panel::collapse`] after
    /// [`COLLAPSE_DELAY_MS`].
    pub fn commit(&mut self) -> Option<CollapseTicket> {
        let previous = std::mem::replace(&mut self.committed_height, self.state.height);
        if !self.state.should_switch_auto_on_next_cycle {
            return None;
        }
        self.state.should_switch_auto_on_next_cycle = false;
        log::trace!("Collapsible: height pinned from {previous}, collapse scheduled");
        Some(CollapseTicket { epoch: self.epoch })
    }

    /// Deferred second step of closing. Returns false for a stale ticket.
    pub fn collapse(&mut self, ticket: CollapseTicket) -> bool {
        if ticket.epoch != self.epoch || self.phase != Phase::Closing {
            log::trace!("Collapsible: dropping stale collapse");
            return false;
        }
        self.state.height = Height::ZERO;
        self.state.overflow = Overflow::Hidden;
        self.state.is_closed = true;
        true
    }

    /// The height transition on the content wrapper finished.
    pub fn handle_transition_end(&mut self) -> Option<Lifecycle> {
        match (self.state.is_closed, self.phase) {
            (false, Phase::Opening) => {
                self.settle_open();
                log::debug!("Collapsible: open");
                Some(Lifecycle::Opened)
            }
            (true, Phase::Closing) => {
                self.phase = Phase::Closed;
                log::debug!("Collapsible: closed");
                Some(Lifecycle::Closed)
            }
            (is_closed, phase) => {
                log::trace!("Collapsible: ignoring transition end (closed={is_closed}, {phase:?})");
                None
            }
        }
    }

    fn settle_open(&mut self) {
        // Transition off so the switch to `auto` does not animate; closing
        // turns it back on.
        self.state.height = Height::Auto;
        self.state.transition = Transition::None;
        self.state.overflow = self.config.overflow_when_open;
        self.phase = Phase::Open;
    }

    fn at_height(&self, px: f64) -> bool {
        match self.state.height {
            Height::Px(current) => (current - px).abs() < 0.5,
            Height::Auto => false,
        }
    }
}
