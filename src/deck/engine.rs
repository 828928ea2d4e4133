//! The composed swipe core.
//!
//! [`Deck`] wires the gesture tracker, the leaving controller, the stack and
//! the refill policy together. It is synchronous and owns no I/O: every input
//! returns the [`DeckEffect`]s the surrounding event loop must carry out
//! (fetch cards, record feedback). Time is passed in explicitly so the exit
//! delay is driven by the caller's tick.

use std::time::Instant;

use crate::config::DeckConfig;
use crate::gesture::{
    classify, CardTransform, GestureState, GestureTracker, PointerPhase, PointerSample,
    SwipeDirection, SwipeOutcome,
};
use crate::models::Card;

use super::leaving::{LeavingController, LeavingState};
use super::refill::RefillPolicy;
use super::stack::StackManager;

/// Work the event loop must perform on behalf of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckEffect {
    /// Ask the card supplier for `count` cards and [`Deck::append`] the result.
    RequestRefill { count: usize },
    /// Report a decided swipe to the feedback sink.
    RecordFeedback {
        card_id: String,
        direction: SwipeDirection,
    },
}

/// Explicit directional commands (keyboard or buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckCommand {
    /// Swipe left.
    Pass,
    /// Swipe right.
    Save,
}

impl DeckCommand {
    pub fn direction(&self) -> SwipeDirection {
        match self {
            DeckCommand::Pass => SwipeDirection::Left,
            DeckCommand::Save => SwipeDirection::Right,
        }
    }
}

/// Tunables the deck reads from [`DeckConfig`].
#[derive(Debug, Clone, Copy)]
struct DeckSettings {
    threshold: f64,
    tilt_divisor: f64,
    max_tilt: f64,
}

/// Single-threaded swipe engine for one deck of cards.
#[derive(Debug, Clone)]
pub struct Deck {
    tracker: GestureTracker,
    leaving: LeavingController,
    stack: StackManager,
    policy: RefillPolicy,
    settings: DeckSettings,
    /// Stack length at the last refill evaluation; `None` before mount.
    observed_len: Option<usize>,
}

impl Deck {
    pub fn new(config: &DeckConfig) -> Self {
        Self {
            tracker: GestureTracker::new(),
            leaving: LeavingController::new(config.exit_delay),
            stack: StackManager::new(),
            policy: config.refill_policy(),
            settings: DeckSettings {
                threshold: config.swipe_threshold,
                tilt_divisor: config.tilt_divisor,
                max_tilt: config.max_tilt_degrees,
            },
            observed_len: None,
        }
    }

    /// Build a deck pre-seeded with `cards` (duplicates dropped).
    pub fn with_cards(config: &DeckConfig, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut deck = Self::new(config);
        deck.stack.append(cards);
        deck
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn stack(&self) -> &StackManager {
        &self.stack
    }

    pub fn front(&self) -> Option<&Card> {
        self.stack.front()
    }

    pub fn gesture(&self) -> GestureState {
        self.tracker.state()
    }

    pub fn leaving(&self) -> Option<&LeavingState> {
        self.leaving.current()
    }

    pub fn is_leaving(&self) -> bool {
        self.leaving.is_leaving()
    }

    /// When the pending exit completes, for scheduling the next tick.
    pub fn exit_deadline(&self) -> Option<Instant> {
        self.leaving.deadline()
    }

    pub fn refill_policy(&self) -> RefillPolicy {
        self.policy
    }

    /// Displayed transform of the front card at `now`.
    ///
    /// `travel` is the horizontal distance that takes a card fully off-stage.
    pub fn front_transform(&self, now: Instant, travel: f64) -> CardTransform {
        match (self.leaving.current(), self.leaving.progress(now)) {
            (Some(state), Some(progress)) => {
                CardTransform::leaving(state.direction, progress, travel, self.settings.max_tilt)
            }
            _ => CardTransform::from_gesture(
                &self.tracker.state(),
                self.settings.tilt_divisor,
                self.settings.max_tilt,
            ),
        }
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Initial refill check when the deck first appears.
    pub fn mount(&mut self) -> Vec<DeckEffect> {
        self.observed_len = None;
        self.check_refill()
    }

    /// Feed a normalized pointer sample bound to the front card.
    ///
    /// An exit whose delay has already elapsed at `now` completes first, so
    /// input is never checked against a stale leaving state.
    pub fn pointer(&mut self, sample: &PointerSample, now: Instant) -> Vec<DeckEffect> {
        let mut effects = self.tick(now);
        effects.extend(self.route_pointer(sample, now));
        effects
    }

    /// Apply an explicit pass/save command. No threshold applies.
    pub fn command(&mut self, command: DeckCommand, now: Instant) -> Vec<DeckEffect> {
        let mut effects = self.tick(now);
        effects.extend(self.apply_command(command, now));
        effects
    }

    fn route_pointer(&mut self, sample: &PointerSample, now: Instant) -> Vec<DeckEffect> {
        match sample.phase {
            PointerPhase::Begin => {
                if self.leaving.is_leaving() {
                    tracing::trace!("Ignoring gesture begin while a card is leaving");
                    return Vec::new();
                }
                if self.stack.is_empty() {
                    return Vec::new();
                }
                self.tracker.apply(sample);
                Vec::new()
            }
            PointerPhase::Move | PointerPhase::Cancel => {
                self.tracker.apply(sample);
                Vec::new()
            }
            PointerPhase::End => {
                let Some((delta_x, _)) = self.tracker.apply(sample) else {
                    return Vec::new();
                };
                match classify(delta_x, self.settings.threshold) {
                    SwipeOutcome::Swipe(direction) => self.decide(direction, now),
                    SwipeOutcome::SnapBack => {
                        tracing::debug!("Snap back (delta_x={:.1})", delta_x);
                        Vec::new()
                    }
                }
            }
        }
    }

    fn apply_command(&mut self, command: DeckCommand, now: Instant) -> Vec<DeckEffect> {
        // A pending exit gates every new outcome, not just the animation.
        if self.leaving.is_leaving() {
            tracing::trace!("Ignoring {:?} while a card is leaving", command);
            return Vec::new();
        }
        self.tracker.reset();
        self.decide(command.direction(), now)
    }

    /// Drop an in-progress drag; the card snaps back.
    pub fn cancel_gesture(&mut self) {
        self.tracker.reset();
    }

    /// Advance time: completes the pending exit once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> Vec<DeckEffect> {
        let Some(done) = self.leaving.poll(now) else {
            return Vec::new();
        };

        match self.stack.front() {
            Some(front) if front.id == done.card_id => {}
            other => {
                tracing::warn!(
                    "Leaving card {} is not at the front (front={:?}); skipping removal",
                    done.card_id,
                    other.map(|c| c.id.as_str())
                );
                self.tracker.reset();
                return self.check_refill();
            }
        }

        if let Some(card) = self.stack.pop_front() {
            tracing::debug!("Card {} left {}", card.id, done.direction);
            if done.direction == SwipeDirection::Right {
                self.stack.enqueue_saved(card);
            }
        }
        self.tracker.reset();
        self.check_refill()
    }

    /// Append supplier results to the tail of the stack.
    pub fn append(&mut self, cards: Vec<Card>) -> Vec<DeckEffect> {
        let offered = cards.len();
        let added = self.stack.append(cards);
        tracing::info!(
            "Appended {} of {} fetched cards (stack={})",
            added,
            offered,
            self.stack.len()
        );
        self.check_refill()
    }

    /// Explicit refill command: always requests cards, regardless of depth.
    pub fn force_refill(&mut self) -> Vec<DeckEffect> {
        let len = self.stack.len();
        self.observed_len = Some(len);
        vec![DeckEffect::RequestRefill {
            count: self.policy.forced_request_size(len),
        }]
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn decide(&mut self, direction: SwipeDirection, now: Instant) -> Vec<DeckEffect> {
        let Some(card_id) = self.stack.front().map(|card| card.id.clone()) else {
            return Vec::new();
        };
        if !self.leaving.start(&card_id, direction, now) {
            return Vec::new();
        }
        tracing::debug!("Swipe {} on card {}", direction, card_id);
        vec![DeckEffect::RecordFeedback { card_id, direction }]
    }

    /// Evaluate the refill policy if the stack length changed since the last
    /// evaluation.
    fn check_refill(&mut self) -> Vec<DeckEffect> {
        let len = self.stack.len();
        if self.observed_len == Some(len) {
            return Vec::new();
        }
        self.observed_len = Some(len);
        match self.policy.request_size(len) {
            Some(count) => {
                tracing::info!(
                    "Stack depth {} below floor {}; requesting {} cards",
                    len,
                    self.policy.floor,
                    count
                );
                vec![DeckEffect::RequestRefill { count }]
            }
            None => Vec::new(),
        }
    }
}
