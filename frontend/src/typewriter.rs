//! Typewriter effect for the hero title.
//!
//! The cycler is a pure stepper: [`CyclerState::advance`] takes the current
//! state and returns the next one along with the text to show and how long
//! to wait. [`Typewriter`] binds it to a text surface and [`start`] drives it
//! through a [`Scheduler`], so the whole loop runs headless in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use serde::Deserialize;
use web_sys::Document;

/// Id of the element the phrases are typed into.
pub const TARGET_ID: &str = "typewriter";

/// Non-empty, cyclic list of phrases.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl PhraseList {
    /// Returns `None` for an empty list; the effect must not start then.
    pub fn new(phrases: Vec<String>) -> Option<Self> {
        if phrases.is_empty() {
            None
        } else {
            Some(Self { phrases })
        }
    }

    pub fn count(&self) -> usize {
        self.phrases.len()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingDelays {
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Pause once a phrase is fully typed.
    pub hold_full_ms: u32,
    /// Pause once a phrase is fully deleted, before the next one starts.
    pub hold_empty_ms: u32,
}

impl Default for TypingDelays {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            hold_full_ms: 2000,
            hold_empty_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclerState {
    pub index: usize,
    pub char_count: usize,
    pub phase: Phase,
}

impl Default for CyclerState {
    fn default() -> Self {
        Self {
            index: 0,
            char_count: 0,
            phase: Phase::Typing,
        }
    }
}

/// Result of one [`CyclerState::advance`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: CyclerState,
    pub text: String,
    pub delay_ms: u32,
}

impl CyclerState {
    pub fn advance(&self, phrases: &PhraseList, delays: &TypingDelays) -> Step {
        let phrase = phrases.get(self.index);
        let full = phrase.chars().count();
        let mut next = *self;

        let delay_ms = match self.phase {
            Phase::Typing => {
                next.char_count = (self.char_count + 1).min(full);
                if next.char_count == full {
                    next.phase = Phase::Deleting;
                    delays.hold_full_ms
                } else {
                    delays.type_ms
                }
            }
            Phase::Deleting => {
                next.char_count = self.char_count.saturating_sub(1);
                if next.char_count == 0 {
                    next.phase = Phase::Typing;
                    next.index = (self.index + 1) % phrases.count();
                    delays.hold_empty_ms
                } else {
                    delays.delete_ms
                }
            }
        };

        Step {
            text: phrase.chars().take(next.char_count).collect(),
            state: next,
            delay_ms,
        }
    }
}

/// Something whose displayed text can be replaced.
pub trait TextSurface {
    fn set_text(&self, text: &str);
}

impl TextSurface for web_sys::Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// Single-shot delayed callbacks.
pub trait Scheduler {
    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

pub struct Typewriter<S> {
    phrases: PhraseList,
    delays: TypingDelays,
    state: CyclerState,
    surface: S,
}

impl<S: TextSurface> Typewriter<S> {
    pub fn new(phrases: PhraseList, delays: TypingDelays, surface: S) -> Self {
        Self {
            phrases,
            delays,
            state: CyclerState::default(),
            surface,
        }
    }

    /// Writes the next frame to the surface and returns the wait before the
    /// following one.
    pub fn tick(&mut self) -> u32 {
        let step = self.state.advance(&self.phrases, &self.delays);
        self.surface.set_text(&step.text);
        self.state = step.state;
        step.delay_ms
    }
}

/// Stops a running typewriter. Dropping the handle leaves it running.
#[derive(Debug, Clone, Default)]
pub struct TypewriterHandle {
    stopped: Rc<Cell<bool>>,
}

impl TypewriterHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Runs the first frame now and keeps rescheduling until stopped.
pub fn start<S, H>(typewriter: Typewriter<S>, scheduler: H) -> TypewriterHandle
where
    S: TextSurface + 'static,
    H: Scheduler + Clone + 'static,
{
    let handle = TypewriterHandle::default();
    run_frame(
        Rc::new(RefCell::new(typewriter)),
        scheduler,
        handle.stopped.clone(),
    );
    handle
}

fn run_frame<S, H>(typewriter: Rc<RefCell<Typewriter<S>>>, scheduler: H, stopped: Rc<Cell<bool>>)
where
    S: TextSurface + 'static,
    H: Scheduler + Clone + 'static,
{
    if stopped.get() {
        return;
    }
    let delay = typewriter.borrow_mut().tick();
    let next = scheduler.clone();
    scheduler.schedule_once(
        delay,
        Box::new(move || run_frame(typewriter, next, stopped)),
    );
}

/// Starts the effect on the page's `#typewriter` element. Does nothing when
/// the element is missing or there are no phrases.
pub fn attach(document: &Document, phrases: Vec<String>, delays: TypingDelays) -> Option<TypewriterHandle> {
    let Some(target) = document.get_element_by_id(TARGET_ID) else {
        debug!("No #{} element, typewriter disabled", TARGET_ID);
        return None;
    };
    let phrases = PhraseList::new(phrases)?;
    Some(start(Typewriter::new(phrases, delays, target), TimeoutScheduler))
}
