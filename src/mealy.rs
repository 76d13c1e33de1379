//! A finite state transducer after the Mealy model: per-step output depends on
//! both the current state and the input, driven by an explicit state to
//! transition table rather than branching code. For usage see the
//! woerterbuch provider, which feeds table rows through one of these.

use std::collections::HashMap;
use std::hash::Hash;

/// Implemented by the state enums the machine runs over. `all()` enumerates
/// every declared state so totality can be checked up front.
pub trait StateEnum: Copy + Eq + Hash + std::fmt::Debug + 'static {
    fn all() -> &'static [Self]
    where
        Self: Sized;

    /// Marks the states in which the scan is over. Drivers stop feeding
    /// input once the machine reaches one; its transitions only loop back.
    fn is_terminal(&self) -> bool {
        false
    }
}

/// A transition handler: pure function from an input to the next state plus
/// the transition's output. The machine owns no other mutable data.
pub type Handler<S, I, O> = Box<dyn Fn(I) -> (S, O) + Send + Sync>;

pub struct MealyMachine<S: StateEnum, I, O> {
    state: S,
    handlers: HashMap<S, Handler<S, I, O>>,
}

impl<S: StateEnum, I, O: Default> MealyMachine<S, I, O> {
    /// Builds a machine from an initial state and one handler per state.
    /// Totality of the table is a construction-time concern: callers check
    /// [`is_total`](Self::is_total) once and refuse to run an incomplete
    /// machine instead of discovering a hole mid-scan.
    pub fn from_transitions(initial: S, transitions: Vec<(S, Handler<S, I, O>)>) -> Self {
        let handlers = transitions.into_iter().collect();
        Self {
            state: initial,
            handlers,
        }
    }

    /// True iff every declared state value has an associated transition.
    /// A machine failing this is a configuration defect, not a runtime error.
    pub fn is_total(&self) -> bool {
        S::all().iter().all(|s| self.handlers.contains_key(s))
    }

    pub fn state(&self) -> S {
        self.state
    }

    /// True once the machine sits in a terminal state.
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Advances the machine one step with the given input and returns the
    /// output of the fired transition. The only side effect is the state
    /// change. Stepping a state without a handler (possible only when the
    /// caller ignored a failed totality check) leaves the state untouched
    /// and yields the default output.
    pub fn step(&mut self, input: I) -> O {
        match self.handlers.get(&self.state) {
            Some(handler) => {
                let (next, output) = handler(input);
                self.state = next;
                output
            }
            None => O::default(),
        }
    }
}
