//! Utilities to implement the different futures of this crate.

mod outcome;
mod output;
mod pin;
mod poll_state;
mod trace;
mod wakers;

pub(crate) use outcome::Outcome;
pub(crate) use output::{OutputArray, OutputVec};
pub(crate) use pin::{get_pin_mut, get_pin_mut_from_vec};
pub(crate) use poll_state::{pending_slots, PollState};
pub(crate) use trace::trace;
pub(crate) use wakers::{WakerArray, WakerVec};

#[cfg(test)]
pub(crate) use wakers::DummyWaker;

#[cfg(test)]
pub(crate) mod channel;
