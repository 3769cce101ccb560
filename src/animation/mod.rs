//! Timed path morphs and the sequencer chaining them across layers.

pub(crate) mod ease;
pub(crate) mod sequencer;
pub(crate) mod step;
