//! Session control: turns front-end commands into round and score changes.

mod command;
#[allow(clippy::module_inception)]
mod controller;
mod effects;

pub use command::{Command, Phase, Transition};
pub use controller::SessionController;
pub use effects::{Cue, EffectStatus, Effects, NoEffects};
