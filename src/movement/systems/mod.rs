//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod selection;
pub(crate) mod tick;

pub(crate) use input::{configure_resolver, read_input};
pub(crate) use selection::character_hotkeys;
pub(crate) use tick::advance_actor;
