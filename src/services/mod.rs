// Service module exports

pub mod agenda;
pub mod drag;
pub mod event;
pub mod grid;
pub mod layout;
pub mod navigation;
pub mod search;
pub mod settings;
