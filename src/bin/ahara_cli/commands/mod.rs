// ABOUTME: Command implementations for ahara-cli
// ABOUTME: Inference commands need a loaded engine, guide commands do not

pub mod guide;
pub mod inference;
