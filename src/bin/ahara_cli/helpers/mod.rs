// ABOUTME: Helper modules for ahara-cli
// ABOUTME: JSON input and output plumbing shared by commands

pub mod io;
