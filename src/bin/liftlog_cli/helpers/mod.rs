// ABOUTME: Helper modules for the liftlog CLI
// ABOUTME: Terminal and JSON output formatting

pub mod display;
