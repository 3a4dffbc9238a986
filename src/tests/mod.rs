//! Cross-module tests exercising the engines together, the way the TUI
//! consumer drives them.

mod properties;
mod types;
