mod demo_mode;
mod demo_stocks;

pub use demo_mode::{DemoMode, PreferenceChange};
