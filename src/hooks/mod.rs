pub mod ticker;
pub mod use_clock;
pub mod use_clock_countdown;

pub use ticker::{use_ticker, Ticker};
pub use use_clock::{use_clock, ClockControls, UseClock};
pub use use_clock_countdown::{use_clock_countdown, CountdownControls, UseClockCountdown};
