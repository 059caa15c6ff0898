pub mod clock;
pub mod countdown_panel;
pub mod gallery;
pub mod progress_ring;
pub mod world_clocks;

pub use clock::Clock;
pub use countdown_panel::CountdownPanel;
pub use gallery::Gallery;
pub use progress_ring::ProgressRing;
pub use world_clocks::WorldClocks;
