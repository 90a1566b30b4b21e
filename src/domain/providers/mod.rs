// Capabilities the domain consumes: time and identifier generation
// Default wall-clock and UUID implementations live alongside the traits

pub mod clock;
pub mod id_generator;

pub use clock::{Clock, SystemClock};
pub use id_generator::{IdGenerator, UuidGenerator};
