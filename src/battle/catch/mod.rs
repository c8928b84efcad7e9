pub mod calculation;

pub use calculation::{catch_roll, flee_roll, get_catch_rate_description, roll_catch_success};
