pub mod config;
pub mod errors;
pub mod pipeline;
pub mod prompt;
pub mod runner;
pub mod seq;

use crate::errors::GenError;

pub fn run() -> Result<(), GenError> {
    runner::run()
}
