pub mod cli;
pub mod ctx;
pub mod error;
pub mod input;
pub mod instructions;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod schema;
pub mod scores;
