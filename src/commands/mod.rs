//! Command implementations

pub mod batch;
pub mod solve;

pub use batch::{
    BatchConfig, ProgramResults, discover_games, run_batch, summarize_all, write_reports_json,
    write_summary_csv,
};
pub use solve::solve_file;
