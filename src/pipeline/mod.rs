//! Identification pipeline components.

mod coordinator;
mod evaluate;
mod processor;

pub use coordinator::{collect_input_files, output_dir_for, output_path_for};
pub use evaluate::{EvalRecord, EvaluationOutcome, run_evaluation, write_evaluation_csv};
pub use processor::{ProcessOptions, ProcessResult, process_file};
