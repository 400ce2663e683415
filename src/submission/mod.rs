pub mod countries;
pub mod fields;
pub mod parser;
pub mod pipeline;
pub mod reference;

pub use fields::Submission;
pub use pipeline::{PipelineOptions, Rejection, ValidatedRecord, Validator};
