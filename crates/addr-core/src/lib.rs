//! Canonicalization engine: validation, line assembly, tagging, cleanup
//! rules, and the batch orchestrator.

pub mod canonical;
pub mod lines;
pub mod null_token;
pub mod pipeline;
pub mod rules;
pub mod tagger;
pub mod validate;

pub use canonical::{Canonicalizer, canonical_input, title_case};
pub use lines::{address_line_1, address_line_2};
pub use null_token::normalize_null_token;
pub use pipeline::{PipelineRun, RunSummary, run_pipeline};
pub use rules::{apply_rule, apply_rules};
pub use tagger::{AddressTagger, Label, LexiconTagger};
pub use validate::validate_record;
