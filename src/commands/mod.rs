//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod openers;
pub mod query;

pub use analyze::{AnalysisResult, LetterStat, WordAnalysis, analyze_word, analyze_word_list};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use openers::run_openers;
pub use query::{
    DEFAULT_MAX_RESULTS, QueryConfig, QueryMatch, QueryResult, parse_feedback_entry, query_clues,
    run_query,
};
