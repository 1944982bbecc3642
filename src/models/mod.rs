pub mod answer_report;
pub mod question_record;
pub mod saved_report;

pub use answer_report::{AnswerReport, StrategyKind};
pub use question_record::QuestionRecord;
pub use saved_report::SavedReport;
