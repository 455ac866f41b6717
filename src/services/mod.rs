// Services that implement the rules engine
pub mod bmi;
pub mod classifier;
pub mod engine;
pub mod questionnaire;
pub mod recommendations;
pub mod scoring;
pub mod summary;

// Re-export the main entry points
pub use bmi::compute_bmi;
pub use classifier::abnormal_vitals;
pub use engine::{RulesEngine, WellnessEngine};
pub use questionnaire::follow_up_questions;
pub use recommendations::evaluate;
pub use scoring::wellness_score;
pub use summary::health_summary;
