pub mod fetcher;

pub use fetcher::{is_exercise_url, ExerciseSource, Fetcher};
