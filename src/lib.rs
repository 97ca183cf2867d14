pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod orchestrator;
pub mod persistence;
pub mod providers;

pub use batch::{BatchOptions, BatchReport, BatchRunner, RecipeOutcome};
pub use finder::{FindOutcome, RecipeAnalysis, RecipePhotoFinder};
pub use orchestrator::ProviderOrchestrator;
pub use persistence::{JsonFilePersistence, PhotoAssignment, RecipePersistence};
pub use providers::{PhotoProvider, ProviderError};
