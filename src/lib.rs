pub mod cli;
pub mod constants;
pub mod discovery;
pub mod encode;
pub mod error;
pub mod logger;
pub mod optimizer;
pub mod replace;
pub mod resize;
pub mod utils;
pub mod variant;

pub use discovery::collect_candidates;
pub use error::{OptimizeError, Result};
pub use optimizer::{optimize_gallery, process_file, read_dimensions, FileOutcome, RunSummary};
pub use resize::{fit_inside, resize_to_fit};
pub use variant::Variant;
