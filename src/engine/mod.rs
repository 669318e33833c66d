//! Engine: ordering, eligibility, naming, progress and tagging building blocks

pub mod arg_parser;
pub mod cli;
pub mod compare;
pub mod filter;
pub mod naming;
pub mod progress;
pub mod tagging;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::handle_run;
pub use compare::{SortMode, compare, compare_naturally, strip_numbers};
pub use filter::{TypeFilter, is_audio_file, is_track, path_relative_to};
pub use naming::{decorate_file, decorate_root, destination_root, pad_ordinal};
pub use progress::{ProgressEvent, ProgressSink, Silent, TerminalSink, TrackProgress};
pub use tagging::{SkipTags, TagRequest, TagWriter};
