//! Pipeline: the ordered walk and the two passes built on it.

pub mod copy;
pub mod scan;
pub mod walk;

pub use copy::{CopyPhase, check_overlap, copy_album};
pub use scan::scan;
pub use walk::{TreeWalk, WalkItem, walk};
