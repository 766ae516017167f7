//! Asset discovery, fingerprinting, and renaming.

mod fingerprint;
mod kind;
mod rename;
mod scan;

pub use fingerprint::{FINGERPRINT_LEN, content_fingerprint, file_fingerprint};
pub use kind::{DEFAULT_EXTENSIONS, ExtensionSet};
pub use rename::{RenameRecord, hashed_name, planned_rename, rename_with_fingerprint};
pub use scan::{ScanOutcome, scan_assets};
