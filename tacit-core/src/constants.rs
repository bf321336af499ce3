/// Pipeline version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Texts shorter than this are never analyzed.
pub const MIN_ANALYZABLE_CHARS: usize = 10;

/// Maximum length of a detected intent's text span.
pub const MAX_INTENT_CHARS: usize = 300;

/// Maximum length of an extracted rationale.
pub const MAX_RATIONALE_CHARS: usize = 200;

/// Maximum number of extracted constraints per intent.
pub const MAX_CONSTRAINTS: usize = 5;

/// Maximum number of extracted tradeoffs per intent.
pub const MAX_TRADEOFFS: usize = 5;

/// Bytes scanned after a trigger match when extracting
/// rationale, constraints, and tradeoffs.
pub const EXTRACTION_WINDOW_BYTES: usize = 400;

/// Pattern files larger than this are skipped by the synchronizer.
pub const MAX_SYNC_FILE_BYTES: u64 = 1024 * 1024;

/// Ledger record count that triggers history trimming.
pub const LEDGER_TRIM_THRESHOLD: usize = 100;

/// Ledger record count retained after trimming.
pub const LEDGER_TRIM_KEEP: usize = 80;
