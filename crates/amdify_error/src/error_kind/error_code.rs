// --- Module syntax without an AMD rewrite
pub const UNSUPPORTED_SPECIFIER_SHAPE: &str = "UNSUPPORTED_SPECIFIER_SHAPE";
pub const MULTIPLE_DEFAULT_EXPORTS: &str = "MULTIPLE_DEFAULT_EXPORTS";

// --- Surroundings
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const PANIC: &str = "PANIC";
