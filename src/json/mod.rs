//! Purpose: Internal JSON boundary shared by the whisper model.
//! Exports: `parse` (decode + failure categories) and `field` (typed path-aware readers).
//! Role: Single seam for parser details so model code never touches serde_json errors directly.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod field;
pub(crate) mod parse;
