//! # Textnum
//!
//! Small, stateless text and number formatting helpers.
//!
//! Every function in this crate is a pure, single-pass transformation from
//! a primitive input to a freshly constructed output: no I/O, no shared
//! state, no failure modes. Unusual inputs produce unusual-but-defined
//! outputs (empty strings, empty vectors, `NaN`, infinities) rather than
//! errors, so call sites compose without `Result` plumbing.
//!
//! ## Modules
//!
//! - `text` - Title-casing, line splitting, and heuristic pluralization
//! - `numeric` - Base-2 logarithm and unsigned-integer range helpers
pub mod numeric;
pub mod text;
