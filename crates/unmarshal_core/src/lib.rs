//! Public library API for decoding marshalled code-object streams across interpreter versions.

/// Tag dispatch, code-object assembly, and compiled-file container helpers.
pub mod marshal;
