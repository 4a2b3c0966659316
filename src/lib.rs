//! # acip
//!
//! A tokenizer for ACIP Tibetan transliteration text.
//!
//! The crate segments a stream of ACIP text into classified tokens (words,
//! comments, folio numbers, numbers, punctuation), each carrying its byte
//! offsets in the original input and a position increment relative to the
//! previous emitted token. Downstream filters (lower-casing, stop-word
//! removal) compose over the same token-source capability.
//!
//! See the [acip](crate::acip) module for the full pipeline.

pub mod acip;
