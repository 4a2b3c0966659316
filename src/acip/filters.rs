//! Token filters
//!
//! Filters are the downstream stages of an analysis chain. Each filter is a
//! [TokenSource](crate::acip::stream::TokenSource) that wraps another
//! `TokenSource` and produces a stream with the same shape, so stages
//! compose by plain construction:
//!
//! ```ignore
//! let stream = StopFilter::new(LowercaseFilter::new(tokenizer), stop_words);
//! ```
//!
//! Design principles:
//! - Filters are pure adapters: same input stream, same output stream.
//! - Filters never reorder tokens and never produce offsets the wrapped
//!   source did not produce.
//! - A filter that drops tokens must carry the dropped position increments
//!   forward so phrase positions stay aligned.

pub mod lowercase;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
