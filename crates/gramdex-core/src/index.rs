//! Index structures for `gramdex`.

pub mod ngram;
