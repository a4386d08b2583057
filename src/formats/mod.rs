//! On-flash structure parsers.

pub mod toc;
