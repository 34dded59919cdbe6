//! URL modeling: lexical component splitting and canonicalization.
//!
//! Everything downstream (feature extraction for serving and for training
//! exports) consumes a [`NormalizedUrl`], never the raw text.

mod normalize;
mod parts;

pub use normalize::{normalize_opt, normalize_url, NormalizedUrl};
pub use parts::UrlParts;
