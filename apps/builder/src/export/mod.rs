//! One-way exports of the canonical document.

pub mod plain_text;

pub use plain_text::to_plain_text;
