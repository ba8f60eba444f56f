//! Shared data model for grammatical error type annotation.
//!
//! This crate holds the types that flow between an aligner, a language
//! specific classifier and whatever renders the result. It performs no
//! classification itself.
//!
//! # Architecture
//!
//! - [`token`] -- Annotated token (text, lemma, tags, features, dependency relation)
//! - [`features`] -- Ordered morphological feature map (`Key=Value|Key=Value`)
//! - [`label`] -- Edit operation and error type label
//! - [`edit`] -- Aligned edit between an original and a corrected span
//! - [`m2`] -- M2 line rendering
//! - [`error`] -- Error types shared by loaders and front-ends

pub mod edit;
pub mod error;
pub mod features;
pub mod label;
pub mod m2;
pub mod token;
