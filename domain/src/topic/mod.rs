//! Topic domain
//!
//! A [`Topic`] is a single lesson: prose, one illustrative code sample and
//! an ordered list of [`PracticeQuestion`]s.

pub mod entities;

pub use entities::{PracticeQuestion, Topic};
