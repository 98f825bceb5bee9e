//! HTTP handlers for the wiki resource.

pub mod wiki;
