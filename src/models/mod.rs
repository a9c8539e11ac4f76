// ABOUTME: Data models for the portfolio content

pub mod profile;

pub use profile::{Profile, Project, Skill};
