// Job search: criteria intake, settings snapshot, provider fetch, scoring and ranking.

pub mod criteria;
pub mod handlers;
pub mod service;
pub mod settings;
