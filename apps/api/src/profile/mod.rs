// Onboarding profile: four validated steps persisted to the `profiles` table.

pub mod handlers;
pub mod onboarding;
pub mod store;
