pub mod onboarding;
pub mod pages;
