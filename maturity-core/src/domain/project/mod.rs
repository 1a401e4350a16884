pub mod configuration;

pub use configuration::{OrganizationProfile, ProjectConfig};
