//! Services organized by domain concern.

pub mod account_service;
pub mod artist_service;
pub mod client_service;
pub mod provisioning;
pub mod work_service;

pub use account_service::AccountService;
pub use artist_service::ArtistService;
pub use client_service::ClientService;
pub use provisioning::{ClientProvisioner, ProvisioningHook, UserSaved};
pub use work_service::WorkService;
