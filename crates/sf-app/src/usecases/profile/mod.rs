//! Profile use cases.

mod get_profile;
mod update_display_name;

pub use get_profile::GetProfile;
pub use update_display_name::UpdateDisplayName;
