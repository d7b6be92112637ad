//! Built-in component theme descriptors.
//!
//! Each submodule exports one constructor taking the host
//! [`ModuleOptions`](crate::ModuleOptions) and returning the
//! component's static [`Descriptor`](veneer_variants::Descriptor),
//! with its color axis expanded from the configured palette.

mod separator;
pub use separator::separator;

mod alert;
pub use alert::alert;

mod badge;
pub use badge::badge;

mod toast;
pub use toast::toast;
