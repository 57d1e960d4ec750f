//! Resource façades of the global profile
//!
//! Every method takes the owning project or client identifier explicitly.

mod clients;
mod feedback;
mod messages;
pub(crate) mod projects;
mod subscriptions;
mod threads;
mod users;

pub use clients::Clients;
pub use feedback::Feedback;
pub use messages::Messages;
pub use projects::Projects;
pub use subscriptions::Subscriptions;
pub use threads::Threads;
pub use users::Users;
