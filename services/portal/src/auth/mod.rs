pub mod controller;
pub mod session;

// Re-export the flow types to make them easily accessible to the binary
// and to integration tests.
pub use controller::{RedirectDelays, SubmissionController, SubmitOutcome};
pub use session::{restore_session, SessionStore};
