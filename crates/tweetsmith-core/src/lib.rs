pub mod config;
pub mod error;
pub mod form;
pub mod notify;
pub mod registry;
pub mod selection;
pub mod submission;

pub use config::{ClipboardBackend, DeploymentMode, TweetsmithConfig};
pub use error::{Result, TweetsmithError};
pub use form::{Completion, FormPhase, FormState, SubmitTicket};
pub use notify::{Notice, NoticeKind, NotificationLog, Notifier};
pub use registry::{Category, CategoryRegistry};
pub use selection::{CycleDirection, SelectionState};
pub use submission::{RequestPayload, SubmitError, SubmitOutcome};
