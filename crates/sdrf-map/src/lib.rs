//! Interactive column matching between a local metadata table and an SDRF
//! target table.
//!
//! The workflow pairs one local column with one target column at a time.
//! Each confirmed pair is validated by [`sdrf_validate::ValueValidator`];
//! accepted values are written into the target table, every outcome is
//! recorded, and both candidate pools shrink until no local column is left.
//!
//! - [`MatchSession`]: the explicit session value driving the protocol
//! - [`MatchState`]: where the session is in the protocol
//! - [`CandidatePool`]: the unmatched local and target columns
//! - [`MergeResult`]: the merged target table and the ordered records
//! - [`Reporter`]: receives one notice per pair
//!
//! # Example
//!
//! ```ignore
//! use sdrf_map::{MatchSession, TargetChoice};
//! use sdrf_validate::ValueValidator;
//!
//! let validator = ValueValidator::new(&registry);
//! let mut session = MatchSession::start(local, template, validator)?;
//! session.select_local("Species")?;
//! session.select_target(TargetChoice::Column("characteristics[organism]".into()))?;
//! let step = session.confirm()?;
//! println!("{}", step.record.unwrap().diagnostic);
//! let merged = session.finish();
//! ```

mod error;
mod options;
mod pool;
mod record;
mod report;
mod session;
mod state;

pub use error::{MatchError, Result};
pub use options::{MatchOptions, RejectedTargetPolicy};
pub use pool::CandidatePool;
pub use record::{MatchRecord, MergeResult, RowCountMismatch};
pub use report::{Reporter, TracingReporter};
pub use session::{MatchSession, SessionBuilder};
pub use state::{MatchState, Step, TargetChoice};
