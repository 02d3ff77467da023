//! Script generation.
//!
//! [`ScriptFilter`] is the consumer side of the
//! [`CreationInterface`](crate::creation::CreationInterface): it turns each
//! entity notification into a [`CallRecord`] such as
//! `Arc([0.0, 0.0, 0.0], 5.0, 0.0, 90.0)` and passes it to a
//! [`RecordSink`]. Collect records in a `Vec<CallRecord>`, or stream them as
//! text through a [`ScriptWriter`].

mod filter;
mod record;
mod sink;

pub use filter::ScriptFilter;
pub use record::{Arg, CallKind, CallRecord, ScriptFormat};
pub use sink::{RecordSink, ScriptWriter};
