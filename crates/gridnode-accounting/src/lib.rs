//! Resource accounting — cumulative usage ledger, hostname lookup, and
//! the status report returned for every dispatched job.

pub mod hostname;
pub mod ledger;
pub mod report;

pub use hostname::{display_hostname, HostnameSource, SystemHostname};
pub use ledger::{UsageLedger, UsageSnapshot};
