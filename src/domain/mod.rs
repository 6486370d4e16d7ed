mod ledger;
mod menu;
mod money;
mod order;
mod report;

pub use ledger::*;
pub use menu::*;
pub use money::*;
pub use order::*;
pub use report::*;
