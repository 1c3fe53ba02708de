mod asset_entry;
mod copy_status;
mod copy_info;
mod error;

pub type R<A> = Result<A, AssetCopyError>;

pub use asset_entry::{AssetEntry, CopyLayout, ASSET_ENTRIES};
pub use copy_status::{CopyStatus, RunSummary};
pub use copy_info::CopyInfo;
pub use error::AssetCopyError;
