mod asset_copy;

pub use asset_copy::AssetCopy;
