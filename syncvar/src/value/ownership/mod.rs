mod oracle;

pub use oracle::OwnershipOracle;
