#![no_std]

pub const EGLD_TICKER: &[u8] = b"EGLD";
pub const USD_TICKER: &[u8] = b"USD";

/// 1 EGLD or 1 USD, 18-decimal fixed point.
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;
