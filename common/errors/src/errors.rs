#![no_std]

pub static ERROR_INSUFFICIENT_CONTRIBUTION: &[u8] =
    b"Contribution below the minimum USD amount.";

pub static ERROR_PRICE_FEED_NOT_SET: &[u8] = b"Price feed not set.";

pub static ERROR_INVALID_PRICE_FEED: &[u8] = b"Invalid price feed address.";

pub static ERROR_INVALID_MINIMUM: &[u8] = b"Minimum USD amount cannot be zero.";

pub static ERROR_UNSUPPORTED_PRICE_DECIMALS: &[u8] = b"Unsupported price feed decimals.";

pub static ERROR_FUNDER_OUT_OF_RANGE: &[u8] = b"Funder position out of range.";

pub static ERROR_PAIR_NOT_FOUND: &[u8] = b"Token pair not found.";

pub static ERROR_NO_ROUND_DATA: &[u8] = b"No round data.";
