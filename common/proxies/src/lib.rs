#![no_std]

pub mod proxy_fund_me;
pub mod proxy_owner_mock;
pub mod proxy_price_feed;
