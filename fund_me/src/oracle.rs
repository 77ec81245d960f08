use common_constants::{EGLD_TICKER, USD_TICKER, WAD, WAD_PRECISION};
use common_errors::{ERROR_PRICE_FEED_NOT_SET, ERROR_UNSUPPORTED_PRICE_DECIMALS};
use common_proxies::proxy_price_feed::PriceFeedProxy;
use common_structs::PriceFeed;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait OracleModule: crate::storage::StorageModule {
    /// Latest EGLD/USD reading, straight from the configured feed. Any feed
    /// failure aborts the transaction before the caller touches state.
    fn latest_feed(&self) -> PriceFeed<Self::Api> {
        let price_feed_address = self.price_feed_address();
        require!(!price_feed_address.is_empty(), ERROR_PRICE_FEED_NOT_SET);

        self.tx()
            .to(price_feed_address.get())
            .typed(PriceFeedProxy)
            .latest_price_feed(
                ManagedBuffer::new_from_bytes(EGLD_TICKER),
                ManagedBuffer::new_from_bytes(USD_TICKER),
            )
            .returns(ReturnsResult)
            .sync_call()
    }

    /// USD value of `amount`, 18-decimal fixed point. The feed price is
    /// scaled up to 18 decimals before multiplying and the product is divided
    /// back down by one WAD; division truncates toward zero.
    fn egld_to_usd(&self, amount: &BigUint) -> BigUint {
        let feed = self.latest_feed();
        require!(
            (feed.decimals as usize) <= WAD_PRECISION,
            ERROR_UNSUPPORTED_PRICE_DECIMALS
        );

        let normalized_price = feed.price
            * BigUint::from(10u64).pow((WAD_PRECISION - feed.decimals as usize) as u32);

        amount * &normalized_price / BigUint::from(WAD)
    }
}
