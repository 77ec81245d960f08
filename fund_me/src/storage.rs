multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(getMinimumUsd)]
    #[storage_mapper("minimum_usd")]
    fn minimum_usd(&self) -> SingleValueMapper<BigUint>;

    #[view(getPriceFeedAddress)]
    #[storage_mapper("price_feed_address")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Cumulative EGLD per contributor. An absent entry reads as zero.
    #[view(getAddressToAmountFunded)]
    #[storage_mapper("funded_amount")]
    fn funded_amount(&self, funder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Distinct contributors in insertion order. Each address appears once,
    /// no matter how many times it funds.
    #[storage_mapper("funders")]
    fn funders(&self) -> VecMapper<ManagedAddress>;
}
