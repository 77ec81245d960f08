use common_errors::ERROR_FUNDER_OUT_OF_RANGE;
use common_structs::PriceFeed;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule: crate::storage::StorageModule + crate::oracle::OracleModule {
    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.blockchain().get_owner_address()
    }

    /// Contributor at `position`, 1-based like the underlying list.
    #[view(getFunder)]
    fn get_funder(&self, position: usize) -> ManagedAddress {
        let funders = self.funders();
        require!(
            position >= 1 && position <= funders.len(),
            ERROR_FUNDER_OUT_OF_RANGE
        );

        funders.get(position)
    }

    #[view(getFundersCount)]
    fn get_funders_count(&self) -> usize {
        self.funders().len()
    }

    #[view(getFunders)]
    fn get_funders(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for funder in self.funders().iter() {
            result.push(funder);
        }

        result
    }

    #[view(getUsdValue)]
    fn get_usd_value(&self, amount: BigUint) -> BigUint {
        self.egld_to_usd(&amount)
    }

    #[view(getLatestPriceFeed)]
    fn get_latest_price_feed(&self) -> PriceFeed<Self::Api> {
        self.latest_feed()
    }
}
