multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("funded")]
    fn funded_event(
        &self,
        #[indexed] funder: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] usd_value: &BigUint,
        #[indexed] total_funded: &BigUint,
    );

    #[event("withdrawn")]
    fn withdrawn_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] funders_drained: usize,
    );
}
