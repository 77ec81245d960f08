#![no_std]

multiversx_sc::imports!();

pub mod events;
pub mod oracle;
pub mod storage;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

/// Iteration strategy for the withdrawal drain loop. `Snapshot` copies the
/// funders list into memory first, so the loop performs a single storage read
/// per funder instead of two.
pub enum DrainMode {
    Storage,
    Snapshot,
}

#[multiversx_sc::contract]
pub trait FundMe:
    storage::StorageModule + oracle::OracleModule + events::EventsModule + views::ViewsModule
{
    /// Initializes the vault with its price feed and admission threshold.
    ///
    /// # Arguments
    /// - `price_feed_address`: Address of the EGLD/USD price feed contract.
    /// - `minimum_usd`: Smallest accepted contribution, 18-decimal USD.
    ///
    /// Both values are fixed for the lifetime of the contract.
    #[init]
    fn init(&self, price_feed_address: &ManagedAddress, minimum_usd: BigUint) {
        require!(
            self.blockchain().is_smart_contract(price_feed_address),
            ERROR_INVALID_PRICE_FEED
        );
        require!(minimum_usd > BigUint::zero(), ERROR_INVALID_MINIMUM);

        self.price_feed_address().set(price_feed_address);
        self.minimum_usd().set(minimum_usd);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Accepts an EGLD contribution worth at least the configured USD minimum.
    /// A rejected payment never stays with the contract.
    #[payable("EGLD")]
    #[endpoint(fund)]
    fn fund(&self) {
        let payment = self.call_value().egld().clone_value();
        let usd_value = self.egld_to_usd(&payment);
        require!(
            usd_value >= self.minimum_usd().get(),
            ERROR_INSUFFICIENT_CONTRIBUTION
        );

        let caller = self.blockchain().get_caller();
        let funded_amount_mapper = self.funded_amount(&caller);
        if funded_amount_mapper.is_empty() {
            self.funders().push(&caller);
        }

        let mut total_funded = funded_amount_mapper.get();
        total_funded += &payment;
        funded_amount_mapper.set(&total_funded);

        self.funded_event(&caller, &payment, &usd_value, &total_funded);
    }

    #[only_owner]
    #[endpoint(withdraw)]
    fn withdraw(&self) {
        self.drain(DrainMode::Storage);
    }

    #[only_owner]
    #[endpoint(cheaperWithdraw)]
    fn cheaper_withdraw(&self) {
        self.drain(DrainMode::Snapshot);
    }

    /// Zeroes every tracked contribution and clears the funders list before
    /// the balance leaves the contract, so anything that runs during the
    /// transfer already observes an empty ledger. A failed transfer reverts
    /// the whole transaction, ledger reset included.
    fn drain(&self, mode: DrainMode) {
        let funders = self.funders();
        let drained = funders.len();

        match mode {
            DrainMode::Storage => {
                for position in 1..=drained {
                    let funder = funders.get(position);
                    self.funded_amount(&funder).clear();
                }
            },
            DrainMode::Snapshot => {
                let mut snapshot: ManagedVec<Self::Api, ManagedAddress<Self::Api>> = ManagedVec::new();
                for funder in funders.iter() {
                    snapshot.push(funder);
                }
                for funder in &snapshot {
                    self.funded_amount(&funder).clear();
                }
            },
        }

        self.funders().clear();

        let owner = self.blockchain().get_owner_address();
        let amount = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);

        self.tx().to(&owner).egld(&amount).transfer_if_not_empty();

        self.withdrawn_event(&owner, &amount, drained);
    }
}
