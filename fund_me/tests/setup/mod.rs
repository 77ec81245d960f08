use crate::constants::*;

use common_constants::{EGLD_TICKER, USD_TICKER};
use common_proxies::{proxy_fund_me, proxy_owner_mock, proxy_price_feed};
use common_structs::PriceFeed;
use multiversx_sc::types::{
    BigUint, CodeMetadata, ManagedAddress, ManagedBuffer, ReturnsNewManagedAddress, ReturnsResult,
    TestAddress,
};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(FUND_ME_PATH, fund_me::ContractBuilder);
    blockchain.register_contract(PRICE_FEED_MOCK_PATH, price_feed_mock::ContractBuilder);
    blockchain.register_contract(OWNER_MOCK_PATH, owner_mock::ContractBuilder);

    blockchain
}

pub fn deploy_price_feed_with(
    world: &mut ScenarioWorld,
    from_ticker: &[u8],
    to_ticker: &[u8],
    decimals: u8,
    answer: u128,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_price_feed::PriceFeedProxy)
        .init(
            ManagedBuffer::new_from_bytes(from_ticker),
            ManagedBuffer::new_from_bytes(to_ticker),
            decimals,
            BigUint::from(answer),
        )
        .code(PRICE_FEED_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_price_feed(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    deploy_price_feed_with(
        world,
        EGLD_TICKER,
        USD_TICKER,
        FEED_DECIMALS,
        INITIAL_ANSWER as u128,
    )
}

pub struct FundMeTestState {
    pub world: ScenarioWorld,
    pub fund_me_sc: ManagedAddress<StaticApi>,
    pub price_feed_sc: ManagedAddress<StaticApi>,
}

impl FundMeTestState {
    pub fn new() -> Self {
        Self::new_with_feed(EGLD_TICKER, USD_TICKER, FEED_DECIMALS, INITIAL_ANSWER as u128)
    }

    pub fn new_with_feed(from_ticker: &[u8], to_ticker: &[u8], decimals: u8, answer: u128) -> Self {
        let mut world = world();

        world
            .account(OWNER_ADDRESS)
            .nonce(1)
            .balance(BigUint::from(INITIAL_EGLD_BALANCE));
        world.current_block().block_timestamp(1);

        let price_feed_sc =
            deploy_price_feed_with(&mut world, from_ticker, to_ticker, decimals, answer);

        let fund_me_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_fund_me::FundMeProxy)
            .init(&price_feed_sc, BigUint::from(MINIMUM_USD))
            .code(FUND_ME_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self {
            world,
            fund_me_sc,
            price_feed_sc,
        }
    }

    pub fn new_funder(&mut self, address: TestAddress) {
        self.world
            .account(address)
            .nonce(1)
            .balance(BigUint::from(INITIAL_EGLD_BALANCE));
    }

    pub fn fund(&mut self, from: &TestAddress, amount: u128) {
        self.world
            .tx()
            .from(*from)
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .fund()
            .egld(BigUint::from(amount))
            .run();
    }

    pub fn fund_error(&mut self, from: &TestAddress, amount: u128, error_message: &[u8]) {
        self.world
            .tx()
            .from(*from)
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .fund()
            .egld(BigUint::from(amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(&mut self, from: &TestAddress) {
        self.world
            .tx()
            .from(*from)
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .withdraw()
            .run();
    }

    pub fn withdraw_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(*from)
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .withdraw()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn cheaper_withdraw(&mut self, from: &TestAddress) {
        self.world
            .tx()
            .from(*from)
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .cheaper_withdraw()
            .run();
    }

    pub fn cheaper_withdraw_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(*from)
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .cheaper_withdraw()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn update_answer(&mut self, price: u128) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.price_feed_sc.clone())
            .typed(proxy_price_feed::PriceFeedProxy)
            .update_answer(BigUint::from(price))
            .run();
    }

    pub fn minimum_usd(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .minimum_usd()
            .returns(ReturnsResult)
            .run()
    }

    pub fn price_feed_address(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .price_feed_address()
            .returns(ReturnsResult)
            .run()
    }

    pub fn owner(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .get_owner()
            .returns(ReturnsResult)
            .run()
    }

    pub fn funded_amount(&mut self, funder: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .funded_amount(funder.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn funder_at(&mut self, position: usize) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .get_funder(position)
            .returns(ReturnsResult)
            .run()
    }

    pub fn funder_at_error(&mut self, position: usize, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .get_funder(position)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn funders(&mut self) -> Vec<ManagedAddress<StaticApi>> {
        self.world
            .query()
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .get_funders()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn funders_count(&mut self) -> usize {
        self.world
            .query()
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .get_funders_count()
            .returns(ReturnsResult)
            .run()
    }

    pub fn usd_value(&mut self, amount: u128) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .get_usd_value(BigUint::from(amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn latest_feed(&mut self) -> PriceFeed<StaticApi> {
        self.world
            .query()
            .to(self.fund_me_sc.clone())
            .typed(proxy_fund_me::FundMeProxy)
            .get_latest_price_feed()
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_contract_balance(&mut self, expected: u128) {
        self.world
            .check_account(self.fund_me_sc.clone())
            .balance(BigUint::from(expected));
    }

    pub fn check_egld_balance(&mut self, address: TestAddress, expected: u128) {
        self.world
            .check_account(address)
            .balance(BigUint::from(expected));
    }

    // --- owner-with-contract-semantics scenarios ---

    pub fn deploy_owner_mock(&mut self, payable: bool) -> ManagedAddress<StaticApi> {
        if payable {
            self.world
                .tx()
                .from(OWNER_ADDRESS)
                .typed(proxy_owner_mock::OwnerMockProxy)
                .init()
                .code(OWNER_MOCK_PATH)
                .code_metadata(CodeMetadata::PAYABLE)
                .returns(ReturnsNewManagedAddress)
                .run()
        } else {
            self.world
                .tx()
                .from(OWNER_ADDRESS)
                .typed(proxy_owner_mock::OwnerMockProxy)
                .init()
                .code(OWNER_MOCK_PATH)
                .returns(ReturnsNewManagedAddress)
                .run()
        }
    }

    /// The owner mock redeploys the vault from the already-deployed contract
    /// as template, making itself the vault's owner.
    pub fn deploy_vault_for(
        &mut self,
        owner_mock: &ManagedAddress<StaticApi>,
    ) -> ManagedAddress<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(owner_mock)
            .typed(proxy_owner_mock::OwnerMockProxy)
            .deploy_vault(
                self.fund_me_sc.clone(),
                self.price_feed_sc.clone(),
                BigUint::from(MINIMUM_USD),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn fund_vault(
        &mut self,
        vault: &ManagedAddress<StaticApi>,
        from: &TestAddress,
        amount: u128,
    ) {
        self.world
            .tx()
            .from(*from)
            .to(vault)
            .typed(proxy_fund_me::FundMeProxy)
            .fund()
            .egld(BigUint::from(amount))
            .run();
    }

    pub fn withdraw_vault(&mut self, owner_mock: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(owner_mock)
            .typed(proxy_owner_mock::OwnerMockProxy)
            .withdraw_vault()
            .run();
    }

    pub fn withdraw_vault_error(
        &mut self,
        owner_mock: &ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(owner_mock)
            .typed(proxy_owner_mock::OwnerMockProxy)
            .withdraw_vault()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn cheaper_withdraw_vault_error(
        &mut self,
        owner_mock: &ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(owner_mock)
            .typed(proxy_owner_mock::OwnerMockProxy)
            .cheaper_withdraw_vault()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw_vault_twice(&mut self, owner_mock: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(owner_mock)
            .typed(proxy_owner_mock::OwnerMockProxy)
            .withdraw_vault_twice()
            .run();
    }

    pub fn vault_funded_amount(
        &mut self,
        vault: &ManagedAddress<StaticApi>,
        funder: &TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(vault)
            .typed(proxy_fund_me::FundMeProxy)
            .funded_amount(funder.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn vault_funders_count(&mut self, vault: &ManagedAddress<StaticApi>) -> usize {
        self.world
            .query()
            .to(vault)
            .typed(proxy_fund_me::FundMeProxy)
            .get_funders_count()
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_vault_balance(&mut self, vault: &ManagedAddress<StaticApi>, expected: u128) {
        self.world
            .check_account(vault.clone())
            .balance(BigUint::from(expected));
    }
}
