#![no_std]

use common_errors::{ERROR_NO_ROUND_DATA, ERROR_PAIR_NOT_FOUND};
use common_structs::{PriceFeed, TimestampedPrice, TokenPair};

multiversx_sc::imports!();

/// Single-pair price feed stub. Serves the pair it was deployed with and
/// nothing else; test drivers move the answer through `updateAnswer`.
#[multiversx_sc::contract]
pub trait PriceFeedMock {
    #[init]
    fn init(&self, from: ManagedBuffer, to: ManagedBuffer, decimals: u8, initial_answer: BigUint) {
        self.token_pair().set(TokenPair { from, to });
        self.decimals().set(decimals);
        self.push_round(initial_answer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Replaces the current answer, keeping the configured decimals.
    #[endpoint(updateAnswer)]
    fn update_answer(&self, answer: BigUint) {
        self.push_round(answer);
    }

    fn push_round(&self, price: BigUint) {
        let mut rounds = self.rounds();
        let round = rounds.len() as u32 + 1;
        rounds.push(&TimestampedPrice {
            price,
            timestamp: self.blockchain().get_block_timestamp(),
            decimals: self.decimals().get(),
            round,
        });
    }

    /// Latest reading for the served pair. Fails for any other pair.
    #[view(latestPriceFeed)]
    fn latest_price_feed(&self, from: ManagedBuffer, to: ManagedBuffer) -> PriceFeed<Self::Api> {
        let token_pair = self.token_pair().get();
        require!(
            token_pair.from == from && token_pair.to == to,
            ERROR_PAIR_NOT_FOUND
        );

        let rounds = self.rounds();
        require!(!rounds.is_empty(), ERROR_NO_ROUND_DATA);
        let last_price = rounds.get(rounds.len());

        PriceFeed {
            round_id: last_price.round,
            from: token_pair.from,
            to: token_pair.to,
            timestamp: last_price.timestamp,
            price: last_price.price,
            decimals: last_price.decimals,
        }
    }

    #[view(getDecimals)]
    fn get_decimals(&self) -> u8 {
        self.decimals().get()
    }

    #[storage_mapper("token_pair")]
    fn token_pair(&self) -> SingleValueMapper<TokenPair<Self::Api>>;

    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u8>;

    #[storage_mapper("rounds")]
    fn rounds(&self) -> VecMapper<TimestampedPrice<Self::Api>>;
}
