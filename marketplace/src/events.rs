use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

pub enum MarketplaceEvent {
    Initialized(Address, u64, Address),
    Offered(u64, Address, u64, i128, Address),
    Bought(u64, Address, u64, i128, Address, Address),
}

impl MarketplaceEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MarketplaceEvent::Initialized(..) => stringify!(Initialized),
            MarketplaceEvent::Offered(..) => stringify!(Offered),
            MarketplaceEvent::Bought(..) => stringify!(Bought),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            MarketplaceEvent::Initialized(fee_account, fee_percent, payment_token) => {
                v.push_back(fee_account.into_val(env));
                v.push_back(fee_percent.into_val(env));
                v.push_back(payment_token.into_val(env));
            }
            MarketplaceEvent::Offered(listing_id, asset_contract, asset_id, price, seller) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(asset_contract.into_val(env));
                v.push_back(asset_id.into_val(env));
                v.push_back(price.into_val(env));
                v.push_back(seller.into_val(env));
            }
            MarketplaceEvent::Bought(listing_id, asset_contract, asset_id, price, seller, buyer) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(asset_contract.into_val(env));
                v.push_back(asset_id.into_val(env));
                v.push_back(price.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(buyer.into_val(env));
            }
        }

        env.events().publish((Symbol::new(env, self.name()),), v)
    }
}
