use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

pub enum NFTEvent {
    Initialized(Address),
    Mint(u64, Address),
    Transfer(u64, Address, Address),
    Approval(u64, Address, Address),
    ApprovalForAll(Address, Address, bool),
}

impl NFTEvent {
    pub fn name(&self) -> &'static str {
        match self {
            NFTEvent::Initialized(..) => stringify!(Initialized),
            NFTEvent::Mint(..) => stringify!(Mint),
            NFTEvent::Transfer(..) => stringify!(Transfer),
            NFTEvent::Approval(..) => stringify!(Approval),
            NFTEvent::ApprovalForAll(..) => stringify!(ApprovalForAll),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            NFTEvent::Initialized(admin) => {
                v.push_back(admin.into_val(env));
            }
            NFTEvent::Mint(token_id, owner) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            NFTEvent::Transfer(token_id, from, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
            NFTEvent::Approval(token_id, owner, operator) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
                v.push_back(operator.into_val(env));
            }
            NFTEvent::ApprovalForAll(owner, operator, approved) => {
                v.push_back(owner.into_val(env));
                v.push_back(operator.into_val(env));
                v.push_back(approved.into_val(env));
            }
        }

        env.events().publish((Symbol::new(env, self.name()),), v)
    }
}
