use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum NFTEvent {
    Initialized(Address),
    Upgraded(u32),
    Mint(u64, Address),
    Approve(u64, Address, Address),
    Transfer(u64, Address, Address),
}

impl NFTEvent {
    pub fn name(&self) -> &'static str {
        match self {
            NFTEvent::Initialized(..) => stringify!(Initialized),
            NFTEvent::Upgraded(..) => stringify!(Upgraded),
            NFTEvent::Mint(..) => stringify!(Mint),
            NFTEvent::Approve(..) => stringify!(Approve),
            NFTEvent::Transfer(..) => stringify!(Transfer),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            NFTEvent::Initialized(admin) => {
                v.push_back(admin.into_val(env));
            }
            NFTEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            NFTEvent::Mint(token_id, owner) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            NFTEvent::Approve(token_id, owner, approved) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
                v.push_back(approved.into_val(env));
            }
            NFTEvent::Transfer(token_id, from, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
