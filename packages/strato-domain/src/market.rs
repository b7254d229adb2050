use serde::{Deserialize, Serialize};

/// Ordinal written into `domain_encoded` for names outside the known set.
pub const UNKNOWN_DOMAIN_CODE: i64 = -1;

/// The fixed set of business domains the advisor knows about. The ordinal encoding is part of
/// the feature schema; reordering variants changes every encoded record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownDomain {
	EdTech,
	FinTech,
	SaaS,
}
impl KnownDomain {
	pub const ALL: [KnownDomain; 3] = [KnownDomain::EdTech, KnownDomain::FinTech, KnownDomain::SaaS];

	pub fn name(self) -> &'static str {
		match self {
			KnownDomain::EdTech => "EdTech",
			KnownDomain::FinTech => "FinTech",
			KnownDomain::SaaS => "SaaS",
		}
	}

	pub fn code(self) -> i64 {
		match self {
			KnownDomain::EdTech => 0,
			KnownDomain::FinTech => 1,
			KnownDomain::SaaS => 2,
		}
	}

	/// Exact, case-sensitive match on the canonical name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|domain| domain.name() == name)
	}
}

pub fn encode_domain(name: &str) -> i64 {
	KnownDomain::from_name(name).map(KnownDomain::code).unwrap_or(UNKNOWN_DOMAIN_CODE)
}
