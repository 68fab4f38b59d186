use std::borrow::Cow;

/// Provider-side coin identifier (e.g. "bitcoin")
pub type CoinId = Cow<'static, str>;

/// Quote currency code, lowercase as the upstream API expects (e.g. "usd")
pub type Currency = Cow<'static, str>;
