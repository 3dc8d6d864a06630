use serde::Serialize;
use std::collections::BTreeMap;

/// Well-known field names posted back by the passthrough processor.
pub mod fields {
    pub const TRANSACTION_AMT: &str = "TRANSACTION_AMT";
    pub const RESULT_SUCCESS: &str = "RESULT_SUCCESS";
    pub const ORDER_ID: &str = "ORDER_ID";
    pub const CUSTOMER_ID: &str = "CUSTOMER_ID";
    pub const PAYMENT_TOKEN_ID: &str = "PAYMENT_TOKEN_ID";
    pub const GATEWAY_TRANSACTION_ID: &str = "GATEWAY_TRANSACTION_ID";
    pub const RESULT_MESSAGE: &str = "RESULT_MESSAGE";

    pub const CREDIT_CARD_LAST_FOUR: &str = "CREDIT_CARD_LAST_FOUR";
    pub const CREDIT_CARD_TYPE: &str = "CREDIT_CARD_TYPE";
    pub const CREDIT_CARD_NAME: &str = "CREDIT_CARD_NAME";
    pub const CREDIT_CARD_EXP_DATE: &str = "CREDIT_CARD_EXP_DATE";

    pub const BILLING_FIRST_NAME: &str = "BILLING_FIRST_NAME";
    pub const BILLING_LAST_NAME: &str = "BILLING_LAST_NAME";
    pub const BILLING_ADDRESS_LINE1: &str = "BILLING_ADDRESS_LINE1";
    pub const BILLING_ADDRESS_LINE2: &str = "BILLING_ADDRESS_LINE2";
    pub const BILLING_CITY: &str = "BILLING_CITY";
    pub const BILLING_STATE: &str = "BILLING_STATE";
    pub const BILLING_ZIP: &str = "BILLING_ZIP";
    pub const BILLING_COUNTRY: &str = "BILLING_COUNTRY";
    pub const BILLING_PHONE: &str = "BILLING_PHONE";
    pub const BILLING_EMAIL: &str = "BILLING_EMAIL";
    pub const BILLING_COMPANY_NAME: &str = "BILLING_COMPANY_NAME";
}

/// Decoded callback parameters: each field name maps to every value submitted
/// for it, in submission order.
///
/// Keys are case-sensitive. Iteration is ordered by key so anything rendered
/// from the map is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterMap(BTreeMap<String, Vec<String>>);

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the values already recorded for `name`.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// Replaces every value recorded for `name`.
    pub fn insert<I, V>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.0
            .insert(name.into(), values.into_iter().map(Into::into).collect());
    }

    /// All values recorded for `name`.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Single-value lookup: the first value for `name`, or `None` when the
    /// field was not submitted. Later values are never consulted.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// True when any value recorded for `name` equals `token` exactly.
    pub fn contains_value(&self, name: &str, token: &str) -> bool {
        self.values(name)
            .is_some_and(|values| values.iter().any(|value| value == token))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.append(name, value);
        }
        params
    }
}
