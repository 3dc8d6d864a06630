use super::money::Money;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    CreditCard,
}

/// Identifies the gateway a response came from.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayType {
    /// The demonstration passthrough gateway, which echoes submitted form
    /// values back as if a processor had produced them.
    NullGateway,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Authorize,
    AuthorizeAndCapture,
}

/// Keys of the generic additional-fields sidecar.
#[derive(Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdditionalField {
    Token,
    LastFour,
    CardType,
    NameOnCard,
    ExpDate,
    GatewayTransactionId,
    ResultMessage,
}

impl AdditionalField {
    pub const ALL: [AdditionalField; 7] = [
        AdditionalField::Token,
        AdditionalField::LastFour,
        AdditionalField::CardType,
        AdditionalField::NameOnCard,
        AdditionalField::ExpDate,
        AdditionalField::GatewayTransactionId,
        AdditionalField::ResultMessage,
    ];
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Default)]
pub struct Customer {
    pub customer_id: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Default)]
pub struct BillingAddress {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city_locality: Option<String>,
    pub state_region: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Default)]
pub struct CreditCard {
    pub holder_name: Option<String>,
    pub last_four: Option<String>,
    pub card_type: Option<String>,
    pub exp_date: Option<String>,
}

/// The canonical, gateway-agnostic result of a payment callback.
///
/// Built once per callback and handed to the caller by value. Every optional
/// string is `None` when the gateway did not send it; `amount` and
/// `successful` always carry a value.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentResponse {
    pub payment_type: PaymentType,
    pub gateway_type: GatewayType,
    /// Opaque audit rendering of the inbound callback.
    pub raw_response: String,
    pub amount: Money,
    pub successful: bool,
    pub transaction_type: TransactionType,
    pub order_id: Option<String>,
    pub payment_token: Option<String>,
    pub customer: Customer,
    pub billing_address: BillingAddress,
    pub credit_card: CreditCard,
    /// Always holds every [`AdditionalField`] key; values may be `None`.
    pub additional_fields: BTreeMap<AdditionalField, Option<String>>,
}

impl PaymentResponse {
    pub fn additional_field(&self, field: AdditionalField) -> Option<&str> {
        self.additional_fields
            .get(&field)
            .and_then(|value| value.as_deref())
    }
}
