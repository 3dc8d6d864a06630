use crate::domain::money::Money;
use crate::domain::parameters::{ParameterMap, fields};
use crate::domain::ports::{GatewayConfiguration, RawResponseRecorderBox};
use crate::domain::response::{
    AdditionalField, BillingAddress, CreditCard, Customer, GatewayType, PaymentResponse,
    PaymentType, TransactionType,
};
use crate::error::{PaymentError, Result};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Value of `RESULT_SUCCESS` that marks an approved payment.
const APPROVED_TOKEN: &str = "true";

/// Translates passthrough gateway callbacks into [`PaymentResponse`] records.
///
/// The translator holds no per-request state, so a single instance can be
/// shared between threads and called concurrently.
pub struct ResponseTranslator {
    recorder: RawResponseRecorderBox,
}

impl ResponseTranslator {
    /// Creates a new `ResponseTranslator`.
    ///
    /// # Arguments
    ///
    /// * `recorder` - Renders the raw callback stored on each response.
    pub fn new(recorder: RawResponseRecorderBox) -> Self {
        Self { recorder }
    }

    /// Translates one callback.
    ///
    /// Missing fields never fail: strings resolve to `None`, the amount to
    /// zero and the result to unsuccessful. The call fails only when
    /// `TRANSACTION_AMT` is not a decimal or when the recorder fails, and in
    /// both cases no response is produced.
    pub fn translate(
        &self,
        params: &ParameterMap,
        config: &dyn GatewayConfiguration,
    ) -> Result<PaymentResponse> {
        let raw_response = self.recorder.render_audit(params)?;
        let amount = parse_amount(params)?;

        // Unlike every other field, RESULT_SUCCESS is matched against all of
        // its values rather than only the first one.
        let successful = params.contains_value(fields::RESULT_SUCCESS, APPROVED_TOKEN);

        let transaction_type = if config.perform_authorize_and_capture() {
            TransactionType::AuthorizeAndCapture
        } else {
            TransactionType::Authorize
        };

        let customer = Customer {
            customer_id: lookup(params, fields::CUSTOMER_ID),
        };

        let billing_address = BillingAddress {
            first_name: lookup(params, fields::BILLING_FIRST_NAME),
            last_name: lookup(params, fields::BILLING_LAST_NAME),
            address_line1: lookup(params, fields::BILLING_ADDRESS_LINE1),
            address_line2: lookup(params, fields::BILLING_ADDRESS_LINE2),
            city_locality: lookup(params, fields::BILLING_CITY),
            state_region: lookup(params, fields::BILLING_STATE),
            postal_code: lookup(params, fields::BILLING_ZIP),
            country_code: lookup(params, fields::BILLING_COUNTRY),
            phone: lookup(params, fields::BILLING_PHONE),
            email: lookup(params, fields::BILLING_EMAIL),
            company_name: lookup(params, fields::BILLING_COMPANY_NAME),
        };

        let credit_card = CreditCard {
            holder_name: lookup(params, fields::CREDIT_CARD_NAME),
            last_four: lookup(params, fields::CREDIT_CARD_LAST_FOUR),
            card_type: lookup(params, fields::CREDIT_CARD_TYPE),
            exp_date: lookup(params, fields::CREDIT_CARD_EXP_DATE),
        };

        let additional_fields = AdditionalField::ALL
            .into_iter()
            .map(|field| (field, lookup(params, source_field(field))))
            .collect::<BTreeMap<_, _>>();

        let response = PaymentResponse {
            payment_type: PaymentType::CreditCard,
            gateway_type: GatewayType::NullGateway,
            raw_response,
            amount,
            successful,
            transaction_type,
            order_id: lookup(params, fields::ORDER_ID),
            payment_token: lookup(params, fields::PAYMENT_TOKEN_ID),
            customer,
            billing_address,
            credit_card,
            additional_fields,
        };

        debug!(
            order_id = response.order_id.as_deref().unwrap_or_default(),
            %amount,
            successful,
            transaction_type = ?response.transaction_type,
            "translated gateway callback"
        );

        Ok(response)
    }
}

/// The callback field each additional-fields entry is read from.
fn source_field(field: AdditionalField) -> &'static str {
    match field {
        AdditionalField::Token => fields::PAYMENT_TOKEN_ID,
        AdditionalField::LastFour => fields::CREDIT_CARD_LAST_FOUR,
        AdditionalField::CardType => fields::CREDIT_CARD_TYPE,
        AdditionalField::NameOnCard => fields::CREDIT_CARD_NAME,
        AdditionalField::ExpDate => fields::CREDIT_CARD_EXP_DATE,
        AdditionalField::GatewayTransactionId => fields::GATEWAY_TRANSACTION_ID,
        AdditionalField::ResultMessage => fields::RESULT_MESSAGE,
    }
}

fn lookup(params: &ParameterMap, name: &str) -> Option<String> {
    params.lookup(name).map(str::to_owned)
}

fn parse_amount(params: &ParameterMap) -> Result<Money> {
    let Some(raw) = params.lookup(fields::TRANSACTION_AMT) else {
        return Ok(Money::ZERO);
    };
    raw.parse::<Money>().map_err(|source| {
        warn!(value = raw, "rejecting callback with malformed amount");
        PaymentError::MalformedAmount {
            value: raw.to_owned(),
            source,
        }
    })
}
