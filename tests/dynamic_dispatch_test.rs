use passthrough_gateway::application::translator::ResponseTranslator;
use passthrough_gateway::domain::parameters::{ParameterMap, fields};
use passthrough_gateway::domain::ports::{GatewayConfigurationBox, RawResponseRecorderBox};
use passthrough_gateway::domain::response::TransactionType;
use passthrough_gateway::infrastructure::config::PassthroughConfig;
use passthrough_gateway::infrastructure::printer::TextResponsePrinter;
use rust_decimal_macros::dec;
use std::thread;

#[test]
fn test_translator_shared_across_threads() {
    let recorder: RawResponseRecorderBox = Box::new(TextResponsePrinter);
    let translator = ResponseTranslator::new(recorder);
    let capture: GatewayConfigurationBox = Box::new(PassthroughConfig::default());
    let authorize: GatewayConfigurationBox = Box::new(PassthroughConfig {
        perform_authorize_and_capture: false,
    });

    thread::scope(|scope| {
        let handles: Vec<_> = (1..=8)
            .map(|i| {
                let translator = &translator;
                let config = if i % 2 == 0 { &capture } else { &authorize };
                scope.spawn(move || {
                    let params: ParameterMap = [
                        (fields::ORDER_ID, format!("ORD-{i}")),
                        (fields::TRANSACTION_AMT, format!("{i}.25")),
                    ]
                    .into_iter()
                    .collect();
                    translator.translate(&params, &**config).unwrap()
                })
            })
            .collect();

        for (i, handle) in (1..=8).zip(handles) {
            let response = handle.join().unwrap();
            assert_eq!(response.order_id, Some(format!("ORD-{i}")));
            assert_eq!(response.amount.value(), dec!(0.25) + rust_decimal::Decimal::from(i));
            let expected = if i % 2 == 0 {
                TransactionType::AuthorizeAndCapture
            } else {
                TransactionType::Authorize
            };
            assert_eq!(response.transaction_type, expected);
        }
    });
}
