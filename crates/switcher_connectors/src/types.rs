use switcher_domain_models::{
    router_data::RouterData,
    router_request_types::RefundsData,
    router_response_types::RefundsResponseData,
};

pub use switcher_domain_models::types::{
    PaymentsAuthorizeRouterData, PaymentsCancelRouterData, PaymentsCaptureRouterData,
    RefundExecuteRouterData, RefundsRouterData,
};

/// A connector response paired with the router data it answers, fed into the
/// `TryFrom` conversions in each connector's transformers.
pub struct ResponseRouterData<Flow, R, Request, Response> {
    pub response: R,
    pub data: RouterData<Flow, Request, Response>,
    pub http_code: u16,
}

pub type RefundsResponseRouterData<F, R> =
    ResponseRouterData<F, R, RefundsData, RefundsResponseData>;
