//! Dispatch of connector requests: build the request through the connector
//! integration, send it, and hand the raw response back to the connector for
//! interpretation.

use std::{fmt::Debug, str::FromStr, time::Instant};

use error_stack::{report, ResultExt};
use switcher_domain_models::router_data::{ErrorResponse, RouterData};
use switcher_interfaces::{
    api::BoxedConnectorIntegration, events::connector_api_logs::ConnectorEvent, types,
};
use common_utils::request::{Headers, Method, Request, RequestContent};

use crate::{
    configs::Settings,
    consts,
    core::errors::{ApiClientError, ConnectorError, CustomResult},
    services::client,
};

/// Handle one flow by interacting with the connector module.
///
/// Transport-level error responses (non-2xx) are routed into the connector's
/// error interpretation so they still produce a populated `RouterData`;
/// timeouts produce a fixed timeout outcome. Only failures to *build* or
/// *send* the request surface as `Err`.
pub async fn execute_connector_processing_step<T, Req, Resp>(
    state: &Settings,
    connector_integration: BoxedConnectorIntegration<'_, T, Req, Resp>,
    req: &RouterData<T, Req, Resp>,
) -> CustomResult<RouterData<T, Req, Resp>, ConnectorError>
where
    T: Clone + Debug + 'static,
    Req: Clone + Debug + 'static,
    Resp: Clone + Debug + 'static,
{
    let mut router_data = req.clone();

    let connector_request = connector_integration.build_request(req, &state.connectors)?;

    let Some(request) = connector_request else {
        return Ok(router_data);
    };

    let flow_name = std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or_default();
    let mut connector_event = ConnectorEvent::new(&req.connector, flow_name, &request.url);
    if let Some(body) = request.body.as_ref() {
        match body {
            RequestContent::Json(inner) | RequestContent::FormUrlEncoded(inner) => {
                if let Ok(masked_body) = inner.masked_serialize() {
                    connector_event.set_request_body(&masked_body);
                }
            }
        }
    }

    tracing::debug!(connector_request=?request);
    let response = call_connector_api(state, request).await;
    tracing::debug!(connector_response=?response);

    match response {
        Ok(body) => {
            let router_data = match body {
                Ok(body) => {
                    let connector_http_status_code = Some(body.status_code);
                    connector_event.set_status_code(body.status_code);
                    let mut data = connector_integration.handle_response(
                        req,
                        Some(&mut connector_event),
                        body,
                    )?;
                    data.connector_http_status_code = connector_http_status_code;
                    data
                }
                Err(body) => {
                    router_data.connector_http_status_code = Some(body.status_code);
                    connector_event.set_status_code(body.status_code);
                    let error = match body.status_code {
                        500..=599 => connector_integration
                            .get_5xx_error_response(body, Some(&mut connector_event))?,
                        _ => connector_integration
                            .get_error_response(body, Some(&mut connector_event))?,
                    };
                    router_data.response = Err(error);
                    router_data
                }
            };
            connector_event.emit();
            Ok(router_data)
        }
        Err(error) => {
            if error.current_context().is_upstream_timeout() {
                let error_response = ErrorResponse {
                    code: consts::REQUEST_TIMEOUT_ERROR_CODE.to_string(),
                    message: consts::REQUEST_TIMEOUT_ERROR_MESSAGE.to_string(),
                    reason: Some(consts::REQUEST_TIMEOUT_ERROR_MESSAGE.to_string()),
                    status_code: 504,
                    attempt_status: None,
                    connector_transaction_id: None,
                };
                router_data.response = Err(error_response);
                router_data.connector_http_status_code = Some(504);
                connector_event.emit();
                Ok(router_data)
            } else {
                Err(error.change_context(ConnectorError::ProcessingStepFailed(None)))
            }
        }
    }
}

/// Send one request and bucket the response into `Ok` (success status) or
/// `Err` (error status), both carrying the raw body for the connector to
/// interpret.
pub async fn call_connector_api(
    state: &Settings,
    request: Request,
) -> CustomResult<Result<types::Response, types::Response>, ApiClientError> {
    let current_time = Instant::now();

    let response = send_request(state, request).await;

    let elapsed_time = current_time.elapsed();
    tracing::info!(request_time=?elapsed_time);

    handle_response(response).await
}

pub async fn send_request(
    state: &Settings,
    request: Request,
) -> CustomResult<reqwest::Response, ApiClientError> {
    tracing::debug!(method=?request.method, headers=?request.headers, url=%request.url, ?request);

    let url =
        reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;

    let client = client::create_client(&state.proxy)?;
    let headers = construct_header_map(request.headers)?;

    let request_builder = match request.method {
        Method::Get => client.get(url),
        Method::Post => {
            let client = client.post(url);
            match request.body {
                Some(RequestContent::Json(payload)) => client.json(&payload),
                // the body is rendered here, the Content-Type header stays
                // whatever the connector asked for
                Some(body @ RequestContent::FormUrlEncoded(_)) => {
                    client.body(masking::ExposeInterface::expose(body.get_inner_value()))
                }
                None => client,
            }
        }
        Method::Put => client.put(url),
        Method::Patch => client.patch(url),
        Method::Delete => client.delete(url),
    };

    request_builder
        .headers(headers)
        .timeout(std::time::Duration::from_secs(state.request_timeout))
        .send()
        .await
        .map_err(|error| {
            if error.is_timeout() {
                report!(ApiClientError::RequestTimeoutReceived)
            } else {
                report!(ApiClientError::RequestNotSent(error.to_string()))
            }
        })
        .attach_printable("Unable to send request to connector")
}

async fn handle_response(
    response: CustomResult<reqwest::Response, ApiClientError>,
) -> CustomResult<Result<types::Response, types::Response>, ApiClientError> {
    match response {
        Ok(response) => {
            let status_code = response.status().as_u16();
            let headers = Some(response.headers().to_owned());
            let bytes = response
                .bytes()
                .await
                .change_context(ApiClientError::ResponseDecodingFailed)
                .attach_printable("Error while waiting for response")?;

            let parsed = types::Response {
                headers,
                response: bytes,
                status_code,
            };

            match status_code {
                200..=202 | 204 | 302 => Ok(Ok(parsed)),
                400..=599 => Ok(Err(parsed)),
                _ => Err(report!(ApiClientError::UnexpectedServerResponse)
                    .attach_printable("Unexpected response from server")),
            }
        }
        Err(error) => Err(error),
    }
}

fn construct_header_map(
    headers: Headers,
) -> CustomResult<reqwest::header::HeaderMap, ApiClientError> {
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

    headers
        .into_iter()
        .try_fold(HeaderMap::new(), |mut header_map, (name, value)| {
            let header_name = HeaderName::from_str(&name)
                .change_context(ApiClientError::HeaderMapConstructionFailed)?;
            let is_sensitive = value.is_masked();
            let mut header_value = HeaderValue::from_str(&value.into_inner())
                .change_context(ApiClientError::HeaderMapConstructionFailed)?;
            header_value.set_sensitive(is_sensitive);
            header_map.append(header_name, header_value);
            Ok(header_map)
        })
}
