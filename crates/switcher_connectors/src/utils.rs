//! Helpers shared by connector implementations.

use common_enums::Currency;
use common_utils::{
    ext_traits::ValueExt,
    pii::SecretSerdeValue,
    types::{AmountConvertor, MinorUnit},
};
use error_stack::ResultExt;
use switcher_interfaces::errors;

type Error = error_stack::Report<errors::ConnectorError>;

pub(crate) fn missing_field_err(
    message: &'static str,
) -> Box<dyn Fn() -> Error + Send + 'static> {
    Box::new(move || {
        errors::ConnectorError::MissingRequiredField {
            field_name: message,
        }
        .into()
    })
}

pub(crate) fn convert_amount<T>(
    amount_convertor: &dyn AmountConvertor<Output = T>,
    amount: MinorUnit,
    currency: Currency,
) -> Result<T, Error> {
    amount_convertor
        .convert(amount, currency)
        .change_context(errors::ConnectorError::AmountConversionFailed)
}

pub(crate) fn to_connector_meta_from_secret<T>(
    connector_meta: Option<SecretSerdeValue>,
) -> Result<T, Error>
where
    T: serde::de::DeserializeOwned,
{
    let connector_meta_secret =
        connector_meta.ok_or_else(missing_field_err("connector_meta_data"))?;
    connector_meta_secret
        .parse_value(std::any::type_name::<T>())
        .change_context(errors::ConnectorError::ParsingFailed)
}

pub(crate) fn get_unimplemented_payment_method_error_message(connector: &str) -> String {
    format!("Selected payment method through {connector}")
}
