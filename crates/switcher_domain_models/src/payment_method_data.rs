use cards::CardNumber;
use masking::{PeekInterface, Secret};

/// The payment instrument attached to a payment attempt.
#[derive(Clone, Debug)]
pub enum PaymentMethodData {
    Card(Card),
}

#[derive(Clone, Debug, Default)]
pub struct Card {
    pub card_number: CardNumber,
    pub card_exp_month: Secret<String>,
    pub card_exp_year: Secret<String>,
    pub card_holder_name: Option<Secret<String>>,
    pub card_cvc: Secret<String>,
    pub card_network: Option<String>,
}

impl Card {
    /// `MM/YYYY`, the format the Recebee API expects for expiration dates.
    pub fn get_expiry_date_as_mmyyyy(&self) -> Secret<String> {
        Secret::new(format!(
            "{}/{}",
            self.card_exp_month.peek(),
            self.card_exp_year.peek()
        ))
    }
}
