//! Send-points modal state.
//!
//! The form owns its inputs and its own submission state. The only thing it
//! reports back to the view is [`SendPointsOutcome::Close`].

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::AccountId;
use crate::service::{ServiceError, Transfer};

use super::Ticket;

/// Input field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendField {
    #[default]
    Recipient,
    Amount,
}

impl SendField {
    pub fn toggle(self) -> Self {
        match self {
            SendField::Recipient => SendField::Amount,
            SendField::Amount => SendField::Recipient,
        }
    }
}

/// What the view should do after the form handled an input or completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendPointsOutcome {
    /// Keep the modal open.
    Keep,
    /// Close the modal.
    Close,
}

/// State of an open send-points modal.
#[derive(Debug, Clone, PartialEq)]
pub struct SendPointsForm {
    pub recipient: String,
    pub amount: String,
    pub focus: SendField,
    /// Last validation or transfer error.
    pub error: Option<String>,
    sender: AccountId,
    balance: Decimal,
    in_flight: Option<Ticket>,
}

impl SendPointsForm {
    pub fn new(sender: AccountId, balance: Decimal) -> Self {
        Self {
            recipient: String::new(),
            amount: String::new(),
            focus: SendField::Recipient,
            error: None,
            sender,
            balance,
            in_flight: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            SendField::Recipient => &mut self.recipient,
            SendField::Amount => &mut self.amount,
        }
    }

    /// Appends a typed character to the focused field. Ignored while submitting.
    pub fn push_char(&mut self, c: char) {
        if self.is_submitting() {
            return;
        }
        let accept = match self.focus {
            SendField::Recipient => c.is_ascii_hexdigit(),
            SendField::Amount => c.is_ascii_digit() || c == '.',
        };
        if accept {
            self.focused_mut().push(c);
            self.error = None;
        }
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.focused_mut().pop();
        self.error = None;
    }

    pub fn switch_focus(&mut self) {
        if !self.is_submitting() {
            self.focus = self.focus.toggle();
        }
    }

    /// Validates the inputs into a transfer request.
    pub fn validate(&self) -> Result<Transfer, String> {
        let recipient = AccountId::parse(&self.recipient)
            .ok_or_else(|| "Recipient must be a 64-character hex account number".to_string())?;
        if recipient == self.sender {
            return Err("Cannot send points to the same account".to_string());
        }
        let amount = Decimal::from_str(self.amount.trim())
            .map_err(|_| "Amount must be a number".to_string())?;
        if amount <= Decimal::ZERO {
            return Err("Amount must be greater than zero".to_string());
        }
        if amount > self.balance {
            return Err(format!("Amount exceeds balance ({:.2})", self.balance));
        }
        Ok(Transfer {
            sender: self.sender.clone(),
            recipient,
            amount,
        })
    }

    /// Starts submission `ticket` if the inputs are valid.
    ///
    /// Returns the transfer to dispatch, or `None` when already submitting
    /// or when validation failed (the error is stored on the form).
    pub fn begin_submit(&mut self, ticket: Ticket) -> Option<Transfer> {
        if self.is_submitting() {
            return None;
        }
        match self.validate() {
            Ok(transfer) => {
                self.in_flight = Some(ticket);
                self.error = None;
                Some(transfer)
            }
            Err(msg) => {
                self.error = Some(msg);
                None
            }
        }
    }

    /// Asks to close the modal. Refused while a transfer is in flight.
    pub fn request_close(&self) -> SendPointsOutcome {
        if self.is_submitting() {
            SendPointsOutcome::Keep
        } else {
            SendPointsOutcome::Close
        }
    }

    /// Applies the completion of transfer `ticket`.
    pub fn finish(&mut self, ticket: Ticket, result: Result<(), ServiceError>) -> SendPointsOutcome {
        if self.in_flight != Some(ticket) {
            return SendPointsOutcome::Keep;
        }
        self.in_flight = None;
        match result {
            Ok(()) => SendPointsOutcome::Close,
            Err(e) => {
                self.error = Some(e.to_string());
                SendPointsOutcome::Keep
            }
        }
    }
}
