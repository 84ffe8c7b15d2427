//! Split-bill form state
//!
//! Amounts are kept as the text the user typed so partially entered
//! numbers ("12.") survive between keystrokes. Each edit is parsed before it
//! is accepted.

use tracing::debug;

use crate::core::friend::FriendId;
use crate::error::{Result, SplitError};

/// Who paid the bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    You,
    Friend,
}

impl Payer {
    pub fn toggle(self) -> Self {
        match self {
            Payer::You => Payer::Friend,
            Payer::Friend => Payer::You,
        }
    }
}

/// Input field of the split-bill form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitBillField {
    #[default]
    Bill,
    PaidByYou,
    Payer,
}

impl SplitBillField {
    pub fn next(self) -> Self {
        match self {
            SplitBillField::Bill => SplitBillField::PaidByYou,
            SplitBillField::PaidByYou => SplitBillField::Payer,
            SplitBillField::Payer => SplitBillField::Bill,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SplitBillField::Bill => SplitBillField::Payer,
            SplitBillField::PaidByYou => SplitBillField::Bill,
            SplitBillField::Payer => SplitBillField::PaidByYou,
        }
    }
}

/// Bill inputs for one selected friend
#[derive(Debug, Clone)]
pub struct SplitBillForm {
    friend_id: FriendId,
    bill: String,
    paid_by_you: String,
    pub payer: Payer,
    pub field: SplitBillField,
}

impl SplitBillForm {
    pub fn new(friend_id: FriendId) -> Self {
        Self {
            friend_id,
            bill: String::new(),
            paid_by_you: String::new(),
            payer: Payer::default(),
            field: SplitBillField::default(),
        }
    }

    /// The friend this form splits with
    pub fn friend_id(&self) -> &FriendId {
        &self.friend_id
    }

    pub fn bill_input(&self) -> &str {
        &self.bill
    }

    pub fn paid_by_you_input(&self) -> &str {
        &self.paid_by_you
    }

    pub fn bill(&self) -> Option<f64> {
        parse_amount(&self.bill)
    }

    pub fn paid_by_you(&self) -> Option<f64> {
        parse_amount(&self.paid_by_you)
    }

    /// Replace the bill input. Returns false if the text is not an amount.
    pub fn set_bill(&mut self, input: &str) -> bool {
        if !is_amount_input(input) {
            return false;
        }
        self.bill = input.to_string();
        true
    }

    /// Replace your share of the bill
    ///
    /// Rejected, keeping the previous value, when the text is not an amount
    /// or exceeds the bill. An empty bill counts as zero.
    pub fn set_paid_by_you(&mut self, input: &str) -> bool {
        if !is_amount_input(input) {
            return false;
        }
        let paid = parse_amount(input).unwrap_or(0.0);
        if paid > self.bill().unwrap_or(0.0) {
            debug!(paid, bill = ?self.bill(), "paid amount exceeds bill, keeping previous");
            return false;
        }
        self.paid_by_you = input.to_string();
        true
    }

    /// Append a character to the focused amount field
    pub fn push_char(&mut self, c: char) -> bool {
        match self.field {
            SplitBillField::Bill => {
                let next = format!("{}{}", self.bill, c);
                self.set_bill(&next)
            }
            SplitBillField::PaidByYou => {
                let next = format!("{}{}", self.paid_by_you, c);
                self.set_paid_by_you(&next)
            }
            SplitBillField::Payer => false,
        }
    }

    /// Delete the last character of the focused amount field
    pub fn pop_char(&mut self) -> bool {
        match self.field {
            SplitBillField::Bill => {
                let mut next = self.bill.clone();
                next.pop();
                self.set_bill(&next)
            }
            SplitBillField::PaidByYou => {
                let mut next = self.paid_by_you.clone();
                next.pop();
                self.set_paid_by_you(&next)
            }
            SplitBillField::Payer => false,
        }
    }

    pub fn toggle_payer(&mut self) {
        self.payer = self.payer.toggle();
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn previous_field(&mut self) {
        self.field = self.field.previous();
    }

    /// The friend's share of the bill, shown once a bill is entered
    pub fn friend_expense(&self) -> Option<f64> {
        let bill = self.bill().filter(|b| *b != 0.0)?;
        Some(bill - self.paid_by_you().unwrap_or(0.0))
    }

    /// Compute the balance change for the friend
    ///
    /// When the friend pays, the delta is minus your share regardless of
    /// the bill total.
    pub fn submit(&self) -> Result<f64> {
        let bill = self
            .bill()
            .filter(|b| *b != 0.0)
            .ok_or(SplitError::MissingField("bill"))?;
        let paid = self
            .paid_by_you()
            .filter(|p| *p != 0.0)
            .ok_or(SplitError::MissingField("your expense"))?;

        let delta = match self.payer {
            Payer::You => bill - paid,
            Payer::Friend => -paid,
        };
        debug!(friend = %self.friend_id, bill, paid, payer = ?self.payer, delta, "split computed");
        Ok(delta)
    }
}

/// Parse a typed amount; empty or incomplete input has no value
fn parse_amount(input: &str) -> Option<f64> {
    if input.is_empty() {
        return None;
    }
    input.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Digits with at most one decimal point, small enough to stay finite
fn is_amount_input(input: &str) -> bool {
    input.chars().all(|c| c.is_ascii_digit() || c == '.')
        && input.chars().filter(|c| *c == '.').count() <= 1
        && !input.parse::<f64>().is_ok_and(|v| v.is_infinite())
}
