//! View-local form state for a single transfer form instance.

use crate::state_machine::SubmitState;

pub const CURRENCY_SYMBOL: char = '$';

pub const MSG_MISSING_FIELDS: &str = "Please complete all required fields";
pub const MSG_INVALID_AMOUNT: &str = "Please enter a valid amount";
pub const MSG_TRANSFER_RETRY: &str = "Could not process the transfer. Please try again.";

/// Mutable, view-local data describing current field values and submission
/// status. Created with the controller, destroyed with it, never aliased.
#[derive(Debug, Default)]
pub struct TransferFormState {
    /// Destination account, raw user text.
    pub destination_account: String,
    /// Amount, raw user text with the currency prefix already stripped.
    pub amount: String,
    /// Optional description.
    pub description: String,
    pub submit_state: SubmitState,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl TransferFormState {
    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }

    /// The amount field's visual representation: a leading currency symbol
    /// whenever the stored text is non-empty.
    pub fn amount_display(&self) -> String {
        if self.amount.is_empty() {
            String::new()
        } else {
            format!("{CURRENCY_SYMBOL}{}", self.amount)
        }
    }

    /// Store an edited amount, stripping exactly one leading currency symbol
    /// from the display artifact. "$5$0" stores as "5$0".
    pub fn set_amount_display(&mut self, input: &str) {
        self.amount = input
            .strip_prefix(CURRENCY_SYMBOL)
            .unwrap_or(input)
            .to_owned();
    }

    pub fn set_destination(&mut self, input: &str) {
        self.destination_account = input.to_owned();
    }

    pub fn set_description(&mut self, input: &str) {
        self.description = input.to_owned();
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn clear_inputs(&mut self) {
        self.destination_account.clear();
        self.amount.clear();
        self.description.clear();
    }
}
