//! Transfer form controller: validates input, drives the transfer service
//! port, maps its result to form state, and schedules the post-success
//! dashboard redirect.

use crate::domain::{
    AccountId, Amount, Route, TimestampMs, TransferOutcome, TransferReceipt, TransferRequest,
};
use crate::form::{
    TransferFormState, MSG_INVALID_AMOUNT, MSG_MISSING_FIELDS, MSG_TRANSFER_RETRY,
};
use crate::ports::{
    ClockPort, NavigatorPort, PortError, RedirectHandle, RedirectSchedulerPort,
    TransferServicePort,
};
use crate::state_machine::{submit_transition, SubmitAction};

pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2_000;

pub struct TransferController<S, N, R, C>
where
    S: TransferServicePort,
    N: NavigatorPort,
    R: RedirectSchedulerPort,
    C: ClockPort,
{
    service: S,
    navigator: N,
    scheduler: R,
    clock: C,
    redirect_delay_ms: u64,
    source_account: Option<AccountId>,
    pub form: TransferFormState,
    last_receipt: Option<TransferReceipt>,
    pending_redirect: Option<RedirectHandle>,
}

impl<S, N, R, C> TransferController<S, N, R, C>
where
    S: TransferServicePort,
    N: NavigatorPort,
    R: RedirectSchedulerPort,
    C: ClockPort,
{
    pub fn new(service: S, navigator: N, scheduler: R, clock: C, redirect_delay_ms: u64) -> Self {
        Self {
            service,
            navigator,
            scheduler,
            clock,
            redirect_delay_ms,
            source_account: None,
            form: TransferFormState::default(),
            last_receipt: None,
            pending_redirect: None,
        }
    }

    /// The source account from the current navigation context.
    pub fn source_account(&self) -> Option<&AccountId> {
        self.source_account.as_ref()
    }

    pub fn set_source_account(&mut self, account: Option<AccountId>) {
        self.source_account = account;
    }

    pub fn last_receipt(&self) -> Option<&TransferReceipt> {
        self.last_receipt.as_ref()
    }

    pub fn has_pending_redirect(&self) -> bool {
        self.pending_redirect.is_some()
    }

    /// Validate the form and, if everything holds, flip to Submitting and
    /// hand back the request to dispatch. `None` means the attempt was
    /// rejected locally and the form state already carries the message.
    ///
    /// Splitting submission in two keeps the service call (the only
    /// suspension point) outside the controller, so a UI can run it off
    /// its event loop and settle with [`finish_submit`].
    ///
    /// [`finish_submit`]: Self::finish_submit
    pub fn begin_submit(&mut self) -> Option<TransferRequest> {
        // Duplicate submissions are also prevented by disabling the submit
        // control, but the guard must hold without a UI.
        if self.form.is_submitting() {
            return None;
        }

        let destination = self.form.destination_account.trim();
        let amount_raw = self.form.amount.trim();
        if destination.is_empty() || amount_raw.is_empty() {
            self.form.error = Some(MSG_MISSING_FIELDS.to_owned());
            return None;
        }

        let amount = match Amount::parse(amount_raw) {
            Ok(amount) => amount,
            Err(error) => {
                tracing::debug!(%error, input = amount_raw, "rejected amount input");
                self.form.error = Some(MSG_INVALID_AMOUNT.to_owned());
                return None;
            }
        };

        let Some(source) = self.source_account.clone() else {
            // Fatal local error: the user gets the generic message, the
            // cause goes to diagnostics only.
            tracing::error!("submit without a source account in the navigation context");
            self.form.error = Some(MSG_TRANSFER_RETRY.to_owned());
            return None;
        };

        let request = TransferRequest {
            source_account: source,
            destination_account: AccountId::new(destination),
            amount,
            description: self.form.description.clone(),
        };

        match submit_transition(self.form.submit_state, SubmitAction::Begin) {
            Ok((next, _)) => self.form.submit_state = next,
            Err(error) => {
                tracing::warn!(%error, "submit re-entered");
                return None;
            }
        }
        self.form.clear_messages();
        tracing::info!(
            destination = %request.destination_account,
            amount = %request.amount,
            "dispatching transfer"
        );
        Some(request)
    }

    /// Settle an in-flight submission with the service's result. The
    /// submitting flag drops back to Idle on every branch, exactly once.
    pub fn finish_submit(
        &mut self,
        request: &TransferRequest,
        result: Result<TransferOutcome, PortError>,
    ) {
        match result {
            Ok(TransferOutcome::Completed) => self.apply_success(request),
            Ok(TransferOutcome::Declined { reason }) => {
                tracing::info!(%reason, "transfer declined by account service");
                self.form.error = Some(reason);
            }
            Err(fault) => {
                tracing::error!(error = %fault, "transfer call failed");
                self.form.error = Some(MSG_TRANSFER_RETRY.to_owned());
            }
        }

        match submit_transition(self.form.submit_state, SubmitAction::Finish) {
            Ok((next, _)) => self.form.submit_state = next,
            Err(error) => tracing::warn!(%error, "settled a submit that was not in flight"),
        }
    }

    /// Full submission flow through the owned service port.
    pub fn submit(&mut self) {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let result = self.service.transfer_money(&request);
        self.finish_submit(&request, result);
    }

    /// Navigate back to the dashboard for the current source account.
    /// No state validation; entered field values are left as they are.
    pub fn cancel(&mut self) {
        let Some(source) = self.source_account.clone() else {
            return;
        };
        if let Err(error) = self.navigator.navigate_to(&Route::Dashboard(source)) {
            tracing::warn!(%error, "cancel navigation failed");
        }
    }

    /// Cancel any pending scheduled redirect. Called on drop so a disposed
    /// form never navigates.
    pub fn close(&mut self) {
        if let Some(handle) = self.pending_redirect.take() {
            handle.cancel();
        }
    }

    fn apply_success(&mut self, request: &TransferRequest) {
        self.form.success = Some(format!(
            "Transferred ${} to account {}",
            request.amount, request.destination_account
        ));
        self.form.clear_inputs();

        let completed_at = self.clock.now_ms().map(TimestampMs).unwrap_or(TimestampMs(0));
        self.last_receipt = Some(TransferReceipt {
            destination_account: request.destination_account.clone(),
            amount: request.amount,
            completed_at_ms: completed_at,
        });

        // A fresh redirect supersedes any still-pending one.
        if let Some(previous) = self.pending_redirect.take() {
            previous.cancel();
        }
        let route = Route::Dashboard(request.source_account.clone());
        match self.scheduler.schedule(route, self.redirect_delay_ms) {
            Ok(handle) => self.pending_redirect = Some(handle),
            Err(error) => tracing::warn!(%error, "failed to schedule dashboard redirect"),
        }
    }
}

impl<S, N, R, C> Drop for TransferController<S, N, R, C>
where
    S: TransferServicePort,
    N: NavigatorPort,
    R: RedirectSchedulerPort,
    C: ClockPort,
{
    fn drop(&mut self) {
        self.close();
    }
}
