#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use banco_transfer_core::{
    AccountId, ClockPort, NavigatorPort, PortError, RedirectHandle, RedirectSchedulerPort, Route,
    TransferController, TransferOutcome, TransferRequest, TransferServicePort,
};

pub const FIXED_NOW_MS: u64 = 1_739_750_400_000;

#[derive(Debug, Clone)]
pub enum CannedResponse {
    Completed,
    Declined(&'static str),
    Fault(&'static str),
}

pub struct StubService {
    canned: CannedResponse,
    pub calls: Mutex<Vec<TransferRequest>>,
}

impl StubService {
    pub fn completed() -> Arc<Self> {
        Arc::new(Self {
            canned: CannedResponse::Completed,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn declined(reason: &'static str) -> Arc<Self> {
        Arc::new(Self {
            canned: CannedResponse::Declined(reason),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn faulted(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            canned: CannedResponse::Fault(message),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("service calls lock").len()
    }
}

impl TransferServicePort for StubService {
    fn transfer_money(&self, request: &TransferRequest) -> Result<TransferOutcome, PortError> {
        self.calls
            .lock()
            .expect("service calls lock")
            .push(request.clone());
        match self.canned {
            CannedResponse::Completed => Ok(TransferOutcome::Completed),
            CannedResponse::Declined(reason) => Ok(TransferOutcome::Declined {
                reason: reason.to_owned(),
            }),
            CannedResponse::Fault(message) => Err(PortError::Transport(message.to_owned())),
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn visited_routes(&self) -> Vec<Route> {
        self.visited.lock().expect("navigator lock").clone()
    }
}

impl NavigatorPort for RecordingNavigator {
    fn navigate_to(&self, route: &Route) -> Result<(), PortError> {
        self.visited
            .lock()
            .expect("navigator lock")
            .push(route.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledRedirect {
    pub route: Route,
    pub delay_ms: u64,
}

#[derive(Default)]
pub struct ManualScheduler {
    pub scheduled: Mutex<Vec<ScheduledRedirect>>,
    pub cancelled: Arc<Mutex<usize>>,
}

impl ManualScheduler {
    pub fn scheduled_redirects(&self) -> Vec<ScheduledRedirect> {
        self.scheduled.lock().expect("scheduler lock").clone()
    }

    pub fn cancelled_count(&self) -> usize {
        *self.cancelled.lock().expect("cancelled lock")
    }
}

impl RedirectSchedulerPort for ManualScheduler {
    fn schedule(&self, route: Route, delay_ms: u64) -> Result<RedirectHandle, PortError> {
        self.scheduled
            .lock()
            .expect("scheduler lock")
            .push(ScheduledRedirect { route, delay_ms });
        let cancelled = Arc::clone(&self.cancelled);
        Ok(RedirectHandle::new(move || {
            *cancelled.lock().expect("cancelled lock") += 1;
        }))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock;

impl ClockPort for FixedClock {
    fn now_ms(&self) -> Result<u64, PortError> {
        Ok(FIXED_NOW_MS)
    }
}

pub type TestController = TransferController<
    Arc<StubService>,
    Arc<RecordingNavigator>,
    Arc<ManualScheduler>,
    FixedClock,
>;

pub struct TestHarness {
    pub controller: TestController,
    pub service: Arc<StubService>,
    pub navigator: Arc<RecordingNavigator>,
    pub scheduler: Arc<ManualScheduler>,
}

pub fn harness_with(service: Arc<StubService>) -> TestHarness {
    let navigator = Arc::new(RecordingNavigator::default());
    let scheduler = Arc::new(ManualScheduler::default());
    let mut controller = TransferController::new(
        Arc::clone(&service),
        Arc::clone(&navigator),
        Arc::clone(&scheduler),
        FixedClock,
        banco_transfer_core::DEFAULT_REDIRECT_DELAY_MS,
    );
    controller.set_source_account(Some(AccountId::new("42")));
    TestHarness {
        controller,
        service,
        navigator,
        scheduler,
    }
}

pub fn fill_valid_form(harness: &mut TestHarness) {
    harness.controller.form.set_destination("1234");
    harness.controller.form.set_amount_display("$100.50");
    harness.controller.form.set_description("rent");
}
