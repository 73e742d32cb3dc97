//! Main application state and update loop

use std::sync::{Arc, Mutex};

use eframe::egui;

use banco_transfer_adapters::{
    HttpAccountService, SystemClock, TokioRedirectScheduler, TransferClientConfig,
};
use banco_transfer_core::{
    AccountId, PortError, Route, TransferController, TransferOutcome, TransferRequest,
    TransferServicePort,
};

use crate::nav::SharedNavigator;
use crate::ui;

type Controller = TransferController<
    Arc<HttpAccountService>,
    SharedNavigator,
    TokioRedirectScheduler<SharedNavigator>,
    SystemClock,
>;

/// Settled result of an in-flight transfer call, filled in by the worker
/// thread and drained by the update loop.
type SubmitSlot = Arc<Mutex<Option<(TransferRequest, Result<TransferOutcome, PortError>)>>>;

enum View {
    Transfer,
    Dashboard(AccountId),
}

pub struct App {
    controller: Controller,
    service: Arc<HttpAccountService>,
    navigator: SharedNavigator,
    egui_ctx: egui::Context,
    view: View,
    /// Source account input, standing in for the route parameter of the
    /// web client this replaces.
    source_account: String,
    submit_result: SubmitSlot,
    // Keeps the redirect scheduler's runtime alive for the app's lifetime.
    _runtime: tokio::runtime::Runtime,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: TransferClientConfig,
    ) -> Result<Self, PortError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| PortError::Transport(format!("failed to start runtime: {e}")))?;

        let navigator = SharedNavigator::new(cc.egui_ctx.clone());
        let service = Arc::new(HttpAccountService::new(&config)?);
        let scheduler =
            TokioRedirectScheduler::new(runtime.handle().clone(), Arc::new(navigator.clone()));
        let controller = TransferController::new(
            Arc::clone(&service),
            navigator.clone(),
            scheduler,
            SystemClock,
            config.redirect_delay_ms,
        );

        Ok(Self {
            controller,
            service,
            navigator,
            egui_ctx: cc.egui_ctx.clone(),
            view: View::Transfer,
            source_account: String::new(),
            submit_result: Arc::new(Mutex::new(None)),
            _runtime: runtime,
        })
    }

    /// Dispatch the validated request on a worker thread; the result lands
    /// in the submit slot and settles on the next frame.
    fn trigger_submit(&mut self) {
        let Some(request) = self.controller.begin_submit() else {
            return;
        };
        let service = Arc::clone(&self.service);
        let slot = Arc::clone(&self.submit_result);
        let ctx = self.egui_ctx.clone();
        std::thread::spawn(move || {
            let result = service.transfer_money(&request);
            if let Ok(mut guard) = slot.lock() {
                *guard = Some((request, result));
            }
            ctx.request_repaint();
        });
    }

    fn check_submit_result(&mut self) {
        let settled = self
            .submit_result
            .lock()
            .ok()
            .and_then(|mut guard| guard.take());
        if let Some((request, result)) = settled {
            self.controller.finish_submit(&request, result);
        }
    }

    fn check_requested_route(&mut self) {
        if let Some(route) = self.navigator.take_requested() {
            match route {
                Route::Dashboard(account) => self.view = View::Dashboard(account),
            }
        }
    }

    fn render_transfer_view(&mut self, ui: &mut egui::Ui) {
        ui::styled_heading(ui, "Bank Transfer");
        ui.label("Send money to another account.");
        ui.add_space(15.0);

        if let Some(error) = self.controller.form.error.clone() {
            ui::error_message(ui, &error);
            ui.add_space(5.0);
        }
        if let Some(success) = self.controller.form.success.clone() {
            ui::success_message(ui, &success);
            ui.add_space(5.0);
        }

        egui::Grid::new("transfer_form")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Destination account:");
                ui::account_input(ui, &mut self.controller.form.destination_account, "0000");
                ui.end_row();

                ui.label("Amount:");
                let mut amount_display = self.controller.form.amount_display();
                let response = ui::amount_input(ui, &mut amount_display);
                if response.changed() {
                    self.controller.form.set_amount_display(&amount_display);
                }
                ui.end_row();

                ui.label("Description:");
                ui::text_input(
                    ui,
                    &mut self.controller.form.description,
                    "Transfer to account",
                );
                ui.end_row();
            });

        ui.add_space(15.0);

        let submitting = self.controller.form.is_submitting();
        ui.horizontal(|ui| {
            if ui::secondary_button(ui, "Cancel").clicked() {
                self.controller.cancel();
            }
            let label = if submitting { "Processing..." } else { "Transfer" };
            if ui::primary_button_enabled(ui, label, !submitting).clicked() {
                self.trigger_submit();
            }
            if submitting {
                ui.spinner();
            }
        });
    }

    fn render_dashboard_view(&mut self, ui: &mut egui::Ui, account: &AccountId) {
        ui::styled_heading(ui, "Dashboard");
        ui.label(format!("Account {account}"));

        if let Some(receipt) = self.controller.last_receipt() {
            ui::section_header(ui, "Last transfer");
            ui.label(format!(
                "Sent ${} to account {}",
                receipt.amount, receipt.destination_account
            ));
        }

        ui.add_space(15.0);
        if ui::secondary_button(ui, "New transfer").clicked() {
            self.view = View::Transfer;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        // Settle any in-flight transfer, then any requested navigation.
        self.check_submit_result();
        self.check_requested_route();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("🏦 Banco Express")
                        .size(22.0)
                        .color(egui::Color32::from_rgb(0, 150, 190)),
                );
                ui.add_space(30.0);
                ui.separator();
                ui.add_space(10.0);
                ui.label("Your account:");
                let response = ui::account_input(ui, &mut self.source_account, "0000");
                if response.changed() {
                    let trimmed = self.source_account.trim();
                    self.controller.set_source_account(if trimmed.is_empty() {
                        None
                    } else {
                        Some(AccountId::new(trimmed))
                    });
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                let dashboard_account = match &self.view {
                    View::Transfer => None,
                    View::Dashboard(account) => Some(account.clone()),
                };
                match dashboard_account {
                    None => self.render_transfer_view(ui),
                    Some(account) => self.render_dashboard_view(ui, &account),
                }
                ui.add_space(20.0);
            });
        });
    }
}
