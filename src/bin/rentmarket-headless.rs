//! Headless marketplace driver for E2E testing.
//!
//! Stands in for the out-of-scope rendering layer: reads `DriverCommand`
//! JSON lines from stdin and writes `DriverResponse` lines to stdout.
//! Logging goes to stderr; stdout is reserved for the protocol.
//!
//! Usage:
//!   rentmarket-headless
//!
//! On startup, emits a `ready` JSON line to stdout, then serves commands
//! until `Shutdown` or EOF.

use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rentmarket::actions::apply_wizard_outcome;
use rentmarket::{
    build_view, sample_products, CatalogViewState, FilterCriteria, ListingDraft, ListingForm,
    NavIntent, Product, Session, SimulatedAuthGateway, SimulatedGeoResolver,
    SimulatedListingGateway, StepOutcome, SubmissionOutcome, SystemTimeProvider, Wizard,
};

// ── IPC types ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(tag = "cmd")]
enum DriverCommand {
    SubmitMobile { mobile: String },
    FederatedLogin,
    SubmitCode { code: String },
    SubmitProfile { name: String, dob: NaiveDate },
    UseCurrentLocation,
    SubmitAddress { address: String },
    Back,
    SkipLogin,
    GetState,
    SetCriteria { criteria: FilterCriteria },
    ToggleSection { key: String },
    GetCatalog,
    Navigate { intent: NavIntent },
    SetListingDraft { draft: ListingDraft },
    AddImage { image: String },
    SubmitListing,
    Shutdown,
}

#[derive(Serialize)]
#[serde(tag = "status")]
enum DriverResponse {
    Ok { data: Option<serde_json::Value> },
    Err { message: String },
}

impl DriverResponse {
    fn ok(data: serde_json::Value) -> Self {
        Self::Ok { data: Some(data) }
    }

    fn empty() -> Self {
        Self::Ok { data: None }
    }

    fn err(message: impl Into<String>) -> Self {
        Self::Err {
            message: message.into(),
        }
    }
}

// ── Driver state ─────────────────────────────────────────────────────

struct Driver {
    session: Session,
    wizard: Wizard<SimulatedAuthGateway, SimulatedGeoResolver>,
    form: ListingForm<SimulatedListingGateway, SystemTimeProvider>,
    view_state: CatalogViewState,
    products: Vec<Product>,
}

impl Driver {
    fn new(cancel: &CancellationToken) -> Self {
        Self {
            session: Session::default(),
            wizard: Wizard::with_cancellation(
                SimulatedAuthGateway::new(),
                SimulatedGeoResolver::new(),
                cancel.child_token(),
            ),
            form: ListingForm::with_cancellation(
                SimulatedListingGateway::new(),
                SystemTimeProvider::new(),
                cancel.child_token(),
            ),
            view_state: CatalogViewState::new(),
            products: sample_products(),
        }
    }

    async fn handle(&mut self, command: DriverCommand) -> Option<DriverResponse> {
        let response = match command {
            DriverCommand::SubmitMobile { mobile } => {
                self.step(self.wizard.submit_mobile(&mobile).await)
            }
            DriverCommand::FederatedLogin => self.step(self.wizard.federated_login().await),
            DriverCommand::SubmitCode { code } => self.step(self.wizard.submit_code(&code).await),
            DriverCommand::SubmitProfile { name, dob } => {
                self.step(self.wizard.submit_profile(&name, Some(dob)).await)
            }
            DriverCommand::UseCurrentLocation => {
                self.step(self.wizard.use_current_location().await)
            }
            DriverCommand::SubmitAddress { address } => {
                self.step(self.wizard.submit_address(&address).await)
            }
            DriverCommand::Back => self.step(self.wizard.back()),
            DriverCommand::SkipLogin => self.step(self.wizard.skip()),
            DriverCommand::GetState => DriverResponse::ok(self.state_json()),
            DriverCommand::SetCriteria { criteria } => {
                self.view_state.criteria = criteria;
                DriverResponse::ok(self.catalog_json())
            }
            DriverCommand::ToggleSection { key } => {
                let expanded = self.view_state.toggle_expanded(&key);
                DriverResponse::ok(json!({ "key": key, "expanded": expanded }))
            }
            DriverCommand::GetCatalog => DriverResponse::ok(self.catalog_json()),
            DriverCommand::Navigate { intent } => {
                if !self.session.is_authenticated() {
                    DriverResponse::err("navigation requires an unlocked session")
                } else {
                    info!(?intent, "navigation requested");
                    DriverResponse::ok(json!({ "intent": intent }))
                }
            }
            DriverCommand::SetListingDraft { draft } => {
                if self.form.edit(|current| *current = draft) {
                    DriverResponse::empty()
                } else {
                    DriverResponse::err("a submission is in flight")
                }
            }
            DriverCommand::AddImage { image } => {
                if self.form.add_image(image) {
                    DriverResponse::ok(json!({ "images": self.form.draft().images.len() }))
                } else {
                    DriverResponse::err("image cap reached or submission in flight")
                }
            }
            DriverCommand::SubmitListing => match self.form.submit().await {
                SubmissionOutcome::Accepted { id } => DriverResponse::ok(json!({ "id": id })),
                SubmissionOutcome::Busy => DriverResponse::err("a submission is in flight"),
                SubmissionOutcome::Invalid(errors) => {
                    DriverResponse::ok(json!({ "invalid": errors }))
                }
                SubmissionOutcome::Failed(message) => DriverResponse::err(message),
                SubmissionOutcome::Cancelled => DriverResponse::err("submission cancelled"),
            },
            DriverCommand::Shutdown => return None,
        };
        Some(response)
    }

    /// Map a wizard outcome to a response, folding terminal stages into
    /// the session as the rendering layer would.
    fn step(&self, outcome: StepOutcome) -> DriverResponse {
        if let StepOutcome::Transitioned(stage) = &outcome {
            if stage.is_terminal() {
                if let Err(e) = apply_wizard_outcome(&self.session, &self.wizard) {
                    return DriverResponse::err(e.to_string());
                }
            }
        }

        let data = match outcome {
            StepOutcome::Transitioned(stage) => json!({ "outcome": "transitioned", "stage": stage }),
            StepOutcome::Updated => json!({ "outcome": "updated", "draft": self.wizard.draft() }),
            StepOutcome::Busy => json!({ "outcome": "busy" }),
            StepOutcome::NotApplicable => json!({ "outcome": "not_applicable" }),
            StepOutcome::Invalid(error) => json!({ "outcome": "invalid", "error": error }),
            StepOutcome::Failed(message) => json!({ "outcome": "failed", "error": message }),
            StepOutcome::Cancelled => json!({ "outcome": "cancelled" }),
        };
        DriverResponse::ok(data)
    }

    fn state_json(&self) -> serde_json::Value {
        json!({
            "stage": self.wizard.stage(),
            "step": self.wizard.stage().step().map(|s| s.number()),
            "pending": self.wizard.is_pending(),
            "error": self.wizard.last_error(),
            "draft": self.wizard.draft(),
            "authenticated": self.session.is_authenticated(),
            "location": self.session.location(),
        })
    }

    fn catalog_json(&self) -> serde_json::Value {
        let view = build_view(&self.products, &self.view_state);
        json!({
            "location": self.session.location(),
            "no_results": view.no_results,
            "sections": view.sections,
        })
    }
}

// ── Entry point ──────────────────────────────────────────────────────

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn write_line(value: &impl Serialize) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cancel = CancellationToken::new();
    let mut driver = Driver::new(&cancel);

    write_line(&json!({
        "event": "ready",
        "location": driver.session.location(),
    }))?;
    info!("headless driver ready");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<DriverCommand>(&line) {
            Err(e) => Some(DriverResponse::err(format!("bad command: {e}"))),
            Ok(command) => driver.handle(command).await,
        };
        match response {
            Some(response) => write_line(&response)?,
            None => {
                write_line(&DriverResponse::empty())?;
                break;
            }
        }
    }

    // Tear down: cancel anything still in flight.
    cancel.cancel();
    info!("headless driver shutting down");
    Ok(())
}
