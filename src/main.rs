use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use riskpay::application::workflow::Workflow;
use riskpay::config;
use riskpay::domain::draft::TransactionDraft;
use riskpay::domain::ports::{RiskService, RiskServiceBox};
use riskpay::domain::transaction::TransactionRequest;
use riskpay::error::WorkflowError;
use riskpay::infrastructure::http::RiskApiClient;
use riskpay::interfaces::console;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Payment workflow with remote fraud evaluation", long_about = None)]
struct Cli {
    /// Base URL of the risk evaluation service
    #[arg(long, global = true, env = config::API_URL_ENV, default_value = config::DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full payment workflow: details, review, processing, result
    Pay {
        #[arg(long)]
        sender: String,
        #[arg(long)]
        receiver: String,
        /// Amount in USD, e.g. 100.00
        #[arg(long)]
        amount: String,
    },
    /// Evaluate a transaction for fraud risk without paying
    Evaluate {
        #[arg(long)]
        sender: String,
        #[arg(long)]
        receiver: String,
        #[arg(long)]
        amount: String,
    },
    /// List accounts currently flagged by the risk engine
    FlaggedAccounts,
    /// Check the evaluation service's liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("riskpay=info")),
        )
        .init();

    let client = RiskApiClient::new(cli.api_url.clone());

    match cli.command {
        Commands::Pay {
            sender,
            receiver,
            amount,
        } => run_pay(Box::new(client), TransactionDraft::new(sender, receiver, amount)).await,
        Commands::Evaluate {
            sender,
            receiver,
            amount,
        } => {
            let draft = TransactionDraft::new(sender, receiver, amount);
            let request = TransactionRequest::from_draft(&draft)
                .map_err(print_validation)
                .into_diagnostic()?;
            let decision = client.evaluate(&request).await.into_diagnostic()?;
            print!("{}", console::render_evaluation(&decision));
            Ok(())
        }
        Commands::FlaggedAccounts => {
            let accounts = client.flagged_accounts().await.into_diagnostic()?;
            for account in accounts {
                println!("{account}");
            }
            Ok(())
        }
        Commands::Health => {
            let health = client.health().await.into_diagnostic()?;
            println!("{}", health.status);
            Ok(())
        }
    }
}

/// Drives the four-step workflow to completion for one transaction.
async fn run_pay(service: RiskServiceBox, draft: TransactionDraft) -> Result<()> {
    let mut workflow = Workflow::new(service);

    workflow
        .submit_details(draft)
        .map_err(print_validation)
        .into_diagnostic()?;

    print!("{}", console::render_review(&workflow.state().draft));
    println!("Processing payment...");

    match workflow.confirm().await {
        Ok(()) => {
            if let Some(result) = &workflow.state().result {
                print!("{}", console::render_result(result));
            }
            Ok(())
        }
        Err(err) => {
            // The state machine is back at `Details` with the draft intact;
            // the stored message is the one shown to the user.
            if let Some(message) = &workflow.state().error {
                eprintln!("Payment failed: {message}");
                eprintln!("Your transaction details were kept; re-submit to try again.");
            }
            Err(err).into_diagnostic()
        }
    }
}

/// Prints the per-field messages before the error propagates to miette.
fn print_validation(err: WorkflowError) -> WorkflowError {
    if let WorkflowError::Validation(errors) = &err {
        eprint!("{}", console::render_validation_errors(errors));
    }
    err
}
