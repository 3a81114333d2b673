use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use auragold_core::analytics::{invested_breakdown, invested_totals, FilterCriteria, MetalFilter};
use auragold_core::constants::MANUAL_ENTRY_METAL_TYPES;
use auragold_core::dashboard::{DashboardView, RecordPoller};
use auragold_core::invoices::{InvoiceUpload, ManualInvoiceForm};
use auragold_core::session::SignupForm;
use auragold_core::utils::time_utils::evaluation_now;
use auragold_core::valuation::{Holdings, MetalHolding};
use tokio::sync::mpsc;

use crate::cli::{Command, DashboardArgs, InvoicesCommand, ManualInvoiceArgs};
use crate::main_lib::AppContext;
use crate::render;

pub async fn run(command: Command, ctx: &mut AppContext) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => login(ctx, &email, &password).await,
        Command::Signup {
            username,
            email,
            password,
            confirm_password,
        } => {
            let form = SignupForm {
                username,
                email,
                password,
                confirm_password,
            };
            let user = ctx.auth_service.signup(&form).await?;
            println!("Account created for {}. You can now log in.", user.display_name());
            Ok(())
        }
        Command::Invoices(cmd) => invoices(ctx, cmd).await,
        Command::Summary => summary(ctx).await,
        Command::Dashboard(args) => dashboard(ctx, args).await,
    }
}

async fn login(ctx: &mut AppContext, email: &str, password: &str) -> anyhow::Result<()> {
    let user = ctx.auth_service.login(email, password).await?;
    println!("Signed in as {}", user.display_name());
    ctx.session.sign_in(user);
    if let Some(id) = ctx.session.user_id() {
        println!("Set AURA_USER_ID={} to scope later commands to this account.", id);
    }
    Ok(())
}

async fn invoices(ctx: &mut AppContext, cmd: InvoicesCommand) -> anyhow::Result<()> {
    let scope = ctx.session.record_scope();
    match cmd {
        InvoicesCommand::List => {
            let records = ctx.invoice_service.list_invoices(&scope).await?;
            println!("{}", render::invoice_table(&records));
        }
        InvoicesCommand::Delete { id } => {
            let current = ctx.invoice_service.list_invoices(&scope).await?;
            let remaining = ctx.invoice_service.delete_invoice(&id, current).await?;
            println!("Deleted invoice {}. {} remaining.", id, remaining.len());
        }
        InvoicesCommand::Add(args) => {
            if !args.metal.is_empty() && !MANUAL_ENTRY_METAL_TYPES.contains(&args.metal.as_str()) {
                tracing::warn!(
                    "Metal type {} is not one of {:?}; saving it as entered",
                    args.metal,
                    MANUAL_ENTRY_METAL_TYPES
                );
            }
            let form = manual_form(args, ctx.session.user_id());
            let saved = ctx.invoice_service.create_manual_invoice(form).await?;
            println!("Invoice saved.\n{}", render::invoice_line(&saved));
        }
        InvoicesCommand::Upload { file } => {
            let upload = read_upload(&file, ctx.session.user_id()).await?;
            let parsed = ctx.invoice_service.upload_invoice(upload).await?;
            println!("Invoice uploaded and parsed.\n{}", render::invoice_line(&parsed));
        }
    }
    Ok(())
}

fn manual_form(args: ManualInvoiceArgs, user_id: Option<&str>) -> ManualInvoiceForm {
    ManualInvoiceForm {
        user_id: user_id.map(str::to_string),
        invoice_date: args.date,
        metal_type: args.metal,
        amount_without_gst: args.amount,
        gst_amount: args.gst,
    }
}

async fn read_upload(path: &Path, user_id: Option<&str>) -> anyhow::Result<InvoiceUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("{} is not a file", path.display()))?;

    Ok(InvoiceUpload {
        file_name,
        bytes,
        user_id: user_id.map(str::to_string),
    })
}

async fn summary(ctx: &mut AppContext) -> anyhow::Result<()> {
    let records = ctx
        .invoice_service
        .list_invoices(&ctx.session.record_scope())
        .await?;
    let totals = invested_totals(&records);
    let slices = invested_breakdown(&totals);
    let name = ctx
        .session
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "User".to_string());

    println!("{}", render::investment_summary(&name, &totals, &slices));
    Ok(())
}

fn dashboard_inputs(args: &DashboardArgs) -> anyhow::Result<(FilterCriteria, Holdings)> {
    let metal: MetalFilter = args.metal.parse().map_err(|e: String| anyhow!(e))?;
    let criteria = FilterCriteria::from_inputs(&args.from, &args.to, metal);
    let holdings = Holdings {
        gold: MetalHolding::from_inputs(&args.gold_grams, &args.gold_rate),
        silver: MetalHolding::from_inputs(&args.silver_grams, &args.silver_rate),
    };
    Ok((criteria, holdings))
}

async fn dashboard(ctx: &mut AppContext, args: DashboardArgs) -> anyhow::Result<()> {
    let (criteria, holdings) = dashboard_inputs(&args)?;
    let mut view = DashboardView::new();
    view.set_criteria(criteria);
    view.set_holdings(holdings);

    if !args.watch {
        let result = ctx
            .invoice_service
            .list_invoices(&ctx.session.record_scope())
            .await;
        view.apply_result(result);
        println!("{}", render::dashboard(&view.snapshot(evaluation_now())));
        return Ok(());
    }

    let mut poller = RecordPoller::new(
        Arc::clone(&ctx.record_source),
        ctx.session.record_scope(),
        ctx.config.poll_interval,
    );
    let (tx, mut rx) = mpsc::unbounded_channel();
    let generation = poller.start(tx);
    view.activate(generation);
    tracing::info!(
        "Watching invoices every {:?}; press Ctrl-C to stop",
        ctx.config.poll_interval
    );

    loop {
        tokio::select! {
            outcome = rx.recv() => match outcome {
                Some(outcome) => {
                    if view.apply(outcome) {
                        println!("{}\n", render::dashboard(&view.snapshot(evaluation_now())));
                    }
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopping dashboard");
                break;
            }
        }
    }

    poller.stop();
    view.deactivate();
    Ok(())
}
