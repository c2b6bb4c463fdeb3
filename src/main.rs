use clap::Parser;
use fraud_url_check::core::{Notification, NotificationKind, RiskCategory};
use fraud_url_check::domain::messages::MENU_ITEM_ID;
use fraud_url_check::utils::error::ErrorSeverity;
use fraud_url_check::utils::{logger, validation::Validate};
use fraud_url_check::{
    ClassifierError, CliConfig, ConsoleNotifier, ContextMenuTrigger, InMemoryMenus,
    PopupTrigger, PopupView, PredictionClient, StaticTabProvider, TriggerKind,
};

const EXIT_CHECK_FAILED: i32 = 1;
const EXIT_THREAT: i32 = 4;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Fraud website detection client started");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let client = match PredictionClient::new(&config) {
        Ok(client) => client,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Using prediction endpoint {}", client.endpoint());

    let tab = cli.tab();
    let exit_code = match cli.trigger {
        TriggerKind::Menu => {
            let trigger = ContextMenuTrigger::new(client, ConsoleNotifier, config.messages.clone());
            let mut menus = InMemoryMenus::new();
            trigger.register(&mut menus)?;

            match trigger.handle_click(MENU_ITEM_ID, Some(&tab)).await {
                Ok(Some(notification)) => notification_exit_code(&notification, cli.fail_on_threat),
                Ok(None) => 0,
                Err(e) => exit_with(&e),
            }
        }
        TriggerKind::Popup => {
            let tabs = StaticTabProvider::new(Some(tab));
            let popup = PopupTrigger::open(&tabs, client, config.messages.clone()).await;
            println!("🔗 {}", popup.view().await.url_label);

            let view = popup.check().await;
            render_view(&view);
            view_exit_code(&view, cli.fail_on_threat)
        }
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

fn render_view(view: &PopupView) {
    if let Some(prediction) = &view.prediction {
        println!("✅ Prediction: {}", prediction);
    }
    if let Some(error) = &view.error {
        eprintln!("❌ {}", error);
    }
}

fn threat_exit_code(label: &str, fail_on_threat: bool) -> i32 {
    let is_threat = RiskCategory::from_label(label).is_some_and(|c| c.is_threat());
    if fail_on_threat && is_threat {
        tracing::warn!("⚠️ {} flagged as a threat", label);
        EXIT_THREAT
    } else {
        0
    }
}

fn notification_exit_code(notification: &Notification, fail_on_threat: bool) -> i32 {
    match notification.kind {
        NotificationKind::Prediction => threat_exit_code(&notification.message, fail_on_threat),
        _ => EXIT_CHECK_FAILED,
    }
}

fn view_exit_code(view: &PopupView, fail_on_threat: bool) -> i32 {
    match &view.prediction {
        Some(label) => threat_exit_code(label, fail_on_threat),
        None => EXIT_CHECK_FAILED,
    }
}

fn exit_with(e: &ClassifierError) -> ! {
    tracing::error!(
        "❌ Fraud check failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
