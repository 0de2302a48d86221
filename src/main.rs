use anyhow::{anyhow, Context};
use clap::Parser;
use vplanit_rsvp::config::{Command, FormArgs};
use vplanit_rsvp::core::{ConfigProvider, Field, KeyValueStore, Severity, ViewPort};
use vplanit_rsvp::utils::{logger, validation::Validate};
use vplanit_rsvp::{
    CliConfig, FileStore, FormSettings, MemoryView, Navigator, RecordingNotifier, RsvpError,
    RsvpForm, Theme, ThemePreference, TomlConfig, Trigger, TriggerTable,
};

type CliForm = RsvpForm<MemoryView, FileStore, RecordingNotifier>;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };

    // 初始化日誌
    if cli.log_json || config.logging.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting vplanit-rsvp");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }
    if let Some(store) = &cli.store {
        config.storage.path = store.clone();
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let store = FileStore::new(config.store_path());
    tracing::debug!("Using store file {}", store.path().display());

    match cli.command {
        Command::Show => {
            let mut form = build_form(&config, store);
            let draft = form.init();
            flush_notices(&mut form);
            match draft {
                Some(draft) => println!("{}", serde_json::to_string_pretty(&draft)?),
                None => println!("No draft stored under '{}'", config.storage_key()),
            }
        }
        Command::Save(args) => run_form(&config, store, args, Trigger::SaveDraft)?,
        Command::Submit(args) => run_form(&config, store, args, Trigger::Submit)?,
        Command::Clear => {
            let mut store = store;
            store.remove(config.storage_key())?;
            println!("✅ Draft cleared");
        }
        Command::Navigate { screens, back } => {
            let mut navigator = Navigator::new();
            for id in &screens {
                if !navigator.show_screen(id) {
                    tracing::warn!("Unknown screen '{}', staying on {}", id, navigator.current());
                }
            }
            for _ in 0..back {
                navigator.go_back();
            }

            let history: Vec<&str> = navigator.state().history().iter().map(|s| s.id()).collect();
            println!("{} ({})", navigator.current(), navigator.header_title());
            println!("history: {}", history.join(" > "));
        }
        Command::Theme { toggle, prefer } => {
            let preferred: Theme = prefer.parse().map_err(|e: String| anyhow!(e))?;
            let mut theme = ThemePreference::load(store, preferred)?;
            if toggle {
                theme.toggle()?;
            }
            println!("{}", theme.current());
        }
    }

    Ok(())
}

fn build_form(config: &TomlConfig, store: FileStore) -> CliForm {
    let view = MemoryView::new(config.events().iter().cloned())
        .with_field(Field::FamilyName, config.family_name())
        .with_field(Field::ContactPhone, config.contact_phone());

    RsvpForm::new(
        view,
        store,
        RecordingNotifier::new(),
        FormSettings::from_config(config),
    )
}

fn run_form(
    config: &TomlConfig,
    store: FileStore,
    args: FormArgs,
    trigger: Trigger,
) -> anyhow::Result<()> {
    let mut form = build_form(config, store);
    form.init();
    apply_form_args(&mut form, args)?;

    let table = TriggerTable::new();
    let outcome = table.dispatch(&mut form, trigger);
    flush_notices(&mut form);

    match outcome {
        Ok(()) => {
            tracing::info!("✅ {:?} completed", trigger);
            Ok(())
        }
        Err(e @ RsvpError::ValidationError { .. }) => {
            tracing::error!("❌ {}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn apply_form_args(form: &mut CliForm, args: FormArgs) -> anyhow::Result<()> {
    let view = form.view_mut();

    let text_fields = [
        (Field::FamilyName, args.family_name),
        (Field::ContactPhone, args.phone),
        (Field::City, args.city),
        (Field::Date, args.date),
        (Field::Time, args.time),
        (Field::Transport, args.transport),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            view.set_field(field, &value);
        }
    }

    if !args.events.is_empty() {
        let offered: Vec<String> = view.events().into_iter().map(|(name, _)| name).collect();
        if let Some(unknown) = args.events.iter().find(|e| !offered.contains(e)) {
            return Err(RsvpError::InvalidConfigValueError {
                field: "--event".to_string(),
                value: unknown.clone(),
                reason: format!("Not one of: {}", offered.join(", ")),
            }
            .into());
        }
        for name in &offered {
            view.set_event_checked(name, args.events.contains(name));
        }
    }

    if !args.guests.is_empty() {
        let restored: Vec<_> = form.view().rows().into_iter().map(|(id, _)| id).collect();
        for guest in &args.guests {
            form.add_member(Some(&guest.0.to_member()));
        }
        for id in restored {
            form.remove_member(id)?;
        }
    }

    Ok(())
}

fn flush_notices(form: &mut CliForm) {
    for (severity, message) in form.notifier_mut().drain() {
        match severity {
            Severity::Info => println!("✅ {}", message),
            Severity::Error => eprintln!("❌ {}", message),
        }
    }
}
