use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use vox_backend::client::HttpBackend;
use vox_backend::contracts::ExpectedOutput;
use vox_backend::contracts::FormField;
use vox_backend::contracts::JobInput;
use vox_backend::contracts::JobRequest;
use vox_backend::contracts::JobStatus;
use vox_backend::executor::JobContext;
use vox_backend::executor::JobExecutor;
use vox_backend::executor::JobPayload;
use vox_backend::executor::SimulatedBackend;
use vox_core::actions::AppAction;
use vox_core::catalog::find_language;
use vox_core::catalog::find_voice;
use vox_core::catalog::ExecutionMode;
use vox_core::catalog::FeatureCatalog;
use vox_core::catalog::FeatureId;
use vox_core::catalog::FeatureInput;
use vox_core::catalog::FeatureOutput;
use vox_core::catalog::FeatureSpec;
use vox_core::catalog::LANGUAGES;
use vox_core::catalog::VOICE_PRESETS;
use vox_core::config::Config;
use vox_core::document::ACCENT_COLOR_PROPERTY;
use vox_core::document::PRIMARY_COLOR_PROPERTY;
use vox_core::persistence::ProfileStore;
use vox_core::state::Project;
use vox_core::state::ProjectPatch;
use vox_core::state::ProjectStatus;
use vox_core::state::ThemeMode;
use vox_core::store::AppStore;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_help();
        return Ok(());
    };

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_help();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("vox {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "features" => {
            print_features();
            Ok(())
        }
        "run" => run_feature(parse_run_args(args.collect::<Vec<_>>())?),
        "settings" => apply_settings(parse_settings_args(args.collect::<Vec<_>>())?),
        _ => {
            print_help();
            Err(format!("unknown command: {command}").into())
        }
    }
}

#[derive(Debug, Default)]
struct RunArgs {
    feature: String,
    input: Option<PathBuf>,
    text: Option<String>,
    from: Option<String>,
    to: Option<String>,
    voice: Option<String>,
    mode: Option<ExecutionMode>,
    out: Option<PathBuf>,
    profile: Option<PathBuf>,
}

fn parse_run_args(args: Vec<String>) -> Result<RunArgs, Box<dyn std::error::Error>> {
    let mut parsed = RunArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--feature" => {
                parsed.feature = required_value(&args, i, "--feature")?;
                i += 2;
            }
            "--input" => {
                parsed.input = Some(PathBuf::from(required_value(&args, i, "--input")?));
                i += 2;
            }
            "--text" => {
                parsed.text = Some(required_value(&args, i, "--text")?);
                i += 2;
            }
            "--from" => {
                parsed.from = Some(required_value(&args, i, "--from")?);
                i += 2;
            }
            "--to" => {
                parsed.to = Some(required_value(&args, i, "--to")?);
                i += 2;
            }
            "--voice" => {
                parsed.voice = Some(required_value(&args, i, "--voice")?);
                i += 2;
            }
            "--out" => {
                parsed.out = Some(PathBuf::from(required_value(&args, i, "--out")?));
                i += 2;
            }
            "--profile" => {
                parsed.profile = Some(PathBuf::from(required_value(&args, i, "--profile")?));
                i += 2;
            }
            "--live" => {
                parsed.mode = Some(ExecutionMode::Live);
                i += 1;
            }
            "--simulate" => {
                parsed.mode = Some(ExecutionMode::Simulated);
                i += 1;
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    if parsed.feature.is_empty() {
        return Err("run requires --feature SLUG (see `vox features`)".into());
    }
    Ok(parsed)
}

#[derive(Debug, Default)]
struct SettingsArgs {
    theme: Option<ThemeMode>,
    language: Option<String>,
    profile: Option<PathBuf>,
}

fn parse_settings_args(args: Vec<String>) -> Result<SettingsArgs, Box<dyn std::error::Error>> {
    let mut parsed = SettingsArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--theme" => {
                parsed.theme = Some(match required_value(&args, i, "--theme")?.as_str() {
                    "light" => ThemeMode::Light,
                    "dark" => ThemeMode::Dark,
                    other => return Err(format!("unknown theme mode: {other}").into()),
                });
                i += 2;
            }
            "--language" => {
                parsed.language = Some(required_value(&args, i, "--language")?);
                i += 2;
            }
            "--profile" => {
                parsed.profile = Some(PathBuf::from(required_value(&args, i, "--profile")?));
                i += 2;
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    Ok(parsed)
}

fn required_value(
    args: &[String],
    i: usize,
    flag: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn default_profile_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("vox"))
        .unwrap_or_else(|| PathBuf::from(".vox"))
}

fn load_config(dir: &Path) -> Config {
    let path = dir.join("config.toml");
    let Ok(raw) = fs::read_to_string(&path) else {
        return Config::default();
    };
    match toml::from_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("failed to parse {}: {err}", path.display());
            Config::default()
        }
    }
}

fn open_store(
    explicit_profile: Option<PathBuf>,
) -> Result<(AppStore, Config), Box<dyn std::error::Error>> {
    let base = explicit_profile.clone().unwrap_or_else(default_profile_dir);
    let config = load_config(&base);
    // An explicit --profile wins; otherwise the config file may point
    // storage somewhere else entirely.
    let dir = explicit_profile
        .or_else(|| config.storage.profile_dir.clone())
        .unwrap_or(base);
    let profile = ProfileStore::open(dir)?;
    let mut store = AppStore::new(profile);
    store.bootstrap();
    Ok((store, config))
}

fn run_feature(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let spec = FeatureCatalog::find(&args.feature)
        .ok_or_else(|| format!("unknown feature: {} (see `vox features`)", args.feature))?;

    let source = args.from.clone().unwrap_or_else(|| "en".to_string());
    let target = args.to.clone().unwrap_or_else(|| "en".to_string());
    for code in [source.as_str(), target.as_str()] {
        if find_language(code).is_none() {
            return Err(format!("unsupported language: {code}").into());
        }
    }
    if let Some(voice) = args.voice.as_deref() {
        if find_voice(voice).is_none() {
            return Err(format!("unknown voice preset: {voice}").into());
        }
    }

    let (mut store, config) = open_store(args.profile.clone())?;
    if let Some(user) = &store.state().user {
        println!(
            "signed in as {} ({} plan, {} credits)",
            user.username,
            user.plan.label(),
            user.credits
        );
    }

    let started_ms = chrono::Utc::now().timestamp_millis();
    let project_id = format!("{}-{started_ms}", spec.id.as_str());
    store.dispatch(AppAction::AddProject(Project {
        id: project_id.clone(),
        name: spec.title.to_string(),
        kind: spec.id.as_str().to_string(),
        status: ProjectStatus::Draft,
        created_at_ms: started_ms,
        updated_at_ms: started_ms,
        thumbnail: None,
        settings: Some(serde_json::json!({
            "sourceLanguage": source,
            "targetLanguage": target,
            "voice": args.voice,
        })),
    }));

    let request = build_request(spec, &args, &project_id, &source, &target)?;

    store.dispatch(AppAction::SetLoading(true));
    store.dispatch(AppAction::UpdateProject {
        id: project_id.clone(),
        patch: ProjectPatch {
            status: Some(ProjectStatus::Processing),
            updated_at_ms: Some(chrono::Utc::now().timestamp_millis()),
            ..ProjectPatch::default()
        },
    });

    let mode = args.mode.unwrap_or(spec.default_mode);
    let context = JobContext {
        origin: &config.backend.origin,
    };
    println!("{} ({} mode)...", spec.title, mode.label());
    let outcome = match mode {
        ExecutionMode::Simulated => SimulatedBackend::default().execute(request, &context),
        ExecutionMode::Live => {
            HttpBackend::new(Duration::from_secs(config.backend.timeout_secs))?
                .execute(request, &context)
        }
    };

    store.dispatch(AppAction::SetLoading(false));
    let finished = match outcome.result.status {
        JobStatus::Succeeded => ProjectStatus::Completed,
        JobStatus::Failed => ProjectStatus::Failed,
    };
    store.dispatch(AppAction::UpdateProject {
        id: project_id.clone(),
        patch: ProjectPatch {
            status: Some(finished),
            updated_at_ms: Some(chrono::Utc::now().timestamp_millis()),
            ..ProjectPatch::default()
        },
    });

    match outcome.payload {
        Some(payload) => deliver_payload(spec, payload, args.out.as_deref(), &project_id)?,
        None => {
            // Failure stays local to this run; nothing else in the session
            // is touched.
            if let Some(message) = &outcome.result.message {
                println!("{message}");
            }
        }
    }

    let project = store.state().project(&project_id).cloned();
    if let Some(project) = project {
        println!("project {}: {}", project.id, project.status.label());
    }
    Ok(())
}

fn build_request(
    spec: &FeatureSpec,
    args: &RunArgs,
    project_id: &str,
    source: &str,
    target: &str,
) -> Result<JobRequest, Box<dyn std::error::Error>> {
    let input = match spec.input {
        FeatureInput::Text => {
            let text = args
                .text
                .clone()
                .ok_or_else(|| format!("--text is required for {}", spec.id.as_str()))?;
            JobInput::Text {
                body: text_body(spec.id, text, target, args.voice.as_deref()),
            }
        }
        FeatureInput::Video
        | FeatureInput::Audio
        | FeatureInput::Image
        | FeatureInput::Document => {
            let path = args
                .input
                .clone()
                .ok_or_else(|| format!("--input is required for {}", spec.id.as_str()))?;
            let (file_field, fields) = upload_fields(spec.id, source, target, args.voice.as_deref());
            JobInput::Upload {
                path,
                file_field: file_field.to_string(),
                fields,
            }
        }
    };

    Ok(JobRequest {
        project_id: project_id.to_string(),
        feature_id: spec.id.as_str().to_string(),
        endpoint: spec.endpoint.to_string(),
        output: match spec.output {
            FeatureOutput::Json => ExpectedOutput::Json,
            FeatureOutput::Media => ExpectedOutput::Media,
        },
        input,
    })
}

fn text_body(
    id: FeatureId,
    text: String,
    target: &str,
    voice: Option<&str>,
) -> serde_json::Value {
    match id {
        FeatureId::TextToSpeech => serde_json::json!({
            "text": text,
            "language": target,
            "voice_type": voice.unwrap_or("female"),
        }),
        FeatureId::TextTranslate => serde_json::json!({
            "text": text,
            "dest_lang": target,
        }),
        FeatureId::TextToImage => serde_json::json!({ "prompt": text }),
        _ => serde_json::json!({ "text": text }),
    }
}

fn upload_fields(
    id: FeatureId,
    source: &str,
    target: &str,
    voice: Option<&str>,
) -> (&'static str, Vec<FormField>) {
    fn field(name: &str, value: &str) -> FormField {
        FormField {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    match id {
        FeatureId::VideoDubbing => (
            "file",
            vec![
                field("sourceLanguage", source),
                field("targetLanguage", target),
                field("voiceType", voice.unwrap_or("Male")),
            ],
        ),
        FeatureId::AudioToText => (
            "audio",
            vec![field("src_lang", source), field("dest_lang", target)],
        ),
        _ => (
            "file",
            vec![field("src_lang", source), field("dest_lang", target)],
        ),
    }
}

fn deliver_payload(
    spec: &FeatureSpec,
    payload: JobPayload,
    out: Option<&Path>,
    project_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match payload {
        JobPayload::Text { text, accuracy } => {
            println!("{text}");
            if let Some(accuracy) = accuracy {
                println!("estimated accuracy: {accuracy}%");
            }
        }
        JobPayload::ImageUrl(url) => {
            println!("image: {url}");
        }
        JobPayload::Media { bytes, mime } => {
            let path = out.map(Path::to_path_buf).unwrap_or_else(|| {
                PathBuf::from(format!("{project_id}.{}", media_extension(&mime)))
            });
            fs::write(&path, &bytes)?;
            println!(
                "wrote {} bytes ({mime}) from {} to {}",
                bytes.len(),
                spec.title,
                path.display()
            );
        }
    }
    Ok(())
}

fn media_extension(mime: &str) -> &'static str {
    match mime {
        "audio/wav" => "wav",
        "audio/mpeg" => "mp3",
        "video/mp4" => "mp4",
        _ => "bin",
    }
}

fn apply_settings(args: SettingsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, _config) = open_store(args.profile.clone())?;

    if let Some(mode) = args.theme {
        let mut theme = store.state().settings.theme.clone();
        theme.mode = mode;
        store.dispatch(AppAction::SetTheme(theme));
    }
    if let Some(language) = args.language {
        if find_language(&language).is_none() {
            return Err(format!("unsupported language: {language}").into());
        }
        store.dispatch(AppAction::SetLanguage(language));
    }

    println!("profile: {}", store.profile().dir().display());
    let settings = &store.state().settings;
    println!("language: {}", settings.language);
    println!("theme: {}", settings.theme.mode.label());
    println!("dark document: {}", store.document().is_dark());
    if let Some(primary) = store.document().custom_property(PRIMARY_COLOR_PROPERTY) {
        println!("{PRIMARY_COLOR_PROPERTY}: {primary}");
    }
    if let Some(accent) = store.document().custom_property(ACCENT_COLOR_PROPERTY) {
        println!("{ACCENT_COLOR_PROPERTY}: {accent}");
    }
    Ok(())
}

fn print_features() {
    println!("features:");
    for spec in FeatureCatalog::list() {
        println!(
            "  {:<22} {:<9} in:{:<6} {}",
            spec.id.as_str(),
            spec.default_mode.label(),
            spec.input.label(),
            spec.description
        );
    }
    println!("languages:");
    for language in &LANGUAGES {
        println!("  {} {:<4} {}", language.flag, language.code, language.name);
    }
    println!("voices:");
    for voice in &VOICE_PRESETS {
        println!("  {:<8} {} ({})", voice.id, voice.name, voice.accent);
    }
}

fn print_help() {
    println!("vox {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  vox features");
    println!("  vox run --feature SLUG [--input PATH] [--text STRING]");
    println!("          [--from CODE] [--to CODE] [--voice ID]");
    println!("          [--live | --simulate] [--out PATH] [--profile PATH]");
    println!("  vox settings [--theme light|dark] [--language CODE] [--profile PATH]");
    println!("  vox --help");
    println!("  vox --version");
}
