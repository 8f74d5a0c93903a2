//! AI analysis and publishing commands.

use std::path::{Path, PathBuf};

use clap::Args;

use designi_admin::assistant::{AiAnalysis, Assistant, ImagePayload, analyze_or_fallback};
use designi_admin::config::AdminConfig;
use designi_admin::upload::{UploadDraft, UploadError, UploadService};
use designi_storefront::error::AppError;
use designi_storefront::models::DesignResource;
use designi_storefront::state::AppState;
use designi_storefront::store::KeyValueStore;

use super::{CliError, catalog, file_name, read_file};

/// Arguments of `designi publish`.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// JPEG preview
    #[arg(long)]
    pub jpg: PathBuf,

    /// PSD source (only its name is stored)
    #[arg(long)]
    pub psd: PathBuf,

    /// Title, overriding the AI suggestion
    #[arg(long)]
    pub title: Option<String>,

    /// Description, overriding the AI suggestion
    #[arg(long)]
    pub description: Option<String>,

    /// Tag, repeatable; replaces the suggested tags
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Mark the resource as premium
    #[arg(long)]
    pub premium: bool,

    /// Skip the AI suggestion
    #[arg(long)]
    pub no_ai: bool,
}

/// Render a suggestion for the terminal.
pub fn render_analysis(analysis: &AiAnalysis) -> String {
    format!(
        "título:    {}\ndescrição: {}\ntags:      {}",
        analysis.title,
        analysis.description,
        analysis.tags.join(", ")
    )
}

/// Apply command-line overrides on top of whatever the draft holds.
fn apply_overrides(draft: &mut UploadDraft, args: &PublishArgs) {
    if let Some(title) = &args.title {
        draft.title.clone_from(title);
    }
    if let Some(description) = &args.description {
        draft.description.clone_from(description);
    }
    if !args.tags.is_empty() {
        draft.clear_tags();
        for tag in &args.tags {
            draft.add_tag(tag);
        }
    }
    draft.is_premium = args.premium;
}

/// `designi analyze`
#[allow(clippy::print_stdout)]
pub async fn analyze(jpg: &Path, config: &AdminConfig) -> Result<AiAnalysis, CliError> {
    let image = ImagePayload::from_jpeg_bytes(&read_file(jpg)?);
    let assistant = Assistant::from_config(config);
    let analysis = analyze_or_fallback(&assistant, &image).await;
    println!("{}", render_analysis(&analysis));
    Ok(analysis)
}

/// `designi publish`
#[allow(clippy::print_stdout)]
pub async fn publish<S: KeyValueStore>(
    state: &AppState<S>,
    args: PublishArgs,
    config: &AdminConfig,
) -> Result<DesignResource, CliError> {
    let author = state
        .session()
        .current_user()
        .ok_or_else(|| AppError::Unauthorized("no session".to_string()))?;
    if !author.is_admin() {
        return Err(UploadError::Forbidden.into());
    }

    let assistant = if args.no_ai {
        Assistant::Offline
    } else {
        Assistant::from_config(config)
    };
    let service = UploadService::new(state.store(), &assistant, config.upload_delay);

    let mut draft = UploadDraft::new();
    draft.attach_preview(file_name(&args.jpg), &read_file(&args.jpg)?);
    // the PSD must exist even though only its name is kept
    std::fs::metadata(&args.psd).map_err(|source| CliError::ReadFile {
        path: args.psd.clone(),
        source,
    })?;
    draft.attach_psd(file_name(&args.psd));

    if !args.no_ai {
        println!("Analisando imagem...");
        service.analyze(&mut draft).await;
    }
    apply_overrides(&mut draft, &args);

    println!("Salvando...");
    let resource = service.publish(&author, &draft).await?;
    println!("Recurso publicado.");
    println!("{}", catalog::render_card(&resource));
    Ok(resource)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use designi_storefront::config::EnvReader;
    use designi_storefront::store::MemoryStore;

    use super::*;

    fn args() -> PublishArgs {
        PublishArgs {
            jpg: PathBuf::from("capa.jpg"),
            psd: PathBuf::from("capa.psd"),
            title: None,
            description: None,
            tags: Vec::new(),
            premium: false,
            no_ai: false,
        }
    }

    #[test]
    fn test_overrides_keep_suggestion_when_absent() {
        let mut draft = UploadDraft::new();
        draft.apply_analysis(AiAnalysis::fallback());
        apply_overrides(&mut draft, &args());
        assert_eq!(draft.title, "Novo Design Criativo");
        assert_eq!(draft.tags(), ["design", "criativo", "psd"]);
    }

    #[test]
    fn test_overrides_replace_fields() {
        let mut draft = UploadDraft::new();
        draft.apply_analysis(AiAnalysis::fallback());
        let args = PublishArgs {
            title: Some("Capa de Revista".to_string()),
            tags: vec!["revista".to_string(), " revista ".to_string(), "capa".to_string()],
            premium: true,
            ..args()
        };
        apply_overrides(&mut draft, &args);
        assert_eq!(draft.title, "Capa de Revista");
        assert_eq!(draft.description, "Um recurso de design de alta qualidade pronto para uso.");
        assert_eq!(draft.tags(), ["revista", "capa"]);
        assert!(draft.is_premium);
    }

    #[test]
    fn test_render_analysis() {
        let text = render_analysis(&AiAnalysis::fallback());
        assert!(text.starts_with("título:    Novo Design Criativo\n"));
        assert!(text.ends_with("design, criativo, psd"));
    }

    fn placeholder_key_config() -> AdminConfig {
        let lookup = |key: &str| match key {
            "GEMINI_API_KEY" => Some("changeme-please".to_string()),
            "DESIGNI_UPLOAD_DELAY_MS" => Some("0".to_string()),
            _ => None,
        };
        AdminConfig::from_reader(&EnvReader::new(&lookup)).unwrap()
    }

    fn files(dir: &Path) -> (PathBuf, PathBuf) {
        let jpg = dir.join("capa.jpg");
        let psd = dir.join("capa.psd");
        std::fs::write(&jpg, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        std::fs::write(&psd, b"8BPS").unwrap();
        (jpg, psd)
    }

    #[tokio::test]
    async fn test_analyze_with_placeholder_key_yields_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let (jpg, _) = files(dir.path());
        let analysis = analyze(&jpg, &placeholder_key_config()).await.unwrap();
        assert_eq!(analysis, AiAnalysis::fallback());
    }

    #[tokio::test]
    async fn test_publish_without_ai_ignores_placeholder_key() {
        let dir = tempfile::tempdir().unwrap();
        let (jpg, psd) = files(dir.path());
        let state = AppState::new(MemoryStore::new());
        state.auth().sign_in("admin@designi.com", "(00) 00000-0000").unwrap();

        let args = PublishArgs {
            jpg,
            psd,
            title: Some("Capa de Revista".to_string()),
            no_ai: true,
            ..args()
        };
        let resource = publish(&state, args, &placeholder_key_config()).await.unwrap();
        assert_eq!(resource.title, "Capa de Revista");
        assert_eq!(resource.psd_file_name, "capa.psd");
        assert!(resource.tags.is_empty());
        assert_eq!(state.catalog().list_resources().len(), 4);
    }

    #[tokio::test]
    async fn test_publish_with_placeholder_key_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let (jpg, psd) = files(dir.path());
        let state = AppState::new(MemoryStore::new());
        state.auth().sign_in("admin@designi.com", "(00) 00000-0000").unwrap();

        let args = PublishArgs { jpg, psd, ..args() };
        let resource = publish(&state, args, &placeholder_key_config()).await.unwrap();
        assert_eq!(resource.title, "Novo Design Criativo");
        assert_eq!(resource.tags, ["design", "criativo", "psd"]);
    }

    #[tokio::test]
    async fn test_non_admin_rejected_before_reading_files() {
        let state = AppState::new(MemoryStore::new());
        state
            .auth()
            .sign_up("Ana", "ana@designi.com", "(11) 98765-4321")
            .unwrap();

        // the default paths do not exist; the role check comes first
        let err = publish(&state, args(), &AdminConfig::default()).await.unwrap_err();
        assert!(matches!(err, CliError::Upload(UploadError::Forbidden)));
    }
}
