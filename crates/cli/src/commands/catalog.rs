//! Catalog browsing commands.

use std::fmt::Write;

use designi_core::{Phone, ResourceId};
use designi_storefront::error::AppError;
use designi_storefront::models::DesignResource;
use designi_storefront::state::AppState;
use designi_storefront::store::KeyValueStore;

use super::CliError;

/// One catalog card per line: id, title, first tags, download label.
pub fn render_card(resource: &DesignResource) -> String {
    let premium = if resource.is_premium { " ★" } else { "" };
    format!(
        "{:<15} {}{} [{}] {}",
        resource.id.as_str(),
        resource.title,
        premium,
        resource.card_tags().join(", "),
        resource.download_label()
    )
}

/// Full detail view of a resource.
pub fn render_detail(resource: &DesignResource) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", resource.title);
    let _ = writeln!(out, "  id:        {}", resource.id);
    let _ = writeln!(out, "  descrição: {}", resource.description);
    let _ = writeln!(out, "  tags:      {}", resource.tags.join(", "));
    let _ = writeln!(out, "  arquivo:   {}", resource.psd_file_name);
    let _ = writeln!(
        out,
        "  enviado:   {} por {}",
        resource.upload_date.format("%d/%m/%Y %H:%M"),
        resource.author_id
    );
    let _ = writeln!(out, "  downloads: {}", resource.downloads);
    let image = resource.image_src();
    if image.starts_with("data:") {
        let _ = writeln!(out, "  imagem:    (embutida, {} bytes)", image.len());
    } else {
        let _ = writeln!(out, "  imagem:    {image}");
    }
    let _ = write!(out, "  [{}]", resource.download_label());
    out
}

/// `designi list`
#[allow(clippy::print_stdout)]
pub fn list<S: KeyValueStore>(state: &AppState<S>, search: Option<&str>) {
    let catalog = state.catalog();
    let resources = match search {
        Some(term) => catalog.search(term),
        None => catalog.list_resources(),
    };

    if resources.is_empty() {
        println!("Nenhum recurso encontrado.");
        return;
    }
    for resource in &resources {
        println!("{}", render_card(resource));
    }
}

/// `designi show`
#[allow(clippy::print_stdout)]
pub fn show<S: KeyValueStore>(state: &AppState<S>, id: &str) -> Result<(), CliError> {
    let resource = state
        .catalog()
        .get(&ResourceId::new(id))
        .ok_or_else(|| AppError::NotFound(format!("recurso {id}")))?;
    println!("{}", render_detail(&resource));
    Ok(())
}

/// `designi phone-mask`
#[allow(clippy::print_stdout)]
pub fn phone_mask(input: &str) {
    println!("{}", Phone::mask(input));
}
