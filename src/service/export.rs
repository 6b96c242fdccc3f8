//! Rendering a list as a downloadable text or CSV file.

use crate::domain::export::{ExportFile, ExportFormat};
use crate::domain::{Item, List, ListId};
use crate::error::Result;
use crate::port::outbound::store::ListStore;

use super::lifecycle::list_not_found;

/// Renders list exports.
pub struct Export<S> {
    store: S,
}

impl<S: ListStore> Export<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Render a list in the requested format.
    pub async fn render(&self, list_id: ListId, format: ExportFormat) -> Result<ExportFile> {
        let list = self
            .store
            .find_list(list_id)
            .await?
            .ok_or_else(|| list_not_found(list_id))?;
        let items = self.store.list_items(list_id).await?;
        Ok(render_file(&list, &items, format))
    }
}

fn render_file(list: &List, items: &[Item], format: ExportFormat) -> ExportFile {
    let filename = format!("{}.{}", base_name(list), format.extension());
    let content = match format {
        ExportFormat::Csv => render_csv(items),
        ExportFormat::Txt => render_txt(&list.name, items),
    };
    ExportFile {
        filename,
        media_type: format.media_type(),
        content,
    }
}

/// `lista-{id}-{slug}` with the name lowercased and spaces dashed;
/// `itens` when the name slugs down to nothing.
fn base_name(list: &List) -> String {
    let slug = list.name.trim().to_lowercase().replace(' ', "-");
    let slug = if slug.is_empty() {
        "itens".to_owned()
    } else {
        slug
    };
    format!("lista-{}-{}", list.id, slug)
}

fn render_txt(name: &str, items: &[Item]) -> String {
    let mut lines = vec![format!("Lista: {name}"), String::new()];
    for (index, item) in items.iter().enumerate() {
        let marker = if item.purchased { "[x]" } else { "[ ]" };
        lines.push(format!(
            "{:02}. {} {} (x{})",
            index + 1,
            marker,
            item.name,
            item.quantity
        ));
    }
    lines.join("\n")
}

fn render_csv(items: &[Item]) -> String {
    let mut lines = vec!["name,quantity,purchased".to_owned()];
    for item in items {
        let name = item.name.replace('"', "\"\"");
        lines.push(format!(
            "\"{}\",{},{}",
            name,
            item.quantity,
            i32::from(item.purchased)
        ));
    }
    lines.join("\n")
}
