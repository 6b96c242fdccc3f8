//! Handler for the `export` command.

use std::path::Path;

use crate::adapter::outbound::sqlite::store::SqliteListStore;
use crate::cli::output;
use crate::domain::export::ExportFormat;
use crate::domain::ListId;
use crate::error::Result;
use crate::service::export::Export;

/// Render a list and write it to a file or stdout.
pub async fn render(
    store: SqliteListStore,
    id: ListId,
    format: &str,
    output_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let format = ExportFormat::parse(format);
    let file = Export::new(store).render(id, format).await?;

    if let Some(path) = output_path {
        std::fs::write(path, &file.content)?;
        if json {
            println!(
                "{}",
                serde_json::json!({ "ok": true, "filename": file.filename, "path": path })
            );
        } else {
            output::ok(&format!("wrote {}", path.display()));
        }
        return Ok(());
    }

    if json {
        println!(
            "{}",
            serde_json::json!({
                "filename": file.filename,
                "media_type": file.media_type,
                "content": file.content,
            })
        );
        return Ok(());
    }
    println!("{}", file.content);
    Ok(())
}
