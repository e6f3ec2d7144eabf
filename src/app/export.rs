use super::{App, ExportFormat, InputMode, Screen};
use crate::render;
use anyhow::Result;
use chrono::Local;
use tracing::{info, warn};

impl App {
    pub fn start_export(&mut self) {
        if self.screen != Screen::Results {
            return;
        }
        self.input_mode = InputMode::ExportMenu;
        self.export_menu_selection = 0;
    }

    pub fn cancel_export(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_export_format(&mut self) {
        self.export_format = match self.export_format {
            ExportFormat::Html => ExportFormat::Json,
            ExportFormat::Json => ExportFormat::Html,
        };
    }

    pub fn export_menu_up(&mut self) {
        if self.export_menu_selection > 0 {
            self.export_menu_selection -= 1;
        }
    }

    pub fn export_menu_down(&mut self) {
        if self.export_menu_selection < 1 {
            self.export_menu_selection += 1;
        }
    }

    pub fn confirm_export(&mut self) -> Result<()> {
        if self.export_menu_selection == 1 {
            let result = self.perform_export();
            self.input_mode = InputMode::Normal;
            match result {
                Ok(path) => {
                    info!(path = %path, "exported results");
                    self.status_message = Some(format!("Exported to {}", path));
                }
                Err(e) => {
                    warn!(error = %e, "export failed");
                    self.status_message = Some(format!("Export failed: {}", e));
                }
            }
        }
        Ok(())
    }

    fn perform_export(&self) -> Result<String> {
        use std::fs;
        use std::io::Write;

        let dir = self.get_export_dir()?;
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let filepath = dir.join(self.export_file_name(&timestamp));
        let content = self.export_content()?;

        let mut file = fs::File::create(&filepath)?;
        file.write_all(content.as_bytes())?;

        Ok(filepath.to_string_lossy().to_string())
    }

    fn get_export_dir(&self) -> Result<std::path::PathBuf> {
        if let Some(home) = dirs::home_dir() {
            let downloads = home.join("Downloads");
            if downloads.exists() {
                return Ok(downloads);
            }
            return Ok(home);
        }
        Ok(std::env::current_dir()?)
    }

    pub fn export_file_name(&self, timestamp: &str) -> String {
        let ext = match self.export_format {
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        };
        format!(
            "keywords_{}_{}_{}.{}",
            self.selection.topic, self.selection.period_value, timestamp, ext
        )
    }

    /// Serialized form of the current results in the selected format.
    pub fn export_content(&self) -> Result<String> {
        Ok(match self.export_format {
            ExportFormat::Html => render::to_html_document(&self.table, &self.selection.to_string()),
            ExportFormat::Json => serde_json::to_string_pretty(&self.results)?,
        })
    }
}
