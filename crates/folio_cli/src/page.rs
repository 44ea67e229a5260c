//! Page file editing
//!
//! Each invocation loads a JSON page file, runs one mutation through
//! [`DocumentModel`], and lets [`PageFile`] persist whatever the model commits.

use anyhow::{Context, Result};
use clap::Subcommand;
use folio_doc::{metadata_from, ClockIds, DocPage, DocumentModel, PageCommit, PageUpdate};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

#[derive(Subcommand, Debug)]
pub enum PageCommand {
    /// Create an empty page file
    New {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Page id (defaults to the file stem)
        #[arg(long)]
        id: Option<String>,
        #[arg(long, default_value = "Untitled")]
        title: String,
    },

    /// Append a block and print its id
    Add {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Block type tag (h1, paragraph, color, ...)
        #[arg(value_name = "TYPE")]
        block_type: String,
        /// Block metadata as a JSON object
        #[arg(long, value_name = "JSON")]
        data: Option<String>,
    },

    /// Replace a block's content
    Update {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "CONTENT")]
        content: String,
    },

    /// Remove a block
    Remove {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Move a block to a position (clamped to the end)
    Move {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Set the page title
    Title {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Ingest a drag-and-drop payload, e.g. '{"type":"icon","data":{"iconName":"Star"}}'
    Drop {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "PAYLOAD")]
        payload: String,
    },

    /// Print the page as JSON
    Show {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// A page on disk that stamps `lastModified` and rewrites itself on every commit
pub struct PageFile {
    path: PathBuf,
    stored: DocPage,
    commits: usize,
    failure: Option<anyhow::Error>,
}

impl PageFile {
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page {}", path.display()))?;
        let stored = DocPage::from_json_str(&content)
            .with_context(|| format!("Failed to parse page {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            stored,
            commits: 0,
            failure: None,
        })
    }

    /// Write a fresh page; refuses to overwrite an existing file.
    pub fn create(path: &Path, id: &str, title: &str) -> Result<DocPage> {
        if path.exists() {
            anyhow::bail!("{} already exists", path.display());
        }
        let mut page = DocPage::new(id, title);
        page.last_modified = now_millis();
        write_page(path, &page)?;
        Ok(page)
    }

    pub fn page(&self) -> &DocPage {
        &self.stored
    }

    /// Surface any write failure and report how many commits were persisted.
    pub fn finish(self) -> Result<usize> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.commits),
        }
    }
}

impl PageCommit for PageFile {
    fn commit(&mut self, page_id: &str, update: PageUpdate) {
        if self.failure.is_some() {
            return;
        }
        if page_id != self.stored.id {
            warn!(page_id, stored = %self.stored.id, "commit for a different page ignored");
            return;
        }

        update
            .with_last_modified(now_millis())
            .apply_to(&mut self.stored);
        match write_page(&self.path, &self.stored) {
            Ok(()) => {
                self.commits += 1;
                debug!(path = %self.path.display(), "page written");
            }
            Err(err) => self.failure = Some(err),
        }
    }
}

fn write_page(path: &Path, page: &DocPage) -> Result<()> {
    let json = page.to_json_string().context("Failed to serialize page")?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Run a page command; returns what to print on stdout.
pub fn run(command: PageCommand, id_prefix: &str) -> Result<String> {
    let (path, edit) = match command {
        PageCommand::New { file, id, title } => {
            let id = id.unwrap_or_else(|| {
                file.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "page".to_string())
            });
            let page = PageFile::create(&file, &id, &title)?;
            info!(page = %page.id, path = %file.display(), "created page");
            return Ok(page.id);
        }
        PageCommand::Show { file } => {
            let page = PageFile::open(&file)?;
            return page
                .page()
                .to_json_string()
                .context("Failed to serialize page");
        }
        PageCommand::Add {
            file,
            block_type,
            data,
        } => {
            let metadata = data.as_deref().map(parse_metadata).transpose()?;
            (file, Edit::Add(block_type, metadata))
        }
        PageCommand::Update { file, id, content } => (file, Edit::Update(id, content)),
        PageCommand::Remove { file, id } => (file, Edit::Remove(id)),
        PageCommand::Move { file, id, index } => (file, Edit::Move(id, index)),
        PageCommand::Title { file, title } => (file, Edit::Title(title)),
        PageCommand::Drop { file, payload } => (file, Edit::Drop(payload)),
    };

    let page_file = PageFile::open(&path)?;
    let current = page_file.page().clone();
    let mut model = DocumentModel::with_ids(page_file, ClockIds::new(id_prefix));

    let output = match edit {
        Edit::Add(block_type, metadata) => model.add_block(&current, block_type, metadata).1,
        Edit::Update(id, content) => {
            model.update_block_content(&current, &id, &content);
            String::new()
        }
        Edit::Remove(id) => {
            model.remove_block(&current, &id);
            String::new()
        }
        Edit::Move(id, index) => {
            model.move_block(&current, &id, index);
            String::new()
        }
        Edit::Title(title) => {
            model.set_title(&current, &title);
            String::new()
        }
        Edit::Drop(payload) => {
            let next = model.ingest_drop(&current, &payload)?;
            next.blocks.last().map(|b| b.id.clone()).unwrap_or_default()
        }
    };

    let commits = model.into_commit().finish()?;
    if commits == 0 {
        info!(path = %path.display(), "page unchanged");
    }
    Ok(output)
}

enum Edit {
    Add(String, Option<folio_doc::Metadata>),
    Update(String, String),
    Remove(String),
    Move(String, usize),
    Title(String),
    Drop(String),
}

fn parse_metadata(raw: &str) -> Result<folio_doc::Metadata> {
    let value: serde_json::Value = serde_json::from_str(raw).context("--data is not JSON")?;
    metadata_from(value).context("--data must be a JSON object")
}
